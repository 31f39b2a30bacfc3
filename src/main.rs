use clap::Parser;
use conlab::utils::{logger, validation::Validate};
use conlab::{build_demos, ConsoleSink, DemoConfig, DemoRunner};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = DemoConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting conlab");
    if config.verbose {
        tracing::debug!("Config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let demos = match build_demos(&config) {
        Ok(demos) => demos,
        Err(e) => {
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    let runner = DemoRunner::new(demos, Arc::new(ConsoleSink));

    match runner.run().await {
        Ok(reports) => {
            if config.json {
                println!("{}", serde_json::to_string_pretty(&reports)?);
            } else {
                println!("✅ {} demo(s) completed", reports.len());
                for report in &reports {
                    println!(
                        "  {} — {} items in {}ms",
                        report.demo, report.items, report.elapsed_ms
                    );
                }
            }
        }
        Err(e) => {
            tracing::error!("❌ Demo run failed: {}", e);
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(2);
        }
    }

    Ok(())
}
