use crate::utils::text::is_valid_email;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A unit of work fed to the worker pool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub id: u32,
    pub work: i64,
}

/// What a worker produced for one job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobOutcome {
    pub job_id: u32,
    pub sum: i64,
}

/// Summary returned by each demo after it runs to completion.
#[derive(Debug, Clone, Serialize)]
pub struct DemoReport {
    pub demo: String,
    pub items: usize,
    pub elapsed_ms: u64,
    pub started_at: DateTime<Utc>,
}

impl DemoReport {
    pub fn new(demo: &str, items: usize, started_at: DateTime<Utc>) -> Self {
        let elapsed = Utc::now().signed_duration_since(started_at);
        Self {
            demo: demo.to_string(),
            items,
            elapsed_ms: elapsed.num_milliseconds().max(0) as u64,
            started_at,
        }
    }
}

/// Person with sanitizing construction: empty name and negative age
/// are defaulted rather than rejected.
#[derive(Debug, Clone)]
pub struct Person {
    pub name: String,
    age: i32,
}

impl Person {
    pub fn new(name: &str, age: i32) -> Self {
        let name = if name.is_empty() { "Unknown" } else { name };
        Self {
            name: name.to_string(),
            age: age.max(0),
        }
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    pub fn set_age(&mut self, age: i32) {
        if age >= 0 {
            self.age = age;
        }
    }
}

/// User record with the same default-instead-of-fail policy for
/// missing names and malformed emails.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub email: String,
}

impl User {
    pub fn new(id: u32, name: &str, email: &str) -> Self {
        let email = if is_valid_email(email) {
            email
        } else {
            "unknown@example.com"
        };
        let name = if name.is_empty() { "Unknown User" } else { name };
        Self {
            id,
            name: name.to_string(),
            email: email.to_string(),
        }
    }
}

impl std::fmt::Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "User{{id: {}, name: {}, email: {}}}",
            self.id, self.name, self.email
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_person_sanitizes_input() {
        let person = Person::new("", -5);
        assert_eq!(person.name, "Unknown");
        assert_eq!(person.age(), 0);
    }

    #[test]
    fn test_person_set_age_rejects_negative() {
        let mut person = Person::new("John", 30);
        person.set_age(-1);
        assert_eq!(person.age(), 30);
        person.set_age(31);
        assert_eq!(person.age(), 31);
    }

    #[test]
    fn test_user_defaults_bad_email() {
        let user = User::new(1, "", "nope");
        assert_eq!(user.name, "Unknown User");
        assert_eq!(user.email, "unknown@example.com");
        assert_eq!(
            user.to_string(),
            "User{id: 1, name: Unknown User, email: unknown@example.com}"
        );
    }
}
