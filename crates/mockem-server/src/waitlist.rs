use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::info;

use mockem_core::redact_token;

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";
pub const INVALID_EMAIL_MESSAGE: &str = "Please provide a valid email address";
pub const JOINED_MESSAGE: &str =
    "Thank you for your interest! We'll notify you when API access becomes available.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaitlistRequest {
    pub email: String,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub use_case: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitlistResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaitlistEntry {
    pub email: String,
    pub company: Option<String>,
    pub use_case: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// In-memory list of people waiting for API access. One entry per email.
pub struct Waitlist {
    email: Regex,
    entries: RwLock<Vec<WaitlistEntry>>,
}

impl Waitlist {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            email: Regex::new(EMAIL_PATTERN)?,
            entries: RwLock::new(Vec::new()),
        })
    }

    pub fn is_valid_email(&self, email: &str) -> bool {
        self.email.is_match(email)
    }

    pub async fn join(&self, request: WaitlistRequest) -> WaitlistResponse {
        if !self.is_valid_email(&request.email) {
            return WaitlistResponse {
                success: false,
                message: INVALID_EMAIL_MESSAGE.to_string(),
            };
        }

        let mut entries = self.entries.write().await;
        if entries.iter().any(|entry| entry.email == request.email) {
            info!(email = %redact_token(&request.email), "waitlist email already registered");
        } else {
            info!(email = %redact_token(&request.email), "waitlist entry added");
            entries.push(WaitlistEntry {
                email: request.email,
                company: request.company.filter(|value| !value.trim().is_empty()),
                use_case: request.use_case.filter(|value| !value.trim().is_empty()),
                created_at: Utc::now(),
            });
        }

        WaitlistResponse {
            success: true,
            message: JOINED_MESSAGE.to_string(),
        }
    }

    pub async fn entries(&self) -> Vec<WaitlistEntry> {
        self.entries.read().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(email: &str) -> WaitlistRequest {
        WaitlistRequest {
            email: email.to_string(),
            company: Some("Acme".to_string()),
            use_case: None,
        }
    }

    #[test]
    fn email_shapes() {
        let waitlist = Waitlist::new().unwrap();
        assert!(waitlist.is_valid_email("dev@example.com"));
        assert!(waitlist.is_valid_email("a.b+c@sub.example.io"));
        assert!(!waitlist.is_valid_email("dev@example"));
        assert!(!waitlist.is_valid_email("dev example@example.com"));
        assert!(!waitlist.is_valid_email("@example.com"));
        assert!(!waitlist.is_valid_email(""));
    }

    #[tokio::test]
    async fn duplicates_are_accepted_once() {
        let waitlist = Waitlist::new().unwrap();
        let first = waitlist.join(request("dev@example.com")).await;
        let second = waitlist.join(request("dev@example.com")).await;
        assert!(first.success && second.success);
        assert_eq!(second.message, JOINED_MESSAGE);
        assert_eq!(waitlist.entries().await.len(), 1);
    }

    #[tokio::test]
    async fn invalid_email_is_rejected() {
        let waitlist = Waitlist::new().unwrap();
        let response = waitlist.join(request("not-an-email")).await;
        assert!(!response.success);
        assert_eq!(response.message, INVALID_EMAIL_MESSAGE);
        assert!(waitlist.entries().await.is_empty());
    }
}
