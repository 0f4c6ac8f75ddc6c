//! Feedback submission: delivery attempt, mail draft fallback, and the
//! local backup list.

use std::fmt;

use chrono::{SecondsFormat, Utc};
use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use web_sys::js_sys;

use crate::config;

/// One feedback form submission, as persisted and as POSTed.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct FeedbackRecord {
    pub name: String,
    pub email: String,
    pub category: String,
    pub message: String,
    pub timestamp: String,
}

impl FeedbackRecord {
    /// Build a record from raw field values, stamped with the current UTC
    /// time. Text fields are trimmed; an unset category becomes "general".
    pub fn from_fields(name: &str, email: &str, category: &str, message: &str) -> Self {
        let category = if category.is_empty() { "general" } else { category };
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            category: category.to_string(),
            message: message.trim().to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    pub fn mail_subject(&self) -> String {
        format!("Feedback: {} - {}", self.category, self.name)
    }

    pub fn mail_body(&self) -> String {
        format!(
            "Name: {}\nEmail: {}\nCategory: {}\n\n{}",
            self.name, self.email, self.category, self.message
        )
    }
}

#[derive(Debug)]
pub enum DeliveryError {
    /// No endpoint is configured; the expected state until a backend lands.
    NoEndpoint,
    Request(gloo_net::Error),
    Status(u16),
}

impl fmt::Display for DeliveryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeliveryError::NoEndpoint => write!(f, "no feedback endpoint configured"),
            DeliveryError::Request(e) => write!(f, "request failed: {}", e),
            DeliveryError::Status(code) => write!(f, "server responded with status {}", code),
        }
    }
}

/// POST the record to the configured endpoint, if any.
pub async fn deliver(record: &FeedbackRecord) -> Result<(), DeliveryError> {
    let Some(endpoint) = config::feedback_endpoint() else {
        gloo_console::log!("No feedback endpoint configured, using mailto fallback");
        return Err(DeliveryError::NoEndpoint);
    };
    let response = Request::post(endpoint)
        .json(record)
        .map_err(DeliveryError::Request)?
        .send()
        .await
        .map_err(DeliveryError::Request)?;
    if response.ok() {
        Ok(())
    } else {
        Err(DeliveryError::Status(response.status()))
    }
}

/// Hand a pre-filled mail draft off to the platform's mail handler.
pub fn open_mail_draft(record: &FeedbackRecord) {
    let subject = String::from(js_sys::encode_uri_component(&record.mail_subject()));
    let body = String::from(js_sys::encode_uri_component(&record.mail_body()));
    let uri = format!(
        "mailto:{}?subject={}&body={}",
        config::FEEDBACK_EMAIL,
        subject,
        body
    );
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().set_href(&uri) {
            log::error!("Failed to open mail draft: {:?}", e);
        }
    }
}

/// Parse a stored submission list. Anything unreadable is discarded rather
/// than blocking the append.
pub fn decode_submissions(raw: Option<&str>) -> Vec<FeedbackRecord> {
    let Some(raw) = raw else {
        return Vec::new();
    };
    serde_json::from_str(raw).unwrap_or_else(|e| {
        log::warn!("Discarding unreadable feedback history: {}", e);
        Vec::new()
    })
}

/// Append the record to the persisted submission list.
///
/// Plain read-modify-write on one localStorage key; two tabs submitting at
/// once can drop one record (last write wins).
pub fn append_submission(record: FeedbackRecord) {
    let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok()).flatten() else {
        return;
    };
    let raw = storage.get_item(config::FEEDBACK_STORAGE_KEY).ok().flatten();
    let mut submissions = decode_submissions(raw.as_deref());
    submissions.push(record);
    match serde_json::to_string(&submissions) {
        Ok(json) => {
            if let Err(e) = storage.set_item(config::FEEDBACK_STORAGE_KEY, &json) {
                log::error!("Failed to persist feedback submission: {:?}", e);
            }
        }
        Err(e) => log::error!("Failed to encode feedback submissions: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> FeedbackRecord {
        FeedbackRecord::from_fields("Ana", "ana@x.com", "general", "Hello there!!")
    }

    #[test]
    fn from_fields_trims_and_stamps() {
        let r = FeedbackRecord::from_fields("  Ana  ", " ana@x.com ", "bug", "  Hello there!!  ");
        assert_eq!(r.name, "Ana");
        assert_eq!(r.email, "ana@x.com");
        assert_eq!(r.category, "bug");
        assert_eq!(r.message, "Hello there!!");
        assert!(chrono::DateTime::parse_from_rfc3339(&r.timestamp).is_ok());
    }

    #[test]
    fn empty_category_defaults_to_general() {
        let r = FeedbackRecord::from_fields("Ana", "ana@x.com", "", "Hello there!!");
        assert_eq!(r.category, "general");
    }

    #[test]
    fn mail_subject_and_body_formatting() {
        let r = record();
        assert_eq!(r.mail_subject(), "Feedback: general - Ana");
        assert_eq!(
            r.mail_body(),
            "Name: Ana\nEmail: ana@x.com\nCategory: general\n\nHello there!!"
        );
    }

    #[test]
    fn decode_handles_missing_and_corrupt_payloads() {
        assert!(decode_submissions(None).is_empty());
        assert!(decode_submissions(Some("not json")).is_empty());
        assert!(decode_submissions(Some("[]")).is_empty());
    }

    #[test]
    fn submissions_round_trip_through_json() {
        let list = vec![record(), record()];
        let json = serde_json::to_string(&list).unwrap();
        let decoded = decode_submissions(Some(&json));
        assert_eq!(decoded, list);
    }
}
