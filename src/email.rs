//! Sending email, plain or from a stored template.

use crate::{ApiError, Result};
use crate::client::{Client, TokenScope};
use crate::models::{Attachment, Header, null_as_default};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// An outgoing email.
///
/// Empty fields are left out of the request. `from`, `to` and one of the
/// bodies are required by Postmark.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Email {
    /// Sender address with a confirmed sender signature.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub from: String,
    /// Comma separated recipients, 50 max.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub to: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub cc: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub bcc: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub subject: String,
    /// Category used for statistics and filtering.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub tag: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub html_body: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub text_body: String,
    /// Overrides the reply-to of the sender signature.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub reply_to: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub headers: Vec<Header>,
    /// Open tracking; `None` keeps the server default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_opens: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, String>,
    /// Stream to send through; Postmark defaults to `outbound`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub message_stream: String,
}

/// An email rendered from a stored template.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TemplatedEmail {
    /// Required unless `template_alias` is set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_id: Option<i64>,
    /// Required unless `template_id` is set.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub template_alias: String,
    /// Model applied to the template to produce subject and bodies.
    #[serde(skip_serializing_if = "Value::is_null")]
    pub template_model: Value,
    /// Inline `<style>` blocks into the HTML body. Postmark defaults to true.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_css: Option<bool>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub from: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub to: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub cc: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub bcc: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub tag: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub reply_to: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub headers: Vec<Header>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_opens: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub message_stream: String,
}

/// Postmark's answer to a send.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct EmailResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub to: String,
    pub submitted_at: Option<DateTime<FixedOffset>>,
    #[serde(rename = "MessageID", deserialize_with = "null_as_default")]
    pub message_id: String,
    pub error_code: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub message: String,
}

impl EmailResponse {
    /// The per-message error, for entries of a batch send.
    pub fn error(&self) -> Option<ApiError> {
        (self.error_code != 0).then(|| ApiError {
            error_code: self.error_code,
            message: self.message.clone(),
        })
    }
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct TemplatedBatch<'a> {
    messages: &'a [TemplatedEmail],
}

impl Client {
    /// Send a single email.
    ///
    /// A response with a non-zero `ErrorCode` (for example an unconfirmed
    /// sender signature) is returned as [`crate::Error::Api`].
    ///
    /// # Examples
    /// ```no_run
    /// # use postmark_client::{Client, Email};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), postmark_client::Error> {
    /// let client = Client::new("server-token", "")?;
    /// let sent = client
    ///     .send_email(&Email {
    ///         from: "sender@example.com".into(),
    ///         to: "receiver@example.com".into(),
    ///         subject: "Hello".into(),
    ///         text_body: "Hello there".into(),
    ///         ..Default::default()
    ///     })
    ///     .await?;
    /// println!("{}", sent.message_id);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn send_email(&self, email: &Email) -> Result<EmailResponse> {
        self.post("email", email, TokenScope::Server).await
    }

    /// Send up to 500 emails in one call.
    ///
    /// Messages can fail individually; check [`EmailResponse::error`] on
    /// each entry.
    pub async fn send_email_batch(&self, emails: &[Email]) -> Result<Vec<EmailResponse>> {
        self.post("email/batch", emails, TokenScope::Server).await
    }

    /// Send an email rendered from a template.
    pub async fn send_templated_email(&self, email: &TemplatedEmail) -> Result<EmailResponse> {
        self.post("email/withTemplate", email, TokenScope::Server).await
    }

    /// Send a batch of templated emails.
    pub async fn send_templated_email_batch(
        &self,
        emails: &[TemplatedEmail],
    ) -> Result<Vec<EmailResponse>> {
        let batch = TemplatedBatch { messages: emails };
        self.post("email/batchWithTemplates", &batch, TokenScope::Server)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unset_fields_are_left_out() {
        let email = Email {
            from: "sender@example.com".to_string(),
            to: "receiver@example.com".to_string(),
            text_body: "Hello".to_string(),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&email).unwrap(),
            json!({
                "From": "sender@example.com",
                "To": "receiver@example.com",
                "TextBody": "Hello"
            })
        );
    }

    #[test]
    fn empty_metadata_and_stream_are_left_out() {
        let email = TemplatedEmail {
            template_alias: "welcome".to_string(),
            metadata: BTreeMap::new(),
            message_stream: String::new(),
            ..Default::default()
        };
        let value = serde_json::to_value(&email).unwrap();
        assert!(value.get("Metadata").is_none());
        assert!(value.get("MessageStream").is_none());

        let email = TemplatedEmail {
            template_alias: "welcome".to_string(),
            metadata: BTreeMap::from([("order".to_string(), "42".to_string())]),
            message_stream: "broadcasts".to_string(),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&email).unwrap(),
            json!({
                "TemplateAlias": "welcome",
                "Metadata": {"order": "42"},
                "MessageStream": "broadcasts"
            })
        );
    }

    #[test]
    fn explicit_false_tracking_is_sent() {
        let email = TemplatedEmail {
            template_id: Some(1234),
            inline_css: Some(false),
            track_opens: Some(false),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&email).unwrap(),
            json!({"TemplateId": 1234, "InlineCss": false, "TrackOpens": false})
        );
    }

    #[test]
    fn batch_entries_expose_their_own_errors() {
        let responses: Vec<EmailResponse> = serde_json::from_value(json!([
            {"To": "a@example.com", "MessageID": "m-1", "ErrorCode": 0, "Message": "OK"},
            {"ErrorCode": 406, "Message": "You tried to send to a recipient that has been marked as inactive."}
        ]))
        .unwrap();
        assert!(responses[0].error().is_none());
        assert_eq!(responses[1].error().map(|e| e.error_code), Some(406));
    }
}
