//! Inbound messages processed by the server.

use crate::client::{Client, TokenScope};
use crate::models::{Attachment, Header, Recipient, null_as_default};
use crate::query::{self, QueryOptions};
use crate::Result;
use chrono::{DateTime, FixedOffset};
use serde::Deserialize;
use serde_json::Value;

/// A message received by the server's inbound address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct InboundMessage {
    #[serde(deserialize_with = "null_as_default")]
    pub from: String,
    #[serde(deserialize_with = "null_as_default")]
    pub from_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub from_full: Recipient,
    #[serde(deserialize_with = "null_as_default")]
    pub to: String,
    #[serde(deserialize_with = "null_as_default")]
    pub to_full: Vec<Recipient>,
    #[serde(deserialize_with = "null_as_default")]
    pub cc_full: Vec<Recipient>,
    #[serde(deserialize_with = "null_as_default")]
    pub cc: String,
    #[serde(deserialize_with = "null_as_default")]
    pub reply_to: String,
    /// RCPT TO address the message was delivered for.
    #[serde(deserialize_with = "null_as_default")]
    pub original_recipient: String,
    #[serde(deserialize_with = "null_as_default")]
    pub subject: String,
    /// RFC 2822 date, see [`InboundMessage::date_time`].
    #[serde(deserialize_with = "null_as_default")]
    pub date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub mailbox_hash: String,
    #[serde(deserialize_with = "null_as_default")]
    pub text_body: String,
    #[serde(deserialize_with = "null_as_default")]
    pub html_body: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tag: String,
    #[serde(deserialize_with = "null_as_default")]
    pub headers: Vec<Header>,
    #[serde(deserialize_with = "null_as_default")]
    pub attachments: Vec<Attachment>,
    #[serde(rename = "MessageID", deserialize_with = "null_as_default")]
    pub message_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub blocked_reason: String,
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
}

impl InboundMessage {
    /// Parse [`InboundMessage::date`], which Postmark reports as RFC 2822.
    pub fn date_time(&self) -> std::result::Result<DateTime<FixedOffset>, chrono::ParseError> {
        DateTime::parse_from_rfc2822(&self.date)
    }
}

/// One page of inbound messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct InboundMessageList {
    pub total_count: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub messages: Vec<InboundMessage>,
}

impl Client {
    pub async fn get_inbound_message(&self, message_id: &str) -> Result<InboundMessage> {
        let path = format!("messages/inbound/{message_id}/details");
        self.get(&path, TokenScope::Server).await
    }

    /// Search inbound messages.
    ///
    /// Options include `recipient`, `fromemail`, `subject`, `mailboxhash`,
    /// `tag`, `status`, `fromdate` and `todate`.
    pub async fn get_inbound_messages(
        &self,
        count: i64,
        offset: i64,
        options: &QueryOptions,
    ) -> Result<InboundMessageList> {
        let path = query::paged_path("messages/inbound", count, offset, options);
        self.get(&path, TokenScope::Server).await
    }

    /// Let a message blocked by an inbound rule through.
    pub async fn bypass_inbound_message(&self, message_id: &str) -> Result<()> {
        let path = format!("messages/inbound/{message_id}/bypass");
        let _: Value = self.put_empty(&path, TokenScope::Server).await?;
        Ok(())
    }

    /// Retry a message whose inbound webhook failed.
    pub async fn retry_inbound_message(&self, message_id: &str) -> Result<()> {
        let path = format!("messages/inbound/{message_id}/retry");
        let _: Value = self.put_empty(&path, TokenScope::Server).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rfc2822_date() {
        let message = InboundMessage {
            date: "Thu, 13 Feb 2014 17:48:22 +0300".to_string(),
            ..Default::default()
        };
        let parsed = message.date_time().unwrap();
        assert_eq!(parsed.offset().local_minus_utc(), 3 * 3600);
        assert_eq!(parsed.to_rfc3339(), "2014-02-13T17:48:22+03:00");
    }

    #[test]
    fn bad_date_is_an_error() {
        assert!(InboundMessage::default().date_time().is_err());
    }
}
