//! Outbound messages and their open events.

use crate::bounces::Dump;
use crate::client::{Client, TokenScope};
use crate::models::{Recipient, null_as_default};
use crate::query::{self, QueryOptions};
use crate::Result;
use chrono::{DateTime, FixedOffset};
use serde::Deserialize;
use std::collections::HashMap;

/// A message sent through the server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct OutboundMessage {
    #[serde(deserialize_with = "null_as_default")]
    pub text_body: String,
    #[serde(deserialize_with = "null_as_default")]
    pub html_body: String,
    /// Raw source; only present in message details.
    #[serde(deserialize_with = "null_as_default")]
    pub body: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tag: String,
    #[serde(rename = "MessageID", deserialize_with = "null_as_default")]
    pub message_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub to: Vec<Recipient>,
    #[serde(deserialize_with = "null_as_default")]
    pub cc: Vec<Recipient>,
    #[serde(deserialize_with = "null_as_default")]
    pub bcc: Vec<Recipient>,
    /// Bare addresses of every recipient.
    #[serde(deserialize_with = "null_as_default")]
    pub recipients: Vec<String>,
    pub received_at: Option<DateTime<FixedOffset>>,
    #[serde(deserialize_with = "null_as_default")]
    pub from: String,
    #[serde(deserialize_with = "null_as_default")]
    pub subject: String,
    #[serde(deserialize_with = "null_as_default")]
    pub attachments: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    /// Delivered, Opened and Bounced events, newest last.
    #[serde(deserialize_with = "null_as_default")]
    pub message_events: Vec<MessageEvent>,
}

/// Something that happened to a message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct MessageEvent {
    #[serde(deserialize_with = "null_as_default")]
    pub recipient: String,
    pub received_at: Option<DateTime<FixedOffset>>,
    /// `Delivered`, `Opened` or `Bounced`.
    #[serde(rename = "Type", deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(deserialize_with = "null_as_default")]
    pub details: HashMap<String, String>,
}

/// One page of outbound messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct OutboundMessageList {
    pub total_count: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub messages: Vec<OutboundMessage>,
}

/// A recorded open of a message by one recipient.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Open {
    /// False for every open after the first by the same recipient.
    pub first_open: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub user_agent: String,
    #[serde(rename = "MessageID", deserialize_with = "null_as_default")]
    pub message_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub recipient: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tag: String,
    pub received_at: Option<DateTime<FixedOffset>>,
    /// Email client name, company and family.
    #[serde(deserialize_with = "null_as_default")]
    pub client: HashMap<String, String>,
    #[serde(rename = "OS", deserialize_with = "null_as_default")]
    pub os: HashMap<String, String>,
    /// `WebMail`, `Desktop`, `Mobile` or `Unknown`.
    #[serde(deserialize_with = "null_as_default")]
    pub platform: String,
    pub read_seconds: i64,
    /// IP and location derived from it.
    #[serde(deserialize_with = "null_as_default")]
    pub geo: HashMap<String, String>,
}

/// One page of opens.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct OpenList {
    pub total_count: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub opens: Vec<Open>,
}

impl Client {
    pub async fn get_outbound_message(&self, message_id: &str) -> Result<OutboundMessage> {
        let path = format!("messages/outbound/{message_id}/details");
        self.get(&path, TokenScope::Server).await
    }

    /// Raw source of a sent message, empty when Postmark no longer has it.
    pub async fn get_outbound_message_dump(&self, message_id: &str) -> Result<String> {
        let path = format!("messages/outbound/{message_id}/dump");
        let dump: Dump = self.get(&path, TokenScope::Server).await?;
        Ok(dump.body)
    }

    /// Search sent messages.
    ///
    /// Options include `recipient`, `fromemail`, `tag`, `status`,
    /// `messagestream`, `fromdate` and `todate`.
    pub async fn get_outbound_messages(
        &self,
        count: i64,
        offset: i64,
        options: &QueryOptions,
    ) -> Result<OutboundMessageList> {
        let path = query::paged_path("messages/outbound", count, offset, options);
        self.get(&path, TokenScope::Server).await
    }

    /// Opens across all messages.
    ///
    /// An open belongs to a single recipient, so a message opened by two
    /// recipients yields two entries.
    pub async fn get_outbound_messages_opens(
        &self,
        count: i64,
        offset: i64,
        options: &QueryOptions,
    ) -> Result<OpenList> {
        let path = query::paged_path("messages/outbound/opens", count, offset, options);
        self.get(&path, TokenScope::Server).await
    }

    /// Opens of one message.
    pub async fn get_outbound_message_opens(
        &self,
        message_id: &str,
        count: i64,
        offset: i64,
    ) -> Result<OpenList> {
        let path = query::paged_path(
            &format!("messages/outbound/opens/{message_id}"),
            count,
            offset,
            &QueryOptions::new(),
        );
        self.get(&path, TokenScope::Server).await
    }
}
