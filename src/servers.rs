//! Server settings, for the current server or any server in the account.

use crate::client::{Client, TokenScope};
use crate::models::null_as_default;
use crate::Result;
use serde::{Deserialize, Serialize};

/// A server in the Postmark account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Server {
    #[serde(rename = "ID")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub api_tokens: Vec<String>,
    /// Link to the server overview page.
    #[serde(deserialize_with = "null_as_default")]
    pub server_link: String,
    /// Purple, Blue, Turquoise, Green, Red, Yellow or Grey.
    #[serde(deserialize_with = "null_as_default")]
    pub color: String,
    pub smtp_api_activated: bool,
    /// Include the raw source in inbound webhooks.
    pub raw_email_enabled: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub inbound_address: String,
    #[serde(deserialize_with = "null_as_default")]
    pub inbound_hook_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub bounce_hook_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub open_hook_url: String,
    /// Only the first open by a recipient triggers the open webhook.
    pub post_first_open_only: bool,
    pub track_opens: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub inbound_domain: String,
    #[serde(deserialize_with = "null_as_default")]
    pub inbound_hash: String,
    /// Highest spam score an inbound message may have before it is blocked.
    pub inbound_spam_threshold: i64,
}

impl Client {
    /// Settings of the server the server token belongs to.
    pub async fn get_current_server(&self) -> Result<Server> {
        self.get("server", TokenScope::Server).await
    }

    /// Update the server the server token belongs to.
    pub async fn edit_current_server(&self, server: &Server) -> Result<Server> {
        self.put("server", server, TokenScope::Server).await
    }

    /// Fetch any server in the account. Requires the account token.
    pub async fn get_server(&self, server_id: &str) -> Result<Server> {
        self.get(&format!("servers/{server_id}"), TokenScope::Account)
            .await
    }

    /// Update any server in the account. Requires the account token.
    pub async fn edit_server(&self, server_id: &str, server: &Server) -> Result<Server> {
        self.put(&format!("servers/{server_id}"), server, TokenScope::Account)
            .await
    }
}
