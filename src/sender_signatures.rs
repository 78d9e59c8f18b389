//! Sender signatures registered on the account.

use crate::client::{Client, TokenScope};
use crate::models::null_as_default;
use crate::query::{self, QueryOptions};
use crate::Result;
use serde::Deserialize;

/// An address or domain allowed to send.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct SenderSignature {
    #[serde(deserialize_with = "null_as_default")]
    pub domain: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email_address: String,
    #[serde(deserialize_with = "null_as_default")]
    pub reply_to_email_address: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    pub confirmed: bool,
    #[serde(rename = "ID")]
    pub id: i64,
}

/// One page of sender signatures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct SenderSignatureList {
    pub total_count: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub sender_signatures: Vec<SenderSignature>,
}

impl Client {
    /// Page through sender signatures.
    ///
    /// `senders` is an account-level endpoint, so this sends the account
    /// token rather than the server token.
    pub async fn get_sender_signatures(
        &self,
        count: i64,
        offset: i64,
    ) -> Result<SenderSignatureList> {
        let path = query::paged_path("senders", count, offset, &QueryOptions::new());
        self.get(&path, TokenScope::Account).await
    }
}
