//! Suppressed recipients per message stream.

use crate::client::{Client, TokenScope};
use crate::models::null_as_default;
use crate::query::{self, QueryOptions};
use crate::Result;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Why an address is suppressed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SuppressionReason {
    HardBounce,
    SpamComplaint,
    ManualSuppression,
    /// A reason this client does not know about yet.
    #[default]
    #[serde(other)]
    Unknown,
}

impl SuppressionReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            SuppressionReason::HardBounce => "HardBounce",
            SuppressionReason::SpamComplaint => "SpamComplaint",
            SuppressionReason::ManualSuppression => "ManualSuppression",
            SuppressionReason::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for SuppressionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Who created a suppression.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SuppressionOrigin {
    Recipient,
    Customer,
    Admin,
    #[default]
    #[serde(other)]
    Unknown,
}

impl SuppressionOrigin {
    pub fn as_str(&self) -> &'static str {
        match self {
            SuppressionOrigin::Recipient => "Recipient",
            SuppressionOrigin::Customer => "Customer",
            SuppressionOrigin::Admin => "Admin",
            SuppressionOrigin::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for SuppressionOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A suppressed address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Suppression {
    #[serde(deserialize_with = "null_as_default")]
    pub email_address: String,
    #[serde(deserialize_with = "null_as_default")]
    pub suppression_reason: SuppressionReason,
    #[serde(deserialize_with = "null_as_default")]
    pub origin: SuppressionOrigin,
    pub created_at: Option<DateTime<FixedOffset>>,
}

/// Outcome for one address of a create or delete request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum SuppressionStatus {
    Suppressed,
    Deleted,
    Failed,
    #[default]
    #[serde(other)]
    Unknown,
}

/// Per-address result of [`Client::create_suppressions`] or
/// [`Client::delete_suppressions`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct SuppressionResult {
    #[serde(deserialize_with = "null_as_default")]
    pub email_address: String,
    #[serde(deserialize_with = "null_as_default")]
    pub status: SuppressionStatus,
    /// Why the change failed; `None` on success.
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct SuppressionsResponse<T> {
    #[serde(default)]
    suppressions: Vec<T>,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct SuppressionsRequest<'a> {
    suppressions: Vec<EmailAddress<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct EmailAddress<'a> {
    email_address: &'a str,
}

impl<'a> SuppressionsRequest<'a> {
    fn new<S: AsRef<str>>(addresses: &'a [S]) -> Self {
        Self {
            suppressions: addresses
                .iter()
                .map(|address| EmailAddress {
                    email_address: address.as_ref(),
                })
                .collect(),
        }
    }
}

impl Client {
    /// Suppressed addresses of a message stream.
    ///
    /// Options include `emailaddress`, `suppressionreason`, `origin`,
    /// `fromdate` and `todate`; [`SuppressionReason`] and
    /// [`SuppressionOrigin`] values can be passed directly.
    ///
    /// # Examples
    /// ```no_run
    /// # use postmark_client::{Client, QueryOptions, SuppressionReason};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), postmark_client::Error> {
    /// let client = Client::new("server-token", "")?;
    /// let options = QueryOptions::new().with("suppressionreason", SuppressionReason::HardBounce);
    /// for entry in client.get_suppressions("outbound", &options).await? {
    ///     println!("{} ({})", entry.email_address, entry.suppression_reason);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_suppressions(
        &self,
        stream_id: &str,
        options: &QueryOptions,
    ) -> Result<Vec<Suppression>> {
        let path = query::filtered_path(
            &format!("message-streams/{stream_id}/suppressions/dump"),
            options,
        );
        let res: SuppressionsResponse<Suppression> = self.get(&path, TokenScope::Server).await?;
        Ok(res.suppressions)
    }

    /// Suppress addresses on a message stream.
    pub async fn create_suppressions<S: AsRef<str>>(
        &self,
        stream_id: &str,
        addresses: &[S],
    ) -> Result<Vec<SuppressionResult>> {
        let path = format!("message-streams/{stream_id}/suppressions");
        let res: SuppressionsResponse<SuppressionResult> = self
            .post(&path, &SuppressionsRequest::new(addresses), TokenScope::Server)
            .await?;
        Ok(res.suppressions)
    }

    /// Remove addresses from a stream's suppression list.
    ///
    /// The call succeeds even when some entries cannot be removed (spam
    /// complaints and customer-created manual suppressions are permanent);
    /// inspect each [`SuppressionResult::status`].
    pub async fn delete_suppressions<S: AsRef<str>>(
        &self,
        stream_id: &str,
        addresses: &[S],
    ) -> Result<Vec<SuppressionResult>> {
        let path = format!("message-streams/{stream_id}/suppressions/delete");
        let res: SuppressionsResponse<SuppressionResult> = self
            .post(&path, &SuppressionsRequest::new(addresses), TokenScope::Server)
            .await?;
        Ok(res.suppressions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_wraps_each_address() {
        let addresses = ["a@example.com", "b@example.com"];
        assert_eq!(
            serde_json::to_value(SuppressionsRequest::new(&addresses)).unwrap(),
            json!({"Suppressions": [
                {"EmailAddress": "a@example.com"},
                {"EmailAddress": "b@example.com"}
            ]})
        );
    }

    #[test]
    fn unknown_reason_does_not_fail_decoding() {
        let entry: Suppression = serde_json::from_value(json!({
            "EmailAddress": "x@example.com",
            "SuppressionReason": "SomethingNew",
            "Origin": "Admin"
        }))
        .unwrap();
        assert_eq!(entry.suppression_reason, SuppressionReason::Unknown);
        assert_eq!(entry.origin, SuppressionOrigin::Admin);
    }

    #[test]
    fn filter_values_display_wire_spelling() {
        let options = QueryOptions::new()
            .with("suppressionreason", SuppressionReason::HardBounce)
            .with("origin", SuppressionOrigin::Recipient);
        assert_eq!(options.get("suppressionreason"), Some("HardBounce"));
        assert_eq!(options.get("origin"), Some("Recipient"));
    }
}
