//! Bounce records, bounce dumps and delivery statistics.

use crate::client::{Client, TokenScope};
use crate::models::null_as_default;
use crate::query::{self, QueryOptions};
use crate::Result;
use chrono::{DateTime, FixedOffset};
use reqwest::Method;
use serde::Deserialize;

/// Bounce count for one bounce type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct BounceType {
    /// Type identifier, empty for the `All` summary row.
    #[serde(rename = "Type", deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    pub count: i64,
}

/// Bounce overview for the server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DeliveryStats {
    /// Addresses deactivated because of bounces.
    pub inactive_mails: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub bounces: Vec<BounceType>,
}

/// A single delivery failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Bounce {
    #[serde(rename = "ID")]
    pub id: i64,
    #[serde(rename = "Type", deserialize_with = "null_as_default")]
    pub kind: String,
    pub type_code: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tag: String,
    #[serde(rename = "MessageID", deserialize_with = "null_as_default")]
    pub message_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub details: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    pub bounced_at: Option<DateTime<FixedOffset>>,
    /// Dumps are kept for 30 days.
    pub dump_available: bool,
    /// Whether the bounce deactivated the address.
    pub inactive: bool,
    pub can_activate: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub subject: String,
}

/// One page of bounces.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct BounceList {
    pub total_count: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub bounces: Vec<Bounce>,
}

/// Result of reactivating a bounced address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ActivatedBounce {
    #[serde(deserialize_with = "null_as_default")]
    pub message: String,
    #[serde(deserialize_with = "null_as_default")]
    pub bounce: Bounce,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub(crate) struct Dump {
    #[serde(deserialize_with = "null_as_default")]
    pub(crate) body: String,
}

#[derive(Debug, Deserialize)]
struct BouncedTags {
    tags: Vec<String>,
}

impl Client {
    /// Bounce totals per type and the number of inactive addresses.
    pub async fn get_delivery_stats(&self) -> Result<DeliveryStats> {
        self.get("deliverystats", TokenScope::Server).await
    }

    /// Page through bounces.
    ///
    /// Filters such as `type`, `inactive`, `emailFilter`, `tag`, `messageID`,
    /// `fromdate` and `todate` go into `options`.
    ///
    /// # Examples
    /// ```no_run
    /// # use postmark_client::{Client, QueryOptions};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), postmark_client::Error> {
    /// let client = Client::new("server-token", "")?;
    /// let page = client
    ///     .get_bounces(100, 0, &QueryOptions::new().with("tag", "Invitation"))
    ///     .await?;
    /// println!("{} bounces in total", page.total_count);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_bounces(
        &self,
        count: i64,
        offset: i64,
        options: &QueryOptions,
    ) -> Result<BounceList> {
        let path = query::paged_path("bounces", count, offset, options);
        self.get(&path, TokenScope::Server).await
    }

    pub async fn get_bounce(&self, bounce_id: i64) -> Result<Bounce> {
        self.get(&format!("bounces/{bounce_id}"), TokenScope::Server)
            .await
    }

    /// Raw SMTP conversation for a bounce; empty if no dump is stored.
    pub async fn get_bounce_dump(&self, bounce_id: i64) -> Result<String> {
        let dump: Dump = self
            .get(&format!("bounces/{bounce_id}/dump"), TokenScope::Server)
            .await?;
        Ok(dump.body)
    }

    /// Reactivate the address behind a bounce so it can receive mail again.
    pub async fn activate_bounce(&self, bounce_id: i64) -> Result<ActivatedBounce> {
        self.put_empty(&format!("bounces/{bounce_id}/activate"), TokenScope::Server)
            .await
    }

    /// Tags that have produced bounces.
    pub async fn get_bounced_tags(&self) -> Result<Vec<String>> {
        let raw = self
            .execute(Method::GET, "bounces/tags", None::<&()>, TokenScope::Server)
            .await?;
        Ok(decode_bounced_tags(&String::from_utf8_lossy(&raw))?)
    }
}

/// Postmark answers `bounces/tags` with a bare array (`["tag1","tag2"]`)
/// instead of an object. Wrap it as `{"tags": ...}` before decoding.
fn decode_bounced_tags(raw: &str) -> serde_json::Result<Vec<String>> {
    let wrapped = format!(r#"{{"tags": {raw}}}"#);
    let tags: BouncedTags = serde_json::from_str(&wrapped)?;
    Ok(tags.tags)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_tag_array_decodes_in_order() {
        let tags = decode_bounced_tags("[\n\t\t\"tag1\",\n\t\t\"tag2\",\n\t\t\"tag3\"]\n").unwrap();
        assert_eq!(tags, ["tag1", "tag2", "tag3"]);
    }

    #[test]
    fn object_shaped_tags_are_a_decode_error() {
        assert!(decode_bounced_tags(r#"{"Tags": ["tag1"]}"#).is_err());
    }

    #[test]
    fn bounce_decodes_timestamp_with_seven_fraction_digits() {
        let bounce: Bounce = serde_json::from_str(
            r#"{"ID": 692560173, "Type": "HardBounce", "BouncedAt": "2014-01-15T16:09:19.6421112-05:00"}"#,
        )
        .unwrap();
        assert_eq!(bounce.id, 692560173);
        assert_eq!(bounce.kind, "HardBounce");
        let bounced_at = bounce.bounced_at.unwrap();
        assert_eq!(bounced_at.offset().local_minus_utc(), -5 * 3600);
        assert_eq!(bounced_at.timestamp(), 1389820159);
    }
}
