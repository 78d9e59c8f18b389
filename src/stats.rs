//! Outbound delivery and engagement statistics.
//!
//! Every endpoint takes [`QueryOptions`]; the usual ones are `tag`,
//! `fromdate` and `todate` (`YYYY-MM-DD`). Days without activity are
//! omitted from the `days` lists.

use crate::client::{Client, TokenScope};
use crate::models::null_as_default;
use crate::query::{self, QueryOptions};
use crate::Result;
use serde::Deserialize;

/// Overview of all outbound email.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct OutboundStats {
    pub sent: i64,
    pub bounced: i64,
    #[serde(rename = "SMTPApiErrors")]
    pub smtp_api_errors: i64,
    /// Percentage of sent email that bounced.
    pub bounce_rate: f64,
    pub spam_complaints: i64,
    pub spam_complaints_rate: f64,
    pub opens: i64,
    pub unique_opens: i64,
    pub tracked: i64,
    pub with_client_recorded: i64,
    pub with_platform_recorded: i64,
    pub with_read_time_recorded: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct SendDay {
    #[serde(deserialize_with = "null_as_default")]
    pub date: String,
    pub sent: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct SendCounts {
    #[serde(deserialize_with = "null_as_default")]
    pub days: Vec<SendDay>,
    pub sent: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct BounceDay {
    #[serde(deserialize_with = "null_as_default")]
    pub date: String,
    pub hard_bounce: i64,
    pub soft_bounce: i64,
    #[serde(rename = "SMTPApiError")]
    pub smtp_api_error: i64,
    pub transient: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct BounceCounts {
    #[serde(deserialize_with = "null_as_default")]
    pub days: Vec<BounceDay>,
    pub hard_bounce: i64,
    pub soft_bounce: i64,
    #[serde(rename = "SMTPApiError")]
    pub smtp_api_error: i64,
    pub transient: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct SpamDay {
    #[serde(deserialize_with = "null_as_default")]
    pub date: String,
    pub spam_complaint: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct SpamCounts {
    #[serde(deserialize_with = "null_as_default")]
    pub days: Vec<SpamDay>,
    pub spam_complaint: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct TrackedDay {
    #[serde(deserialize_with = "null_as_default")]
    pub date: String,
    pub tracked: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct TrackedCounts {
    #[serde(deserialize_with = "null_as_default")]
    pub days: Vec<TrackedDay>,
    pub tracked: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct OpenedDay {
    #[serde(deserialize_with = "null_as_default")]
    pub date: String,
    /// Includes repeated opens by the same recipient.
    pub opens: i64,
    pub unique: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct OpenCounts {
    #[serde(deserialize_with = "null_as_default")]
    pub days: Vec<OpenedDay>,
    pub opens: i64,
    pub unique: i64,
}

/// Opens per platform for one day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct PlatformDay {
    #[serde(deserialize_with = "null_as_default")]
    pub date: String,
    pub desktop: i64,
    pub mobile: i64,
    pub unknown: i64,
    pub web_mail: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct PlatformCounts {
    #[serde(deserialize_with = "null_as_default")]
    pub days: Vec<PlatformDay>,
    pub desktop: i64,
    pub mobile: i64,
    pub unknown: i64,
    pub web_mail: i64,
}

impl Client {
    pub async fn get_outbound_stats(&self, options: &QueryOptions) -> Result<OutboundStats> {
        self.stats("stats/outbound", options).await
    }

    /// Emails sent per day.
    pub async fn get_sent_counts(&self, options: &QueryOptions) -> Result<SendCounts> {
        self.stats("stats/outbound/sends", options).await
    }

    /// Bounces per day, split by kind.
    pub async fn get_bounce_counts(&self, options: &QueryOptions) -> Result<BounceCounts> {
        self.stats("stats/outbound/bounces", options).await
    }

    /// Spam complaints per day.
    pub async fn get_spam_counts(&self, options: &QueryOptions) -> Result<SpamCounts> {
        self.stats("stats/outbound/spam", options).await
    }

    /// Emails sent with open tracking enabled, per day.
    pub async fn get_tracked_counts(&self, options: &QueryOptions) -> Result<TrackedCounts> {
        self.stats("stats/outbound/tracked", options).await
    }

    /// Opens per day. Only recorded for tracked emails.
    pub async fn get_open_counts(&self, options: &QueryOptions) -> Result<OpenCounts> {
        self.stats("stats/outbound/opens", options).await
    }

    /// Opens per day by platform.
    ///
    /// Served from `stats/outbound/opens/platforms`.
    pub async fn get_platform_counts(&self, options: &QueryOptions) -> Result<PlatformCounts> {
        self.stats("stats/outbound/opens/platforms", options).await
    }

    async fn stats<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        options: &QueryOptions,
    ) -> Result<T> {
        self.get(&query::filtered_path(path, options), TokenScope::Server)
            .await
    }
}
