//! Value types shared by several Postmark resources.

use serde::{Deserialize, Deserializer, Serialize};

/// A custom email header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Header {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub value: String,
}

impl Header {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A file attached to an email.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Attachment {
    /// File name shown to the recipient.
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Base64 encoded file data.
    #[serde(deserialize_with = "null_as_default")]
    pub content: String,
    /// MIME type, e.g. `application/pdf`.
    #[serde(deserialize_with = "null_as_default")]
    pub content_type: String,
    /// `cid:` reference for inline images.
    #[serde(
        rename = "ContentID",
        skip_serializing_if = "String::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub content_id: String,
}

/// A named email address as reported on messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Recipient {
    /// Display name, empty when Postmark reports `null`.
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
}

/// Treat an explicit JSON `null` like a missing field.
///
/// Used on every non-scalar response field so that a `null` anywhere in a
/// Postmark answer decodes to the zero value instead of failing the call.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
