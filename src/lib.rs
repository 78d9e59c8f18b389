//! # Postmark Client
//! Asynchronous wrapper around the Postmark transactional email HTTP API: send plain and templated email, inspect bounces and messages, manage templates, servers and suppressions, and read delivery statistics through [`Client`] and [`ClientBuilder`].
//!
//! ## Audience and uses
//! For Rust services that deliver email through Postmark and need typed access to its REST endpoints. Every method maps to exactly one HTTP call; there is no caching, retrying or background work.
//!
//! ## Authentication
//! Postmark uses two static tokens. Server-scoped endpoints (sending, bounces, messages, templates, statistics, suppressions, the current server) send `X-Postmark-Server-Token`; account-scoped endpoints (named servers, sender signatures) send `X-Postmark-Account-Token`. Exactly one of them is attached to each request.
//!
//! ## Runtime requirements
//! Async-only; run inside a Tokio (v1) runtime. HTTP calls use `reqwest`. Request and response logging goes through `tracing` at `debug` level, so install a subscriber to see it.
//!
//! ## Errors
//! Transport failures surface as [`Error::Request`], (de)serialization problems as [`Error::Json`]. Postmark reports rejected calls in the body with a non-zero `ErrorCode`; every endpoint turns those into [`Error::Api`], whose text is Postmark's message. The crate-wide [`Result`] alias wraps these errors.
//!
//! ## Example
//! ```no_run
//! use postmark_client::{Client, Email, QueryOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), postmark_client::Error> {
//!     let client = Client::new("server-token", "account-token")?;
//!
//!     let sent = client
//!         .send_email(&Email {
//!             from: "sender@example.com".into(),
//!             to: "receiver@example.com".into(),
//!             subject: "Welcome".into(),
//!             html_body: "<b>Hello</b>".into(),
//!             ..Default::default()
//!         })
//!         .await?;
//!     println!("Sent: {}", sent.message_id);
//!
//!     let bounces = client.get_bounces(50, 0, &QueryOptions::new()).await?;
//!     for bounce in bounces.bounces {
//!         println!("{}: {}", bounce.email, bounce.description);
//!     }
//!     Ok(())
//! }
//! ```

mod bounces;
mod client;
mod email;
mod error;
mod inbound;
mod models;
mod outbound;
mod query;
mod sender_signatures;
mod servers;
mod stats;
mod suppressions;
mod templates;

pub use bounces::{ActivatedBounce, Bounce, BounceList, BounceType, DeliveryStats};
pub use client::{Client, ClientBuilder};
pub use email::{Email, EmailResponse, TemplatedEmail};
pub use error::{ApiError, Error};
pub use inbound::{InboundMessage, InboundMessageList};
pub use models::{Attachment, Header, Recipient};
pub use outbound::{MessageEvent, Open, OpenList, OutboundMessage, OutboundMessageList};
pub use query::QueryOptions;
pub use sender_signatures::{SenderSignature, SenderSignatureList};
pub use servers::Server;
pub use stats::{
    BounceCounts, BounceDay, OpenCounts, OpenedDay, OutboundStats, PlatformCounts, PlatformDay,
    SendCounts, SendDay, SpamCounts, SpamDay, TrackedCounts, TrackedDay,
};
pub use suppressions::{
    Suppression, SuppressionOrigin, SuppressionReason, SuppressionResult, SuppressionStatus,
};
pub use templates::{
    Template, TemplateInfo, TemplateList, ValidateTemplateBody, ValidateTemplateResponse,
    Validation, ValidationError,
};

/// Result type alias for Postmark operations.
///
/// This is equivalent to `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
