/// FCM Registration Library
///
/// Server-side Firebase Cloud Messaging client for exchanging raw APNS
/// device tokens for FCM registration tokens through the Instance ID
/// batch import endpoint.
///
/// It handles:
/// - Server key resolution (per-call override over configured default)
/// - Batch validation against the 100-token ceiling
/// - Authenticated batch import calls (`Authorization: key=<server_key>`)
/// - Mapping the partially-successful remote response into typed
///   per-token outcomes

pub mod client;
pub mod config;
pub mod errors;
pub mod models;

pub use client::{FcmClient, MAX_BATCH_SIZE};
pub use config::FcmConfig;
pub use errors::FcmError;
pub use models::{RegistrationOutcome, RegistrationRequest};
