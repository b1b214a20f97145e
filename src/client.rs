use tracing::{debug, error, info};

use crate::config::FcmConfig;
use crate::errors::FcmError;
use crate::models::{
    BatchImportRequest, BatchImportResponse, RegistrationOutcome, RegistrationRequest,
};

/// Hard per-call ceiling enforced by the Instance ID service.
pub const MAX_BATCH_SIZE: usize = 100;

const DEFAULT_BASE_URL: &str = "https://iid.googleapis.com";
const BATCH_IMPORT_PATH: &str = "/iid/v1:batchImport";

/// FCM registration client
///
/// Exchanges raw APNS device tokens for Firebase registration tokens via
/// the Instance ID batch import endpoint. Authentication uses the legacy
/// shared-secret server key (`Authorization: key=<server_key>`), not an
/// OAuth2 bearer token.
///
/// The client is cheap to clone and safe to share across tasks; the
/// configuration is never mutated after construction.
#[derive(Clone)]
pub struct FcmClient {
    config: FcmConfig,
    http_client: reqwest::Client,
    base_url: String,
}

impl FcmClient {
    /// Create a new FCM registration client
    ///
    /// # Arguments
    /// * `config` - Configuration with the default server key and
    ///   per-application defaults
    pub fn new(config: FcmConfig) -> Self {
        Self::with_client(config, reqwest::Client::new())
    }

    /// Create a client with an injected HTTP transport
    ///
    /// Lets the host supply a `reqwest::Client` with its own pool,
    /// timeout, and TLS settings.
    pub fn with_client(config: FcmConfig, http_client: reqwest::Client) -> Self {
        Self {
            config,
            http_client,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Point the client at a different Instance ID host (tests, proxies)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Register a batch of APNS tokens with FCM
    ///
    /// Issues one POST to the batch import endpoint and returns one
    /// outcome per entry of the remote response, in the remote's order.
    /// The remote does not guarantee a result for every input token, so
    /// the returned sequence corresponds to the response, not positionally
    /// to `request.tokens`.
    ///
    /// An empty token batch returns `Ok(vec![])` without any network call.
    pub async fn register_apns_tokens(
        &self,
        request: RegistrationRequest,
    ) -> Result<Vec<RegistrationOutcome>, FcmError> {
        let server_key = self.resolve_server_key(request.server_key.as_deref())?;

        let payload = match build_batch(&request.tokens, &request.app_bundle_id, request.sandbox)? {
            Some(payload) => payload,
            None => return Ok(Vec::new()),
        };

        debug!(
            token_count = payload.apns_tokens.len(),
            app_bundle_id = %payload.application,
            sandbox = payload.sandbox,
            "dispatching APNS token batch import"
        );

        let outcomes = self.invoke(&payload, server_key).await?;

        let registered = outcomes.iter().filter(|o| o.is_registered).count();
        info!(
            registered,
            failed = outcomes.len() - registered,
            "APNS token batch import completed"
        );

        Ok(outcomes)
    }

    /// Register APNS tokens using the configured defaults
    ///
    /// Convenience form of [`register_apns_tokens`](Self::register_apns_tokens)
    /// that takes the bundle id, server key, and sandbox flag from the
    /// client configuration.
    pub async fn register_tokens(
        &self,
        tokens: Vec<String>,
    ) -> Result<Vec<RegistrationOutcome>, FcmError> {
        let app_bundle_id = self
            .config
            .app_bundle_id
            .clone()
            .ok_or(FcmError::ConfigurationMissing("app bundle id"))?;

        let request =
            RegistrationRequest::new(app_bundle_id, tokens).with_sandbox(self.config.sandbox);

        self.register_apns_tokens(request).await
    }

    /// Resolve the effective server key: explicit override first, then the
    /// configured default. Never mutates the configuration.
    fn resolve_server_key<'a>(&'a self, explicit: Option<&'a str>) -> Result<&'a str, FcmError> {
        explicit
            .or(self.config.server_key.as_deref())
            .ok_or(FcmError::ConfigurationMissing("server key"))
    }

    /// Perform the authenticated POST and map the validated response.
    ///
    /// No retry happens here; retry policy is the caller's responsibility.
    async fn invoke(
        &self,
        payload: &BatchImportRequest,
        server_key: &str,
    ) -> Result<Vec<RegistrationOutcome>, FcmError> {
        let url = format!("{}{}", self.base_url, BATCH_IMPORT_PATH);

        let response = self
            .http_client
            .post(&url)
            .header("Authorization", format!("key={}", server_key))
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(%status, "batch import rejected by Instance ID service");
            return Err(FcmError::Remote { status, body });
        }

        let body = response.bytes().await?;
        map_response(&body)
    }
}

/// Validate the batch and build the wire payload
///
/// Returns `Ok(None)` for an empty batch: the degenerate call needs no
/// network round trip. Batches over [`MAX_BATCH_SIZE`] are rejected
/// outright, never chunked or truncated.
fn build_batch(
    tokens: &[String],
    app_bundle_id: &str,
    sandbox: bool,
) -> Result<Option<BatchImportRequest>, FcmError> {
    if tokens.len() > MAX_BATCH_SIZE {
        return Err(FcmError::BatchSizeExceeded {
            count: tokens.len(),
            limit: MAX_BATCH_SIZE,
        });
    }

    if tokens.is_empty() {
        return Ok(None);
    }

    Ok(Some(BatchImportRequest {
        application: app_bundle_id.to_string(),
        sandbox,
        apns_tokens: tokens.to_vec(),
    }))
}

/// Decode the response envelope and project each entry into an outcome
///
/// Entries keep the remote's order; none are dropped. A malformed body is
/// a [`FcmError::Decoding`], never a transport error.
fn map_response(body: &[u8]) -> Result<Vec<RegistrationOutcome>, FcmError> {
    let envelope: BatchImportResponse =
        serde_json::from_slice(body).map_err(FcmError::Decoding)?;

    Ok(envelope
        .results
        .into_iter()
        .map(RegistrationOutcome::from)
        .collect())
}
