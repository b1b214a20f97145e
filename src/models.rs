use serde::{Deserialize, Serialize};

/// Status value the Instance ID service uses for a successfully imported token.
pub(crate) const STATUS_OK: &str = "OK";

/// Per-call registration request
///
/// Carries everything one batch import needs. `server_key` and `sandbox`
/// are optional overrides; when absent the client falls back to its
/// configuration.
#[derive(Debug, Clone)]
pub struct RegistrationRequest {
    pub app_bundle_id: String,
    pub server_key: Option<String>,
    pub sandbox: bool,
    pub tokens: Vec<String>,
}

impl RegistrationRequest {
    /// Create a registration request for the given bundle id and APNS tokens
    pub fn new(app_bundle_id: impl Into<String>, tokens: Vec<String>) -> Self {
        Self {
            app_bundle_id: app_bundle_id.into(),
            server_key: None,
            sandbox: false,
            tokens,
        }
    }

    /// Override the configured server key for this call only
    pub fn with_server_key(mut self, server_key: impl Into<String>) -> Self {
        self.server_key = Some(server_key.into());
        self
    }

    /// Target the APNS sandbox environment
    pub fn with_sandbox(mut self, sandbox: bool) -> Self {
        self.sandbox = sandbox;
        self
    }
}

/// Wire payload for the Instance ID batch import endpoint
#[derive(Debug, Serialize)]
pub struct BatchImportRequest {
    pub application: String,
    pub sandbox: bool,
    pub apns_tokens: Vec<String>,
}

/// Response envelope of the batch import endpoint
#[derive(Debug, Deserialize)]
pub struct BatchImportResponse {
    pub results: Vec<BatchImportResult>,
}

/// One entry of the batch import response
#[derive(Debug, Deserialize)]
pub struct BatchImportResult {
    pub registration_token: Option<String>,
    pub apns_token: String,
    pub status: String,
}

/// Typed outcome of one APNS token registration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationOutcome {
    pub registration_token: String,
    pub apns_token: String,
    pub is_registered: bool,
}

impl From<BatchImportResult> for RegistrationOutcome {
    fn from(result: BatchImportResult) -> Self {
        Self {
            is_registered: result.status == STATUS_OK,
            registration_token: result.registration_token.unwrap_or_default(),
            apns_token: result.apns_token,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_import_request_shape() {
        let request = BatchImportRequest {
            application: "com.example.app".to_string(),
            sandbox: true,
            apns_tokens: vec!["a1".to_string(), "a2".to_string()],
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["application"], "com.example.app");
        assert_eq!(json["sandbox"], true);
        assert_eq!(json["apns_tokens"][1], "a2");
    }

    #[test]
    fn test_outcome_derived_from_ok_status() {
        let entry: BatchImportResult = serde_json::from_value(serde_json::json!({
            "registration_token": "r1",
            "apns_token": "a1",
            "status": "OK"
        }))
        .unwrap();

        let outcome = RegistrationOutcome::from(entry);
        assert_eq!(outcome.registration_token, "r1");
        assert_eq!(outcome.apns_token, "a1");
        assert!(outcome.is_registered);
    }

    #[test]
    fn test_outcome_derived_from_error_status() {
        // A failed registration is a data outcome, not a call failure
        let entry: BatchImportResult = serde_json::from_value(serde_json::json!({
            "apns_token": "a1",
            "status": "INTERNAL_SERVER_ERROR"
        }))
        .unwrap();

        let outcome = RegistrationOutcome::from(entry);
        assert!(!outcome.is_registered);
        assert_eq!(outcome.registration_token, "");
    }

    #[test]
    fn test_registration_request_builder() {
        let request = RegistrationRequest::new("com.example.app", vec!["a1".to_string()])
            .with_server_key("explicit-key")
            .with_sandbox(true);

        assert_eq!(request.app_bundle_id, "com.example.app");
        assert_eq!(request.server_key.as_deref(), Some("explicit-key"));
        assert!(request.sandbox);
    }
}
