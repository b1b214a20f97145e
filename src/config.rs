/// FCM client configuration
///
/// Injected once at client construction and read-only afterwards. Holds
/// the default server key and the per-application defaults used by the
/// convenience registration call.
#[derive(Debug, Clone, Default)]
pub struct FcmConfig {
    pub server_key: Option<String>,
    pub app_bundle_id: Option<String>,
    pub sandbox: bool,
}

impl FcmConfig {
    /// Create a configuration with a default server key
    pub fn new(server_key: impl Into<String>) -> Self {
        Self {
            server_key: Some(server_key.into()),
            app_bundle_id: None,
            sandbox: false,
        }
    }

    /// Set the default application bundle id
    pub fn with_app_bundle_id(mut self, app_bundle_id: impl Into<String>) -> Self {
        self.app_bundle_id = Some(app_bundle_id.into());
        self
    }

    /// Target the APNS sandbox environment by default
    pub fn with_sandbox(mut self, sandbox: bool) -> Self {
        self.sandbox = sandbox;
        self
    }
}
