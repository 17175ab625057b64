/// Fixed configuration shared by every call: populated once at startup,
/// read-only afterwards.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub base_url: String,
    pub app_id: String,
    pub app_key: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: crate::consts::BASE_URL.to_string(),
            app_id: crate::consts::APP_ID.to_string(),
            app_key: crate::consts::APP_KEY.to_string(),
        }
    }
}

impl BackendConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            ..Default::default()
        }
    }
}
