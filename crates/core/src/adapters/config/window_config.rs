#[derive(serde::Deserialize, Debug, Clone, Default)]
pub struct WindowConfig {
    pub begin: Option<String>,
    pub end: Option<String>,
}
