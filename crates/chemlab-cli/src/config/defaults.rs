pub const API_KEY_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

pub struct DefaultsConfig {
    pub model: String,
    pub endpoint: String,
    pub language: String,
    pub timeout_seconds: u64,
    pub cracking_seconds: f64,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            model: "gemini-3-flash-preview".to_string(),
            endpoint: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            language: "English".to_string(),
            timeout_seconds: 30,
            cracking_seconds: 3.0,
        }
    }
}
