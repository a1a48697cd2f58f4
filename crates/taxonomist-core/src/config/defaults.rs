// Single source of truth for all default values.

// --- Predictor ---
pub const DEFAULT_PREDICT_URL: &str = "http://127.0.0.1:5000/api/predict";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;

// --- Environment overrides ---
pub const ENV_PREDICT_URL: &str = "TAXONOMIST_PREDICT_URL";
pub const ENV_TIMEOUT_SECS: &str = "TAXONOMIST_TIMEOUT_SECS";
