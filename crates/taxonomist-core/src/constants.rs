/// Number of economic indicators collected per submission.
pub const INDICATOR_COUNT: usize = 6;

/// Inclusive bounds for the unemployment rate (percent).
pub const UNEMPLOYMENT_RATE_MIN: f64 = 0.0;
pub const UNEMPLOYMENT_RATE_MAX: f64 = 100.0;

/// Shown when the service rejects a request without a usable `message`.
pub const GENERIC_SERVICE_ERROR: &str = "API request failed";

/// Shown when a failure carries no message of its own.
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to calculate GDP. Please try again.";

/// Currency unit used for monetary indicators and the GDP estimate.
pub const CURRENCY_UNIT: &str = "₹ Crores";
