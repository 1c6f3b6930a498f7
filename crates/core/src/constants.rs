//! Shared constants for vantage-dash.

/// Page size requested from the completed-transactions endpoint.
pub const TRANSACTION_PAGE_SIZE: usize = 1000;

/// Number of cached records written by the CSV export.
pub const EXPORT_ROW_LIMIT: usize = 500;

/// Number of records rendered in the dashboard transactions table.
pub const DASHBOARD_ROW_LIMIT: usize = 50;

/// Days before today offered by the date pickers.
pub const DATE_PICKER_LOOKBACK_DAYS: i64 = 13;

/// Default timeout for vendor HTTP calls, in seconds.
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 120;

/// Maximum length, in characters, of a raw response body used as an error detail.
pub const MAX_ERROR_DETAIL_LEN: usize = 300;

/// OAuth scope requested during the client-credentials exchange.
pub const OAUTH_SCOPE: &str = "openid permissions global.wildcard";

/// Skill type offered in the dashboard skill selector.
pub const PROCESS_SKILL_TYPE: &str = "Process";

/// Filename announced by the CSV export.
pub const EXPORT_FILENAME: &str = "vantage_transactions.csv";
