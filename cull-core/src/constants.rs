/// Tool version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Marker file written into a movie folder the first time a media file is seen.
/// Its modification time is the item's age anchor.
pub const FIRST_SEEN_MARKER: &str = ".firstseen";

/// Marker file written into a season folder the first time the season is complete.
pub const FIRST_COMPLETE_MARKER: &str = ".firstcomplete";

/// Directory name for season zero.
pub const SPECIALS_DIR: &str = "Specials";

/// Default push delivery endpoint.
pub const DEFAULT_PUSH_URL: &str = "https://api.pushover.net/1/messages.json";

/// Attempts made for a catalog call before giving up.
pub const CATALOG_RETRY_ATTEMPTS: u32 = 3;

/// Base delay between catalog retry attempts (milliseconds).
pub const CATALOG_RETRY_BASE_MS: u64 = 500;
