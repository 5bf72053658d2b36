/// Date used in output filenames: "2025-01-15"
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Front-matter timestamp: "2025-01-15 09:30:00 +0800"
pub(crate) const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

/// Default output directory, one level above the working directory
pub(crate) const DEFAULT_POSTS_DIR: &str = "../_posts";

/// First-line prefix that marks a markdown title heading
pub(crate) const TITLE_MARKER: &str = "# ";
