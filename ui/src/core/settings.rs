//! Site-wide tunables.

/// Quiet period before catalog search text is written to the URL.
pub const SEARCH_DEBOUNCE_MS: u64 = 400;

/// How many featured courses the home page shows.
pub const HOME_FEATURED_COUNT: usize = 6;

/// `localStorage` key holding [`Preferences`](super::storage::Preferences) on web.
pub const PREFERENCES_KEY: &str = "academy.preferences";

/// `directories::ProjectDirs` identifiers for the desktop config folder.
pub const APP_QUALIFIER: &str = "org";
pub const APP_ORGANIZATION: &str = "Academy";
pub const APP_NAME: &str = "academy";

/// File name of the preferences document inside the config folder.
pub const PREFERENCES_FILE: &str = "preferences.json";
