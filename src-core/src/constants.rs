/// Accounts collection name
pub const ACCOUNTS_COLLECTION: &str = "accounts";

/// Projects collection name
pub const PROJECTS_COLLECTION: &str = "projects";

/// Chat threads collection name
pub const CHATS_COLLECTION: &str = "chats";

/// Posts collection name
pub const POSTS_COLLECTION: &str = "posts";

/// Events collection name
pub const EVENTS_COLLECTION: &str = "events";

/// Starting balance credited to new accounts when none is configured
pub const DEFAULT_STARTING_BALANCE: &str = "1000";

/// Default bound on a single collection-lock wait, in milliseconds
pub const DEFAULT_LOCK_TIMEOUT_MS: u64 = 5_000;
