/// Constants used throughout the padron codebase
// Admin email cache lifetime: snapshots older than this are refetched on read
pub const ADMIN_CACHE_TTL_MS: i64 = 5 * 60 * 1000;

// Session token lifetime: tokens older than this validate as expired
pub const SESSION_TOKEN_TTL_MS: i64 = 24 * 60 * 60 * 1000;

// Document store collection and record names
pub const USERS_COLLECTION: &str = "users";
pub const SYSTEM_COLLECTION: &str = "system_variables";
pub const ACCESS_RECORD: &str = "access";
