//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// User Roles
// =============================================================================

/// Administrator role with elevated privileges
pub const ROLE_ADMIN: &str = "admin";

/// Default role for registered users
pub const ROLE_USER: &str = "user";

/// Role for unauthenticated visitors
pub const ROLE_GUEST: &str = "guest";

/// All valid role values
pub const VALID_ROLES: &[&str] = &[ROLE_ADMIN, ROLE_USER, ROLE_GUEST];

// =============================================================================
// Presence
// =============================================================================

/// A user counts as online while their last login is at most this old
pub const ONLINE_THRESHOLD_HOURS: i64 = 24;

// =============================================================================
// Simulated latency (milliseconds)
// =============================================================================

/// Product list round-trip
pub const PRODUCT_LIST_DELAY_MS: u64 = 500;

/// Single-product lookup
pub const PRODUCT_ITEM_DELAY_MS: u64 = 300;

/// Product writes (add, update, remove)
pub const PRODUCT_MUTATE_DELAY_MS: u64 = 400;

/// User list round-trip
pub const USER_LIST_DELAY_MS: u64 = 400;

/// Single-user lookup
pub const USER_ITEM_DELAY_MS: u64 = 200;

/// User writes
pub const USER_MUTATE_DELAY_MS: u64 = 300;

/// Successful logins take the longest simulated round-trip
pub const LOGIN_DELAY_MS: u64 = 800;

/// Rejected logins come back faster
pub const LOGIN_FAILURE_DELAY_MS: u64 = 400;
