//! Simulated network latency.
//!
//! Every service result is delivered through [`defer`], which suspends the
//! caller for a fixed duration and then resolves with the value it was
//! given. The value is computed before the delay starts, so a response
//! always reflects store state at the moment the call was issued. A deferred
//! result resolves exactly once; it never fails and is never cancelled by
//! this crate.

use tokio::time::{sleep, Duration};

use crate::config::{
    LOGIN_DELAY_MS, LOGIN_FAILURE_DELAY_MS, PRODUCT_ITEM_DELAY_MS, PRODUCT_LIST_DELAY_MS,
    PRODUCT_MUTATE_DELAY_MS, USER_ITEM_DELAY_MS, USER_LIST_DELAY_MS, USER_MUTATE_DELAY_MS,
};

/// Per-operation delay durations for one service
#[derive(Debug, Clone, Copy)]
pub struct Latency {
    /// Collection reads
    pub list: Duration,
    /// Single-entity reads
    pub item: Duration,
    /// Writes (add, update, remove)
    pub mutate: Duration,
    /// Accepted authentication
    pub auth: Duration,
    /// Rejected authentication
    pub auth_failure: Duration,
}

impl Latency {
    /// Delays used by the product catalog
    pub const fn products() -> Self {
        Self {
            list: Duration::from_millis(PRODUCT_LIST_DELAY_MS),
            item: Duration::from_millis(PRODUCT_ITEM_DELAY_MS),
            mutate: Duration::from_millis(PRODUCT_MUTATE_DELAY_MS),
            auth: Duration::ZERO,
            auth_failure: Duration::ZERO,
        }
    }

    /// Delays used by the user directory
    pub const fn users() -> Self {
        Self {
            list: Duration::from_millis(USER_LIST_DELAY_MS),
            item: Duration::from_millis(USER_ITEM_DELAY_MS),
            mutate: Duration::from_millis(USER_MUTATE_DELAY_MS),
            auth: Duration::from_millis(LOGIN_DELAY_MS),
            auth_failure: Duration::from_millis(LOGIN_FAILURE_DELAY_MS),
        }
    }

    /// No delay at all, for tests and latency-free wiring
    pub const fn zero() -> Self {
        Self {
            list: Duration::ZERO,
            item: Duration::ZERO,
            mutate: Duration::ZERO,
            auth: Duration::ZERO,
            auth_failure: Duration::ZERO,
        }
    }
}

/// Deliver an already-computed value after a fixed delay
pub async fn defer<T>(value: T, delay: Duration) -> T {
    if !delay.is_zero() {
        sleep(delay).await;
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn defer_resolves_with_the_given_value() {
        let value = defer(41 + 1, Duration::from_millis(250)).await;
        assert_eq!(value, 42);
    }

    #[tokio::test]
    async fn zero_delay_resolves_immediately() {
        let value = defer("now", Duration::ZERO).await;
        assert_eq!(value, "now");
    }
}
