//! Application services layer - use cases over the in-memory stores.
//!
//! Services own their store behind a lock, compute results synchronously,
//! and deliver them through the latency simulator so callers see the same
//! async contract a real backend would give them.

pub mod container;
mod product_service;
mod user_service;

pub use container::{ServiceContainer, Services};
pub use product_service::{ProductManager, ProductService};
pub use user_service::{UserManager, UserService};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use container::MockServiceContainer;
#[cfg(any(test, feature = "test-utils"))]
pub use product_service::MockProductService;
#[cfg(any(test, feature = "test-utils"))]
pub use user_service::MockUserService;
