//! In-memory mock domain data service.
//!
//! This crate stands in for a real backend while prototyping and testing a
//! UI layer: it owns hard-coded product and user collections, answers every
//! call after a simulated network delay, and exposes the same async service
//! contract a remote API would. There is no persistence; all data resets
//! when the process restarts.
//!
//! # Architecture Layers
//!
//! - **config**: Settings and application-wide constants
//! - **domain**: Core entities (products, users, roles) and permission logic
//! - **query**: Pure search/filter engine over entity collections
//! - **infra**: Generic in-memory store and the latency simulator
//! - **services**: Async service traits and their in-memory managers
//! - **seed**: Demo dataset injected at construction time
//! - **utils**: Formatting helpers
//! - **errors**: Centralized error handling
//!
//! # Example
//!
//! ```
//! use mock_domain_service::{Config, ServiceContainer, Services};
//!
//! # async fn demo() -> mock_domain_service::AppResult<()> {
//! let services = Services::with_demo_data(&Config::default());
//! let products = services.products().list_products().await?;
//! assert_eq!(products.len(), 4);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod query;
pub mod seed;
pub mod services;
pub mod utils;

// Re-export commonly used types at crate root
pub use config::Config;
pub use domain::{has_permission, Product, ProductId, User, UserId, UserRole};
pub use errors::{AppError, AppResult};
pub use infra::{Latency, MemoryStore};
pub use query::{filter, Query, Selector};
pub use services::{
    ProductManager, ProductService, ServiceContainer, Services, UserManager, UserService,
};
