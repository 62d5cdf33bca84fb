//! Service container - centralized service access.
//!
//! Whoever composes the application builds one container and passes it
//! around; there is no ambient singleton state anywhere in the crate.

use std::sync::Arc;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

use crate::config::Config;
use crate::infra::Latency;
use crate::seed;

use super::{ProductManager, ProductService, UserManager, UserService};

/// Service container trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait ServiceContainer: Send + Sync {
    /// Get the product catalog service
    fn products(&self) -> Arc<dyn ProductService>;

    /// Get the user directory service
    fn users(&self) -> Arc<dyn UserService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    product_service: Arc<dyn ProductService>,
    user_service: Arc<dyn UserService>,
}

impl Services {
    /// Create a container from already-built services
    pub fn new(
        product_service: Arc<dyn ProductService>,
        user_service: Arc<dyn UserService>,
    ) -> Self {
        Self {
            product_service,
            user_service,
        }
    }

    /// Create a container over stores seeded with the demo dataset
    pub fn with_demo_data(config: &Config) -> Self {
        let (product_latency, user_latency) = if config.latency_enabled {
            (Latency::products(), Latency::users())
        } else {
            (Latency::zero(), Latency::zero())
        };

        Self::new(
            Arc::new(ProductManager::new(seed::products(), product_latency)),
            Arc::new(UserManager::new(seed::users(), user_latency)),
        )
    }
}

impl ServiceContainer for Services {
    fn products(&self) -> Arc<dyn ProductService> {
        self.product_service.clone()
    }

    fn users(&self) -> Arc<dyn UserService> {
        self.user_service.clone()
    }
}
