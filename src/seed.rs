//! Demo dataset injected into freshly built stores.
//!
//! Nothing here is global: callers pass the data into a store or a manager
//! at construction time and own it from there. Timestamps for `last_login`
//! are relative to the current time so presence checks behave sensibly in a
//! demo.

use chrono::{DateTime, Duration, TimeZone, Utc};
use rust_decimal::Decimal;

use crate::domain::{Product, ProductId, User, UserId, UserRole};

/// Four demo products spanning three categories, ids 1-4
pub fn products() -> Vec<Product> {
    vec![
        Product {
            id: ProductId::new(1),
            name: "Notebook Pro 15".to_string(),
            description: "A 15-inch developer notebook with 32 GB of memory".to_string(),
            price: Decimal::from(3500),
            category: "Hardware".to_string(),
            image_url: Some("/images/notebook-pro-15.png".to_string()),
            in_stock: true,
        },
        Product {
            id: ProductId::new(2),
            name: "Advanced Web Development Course".to_string(),
            description: "A complete course on building single-page applications".to_string(),
            price: Decimal::from(299),
            category: "Education".to_string(),
            image_url: None,
            in_stock: true,
        },
        Product {
            id: ProductId::new(3),
            name: "TypeScript Essentials".to_string(),
            description: "The essential guide to typed front-end code".to_string(),
            price: Decimal::from(150),
            category: "Education".to_string(),
            image_url: None,
            in_stock: false,
        },
        Product {
            id: ProductId::new(4),
            name: "CLI Toolkit Premium".to_string(),
            description: "Advanced command-line tooling for front-end projects".to_string(),
            price: Decimal::from(75),
            category: "Software".to_string(),
            image_url: Some("/images/cli-toolkit.png".to_string()),
            in_stock: true,
        },
    ]
}

/// Four demo users covering the whole role hierarchy, ids 1-4.
///
/// The guest has never logged in, which exercises the "never" branch of
/// presence formatting.
pub fn users() -> Vec<User> {
    let now = Utc::now();

    vec![
        User {
            id: UserId::new(1),
            name: "Joan Silva".to_string(),
            email: "joan.silva@example.com".to_string(),
            role: UserRole::Admin,
            created_at: date(2024, 1, 15),
            last_login: Some(now - Duration::hours(2)),
        },
        User {
            id: UserId::new(2),
            name: "Maria Santos".to_string(),
            email: "maria.santos@example.com".to_string(),
            role: UserRole::User,
            created_at: date(2024, 3, 20),
            last_login: Some(now - Duration::hours(5)),
        },
        User {
            id: UserId::new(3),
            name: "Pedro Costa".to_string(),
            email: "pedro.costa@example.com".to_string(),
            role: UserRole::User,
            created_at: date(2024, 5, 10),
            last_login: Some(now - Duration::days(2)),
        },
        User {
            id: UserId::new(4),
            name: "Ana Oliveira".to_string(),
            email: "ana.oliveira@example.com".to_string(),
            role: UserRole::Guest,
            created_at: date(2024, 8, 5),
            last_login: None,
        },
    ]
}

fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .expect("valid demo date")
}
