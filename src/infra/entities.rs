//! Store wiring for the domain entities.
//!
//! Keeps the store-facing trait plumbing out of the domain layer; merge and
//! construction semantics live on the entities themselves.

use crate::domain::{
    CreateProduct, CreateUser, Product, ProductId, UpdateProduct, UpdateUser, User, UserId,
};

use super::store::Entity;

impl Entity for Product {
    type Id = ProductId;
    type Draft = CreateProduct;
    type Patch = UpdateProduct;

    fn id(&self) -> ProductId {
        self.id
    }

    fn build(id: ProductId, draft: CreateProduct) -> Self {
        Product::new(id, draft)
    }

    fn merge(&mut self, patch: UpdateProduct) {
        self.apply(patch);
    }
}

impl Entity for User {
    type Id = UserId;
    type Draft = CreateUser;
    type Patch = UpdateUser;

    fn id(&self) -> UserId {
        self.id
    }

    fn build(id: UserId, draft: CreateUser) -> Self {
        User::new(id, draft)
    }

    fn merge(&mut self, patch: UpdateUser) {
        self.apply(patch);
    }
}
