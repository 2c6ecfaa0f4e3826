//! In-memory repositories used by service and controller tests.
//!
//! Records live in a `tokio::sync::RwLock<Vec<_>>` in insertion order. `insert` accepts
//! a prepared entity so tests can pin identifiers.

mod account;
mod employee;
mod student;

pub use account::InMemoryAccountRepository;
pub use employee::InMemoryEmployeeRepository;
pub use student::InMemoryStudentRepository;

use sea_orm::DbErr;
use tokio::sync::RwLock;

use crate::server::model::{
    account::{AccountProps, UpdateAccountParam},
    employee::{EmployeeProps, UpdateEmployeeParam},
    entity::Entity,
    student::{StudentProps, UpdateStudentParam},
};

/// Properties an in-memory store can look up and patch.
pub trait Record: Clone + Send + Sync {
    type Patch: Send;

    fn email(&self) -> &str;

    fn apply(self, patch: Self::Patch) -> Self;
}

impl Record for AccountProps {
    type Patch = UpdateAccountParam;

    fn email(&self) -> &str {
        &self.email
    }

    fn apply(self, patch: Self::Patch) -> Self {
        AccountProps::apply(self, patch)
    }
}

impl Record for StudentProps {
    type Patch = UpdateStudentParam;

    fn email(&self) -> &str {
        &self.email
    }

    fn apply(self, patch: Self::Patch) -> Self {
        StudentProps::apply(self, patch)
    }
}

impl Record for EmployeeProps {
    type Patch = UpdateEmployeeParam;

    fn email(&self) -> &str {
        &self.email
    }

    fn apply(self, patch: Self::Patch) -> Self {
        EmployeeProps::apply(self, patch)
    }
}

pub struct InMemoryRepository<P> {
    records: RwLock<Vec<Entity<P>>>,
}

impl<P> Default for InMemoryRepository<P> {
    fn default() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }
}

impl<P: Record> InMemoryRepository<P> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores an already built entity, keeping its identifier.
    pub async fn insert(&self, entity: Entity<P>) -> Entity<P> {
        self.records.write().await.push(entity.clone());
        entity
    }

    /// Snapshot of every stored record in insertion order.
    pub async fn all(&self) -> Vec<Entity<P>> {
        self.records.read().await.clone()
    }

    pub(super) async fn create_record(&self, props: P) -> Result<Entity<P>, DbErr> {
        Ok(self.insert(Entity::new(props)).await)
    }

    pub(super) async fn find_by_id(&self, id: &str) -> Option<Entity<P>> {
        self.records
            .read()
            .await
            .iter()
            .find(|record| record.id() == id)
            .cloned()
    }

    pub(super) async fn find_by_email(&self, email: &str) -> Option<Entity<P>> {
        self.records
            .read()
            .await
            .iter()
            .find(|record| record.props().email() == email)
            .cloned()
    }

    pub(super) async fn patch(&self, id: &str, patch: P::Patch) {
        let mut records = self.records.write().await;
        if let Some(index) = records.iter().position(|record| record.id() == id) {
            let record = records.remove(index);
            records.insert(index, record.map_props(|props| props.apply(patch)));
        }
    }

    pub(super) async fn remove(&self, id: &str) {
        self.records.write().await.retain(|record| record.id() != id);
    }
}
