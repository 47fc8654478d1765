//! Entity store abstraction and its backends.
//!
//! One store instance per entity kind. Services only see the traits; the
//! backend is chosen once at startup (`backend::open`).

use std::sync::Arc;

use async_trait::async_trait;

use crate::directory::domain::{Company, Document, Employee};
use crate::errors::ServiceError;

pub mod collection;
pub mod memory;
pub mod json_file;
pub mod seaorm;
pub mod backend;

pub use json_file::JsonDocumentStore;
pub use memory::MemoryStore;

/// Persisted collection of one document kind keyed by an opaque id.
///
/// Listing methods return documents in store order (insertion order).
#[async_trait]
pub trait EntityStore<T: Document>: Send + Sync {
    /// Assign a fresh id and persist.
    async fn insert(&self, draft: T::Draft) -> Result<T, ServiceError>;
    /// Upsert keyed by the entity's id.
    async fn save(&self, entity: T) -> Result<T, ServiceError>;
    async fn exists_by_id(&self, id: &str) -> Result<bool, ServiceError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<T>, ServiceError>;
    async fn find_all(&self) -> Result<Vec<T>, ServiceError>;
    async fn find_all_paged(&self, offset: u64, limit: u64) -> Result<Vec<T>, ServiceError>;
    /// Remove the document if present; absent ids are not an error here.
    async fn delete_by_id(&self, id: &str) -> Result<(), ServiceError>;
}

/// Employee collection with the company back-reference query.
#[async_trait]
pub trait EmployeeStore: EntityStore<Employee> {
    async fn find_all_by_company_id(&self, company_id: &str) -> Result<Vec<Employee>, ServiceError>;
}

/// Store handles shared by both directory services.
#[derive(Clone)]
pub struct Stores {
    pub companies: Arc<dyn EntityStore<Company>>,
    pub employees: Arc<dyn EmployeeStore>,
}

impl Stores {
    /// Fresh, empty in-memory stores.
    pub fn in_memory() -> Self {
        Self {
            companies: Arc::new(MemoryStore::<Company>::new()),
            employees: Arc::new(MemoryStore::<Employee>::new()),
        }
    }
}
