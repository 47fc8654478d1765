//! In-memory entity store.
//!
//! Default backend and the test double used across the service tests.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::collection::Collection;
use super::{EmployeeStore, EntityStore};
use crate::directory::domain::{Document, Employee};
use crate::errors::ServiceError;

#[derive(Clone)]
pub struct MemoryStore<T> {
    inner: Arc<RwLock<Collection<T>>>,
}

impl<T: Document> Default for MemoryStore<T> {
    fn default() -> Self {
        Self { inner: Arc::new(RwLock::new(Collection::new())) }
    }
}

impl<T: Document> MemoryStore<T> {
    pub fn new() -> Self { Self::default() }

    /// Number of stored documents.
    pub async fn len(&self) -> usize { self.inner.read().await.len() }
}

#[async_trait]
impl<T: Document> EntityStore<T> for MemoryStore<T> {
    async fn insert(&self, draft: T::Draft) -> Result<T, ServiceError> {
        Ok(self.inner.write().await.insert_new(draft))
    }

    async fn save(&self, entity: T) -> Result<T, ServiceError> {
        Ok(self.inner.write().await.upsert(entity))
    }

    async fn exists_by_id(&self, id: &str) -> Result<bool, ServiceError> {
        Ok(self.inner.read().await.contains(id))
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<T>, ServiceError> {
        Ok(self.inner.read().await.get(id))
    }

    async fn find_all(&self) -> Result<Vec<T>, ServiceError> {
        Ok(self.inner.read().await.to_vec())
    }

    async fn find_all_paged(&self, offset: u64, limit: u64) -> Result<Vec<T>, ServiceError> {
        Ok(self.inner.read().await.window(offset, limit))
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), ServiceError> {
        self.inner.write().await.remove(id);
        Ok(())
    }
}

#[async_trait]
impl EmployeeStore for MemoryStore<Employee> {
    async fn find_all_by_company_id(&self, company_id: &str) -> Result<Vec<Employee>, ServiceError> {
        Ok(self
            .inner
            .read()
            .await
            .filter(|e| e.company_id.as_deref() == Some(company_id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::domain::{Company, CompanyDraft, EmployeeDraft};

    #[tokio::test]
    async fn memory_store_crud() -> Result<(), anyhow::Error> {
        let store = MemoryStore::<Company>::new();
        let a = store.insert(CompanyDraft { company_name: "Acme".into() }).await?;
        assert!(store.exists_by_id(&a.id).await?);
        assert_eq!(store.find_by_id(&a.id).await?, Some(a.clone()));

        let renamed = store.save(Company { id: a.id.clone(), company_name: "Acme Ltd".into() }).await?;
        assert_eq!(store.find_by_id(&a.id).await?.unwrap(), renamed);
        assert_eq!(store.len().await, 1);

        store.delete_by_id(&a.id).await?;
        assert!(!store.exists_by_id(&a.id).await?);
        // deleting again is a no-op at the store level
        store.delete_by_id(&a.id).await?;
        Ok(())
    }

    #[tokio::test]
    async fn employees_by_company_in_store_order() -> Result<(), anyhow::Error> {
        let store = MemoryStore::<Employee>::new();
        let draft = |name: &str, company: Option<&str>| EmployeeDraft {
            name: name.into(),
            age: 30,
            gender: "Female".into(),
            salary: 1000,
            company_id: company.map(str::to_string),
        };
        store.insert(draft("a", Some("c1"))).await?;
        store.insert(draft("b", Some("c2"))).await?;
        store.insert(draft("c", Some("c1"))).await?;
        store.insert(draft("d", None)).await?;

        let names: Vec<_> = store
            .find_all_by_company_id("c1")
            .await?
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, vec!["a", "c"]);
        assert!(store.find_all_by_company_id("nope").await?.is_empty());
        Ok(())
    }
}
