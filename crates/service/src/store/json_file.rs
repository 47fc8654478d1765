use std::{path::PathBuf, sync::Arc};

use async_trait::async_trait;
use tokio::{fs, sync::RwLock};
use tracing::{debug, info};

use super::collection::Collection;
use super::{EmployeeStore, EntityStore};
use crate::directory::domain::{Document, Employee};
use crate::errors::ServiceError;

/// JSON file-backed document collection.
///
/// Keeps the collection in memory and rewrites the whole file (as an ordered
/// JSON array) after every mutation. Intended for single-process deployments
/// where a database is overkill.
#[derive(Clone)]
pub struct JsonDocumentStore<T> {
    inner: Arc<RwLock<Collection<T>>>,
    file_path: PathBuf,
}

impl<T: Document> JsonDocumentStore<T> {
    /// Initialize the store from a path. Creates the file with an empty array if missing.
    pub async fn new<P: Into<PathBuf>>(path: P) -> Result<Arc<Self>, ServiceError> {
        let file_path = path.into();
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).await.map_err(|e| ServiceError::Db(e.to_string()))?;
        }

        let docs: Vec<T> = match fs::read(&file_path).await {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => Vec::new(),
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|e| {
                ServiceError::Db(format!("corrupt {} file {}: {}", T::KIND, file_path.display(), e))
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                fs::write(&file_path, b"[]").await.map_err(|e| ServiceError::Db(e.to_string()))?;
                Vec::new()
            }
            Err(e) => return Err(ServiceError::Db(e.to_string())),
        };
        info!(kind = T::KIND, path = %file_path.display(), count = docs.len(), "json_document_store_loaded");

        Ok(Arc::new(Self { inner: Arc::new(RwLock::new(Collection::from_vec(docs))), file_path }))
    }

    /// Write the collection to a sibling temp file, then rename over the target.
    async fn persist(&self, docs: &Collection<T>) -> Result<(), ServiceError> {
        let data = serde_json::to_vec_pretty(&docs.to_vec()).map_err(|e| ServiceError::Db(e.to_string()))?;
        let tmp = self.file_path.with_extension("json.tmp");
        fs::write(&tmp, data).await.map_err(|e| ServiceError::Db(e.to_string()))?;
        fs::rename(&tmp, &self.file_path).await.map_err(|e| ServiceError::Db(e.to_string()))?;
        debug!(kind = T::KIND, count = docs.len(), "json_document_store_persisted");
        Ok(())
    }

    /// Apply a mutation to a copy and persist it while still holding the
    /// write lock. The in-memory collection is replaced only once the file
    /// write succeeded.
    async fn mutate<R, F>(&self, f: F) -> Result<R, ServiceError>
    where
        F: FnOnce(&mut Collection<T>) -> R,
    {
        let mut docs = self.inner.write().await;
        let mut next = docs.clone();
        let out = f(&mut next);
        self.persist(&next).await?;
        *docs = next;
        Ok(out)
    }
}

#[async_trait]
impl<T: Document> EntityStore<T> for JsonDocumentStore<T> {
    async fn insert(&self, draft: T::Draft) -> Result<T, ServiceError> {
        self.mutate(|c| c.insert_new(draft)).await
    }

    async fn save(&self, entity: T) -> Result<T, ServiceError> {
        self.mutate(|c| c.upsert(entity)).await
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
        if !self.inner.read().await.contains(id) {
            return Ok(());
        }
        self.mutate(|c| { c.remove(id); }).await
    }
}

#[async_trait]
impl EmployeeStore for JsonDocumentStore<Employee> {
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
    async fn json_document_store_crud_persists() -> Result<(), anyhow::Error> {
        let tmp = std::env::temp_dir().join(format!("json_document_store_{}.json", uuid::Uuid::new_v4()));
        let store = JsonDocumentStore::<Company>::new(&tmp).await?;

        // initially empty
        assert_eq!(store.find_all().await?.len(), 0);

        let a = store.insert(CompanyDraft { company_name: "A".into() }).await?;
        let b = store.insert(CompanyDraft { company_name: "B".into() }).await?;
        store.save(Company { id: a.id.clone(), company_name: "A2".into() }).await?;
        store.delete_by_id(&b.id).await?;
        let c = store.insert(CompanyDraft { company_name: "C".into() }).await?;

        // reload keeps content and order
        let reloaded = JsonDocumentStore::<Company>::new(&tmp).await?;
        let names: Vec<_> = reloaded.find_all().await?.into_iter().map(|c| c.company_name).collect();
        assert_eq!(names, vec!["A2", "C"]);
        assert_eq!(reloaded.find_by_id(&c.id).await?, Some(c));
        assert!(!reloaded.exists_by_id(&b.id).await?);

        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }

    #[tokio::test]
    async fn failed_write_leaves_collection_untouched() -> Result<(), anyhow::Error> {
        let tmp = std::env::temp_dir().join(format!("json_document_store_ro_{}.json", uuid::Uuid::new_v4()));
        let store = JsonDocumentStore::<Company>::new(&tmp).await?;
        let kept = store.insert(CompanyDraft { company_name: "Kept".into() }).await?;

        // a directory where the temp file goes makes every persist fail
        let blocker = tmp.with_extension("json.tmp");
        tokio::fs::create_dir_all(&blocker).await?;

        let res = store.insert(CompanyDraft { company_name: "Ghost".into() }).await;
        assert!(matches!(res, Err(ServiceError::Db(_))));
        let res = store.delete_by_id(&kept.id).await;
        assert!(matches!(res, Err(ServiceError::Db(_))));
        assert_eq!(store.find_all().await?, vec![kept.clone()]);

        let _ = tokio::fs::remove_dir_all(&blocker).await;
        let reloaded = JsonDocumentStore::<Company>::new(&tmp).await?;
        assert_eq!(reloaded.find_all().await?, vec![kept]);
        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }

    #[tokio::test]
    async fn corrupt_file_is_an_error() -> Result<(), anyhow::Error> {
        let tmp = std::env::temp_dir().join(format!("json_document_store_bad_{}.json", uuid::Uuid::new_v4()));
        tokio::fs::write(&tmp, b"{not json").await?;
        let res = JsonDocumentStore::<Employee>::new(&tmp).await;
        assert!(matches!(res, Err(ServiceError::Db(_))));
        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }

    #[tokio::test]
    async fn employees_by_company_survive_reload() -> Result<(), anyhow::Error> {
        let tmp = std::env::temp_dir().join(format!("json_document_store_emp_{}.json", uuid::Uuid::new_v4()));
        let store = JsonDocumentStore::<Employee>::new(&tmp).await?;
        let sam = store
            .insert(EmployeeDraft { name: "Sam".into(), age: 18, gender: "Male".into(), salary: 20000, company_id: Some("c1".into()) })
            .await?;
        store
            .insert(EmployeeDraft { name: "Kim".into(), age: 22, gender: "Female".into(), salary: 1, company_id: None })
            .await?;

        let reloaded = JsonDocumentStore::<Employee>::new(&tmp).await?;
        assert_eq!(reloaded.find_all_by_company_id("c1").await?, vec![sam]);
        assert_eq!(reloaded.find_all_paged(1, 5).await?.len(), 1);

        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }
}
