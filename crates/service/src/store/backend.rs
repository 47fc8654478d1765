//! Open the configured storage backend.

use std::{path::Path, sync::Arc};

use configs::{AppConfig, StorageBackend};
use tracing::info;

use super::seaorm::{SeaOrmCompanyStore, SeaOrmEmployeeStore};
use super::{JsonDocumentStore, Stores};
use crate::directory::domain::{Company, Employee};

pub const COMPANIES_FILE: &str = "companies.json";
pub const EMPLOYEES_FILE: &str = "employees.json";

/// Build both entity stores for the configured backend.
pub async fn open(cfg: &AppConfig) -> anyhow::Result<Stores> {
    let stores = match cfg.storage.backend {
        StorageBackend::Memory => Stores::in_memory(),
        StorageBackend::Json => {
            common::env::ensure_data_dir(&cfg.storage.data_dir).await?;
            let dir = Path::new(&cfg.storage.data_dir);
            let companies = JsonDocumentStore::<Company>::new(dir.join(COMPANIES_FILE)).await?;
            let employees = JsonDocumentStore::<Employee>::new(dir.join(EMPLOYEES_FILE)).await?;
            Stores { companies, employees }
        }
        StorageBackend::Postgres => {
            let db = models::db::connect_and_migrate(&cfg.database).await?;
            Stores {
                companies: Arc::new(SeaOrmCompanyStore { db: db.clone() }),
                employees: Arc::new(SeaOrmEmployeeStore { db }),
            }
        }
    };
    info!(backend = ?cfg.storage.backend, "entity_stores_opened");
    Ok(stores)
}
