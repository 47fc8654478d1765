#![cfg(test)]
use std::sync::Arc;

use tokio::sync::OnceCell;
use sea_orm::DatabaseConnection;
use migration::MigratorTrait;

use crate::directory::domain::{Company, CompanyDraft, Employee, EmployeeDraft};
use crate::directory::{CompanyService, EmployeeService};
use crate::store::{MemoryStore, Stores};

// Ensure migrations run only once across the entire test process
static MIGRATED: OnceCell<()> = OnceCell::const_new();

fn db_config() -> configs::DatabaseConfig {
    let mut cfg = configs::DatabaseConfig {
        min_connections: 1,
        max_connections: 10,
        connect_timeout_secs: 10,
        idle_timeout_secs: 60,
        acquire_timeout_secs: 10,
        ..Default::default()
    };
    cfg.normalize_from_env();
    cfg
}

pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    // Run migrations exactly once, with a throwaway connection
    MIGRATED
        .get_or_init(|| async {
            let db = models::db::connect_with_config(&db_config()).await.expect("connect db for migration");
            migration::Migrator::up(&db, None).await.expect("migrate up");
            drop(db);
        })
        .await;

    // Return a fresh connection for the current test's runtime
    models::db::connect_with_config(&db_config()).await
}

/// Services over fresh in-memory stores, plus a handle on the raw employee store.
pub fn memory_services() -> (CompanyService, EmployeeService, Arc<MemoryStore<Employee>>) {
    let employees = Arc::new(MemoryStore::<Employee>::new());
    let stores = Stores { companies: Arc::new(MemoryStore::<Company>::new()), employees: employees.clone() };
    (
        CompanyService::new(stores.companies.clone(), stores.employees.clone()),
        EmployeeService::new(stores.employees, stores.companies),
        employees,
    )
}

pub fn company(name: &str) -> CompanyDraft {
    CompanyDraft { company_name: name.into() }
}

pub fn employee(name: &str, gender: &str, company_id: Option<&str>) -> EmployeeDraft {
    EmployeeDraft {
        name: name.into(),
        age: 18,
        gender: gender.into(),
        salary: 20000,
        company_id: company_id.map(str::to_string),
    }
}
