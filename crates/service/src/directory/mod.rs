//! Directory services: the domain layer for companies and employees.
//!
//! `domain` holds the document types; each resource kind gets its own
//! service over the store traits in `crate::store`.

use std::sync::Arc;

use crate::errors::ServiceError;
use crate::pagination::Pagination;
use crate::store::{EntityStore, Stores};

pub mod domain;
pub mod company_service;
pub mod employee_service;

pub use company_service::CompanyService;
pub use employee_service::EmployeeService;

use domain::Document;

/// Both directory services wired over the same pair of stores.
#[derive(Clone)]
pub struct Directory {
    pub companies: Arc<CompanyService>,
    pub employees: Arc<EmployeeService>,
}

impl Directory {
    pub fn new(stores: Stores) -> Self {
        Self {
            companies: Arc::new(CompanyService::new(stores.companies.clone(), stores.employees.clone())),
            employees: Arc::new(EmployeeService::new(stores.employees, stores.companies)),
        }
    }

    pub fn in_memory() -> Self { Self::new(Stores::in_memory()) }
}

/// List every document, or only the requested window pushed down to the store.
pub(crate) async fn list_window<T, S>(store: &S, pagination: Option<Pagination>) -> Result<Vec<T>, ServiceError>
where
    T: Document,
    S: EntityStore<T> + ?Sized,
{
    match pagination {
        None => store.find_all().await,
        Some(p) => match p.window() {
            Some((offset, limit)) => store.find_all_paged(offset, limit).await,
            None => Ok(Vec::new()),
        },
    }
}
