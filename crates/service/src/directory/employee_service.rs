use std::sync::Arc;

use tracing::{info, instrument, warn};

use super::domain::{Company, Document, Employee, EmployeeDraft};
use super::list_window;
use crate::errors::ServiceError;
use crate::pagination::Pagination;
use crate::store::{EmployeeStore, EntityStore};

/// Case-insensitive exact match on the gender attribute.
pub fn gender_matches(employee_gender: &str, wanted: &str) -> bool {
    employee_gender.to_lowercase() == wanted.to_lowercase()
}

/// Keep employees of the given gender, preserving order.
pub fn filter_by_gender(employees: Vec<Employee>, gender: &str) -> Vec<Employee> {
    employees.into_iter().filter(|e| gender_matches(&e.gender, gender)).collect()
}

/// Employee directory: CRUD, filtered listing and company reference checks.
pub struct EmployeeService {
    employees: Arc<dyn EmployeeStore>,
    companies: Arc<dyn EntityStore<Company>>,
}

impl EmployeeService {
    pub fn new(employees: Arc<dyn EmployeeStore>, companies: Arc<dyn EntityStore<Company>>) -> Self {
        Self { employees, companies }
    }

    /// List employees, optionally filtered by gender, then windowed.
    ///
    /// A blank gender is treated as no filter.
    #[instrument(skip(self))]
    pub async fn list_all(&self, gender: Option<&str>, pagination: Option<Pagination>) -> Result<Vec<Employee>, ServiceError> {
        match gender.map(str::trim).filter(|g| !g.is_empty()) {
            None => list_window(&*self.employees, pagination).await,
            Some(g) => {
                let filtered = filter_by_gender(self.employees.find_all().await?, g);
                Ok(match pagination {
                    Some(p) => p.apply(filtered),
                    None => filtered,
                })
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: &str) -> Result<Employee, ServiceError> {
        self.employees
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found(Employee::KIND, id))
    }

    async fn ensure_company_exists(&self, company_id: &str) -> Result<(), ServiceError> {
        if self.companies.exists_by_id(company_id).await? {
            Ok(())
        } else {
            warn!(%company_id, "employee_references_missing_company");
            Err(ServiceError::company_not_found(company_id))
        }
    }

    /// Persist a new employee after checking its company reference.
    #[instrument(skip(self, draft), fields(company_id = ?draft.company_id))]
    pub async fn add(&self, draft: EmployeeDraft) -> Result<Employee, ServiceError> {
        let draft = draft.normalized();
        if let Some(company_id) = draft.company_id.as_deref() {
            self.ensure_company_exists(company_id).await?;
        }
        let created = self.employees.insert(draft).await?;
        info!(employee_id = %created.id, "employee_added");
        Ok(created)
    }

    /// Full replace keyed by `id`.
    ///
    /// The target's existence is checked before the company reference, so a
    /// missing employee reports `NotFound` even when the reference is bad too.
    #[instrument(skip(self, draft), fields(company_id = ?draft.company_id))]
    pub async fn replace(&self, id: &str, draft: EmployeeDraft) -> Result<Employee, ServiceError> {
        if !self.employees.exists_by_id(id).await? {
            return Err(ServiceError::not_found(Employee::KIND, id));
        }
        let draft = draft.normalized();
        if let Some(company_id) = draft.company_id.as_deref() {
            self.ensure_company_exists(company_id).await?;
        }
        let saved = self.employees.save(Employee::from_draft(id.to_string(), draft)).await?;
        info!(employee_id = %saved.id, "employee_replaced");
        Ok(saved)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> Result<(), ServiceError> {
        if !self.employees.exists_by_id(id).await? {
            return Err(ServiceError::not_found(Employee::KIND, id));
        }
        self.employees.delete_by_id(id).await?;
        info!(employee_id = %id, "employee_deleted");
        Ok(())
    }
}
