use std::sync::Arc;

use tracing::{info, instrument};

use super::domain::{Company, CompanyDraft, CompanyProfile, Document, Employee};
use super::list_window;
use crate::errors::ServiceError;
use crate::pagination::Pagination;
use crate::store::{EmployeeStore, EntityStore};

/// Company directory: CRUD, listing and employee resolution.
///
/// Employee membership is always read from the employee store; nothing
/// about employees is written to a company record.
pub struct CompanyService {
    companies: Arc<dyn EntityStore<Company>>,
    employees: Arc<dyn EmployeeStore>,
}

impl CompanyService {
    pub fn new(companies: Arc<dyn EntityStore<Company>>, employees: Arc<dyn EmployeeStore>) -> Self {
        Self { companies, employees }
    }

    #[instrument(skip(self))]
    pub async fn list_all(&self, pagination: Option<Pagination>) -> Result<Vec<Company>, ServiceError> {
        list_window(&*self.companies, pagination).await
    }

    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: &str) -> Result<Company, ServiceError> {
        self.companies
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found(Company::KIND, id))
    }

    /// Employees whose `company_id` is `id`, in store order.
    #[instrument(skip(self))]
    pub async fn get_employees_by_id(&self, id: &str) -> Result<Vec<Employee>, ServiceError> {
        if !self.companies.exists_by_id(id).await? {
            return Err(ServiceError::not_found(Company::KIND, id));
        }
        self.employees.find_all_by_company_id(id).await
    }

    /// Resolve the employee list for an already loaded company.
    ///
    /// A company deleted between load and resolution yields an empty list.
    pub async fn profile(&self, company: Company) -> Result<CompanyProfile, ServiceError> {
        let employees = match self.get_employees_by_id(&company.id).await {
            Ok(list) => list,
            Err(ServiceError::NotFound(_)) => Vec::new(),
            Err(e) => return Err(e),
        };
        Ok(CompanyProfile { company, employees })
    }

    /// Persist a new company under a store-assigned id.
    ///
    /// # Examples
    /// ```
    /// use service::{Directory, directory::domain::CompanyDraft};
    /// let dir = Directory::in_memory();
    /// let acme = tokio_test::block_on(dir.companies.add(CompanyDraft { company_name: "Acme".into() })).unwrap();
    /// let profile = tokio_test::block_on(dir.companies.profile(acme)).unwrap();
    /// assert_eq!(profile.company.company_name, "Acme");
    /// assert_eq!(profile.employees_number(), 0);
    /// ```
    #[instrument(skip(self, draft), fields(company_name = %draft.company_name))]
    pub async fn add(&self, draft: CompanyDraft) -> Result<Company, ServiceError> {
        let created = self.companies.insert(draft).await?;
        info!(company_id = %created.id, "company_added");
        Ok(created)
    }

    /// Full replace; the id is kept, every other field comes from `draft`.
    #[instrument(skip(self, draft))]
    pub async fn replace(&self, id: &str, draft: CompanyDraft) -> Result<Company, ServiceError> {
        if !self.companies.exists_by_id(id).await? {
            return Err(ServiceError::not_found(Company::KIND, id));
        }
        let saved = self.companies.save(Company::from_draft(id.to_string(), draft)).await?;
        info!(company_id = %saved.id, "company_replaced");
        Ok(saved)
    }

    /// Remove the company. Employees referencing it are left as they are.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> Result<(), ServiceError> {
        if !self.companies.exists_by_id(id).await? {
            return Err(ServiceError::not_found(Company::KIND, id));
        }
        self.companies.delete_by_id(id).await?;
        info!(company_id = %id, "company_deleted");
        Ok(())
    }
}
