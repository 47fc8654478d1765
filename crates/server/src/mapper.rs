//! Wire shapes and conversions between them and the directory domain.

use serde::{Deserialize, Serialize};
use service::directory::domain::{Company, CompanyDraft, CompanyProfile, Employee, EmployeeDraft};
use service::{CompanyService, ServiceError};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompanyRequest {
    pub company_name: String,
}

impl CompanyRequest {
    pub fn into_draft(self) -> Result<CompanyDraft, ServiceError> {
        models::company::validate_company_name(&self.company_name)?;
        Ok(CompanyDraft { company_name: self.company_name.trim().to_string() })
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRequest {
    pub name: String,
    pub age: i32,
    pub gender: String,
    pub salary: i64,
    #[serde(default)]
    pub company_id: Option<String>,
}

impl EmployeeRequest {
    pub fn into_draft(self) -> Result<EmployeeDraft, ServiceError> {
        models::employee::validate_fields(&self.name, self.age, &self.gender, self.salary)?;
        Ok(EmployeeDraft {
            name: self.name,
            age: self.age,
            gender: self.gender,
            salary: self.salary,
            company_id: self.company_id,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeResponse {
    pub id: String,
    pub name: String,
    pub age: i32,
    pub gender: String,
    pub salary: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_id: Option<String>,
}

impl From<Employee> for EmployeeResponse {
    fn from(e: Employee) -> Self {
        Self { id: e.id, name: e.name, age: e.age, gender: e.gender, salary: e.salary, company_id: e.company_id }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompanyResponse {
    pub id: String,
    pub company_name: String,
    pub employees_number: usize,
    pub employees: Vec<EmployeeResponse>,
}

impl From<CompanyProfile> for CompanyResponse {
    fn from(p: CompanyProfile) -> Self {
        let employees_number = p.employees_number();
        Self {
            id: p.company.id,
            company_name: p.company.company_name,
            employees_number,
            employees: p.employees.into_iter().map(Into::into).collect(),
        }
    }
}

/// Embed the company's current employees into its response.
pub async fn company_response(companies: &CompanyService, company: Company) -> Result<CompanyResponse, ServiceError> {
    Ok(companies.profile(company).await?.into())
}

pub async fn company_responses(companies: &CompanyService, list: Vec<Company>) -> Result<Vec<CompanyResponse>, ServiceError> {
    let mut out = Vec::with_capacity(list.len());
    for company in list {
        out.push(company_response(companies, company).await?);
    }
    Ok(out)
}
