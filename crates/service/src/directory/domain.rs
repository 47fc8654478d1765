use serde::{Deserialize, Serialize};

/// A persisted document with a store-assigned identifier.
pub trait Document: Clone + Send + Sync + Serialize + serde::de::DeserializeOwned + 'static {
    /// Caller-supplied value before an id exists.
    type Draft: Send + Sync + 'static;

    /// Human-readable kind used in errors and logs.
    const KIND: &'static str;

    fn id(&self) -> &str;

    fn from_draft(id: String, draft: Self::Draft) -> Self;
}

/// Company record as stored. Employee membership is never stored here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: String,
    pub company_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyDraft {
    pub company_name: String,
}

impl Document for Company {
    type Draft = CompanyDraft;
    const KIND: &'static str = "company";

    fn id(&self) -> &str { &self.id }

    fn from_draft(id: String, draft: CompanyDraft) -> Self {
        Self { id, company_name: draft.company_name }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub age: i32,
    pub gender: String,
    pub salary: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDraft {
    pub name: String,
    pub age: i32,
    pub gender: String,
    pub salary: i64,
    #[serde(default)]
    pub company_id: Option<String>,
}

impl EmployeeDraft {
    /// Blank company references count as absent.
    pub fn normalized(mut self) -> Self {
        self.company_id = self
            .company_id
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());
        self
    }
}

impl Document for Employee {
    type Draft = EmployeeDraft;
    const KIND: &'static str = "employee";

    fn id(&self) -> &str { &self.id }

    fn from_draft(id: String, draft: EmployeeDraft) -> Self {
        Self {
            id,
            name: draft.name,
            age: draft.age,
            gender: draft.gender,
            salary: draft.salary,
            company_id: draft.company_id,
        }
    }
}

/// A company together with the employees resolved for it at read time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyProfile {
    pub company: Company,
    pub employees: Vec<Employee>,
}

impl CompanyProfile {
    pub fn employees_number(&self) -> usize { self.employees.len() }
}
