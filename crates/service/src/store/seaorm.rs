//! PostgreSQL-backed stores (SeaORM entities from the `models` crate).
//!
//! Ids are UUIDs in the database; an id string that is not a UUID cannot
//! name a stored row and is reported as absent.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

use models::{company, employee};

use super::{EmployeeStore, EntityStore};
use crate::directory::domain::{Company, CompanyDraft, Employee, EmployeeDraft};
use crate::errors::ServiceError;

fn parse_id(id: &str) -> Option<Uuid> { Uuid::parse_str(id).ok() }

fn db_err(e: DbErr) -> ServiceError { ServiceError::Db(e.to_string()) }

fn parse_company_ref(company_id: Option<&str>) -> Result<Option<Uuid>, ServiceError> {
    company_id
        .map(|c| parse_id(c).ok_or_else(|| ServiceError::Validation(format!("invalid companyId {}", c))))
        .transpose()
}

impl From<company::Model> for Company {
    fn from(m: company::Model) -> Self {
        Self { id: m.id.to_string(), company_name: m.company_name }
    }
}

impl From<employee::Model> for Employee {
    fn from(m: employee::Model) -> Self {
        Self {
            id: m.id.to_string(),
            name: m.name,
            age: m.age,
            gender: m.gender,
            salary: m.salary,
            company_id: m.company_id.map(|c| c.to_string()),
        }
    }
}

/// SeaORM-backed company store.
pub struct SeaOrmCompanyStore {
    pub db: DatabaseConnection,
}

impl SeaOrmCompanyStore {
    async fn insert_with_id(&self, id: Uuid, draft: CompanyDraft) -> Result<Company, ServiceError> {
        let am = company::ActiveModel {
            id: Set(id),
            company_name: Set(draft.company_name),
            created_at: Set(Utc::now().into()),
        };
        am.insert(&self.db).await.map(Into::into).map_err(db_err)
    }
}

#[async_trait]
impl EntityStore<Company> for SeaOrmCompanyStore {
    async fn insert(&self, draft: CompanyDraft) -> Result<Company, ServiceError> {
        self.insert_with_id(Uuid::new_v4(), draft).await
    }

    async fn save(&self, entity: Company) -> Result<Company, ServiceError> {
        let id = parse_id(&entity.id).ok_or_else(|| ServiceError::Validation(format!("invalid company id {}", entity.id)))?;
        match company::Entity::find_by_id(id).one(&self.db).await.map_err(db_err)? {
            Some(found) => {
                let mut am: company::ActiveModel = found.into();
                am.company_name = Set(entity.company_name);
                am.update(&self.db).await.map(Into::into).map_err(db_err)
            }
            None => self.insert_with_id(id, CompanyDraft { company_name: entity.company_name }).await,
        }
    }

    async fn exists_by_id(&self, id: &str) -> Result<bool, ServiceError> {
        Ok(self.find_by_id(id).await?.is_some())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Company>, ServiceError> {
        let Some(id) = parse_id(id) else { return Ok(None) };
        let found = company::Entity::find_by_id(id).one(&self.db).await.map_err(db_err)?;
        Ok(found.map(Into::into))
    }

    async fn find_all(&self) -> Result<Vec<Company>, ServiceError> {
        let rows = company::Entity::find()
            .order_by_asc(company::Column::CreatedAt)
            .order_by_asc(company::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_all_paged(&self, offset: u64, limit: u64) -> Result<Vec<Company>, ServiceError> {
        let rows = company::Entity::find()
            .order_by_asc(company::Column::CreatedAt)
            .order_by_asc(company::Column::Id)
            .offset(offset)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), ServiceError> {
        let Some(id) = parse_id(id) else { return Ok(()) };
        company::Entity::delete_by_id(id).exec(&self.db).await.map_err(db_err)?;
        Ok(())
    }
}

/// SeaORM-backed employee store.
pub struct SeaOrmEmployeeStore {
    pub db: DatabaseConnection,
}

impl SeaOrmEmployeeStore {
    async fn insert_with_id(&self, id: Uuid, draft: EmployeeDraft) -> Result<Employee, ServiceError> {
        let company_id = parse_company_ref(draft.company_id.as_deref())?;
        let am = employee::ActiveModel {
            id: Set(id),
            name: Set(draft.name),
            age: Set(draft.age),
            gender: Set(draft.gender),
            salary: Set(draft.salary),
            company_id: Set(company_id),
            created_at: Set(Utc::now().into()),
        };
        am.insert(&self.db).await.map(Into::into).map_err(db_err)
    }
}

#[async_trait]
impl EntityStore<Employee> for SeaOrmEmployeeStore {
    async fn insert(&self, draft: EmployeeDraft) -> Result<Employee, ServiceError> {
        self.insert_with_id(Uuid::new_v4(), draft).await
    }

    async fn save(&self, entity: Employee) -> Result<Employee, ServiceError> {
        let id = parse_id(&entity.id).ok_or_else(|| ServiceError::Validation(format!("invalid employee id {}", entity.id)))?;
        match employee::Entity::find_by_id(id).one(&self.db).await.map_err(db_err)? {
            Some(found) => {
                let company_id = parse_company_ref(entity.company_id.as_deref())?;
                let mut am: employee::ActiveModel = found.into();
                am.name = Set(entity.name);
                am.age = Set(entity.age);
                am.gender = Set(entity.gender);
                am.salary = Set(entity.salary);
                am.company_id = Set(company_id);
                am.update(&self.db).await.map(Into::into).map_err(db_err)
            }
            None => {
                let draft = EmployeeDraft {
                    name: entity.name,
                    age: entity.age,
                    gender: entity.gender,
                    salary: entity.salary,
                    company_id: entity.company_id,
                };
                self.insert_with_id(id, draft).await
            }
        }
    }

    async fn exists_by_id(&self, id: &str) -> Result<bool, ServiceError> {
        Ok(self.find_by_id(id).await?.is_some())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Employee>, ServiceError> {
        let Some(id) = parse_id(id) else { return Ok(None) };
        let found = employee::Entity::find_by_id(id).one(&self.db).await.map_err(db_err)?;
        Ok(found.map(Into::into))
    }

    async fn find_all(&self) -> Result<Vec<Employee>, ServiceError> {
        let rows = employee::Entity::find()
            .order_by_asc(employee::Column::CreatedAt)
            .order_by_asc(employee::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_all_paged(&self, offset: u64, limit: u64) -> Result<Vec<Employee>, ServiceError> {
        let rows = employee::Entity::find()
            .order_by_asc(employee::Column::CreatedAt)
            .order_by_asc(employee::Column::Id)
            .offset(offset)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), ServiceError> {
        let Some(id) = parse_id(id) else { return Ok(()) };
        employee::Entity::delete_by_id(id).exec(&self.db).await.map_err(db_err)?;
        Ok(())
    }
}

#[async_trait]
impl EmployeeStore for SeaOrmEmployeeStore {
    async fn find_all_by_company_id(&self, company_id: &str) -> Result<Vec<Employee>, ServiceError> {
        let Some(company_id) = parse_id(company_id) else { return Ok(Vec::new()) };
        let rows = employee::Entity::find()
            .filter(employee::Column::CompanyId.eq(company_id))
            .order_by_asc(employee::Column::CreatedAt)
            .order_by_asc(employee::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }
}
