use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "employee")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub age: i32,
    pub gender: String,
    pub salary: i64,
    pub company_id: Option<Uuid>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub const MAX_AGE: i32 = 150;

pub fn validate_name(name: &str) -> Result<(), ModelError> {
    if name.trim().is_empty() {
        return Err(ModelError::Validation("name required".into()));
    }
    Ok(())
}

pub fn validate_age(age: i32) -> Result<(), ModelError> {
    if !(0..=MAX_AGE).contains(&age) {
        return Err(ModelError::Validation(format!("age must be within 0..={MAX_AGE}")));
    }
    Ok(())
}

pub fn validate_gender(gender: &str) -> Result<(), ModelError> {
    if gender.trim().is_empty() {
        return Err(ModelError::Validation("gender required".into()));
    }
    Ok(())
}

pub fn validate_salary(salary: i64) -> Result<(), ModelError> {
    if salary < 0 {
        return Err(ModelError::Validation("salary must not be negative".into()));
    }
    Ok(())
}

/// Validate every scalar attribute of an employee.
pub fn validate_fields(name: &str, age: i32, gender: &str, salary: i64) -> Result<(), ModelError> {
    validate_name(name)?;
    validate_age(age)?;
    validate_gender(gender)?;
    validate_salary(salary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_employee() {
        assert!(validate_fields("Sam", 18, "Male", 20000).is_ok());
    }

    #[test]
    fn rejects_each_bad_field() {
        assert!(validate_fields("", 18, "Male", 1).is_err());
        assert!(validate_fields("Sam", -1, "Male", 1).is_err());
        assert!(validate_fields("Sam", MAX_AGE + 1, "Male", 1).is_err());
        assert!(validate_fields("Sam", 18, " ", 1).is_err());
        assert!(validate_fields("Sam", 18, "Female", -5).is_err());
    }
}
