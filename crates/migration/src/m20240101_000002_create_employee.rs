//! Create `employee` table.
//!
//! `company_id` is a plain nullable column without a foreign key: deleting a
//! company leaves its employees' references in place.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Employee::Table)
                    .if_not_exists()
                    .col(uuid(Employee::Id).primary_key())
                    .col(string_len(Employee::Name, 256).not_null())
                    .col(integer(Employee::Age).not_null())
                    .col(string_len(Employee::Gender, 32).not_null())
                    .col(big_integer(Employee::Salary).not_null())
                    .col(uuid_null(Employee::CompanyId))
                    .col(timestamp_with_time_zone(Employee::CreatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Employee::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Employee {
    Table,
    Id,
    Name,
    Age,
    Gender,
    Salary,
    CompanyId,
    CreatedAt,
}
