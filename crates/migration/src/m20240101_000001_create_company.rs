//! Create `company` table.
//!
//! Holds only the company's own attributes; employee counts are derived
//! from the `employee` table at read time.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Company::Table)
                    .if_not_exists()
                    .col(uuid(Company::Id).primary_key())
                    .col(string_len(Company::CompanyName, 256).not_null())
                    .col(timestamp_with_time_zone(Company::CreatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Company::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Company { Table, Id, CompanyName, CreatedAt }
