use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Employee: lookups by company
        manager
            .create_index(
                Index::create()
                    .name("idx_employee_company")
                    .table(Employee::Table)
                    .col(Employee::CompanyId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        // Listing order
        manager
            .create_index(
                Index::create()
                    .name("idx_company_created_at")
                    .table(Company::Table)
                    .col(Company::CreatedAt)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_employee_created_at")
                    .table(Employee::Table)
                    .col(Employee::CreatedAt)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_index(Index::drop().name("idx_employee_created_at").table(Employee::Table).to_owned()).await?;
        manager.drop_index(Index::drop().name("idx_company_created_at").table(Company::Table).to_owned()).await?;
        manager.drop_index(Index::drop().name("idx_employee_company").table(Employee::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Company { Table, CreatedAt }

#[derive(DeriveIden)]
enum Employee { Table, CompanyId, CreatedAt }
