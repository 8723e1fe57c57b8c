use sea_orm_migration::prelude::*;

/// One budget per (category, month, year). The repository upsert relies on
/// this index for its `ON CONFLICT` target.
#[derive(DeriveMigrationName)]
pub struct Migration;

const INDEX_NAME: &str = "idx-budgets-category-month-year";

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .name(INDEX_NAME)
                    .table(Budgets::Table)
                    .col(Budgets::Category)
                    .col(Budgets::Month)
                    .col(Budgets::Year)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name(INDEX_NAME).table(Budgets::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Budgets {
    Table,
    Category,
    Month,
    Year,
}
