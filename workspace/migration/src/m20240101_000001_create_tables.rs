use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create transactions table
        manager
            .create_table(
                Table::create()
                    .table(Transactions::Table)
                    .if_not_exists()
                    .col(pk_auto(Transactions::Id))
                    .col(decimal(Transactions::Amount).decimal_len(16, 4))
                    .col(date(Transactions::Date))
                    .col(string(Transactions::Description))
                    .col(string_len(Transactions::Category, 32).default("Other"))
                    .to_owned(),
            )
            .await?;

        // Create budgets table
        manager
            .create_table(
                Table::create()
                    .table(Budgets::Table)
                    .if_not_exists()
                    .col(pk_auto(Budgets::Id))
                    .col(string_len(Budgets::Category, 32))
                    .col(decimal(Budgets::Amount).decimal_len(16, 4))
                    .col(unsigned(Budgets::Month))
                    .col(integer(Budgets::Year))
                    .to_owned(),
            )
            .await?;

        // Create incomes table
        manager
            .create_table(
                Table::create()
                    .table(Incomes::Table)
                    .if_not_exists()
                    .col(pk_auto(Incomes::Id))
                    .col(decimal(Incomes::Amount).decimal_len(16, 4))
                    .col(string(Incomes::Source))
                    .col(unsigned(Incomes::Month))
                    .col(integer(Incomes::Year))
                    .col(date(Incomes::Date))
                    .col(boolean(Incomes::Recurring).default(false))
                    .col(string_null(Incomes::Notes))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Incomes::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Budgets::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Transactions::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Transactions {
    Table,
    Id,
    Amount,
    Date,
    Description,
    Category,
}

#[derive(DeriveIden)]
enum Budgets {
    Table,
    Id,
    Category,
    Amount,
    Month,
    Year,
}

#[derive(DeriveIden)]
enum Incomes {
    Table,
    Id,
    Amount,
    Source,
    Month,
    Year,
    Date,
    Recurring,
    Notes,
}
