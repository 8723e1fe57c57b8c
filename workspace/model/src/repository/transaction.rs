use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
    Set,
};
use tracing::{debug, instrument, trace};

use crate::entities::category::Category;
use crate::entities::transaction::{ActiveModel, Column, Entity, Model};
use crate::period::PeriodFilter;

/// User supplied fields of a transaction, already validated.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    pub amount: Decimal,
    pub date: NaiveDate,
    pub description: String,
    pub category: Category,
}

/// Lists transactions, newest first.
///
/// Year and month filters match on the transaction date.
#[instrument(skip(db))]
pub async fn list_transactions<C: ConnectionTrait>(
    db: &C,
    filter: PeriodFilter,
) -> Result<Vec<Model>, DbErr> {
    let mut query = Entity::find();

    if filter != PeriodFilter::All {
        // A period chrono cannot represent contains no stored date
        let Some((start, end)) = filter.date_bounds() else {
            debug!("No calendar dates in {:?}", filter);
            return Ok(Vec::new());
        };
        trace!("Restricting transactions to {} ..= {}", start, end);
        query = query.filter(Column::Date.between(start, end));
    }

    let transactions = query
        .order_by_desc(Column::Date)
        .order_by_desc(Column::Id)
        .all(db)
        .await?;

    debug!("Loaded {} transactions", transactions.len());
    Ok(transactions)
}

pub async fn find_transaction<C: ConnectionTrait>(db: &C, id: i32) -> Result<Option<Model>, DbErr> {
    Entity::find_by_id(id).one(db).await
}

#[instrument(skip(db))]
pub async fn create_transaction<C: ConnectionTrait>(
    db: &C,
    data: NewTransaction,
) -> Result<Model, DbErr> {
    let transaction = ActiveModel {
        amount: Set(data.amount),
        date: Set(data.date),
        description: Set(data.description),
        category: Set(data.category),
        ..Default::default()
    }
    .insert(db)
    .await?;

    debug!("Inserted transaction {}", transaction.id);
    Ok(transaction)
}

/// Replaces every user field of an existing transaction.
#[instrument(skip(db))]
pub async fn update_transaction<C: ConnectionTrait>(
    db: &C,
    id: i32,
    data: NewTransaction,
) -> Result<Option<Model>, DbErr> {
    let Some(existing) = Entity::find_by_id(id).one(db).await? else {
        debug!("Transaction {} does not exist", id);
        return Ok(None);
    };

    let mut transaction: ActiveModel = existing.into();
    transaction.amount = Set(data.amount);
    transaction.date = Set(data.date);
    transaction.description = Set(data.description);
    transaction.category = Set(data.category);

    transaction.update(db).await.map(Some)
}

/// Deletes a transaction and returns what was removed.
#[instrument(skip(db))]
pub async fn delete_transaction<C: ConnectionTrait>(
    db: &C,
    id: i32,
) -> Result<Option<Model>, DbErr> {
    let Some(existing) = Entity::find_by_id(id).one(db).await? else {
        debug!("Transaction {} does not exist", id);
        return Ok(None);
    };

    Entity::delete_by_id(id).exec(db).await?;
    Ok(Some(existing))
}
