use rust_decimal::Decimal;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
    Set,
};
use tracing::{debug, info, instrument, warn};

use crate::entities::budget::{ActiveModel, Column, Entity, Model};
use crate::entities::category::Category;
use crate::period::PeriodFilter;

/// Outcome of [`upsert_budget`].
#[derive(Debug, Clone, PartialEq)]
pub struct Upserted {
    pub budget: Model,
    /// `true` when a new row was inserted, `false` when an existing amount was replaced.
    pub created: bool,
}

/// Lists budgets in storage order.
///
/// Filters match the stored `month`/`year` fields.
#[instrument(skip(db))]
pub async fn list_budgets<C: ConnectionTrait>(
    db: &C,
    filter: PeriodFilter,
) -> Result<Vec<Model>, DbErr> {
    let query = match filter {
        PeriodFilter::All => Entity::find(),
        PeriodFilter::Year(year) => Entity::find().filter(Column::Year.eq(year)),
        PeriodFilter::Month { year, month } => Entity::find()
            .filter(Column::Year.eq(year))
            .filter(Column::Month.eq(month)),
    };

    let budgets = query.order_by_asc(Column::Id).all(db).await?;
    debug!("Loaded {} budgets", budgets.len());
    Ok(budgets)
}

pub async fn find_budget<C: ConnectionTrait>(db: &C, id: i32) -> Result<Option<Model>, DbErr> {
    Entity::find_by_id(id).one(db).await
}

/// Looks a budget up by its logical key.
pub async fn find_budget_by_key<C: ConnectionTrait>(
    db: &C,
    category: Category,
    month: u32,
    year: i32,
) -> Result<Option<Model>, DbErr> {
    Entity::find()
        .filter(Column::Category.eq(category))
        .filter(Column::Month.eq(month))
        .filter(Column::Year.eq(year))
        .one(db)
        .await
}

/// Sets the amount of the budget for (category, month, year), inserting it
/// if it does not exist yet.
///
/// The lookup and the write are not isolated. A concurrent insert of the same
/// key between them is caught by the unique index and reported as an update.
#[instrument(skip(db))]
pub async fn upsert_budget<C: ConnectionTrait>(
    db: &C,
    category: Category,
    month: u32,
    year: i32,
    amount: Decimal,
) -> Result<Upserted, DbErr> {
    if let Some(existing) = find_budget_by_key(db, category, month, year).await? {
        debug!("Replacing amount of budget {}", existing.id);
        return replace_amount(db, existing, amount).await;
    }

    insert_or_replace(db, category, month, year, amount).await
}

/// Inserts a new budget, or replaces the amount of the row that won the key
/// when another writer got there first. Last writer wins either way and
/// `created` reports which of the two happened.
async fn insert_or_replace<C: ConnectionTrait>(
    db: &C,
    category: Category,
    month: u32,
    year: i32,
    amount: Decimal,
) -> Result<Upserted, DbErr> {
    let budget = ActiveModel {
        category: Set(category),
        month: Set(month),
        year: Set(year),
        amount: Set(amount),
        ..Default::default()
    };

    let inserted = Entity::insert(budget)
        .on_conflict(
            OnConflict::columns([Column::Category, Column::Month, Column::Year])
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(db)
        .await?;

    let budget = find_budget_by_key(db, category, month, year)
        .await?
        .ok_or_else(|| DbErr::RecordNotFound(format!("budget {:?}/{}/{}", category, month, year)))?;

    if inserted == 0 {
        warn!("Budget {} was inserted concurrently, replacing its amount", budget.id);
        return replace_amount(db, budget, amount).await;
    }

    info!("Created budget {} for {:?} {}/{}", budget.id, category, month, year);
    Ok(Upserted {
        budget,
        created: true,
    })
}

async fn replace_amount<C: ConnectionTrait>(
    db: &C,
    existing: Model,
    amount: Decimal,
) -> Result<Upserted, DbErr> {
    let mut budget: ActiveModel = existing.into();
    budget.amount = Set(amount);
    let budget = budget.update(db).await?;
    Ok(Upserted {
        budget,
        created: false,
    })
}

/// Replaces the amount of the budget with the given id.
#[instrument(skip(db))]
pub async fn update_budget_amount<C: ConnectionTrait>(
    db: &C,
    id: i32,
    amount: Decimal,
) -> Result<Option<Model>, DbErr> {
    let Some(existing) = Entity::find_by_id(id).one(db).await? else {
        debug!("Budget {} does not exist", id);
        return Ok(None);
    };

    let mut budget: ActiveModel = existing.into();
    budget.amount = Set(amount);
    budget.update(db).await.map(Some)
}

#[instrument(skip(db))]
pub async fn delete_budget<C: ConnectionTrait>(db: &C, id: i32) -> Result<Option<Model>, DbErr> {
    let Some(existing) = Entity::find_by_id(id).one(db).await? else {
        debug!("Budget {} does not exist", id);
        return Ok(None);
    };

    Entity::delete_by_id(id).exec(db).await?;
    Ok(Some(existing))
}
