use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
    Set,
};
use tracing::{debug, instrument};

use crate::entities::income::{ActiveModel, Column, Entity, Model};
use crate::period::PeriodFilter;

/// User supplied fields of an income record, already validated.
#[derive(Debug, Clone, PartialEq)]
pub struct NewIncome {
    pub amount: Decimal,
    pub source: String,
    pub month: u32,
    pub year: i32,
    pub date: NaiveDate,
    pub recurring: bool,
    pub notes: Option<String>,
}

/// Lists income records, newest first.
///
/// Filters match the stored `month`/`year` fields, not the date.
#[instrument(skip(db))]
pub async fn list_incomes<C: ConnectionTrait>(
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

    let incomes = query
        .order_by_desc(Column::Date)
        .order_by_desc(Column::Id)
        .all(db)
        .await?;

    debug!("Loaded {} income records", incomes.len());
    Ok(incomes)
}

pub async fn find_income<C: ConnectionTrait>(db: &C, id: i32) -> Result<Option<Model>, DbErr> {
    Entity::find_by_id(id).one(db).await
}

#[instrument(skip(db))]
pub async fn create_income<C: ConnectionTrait>(db: &C, data: NewIncome) -> Result<Model, DbErr> {
    let income = ActiveModel {
        amount: Set(data.amount),
        source: Set(data.source),
        month: Set(data.month),
        year: Set(data.year),
        date: Set(data.date),
        recurring: Set(data.recurring),
        notes: Set(data.notes),
        ..Default::default()
    }
    .insert(db)
    .await?;

    debug!("Inserted income {}", income.id);
    Ok(income)
}

/// Replaces every user field of an existing income record.
#[instrument(skip(db))]
pub async fn update_income<C: ConnectionTrait>(
    db: &C,
    id: i32,
    data: NewIncome,
) -> Result<Option<Model>, DbErr> {
    let Some(existing) = Entity::find_by_id(id).one(db).await? else {
        debug!("Income {} does not exist", id);
        return Ok(None);
    };

    let mut income: ActiveModel = existing.into();
    income.amount = Set(data.amount);
    income.source = Set(data.source);
    income.month = Set(data.month);
    income.year = Set(data.year);
    income.date = Set(data.date);
    income.recurring = Set(data.recurring);
    income.notes = Set(data.notes);

    income.update(db).await.map(Some)
}

#[instrument(skip(db))]
pub async fn delete_income<C: ConnectionTrait>(db: &C, id: i32) -> Result<Option<Model>, DbErr> {
    let Some(existing) = Entity::find_by_id(id).one(db).await? else {
        debug!("Income {} does not exist", id);
        return Ok(None);
    };

    Entity::delete_by_id(id).exec(db).await?;
    Ok(Some(existing))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::testing::setup_db;

    fn salary(month: u32, year: i32, day: u32) -> NewIncome {
        NewIncome {
            amount: Decimal::from(2500),
            source: "Salary".to_string(),
            month,
            year,
            date: NaiveDate::from_ymd_opt(year, month + 1, day).unwrap(),
            recurring: true,
            notes: None,
        }
    }

    #[tokio::test]
    async fn test_list_sorted_by_date_descending() {
        let db = setup_db().await;
        create_income(&db, salary(0, 2024, 1)).await.unwrap();
        create_income(&db, salary(2, 2024, 1)).await.unwrap();
        create_income(&db, salary(1, 2024, 1)).await.unwrap();

        let months: Vec<_> = list_incomes(&db, PeriodFilter::All)
            .await
            .unwrap()
            .into_iter()
            .map(|i| i.month)
            .collect();
        assert_eq!(months, vec![2, 1, 0]);
    }

    #[tokio::test]
    async fn test_list_filters_on_stored_month() {
        let db = setup_db().await;
        create_income(&db, salary(0, 2024, 15)).await.unwrap();
        create_income(&db, salary(1, 2024, 15)).await.unwrap();
        create_income(&db, salary(1, 2023, 15)).await.unwrap();

        let february = list_incomes(&db, PeriodFilter::Month { year: 2024, month: 1 })
            .await
            .unwrap();
        assert_eq!(february.len(), 1);
        assert_eq!(list_incomes(&db, PeriodFilter::Year(2024)).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_update_replaces_fields() {
        let db = setup_db().await;
        let created = create_income(&db, salary(0, 2024, 1)).await.unwrap();

        let replacement = NewIncome {
            amount: Decimal::new(31050, 2),
            source: "Bonus".to_string(),
            recurring: false,
            notes: Some("Quarterly".to_string()),
            ..salary(0, 2024, 28)
        };
        let updated = update_income(&db, created.id, replacement)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.source, "Bonus");
        assert_eq!(updated.amount, Decimal::new(31050, 2));
        assert!(!updated.recurring);
        assert_eq!(updated.notes.as_deref(), Some("Quarterly"));
    }

    #[tokio::test]
    async fn test_missing_records_return_none() {
        let db = setup_db().await;
        assert_eq!(find_income(&db, 7).await.unwrap(), None);
        assert_eq!(update_income(&db, 7, salary(0, 2024, 1)).await.unwrap(), None);
        assert_eq!(delete_income(&db, 7).await.unwrap(), None);
    }
}
