//! Aggregated views. Each handler loads the records of the requested period
//! and hands them to the pure functions of the `compute` crate.

use axum::{extract::State, response::Json};
use common::{BudgetComparison, CategoryTotal, IncomeSourceTotal, MonthlySummary, MonthlyTotal};
use model::{PeriodFilter, repository};
use tracing::{debug, info, instrument, trace};

use crate::error::ApiResult;
use crate::extract::ValidatedQuery;
use crate::helpers::period::{current_month, stats_period};
use crate::schemas::{ApiResponse, AppState, ErrorResponse, StatsQuery, YearQuery};

/// Spending per month of a year
///
/// Always twelve entries, January first; months without spending are zero.
#[utoipa::path(
    get,
    path = "/api/v1/stats/monthly",
    tag = "statistics",
    params(YearQuery),
    responses(
        (status = 200, description = "Monthly totals computed successfully", body = ApiResponse<Vec<MonthlyTotal>>),
        (status = 400, description = "Invalid year", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_monthly_totals(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<YearQuery>,
) -> ApiResult<Json<ApiResponse<Vec<MonthlyTotal>>>> {
    trace!("Entering get_monthly_totals function");
    let year = query.year.unwrap_or_else(|| current_month().1);
    debug!("Computing monthly totals for {}", year);

    let db = state.db.get().await?;
    let transactions = repository::list_transactions(db, PeriodFilter::Year(year)).await?;
    let totals = compute::monthly_totals(&transactions, year);

    info!("Computed monthly totals for {} from {} transactions", year, transactions.len());
    Ok(Json(ApiResponse::ok(
        totals,
        "Monthly totals computed successfully",
    )))
}

/// Spending per category in a month
#[utoipa::path(
    get,
    path = "/api/v1/stats/category",
    tag = "statistics",
    params(StatsQuery),
    responses(
        (status = 200, description = "Category totals computed successfully", body = ApiResponse<Vec<CategoryTotal>>),
        (status = 400, description = "Invalid period", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_category_totals(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<StatsQuery>,
) -> ApiResult<Json<ApiResponse<Vec<CategoryTotal>>>> {
    trace!("Entering get_category_totals function");
    let (month, year) = stats_period(&query);
    debug!("Computing category totals for {}/{}", month, year);

    let db = state.db.get().await?;
    let transactions =
        repository::list_transactions(db, PeriodFilter::Month { year, month }).await?;
    let totals = compute::category_totals(&transactions, month, year)?;

    info!("Computed {} category totals for {}/{}", totals.len(), month, year);
    Ok(Json(ApiResponse::ok(
        totals,
        "Category totals computed successfully",
    )))
}

/// Budgeted against actual spending per category in a month
#[utoipa::path(
    get,
    path = "/api/v1/stats/budget-comparison",
    tag = "statistics",
    params(StatsQuery),
    responses(
        (status = 200, description = "Budget comparison computed successfully", body = ApiResponse<Vec<BudgetComparison>>),
        (status = 400, description = "Invalid period", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_budget_comparison(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<StatsQuery>,
) -> ApiResult<Json<ApiResponse<Vec<BudgetComparison>>>> {
    trace!("Entering get_budget_comparison function");
    let (month, year) = stats_period(&query);
    let filter = PeriodFilter::Month { year, month };
    debug!("Comparing budgets for {}/{}", month, year);

    let db = state.db.get().await?;
    let budgets = repository::list_budgets(db, filter).await?;
    let transactions = repository::list_transactions(db, filter).await?;
    let comparison = compute::budget_comparison(&budgets, &transactions, month, year)?;

    info!(
        "Compared {} budgets against {} transactions for {}/{}",
        budgets.len(),
        transactions.len(),
        month,
        year
    );
    Ok(Json(ApiResponse::ok(
        comparison,
        "Budget comparison computed successfully",
    )))
}

/// Headline figures of a month
#[utoipa::path(
    get,
    path = "/api/v1/stats/summary",
    tag = "statistics",
    params(StatsQuery),
    responses(
        (status = 200, description = "Monthly summary computed successfully", body = ApiResponse<MonthlySummary>),
        (status = 400, description = "Invalid period", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_monthly_summary(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<StatsQuery>,
) -> ApiResult<Json<ApiResponse<MonthlySummary>>> {
    trace!("Entering get_monthly_summary function");
    let (month, year) = stats_period(&query);
    let filter = PeriodFilter::Month { year, month };

    let db = state.db.get().await?;
    let transactions = repository::list_transactions(db, filter).await?;
    let incomes = repository::list_incomes(db, filter).await?;
    let summary = compute::monthly_summary(&transactions, &incomes, month, year)?;

    info!("Computed summary for {}/{}: balance {}", month, year, summary.balance);
    Ok(Json(ApiResponse::ok(
        summary,
        "Monthly summary computed successfully",
    )))
}

/// Income of a month grouped by source, largest first
#[utoipa::path(
    get,
    path = "/api/v1/stats/income-sources",
    tag = "statistics",
    params(StatsQuery),
    responses(
        (status = 200, description = "Income sources computed successfully", body = ApiResponse<Vec<IncomeSourceTotal>>),
        (status = 400, description = "Invalid period", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_income_sources(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<StatsQuery>,
) -> ApiResult<Json<ApiResponse<Vec<IncomeSourceTotal>>>> {
    trace!("Entering get_income_sources function");
    let (month, year) = stats_period(&query);

    let db = state.db.get().await?;
    let incomes = repository::list_incomes(db, PeriodFilter::Month { year, month }).await?;
    let sources = compute::income_by_source(&incomes, month, year)?;

    info!("Grouped income of {}/{} into {} sources", month, year, sources.len());
    Ok(Json(ApiResponse::ok(
        sources,
        "Income sources computed successfully",
    )))
}
