use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use common::{BudgetDto, CreateBudgetRequest, UpdateBudgetRequest};
use model::repository;
use tracing::{debug, info, instrument, trace};

use crate::error::{ApiError, ApiResult};
use crate::extract::{ValidatedJson, ValidatedQuery};
use crate::helpers::period::list_filter;
use crate::schemas::{ApiResponse, AppState, ErrorResponse, PeriodQuery};

/// List budgets
#[utoipa::path(
    get,
    path = "/api/v1/budgets",
    tag = "budgets",
    params(PeriodQuery),
    responses(
        (status = 200, description = "Budgets retrieved successfully", body = ApiResponse<Vec<BudgetDto>>),
        (status = 400, description = "Invalid period", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_budgets(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<PeriodQuery>,
) -> ApiResult<Json<ApiResponse<Vec<BudgetDto>>>> {
    trace!("Entering get_budgets function");
    let filter = list_filter(&query)?;

    let db = state.db.get().await?;
    let budgets = repository::list_budgets(db, filter).await?;

    info!("Retrieved {} budgets", budgets.len());
    Ok(Json(ApiResponse::ok(
        budgets.into_iter().map(BudgetDto::from).collect(),
        "Budgets retrieved successfully",
    )))
}

/// Set the budget of a category for a month
///
/// A budget that already exists for the same category, month and year gets
/// its amount replaced instead of a second budget being created.
#[utoipa::path(
    post,
    path = "/api/v1/budgets",
    tag = "budgets",
    request_body = CreateBudgetRequest,
    responses(
        (status = 201, description = "Budget created successfully", body = ApiResponse<BudgetDto>),
        (status = 200, description = "Existing budget updated", body = ApiResponse<BudgetDto>),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn create_budget(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateBudgetRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<BudgetDto>>)> {
    trace!("Entering create_budget function");
    debug!(
        "Setting {} budget for {}/{} to {}",
        request.category.as_str(),
        request.month,
        request.year,
        request.amount
    );

    let db = state.db.get().await?;
    let upserted = repository::upsert_budget(
        db,
        request.category,
        request.month,
        request.year,
        request.amount,
    )
    .await?;

    let (status, message) = if upserted.created {
        (StatusCode::CREATED, "Budget created successfully")
    } else {
        (StatusCode::OK, "Budget updated successfully")
    };
    info!("{} (ID: {})", message, upserted.budget.id);

    Ok((
        status,
        Json(ApiResponse::ok(BudgetDto::from(upserted.budget), message)),
    ))
}

/// Get a specific budget by ID
#[utoipa::path(
    get,
    path = "/api/v1/budgets/{budget_id}",
    tag = "budgets",
    params(
        ("budget_id" = i32, Path, description = "Budget ID"),
    ),
    responses(
        (status = 200, description = "Budget retrieved successfully", body = ApiResponse<BudgetDto>),
        (status = 404, description = "Budget not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_budget(
    Path(budget_id): Path<i32>,
    State(state): State<AppState>,
) -> ApiResult<Json<ApiResponse<BudgetDto>>> {
    trace!("Entering get_budget function for budget_id: {}", budget_id);

    let db = state.db.get().await?;
    let budget = repository::find_budget(db, budget_id)
        .await?
        .ok_or(ApiError::NotFound("Budget"))?;

    Ok(Json(ApiResponse::ok(
        BudgetDto::from(budget),
        "Budget retrieved successfully",
    )))
}

/// Change the amount of a budget
#[utoipa::path(
    put,
    path = "/api/v1/budgets/{budget_id}",
    tag = "budgets",
    params(
        ("budget_id" = i32, Path, description = "Budget ID"),
    ),
    request_body = UpdateBudgetRequest,
    responses(
        (status = 200, description = "Budget updated successfully", body = ApiResponse<BudgetDto>),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 404, description = "Budget not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn update_budget(
    Path(budget_id): Path<i32>,
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<UpdateBudgetRequest>,
) -> ApiResult<Json<ApiResponse<BudgetDto>>> {
    trace!("Entering update_budget function for budget_id: {}", budget_id);

    let db = state.db.get().await?;
    let budget = repository::update_budget_amount(db, budget_id, request.amount)
        .await?
        .ok_or(ApiError::NotFound("Budget"))?;

    info!("Budget with ID {} updated to {}", budget_id, budget.amount);
    Ok(Json(ApiResponse::ok(
        BudgetDto::from(budget),
        "Budget updated successfully",
    )))
}

/// Delete a budget
#[utoipa::path(
    delete,
    path = "/api/v1/budgets/{budget_id}",
    tag = "budgets",
    params(
        ("budget_id" = i32, Path, description = "Budget ID"),
    ),
    responses(
        (status = 200, description = "Budget deleted successfully", body = ApiResponse<BudgetDto>),
        (status = 404, description = "Budget not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn delete_budget(
    Path(budget_id): Path<i32>,
    State(state): State<AppState>,
) -> ApiResult<Json<ApiResponse<BudgetDto>>> {
    trace!("Entering delete_budget function for budget_id: {}", budget_id);

    let db = state.db.get().await?;
    let deleted = repository::delete_budget(db, budget_id)
        .await?
        .ok_or(ApiError::NotFound("Budget"))?;

    info!("Budget with ID {} deleted successfully", budget_id);
    Ok(Json(ApiResponse::ok(
        BudgetDto::from(deleted),
        "Budget deleted successfully",
    )))
}
