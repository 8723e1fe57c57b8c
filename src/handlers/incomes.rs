use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use common::{IncomeDto, IncomeRequest};
use model::repository;
use tracing::{debug, info, instrument, trace};

use crate::error::{ApiError, ApiResult};
use crate::extract::{ValidatedJson, ValidatedQuery};
use crate::helpers::period::list_filter;
use crate::schemas::{ApiResponse, AppState, ErrorResponse, PeriodQuery};

/// List income records, newest first
#[utoipa::path(
    get,
    path = "/api/v1/incomes",
    tag = "incomes",
    params(PeriodQuery),
    responses(
        (status = 200, description = "Income records retrieved successfully", body = ApiResponse<Vec<IncomeDto>>),
        (status = 400, description = "Invalid period", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_incomes(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<PeriodQuery>,
) -> ApiResult<Json<ApiResponse<Vec<IncomeDto>>>> {
    trace!("Entering get_incomes function");
    let filter = list_filter(&query)?;
    debug!("Listing incomes with filter {:?}", filter);

    let db = state.db.get().await?;
    let incomes = repository::list_incomes(db, filter).await?;

    info!("Retrieved {} incomes", incomes.len());
    Ok(Json(ApiResponse::ok(
        incomes.into_iter().map(IncomeDto::from).collect(),
        "Income records retrieved successfully",
    )))
}

/// Record a new income
#[utoipa::path(
    post,
    path = "/api/v1/incomes",
    tag = "incomes",
    request_body = IncomeRequest,
    responses(
        (status = 201, description = "Income created successfully", body = ApiResponse<IncomeDto>),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn create_income(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<IncomeRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<IncomeDto>>)> {
    trace!("Entering create_income function");
    debug!(
        "Creating income from {}: {} for {}/{}",
        request.source, request.amount, request.month, request.year
    );

    let db = state.db.get().await?;
    let income = repository::create_income(db, request.into()).await?;

    info!("Successfully created income with ID: {}", income.id);
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(
            IncomeDto::from(income),
            "Income created successfully",
        )),
    ))
}

/// Get a specific income record by ID
#[utoipa::path(
    get,
    path = "/api/v1/incomes/{income_id}",
    tag = "incomes",
    params(
        ("income_id" = i32, Path, description = "Income ID"),
    ),
    responses(
        (status = 200, description = "Income retrieved successfully", body = ApiResponse<IncomeDto>),
        (status = 404, description = "Income not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_income(
    Path(income_id): Path<i32>,
    State(state): State<AppState>,
) -> ApiResult<Json<ApiResponse<IncomeDto>>> {
    trace!("Entering get_income function for income_id: {}", income_id);

    let db = state.db.get().await?;
    let income = repository::find_income(db, income_id)
        .await?
        .ok_or(ApiError::NotFound("Income"))?;

    debug!("Found income from {}", income.source);
    Ok(Json(ApiResponse::ok(
        IncomeDto::from(income),
        "Income retrieved successfully",
    )))
}

/// Replace every field of an income record
#[utoipa::path(
    put,
    path = "/api/v1/incomes/{income_id}",
    tag = "incomes",
    params(
        ("income_id" = i32, Path, description = "Income ID"),
    ),
    request_body = IncomeRequest,
    responses(
        (status = 200, description = "Income updated successfully", body = ApiResponse<IncomeDto>),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 404, description = "Income not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn update_income(
    Path(income_id): Path<i32>,
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<IncomeRequest>,
) -> ApiResult<Json<ApiResponse<IncomeDto>>> {
    trace!("Entering update_income function for income_id: {}", income_id);

    let db = state.db.get().await?;
    let income = repository::update_income(db, income_id, request.into())
        .await?
        .ok_or(ApiError::NotFound("Income"))?;

    info!("Income with ID {} updated successfully", income_id);
    Ok(Json(ApiResponse::ok(
        IncomeDto::from(income),
        "Income updated successfully",
    )))
}

/// Delete an income record
#[utoipa::path(
    delete,
    path = "/api/v1/incomes/{income_id}",
    tag = "incomes",
    params(
        ("income_id" = i32, Path, description = "Income ID"),
    ),
    responses(
        (status = 200, description = "Income deleted successfully", body = ApiResponse<IncomeDto>),
        (status = 404, description = "Income not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn delete_income(
    Path(income_id): Path<i32>,
    State(state): State<AppState>,
) -> ApiResult<Json<ApiResponse<IncomeDto>>> {
    trace!("Entering delete_income function for income_id: {}", income_id);

    let db = state.db.get().await?;
    let deleted = repository::delete_income(db, income_id)
        .await?
        .ok_or(ApiError::NotFound("Income"))?;

    info!("Income with ID {} deleted successfully", income_id);
    Ok(Json(ApiResponse::ok(
        IncomeDto::from(deleted),
        "Income deleted successfully",
    )))
}
