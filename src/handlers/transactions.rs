use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use common::{TransactionDto, TransactionRequest};
use model::repository;
use tracing::{debug, info, instrument, trace};

use crate::error::{ApiError, ApiResult};
use crate::extract::{ValidatedJson, ValidatedQuery};
use crate::helpers::period::list_filter;
use crate::schemas::{ApiResponse, AppState, ErrorResponse, PeriodQuery};

/// List transactions, newest first
#[utoipa::path(
    get,
    path = "/api/v1/transactions",
    tag = "transactions",
    params(PeriodQuery),
    responses(
        (status = 200, description = "Transactions retrieved successfully", body = ApiResponse<Vec<TransactionDto>>),
        (status = 400, description = "Invalid period", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_transactions(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<PeriodQuery>,
) -> ApiResult<Json<ApiResponse<Vec<TransactionDto>>>> {
    trace!("Entering get_transactions function");
    let filter = list_filter(&query)?;
    debug!("Listing transactions with filter {:?}", filter);

    let db = state.db.get().await?;
    let transactions = repository::list_transactions(db, filter).await?;

    info!("Retrieved {} transactions", transactions.len());
    Ok(Json(ApiResponse::ok(
        transactions.into_iter().map(TransactionDto::from).collect(),
        "Transactions retrieved successfully",
    )))
}

/// Record a new transaction
#[utoipa::path(
    post,
    path = "/api/v1/transactions",
    tag = "transactions",
    request_body = TransactionRequest,
    responses(
        (status = 201, description = "Transaction created successfully", body = ApiResponse<TransactionDto>),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn create_transaction(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<TransactionRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<TransactionDto>>)> {
    trace!("Entering create_transaction function");
    debug!(
        "Creating transaction: {} {} on {}",
        request.category.as_str(),
        request.amount,
        request.date
    );

    let db = state.db.get().await?;
    let transaction = repository::create_transaction(db, request.into()).await?;

    info!("Successfully created transaction with ID: {}", transaction.id);
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(
            TransactionDto::from(transaction),
            "Transaction created successfully",
        )),
    ))
}

/// Get a specific transaction by ID
#[utoipa::path(
    get,
    path = "/api/v1/transactions/{transaction_id}",
    tag = "transactions",
    params(
        ("transaction_id" = i32, Path, description = "Transaction ID"),
    ),
    responses(
        (status = 200, description = "Transaction retrieved successfully", body = ApiResponse<TransactionDto>),
        (status = 404, description = "Transaction not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_transaction(
    Path(transaction_id): Path<i32>,
    State(state): State<AppState>,
) -> ApiResult<Json<ApiResponse<TransactionDto>>> {
    trace!("Entering get_transaction function for transaction_id: {}", transaction_id);

    let db = state.db.get().await?;
    let transaction = repository::find_transaction(db, transaction_id)
        .await?
        .ok_or(ApiError::NotFound("Transaction"))?;

    debug!("Found transaction: {}", transaction.description);
    Ok(Json(ApiResponse::ok(
        TransactionDto::from(transaction),
        "Transaction retrieved successfully",
    )))
}

/// Replace every field of a transaction
#[utoipa::path(
    put,
    path = "/api/v1/transactions/{transaction_id}",
    tag = "transactions",
    params(
        ("transaction_id" = i32, Path, description = "Transaction ID"),
    ),
    request_body = TransactionRequest,
    responses(
        (status = 200, description = "Transaction updated successfully", body = ApiResponse<TransactionDto>),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 404, description = "Transaction not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn update_transaction(
    Path(transaction_id): Path<i32>,
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<TransactionRequest>,
) -> ApiResult<Json<ApiResponse<TransactionDto>>> {
    trace!("Entering update_transaction function for transaction_id: {}", transaction_id);

    let db = state.db.get().await?;
    let transaction = repository::update_transaction(db, transaction_id, request.into())
        .await?
        .ok_or(ApiError::NotFound("Transaction"))?;

    info!("Transaction with ID {} updated successfully", transaction_id);
    Ok(Json(ApiResponse::ok(
        TransactionDto::from(transaction),
        "Transaction updated successfully",
    )))
}

/// Delete a transaction
#[utoipa::path(
    delete,
    path = "/api/v1/transactions/{transaction_id}",
    tag = "transactions",
    params(
        ("transaction_id" = i32, Path, description = "Transaction ID"),
    ),
    responses(
        (status = 200, description = "Transaction deleted successfully", body = ApiResponse<TransactionDto>),
        (status = 404, description = "Transaction not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn delete_transaction(
    Path(transaction_id): Path<i32>,
    State(state): State<AppState>,
) -> ApiResult<Json<ApiResponse<TransactionDto>>> {
    trace!("Entering delete_transaction function for transaction_id: {}", transaction_id);

    let db = state.db.get().await?;
    let deleted = repository::delete_transaction(db, transaction_id)
        .await?
        .ok_or(ApiError::NotFound("Transaction"))?;

    info!("Transaction with ID {} deleted successfully", transaction_id);
    Ok(Json(ApiResponse::ok(
        TransactionDto::from(deleted),
        "Transaction deleted successfully",
    )))
}
