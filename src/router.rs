use crate::handlers::{
    budgets::{create_budget, delete_budget, get_budget, get_budgets, update_budget},
    health::health_check,
    incomes::{create_income, delete_income, get_income, get_incomes, update_income},
    statistics::{
        get_budget_comparison, get_category_totals, get_income_sources, get_monthly_summary,
        get_monthly_totals,
    },
    transactions::{
        create_transaction, delete_transaction, get_transaction, get_transactions,
        update_transaction,
    },
};
use crate::schemas::{ApiDoc, AppState};
use axum::{routing::get, Router};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Create application router with all routes and middleware
pub fn create_router(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Transaction CRUD routes
        .route(
            "/api/v1/transactions",
            get(get_transactions).post(create_transaction),
        )
        .route(
            "/api/v1/transactions/:transaction_id",
            get(get_transaction)
                .put(update_transaction)
                .delete(delete_transaction),
        )
        // Budget routes
        .route("/api/v1/budgets", get(get_budgets).post(create_budget))
        .route(
            "/api/v1/budgets/:budget_id",
            get(get_budget).put(update_budget).delete(delete_budget),
        )
        // Income routes
        .route("/api/v1/incomes", get(get_incomes).post(create_income))
        .route(
            "/api/v1/incomes/:income_id",
            get(get_income).put(update_income).delete(delete_income),
        )
        // Statistics
        .route("/api/v1/stats/monthly", get(get_monthly_totals))
        .route("/api/v1/stats/category", get(get_category_totals))
        .route("/api/v1/stats/budget-comparison", get(get_budget_comparison))
        .route("/api/v1/stats/summary", get(get_monthly_summary))
        .route("/api/v1/stats/income-sources", get(get_income_sources))
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Add middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(request_timeout))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
