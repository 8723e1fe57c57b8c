use common::{
    BudgetComparison, BudgetDto, CategoryTotal, CreateBudgetRequest, ErrorDetail, FieldViolation,
    IncomeDto, IncomeRequest, IncomeSourceTotal, MonthlySummary, MonthlyTotal, TransactionDto,
    TransactionRequest, UpdateBudgetRequest,
};
use model::Category;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, OpenApi, ToSchema};
use validator::Validate;

use crate::db::DatabaseHandle;

pub use common::{ApiResponse, ErrorResponse};

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Lazily opened database connection
    pub db: DatabaseHandle,
}

/// Optional period filter of the list endpoints
#[derive(Debug, Clone, Default, Deserialize, ToSchema, IntoParams, Validate)]
#[into_params(parameter_in = Query)]
pub struct PeriodQuery {
    /// Zero-based month (0 = January); requires `year`
    #[validate(range(max = 11, message = "Month must be between 0 and 11"))]
    pub month: Option<u32>,
    /// Calendar year (e.g., 2024)
    #[validate(range(min = 2000, max = 9999, message = "Year must be between 2000 and 9999"))]
    pub year: Option<i32>,
}

/// Month selector of the statistics endpoints; both default to the current month
#[derive(Debug, Clone, Default, Deserialize, ToSchema, IntoParams, Validate)]
#[into_params(parameter_in = Query)]
pub struct StatsQuery {
    /// Zero-based month (0 = January)
    #[validate(range(max = 11, message = "Month must be between 0 and 11"))]
    pub month: Option<u32>,
    /// Calendar year (e.g., 2024)
    #[validate(range(min = 2000, max = 9999, message = "Year must be between 2000 and 9999"))]
    pub year: Option<i32>,
}

/// Year selector of the monthly totals endpoint; defaults to the current year
#[derive(Debug, Clone, Default, Deserialize, ToSchema, IntoParams, Validate)]
#[into_params(parameter_in = Query)]
pub struct YearQuery {
    /// Calendar year (e.g., 2024)
    #[validate(range(min = 2000, max = 9999, message = "Year must be between 2000 and 9999"))]
    pub year: Option<i32>,
}

/// Health check response
#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Database connection status
    pub database: String,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::transactions::get_transactions,
        crate::handlers::transactions::create_transaction,
        crate::handlers::transactions::get_transaction,
        crate::handlers::transactions::update_transaction,
        crate::handlers::transactions::delete_transaction,
        crate::handlers::budgets::get_budgets,
        crate::handlers::budgets::create_budget,
        crate::handlers::budgets::get_budget,
        crate::handlers::budgets::update_budget,
        crate::handlers::budgets::delete_budget,
        crate::handlers::incomes::get_incomes,
        crate::handlers::incomes::create_income,
        crate::handlers::incomes::get_income,
        crate::handlers::incomes::update_income,
        crate::handlers::incomes::delete_income,
        crate::handlers::statistics::get_monthly_totals,
        crate::handlers::statistics::get_category_totals,
        crate::handlers::statistics::get_budget_comparison,
        crate::handlers::statistics::get_monthly_summary,
        crate::handlers::statistics::get_income_sources,
    ),
    components(
        schemas(
            ApiResponse<TransactionDto>,
            ApiResponse<Vec<TransactionDto>>,
            ApiResponse<BudgetDto>,
            ApiResponse<Vec<BudgetDto>>,
            ApiResponse<IncomeDto>,
            ApiResponse<Vec<IncomeDto>>,
            ApiResponse<Vec<MonthlyTotal>>,
            ApiResponse<Vec<CategoryTotal>>,
            ApiResponse<Vec<BudgetComparison>>,
            ApiResponse<MonthlySummary>,
            ApiResponse<Vec<IncomeSourceTotal>>,
            ErrorResponse,
            ErrorDetail,
            FieldViolation,
            HealthResponse,
            Category,
            TransactionRequest,
            TransactionDto,
            CreateBudgetRequest,
            UpdateBudgetRequest,
            BudgetDto,
            IncomeRequest,
            IncomeDto,
            MonthlyTotal,
            CategoryTotal,
            BudgetComparison,
            MonthlySummary,
            IncomeSourceTotal,
            PeriodQuery,
            StatsQuery,
            YearQuery,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "transactions", description = "Transaction management endpoints"),
        (name = "budgets", description = "Monthly category budget endpoints"),
        (name = "incomes", description = "Income record endpoints"),
        (name = "statistics", description = "Aggregated spending and income statistics"),
    ),
    info(
        title = "Fintrack API",
        description = "Personal finance tracker API - transactions, budgets, incomes and monthly statistics",
        version = "0.1.0",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;
