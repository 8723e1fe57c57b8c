use crate::schemas::ApiDoc;
use utoipa::openapi::{PathItemType, RefOr, schema::Schema};
use utoipa::OpenApi;

fn object_properties(name: &str) -> Vec<String> {
    let openapi = ApiDoc::openapi();
    let components = openapi.components.expect("components are generated");
    match components.schemas.get(name) {
        Some(RefOr::T(Schema::Object(obj))) => obj.properties.keys().cloned().collect(),
        Some(_) => panic!("{} should be an object schema", name),
        None => panic!("{} is missing from the components", name),
    }
}

#[test]
fn test_openapi_schema_generation() {
    let openapi = ApiDoc::openapi();

    let components = openapi.components.as_ref().unwrap();
    for schema in [
        "ErrorResponse",
        "HealthResponse",
        "TransactionDto",
        "BudgetDto",
        "IncomeDto",
        "MonthlyTotal",
        "CategoryTotal",
        "BudgetComparison",
        "MonthlySummary",
        "IncomeSourceTotal",
        "Category",
    ] {
        assert!(components.schemas.contains_key(schema), "missing schema {}", schema);
    }

    assert!(serde_json::to_string(&openapi).is_ok());
}

#[test]
fn test_error_response_schema_structure() {
    let properties = object_properties("ErrorResponse");
    for field in ["error", "code", "success"] {
        assert!(properties.iter().any(|p| p == field), "missing {}", field);
    }
}

#[test]
fn test_budget_comparison_schema_structure() {
    let properties = object_properties("BudgetComparison");
    for field in ["category", "budgeted", "actual", "difference"] {
        assert!(properties.iter().any(|p| p == field), "missing {}", field);
    }
}

#[test]
fn test_openapi_paths() {
    let openapi = ApiDoc::openapi();
    let paths = &openapi.paths.paths;

    let health = paths.get("/health").expect("health path");
    let health_get = health.operations.get(&PathItemType::Get).expect("GET /health");
    assert!(health_get.responses.responses.contains_key("200"));
    assert_eq!(health_get.responses.responses.len(), 1);

    for path in [
        "/api/v1/transactions",
        "/api/v1/transactions/{transaction_id}",
        "/api/v1/budgets",
        "/api/v1/budgets/{budget_id}",
        "/api/v1/incomes",
        "/api/v1/incomes/{income_id}",
        "/api/v1/stats/monthly",
        "/api/v1/stats/category",
        "/api/v1/stats/budget-comparison",
        "/api/v1/stats/summary",
        "/api/v1/stats/income-sources",
    ] {
        assert!(paths.contains_key(path), "missing path {}", path);
    }

    let budgets = paths.get("/api/v1/budgets").unwrap();
    let post = budgets.operations.get(&PathItemType::Post).expect("POST /budgets");
    assert!(post.responses.responses.contains_key("201"));
    assert!(post.responses.responses.contains_key("200"));

    let item = paths.get("/api/v1/transactions/{transaction_id}").unwrap();
    for method in [PathItemType::Get, PathItemType::Put, PathItemType::Delete] {
        let operation = item.operations.get(&method).expect("transaction operation");
        assert!(operation.responses.responses.contains_key("404"));
    }
}
