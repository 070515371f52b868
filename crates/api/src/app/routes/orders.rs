use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use shoplite_ordering::GetOrdersListQuery;

use crate::app::{dto, errors};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/checkout", post(checkout_order))
        .route("/:user_name", get(get_orders_by_user_name))
}

pub async fn get_orders_by_user_name(
    Extension(services): Extension<Arc<AppServices>>,
    Path(user_name): Path<String>,
) -> axum::response::Response {
    let query = GetOrdersListQuery { user_name };
    let vms = match services.orders_query.handle(&query).await {
        Ok(v) => v,
        Err(e) => return errors::store_error_to_response(e),
    };

    let items = vms.iter().map(dto::orders_vm_to_json).collect::<Vec<_>>();
    (StatusCode::OK, Json(serde_json::Value::Array(items))).into_response()
}

pub async fn checkout_order(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CheckoutOrderRequest>,
) -> axum::response::Response {
    let id = match services.checkout.handle(body.into_command()).await {
        Ok(id) => id,
        Err(e) => return errors::store_error_to_response(e),
    };

    (StatusCode::OK, Json(serde_json::json!({ "id": id.as_str() }))).into_response()
}
