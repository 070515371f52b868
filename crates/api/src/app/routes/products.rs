use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use shoplite_catalog::Product;
use shoplite_core::ProductId;

use crate::app::{dto, errors};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_product).get(list_products).put(update_product))
        .route("/:id", get(get_product).delete(delete_product))
        .route("/category/:category", get(get_products_by_category))
}

pub async fn list_products(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let products = match services.products.get_products().await {
        Ok(p) => p,
        Err(e) => return errors::store_error_to_response(e),
    };

    let items = products.iter().map(dto::product_to_json).collect::<Vec<_>>();
    (StatusCode::OK, Json(serde_json::Value::Array(items))).into_response()
}

pub async fn get_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = ProductId::from(id);
    match services.products.get_product(&id).await {
        Ok(Some(p)) => (StatusCode::OK, Json(dto::product_to_json(&p))).into_response(),
        Ok(None) => errors::json_error(StatusCode::NOT_FOUND, "not_found", "product not found"),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn get_products_by_category(
    Extension(services): Extension<Arc<AppServices>>,
    Path(category): Path<String>,
) -> axum::response::Response {
    let products = match services.products.get_products_by_category(&category).await {
        Ok(p) => p,
        Err(e) => return errors::store_error_to_response(e),
    };

    let items = products.iter().map(dto::product_to_json).collect::<Vec<_>>();
    (StatusCode::OK, Json(serde_json::Value::Array(items))).into_response()
}

pub async fn create_product(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CreateProductRequest>,
) -> axum::response::Response {
    let product = Product {
        id: ProductId::generate(),
        name: body.name,
        category: body.category,
        summary: body.summary,
        description: body.description,
        image_file: body.image_file,
        price: body.price,
    };

    if let Err(e) = services.products.create_product(&product).await {
        return errors::store_error_to_response(e);
    }

    (
        StatusCode::CREATED,
        [(header::LOCATION, format!("/products/{}", product.id))],
        Json(dto::product_to_json(&product)),
    )
        .into_response()
}

pub async fn update_product(
    Extension(services): Extension<Arc<AppServices>>,
    Json(product): Json<Product>,
) -> axum::response::Response {
    if let Err(e) = services.products.update_product(&product).await {
        return errors::store_error_to_response(e);
    }

    (StatusCode::OK, Json(dto::product_to_json(&product))).into_response()
}

pub async fn delete_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = ProductId::from(id);
    if let Err(e) = services.products.delete_product(&id).await {
        return errors::store_error_to_response(e);
    }

    (StatusCode::OK, Json(serde_json::json!({ "id": id.as_str() }))).into_response()
}
