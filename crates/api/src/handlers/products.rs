//! Handlers for the `/products` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use inventory_core::types::DbId;
use inventory_db::models::product::{CreateProduct, UpdateProduct};

use crate::error::AppResult;
use crate::response::{ActionResponse, DataResponse};
use crate::state::AppState;

/// GET /api/v1/products
pub async fn list_products(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let products = state.products.list().await?;

    Ok(Json(DataResponse { data: products }))
}

/// GET /api/v1/products/{id}
pub async fn get_product(
    State(state): State<AppState>,
    Path(product_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let product = state.products.get_by_id(product_id).await?;

    Ok(Json(DataResponse { data: product }))
}

/// POST /api/v1/products
pub async fn create_product(
    State(state): State<AppState>,
    Json(input): Json<CreateProduct>,
) -> AppResult<impl IntoResponse> {
    let product = state.products.create(&input).await?;

    tracing::info!(
        product_id = product.id,
        name = %product.name,
        stock = product.stock,
        "Product created",
    );

    Ok((
        StatusCode::CREATED,
        Json(ActionResponse {
            data: product,
            message: "Product created",
        }),
    ))
}

/// PUT /api/v1/products/{id}
///
/// Partially update a product. `{"stock": 0}` sets stock to zero.
pub async fn update_product(
    State(state): State<AppState>,
    Path(product_id): Path<DbId>,
    Json(input): Json<UpdateProduct>,
) -> AppResult<impl IntoResponse> {
    let product = state.products.update_partial(product_id, &input).await?;

    tracing::info!(product_id, stock = product.stock, "Product updated");

    Ok(Json(ActionResponse {
        data: product,
        message: "Product updated",
    }))
}

/// DELETE /api/v1/products/{id}
pub async fn delete_product(
    State(state): State<AppState>,
    Path(product_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let product = state.products.delete_by_id(product_id).await?;

    tracing::info!(product_id, "Product deleted");

    Ok(Json(ActionResponse {
        data: product,
        message: "Product deleted",
    }))
}
