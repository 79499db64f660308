// src/handlers/product.rs
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    Json,
};
use tracing::{error, instrument};

use crate::dtos::product::{
    CreateProductRequest, PatchProductRequest, ProductResponse, ReplaceProductRequest,
};
use crate::error::AppError;
use crate::queries::product_queries;
use crate::state::AppState;

// GET /products - List all products
#[instrument(skip(state))]
pub async fn get_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProductResponse>>, AppError> {
    match product_queries::list(&state.db_pool).await {
        Ok(products) => {
            let response = products.into_iter().map(ProductResponse::from).collect();
            Ok(Json(response))
        }
        Err(e) => {
            error!(?e, "Failed to fetch products");
            Err(e.into())
        }
    }
}

// GET /products/:id - Get single product
#[instrument(skip(state), fields(id))]
pub async fn get_product(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<ProductResponse>, AppError> {
    let product = product_queries::find_by_id(&state.db_pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Product not found"))?;

    Ok(Json(ProductResponse::from(product)))
}

// POST /products - Create new product
#[instrument(skip(state, payload))]
pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<CreateProductRequest>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<ProductResponse>), AppError> {
    let product = product_queries::insert(&state.db_pool, &payload).await?;
    let location = format!("/products/{}", product.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(ProductResponse::from(product)),
    ))
}

// PUT /products/:id - Overwrite name and price unconditionally
#[instrument(skip(state, payload), fields(id))]
pub async fn update_product(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<ReplaceProductRequest>,
) -> Result<StatusCode, AppError> {
    if !product_queries::replace(&state.db_pool, id, &payload).await? {
        return Err(AppError::not_found("Product not found"));
    }

    Ok(StatusCode::NO_CONTENT)
}

// PATCH /products/:id - Update only the fields passing their predicates
#[instrument(skip(state, payload), fields(id))]
pub async fn patch_product(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<PatchProductRequest>,
) -> Result<StatusCode, AppError> {
    if !product_queries::patch(&state.db_pool, id, &payload).await? {
        return Err(AppError::not_found("Product not found"));
    }

    Ok(StatusCode::NO_CONTENT)
}

// DELETE /products/:id - Delete product
#[instrument(skip(state), fields(id))]
pub async fn delete_product(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    if !product_queries::delete(&state.db_pool, id).await? {
        return Err(AppError::not_found("Product not found"));
    }

    Ok(StatusCode::NO_CONTENT)
}
