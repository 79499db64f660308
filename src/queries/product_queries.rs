// src/queries/product_queries.rs
use sqlx::SqlitePool;

use crate::dtos::product::{CreateProductRequest, PatchProductRequest, ReplaceProductRequest};
use crate::models::product::Product;

/// Get all products (store-default order)
pub async fn list(pool: &SqlitePool) -> Result<Vec<Product>, sqlx::Error> {
    sqlx::query_as::<_, Product>("SELECT id, name, price, created_at, image_url FROM products")
        .fetch_all(pool)
        .await
}

/// Find product by ID
pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Product>, sqlx::Error> {
    sqlx::query_as::<_, Product>(
        "SELECT id, name, price, created_at, image_url FROM products WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Insert a new product and return it with its assigned id
pub async fn insert(pool: &SqlitePool, req: &CreateProductRequest) -> Result<Product, sqlx::Error> {
    sqlx::query_as::<_, Product>(
        "INSERT INTO products (name, price, created_at)
         VALUES (?, ?, ?)
         RETURNING id, name, price, created_at, image_url",
    )
    .bind(&req.name)
    .bind(req.price)
    .bind(req.created_at)
    .fetch_one(pool)
    .await
}

/// Full update: overwrites name and price unconditionally.
/// Returns false if the id does not exist.
pub async fn replace(
    pool: &SqlitePool,
    id: i64,
    req: &ReplaceProductRequest,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("UPDATE products SET name = ?, price = ? WHERE id = ?")
        .bind(&req.name)
        .bind(req.price)
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Partial update: each field is written only if it passes its predicate,
/// otherwise the stored value is kept. Read-modify-write; concurrent writes
/// on the same id are last-write-wins.
pub async fn patch(
    pool: &SqlitePool,
    id: i64,
    req: &PatchProductRequest,
) -> Result<bool, sqlx::Error> {
    let Some(current) = find_by_id(pool, id).await? else {
        return Ok(false);
    };

    let name = match &req.name {
        Some(n) if !n.trim().is_empty() => n.clone(),
        _ => current.name,
    };
    let price = match req.price {
        Some(p) if p > 0.0 => p,
        _ => current.price,
    };
    let image_url = match &req.image_url {
        Some(u) if !u.trim().is_empty() => Some(u.clone()),
        _ => current.image_url,
    };

    sqlx::query("UPDATE products SET name = ?, price = ?, image_url = ? WHERE id = ?")
        .bind(name)
        .bind(price)
        .bind(image_url)
        .bind(id)
        .execute(pool)
        .await?;

    Ok(true)
}

/// Delete by ID. Returns false if the id does not exist.
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM products WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
