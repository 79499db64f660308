// src/dtos/product.rs
use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    pub price: f64,
    // Client-supplied; the server does not assign creation timestamps.
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// PUT body. Both fields are written unconditionally, empty or zero included.
#[derive(Debug, Deserialize)]
pub struct ReplaceProductRequest {
    pub name: String,
    pub price: f64,
}

/// PATCH body. A field is only written if it passes its predicate:
/// non-blank name, strictly positive price, non-blank image URL.
#[derive(Debug, Deserialize)]
pub struct PatchProductRequest {
    pub name: Option<String>,
    pub price: Option<f64>,
    #[serde(rename = "imageUrl")]
    pub image_url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub price: f64,
    #[serde(rename = "createdAt")]
    pub created_at: String,
    #[serde(rename = "imageUrl")]
    pub image_url: Option<String>,
}

// Convert from Model to Response DTO
impl From<crate::models::product::Product> for ProductResponse {
    fn from(product: crate::models::product::Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
            created_at: product.created_at.to_rfc3339(),
            image_url: product.image_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patch_request_accepts_partial_bodies() {
        let req: PatchProductRequest = serde_json::from_str(r#"{"imageUrl":"/images/a.png"}"#).unwrap();
        assert!(req.name.is_none());
        assert!(req.price.is_none());
        assert_eq!(req.image_url.as_deref(), Some("/images/a.png"));
    }

    #[test]
    fn response_uses_camel_case_keys() {
        let response = ProductResponse {
            id: 1,
            name: "Widget".to_string(),
            price: 9.99,
            created_at: "2024-01-01T00:00:00+00:00".to_string(),
            image_url: None,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("createdAt").is_some());
        assert!(json.get("imageUrl").is_some());
        assert!(json.get("created_at").is_none());
    }
}
