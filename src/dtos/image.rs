// src/dtos/image.rs
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ImageEntry {
    pub url: String,
    #[serde(rename = "fileName")]
    pub file_name: String,
}

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub url: String,
    #[serde(rename = "fileName")]
    pub file_name: String,
    pub size: u64,
}
