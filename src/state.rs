// src/state.rs
use sqlx::SqlitePool;
use std::path::PathBuf;

#[derive(Clone)]
pub struct AppState {
    pub db_pool: SqlitePool,
    pub images_dir: PathBuf,
}

impl AppState {
    pub fn new(db_pool: SqlitePool, images_dir: PathBuf) -> Self {
        Self { db_pool, images_dir }
    }
}
