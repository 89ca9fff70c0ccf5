// src/state.rs
use sqlx::SqlitePool;

// Estado partilhado por todos os handlers; o pool é seguro para uso concorrente
#[derive(Clone)]
pub struct AppState {
    pub db_pool: SqlitePool,
}

impl AppState {
    pub fn new(db_pool: SqlitePool) -> Self {
        Self { db_pool }
    }
}

// Permite extrair o pool da DB diretamente
impl axum::extract::FromRef<AppState> for SqlitePool {
    fn from_ref(state: &AppState) -> SqlitePool {
        state.db_pool.clone()
    }
}
