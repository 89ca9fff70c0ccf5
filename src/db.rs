// src/db.rs
use crate::{
    config::Config,
    error::{AppError, AppResult},
};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

pub async fn create_db_pool(config: &Config) -> AppResult<SqlitePool> {
    tracing::info!("Ligando à base de dados: {}", config.database_url);

    // Opções de conexão (criar se não existir)
    let options = SqliteConnectOptions::from_str(&config.database_url)?.create_if_missing(true);

    let pool = connect(options, config).await?;

    tracing::info!("Executando migrações da base de dados...");
    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("Migrações concluídas.");

    Ok(pool)
}

// O handshake inteiro tem de terminar dentro do timeout configurado
async fn connect(options: SqliteConnectOptions, config: &Config) -> AppResult<SqlitePool> {
    let tentativa = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.connect_timeout)
        .connect_with(options);

    match tokio::time::timeout(config.connect_timeout, tentativa).await {
        Ok(Ok(pool)) => Ok(pool),
        Ok(Err(e)) => Err(AppError::Conexao(e.to_string())),
        Err(_) => Err(AppError::Conexao(format!(
            "tempo esgotado após {}s",
            config.connect_timeout.as_secs()
        ))),
    }
}

/// Base de dados em memória, única por chamada (para testes).
#[cfg(test)]
pub async fn init_test_pool() -> SqlitePool {
    let test_id = uuid::Uuid::new_v4().simple().to_string();
    let config = Config {
        database_url: format!("sqlite:file:memdb_{}?mode=memory&cache=shared", test_id),
        connect_timeout: std::time::Duration::from_secs(30),
        max_connections: 5,
        port: 0,
    };
    create_db_pool(&config)
        .await
        .expect("Falha ao criar base de dados de teste")
}
