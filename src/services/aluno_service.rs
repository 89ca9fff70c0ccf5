// src/services/aluno_service.rs
use crate::{
    error::{AppError, AppResult},
    models::aluno::{Aluno, AlunoDocumento},
};
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

/// Converte o id vindo do caminho num identificador válido da coleção.
pub fn parse_id(id: &str) -> AppResult<Uuid> {
    Uuid::try_parse(id).map_err(|e| AppError::BadRequest(format!("id inválido '{}': {}", id, e)))
}

/// Novo id opaco (32 caracteres hexadecimais).
fn novo_id() -> String {
    Uuid::new_v4().simple().to_string()
}

fn aluno_from_row(row: &sqlx::sqlite::SqliteRow) -> AppResult<Aluno> {
    let id: String = row.try_get("id")?;
    let documento: String = row.try_get("documento")?;
    let doc: AlunoDocumento = serde_json::from_str(&documento)?;
    Ok(doc.into_aluno(id))
}

/// Todos os alunos, pela ordem de inserção.
pub async fn find_all_alunos(db_pool: &SqlitePool) -> AppResult<Vec<Aluno>> {
    tracing::debug!("Buscando todos os alunos...");
    let rows = sqlx::query("SELECT id, documento FROM alunos ORDER BY rowid ASC")
        .fetch_all(db_pool)
        .await?;

    let alunos = rows.iter().map(aluno_from_row).collect::<AppResult<Vec<_>>>()?;
    tracing::debug!("Encontrados {} alunos.", alunos.len());
    Ok(alunos)
}

pub async fn find_aluno_by_id(db_pool: &SqlitePool, id: &Uuid) -> AppResult<Option<Aluno>> {
    tracing::debug!("Buscando aluno por ID: {}", id);
    let row = sqlx::query("SELECT id, documento FROM alunos WHERE id = ?1")
        .bind(id.simple().to_string())
        .fetch_optional(db_pool)
        .await?;

    row.as_ref().map(aluno_from_row).transpose()
}

/// Insere um aluno novo. O `id` recebido é descartado; devolve o registo
/// relido da base de dados, já com o id atribuído.
pub async fn insert_aluno(db_pool: &SqlitePool, aluno: &Aluno) -> AppResult<Aluno> {
    let id = novo_id();
    tracing::info!("Inserindo aluno '{}' com id {}", aluno.nome, id);

    let documento = serde_json::to_string(&AlunoDocumento::from(aluno))?;
    sqlx::query("INSERT INTO alunos (id, documento) VALUES (?1, ?2)")
        .bind(&id)
        .bind(documento)
        .execute(db_pool)
        .await?;

    let row = sqlx::query("SELECT id, documento FROM alunos WHERE id = ?1")
        .bind(&id)
        .fetch_one(db_pool)
        .await?;
    let criado = aluno_from_row(&row)?;

    tracing::info!("✅ Aluno {} criado com sucesso.", id);
    Ok(criado)
}

/// Substitui todos os campos (exceto o id) do aluno `id`.
pub async fn update_aluno(db_pool: &SqlitePool, id: &Uuid, aluno: &Aluno) -> AppResult<()> {
    tracing::info!("Atualizando dados do aluno: {}", id);

    let documento = serde_json::to_string(&AlunoDocumento::from(aluno))?;
    let rows_affected = sqlx::query("UPDATE alunos SET documento = ?1 WHERE id = ?2")
        .bind(documento)
        .bind(id.simple().to_string())
        .execute(db_pool)
        .await?
        .rows_affected();

    if rows_affected == 0 {
        tracing::warn!("Falha ao atualizar: aluno '{}' não encontrado.", id);
        Err(AppError::NotFound(format!("Aluno {} não encontrado", id.simple())))
    } else {
        tracing::info!("✅ Aluno {} atualizado.", id);
        Ok(())
    }
}

/// Remove o aluno `id`; devolve quantos registos foram apagados (0 ou 1).
pub async fn delete_aluno(db_pool: &SqlitePool, id: &Uuid) -> AppResult<u64> {
    tracing::info!("Removendo aluno: {}", id);
    let apagados = sqlx::query("DELETE FROM alunos WHERE id = ?1")
        .bind(id.simple().to_string())
        .execute(db_pool)
        .await?
        .rows_affected();

    tracing::debug!("{} registo(s) apagado(s) para o id {}", apagados, id);
    Ok(apagados)
}
