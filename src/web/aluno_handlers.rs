// src/web/aluno_handlers.rs
use crate::{
    error::{AppError, AppResult},
    models::aluno::Aluno,
    services::{aluno_service, idade_service},
    state::AppState,
};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

pub const MENSAGEM_ALUNO_DELETADO: &str = "Aluno deletado";

// Qualquer falha a ler o corpo JSON é um 400 com a mensagem do parser
fn corpo_aluno(payload: Result<Json<Aluno>, JsonRejection>) -> AppResult<Aluno> {
    payload
        .map(|Json(aluno)| aluno)
        .map_err(|rejeicao| AppError::BadRequest(rejeicao.body_text()))
}

fn com_idade(mut aluno: Aluno) -> Aluno {
    aluno.idade = idade_service::idade_hoje(&aluno.data_nascimento);
    aluno
}

// GET /aluno
pub async fn handle_listar_alunos(State(state): State<AppState>) -> AppResult<Json<Vec<Aluno>>> {
    tracing::debug!("GET /aluno");
    let alunos = aluno_service::find_all_alunos(&state.db_pool)
        .await?
        .into_iter()
        .map(com_idade)
        .collect();
    Ok(Json(alunos))
}

// GET /aluno/{id}
pub async fn handle_buscar_aluno(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Aluno>> {
    tracing::debug!("GET /aluno/{}", id);
    let uuid = aluno_service::parse_id(&id)?;
    let aluno = aluno_service::find_aluno_by_id(&state.db_pool, &uuid)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Aluno {} não encontrado", uuid.simple())))?;
    Ok(Json(com_idade(aluno)))
}

// POST /aluno
pub async fn handle_criar_aluno(
    State(state): State<AppState>,
    payload: Result<Json<Aluno>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let aluno = corpo_aluno(payload)?;
    tracing::debug!("POST /aluno: {}", aluno.nome);

    let criado = aluno_service::insert_aluno(&state.db_pool, &aluno).await?;
    Ok((StatusCode::CREATED, Json(criado)))
}

// PUT /aluno/{id}
pub async fn handle_atualizar_aluno(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<Aluno>, JsonRejection>,
) -> AppResult<Json<Aluno>> {
    tracing::debug!("PUT /aluno/{}", id);
    let uuid = aluno_service::parse_id(&id)?;
    let mut aluno = corpo_aluno(payload)?;

    aluno_service::update_aluno(&state.db_pool, &uuid, &aluno).await?;

    // Resposta: o que foi enviado, com o id do caminho
    aluno.id = Some(uuid.simple().to_string());
    aluno.idade = None;
    Ok(Json(aluno))
}

// DELETE /aluno/{id}
pub async fn handle_apagar_aluno(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<&'static str>> {
    tracing::debug!("DELETE /aluno/{}", id);
    let uuid = aluno_service::parse_id(&id)?;

    let apagados = aluno_service::delete_aluno(&state.db_pool, &uuid).await?;
    if apagados < 1 {
        return Err(AppError::NotFound(format!("Aluno {} não encontrado", uuid.simple())));
    }
    Ok(Json(MENSAGEM_ALUNO_DELETADO))
}
