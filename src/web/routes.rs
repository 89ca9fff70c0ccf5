// src/web/routes.rs
use crate::{state::AppState, web::aluno_handlers};
use axum::{routing::get, Router};

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route(
            "/aluno",
            get(aluno_handlers::handle_listar_alunos).post(aluno_handlers::handle_criar_aluno),
        )
        .route(
            "/aluno/{id}",
            get(aluno_handlers::handle_buscar_aluno)
                .put(aluno_handlers::handle_atualizar_aluno)
                .delete(aluno_handlers::handle_apagar_aluno),
        )
        .with_state(app_state)
}
