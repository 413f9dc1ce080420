use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::persona::Persona;
use crate::pipeline::create_persona;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonaRequest {
    #[serde(default)]
    pub x_handle: String,
}

#[derive(Debug, Serialize)]
pub struct PersonaResponse {
    pub success: bool,
    pub persona: Persona,
}

/// POST /api/v1/persona
pub async fn handle_create_persona(
    State(state): State<AppState>,
    Json(req): Json<PersonaRequest>,
) -> Result<Json<PersonaResponse>, AppError> {
    let persona = create_persona(
        state.search.as_ref(),
        state.generator.as_ref(),
        &req.x_handle,
    )
    .await?;
    Ok(Json(PersonaResponse {
        success: true,
        persona,
    }))
}
