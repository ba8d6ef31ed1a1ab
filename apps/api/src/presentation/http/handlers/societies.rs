use crate::{
    domain::society::Society,
    presentation::http::{errors::AppError, state::AppState},
};
use axum::{
    Json,
    extract::{Path, State},
};

pub async fn list_societies(State(state): State<AppState>) -> Json<Vec<Society>> {
    Json(state.get_society().list())
}

pub async fn get_society(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Society>, AppError> {
    let society = state.get_society().by_name(&name)?;
    Ok(Json(society))
}
