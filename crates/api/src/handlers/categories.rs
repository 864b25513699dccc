use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{delete, post},
    Router,
};

use crate::{
    dto::{CategoryResponse, CreateCategoryRequest},
    errors::ApiError,
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/categories", post(create_category))
        .route("/categories/{category}", delete(delete_category))
}

async fn create_category(
    State(state): State<AppState>,
    Json(req): Json<CreateCategoryRequest>,
) -> Result<(StatusCode, Json<CategoryResponse>), ApiError> {
    let name = req.into_name()?;
    let category = state.create_category.execute(&name).await?;
    Ok((
        StatusCode::CREATED,
        Json(CategoryResponse::from_category(&category)),
    ))
}

async fn delete_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.delete_category.execute(&category).await?;
    Ok(StatusCode::NO_CONTENT)
}
