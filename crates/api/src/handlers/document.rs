use axum::{extract::State, response::Json, routing::get, Router};
use tracing::debug;

use crate::{dto::CategoryResponse, errors::ApiError, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new().route("/document", get(get_document))
}

async fn get_document(
    State(state): State<AppState>,
) -> Result<Json<Vec<CategoryResponse>>, ApiError> {
    let document = state.get_document.execute().await?;
    debug!(
        categories = document.categories.len(),
        "Document retrieved successfully"
    );
    Ok(Json(CategoryResponse::from_document(&document)))
}
