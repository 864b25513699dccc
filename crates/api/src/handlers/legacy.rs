//! Form-post routes served at the root for the original editor page.
//!
//! They drive the same use cases as the JSON API; creations answer with a
//! redirect back to the page and every other action with an empty `204`.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Json, Redirect},
    routing::post,
    Form, Router,
};
use tracing::debug;

use crate::{
    dto::{CreateServiceRequest, LegacyCategoryForm, UpdateServiceRequest},
    errors::ApiError,
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/add_category", post(add_category))
        .route("/add_service/{category}", post(add_service))
        .route("/delete_category/{category}", post(delete_category))
        .route("/delete_service/{category}/{service}", post(delete_service))
        .route("/edit_service/{category}/{service}", post(edit_service))
}

async fn add_category(
    State(state): State<AppState>,
    Form(form): Form<LegacyCategoryForm>,
) -> Result<Redirect, ApiError> {
    let name = form.into_name()?;
    state.create_category.execute(&name).await?;
    debug!(category = %name, "Category added from form");
    Ok(Redirect::to("/"))
}

async fn add_service(
    State(state): State<AppState>,
    Path(category): Path<String>,
    Form(form): Form<CreateServiceRequest>,
) -> Result<Redirect, ApiError> {
    state
        .create_service
        .execute(&category, form.into_new_service()?)
        .await?;
    Ok(Redirect::to("/"))
}

async fn delete_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.delete_category.execute(&category).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn delete_service(
    State(state): State<AppState>,
    Path((category, service)): Path<(String, String)>,
) -> Result<StatusCode, ApiError> {
    state.delete_service.execute(&category, &service).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn edit_service(
    State(state): State<AppState>,
    Path((category, service)): Path<(String, String)>,
    Json(req): Json<UpdateServiceRequest>,
) -> Result<StatusCode, ApiError> {
    state
        .update_service
        .execute(&category, &service, req.into_update()?)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
