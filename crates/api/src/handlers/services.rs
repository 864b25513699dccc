use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{post, put},
    Router,
};

use crate::{
    dto::{CreateServiceRequest, ServiceResponse, UpdateServiceRequest},
    errors::ApiError,
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/categories/{category}/services", post(create_service))
        .route(
            "/categories/{category}/services/{service}",
            put(update_service).delete(delete_service),
        )
}

async fn create_service(
    State(state): State<AppState>,
    Path(category): Path<String>,
    Json(req): Json<CreateServiceRequest>,
) -> Result<(StatusCode, Json<ServiceResponse>), ApiError> {
    let service = state
        .create_service
        .execute(&category, req.into_new_service()?)
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(ServiceResponse::from_service(&service)),
    ))
}

async fn update_service(
    State(state): State<AppState>,
    Path((category, service)): Path<(String, String)>,
    Json(req): Json<UpdateServiceRequest>,
) -> Result<Json<ServiceResponse>, ApiError> {
    let updated = state
        .update_service
        .execute(&category, &service, req.into_update()?)
        .await?;
    Ok(Json(ServiceResponse::from_service(&updated)))
}

async fn delete_service(
    State(state): State<AppState>,
    Path((category, service)): Path<(String, String)>,
) -> Result<StatusCode, ApiError> {
    state.delete_service.execute(&category, &service).await?;
    Ok(StatusCode::NO_CONTENT)
}
