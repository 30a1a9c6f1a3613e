use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::controllers::service_package_controller::ServicePackageController;
use crate::dto::service_package_dto::{CreateServicePackageRequest, ServicePackageResponse};
use crate::dto::ApiResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_service_package_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_service_packages).post(create_service_package))
        .route("/:id", get(get_service_package))
}

async fn create_service_package(
    State(state): State<AppState>,
    Json(request): Json<CreateServicePackageRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ServicePackageResponse>>), AppError> {
    let controller = ServicePackageController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn get_service_package(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ServicePackageResponse>, AppError> {
    let controller = ServicePackageController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn list_service_packages(
    State(state): State<AppState>,
) -> Result<Json<Vec<ServicePackageResponse>>, AppError> {
    let controller = ServicePackageController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}
