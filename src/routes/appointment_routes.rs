use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::controllers::appointment_controller::AppointmentController;
use crate::dto::appointment_dto::{
    AppointmentResponse, CompleteServiceRequest, CreateAppointmentRequest,
};
use crate::dto::ApiResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_appointment_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_appointments).post(create_appointment))
        .route("/:id", get(get_appointment))
}

async fn create_appointment(
    State(state): State<AppState>,
    Json(request): Json<CreateAppointmentRequest>,
) -> Result<(StatusCode, Json<ApiResponse<AppointmentResponse>>), AppError> {
    let controller = AppointmentController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn get_appointment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<AppointmentResponse>, AppError> {
    let controller = AppointmentController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn list_appointments(
    State(state): State<AppState>,
) -> Result<Json<Vec<AppointmentResponse>>, AppError> {
    let controller = AppointmentController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

/// Handler de POST /complete_service/:id
pub async fn complete_service(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<CompleteServiceRequest>,
) -> Result<Json<ApiResponse<AppointmentResponse>>, AppError> {
    let controller = AppointmentController::new(state.pool.clone());
    let response = controller.complete(id, request).await?;
    Ok(Json(response))
}
