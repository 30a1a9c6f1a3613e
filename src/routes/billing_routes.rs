use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
};

use crate::controllers::billing_controller::BillingController;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Handler de GET /bill/:vehicle_id - factura de venta descargable
pub async fn vehicle_bill(
    State(state): State<AppState>,
    Path(vehicle_id): Path<i32>,
) -> Result<Response, AppError> {
    let controller = BillingController::new(state.pool.clone());
    let bill = controller.vehicle_bill(vehicle_id).await?;

    Ok(as_download(bill.filename, bill.html))
}

/// Handler de GET /service_bill/:appointment_id - factura de servicio
pub async fn service_bill(
    State(state): State<AppState>,
    Path(appointment_id): Path<i32>,
) -> Result<Response, AppError> {
    let controller = BillingController::new(state.pool.clone());
    let bill = controller.service_bill(appointment_id).await?;

    Ok(as_download(bill.filename, bill.html))
}

/// El documento se sirve como descarga; vive solo en memoria durante
/// el request.
fn as_download(filename: String, html: String) -> Response {
    (
        [
            (
                header::CONTENT_TYPE,
                "text/html; charset=utf-8".to_string(),
            ),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", filename),
            ),
        ],
        html,
    )
        .into_response()
}
