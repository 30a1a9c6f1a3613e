use axum::{
    extract::{Query, State},
    response::Redirect,
    Form, Json,
};
use axum_extra::extract::cookie::CookieJar;
use tracing::warn;

use crate::controllers::sales_controller::SalesController;
use crate::dto::sale_dto::SellCarForm;
use crate::dto::stats_dto::{SalesStatisticsRequest, SalesStatisticsResponse};
use crate::routes::pages::set_flash;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::money::format_currency;

/// Handler de POST /sell_car (ruta de formulario: redirect + flash)
pub async fn sell_car(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<SellCarForm>,
) -> (CookieJar, Redirect) {
    let controller = SalesController::new(state.pool.clone());

    match controller.sell_car(form).await {
        Ok(receipt) => {
            let message = format!(
                "Vehículo {} vendido a {} por {}",
                receipt.vehicle_name,
                receipt.buyer_name,
                format_currency(receipt.sale_price)
            );
            (set_flash(jar, &message), Redirect::to("/"))
        }
        Err(e) => {
            warn!("Venta rechazada: {}", e);
            (set_flash(jar, &e.to_string()), Redirect::to("/"))
        }
    }
}

/// Handler de GET /sales_statistics con rango en query string
pub async fn sales_statistics_query(
    State(state): State<AppState>,
    Query(request): Query<SalesStatisticsRequest>,
) -> Result<Json<SalesStatisticsResponse>, AppError> {
    let controller = SalesController::new(state.pool.clone());
    let response = controller.sales_statistics(request).await?;
    Ok(Json(response))
}

/// Handler de POST /sales_statistics con rango en el body
pub async fn sales_statistics_body(
    State(state): State<AppState>,
    Json(request): Json<SalesStatisticsRequest>,
) -> Result<Json<SalesStatisticsResponse>, AppError> {
    let controller = SalesController::new(state.pool.clone());
    let response = controller.sales_statistics(request).await?;
    Ok(Json(response))
}
