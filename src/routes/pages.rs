//! Páginas renderizadas en el servidor
//!
//! Página principal de carga de datos con mensaje flash por cookie.

use askama::Template;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar};

use crate::repositories::appointment_repository::AppointmentRepository;
use crate::repositories::customer_repository::CustomerRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::state::AppState;
use crate::utils::errors::AppError;

const FLASH_COOKIE: &str = "flash";

/// Wrapper que convierte templates Askama en respuestas HTML
pub struct HtmlTemplate<T>(pub T);

impl<T> IntoResponse for HtmlTemplate<T>
where
    T: Template,
{
    fn into_response(self) -> Response {
        match self.0.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to render template: {err}"),
            )
                .into_response(),
        }
    }
}

/// Fila del selector de vehículos en stock
pub struct VehicleOption {
    pub vehicle_id: i32,
    pub label: String,
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub flash: String,
    pub customer_count: i64,
    pub vehicle_count: i64,
    pub appointment_count: i64,
    pub vehicles_in_stock: Vec<VehicleOption>,
}

/// Guarda un mensaje flash en cookie para el próximo request
pub fn set_flash(jar: CookieJar, message: &str) -> CookieJar {
    let mut cookie = Cookie::new(FLASH_COOKIE, urlencoding::encode(message).into_owned());
    cookie.set_path("/");
    jar.add(cookie)
}

/// Lee y consume el mensaje flash de la cookie
pub fn take_flash(jar: CookieJar) -> (CookieJar, Option<String>) {
    let flash = jar.get(FLASH_COOKIE).map(|cookie| {
        urlencoding::decode(cookie.value())
            .map(|decoded| decoded.into_owned())
            .unwrap_or_else(|_| cookie.value().to_string())
    });

    let mut removal = Cookie::new(FLASH_COOKIE, "");
    removal.set_path("/");
    (jar.remove(removal), flash)
}

/// Handler de la página principal (GET /)
pub async fn index(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<impl IntoResponse, AppError> {
    let customers = CustomerRepository::new(state.pool.clone());
    let vehicles = VehicleRepository::new(state.pool.clone());
    let appointments = AppointmentRepository::new(state.pool.clone());

    let customer_count = customers.count().await?;
    let vehicle_count = vehicles.count().await?;
    let appointment_count = appointments.count().await?;
    let in_stock = vehicles.find_unsold().await?;

    let (jar, flash) = take_flash(jar);

    let template = IndexTemplate {
        flash: flash.unwrap_or_default(),
        customer_count,
        vehicle_count,
        appointment_count,
        vehicles_in_stock: in_stock
            .into_iter()
            .map(|v| VehicleOption {
                vehicle_id: v.vehicle_id,
                label: format!("{} (VIN {})", v.display_name(), v.vin),
            })
            .collect(),
    };

    Ok((jar, HtmlTemplate(template)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flash_round_trip() {
        let jar = CookieJar::new();
        let jar = set_flash(jar, "Vehículo vendido: $12,500.00");
        let (_, flash) = take_flash(jar);
        assert_eq!(flash.as_deref(), Some("Vehículo vendido: $12,500.00"));
    }

    #[test]
    fn test_take_flash_empty_jar() {
        let (_, flash) = take_flash(CookieJar::new());
        assert!(flash.is_none());
    }

    #[test]
    fn test_index_template_renders() {
        let template = IndexTemplate {
            flash: "Listo".to_string(),
            customer_count: 3,
            vehicle_count: 7,
            appointment_count: 2,
            vehicles_in_stock: vec![VehicleOption {
                vehicle_id: 5,
                label: "2021 Toyota Camry (VIN 4T1BF1FK5HU123456)".to_string(),
            }],
        };

        let html = template.render().unwrap();
        assert!(html.contains("Listo"));
        assert!(html.contains("2021 Toyota Camry"));
    }
}
