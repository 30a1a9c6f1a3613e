//! Modelo de ServicePackage
//!
//! Paquetes de servicio ofrecidos por el taller (cambio de aceite,
//! revisión completa, etc). Mapea a la tabla service_packages.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ServicePackage {
    pub pkg_id: i32,
    pub pkg_name: String,
    pub description: Option<String>,
    pub base_cost: Option<Decimal>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
