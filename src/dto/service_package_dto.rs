//! DTOs de ServicePackage

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::ServicePackage;

/// Request para crear un paquete de servicio
#[derive(Debug, Deserialize, Validate)]
pub struct CreateServicePackageRequest {
    /// Id explícito; si falta se asigna max + 1
    pub pkg_id: Option<i32>,

    #[serde(default)]
    #[validate(length(min = 1, max = 40))]
    pub pkg_name: String,

    #[validate(length(max = 100))]
    pub description: Option<String>,

    pub base_cost: Option<Decimal>,
}

/// Response de paquete de servicio
#[derive(Debug, Serialize)]
pub struct ServicePackageResponse {
    pub pkg_id: i32,
    pub pkg_name: String,
    pub description: Option<String>,
    pub base_cost: Option<Decimal>,
    pub created_at: DateTime<Utc>,
}

impl From<ServicePackage> for ServicePackageResponse {
    fn from(package: ServicePackage) -> Self {
        Self {
            pkg_id: package.pkg_id,
            pkg_name: package.pkg_name,
            description: package.description,
            base_cost: package.base_cost,
            created_at: package.created_at,
        }
    }
}
