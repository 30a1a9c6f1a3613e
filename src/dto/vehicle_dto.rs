//! DTOs de Vehicle

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::Vehicle;

/// Request para crear un vehículo
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVehicleRequest {
    /// Id explícito; si falta se asigna max + 1
    pub vehicle_id: Option<i32>,

    #[serde(default)]
    #[validate(length(min = 1, max = 40))]
    pub make: String,

    #[serde(default)]
    #[validate(length(min = 1, max = 40))]
    pub model: String,

    #[validate(range(min = 1900, max = 2100))]
    pub year: Option<i32>,

    /// Formato verificado aparte con validate_vin
    #[serde(default)]
    pub vin: String,

    pub purchase_price: Option<Decimal>,
}

/// Response de vehículo
#[derive(Debug, Serialize)]
pub struct VehicleResponse {
    pub vehicle_id: i32,
    pub make: String,
    pub model: String,
    pub year: Option<i32>,
    pub vin: String,
    pub purchase_price: Decimal,
    pub sale_price: Option<Decimal>,
    pub profit: Option<Decimal>,
    pub owner_id: Option<i32>,
    pub sold_at: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

impl From<Vehicle> for VehicleResponse {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            vehicle_id: vehicle.vehicle_id,
            make: vehicle.make,
            model: vehicle.model,
            year: vehicle.year,
            vin: vehicle.vin,
            purchase_price: vehicle.purchase_price,
            sale_price: vehicle.sale_price,
            profit: vehicle.profit,
            owner_id: vehicle.owner_id,
            sold_at: vehicle.sold_at,
            created_at: vehicle.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_make_and_model_fail_validation() {
        let request: CreateVehicleRequest =
            serde_json::from_str(r#"{"vin": "4T1BF1FK5HU123456"}"#).unwrap();
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("make"));
        assert!(errors.field_errors().contains_key("model"));
    }

    #[test]
    fn test_year_out_of_range_fails_validation() {
        let request: CreateVehicleRequest = serde_json::from_str(
            r#"{"make": "Toyota", "model": "Camry", "year": 1850, "vin": "4T1BF1FK5HU123456"}"#,
        )
        .unwrap();
        assert!(request.validate().is_err());
    }
}
