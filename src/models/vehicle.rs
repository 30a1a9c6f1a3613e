//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle y sus operaciones de dominio.
//! Mapea exactamente a la tabla vehicles con primary key 'vehicle_id'.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Vehicle principal - mapea exactamente a la tabla vehicles
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Vehicle {
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
    pub updated_at: DateTime<Utc>,
}

impl Vehicle {
    /// Descripción corta: "2021 Toyota Camry"
    pub fn display_name(&self) -> String {
        match self.year {
            Some(year) => format!("{} {} {}", year, self.make, self.model),
            None => format!("{} {}", self.make, self.model),
        }
    }

    /// Ganancia que produciría vender a `sale_price`.
    /// Invariante: una vez vendido, profit == sale_price - purchase_price.
    pub fn sale_profit(&self, sale_price: Decimal) -> Decimal {
        sale_price - self.purchase_price
    }

    pub fn is_sold(&self) -> bool {
        self.sold_at.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_vehicle() -> Vehicle {
        Vehicle {
            vehicle_id: 5,
            make: "Toyota".to_string(),
            model: "Camry".to_string(),
            year: Some(2021),
            vin: "4T1BF1FK5HU123456".to_string(),
            purchase_price: "10000".parse().unwrap(),
            sale_price: None,
            profit: None,
            owner_id: None,
            sold_at: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_display_name() {
        assert_eq!("2021 Toyota Camry", sample_vehicle().display_name());

        let mut sin_anio = sample_vehicle();
        sin_anio.year = None;
        assert_eq!("Toyota Camry", sin_anio.display_name());
    }

    #[test]
    fn test_sale_profit() {
        let vehicle = sample_vehicle();
        assert_eq!(
            vehicle.sale_profit("12500".parse().unwrap()),
            "2500".parse::<Decimal>().unwrap()
        );
        // vender a pérdida
        assert_eq!(
            vehicle.sale_profit("9000".parse().unwrap()),
            "-1000".parse::<Decimal>().unwrap()
        );
    }

    #[test]
    fn test_is_sold() {
        let mut vehicle = sample_vehicle();
        assert!(!vehicle.is_sold());
        vehicle.sold_at = NaiveDate::from_ymd_opt(2024, 3, 1);
        assert!(vehicle.is_sold());
    }
}
