//! Modelo de ServiceAppointment
//!
//! Citas de servicio de taller. Mapea exactamente a la tabla
//! service_appointments con primary key 'appt_id'.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// ServiceAppointment principal - mapea a la tabla service_appointments
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ServiceAppointment {
    pub appt_id: i32,
    pub appt_date: NaiveDate,
    pub arrival_time: Option<NaiveTime>,
    pub completion_time: Option<NaiveTime>,
    pub labor_cost: Option<Decimal>,
    pub total_cost: Option<Decimal>,
    pub service_customer_id: i32,
    pub vehicle_serviced_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ServiceAppointment {
    /// Costo total del servicio: mano de obra más la suma de repuestos
    pub fn service_total(labor_cost: Decimal, parts_costs: &[Decimal]) -> Decimal {
        parts_costs.iter().fold(labor_cost, |acc, part| acc + *part)
    }

    pub fn is_completed(&self) -> bool {
        self.completion_time.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(value: &str) -> Decimal {
        value.parse().unwrap()
    }

    #[test]
    fn test_service_total() {
        let parts = vec![dec("120.50"), dec("35.00")];
        assert_eq!(
            ServiceAppointment::service_total(dec("200"), &parts),
            dec("355.50")
        );
    }

    #[test]
    fn test_service_total_without_parts() {
        assert_eq!(
            ServiceAppointment::service_total(dec("80"), &[]),
            dec("80")
        );
    }
}
