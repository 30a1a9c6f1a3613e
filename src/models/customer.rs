//! Modelo de Customer
//!
//! Este módulo contiene el struct Customer y sus operaciones de dominio.
//! Mapea exactamente a la tabla customers con primary key 'customer_id'.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Customer principal - mapea exactamente a la tabla customers
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Customer {
    pub customer_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub total_spent: Decimal,
    pub total_profit: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Customer {
    /// Nombre completo del cliente
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Acumula el margen de una venta en los totales del cliente.
    /// Los totales nunca decrecen: cada venta suma su margen a ambos.
    pub fn apply_sale(&mut self, profit: Decimal) {
        self.total_spent += profit;
        self.total_profit += profit;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_customer() -> Customer {
        Customer {
            customer_id: 1,
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            phone: None,
            email: None,
            address: None,
            total_spent: Decimal::ZERO,
            total_profit: Decimal::ZERO,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_full_name() {
        assert_eq!("Jane Doe", sample_customer().full_name());
    }

    #[test]
    fn test_apply_sale_accumulates_margin() {
        let mut customer = sample_customer();
        customer.apply_sale("2500".parse().unwrap());
        assert_eq!(customer.total_spent, "2500".parse::<Decimal>().unwrap());
        assert_eq!(customer.total_profit, "2500".parse::<Decimal>().unwrap());

        // una segunda venta suma de forma aditiva
        customer.apply_sale("1000".parse().unwrap());
        assert_eq!(customer.total_spent, "3500".parse::<Decimal>().unwrap());
        assert_eq!(customer.total_profit, "3500".parse::<Decimal>().unwrap());
    }
}
