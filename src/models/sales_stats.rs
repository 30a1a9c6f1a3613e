//! Modelo de SalesStats
//!
//! Estadísticas de venta acumuladas por vehículo. Una sola fila por
//! vehículo (UNIQUE sobre vehicle_stat_id) que se actualiza con cada venta.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SalesStats {
    pub stats_id: i32,
    pub vehicle_stat_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub cars_sold: i32,
    pub total_profit: Decimal,
    pub created_at: DateTime<Utc>,
}

impl SalesStats {
    /// Registra una venta en la fila acumulada: cars_sold avanza en uno,
    /// total_profit suma el margen y end_date se extiende hasta la fecha
    /// de venta si es posterior.
    pub fn apply_sale(&mut self, profit: Decimal, sold_at: NaiveDate) {
        self.cars_sold += 1;
        self.total_profit += profit;
        if sold_at > self.end_date {
            self.end_date = sold_at;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(value: &str) -> Decimal {
        value.parse().unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_stats() -> SalesStats {
        SalesStats {
            stats_id: 1,
            vehicle_stat_id: 5,
            start_date: date(2024, 3, 1),
            end_date: date(2024, 3, 1),
            cars_sold: 1,
            total_profit: dec("2500"),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_apply_sale_increments_and_accumulates() {
        let mut stats = sample_stats();
        stats.apply_sale(dec("1000"), date(2024, 4, 15));
        assert_eq!(stats.cars_sold, 2);
        assert_eq!(stats.total_profit, dec("3500"));
        assert_eq!(stats.end_date, date(2024, 4, 15));

        stats.apply_sale(dec("500"), date(2024, 5, 1));
        assert_eq!(stats.cars_sold, 3);
        assert_eq!(stats.total_profit, dec("4000"));
    }

    #[test]
    fn test_apply_sale_does_not_shrink_range() {
        let mut stats = sample_stats();
        // una venta con fecha anterior no retrocede end_date
        stats.apply_sale(dec("1000"), date(2024, 2, 1));
        assert_eq!(stats.end_date, date(2024, 3, 1));
        assert_eq!(stats.start_date, date(2024, 3, 1));
    }
}
