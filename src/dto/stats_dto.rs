//! DTOs de estadísticas de venta

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Rango de fechas solicitado (query string o body JSON)
#[derive(Debug, Default, Deserialize)]
pub struct SalesStatisticsRequest {
    /// Formato YYYY-MM-DD
    pub start_date: Option<String>,
    /// Formato YYYY-MM-DD
    pub end_date: Option<String>,
}

/// Agregado por make/model dentro del rango
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct ModelSales {
    pub make: String,
    pub model: String,
    pub cars_sold: i64,
    pub total_profit: Decimal,
}

/// Agregado acumulado sin filtrar, tomado de sales_stats
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct CumulativeSales {
    pub cars_sold: i64,
    pub total_profit: Decimal,
}

/// Response de GET|POST /sales_statistics
#[derive(Debug, Serialize)]
pub struct SalesStatisticsResponse {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub by_model: Vec<ModelSales>,
    pub cumulative: CumulativeSales,
}
