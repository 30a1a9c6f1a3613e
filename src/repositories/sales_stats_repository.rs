use crate::dto::stats_dto::{CumulativeSales, ModelSales};
use crate::models::SalesStats;
use crate::utils::errors::AppError;
use chrono::NaiveDate;
use sqlx::PgPool;

pub struct SalesStatsRepository {
    pool: PgPool,
}

impl SalesStatsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_vehicle(&self, vehicle_id: i32) -> Result<Option<SalesStats>, AppError> {
        let stats = sqlx::query_as::<_, SalesStats>(
            "SELECT * FROM sales_stats WHERE vehicle_stat_id = $1",
        )
        .bind(vehicle_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(stats)
    }

    /// Ventas agrupadas por make/model dentro del rango pedido.
    /// Rango abierto en cualquiera de los extremos cuando el bind es NULL.
    pub async fn sales_by_model(
        &self,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<Vec<ModelSales>, AppError> {
        let rows = sqlx::query_as::<_, ModelSales>(
            r#"
            SELECT make, model,
                   COUNT(*) AS cars_sold,
                   COALESCE(SUM(profit), 0) AS total_profit
            FROM vehicles
            WHERE sold_at IS NOT NULL
              AND ($1::date IS NULL OR sold_at >= $1)
              AND ($2::date IS NULL OR sold_at <= $2)
            GROUP BY make, model
            ORDER BY total_profit DESC, make, model
            "#,
        )
        .bind(start_date)
        .bind(end_date)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Acumulado global sin filtrar, tomado de las filas de sales_stats
    pub async fn cumulative(&self) -> Result<CumulativeSales, AppError> {
        let totals = sqlx::query_as::<_, CumulativeSales>(
            r#"
            SELECT COALESCE(SUM(cars_sold), 0)::BIGINT AS cars_sold,
                   COALESCE(SUM(total_profit), 0) AS total_profit
            FROM sales_stats
            "#,
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(totals)
    }
}
