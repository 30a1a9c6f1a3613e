use crate::models::Vehicle;
use crate::utils::errors::{conflict_error, AppError};
use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::PgPool;

pub struct VehicleRepository {
    pool: PgPool,
}

impl VehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        vehicle_id: Option<i32>,
        make: &str,
        model: &str,
        year: Option<i32>,
        vin: &str,
        purchase_price: Decimal,
    ) -> Result<Vehicle, AppError> {
        let now = Utc::now();

        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            INSERT INTO vehicles (
                vehicle_id, make, model, year, vin, purchase_price, created_at, updated_at
            )
            VALUES (
                COALESCE($1, (SELECT COALESCE(MAX(vehicle_id), 0) + 1 FROM vehicles)),
                $2, $3, $4, $5, $6, $7, $7
            )
            RETURNING *
            "#,
        )
        .bind(vehicle_id)
        .bind(make)
        .bind(model)
        .bind(year)
        .bind(vin)
        .bind(purchase_price)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            // respaldo del UNIQUE sobre vin
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                conflict_error("Vehicle", "vin", vin)
            }
            _ => AppError::from(e),
        })?;

        Ok(vehicle)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Vehicle>, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles WHERE vehicle_id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(vehicle)
    }

    pub async fn find_all(&self) -> Result<Vec<Vehicle>, AppError> {
        let vehicles = sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles ORDER BY vehicle_id")
            .fetch_all(&self.pool)
            .await?;

        Ok(vehicles)
    }

    /// Vehículos en stock (sin vender), para el formulario de venta
    pub async fn find_unsold(&self) -> Result<Vec<Vehicle>, AppError> {
        let vehicles = sqlx::query_as::<_, Vehicle>(
            "SELECT * FROM vehicles WHERE sold_at IS NULL ORDER BY vehicle_id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(vehicles)
    }

    pub async fn vin_exists(&self, vin: &str) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM vehicles WHERE vin = $1)")
            .bind(vin)
            .fetch_one(&self.pool)
            .await?;

        Ok(result.0)
    }

    pub async fn exists(&self, id: i32) -> Result<bool, AppError> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM vehicles WHERE vehicle_id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;

        Ok(result.0)
    }

    pub async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM vehicles")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
