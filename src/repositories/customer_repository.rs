use crate::models::Customer;
use crate::utils::errors::{conflict_error, AppError};
use chrono::Utc;
use sqlx::PgPool;

pub struct CustomerRepository {
    pool: PgPool,
}

impl CustomerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        customer_id: Option<i32>,
        first_name: &str,
        last_name: &str,
        phone: Option<String>,
        email: Option<String>,
        address: Option<String>,
    ) -> Result<Customer, AppError> {
        let now = Utc::now();

        // Sin id explícito se asigna max + 1
        let customer = sqlx::query_as::<_, Customer>(
            r#"
            INSERT INTO customers (
                customer_id, first_name, last_name, phone, email, address,
                total_spent, total_profit, created_at, updated_at
            )
            VALUES (
                COALESCE($1, (SELECT COALESCE(MAX(customer_id), 0) + 1 FROM customers)),
                $2, $3, $4, $5, $6, 0, 0, $7, $7
            )
            RETURNING *
            "#,
        )
        .bind(customer_id)
        .bind(first_name)
        .bind(last_name)
        .bind(phone)
        .bind(email)
        .bind(address)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => conflict_error(
                "Customer",
                "customer_id",
                &customer_id.map(|id| id.to_string()).unwrap_or_default(),
            ),
            _ => AppError::from(e),
        })?;

        Ok(customer)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Customer>, AppError> {
        let customer =
            sqlx::query_as::<_, Customer>("SELECT * FROM customers WHERE customer_id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(customer)
    }

    pub async fn find_all(&self) -> Result<Vec<Customer>, AppError> {
        let customers =
            sqlx::query_as::<_, Customer>("SELECT * FROM customers ORDER BY customer_id")
                .fetch_all(&self.pool)
                .await?;

        Ok(customers)
    }

    pub async fn exists(&self, id: i32) -> Result<bool, AppError> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM customers WHERE customer_id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;

        Ok(result.0)
    }

    pub async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM customers")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
