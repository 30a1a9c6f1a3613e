use crate::models::ServicePackage;
use crate::utils::errors::AppError;
use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::PgPool;

pub struct ServicePackageRepository {
    pool: PgPool,
}

impl ServicePackageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        pkg_id: Option<i32>,
        pkg_name: &str,
        description: Option<String>,
        base_cost: Option<Decimal>,
    ) -> Result<ServicePackage, AppError> {
        let now = Utc::now();

        let package = sqlx::query_as::<_, ServicePackage>(
            r#"
            INSERT INTO service_packages (pkg_id, pkg_name, description, base_cost, created_at, updated_at)
            VALUES (
                COALESCE($1, (SELECT COALESCE(MAX(pkg_id), 0) + 1 FROM service_packages)),
                $2, $3, $4, $5, $5
            )
            RETURNING *
            "#,
        )
        .bind(pkg_id)
        .bind(pkg_name)
        .bind(description)
        .bind(base_cost)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(package)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<ServicePackage>, AppError> {
        let package =
            sqlx::query_as::<_, ServicePackage>("SELECT * FROM service_packages WHERE pkg_id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(package)
    }

    pub async fn find_all(&self) -> Result<Vec<ServicePackage>, AppError> {
        let packages =
            sqlx::query_as::<_, ServicePackage>("SELECT * FROM service_packages ORDER BY pkg_id")
                .fetch_all(&self.pool)
                .await?;

        Ok(packages)
    }
}
