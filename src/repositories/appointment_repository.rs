use crate::models::ServiceAppointment;
use crate::utils::errors::AppError;
use chrono::{NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;

pub struct AppointmentRepository {
    pool: PgPool,
}

impl AppointmentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        appt_id: Option<i32>,
        appt_date: NaiveDate,
        arrival_time: Option<NaiveTime>,
        service_customer_id: i32,
        vehicle_serviced_id: i32,
    ) -> Result<ServiceAppointment, AppError> {
        let now = Utc::now();

        let appointment = sqlx::query_as::<_, ServiceAppointment>(
            r#"
            INSERT INTO service_appointments (
                appt_id, appt_date, arrival_time,
                service_customer_id, vehicle_serviced_id, created_at, updated_at
            )
            VALUES (
                COALESCE($1, (SELECT COALESCE(MAX(appt_id), 0) + 1 FROM service_appointments)),
                $2, $3, $4, $5, $6, $6
            )
            RETURNING *
            "#,
        )
        .bind(appt_id)
        .bind(appt_date)
        .bind(arrival_time)
        .bind(service_customer_id)
        .bind(vehicle_serviced_id)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(appointment)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<ServiceAppointment>, AppError> {
        let appointment = sqlx::query_as::<_, ServiceAppointment>(
            "SELECT * FROM service_appointments WHERE appt_id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(appointment)
    }

    pub async fn find_all(&self) -> Result<Vec<ServiceAppointment>, AppError> {
        let appointments = sqlx::query_as::<_, ServiceAppointment>(
            "SELECT * FROM service_appointments ORDER BY appt_id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(appointments)
    }

    /// Marca el servicio como completado con su costo total
    pub async fn complete(
        &self,
        id: i32,
        completion_time: NaiveTime,
        labor_cost: Decimal,
        total_cost: Decimal,
    ) -> Result<ServiceAppointment, AppError> {
        let appointment = sqlx::query_as::<_, ServiceAppointment>(
            r#"
            UPDATE service_appointments
            SET completion_time = $2, labor_cost = $3, total_cost = $4, updated_at = $5
            WHERE appt_id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(completion_time)
        .bind(labor_cost)
        .bind(total_cost)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(appointment)
    }

    pub async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM service_appointments")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
