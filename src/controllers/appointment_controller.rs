use crate::dto::appointment_dto::{
    AppointmentResponse, CompleteServiceRequest, CreateAppointmentRequest,
};
use crate::dto::ApiResponse;
use crate::models::ServiceAppointment;
use crate::repositories::appointment_repository::AppointmentRepository;
use crate::repositories::customer_repository::CustomerRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::{not_found_error, validation_error, AppError};
use crate::utils::validation::{field_error, validate_date, validate_non_negative, validate_time};
use chrono::{NaiveTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;

pub struct AppointmentController {
    repository: AppointmentRepository,
    customers: CustomerRepository,
    vehicles: VehicleRepository,
}

impl AppointmentController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: AppointmentRepository::new(pool.clone()),
            customers: CustomerRepository::new(pool.clone()),
            vehicles: VehicleRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateAppointmentRequest,
    ) -> Result<ApiResponse<AppointmentResponse>, AppError> {
        if request.appt_date.trim().is_empty() {
            return Err(validation_error("appt_date", "Appointment date is required"));
        }
        let appt_date = validate_date(request.appt_date.trim())
            .map_err(|e| AppError::Validation(field_error("appt_date", e)))?;

        let arrival_time = match &request.arrival_time {
            Some(raw) if !raw.trim().is_empty() => Some(
                validate_time(raw.trim())
                    .map_err(|e| AppError::Validation(field_error("arrival_time", e)))?,
            ),
            _ => None,
        };

        let customer_id = request
            .customer_id
            .ok_or_else(|| validation_error("customer_id", "Customer id is required"))?;
        let vehicle_id = request
            .vehicle_id
            .ok_or_else(|| validation_error("vehicle_id", "Vehicle id is required"))?;

        // Cliente y vehículo referenciados deben existir
        if !self.customers.exists(customer_id).await? {
            return Err(not_found_error("Customer", &customer_id.to_string()));
        }
        if !self.vehicles.exists(vehicle_id).await? {
            return Err(not_found_error("Vehicle", &vehicle_id.to_string()));
        }

        let appointment = self
            .repository
            .create(
                request.appt_id,
                appt_date,
                arrival_time,
                customer_id,
                vehicle_id,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            appointment.into(),
            "Cita de servicio agendada exitosamente".to_string(),
        ))
    }

    pub async fn complete(
        &self,
        id: i32,
        request: CompleteServiceRequest,
    ) -> Result<ApiResponse<AppointmentResponse>, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Appointment", &id.to_string()))?;

        let completion_time: NaiveTime = match &request.completion_time {
            Some(raw) if !raw.trim().is_empty() => validate_time(raw.trim())
                .map_err(|e| AppError::Validation(field_error("completion_time", e)))?,
            _ => Utc::now().time(),
        };

        let labor_cost = request.labor_cost.unwrap_or(Decimal::ZERO);
        validate_non_negative(labor_cost)
            .map_err(|e| AppError::Validation(field_error("labor_cost", e)))?;
        for part in &request.parts_costs {
            validate_non_negative(*part)
                .map_err(|e| AppError::Validation(field_error("parts_costs", e)))?;
        }

        let total_cost = ServiceAppointment::service_total(labor_cost, &request.parts_costs);

        let appointment = self
            .repository
            .complete(id, completion_time, labor_cost, total_cost)
            .await?;

        Ok(ApiResponse::success_with_message(
            appointment.into(),
            "Servicio completado exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<AppointmentResponse, AppError> {
        let appointment = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Appointment", &id.to_string()))?;

        Ok(appointment.into())
    }

    pub async fn list(&self) -> Result<Vec<AppointmentResponse>, AppError> {
        let appointments = self.repository.find_all().await?;

        Ok(appointments
            .into_iter()
            .map(AppointmentResponse::from)
            .collect())
    }
}
