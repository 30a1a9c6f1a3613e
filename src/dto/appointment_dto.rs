//! DTOs de ServiceAppointment

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::ServiceAppointment;

/// Request para agendar una cita de servicio
#[derive(Debug, Deserialize)]
pub struct CreateAppointmentRequest {
    /// Id explícito; si falta se asigna max + 1
    pub appt_id: Option<i32>,

    /// Fecha de la cita, formato YYYY-MM-DD
    #[serde(default)]
    pub appt_date: String,

    /// Hora de llegada, formato HH:MM:SS
    pub arrival_time: Option<String>,

    pub customer_id: Option<i32>,
    pub vehicle_id: Option<i32>,
}

/// Request para completar un servicio
#[derive(Debug, Deserialize)]
pub struct CompleteServiceRequest {
    /// Hora de finalización, formato HH:MM:SS; si falta se usa la hora actual
    pub completion_time: Option<String>,

    pub labor_cost: Option<Decimal>,

    #[serde(default)]
    pub parts_costs: Vec<Decimal>,
}

/// Response de cita de servicio
#[derive(Debug, Serialize)]
pub struct AppointmentResponse {
    pub appt_id: i32,
    pub appt_date: NaiveDate,
    pub arrival_time: Option<NaiveTime>,
    pub completion_time: Option<NaiveTime>,
    pub labor_cost: Option<Decimal>,
    pub total_cost: Option<Decimal>,
    pub customer_id: i32,
    pub vehicle_id: i32,
    pub created_at: DateTime<Utc>,
}

impl From<ServiceAppointment> for AppointmentResponse {
    fn from(appointment: ServiceAppointment) -> Self {
        Self {
            appt_id: appointment.appt_id,
            appt_date: appointment.appt_date,
            arrival_time: appointment.arrival_time,
            completion_time: appointment.completion_time,
            labor_cost: appointment.labor_cost,
            total_cost: appointment.total_cost,
            customer_id: appointment.service_customer_id,
            vehicle_id: appointment.vehicle_serviced_id,
            created_at: appointment.created_at,
        }
    }
}
