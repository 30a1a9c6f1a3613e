//! Servicio de facturación
//!
//! Proyección plana de cliente + vehículo/cita renderizada a un documento
//! descargable. El documento se genera en memoria y vive solo durante el
//! request; no quedan artefactos huérfanos en ningún camino de salida.

use askama::Template;
use chrono::Utc;
use sqlx::PgPool;

use crate::repositories::appointment_repository::AppointmentRepository;
use crate::repositories::customer_repository::CustomerRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::{bad_request_error, not_found_error, AppError};
use crate::utils::money::format_currency;

const DEALERSHIP_NAME: &str = "Andino Motors";

/// Documento renderizado listo para servir como descarga
#[derive(Debug)]
pub struct RenderedBill {
    pub filename: String,
    pub html: String,
}

/// Factura de venta de vehículo
#[derive(Template)]
#[template(path = "vehicle_bill.html")]
pub struct VehicleBillTemplate {
    pub dealership: &'static str,
    pub generated_at: String,
    pub vehicle_id: i32,
    pub vehicle_name: String,
    pub vin: String,
    pub customer_name: String,
    pub customer_contact: String,
    pub customer_address: String,
    pub sold_at: String,
    pub sale_price: String,
}

/// Factura de servicio de taller
#[derive(Template)]
#[template(path = "service_bill.html")]
pub struct ServiceBillTemplate {
    pub dealership: &'static str,
    pub generated_at: String,
    pub appt_id: i32,
    pub appt_date: String,
    pub arrival_time: String,
    pub completion_time: String,
    pub customer_name: String,
    pub vehicle_name: String,
    pub vin: String,
    pub labor_cost: String,
    pub total_cost: String,
}

pub struct BillingService {
    customers: CustomerRepository,
    vehicles: VehicleRepository,
    appointments: AppointmentRepository,
}

impl BillingService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            customers: CustomerRepository::new(pool.clone()),
            vehicles: VehicleRepository::new(pool.clone()),
            appointments: AppointmentRepository::new(pool),
        }
    }

    pub async fn vehicle_bill(&self, vehicle_id: i32) -> Result<RenderedBill, AppError> {
        let vehicle = self
            .vehicles
            .find_by_id(vehicle_id)
            .await?
            .ok_or_else(|| not_found_error("Vehicle", &vehicle_id.to_string()))?;

        let (owner_id, sale_price, sold_at) =
            match (vehicle.owner_id, vehicle.sale_price, vehicle.sold_at) {
                (Some(owner_id), Some(sale_price), Some(sold_at)) => {
                    (owner_id, sale_price, sold_at)
                }
                _ => return Err(bad_request_error("Vehicle has not been sold yet")),
            };

        let customer = self
            .customers
            .find_by_id(owner_id)
            .await?
            .ok_or_else(|| not_found_error("Customer", &owner_id.to_string()))?;

        let template = VehicleBillTemplate {
            dealership: DEALERSHIP_NAME,
            generated_at: Utc::now().format("%Y-%m-%d %H:%M UTC").to_string(),
            vehicle_id: vehicle.vehicle_id,
            vehicle_name: vehicle.display_name(),
            vin: vehicle.vin.clone(),
            customer_name: customer.full_name(),
            customer_contact: contact_line(&customer.phone, &customer.email),
            customer_address: customer.address.clone().unwrap_or_default(),
            sold_at: sold_at.format("%Y-%m-%d").to_string(),
            sale_price: format_currency(sale_price),
        };

        Ok(RenderedBill {
            filename: format!("bill_vehicle_{}.html", vehicle_id),
            html: template.render()?,
        })
    }

    pub async fn service_bill(&self, appointment_id: i32) -> Result<RenderedBill, AppError> {
        let appointment = self
            .appointments
            .find_by_id(appointment_id)
            .await?
            .ok_or_else(|| not_found_error("Appointment", &appointment_id.to_string()))?;

        let customer = self
            .customers
            .find_by_id(appointment.service_customer_id)
            .await?
            .ok_or_else(|| {
                not_found_error("Customer", &appointment.service_customer_id.to_string())
            })?;

        let vehicle = self
            .vehicles
            .find_by_id(appointment.vehicle_serviced_id)
            .await?
            .ok_or_else(|| {
                not_found_error("Vehicle", &appointment.vehicle_serviced_id.to_string())
            })?;

        let template = ServiceBillTemplate {
            dealership: DEALERSHIP_NAME,
            generated_at: Utc::now().format("%Y-%m-%d %H:%M UTC").to_string(),
            appt_id: appointment.appt_id,
            appt_date: appointment.appt_date.format("%Y-%m-%d").to_string(),
            arrival_time: appointment
                .arrival_time
                .map(|t| t.format("%H:%M").to_string())
                .unwrap_or_default(),
            completion_time: appointment
                .completion_time
                .map(|t| t.format("%H:%M").to_string())
                .unwrap_or_default(),
            customer_name: customer.full_name(),
            vehicle_name: vehicle.display_name(),
            vin: vehicle.vin.clone(),
            labor_cost: appointment
                .labor_cost
                .map(format_currency)
                .unwrap_or_default(),
            total_cost: appointment
                .total_cost
                .map(format_currency)
                .unwrap_or_default(),
        };

        Ok(RenderedBill {
            filename: format!("service_bill_{}.html", appointment_id),
            html: template.render()?,
        })
    }
}

fn contact_line(phone: &Option<String>, email: &Option<String>) -> String {
    match (phone, email) {
        (Some(phone), Some(email)) => format!("{} / {}", phone, email),
        (Some(phone), None) => phone.clone(),
        (None, Some(email)) => email.clone(),
        (None, None) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vehicle_bill_renders() {
        let template = VehicleBillTemplate {
            dealership: DEALERSHIP_NAME,
            generated_at: "2024-03-01 12:00 UTC".to_string(),
            vehicle_id: 5,
            vehicle_name: "2021 Toyota Camry".to_string(),
            vin: "4T1BF1FK5HU123456".to_string(),
            customer_name: "Jane Doe".to_string(),
            customer_contact: "555-0100 / jane@example.com".to_string(),
            customer_address: "123 Main St".to_string(),
            sold_at: "2024-03-01".to_string(),
            sale_price: "$12,500.00".to_string(),
        };

        let html = template.render().unwrap();
        assert!(html.contains("Jane Doe"));
        assert!(html.contains("$12,500.00"));
        assert!(html.contains("2021 Toyota Camry"));
        assert!(html.contains("4T1BF1FK5HU123456"));
    }

    #[test]
    fn test_service_bill_renders() {
        let template = ServiceBillTemplate {
            dealership: DEALERSHIP_NAME,
            generated_at: "2024-03-01 12:00 UTC".to_string(),
            appt_id: 9,
            appt_date: "2024-04-10".to_string(),
            arrival_time: "09:30".to_string(),
            completion_time: "11:00".to_string(),
            customer_name: "Jane Doe".to_string(),
            vehicle_name: "2021 Toyota Camry".to_string(),
            vin: "4T1BF1FK5HU123456".to_string(),
            labor_cost: "$200.00".to_string(),
            total_cost: "$355.50".to_string(),
        };

        let html = template.render().unwrap();
        assert!(html.contains("Jane Doe"));
        assert!(html.contains("$355.50"));
        assert!(html.contains("2024-04-10"));
    }

    #[test]
    fn test_contact_line() {
        assert_eq!(
            contact_line(&Some("555-0100".into()), &Some("a@b.com".into())),
            "555-0100 / a@b.com"
        );
        assert_eq!(contact_line(&None, &Some("a@b.com".into())), "a@b.com");
        assert_eq!(contact_line(&None, &None), "");
    }
}
