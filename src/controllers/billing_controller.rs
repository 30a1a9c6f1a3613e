use crate::services::billing_service::RenderedBill;
use crate::services::BillingService;
use crate::utils::errors::AppError;
use sqlx::PgPool;

pub struct BillingController {
    service: BillingService,
}

impl BillingController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            service: BillingService::new(pool),
        }
    }

    pub async fn vehicle_bill(&self, vehicle_id: i32) -> Result<RenderedBill, AppError> {
        self.service.vehicle_bill(vehicle_id).await
    }

    pub async fn service_bill(&self, appointment_id: i32) -> Result<RenderedBill, AppError> {
        self.service.service_bill(appointment_id).await
    }
}
