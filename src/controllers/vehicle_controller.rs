use crate::dto::vehicle_dto::{CreateVehicleRequest, VehicleResponse};
use crate::dto::ApiResponse;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::{conflict_error, not_found_error, validation_error, AppError};
use crate::utils::validation::{field_error, validate_non_negative, validate_vin};
use sqlx::PgPool;
use validator::Validate;

pub struct VehicleController {
    repository: VehicleRepository,
}

impl VehicleController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: VehicleRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateVehicleRequest,
    ) -> Result<ApiResponse<VehicleResponse>, AppError> {
        request.validate()?;

        let vin = request.vin.trim().to_uppercase();
        validate_vin(&vin).map_err(|e| AppError::Validation(field_error("vin", e)))?;

        let purchase_price = request
            .purchase_price
            .ok_or_else(|| validation_error("purchase_price", "Purchase price is required"))?;
        validate_non_negative(purchase_price)
            .map_err(|e| AppError::Validation(field_error("purchase_price", e)))?;

        // El VIN es único en todo el inventario
        if self.repository.vin_exists(&vin).await? {
            return Err(conflict_error("Vehicle", "vin", &vin));
        }

        let vehicle = self
            .repository
            .create(
                request.vehicle_id,
                request.make.trim(),
                request.model.trim(),
                request.year,
                &vin,
                purchase_price,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            vehicle.into(),
            "Vehículo creado exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<VehicleResponse, AppError> {
        let vehicle = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Vehicle", &id.to_string()))?;

        Ok(vehicle.into())
    }

    pub async fn list(&self) -> Result<Vec<VehicleResponse>, AppError> {
        let vehicles = self.repository.find_all().await?;

        Ok(vehicles.into_iter().map(VehicleResponse::from).collect())
    }
}
