use crate::dto::service_package_dto::{CreateServicePackageRequest, ServicePackageResponse};
use crate::dto::ApiResponse;
use crate::repositories::service_package_repository::ServicePackageRepository;
use crate::utils::errors::{not_found_error, validation_error, AppError};
use sqlx::PgPool;
use validator::Validate;

pub struct ServicePackageController {
    repository: ServicePackageRepository,
}

impl ServicePackageController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: ServicePackageRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateServicePackageRequest,
    ) -> Result<ApiResponse<ServicePackageResponse>, AppError> {
        if request.pkg_name.trim().is_empty() {
            return Err(validation_error("pkg_name", "Package name is required"));
        }
        request.validate()?;

        let package = self
            .repository
            .create(
                request.pkg_id,
                request.pkg_name.trim(),
                request.description,
                request.base_cost,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            package.into(),
            "Paquete de servicio creado exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<ServicePackageResponse, AppError> {
        let package = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Service package", &id.to_string()))?;

        Ok(package.into())
    }

    pub async fn list(&self) -> Result<Vec<ServicePackageResponse>, AppError> {
        let packages = self.repository.find_all().await?;

        Ok(packages
            .into_iter()
            .map(ServicePackageResponse::from)
            .collect())
    }
}
