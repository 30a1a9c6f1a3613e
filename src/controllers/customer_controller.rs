use crate::dto::customer_dto::{CreateCustomerRequest, CustomerResponse};
use crate::dto::ApiResponse;
use crate::repositories::customer_repository::CustomerRepository;
use crate::utils::errors::{not_found_error, validation_error, AppError};
use sqlx::PgPool;
use validator::Validate;

pub struct CustomerController {
    repository: CustomerRepository,
}

impl CustomerController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: CustomerRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateCustomerRequest,
    ) -> Result<ApiResponse<CustomerResponse>, AppError> {
        // Nombre y apellido son obligatorios
        if request.first_name.trim().is_empty() {
            return Err(validation_error("first_name", "First name is required"));
        }
        if request.last_name.trim().is_empty() {
            return Err(validation_error("last_name", "Last name is required"));
        }
        request.validate()?;

        let customer = self
            .repository
            .create(
                request.customer_id,
                request.first_name.trim(),
                request.last_name.trim(),
                request.phone,
                request.email,
                request.address,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            customer.into(),
            "Cliente creado exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<CustomerResponse, AppError> {
        let customer = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Customer", &id.to_string()))?;

        Ok(customer.into())
    }

    pub async fn list(&self) -> Result<Vec<CustomerResponse>, AppError> {
        let customers = self.repository.find_all().await?;

        Ok(customers.into_iter().map(CustomerResponse::from).collect())
    }
}
