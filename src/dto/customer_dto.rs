//! DTOs de Customer

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::Customer;

/// Request para crear un cliente
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCustomerRequest {
    /// Id explícito; si falta se asigna max + 1
    pub customer_id: Option<i32>,

    #[serde(default)]
    #[validate(length(min = 1, max = 40))]
    pub first_name: String,

    #[serde(default)]
    #[validate(length(min = 1, max = 40))]
    pub last_name: String,

    #[validate(length(max = 15))]
    pub phone: Option<String>,

    #[validate(email)]
    pub email: Option<String>,

    #[validate(length(max = 100))]
    pub address: Option<String>,
}

/// Response de cliente
#[derive(Debug, Serialize)]
pub struct CustomerResponse {
    pub customer_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub total_spent: Decimal,
    pub total_profit: Decimal,
    pub created_at: DateTime<Utc>,
}

impl From<Customer> for CustomerResponse {
    fn from(customer: Customer) -> Self {
        Self {
            customer_id: customer.customer_id,
            first_name: customer.first_name,
            last_name: customer.last_name,
            phone: customer.phone,
            email: customer.email,
            address: customer.address,
            total_spent: customer.total_spent,
            total_profit: customer.total_profit,
            created_at: customer.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_names_fail_validation() {
        let request: CreateCustomerRequest = serde_json::from_str("{}").unwrap();
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("first_name"));
        assert!(errors.field_errors().contains_key("last_name"));
    }

    #[test]
    fn test_valid_request_passes_validation() {
        let request: CreateCustomerRequest = serde_json::from_str(
            r#"{"first_name": "Jane", "last_name": "Doe", "email": "jane@example.com"}"#,
        )
        .unwrap();
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_bad_email_fails_validation() {
        let request: CreateCustomerRequest = serde_json::from_str(
            r#"{"first_name": "Jane", "last_name": "Doe", "email": "not-an-email"}"#,
        )
        .unwrap();
        assert!(request.validate().is_err());
    }
}
