use crate::dto::sale_dto::{BuyerRef, SaleCommand, SaleReceipt, SellCarForm};
use crate::dto::stats_dto::{SalesStatisticsRequest, SalesStatisticsResponse};
use crate::repositories::sales_stats_repository::SalesStatsRepository;
use crate::services::SaleService;
use crate::utils::errors::{bad_request_error, validation_error, AppError};
use crate::utils::validation::{field_error, validate_date, validate_non_negative};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::PgPool;

pub struct SalesController {
    sale_service: SaleService,
    stats: SalesStatsRepository,
}

impl SalesController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            sale_service: SaleService::new(pool.clone()),
            stats: SalesStatsRepository::new(pool),
        }
    }

    pub async fn sell_car(&self, form: SellCarForm) -> Result<SaleReceipt, AppError> {
        let command = Self::parse_form(form)?;
        self.sale_service.record_sale(command).await
    }

    /// Parsea el formulario de venta; los errores terminan como flash
    fn parse_form(form: SellCarForm) -> Result<SaleCommand, AppError> {
        let vehicle_id: i32 = form
            .vehicle_id
            .trim()
            .parse()
            .map_err(|_| bad_request_error("vehicle_id must be an integer"))?;

        let sale_price: Decimal = form
            .sale_price
            .trim()
            .parse()
            .map_err(|_| bad_request_error("sale_price must be a number"))?;
        validate_non_negative(sale_price)
            .map_err(|e| AppError::Validation(field_error("sale_price", e)))?;

        let sold_at = validate_date(form.sold_at.trim())
            .map_err(|e| AppError::Validation(field_error("sold_at", e)))?;

        let buyer = match &form.customer_id {
            Some(raw) if !raw.trim().is_empty() => BuyerRef::Existing(
                raw.trim()
                    .parse()
                    .map_err(|_| bad_request_error("customer_id must be an integer"))?,
            ),
            _ => {
                if form.first_name.trim().is_empty() {
                    return Err(validation_error("first_name", "First name is required"));
                }
                if form.last_name.trim().is_empty() {
                    return Err(validation_error("last_name", "Last name is required"));
                }
                BuyerRef::ByName {
                    first_name: form.first_name.trim().to_string(),
                    last_name: form.last_name.trim().to_string(),
                }
            }
        };

        Ok(SaleCommand {
            vehicle_id,
            buyer,
            sale_price,
            sold_at,
        })
    }

    pub async fn sales_statistics(
        &self,
        request: SalesStatisticsRequest,
    ) -> Result<SalesStatisticsResponse, AppError> {
        let start_date = Self::parse_optional_date(request.start_date.as_deref(), "start_date")?;
        let end_date = Self::parse_optional_date(request.end_date.as_deref(), "end_date")?;

        let by_model = self.stats.sales_by_model(start_date, end_date).await?;
        let cumulative = self.stats.cumulative().await?;

        Ok(SalesStatisticsResponse {
            start_date,
            end_date,
            by_model,
            cumulative,
        })
    }

    fn parse_optional_date(
        value: Option<&str>,
        field: &'static str,
    ) -> Result<Option<NaiveDate>, AppError> {
        match value {
            Some(raw) if !raw.trim().is_empty() => {
                let date = validate_date(raw.trim())
                    .map_err(|e| AppError::Validation(field_error(field, e)))?;
                Ok(Some(date))
            }
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_form() -> SellCarForm {
        SellCarForm {
            vehicle_id: "5".to_string(),
            customer_id: None,
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            sale_price: "12500".to_string(),
            sold_at: "2024-03-01".to_string(),
        }
    }

    #[test]
    fn test_parse_form_by_name() {
        let command = SalesController::parse_form(sample_form()).unwrap();
        assert_eq!(command.vehicle_id, 5);
        assert_eq!(command.sale_price, "12500".parse::<Decimal>().unwrap());
        assert_eq!(
            command.sold_at,
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
        );
        assert_eq!(
            command.buyer,
            BuyerRef::ByName {
                first_name: "Jane".to_string(),
                last_name: "Doe".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_form_with_explicit_customer_id() {
        let mut form = sample_form();
        form.customer_id = Some("7".to_string());
        let command = SalesController::parse_form(form).unwrap();
        assert_eq!(command.buyer, BuyerRef::Existing(7));
    }

    #[test]
    fn test_parse_form_rejects_bad_price() {
        let mut form = sample_form();
        form.sale_price = "doce mil".to_string();
        assert!(SalesController::parse_form(form).is_err());
    }

    #[test]
    fn test_parse_form_rejects_negative_price() {
        let mut form = sample_form();
        form.sale_price = "-100".to_string();
        assert!(SalesController::parse_form(form).is_err());
    }

    #[test]
    fn test_parse_form_rejects_bad_date() {
        let mut form = sample_form();
        form.sold_at = "01/03/2024".to_string();
        assert!(SalesController::parse_form(form).is_err());
    }

    #[test]
    fn test_parse_form_requires_buyer_name_without_id() {
        let mut form = sample_form();
        form.first_name = "".to_string();
        assert!(SalesController::parse_form(form).is_err());
    }

    #[test]
    fn test_parse_optional_date() {
        assert_eq!(
            SalesController::parse_optional_date(None, "start_date").unwrap(),
            None
        );
        assert_eq!(
            SalesController::parse_optional_date(Some(""), "start_date").unwrap(),
            None
        );
        assert_eq!(
            SalesController::parse_optional_date(Some("2024-03-01"), "start_date").unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 1)
        );
        assert!(SalesController::parse_optional_date(Some("bad"), "start_date").is_err());
    }
}
