//! Servicio de registro de ventas
//!
//! Toda la venta ocurre dentro de una única transacción: vehículo,
//! comprador, totales del cliente y fila de sales_stats se actualizan
//! juntos o no se actualiza nada.

use crate::dto::sale_dto::{BuyerRef, SaleCommand, SaleReceipt};
use crate::models::{Customer, SalesStats, Vehicle};
use crate::utils::errors::{not_found_error, AppError};
use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::{PgConnection, PgPool};
use tracing::info;

pub struct SaleService {
    pool: PgPool,
}

impl SaleService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn record_sale(&self, command: SaleCommand) -> Result<SaleReceipt, AppError> {
        let mut tx = self.pool.begin().await?;

        // El lock de fila serializa ventas concurrentes del mismo vehículo
        let vehicle = sqlx::query_as::<_, Vehicle>(
            "SELECT * FROM vehicles WHERE vehicle_id = $1 FOR UPDATE",
        )
        .bind(command.vehicle_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| not_found_error("Vehicle", &command.vehicle_id.to_string()))?;

        let mut buyer = Self::resolve_buyer(&mut *tx, &command.buyer).await?;

        let profit = vehicle.sale_profit(command.sale_price);
        let now = Utc::now();

        sqlx::query(
            r#"
            UPDATE vehicles
            SET sale_price = $2, sold_at = $3, profit = $4, owner_id = $5, updated_at = $6
            WHERE vehicle_id = $1
            "#,
        )
        .bind(vehicle.vehicle_id)
        .bind(command.sale_price)
        .bind(command.sold_at)
        .bind(profit)
        .bind(buyer.customer_id)
        .bind(now)
        .execute(&mut *tx)
        .await?;

        buyer.apply_sale(profit);
        sqlx::query(
            r#"
            UPDATE customers
            SET total_spent = $2, total_profit = $3, updated_at = $4
            WHERE customer_id = $1
            "#,
        )
        .bind(buyer.customer_id)
        .bind(buyer.total_spent)
        .bind(buyer.total_profit)
        .bind(now)
        .execute(&mut *tx)
        .await?;

        Self::upsert_stats(&mut *tx, vehicle.vehicle_id, profit, command.sold_at).await?;

        tx.commit().await?;

        info!(
            "💰 Vehículo {} vendido a {} por {} (margen {})",
            vehicle.vehicle_id,
            buyer.full_name(),
            command.sale_price,
            profit
        );

        Ok(SaleReceipt {
            vehicle_id: vehicle.vehicle_id,
            vehicle_name: vehicle.display_name(),
            buyer_name: buyer.full_name(),
            sale_price: command.sale_price,
            profit,
        })
    }

    /// Resuelve el comprador dentro de la transacción: por id explícito o
    /// por nombre, creando el cliente (id = max + 1) si no existe.
    async fn resolve_buyer(
        conn: &mut PgConnection,
        buyer: &BuyerRef,
    ) -> Result<Customer, AppError> {
        match buyer {
            BuyerRef::Existing(id) => {
                let customer = sqlx::query_as::<_, Customer>(
                    "SELECT * FROM customers WHERE customer_id = $1 FOR UPDATE",
                )
                .bind(id)
                .fetch_optional(&mut *conn)
                .await?
                .ok_or_else(|| not_found_error("Customer", &id.to_string()))?;

                Ok(customer)
            }
            BuyerRef::ByName {
                first_name,
                last_name,
            } => {
                let existing = sqlx::query_as::<_, Customer>(
                    r#"
                    SELECT * FROM customers
                    WHERE first_name = $1 AND last_name = $2
                    ORDER BY customer_id
                    LIMIT 1
                    FOR UPDATE
                    "#,
                )
                .bind(first_name)
                .bind(last_name)
                .fetch_optional(&mut *conn)
                .await?;

                if let Some(customer) = existing {
                    return Ok(customer);
                }

                let customer = sqlx::query_as::<_, Customer>(
                    r#"
                    INSERT INTO customers (
                        customer_id, first_name, last_name,
                        total_spent, total_profit, created_at, updated_at
                    )
                    VALUES (
                        (SELECT COALESCE(MAX(customer_id), 0) + 1 FROM customers),
                        $1, $2, 0, 0, $3, $3
                    )
                    RETURNING *
                    "#,
                )
                .bind(first_name)
                .bind(last_name)
                .bind(Utc::now())
                .fetch_one(&mut *conn)
                .await?;

                info!(
                    "👤 Cliente {} creado durante la venta: {} {}",
                    customer.customer_id, first_name, last_name
                );

                Ok(customer)
            }
        }
    }

    /// Una fila acumulada por vehículo: se crea con cars_sold = 1 o se
    /// avanza con la venta nueva.
    async fn upsert_stats(
        conn: &mut PgConnection,
        vehicle_id: i32,
        profit: Decimal,
        sold_at: NaiveDate,
    ) -> Result<(), AppError> {
        let existing = sqlx::query_as::<_, SalesStats>(
            "SELECT * FROM sales_stats WHERE vehicle_stat_id = $1 FOR UPDATE",
        )
        .bind(vehicle_id)
        .fetch_optional(&mut *conn)
        .await?;

        match existing {
            Some(mut stats) => {
                stats.apply_sale(profit, sold_at);
                sqlx::query(
                    r#"
                    UPDATE sales_stats
                    SET cars_sold = $2, total_profit = $3, end_date = $4
                    WHERE stats_id = $1
                    "#,
                )
                .bind(stats.stats_id)
                .bind(stats.cars_sold)
                .bind(stats.total_profit)
                .bind(stats.end_date)
                .execute(&mut *conn)
                .await?;
            }
            None => {
                sqlx::query(
                    r#"
                    INSERT INTO sales_stats (
                        stats_id, vehicle_stat_id, start_date, end_date,
                        cars_sold, total_profit, created_at
                    )
                    VALUES (
                        (SELECT COALESCE(MAX(stats_id), 0) + 1 FROM sales_stats),
                        $1, $2, $2, 1, $3, $4
                    )
                    "#,
                )
                .bind(vehicle_id)
                .bind(sold_at)
                .bind(profit)
                .bind(Utc::now())
                .execute(&mut *conn)
                .await?;
            }
        }

        Ok(())
    }
}
