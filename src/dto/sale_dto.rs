//! DTOs de venta de vehículos
//!
//! El formulario llega con todos los campos como texto; el parsing a tipos
//! fuertes ocurre en el controller para que los errores terminen como flash
//! y no como rechazo del extractor.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

/// Formulario de venta (POST /sell_car)
#[derive(Debug, Deserialize)]
pub struct SellCarForm {
    #[serde(default)]
    pub vehicle_id: String,

    /// Comprador por id explícito; evita duplicar clientes por nombre
    pub customer_id: Option<String>,

    #[serde(default)]
    pub first_name: String,

    #[serde(default)]
    pub last_name: String,

    #[serde(default)]
    pub sale_price: String,

    /// Fecha de venta, formato YYYY-MM-DD
    #[serde(default)]
    pub sold_at: String,
}

/// Comprador resuelto del formulario
#[derive(Debug, Clone, PartialEq)]
pub enum BuyerRef {
    /// Id de cliente provisto por el caller
    Existing(i32),
    /// Buscar por nombre o crear dentro de la misma transacción
    ByName { first_name: String, last_name: String },
}

/// Comando de venta ya validado
#[derive(Debug, Clone)]
pub struct SaleCommand {
    pub vehicle_id: i32,
    pub buyer: BuyerRef,
    pub sale_price: Decimal,
    pub sold_at: NaiveDate,
}

/// Resultado de una venta registrada, usado para el mensaje flash
#[derive(Debug, Clone)]
pub struct SaleReceipt {
    pub vehicle_id: i32,
    pub vehicle_name: String,
    pub buyer_name: String,
    pub sale_price: Decimal,
    pub profit: Decimal,
}
