//! Utilidades monetarias
//!
//! Cálculo de ganancias y formato de importes para facturas y mensajes.

use rust_decimal::Decimal;

/// Ganancia de una venta: precio de venta menos precio de compra
pub fn calculate_profit(sale_price: Decimal, purchase_price: Decimal) -> Decimal {
    sale_price - purchase_price
}

/// Formatear un importe como moneda: `$12,500.00`
pub fn format_currency(value: Decimal) -> String {
    let rounded = value.round_dp(2);
    let negative = rounded.is_sign_negative();
    let abs = rounded.abs().to_string();

    let (int_part, frac_part) = match abs.split_once('.') {
        Some((i, f)) => (i.to_string(), format!("{:0<2}", f)),
        None => (abs, "00".to_string()),
    };

    let mut grouped = String::new();
    for (i, ch) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let int_grouped: String = grouped.chars().rev().collect();

    if negative {
        format!("-${}.{}", int_grouped, frac_part)
    } else {
        format!("${}.{}", int_grouped, frac_part)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(value: &str) -> Decimal {
        value.parse().unwrap()
    }

    #[test]
    fn test_calculate_profit() {
        assert_eq!(dec("12500"), calculate_profit(dec("12500"), dec("0")));
        assert_eq!(dec("2500"), calculate_profit(dec("12500"), dec("10000")));
        // vender por debajo del costo produce ganancia negativa
        assert_eq!(dec("-500"), calculate_profit(dec("9500"), dec("10000")));
    }

    #[test]
    fn test_format_currency() {
        assert_eq!("$12,500.00", format_currency(dec("12500")));
        assert_eq!("$2,500.00", format_currency(dec("2500")));
        assert_eq!("$0.00", format_currency(dec("0")));
        assert_eq!("$999.99", format_currency(dec("999.99")));
        assert_eq!("$1,234,567.89", format_currency(dec("1234567.89")));
        assert_eq!("$0.50", format_currency(dec("0.5")));
        assert_eq!("-$500.00", format_currency(dec("-500")));
    }
}
