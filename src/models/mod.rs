//! Modelos de dominio
//!
//! Un archivo por entidad. Los structs mapean 1:1 a las tablas del schema
//! y concentran la aritmética de dominio (márgenes, totales acumulados).

pub mod appointment;
pub mod customer;
pub mod sales_stats;
pub mod service_package;
pub mod vehicle;

pub use appointment::ServiceAppointment;
pub use customer::Customer;
pub use sales_stats::SalesStats;
pub use service_package::ServicePackage;
pub use vehicle::Vehicle;
