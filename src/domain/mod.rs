pub mod coercion;
pub mod formatting;
pub mod money;
pub mod payment;
pub mod ports;
pub mod validation;
