// Domain layer: request/result models, form intake and the pricing port.

pub mod intake;
pub mod model;
pub mod ports;
