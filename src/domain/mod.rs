// Domain layer: order/partner models and the repository port.

pub mod model;
pub mod ports;
