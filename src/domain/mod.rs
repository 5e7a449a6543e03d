// Domain layer: page models and ports. No rendering or I/O here.

pub mod model;
pub mod ports;
