// Domain layer: models and the ports (interfaces) the engine and handlers talk through.

pub mod model;
pub mod ports;
