// Domain layer: tuple model and the ports a host and its components talk through.

pub mod model;
pub mod ports;
