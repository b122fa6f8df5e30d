// Domain layer: report model and ports (config provider, probe).

pub mod model;
pub mod ports;
