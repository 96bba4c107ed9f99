// Domain layer: report models and ports. Only std/serde plus the core branch marker.

pub mod model;
pub mod ports;
