// Domain layer: query models and ports (interfaces). No HTTP or terminal code here.

pub mod model;
pub mod ports;
