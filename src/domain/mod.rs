// Domain layer: record types, aggregations and ports. No I/O in here.

pub mod model;
pub mod ports;

pub mod services;
