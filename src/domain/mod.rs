// Domain layer: survey tables, cohorts and rankings plus the ports the pipeline talks through.

pub mod model;
pub mod ports;
