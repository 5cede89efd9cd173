// Domain layer: the content record and the ports the site builder writes through.

pub mod model;
pub mod ports;
pub mod sample;
