// Domain layer: form model, wire types and the gateway port. No HTTP or runtime types here.

pub mod model;
pub mod ports;
