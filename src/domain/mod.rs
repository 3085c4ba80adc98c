// Domain layer: ISS data model and the API port the commands depend on.

pub mod model;
pub mod ports;
