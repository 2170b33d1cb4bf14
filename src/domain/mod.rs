// Domain layer: value records and ports. Nothing here depends on tokio or the CLI.

pub mod model;
pub mod ports;
