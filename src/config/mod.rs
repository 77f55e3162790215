pub mod verify_config;

pub use verify_config::*;
