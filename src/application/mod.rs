pub mod data;

mod application;
mod environment;
mod runtime_config;

pub use application::{Application, ApplicationError};
pub use environment::{Environment, EnvironmentCaptureError};
pub use runtime_config::RuntimeConfig;
