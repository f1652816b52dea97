//! huc: browse issues, pull requests and releases of the repository behind a git checkout.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;
pub mod services;


pub use domain::{AppError, ProjectInfo};
pub use services::TargetResolver;
