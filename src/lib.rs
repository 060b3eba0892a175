//! City description and photo generation, served over MCP.

pub mod config;
pub mod constants;
pub mod error;
pub mod formatters;
pub mod generator;
pub mod landmarks;
pub mod models;
pub mod relevance;
pub mod service;

pub use config::Config;
pub use generator::CityInfoGenerator;
pub use models::{CityInfo, ImageResult, ImageSource};
pub use service::CityInfoService;
