pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::report::QuoteReport;
pub use config::pricing::PricingTable;
pub use config::toml_config::PricingConfig;
pub use core::engine::{compute_quote, QuoteEngine};
pub use domain::intake::{normalize, FormAnswers};
pub use domain::model::{QuoteRequest, QuoteResult, ServiceType};
pub use utils::error::{QuoteError, Result};
