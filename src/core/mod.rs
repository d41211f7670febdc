pub mod bundle;
pub mod engine;
pub mod graphic;
pub mod ledger;
pub mod video;

pub use crate::config::pricing::PricingTable;
pub use crate::domain::model::{QuoteRequest, QuoteResult};
pub use crate::domain::ports::PricingSource;
