use crate::config::pricing::PricingTable;

/// Anything that can hand the engine a pricing table.
pub trait PricingSource: Send + Sync {
    fn pricing(&self) -> &PricingTable;
}

impl PricingSource for PricingTable {
    fn pricing(&self) -> &PricingTable {
        self
    }
}
