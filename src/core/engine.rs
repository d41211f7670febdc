use crate::config::pricing::PricingTable;
use crate::core::bundle::price_bundle;
use crate::core::graphic::price_graphic;
use crate::core::video::price_video;
use crate::domain::intake::{normalize, FormAnswers};
use crate::domain::model::{QuoteRequest, QuoteResult, ServiceType};
use crate::domain::ports::PricingSource;

/// Prices a request against a pricing table.
///
/// Never fails: a request with no service selected, or whose selected service
/// is missing a required field, yields the zero-valued [`QuoteResult`].
pub fn compute_quote(request: &QuoteRequest, pricing: &PricingTable) -> QuoteResult {
    let Some(service) = request.priceable_service() else {
        tracing::debug!("Incomplete quote request, returning empty quote");
        return QuoteResult::default();
    };

    let ledger = match service {
        ServiceType::Graphic => price_graphic(&request.graphic, &pricing.graphic),
        ServiceType::Video => price_video(&request.video, &pricing.video),
        ServiceType::Both => price_bundle(&request.graphic, &request.video, pricing),
    };

    let result = ledger.finish();
    tracing::debug!(
        service = %service,
        monthly_price = result.monthly_price,
        estimated_hours = result.estimated_hours,
        "Computed quote"
    );
    result
}

pub struct QuoteEngine<P: PricingSource> {
    source: P,
}

impl<P: PricingSource> QuoteEngine<P> {
    pub fn new(source: P) -> Self {
        Self { source }
    }

    pub fn pricing(&self) -> &PricingTable {
        self.source.pricing()
    }

    pub fn quote(&self, request: &QuoteRequest) -> QuoteResult {
        compute_quote(request, self.source.pricing())
    }

    pub fn quote_answers(&self, answers: &FormAnswers) -> QuoteResult {
        let request = normalize(answers, self.source.pricing());
        self.quote(&request)
    }
}

impl Default for QuoteEngine<PricingTable> {
    fn default() -> Self {
        Self::new(PricingTable::default())
    }
}
