use crate::domain::model::{BreakdownLine, Component, QuoteResult, ServiceType};

/// Rounds a currency amount to whole units, half away from zero.
pub fn round_currency(amount: f64) -> i64 {
    if amount.is_finite() {
        amount.round() as i64
    } else {
        tracing::warn!("Non-finite amount {} rounded to 0", amount);
        0
    }
}

/// Formats an hour count without trailing zeros ("20", "7.5", "0.25").
pub fn format_hours(hours: f64) -> String {
    let text = format!("{:.2}", hours);
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Accumulates breakdown lines, deliverables and hours while a branch is priced.
///
/// Amounts are rounded as each line is recorded, so the finished price is
/// always the exact sum of the breakdown.
#[derive(Debug, Clone, Default)]
pub struct QuoteLedger {
    service: Option<ServiceType>,
    breakdown: Vec<BreakdownLine>,
    includes: Vec<String>,
    hours: f64,
}

impl QuoteLedger {
    pub fn new(service: Option<ServiceType>) -> Self {
        Self {
            service,
            ..Self::default()
        }
    }

    /// Records a charge and returns the rounded amount. Zero-valued lines are
    /// dropped except for the base line.
    pub fn charge(&mut self, component: Component, label: impl Into<String>, amount: f64) -> i64 {
        let amount = round_currency(amount);
        if amount != 0 || component == Component::Base {
            self.breakdown.push(BreakdownLine {
                component,
                service: self.service,
                label: label.into(),
                amount,
            });
        }
        amount
    }

    pub fn include(&mut self, description: impl Into<String>) {
        self.includes.push(description.into());
    }

    pub fn add_hours(&mut self, hours: f64) {
        if hours.is_finite() && hours > 0.0 {
            self.hours += hours;
        }
    }

    pub fn running_total(&self) -> i64 {
        self.breakdown.iter().map(|line| line.amount).sum()
    }

    pub fn hours(&self) -> f64 {
        self.hours
    }

    /// Appends another branch's lines after this one's, keeping evaluation order.
    pub fn absorb(&mut self, other: QuoteLedger) {
        self.breakdown.extend(other.breakdown);
        self.includes.extend(other.includes);
        self.hours += other.hours;
    }

    pub fn finish(self) -> QuoteResult {
        QuoteResult {
            monthly_price: self.running_total(),
            breakdown: self.breakdown,
            includes: self.includes,
            estimated_hours: self.hours,
        }
    }
}
