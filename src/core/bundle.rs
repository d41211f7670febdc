use crate::config::pricing::PricingTable;
use crate::core::graphic::price_graphic;
use crate::core::ledger::{format_hours, round_currency, QuoteLedger};
use crate::core::video::price_video;
use crate::domain::model::{Component, GraphicOrder, VideoOrder};

/// Prices both branches independently, then takes a flat percentage off the
/// combined subtotal. A non-zero subtotal always loses at least one currency
/// unit, so a bundle is strictly cheaper than its branches bought separately.
pub fn price_bundle(graphic: &GraphicOrder, video: &VideoOrder, pricing: &PricingTable) -> QuoteLedger {
    let mut ledger = QuoteLedger::new(None);
    ledger.absorb(price_graphic(graphic, &pricing.graphic));
    ledger.absorb(price_video(video, &pricing.video));

    let subtotal = ledger.running_total();
    let mut discount = round_currency(subtotal as f64 * pricing.bundle.discount_rate);
    if subtotal > 0 {
        discount = discount.max(1);
    }
    let percent = format_hours(pricing.bundle.discount_rate * 100.0);
    ledger.charge(
        Component::BundleDiscount,
        format!("Bundle discount ({}%)", percent),
        -(discount as f64),
    );
    ledger.include(format!(
        "{}% bundle discount for combining design and video",
        percent
    ));

    tracing::debug!(subtotal, discount, price = ledger.running_total(), "Applied bundle discount");
    ledger
}
