use crate::config::pricing::GraphicPricing;
use crate::core::ledger::{format_hours, QuoteLedger};
use crate::domain::model::{Component, GraphicOrder, ServiceType};

/// Hours of design work the order needs.
pub fn required_hours(order: &GraphicOrder, pricing: &GraphicPricing) -> f64 {
    let weights = &pricing.weights;
    f64::from(order.social_media) * weights.social_media
        + f64::from(order.banners) * weights.banner
        + f64::from(order.brochures) * weights.brochure
        + f64::from(order.illustrations) * weights.illustration
        + f64::from(order.packaging) * weights.packaging
}

pub fn price_graphic(order: &GraphicOrder, pricing: &GraphicPricing) -> QuoteLedger {
    let mut ledger = QuoteLedger::new(Some(ServiceType::Graphic));
    let required = required_hours(order, pricing);

    ledger.charge(Component::Base, "Graphic design retainer", pricing.base_price);
    ledger.include("Dedicated graphic designer");
    ledger.include(format!(
        "Up to {} design hours per month",
        format_hours(pricing.base_hours)
    ));
    ledger.include(deliverables_summary(order));

    if required > pricing.base_hours {
        let extra = required - pricing.base_hours;
        ledger.charge(
            Component::VolumeAdjustment,
            format!("{} extra design hours", format_hours(extra)),
            extra * pricing.overage_rate,
        );
        ledger.include(format!(
            "{} additional design hours for {} requested hours of work",
            format_hours(extra),
            format_hours(required)
        ));
    }

    let print_items = order.brochures.saturating_add(order.packaging);
    if print_items > 0 {
        ledger.include(format!("Print-ready files for {} print pieces", print_items));
    }

    // 雙語加價套用在目前的累計金額上，不只是底價
    if order.bilingual {
        let running = ledger.running_total() as f64;
        ledger.charge(
            Component::BilingualSurcharge,
            format!(
                "Bilingual surcharge ({}%)",
                format_hours(pricing.bilingual_rate * 100.0)
            ),
            running * pricing.bilingual_rate,
        );
        ledger.include(match order.total_items() {
            0 => "Bilingual versions of every design".to_string(),
            items => format!("Bilingual versions of all {} designs", items),
        });
    }

    ledger.add_hours(required.max(pricing.base_hours));
    tracing::debug!(
        required_hours = required,
        price = ledger.running_total(),
        "Priced graphic order"
    );
    ledger
}

fn deliverables_summary(order: &GraphicOrder) -> String {
    let parts: Vec<String> = [
        (order.social_media, "social media designs"),
        (order.banners, "banners"),
        (order.brochures, "brochures"),
        (order.illustrations, "illustrations"),
        (order.packaging, "packaging designs"),
    ]
    .iter()
    .filter(|(count, _)| *count > 0)
    .map(|(count, name)| format!("{} {}", count, name))
    .collect();

    if parts.is_empty() {
        "Design requests handled as they come in".to_string()
    } else {
        format!("Monthly deliverables: {}", parts.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(social_media: u32, bilingual: bool) -> GraphicOrder {
        GraphicOrder {
            social_media,
            bilingual,
            ..GraphicOrder::default()
        }
    }

    #[test]
    fn test_required_hours_uses_weights() {
        let pricing = GraphicPricing::default();
        let order = GraphicOrder {
            social_media: 4,
            banners: 2,
            brochures: 1,
            illustrations: 1,
            packaging: 1,
            bilingual: false,
        };
        assert_eq!(required_hours(&order, &pricing), 4.0 + 3.0 + 5.0 + 3.0 + 5.0);
    }

    #[test]
    fn test_exactly_base_hours_has_no_overage() {
        let pricing = GraphicPricing::default();
        let ledger = price_graphic(&order(20, false), &pricing);
        let result = ledger.finish();

        assert_eq!(result.monthly_price, 1200);
        assert_eq!(result.component_total(Component::VolumeAdjustment), 0);
        assert_eq!(result.estimated_hours, 20.0);
    }

    #[test]
    fn test_overage_is_billed_hourly() {
        let pricing = GraphicPricing::default();
        let result = price_graphic(&order(25, false), &pricing).finish();

        assert_eq!(result.monthly_price, 1200 + 5 * 60);
        assert_eq!(result.component_total(Component::VolumeAdjustment), 300);
        assert_eq!(result.estimated_hours, 25.0);
        assert!(result
            .includes
            .contains(&"5 additional design hours for 25 requested hours of work".to_string()));
    }

    #[test]
    fn test_bilingual_applies_to_running_total() {
        let pricing = GraphicPricing::default();
        let result = price_graphic(&order(25, true), &pricing).finish();

        // (1200 + 300) * 0.15
        assert_eq!(result.component_total(Component::BilingualSurcharge), 225);
        assert_eq!(result.monthly_price, 1725);
        assert_eq!(result.breakdown.last().unwrap().label, "Bilingual surcharge (15%)");
    }

    #[test]
    fn test_bilingual_without_items_has_no_count() {
        let pricing = GraphicPricing::default();
        let result = price_graphic(&order(0, true), &pricing).finish();

        assert_eq!(result.component_total(Component::BilingualSurcharge), 180);
        assert_eq!(
            result.includes.last().unwrap(),
            "Bilingual versions of every design"
        );
    }

    #[test]
    fn test_print_items_add_description() {
        let pricing = GraphicPricing::default();
        let order = GraphicOrder {
            brochures: 1,
            packaging: 2,
            ..GraphicOrder::default()
        };
        let result = price_graphic(&order, &pricing).finish();
        assert!(result
            .includes
            .contains(&"Print-ready files for 3 print pieces".to_string()));
        assert_eq!(
            result.includes[2],
            "Monthly deliverables: 1 brochures, 2 packaging designs"
        );
    }
}
