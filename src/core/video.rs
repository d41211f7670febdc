use crate::config::pricing::{AddOnRate, VideoPricing};
use crate::core::ledger::{format_hours, QuoteLedger};
use crate::domain::model::{Component, QualityTier, ServiceType, VideoOrder, VideoVolume};

/// Editing hours the order needs before add-ons.
///
/// Banded orders are billed at the upper bound of their count band.
pub fn required_hours(order: &VideoOrder, pricing: &VideoPricing) -> f64 {
    match order.volume {
        VideoVolume::Tiered {
            basic,
            mid,
            advanced,
        } => {
            f64::from(basic) * pricing.weights.basic
                + f64::from(mid) * pricing.weights.mid
                + f64::from(advanced) * pricing.weights.advanced
        }
        VideoVolume::Banded {
            duration, quality, ..
        } => {
            let per_video = duration
                .map(|band| pricing.duration_hours.hours(band))
                .unwrap_or(0.0);
            let multiplier = pricing.quality.rate(quality).hour_multiplier;
            f64::from(order.video_count()) * per_video * multiplier
        }
    }
}

pub fn price_video(order: &VideoOrder, pricing: &VideoPricing) -> QuoteLedger {
    let mut ledger = QuoteLedger::new(Some(ServiceType::Video));
    let required = required_hours(order, pricing);
    let videos = order.video_count();

    ledger.charge(Component::Base, "Video editing retainer", pricing.base_price);
    ledger.include("Dedicated video editor");
    ledger.include(format!(
        "Up to {} editing hours per month",
        format_hours(pricing.base_hours)
    ));
    ledger.include(deliverables_summary(order));

    if required > pricing.base_hours {
        let extra = required - pricing.base_hours;
        ledger.charge(
            Component::VolumeAdjustment,
            format!("{} extra editing hours", format_hours(extra)),
            extra * pricing.overage_rate,
        );
        ledger.include(format!(
            "{} additional editing hours for {} requested hours of work",
            format_hours(extra),
            format_hours(required)
        ));
    }

    if let VideoVolume::Banded { quality, .. } = order.volume {
        let rate = pricing.quality.rate(quality);
        if quality != QualityTier::Standard && videos > 0 {
            ledger.charge(
                Component::ComplexityAdjustment,
                format!("{} quality finishing", quality.label()),
                f64::from(videos) * rate.per_video,
            );
            ledger.include(format!(
                "{} color grading and sound finishing on every video",
                capitalize(quality.label())
            ));
        }
    }

    let mut add_on_hours = 0.0;
    for (enabled, rate, label, description) in [
        (
            order.captions,
            &pricing.add_ons.captions,
            "Captions",
            format!("Captions and subtitles on {} videos", videos),
        ),
        (
            order.stock_footage,
            &pricing.add_ons.stock_footage,
            "Stock footage and music licensing",
            "Licensed stock footage and music".to_string(),
        ),
        (
            order.scripting,
            &pricing.add_ons.scripting,
            "Scripting support",
            format!("Scripting and pre-production support for {} videos", videos),
        ),
    ] {
        if enabled {
            ledger.charge(Component::AddOn, label, add_on_price(rate, videos));
            ledger.include(description);
            add_on_hours += f64::from(videos) * rate.hours_per_video;
        }
    }

    ledger.add_hours(required.max(pricing.base_hours));
    ledger.add_hours(add_on_hours);
    tracing::debug!(
        required_hours = required,
        add_on_hours,
        price = ledger.running_total(),
        "Priced video order"
    );
    ledger
}

pub fn add_on_price(rate: &AddOnRate, videos: u32) -> f64 {
    rate.flat + f64::from(videos) * rate.per_video
}

fn deliverables_summary(order: &VideoOrder) -> String {
    match order.volume {
        VideoVolume::Tiered {
            basic,
            mid,
            advanced,
        } => {
            let parts: Vec<String> = [
                (basic, "basic edits"),
                (mid, "mid-level edits"),
                (advanced, "advanced edits"),
            ]
            .iter()
            .filter(|(count, _)| *count > 0)
            .map(|(count, name)| format!("{} {}", count, name))
            .collect();

            if parts.is_empty() {
                "Video requests handled as they come in".to_string()
            } else {
                format!("Monthly deliverables: {}", parts.join(", "))
            }
        }
        VideoVolume::Banded {
            videos,
            duration,
            quality,
        } => match videos {
            Some(range) if !range.is_empty() => {
                let length = duration.map(|band| band.label()).unwrap_or("assorted");
                format!(
                    "Monthly deliverables: {} {} videos in {} quality",
                    range,
                    length,
                    quality.label()
                )
            }
            _ => "Video requests handled as they come in".to_string(),
        },
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
