//! Turns raw calculator form answers into a [`QuoteRequest`].
//!
//! Form fields arrive as loosely typed JSON: numbers, numeric strings, blanks,
//! checkbox values. Every count is coerced to a non-negative integer (anything
//! unusable becomes 0) and every flag to a bool, so the engine only ever sees
//! well-formed requests.

use crate::config::pricing::PricingTable;
use crate::domain::model::{
    DurationBand, GraphicOrder, QualityTier, QuoteRequest, ServiceType, VideoOrder, VideoVolume,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

pub const SERVICE_TYPE: &str = "serviceType";
pub const SOCIAL_MEDIA: &str = "socialMedia";
pub const BANNERS: &str = "banners";
pub const BROCHURES: &str = "brochures";
pub const ILLUSTRATIONS: &str = "illustrations";
pub const PACKAGING: &str = "packaging";
pub const BILINGUAL: &str = "bilingual";
pub const BASIC_EDITS: &str = "basicEdits";
pub const MID_EDITS: &str = "midEdits";
pub const ADVANCED_EDITS: &str = "advancedEdits";
pub const VIDEO_COUNT_BAND: &str = "videoCountBand";
pub const DURATION_BAND: &str = "durationBand";
pub const QUALITY_TIER: &str = "qualityTier";
pub const CAPTIONS: &str = "captions";
pub const STOCK_FOOTAGE: &str = "stockFootage";
pub const SCRIPTING: &str = "scripting";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormAnswers {
    pub data: HashMap<String, Value>,
}

impl FormAnswers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.data.insert(key.to_string(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    /// A count field; missing, blank, negative or non-numeric values read as 0.
    pub fn count(&self, key: &str) -> u32 {
        self.get(key).map(coerce_count).unwrap_or(0)
    }

    pub fn flag(&self, key: &str) -> bool {
        self.get(key).map(coerce_flag).unwrap_or(false)
    }

    /// A trimmed, non-blank string field.
    pub fn text(&self, key: &str) -> Option<&str> {
        match self.get(key)? {
            Value::String(s) if !s.trim().is_empty() => Some(s.trim()),
            _ => None,
        }
    }

    pub fn service_type(&self) -> Option<ServiceType> {
        match self.text(SERVICE_TYPE)?.to_ascii_lowercase().as_str() {
            "graphic" => Some(ServiceType::Graphic),
            "video" => Some(ServiceType::Video),
            "both" => Some(ServiceType::Both),
            _ => None,
        }
    }
}

pub fn coerce_count(value: &Value) -> u32 {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    match number {
        Some(n) if n.is_finite() && n > 0.0 => {
            if n >= u32::MAX as f64 {
                u32::MAX
            } else {
                n.trunc() as u32
            }
        }
        _ => 0,
    }
}

pub fn coerce_flag(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|n| n != 0.0).unwrap_or(false),
        Value::String(s) => matches!(
            s.trim().to_ascii_lowercase().as_str(),
            "true" | "yes" | "on" | "1"
        ),
        _ => false,
    }
}

/// Builds the request the engine prices from a set of form answers.
///
/// The banded video variant is used whenever a count band was picked; an
/// unknown band id leaves the banded order without a count, so it is not priceable.
pub fn normalize(answers: &FormAnswers, pricing: &PricingTable) -> QuoteRequest {
    let graphic = GraphicOrder {
        social_media: answers.count(SOCIAL_MEDIA),
        banners: answers.count(BANNERS),
        brochures: answers.count(BROCHURES),
        illustrations: answers.count(ILLUSTRATIONS),
        packaging: answers.count(PACKAGING),
        bilingual: answers.flag(BILINGUAL),
    };

    let volume = match answers.text(VIDEO_COUNT_BAND) {
        Some(band_id) => {
            let videos = pricing.find_count_band(band_id).and_then(|b| b.range());
            if videos.is_none() {
                tracing::warn!("Unknown video count band '{}', request left incomplete", band_id);
            }
            VideoVolume::Banded {
                videos,
                duration: answers.text(DURATION_BAND).and_then(DurationBand::parse),
                quality: answers
                    .text(QUALITY_TIER)
                    .and_then(QualityTier::parse)
                    .unwrap_or_default(),
            }
        }
        None => VideoVolume::Tiered {
            basic: answers.count(BASIC_EDITS),
            mid: answers.count(MID_EDITS),
            advanced: answers.count(ADVANCED_EDITS),
        },
    };

    let video = VideoOrder {
        volume,
        captions: answers.flag(CAPTIONS),
        stock_footage: answers.flag(STOCK_FOOTAGE),
        scripting: answers.flag(SCRIPTING),
    };

    QuoteRequest {
        service_type: answers.service_type(),
        graphic,
        video,
    }
}
