//! The pricing-constants table every branch of the engine reads from.
//!
//! `PricingTable::default()` is the canonical rule set; a TOML file can
//! override any part of it (see [`crate::config::toml_config`]).

use crate::domain::model::{CountRange, DurationBand, QualityTier};
use crate::utils::error::{QuoteError, Result};
use crate::utils::validation::{
    validate_at_least, validate_non_empty_string, validate_non_negative, validate_open_range,
    validate_range, validate_unique_ids, Validate,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingTable {
    pub currency: String,
    pub graphic: GraphicPricing,
    pub video: VideoPricing,
    pub bundle: BundlePricing,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphicPricing {
    pub base_price: f64,
    pub base_hours: f64,
    pub overage_rate: f64,
    pub bilingual_rate: f64,
    pub weights: GraphicWeights,
}

/// Hours of work per deliverable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphicWeights {
    pub social_media: f64,
    pub banner: f64,
    pub brochure: f64,
    pub illustration: f64,
    pub packaging: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoPricing {
    pub base_price: f64,
    pub base_hours: f64,
    pub overage_rate: f64,
    pub weights: VideoWeights,
    pub duration_hours: DurationHours,
    pub quality: QualityPricing,
    pub count_bands: Vec<CountBand>,
    pub add_ons: AddOnPricing,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoWeights {
    pub basic: f64,
    pub mid: f64,
    pub advanced: f64,
}

/// Editing hours per video for each duration band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DurationHours {
    pub short: f64,
    pub medium: f64,
    pub long: f64,
}

impl DurationHours {
    pub fn hours(&self, band: DurationBand) -> f64 {
        match band {
            DurationBand::Short => self.short,
            DurationBand::Medium => self.medium,
            DurationBand::Long => self.long,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QualityPricing {
    pub standard: QualityRate,
    pub premium: QualityRate,
    pub cinematic: QualityRate,
}

impl QualityPricing {
    pub fn rate(&self, tier: QualityTier) -> &QualityRate {
        match tier {
            QualityTier::Standard => &self.standard,
            QualityTier::Premium => &self.premium,
            QualityTier::Cinematic => &self.cinematic,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityRate {
    pub hour_multiplier: f64,
    pub per_video: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountBand {
    pub id: String,
    pub label: String,
    pub min: u32,
    pub max: u32,
}

impl CountBand {
    pub fn range(&self) -> Option<CountRange> {
        CountRange::new(self.min, self.max)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddOnPricing {
    pub captions: AddOnRate,
    pub stock_footage: AddOnRate,
    pub scripting: AddOnRate,
}

/// An add-on costs `flat + per_video * videos` and adds `hours_per_video * videos`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AddOnRate {
    pub per_video: f64,
    pub flat: f64,
    pub hours_per_video: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BundlePricing {
    pub discount_rate: f64,
}

impl Default for PricingTable {
    fn default() -> Self {
        Self {
            currency: "USD".to_string(),
            graphic: GraphicPricing::default(),
            video: VideoPricing::default(),
            bundle: BundlePricing::default(),
        }
    }
}

impl Default for GraphicPricing {
    fn default() -> Self {
        Self {
            base_price: 1200.0,
            base_hours: 20.0,
            overage_rate: 60.0,
            bilingual_rate: 0.15,
            weights: GraphicWeights::default(),
        }
    }
}

impl Default for GraphicWeights {
    fn default() -> Self {
        Self {
            social_media: 1.0,
            banner: 1.5,
            brochure: 5.0,
            illustration: 3.0,
            packaging: 5.0,
        }
    }
}

impl Default for VideoPricing {
    fn default() -> Self {
        Self {
            base_price: 1500.0,
            base_hours: 20.0,
            overage_rate: 75.0,
            weights: VideoWeights::default(),
            duration_hours: DurationHours::default(),
            quality: QualityPricing::default(),
            count_bands: vec![
                CountBand {
                    id: "1-4".to_string(),
                    label: "1 to 4 videos".to_string(),
                    min: 1,
                    max: 4,
                },
                CountBand {
                    id: "5-10".to_string(),
                    label: "5 to 10 videos".to_string(),
                    min: 5,
                    max: 10,
                },
                CountBand {
                    id: "11-20".to_string(),
                    label: "11 to 20 videos".to_string(),
                    min: 11,
                    max: 20,
                },
                CountBand {
                    id: "21-30".to_string(),
                    label: "21 to 30 videos".to_string(),
                    min: 21,
                    max: 30,
                },
            ],
            add_ons: AddOnPricing::default(),
        }
    }
}

impl Default for VideoWeights {
    fn default() -> Self {
        Self {
            basic: 2.0,
            mid: 4.0,
            advanced: 8.0,
        }
    }
}

impl Default for DurationHours {
    fn default() -> Self {
        Self {
            short: 1.5,
            medium: 3.0,
            long: 6.0,
        }
    }
}

impl Default for QualityPricing {
    fn default() -> Self {
        Self {
            standard: QualityRate {
                hour_multiplier: 1.0,
                per_video: 0.0,
            },
            premium: QualityRate {
                hour_multiplier: 1.25,
                per_video: 20.0,
            },
            cinematic: QualityRate {
                hour_multiplier: 1.5,
                per_video: 50.0,
            },
        }
    }
}

impl Default for AddOnPricing {
    fn default() -> Self {
        Self {
            captions: AddOnRate {
                per_video: 10.0,
                flat: 0.0,
                hours_per_video: 0.25,
            },
            stock_footage: AddOnRate {
                per_video: 0.0,
                flat: 150.0,
                hours_per_video: 0.0,
            },
            scripting: AddOnRate {
                per_video: 30.0,
                flat: 0.0,
                hours_per_video: 0.5,
            },
        }
    }
}

impl Default for BundlePricing {
    fn default() -> Self {
        Self { discount_rate: 0.10 }
    }
}

impl PricingTable {
    pub fn find_count_band(&self, id: &str) -> Option<&CountBand> {
        let id = id.trim();
        self.video.count_bands.iter().find(|band| band.id == id)
    }
}

impl Validate for PricingTable {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("currency", &self.currency)?;

        let graphic = &self.graphic;
        validate_non_negative("graphic.base_price", graphic.base_price)?;
        validate_non_negative("graphic.base_hours", graphic.base_hours)?;
        validate_non_negative("graphic.overage_rate", graphic.overage_rate)?;
        validate_non_negative("graphic.bilingual_rate", graphic.bilingual_rate)?;
        validate_range("graphic.bilingual_rate", graphic.bilingual_rate, 0.0, 1.0)?;
        validate_non_negative("graphic.weights.social_media", graphic.weights.social_media)?;
        validate_non_negative("graphic.weights.banner", graphic.weights.banner)?;
        validate_non_negative("graphic.weights.brochure", graphic.weights.brochure)?;
        validate_non_negative("graphic.weights.illustration", graphic.weights.illustration)?;
        validate_non_negative("graphic.weights.packaging", graphic.weights.packaging)?;

        let video = &self.video;
        validate_non_negative("video.base_price", video.base_price)?;
        validate_non_negative("video.base_hours", video.base_hours)?;
        validate_non_negative("video.overage_rate", video.overage_rate)?;
        validate_non_negative("video.weights.basic", video.weights.basic)?;
        validate_non_negative("video.weights.mid", video.weights.mid)?;
        validate_non_negative("video.weights.advanced", video.weights.advanced)?;
        validate_non_negative("video.duration_hours.short", video.duration_hours.short)?;
        validate_non_negative("video.duration_hours.medium", video.duration_hours.medium)?;
        validate_non_negative("video.duration_hours.long", video.duration_hours.long)?;

        for (name, rate) in [
            ("standard", &video.quality.standard),
            ("premium", &video.quality.premium),
            ("cinematic", &video.quality.cinematic),
        ] {
            validate_at_least(
                &format!("video.quality.{}.hour_multiplier", name),
                rate.hour_multiplier,
                1.0,
            )?;
            validate_non_negative(&format!("video.quality.{}.per_video", name), rate.per_video)?;
        }

        for (name, rate) in [
            ("captions", &video.add_ons.captions),
            ("stock_footage", &video.add_ons.stock_footage),
            ("scripting", &video.add_ons.scripting),
        ] {
            validate_non_negative(&format!("video.add_ons.{}.per_video", name), rate.per_video)?;
            validate_non_negative(&format!("video.add_ons.{}.flat", name), rate.flat)?;
            validate_non_negative(
                &format!("video.add_ons.{}.hours_per_video", name),
                rate.hours_per_video,
            )?;
        }

        validate_unique_ids(
            "video.count_bands",
            video.count_bands.iter().map(|band| band.id.as_str()),
        )?;
        for band in &video.count_bands {
            if band.range().is_none() {
                return Err(QuoteError::InvalidConfigValueError {
                    field: format!("video.count_bands.{}", band.id),
                    value: format!("{}..{}", band.min, band.max),
                    reason: "min must not exceed max".to_string(),
                });
            }
        }

        // 折扣必須大於零，組合價才會嚴格低於單買總和
        validate_open_range("bundle.discount_rate", self.bundle.discount_rate, 0.0, 1.0)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_is_valid() {
        assert!(PricingTable::default().validate().is_ok());
    }

    #[test]
    fn test_zero_discount_is_rejected() {
        let mut table = PricingTable::default();
        table.bundle.discount_rate = 0.0;
        assert!(table.validate().is_err());
    }

    #[test]
    fn test_inverted_count_band_is_rejected() {
        let mut table = PricingTable::default();
        table.video.count_bands.push(CountBand {
            id: "broken".to_string(),
            label: "broken".to_string(),
            min: 9,
            max: 3,
        });
        assert!(table.validate().is_err());
    }

    #[test]
    fn test_overflowing_weight_is_rejected() {
        let mut table = PricingTable::default();
        table.graphic.weights.brochure = 1e308;
        assert!(table.validate().is_err());

        let mut table = PricingTable::default();
        table.video.add_ons.scripting.per_video = f64::INFINITY;
        assert!(table.validate().is_err());
    }

    #[test]
    fn test_quality_multiplier_below_one_is_rejected() {
        let mut table = PricingTable::default();
        table.video.quality.premium.hour_multiplier = 0.5;
        assert!(table.validate().is_err());
    }

    #[test]
    fn test_find_count_band_trims_id() {
        let table = PricingTable::default();
        let band = table.find_count_band(" 11-20 ").unwrap();
        assert_eq!(band.range(), CountRange::new(11, 20));
        assert!(table.find_count_band("11–20 videos").is_none());
    }
}
