use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceType {
    Graphic,
    Video,
    Both,
}

impl ServiceType {
    pub fn includes_video(self) -> bool {
        matches!(self, ServiceType::Video | ServiceType::Both)
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ServiceType::Graphic => "graphic design",
            ServiceType::Video => "video editing",
            ServiceType::Both => "graphic design + video editing",
        };
        f.write_str(name)
    }
}

/// Closed integer range `min..=max`. Always satisfies `min <= max`, also when
/// deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCountRange")]
pub struct CountRange {
    min: u32,
    max: u32,
}

#[derive(Deserialize)]
struct RawCountRange {
    min: u32,
    max: u32,
}

impl TryFrom<RawCountRange> for CountRange {
    type Error = String;

    fn try_from(raw: RawCountRange) -> std::result::Result<Self, Self::Error> {
        CountRange::new(raw.min, raw.max).ok_or_else(|| {
            format!(
                "invalid count range: min {} is greater than max {}",
                raw.min, raw.max
            )
        })
    }
}

impl CountRange {
    /// Returns `None` when `min > max`.
    pub fn new(min: u32, max: u32) -> Option<Self> {
        (min <= max).then_some(Self { min, max })
    }

    /// Volume billed for a band: its upper bound.
    pub fn billable(&self) -> u32 {
        self.max
    }

    pub fn is_empty(&self) -> bool {
        self.max == 0
    }
}

impl fmt::Display for CountRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.min == self.max {
            write!(f, "{}", self.max)
        } else {
            write!(f, "{}-{}", self.min, self.max)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DurationBand {
    Short,
    Medium,
    Long,
}

impl DurationBand {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "short" => Some(DurationBand::Short),
            "medium" => Some(DurationBand::Medium),
            "long" => Some(DurationBand::Long),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DurationBand::Short => "short-form",
            DurationBand::Medium => "medium-length",
            DurationBand::Long => "long-form",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityTier {
    #[default]
    Standard,
    Premium,
    Cinematic,
}

impl QualityTier {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "standard" => Some(QualityTier::Standard),
            "premium" => Some(QualityTier::Premium),
            "cinematic" => Some(QualityTier::Cinematic),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            QualityTier::Standard => "standard",
            QualityTier::Premium => "premium",
            QualityTier::Cinematic => "cinematic",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GraphicOrder {
    pub social_media: u32,
    pub banners: u32,
    pub brochures: u32,
    pub illustrations: u32,
    pub packaging: u32,
    pub bilingual: bool,
}

impl GraphicOrder {
    pub fn total_items(&self) -> u32 {
        self.social_media
            .saturating_add(self.banners)
            .saturating_add(self.brochures)
            .saturating_add(self.illustrations)
            .saturating_add(self.packaging)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum VideoVolume {
    Tiered {
        #[serde(default)]
        basic: u32,
        #[serde(default)]
        mid: u32,
        #[serde(default)]
        advanced: u32,
    },
    Banded {
        #[serde(default)]
        videos: Option<CountRange>,
        #[serde(default)]
        duration: Option<DurationBand>,
        #[serde(default)]
        quality: QualityTier,
    },
}

impl Default for VideoVolume {
    fn default() -> Self {
        VideoVolume::Tiered {
            basic: 0,
            mid: 0,
            advanced: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VideoOrder {
    pub volume: VideoVolume,
    pub captions: bool,
    pub stock_footage: bool,
    pub scripting: bool,
}

impl VideoOrder {
    pub fn tiered(basic: u32, mid: u32, advanced: u32) -> Self {
        Self {
            volume: VideoVolume::Tiered {
                basic,
                mid,
                advanced,
            },
            ..Self::default()
        }
    }

    pub fn banded(videos: CountRange, duration: DurationBand, quality: QualityTier) -> Self {
        Self {
            volume: VideoVolume::Banded {
                videos: Some(videos),
                duration: Some(duration),
                quality,
            },
            ..Self::default()
        }
    }

    /// Number of videos the add-ons are scaled by.
    pub fn video_count(&self) -> u32 {
        match self.volume {
            VideoVolume::Tiered {
                basic,
                mid,
                advanced,
            } => basic.saturating_add(mid).saturating_add(advanced),
            VideoVolume::Banded { videos, .. } => videos.map(|v| v.billable()).unwrap_or(0),
        }
    }

    /// A banded order needs a count band and a duration band before it can be priced.
    pub fn is_complete(&self) -> bool {
        match self.volume {
            VideoVolume::Tiered { .. } => true,
            VideoVolume::Banded {
                videos, duration, ..
            } => videos.is_some() && duration.is_some(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuoteRequest {
    pub service_type: Option<ServiceType>,
    pub graphic: GraphicOrder,
    pub video: VideoOrder,
}

impl QuoteRequest {
    pub fn graphic(order: GraphicOrder) -> Self {
        Self {
            service_type: Some(ServiceType::Graphic),
            graphic: order,
            ..Self::default()
        }
    }

    pub fn video(order: VideoOrder) -> Self {
        Self {
            service_type: Some(ServiceType::Video),
            video: order,
            ..Self::default()
        }
    }

    pub fn both(graphic: GraphicOrder, video: VideoOrder) -> Self {
        Self {
            service_type: Some(ServiceType::Both),
            graphic,
            video,
        }
    }

    /// The selected service type, or `None` when the request cannot be priced yet.
    pub fn priceable_service(&self) -> Option<ServiceType> {
        let service = self.service_type?;
        if service.includes_video() && !self.video.is_complete() {
            return None;
        }
        Some(service)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Component {
    Base,
    VolumeAdjustment,
    ComplexityAdjustment,
    BilingualSurcharge,
    AddOn,
    BundleDiscount,
}

impl Component {
    pub fn as_str(self) -> &'static str {
        match self {
            Component::Base => "base",
            Component::VolumeAdjustment => "volume_adjustment",
            Component::ComplexityAdjustment => "complexity_adjustment",
            Component::BilingualSurcharge => "bilingual_surcharge",
            Component::AddOn => "add_on",
            Component::BundleDiscount => "bundle_discount",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakdownLine {
    pub component: Component,
    /// Which branch produced the line; `None` for bundle-level lines.
    pub service: Option<ServiceType>,
    pub label: String,
    pub amount: i64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResult {
    pub monthly_price: i64,
    pub breakdown: Vec<BreakdownLine>,
    pub includes: Vec<String>,
    pub estimated_hours: f64,
}

impl QuoteResult {
    /// True for the zero-valued result returned for incomplete requests.
    pub fn is_empty(&self) -> bool {
        self.monthly_price == 0 && self.breakdown.is_empty() && self.includes.is_empty()
    }

    pub fn breakdown_total(&self) -> i64 {
        self.breakdown.iter().map(|line| line.amount).sum()
    }

    pub fn component_total(&self, component: Component) -> i64 {
        self.breakdown
            .iter()
            .filter(|line| line.component == component)
            .map(|line| line.amount)
            .sum()
    }
}
