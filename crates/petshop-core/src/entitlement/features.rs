//! Optional features gated by plan.

use serde::Serialize;

/// Features a plan can switch on.
///
/// The application passes feature names around as open-ended strings, so
/// parsing never fails: an unknown name simply maps to no feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    Photos,
    Whatsapp,
    Reports,
    Advanced,
}

impl Feature {
    pub const ALL: [Feature; 4] = [
        Feature::Photos,
        Feature::Whatsapp,
        Feature::Reports,
        Feature::Advanced,
    ];

    pub fn parse(name: &str) -> Option<Feature> {
        match name {
            "photos" => Some(Feature::Photos),
            "whatsapp" | "whatsapp_integration" => Some(Feature::Whatsapp),
            "reports" => Some(Feature::Reports),
            "advanced" | "advanced_features" => Some(Feature::Advanced),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Feature::Photos => "photos",
            Feature::Whatsapp => "whatsapp",
            Feature::Reports => "reports",
            Feature::Advanced => "advanced",
        }
    }
}

/// Feature switches of one plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlanFeatures {
    pub photos: bool,
    pub whatsapp: bool,
    pub reports: bool,
    pub advanced: bool,
}

impl PlanFeatures {
    pub fn is_enabled(&self, feature: Feature) -> bool {
        match feature {
            Feature::Photos => self.photos,
            Feature::Whatsapp => self.whatsapp,
            Feature::Reports => self.reports,
            Feature::Advanced => self.advanced,
        }
    }
}
