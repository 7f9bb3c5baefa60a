//! Product feature catalog.
//!
//! The five cards shown on the dashboard. Only the IoT card has live
//! behavior (the irrigation panel); the rest are presentation placeholders
//! pointing at parts of the product this demo does not implement.

/// Identifier for a feature card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureId {
    /// Voice analysis in Kannada, Hindi, or English.
    Voice,
    /// Crop disease diagnosis from photos.
    Image,
    /// Market prices and trends.
    Market,
    /// Government schemes and subsidies.
    Subsidies,
    /// The IoT irrigation panel. The only live card.
    Iot,
}

/// A feature card's display data.
#[derive(Debug, Clone, Copy)]
pub struct Feature {
    /// Card identifier.
    pub id: FeatureId,
    /// Card title.
    pub title: &'static str,
    /// One-line description.
    pub description: &'static str,
}

/// All feature cards, in display order.
pub const FEATURES: &[Feature] = &[
    Feature {
        id: FeatureId::Voice,
        title: "Voice Analysis",
        description: "Speak in Kannada, Hindi, or English to get instant farming advice",
    },
    Feature {
        id: FeatureId::Image,
        title: "Crop Diagnosis",
        description: "Upload photos of your crops for AI-powered disease detection",
    },
    Feature {
        id: FeatureId::Market,
        title: "Market Prices",
        description: "Real-time crop prices and market trends",
    },
    Feature {
        id: FeatureId::Subsidies,
        title: "Government Schemes",
        description: "Find and apply for farming subsidies and schemes",
    },
    Feature {
        id: FeatureId::Iot,
        title: "IoT System",
        description: "Control irrigation and monitor water level in real time",
    },
];

impl FeatureId {
    /// Whether this feature has live behavior in the dashboard.
    pub fn is_live(&self) -> bool {
        matches!(self, FeatureId::Iot)
    }

    /// Placeholder text shown for cards without live behavior.
    pub fn placeholder(&self) -> &'static str {
        match self {
            FeatureId::Voice => "Voice input is not wired up in this demo.",
            FeatureId::Image => "Crop photo upload is not wired up in this demo.",
            FeatureId::Market => "Marketplace data is not wired up in this demo.",
            FeatureId::Subsidies => "Subsidy listings are not wired up in this demo.",
            FeatureId::Iot => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_five_features_in_order() {
        assert_eq!(FEATURES.len(), 5);
        assert_eq!(FEATURES[0].id, FeatureId::Voice);
        assert_eq!(FEATURES[4].id, FeatureId::Iot);
    }

    #[test]
    fn test_only_iot_is_live() {
        let live: Vec<_> = FEATURES.iter().filter(|f| f.id.is_live()).collect();
        assert_eq!(live.len(), 1);
        assert_eq!(live[0].title, "IoT System");
    }

    #[test]
    fn test_placeholders_exist_for_stub_cards() {
        for feature in FEATURES {
            if !feature.id.is_live() {
                assert!(!feature.id.placeholder().is_empty());
            }
        }
    }
}
