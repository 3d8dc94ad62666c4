use serde::Serialize;

/// Benchmark a combo score is compared against in the gauge view.
pub const REFERENCE_COMBO: f32 = 0.75;

pub const SOLID_THRESHOLD: f32 = 0.6;
pub const STRONG_THRESHOLD: f32 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FitBand {
    Weak,
    Solid,
    Strong,
}

impl FitBand {
    pub fn classify(combo: f32) -> FitBand {
        if combo >= STRONG_THRESHOLD {
            FitBand::Strong
        } else if combo >= SOLID_THRESHOLD {
            FitBand::Solid
        } else {
            FitBand::Weak
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FitBand::Weak => "weak",
            FitBand::Solid => "solid",
            FitBand::Strong => "strong",
        }
    }

    pub fn statement(self) -> &'static str {
        match self {
            FitBand::Weak => "Below the competitive range; unlikely pairing.",
            FitBand::Solid => "Competitive pairing with room to improve.",
            FitBand::Strong => "Top-tier pairing for the projected season.",
        }
    }
}

pub fn delta_vs_reference(combo: f32) -> f32 {
    combo - REFERENCE_COMBO
}
