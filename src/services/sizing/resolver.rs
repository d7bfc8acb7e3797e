use crate::models::sizing::{SizeTier, SizingProfile, SizingThresholds, WidgetDimensions};

/// Maps widget pixel dimensions to one of the fixed sizing profiles.
#[derive(Debug, Clone, Copy)]
pub struct SizingResolver {
    thresholds: SizingThresholds,
}

impl Default for SizingResolver {
    fn default() -> Self {
        Self::new(SizingThresholds::default())
    }
}

impl SizingResolver {
    /// Non-ascending thresholds are replaced by the defaults.
    pub fn new(thresholds: SizingThresholds) -> Self {
        if thresholds.is_ascending() {
            Self { thresholds }
        } else {
            log::warn!(
                "Sizing thresholds {:?} are not ascending, using defaults",
                thresholds
            );
            Self {
                thresholds: SizingThresholds::default(),
            }
        }
    }

    pub fn thresholds(&self) -> SizingThresholds {
        self.thresholds
    }

    /// Pixels to whole device-independent units. A missing or nonsensical
    /// density is treated as 1.0.
    pub fn to_dp(px: u32, density: f32) -> i64 {
        let density = if density.is_finite() && density > 0.0 {
            density
        } else {
            log::warn!("Invalid display density {}, assuming 1.0", density);
            1.0
        };
        (f64::from(px) / f64::from(density)) as i64
    }

    pub fn resolve_tier(&self, dims: WidgetDimensions) -> SizeTier {
        let width_dp = Self::to_dp(dims.width_px, dims.density);
        let height_dp = Self::to_dp(dims.height_px, dims.density);
        let min_dp = width_dp.min(height_dp);

        let tier = if min_dp < self.thresholds.small {
            SizeTier::Small
        } else if min_dp < self.thresholds.medium {
            SizeTier::Medium
        } else if min_dp < self.thresholds.large {
            SizeTier::Large
        } else {
            SizeTier::ExtraLarge
        };

        log::debug!(
            "Widget {}x{}dp resolved to {} tier",
            width_dp,
            height_dp,
            tier.label()
        );
        tier
    }

    pub fn resolve(&self, dims: WidgetDimensions) -> SizingProfile {
        SizingProfile::for_tier(self.resolve_tier(dims))
    }
}
