// Sizing model
// Size tiers and their fixed typography/dimension profiles

use serde::{Deserialize, Serialize};

/// Physical size of one placed widget as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WidgetDimensions {
    pub width_px: u32,
    pub height_px: u32,
    pub density: f32,
}

impl WidgetDimensions {
    pub fn new(width_px: u32, height_px: u32, density: f32) -> Self {
        Self {
            width_px,
            height_px,
            density,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SizeTier {
    Small,
    Medium,
    Large,
    ExtraLarge,
}

impl SizeTier {
    pub fn label(self) -> &'static str {
        match self {
            SizeTier::Small => "small",
            SizeTier::Medium => "medium",
            SizeTier::Large => "large",
            SizeTier::ExtraLarge => "extra-large",
        }
    }
}

/// Ascending upper bounds (exclusive, in dp) of the Small, Medium and Large tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SizingThresholds {
    pub small: i64,
    pub medium: i64,
    pub large: i64,
}

impl Default for SizingThresholds {
    fn default() -> Self {
        Self {
            small: 100,
            medium: 150,
            large: 200,
        }
    }
}

impl SizingThresholds {
    pub fn is_ascending(&self) -> bool {
        self.small < self.medium && self.medium < self.large
    }
}

/// Text sizes are in sp, dimensions in dp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizingProfile {
    pub tier: SizeTier,
    pub title_text_size: f32,
    pub subtitle_text_size: f32,
    pub body_text_size: f32,
    pub button_text_size: f32,
    pub settings_button_text_size: f32,
    pub gauge_main_text_size: f32,
    pub gauge_sub_text_size: f32,
    pub calendar_text_size: f32,
    pub button_height: u32,
    pub nav_button_size: u32,
    pub settings_button_size: u32,
    pub gauge_size: u32,
}

impl SizingProfile {
    pub fn for_tier(tier: SizeTier) -> Self {
        match tier {
            SizeTier::Small => Self {
                tier,
                title_text_size: 12.0,
                subtitle_text_size: 11.0,
                body_text_size: 10.0,
                button_text_size: 11.0,
                settings_button_text_size: 9.0,
                gauge_main_text_size: 12.0,
                gauge_sub_text_size: 9.0,
                calendar_text_size: 9.0,
                button_height: 32,
                nav_button_size: 28,
                settings_button_size: 28,
                gauge_size: 120,
            },
            SizeTier::Medium => Self {
                tier,
                title_text_size: 14.0,
                subtitle_text_size: 13.0,
                body_text_size: 12.0,
                button_text_size: 13.0,
                settings_button_text_size: 10.0,
                gauge_main_text_size: 14.0,
                gauge_sub_text_size: 10.0,
                calendar_text_size: 10.0,
                button_height: 36,
                nav_button_size: 32,
                settings_button_size: 32,
                gauge_size: 140,
            },
            SizeTier::Large => Self {
                tier,
                title_text_size: 16.0,
                subtitle_text_size: 15.0,
                body_text_size: 14.0,
                button_text_size: 15.0,
                settings_button_text_size: 12.0,
                gauge_main_text_size: 16.0,
                gauge_sub_text_size: 12.0,
                calendar_text_size: 12.0,
                button_height: 40,
                nav_button_size: 36,
                settings_button_size: 36,
                gauge_size: 160,
            },
            SizeTier::ExtraLarge => Self {
                tier,
                title_text_size: 18.0,
                subtitle_text_size: 17.0,
                body_text_size: 16.0,
                button_text_size: 17.0,
                settings_button_text_size: 14.0,
                gauge_main_text_size: 18.0,
                gauge_sub_text_size: 14.0,
                calendar_text_size: 14.0,
                button_height: 44,
                nav_button_size: 40,
                settings_button_size: 40,
                gauge_size: 180,
            },
        }
    }
}
