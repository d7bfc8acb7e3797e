// Sizing resolver tests
// Tier selection uses the smaller side in dp

use test_case::test_case;
use work_hours_widget::models::sizing::{SizeTier, SizingProfile, WidgetDimensions};
use work_hours_widget::services::sizing::SizingResolver;

use crate::fixtures::sizes;

#[test_case(160, 160, 2.0, SizeTier::Small ; "80dp square")]
#[test_case(360, 360, 2.0, SizeTier::Large ; "180dp square")]
#[test_case(200, 200, 1.0, SizeTier::ExtraLarge ; "200dp is extra large")]
#[test_case(600, 180, 1.5, SizeTier::Medium ; "short and wide")]
#[test_case(180, 600, 1.5, SizeTier::Medium ; "tall and narrow")]
#[test_case(99, 1000, 1.0, SizeTier::Small ; "one side just below small")]
#[test_case(450, 450, 3.0, SizeTier::Large ; "150dp on a dense screen")]
#[test_case(120, 120, 0.0, SizeTier::Medium ; "zero density treated as one")]
fn test_resolve_tier(width: u32, height: u32, density: f32, expected: SizeTier) {
    let resolver = SizingResolver::default();
    assert_eq!(
        resolver.resolve_tier(WidgetDimensions::new(width, height, density)),
        expected
    );
}

#[test_case(SizeTier::Small, 12.0, 32, 120)]
#[test_case(SizeTier::Medium, 14.0, 36, 140)]
#[test_case(SizeTier::Large, 16.0, 40, 160)]
#[test_case(SizeTier::ExtraLarge, 18.0, 44, 180)]
fn test_profile_table(tier: SizeTier, title: f32, button_height: u32, gauge: u32) {
    let profile = SizingProfile::for_tier(tier);
    assert_eq!(profile.tier, tier);
    assert_eq!(profile.title_text_size, title);
    assert_eq!(profile.button_height, button_height);
    assert_eq!(profile.gauge_size, gauge);
}

#[test]
fn test_fixture_sizes() {
    let resolver = SizingResolver::default();
    assert_eq!(resolver.resolve(sizes::small()).tier, SizeTier::Small);
    assert_eq!(resolver.resolve(sizes::large()).tier, SizeTier::Large);
    assert_eq!(resolver.resolve(sizes::wide()).tier, SizeTier::Medium);
}

#[test]
fn test_resolution_is_deterministic() {
    let resolver = SizingResolver::default();
    let dims = WidgetDimensions::new(420, 310, 2.625);
    assert_eq!(resolver.resolve(dims), resolver.resolve(dims));
}
