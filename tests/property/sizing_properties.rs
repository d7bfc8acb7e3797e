// Property-based tests for the sizing resolver
// Tier choice is monotonic in the smaller dp dimension

use proptest::prelude::*;
use work_hours_widget::models::sizing::WidgetDimensions;
use work_hours_widget::services::sizing::SizingResolver;

proptest! {
    /// Property: growing the smaller side never lowers the tier
    #[test]
    fn prop_tier_is_monotonic(
        side in 1u32..2000,
        growth in 0u32..2000,
        density in prop::sample::select(vec![0.75f32, 1.0, 1.5, 2.0, 2.625, 3.0, 4.0]),
    ) {
        let resolver = SizingResolver::default();
        let smaller = resolver.resolve_tier(WidgetDimensions::new(side, side, density));
        let larger = resolver.resolve_tier(WidgetDimensions::new(side + growth, side + growth, density));
        prop_assert!(smaller <= larger);
    }

    /// Property: only the smaller side matters
    #[test]
    fn prop_larger_side_is_irrelevant(side in 1u32..2000, extra in 0u32..2000) {
        let resolver = SizingResolver::default();
        let square = resolver.resolve_tier(WidgetDimensions::new(side, side, 2.0));
        prop_assert_eq!(resolver.resolve_tier(WidgetDimensions::new(side + extra, side, 2.0)), square);
        prop_assert_eq!(resolver.resolve_tier(WidgetDimensions::new(side, side + extra, 2.0)), square);
    }

    /// Property: same input, same profile
    #[test]
    fn prop_resolution_is_idempotent(w in 0u32..3000, h in 0u32..3000, density in 0.5f32..4.0) {
        let resolver = SizingResolver::default();
        let dims = WidgetDimensions::new(w, h, density);
        prop_assert_eq!(resolver.resolve(dims), resolver.resolve(dims));
    }
}
