// Property-based tests for state transitions
// Random starting states must keep the invariants of every transition

use proptest::prelude::*;
use work_hours_widget::models::action::{TransparencyChange, WidgetAction};
use work_hours_widget::models::page::{Page, PagingPolicy};
use work_hours_widget::models::settings::WidgetState;
use work_hours_widget::models::theme::{CycleDirection, Theme};
use work_hours_widget::services::state_machine::PageStateMachine;

const NOW: i64 = 1_710_000_000_000;

fn any_page() -> impl Strategy<Value = Page> {
    prop::sample::select(Page::ALL.to_vec())
}

fn any_theme() -> impl Strategy<Value = Theme> {
    prop::sample::select(Theme::ALL.to_vec())
}

fn any_policy() -> impl Strategy<Value = PagingPolicy> {
    prop_oneof![Just(PagingPolicy::Wrap), Just(PagingPolicy::Clamp)]
}

fn with_transparency(transparency: i64) -> WidgetState {
    WidgetState {
        transparency,
        ..WidgetState::default()
    }
}

proptest! {
    /// Property: step changes stay in bounds and move by exactly one step unless clamped
    #[test]
    fn prop_transparency_step_is_bounded(start in 0..=100i64, up in any::<bool>()) {
        let machine = PageStateMachine::default();
        let change = if up { TransparencyChange::Increase } else { TransparencyChange::Decrease };
        let next = machine.apply(&with_transparency(start), WidgetAction::ChangeTransparency(change), NOW);

        prop_assert!((0..=100).contains(&next.transparency));
        let expected = if up { (start + 10).min(100) } else { (start - 10).max(0) };
        prop_assert_eq!(next.transparency, expected);
    }

    /// Property: any absolute or stored value ends up within 0..=100
    #[test]
    fn prop_transparency_always_clamped(start in any::<i64>(), target in any::<i64>()) {
        let machine = PageStateMachine::default();
        for change in [
            TransparencyChange::Increase,
            TransparencyChange::Decrease,
            TransparencyChange::Set(target),
        ] {
            let next = machine.apply(&with_transparency(start), WidgetAction::ChangeTransparency(change), NOW);
            prop_assert!((0..=100).contains(&next.transparency));
        }
    }

    /// Property: with wrap-around, Next then Previous returns to the same page
    #[test]
    fn prop_wrap_next_previous_round_trip(page in any_page()) {
        let machine = PageStateMachine::new(PagingPolicy::Wrap, 10);
        let start = WidgetState { current_page: page, ..WidgetState::default() };

        let there = machine.apply(&start, WidgetAction::Next, NOW);
        let back = machine.apply(&there, WidgetAction::Previous, NOW);
        prop_assert_eq!(back.current_page, page);

        let there = machine.apply(&start, WidgetAction::Previous, NOW);
        let back = machine.apply(&there, WidgetAction::Next, NOW);
        prop_assert_eq!(back.current_page, page);
    }

    /// Property: N presses of Next visit every page and come back
    #[test]
    fn prop_wrap_full_cycle(page in any_page()) {
        let machine = PageStateMachine::default();
        let mut state = WidgetState { current_page: page, ..WidgetState::default() };
        for _ in 0..Page::ALL.len() {
            state = machine.apply(&state, WidgetAction::Next, NOW);
        }
        prop_assert_eq!(state.current_page, page);
    }

    /// Property: clamping is idempotent at both ends
    #[test]
    fn prop_clamp_is_idempotent(presses in 1usize..10) {
        let machine = PageStateMachine::new(PagingPolicy::Clamp, 10);
        let mut first = WidgetState::default();
        let mut last = WidgetState { current_page: Page::Salary, ..WidgetState::default() };
        for _ in 0..presses {
            first = machine.apply(&first, WidgetAction::Previous, NOW);
            last = machine.apply(&last, WidgetAction::Next, NOW);
        }
        prop_assert_eq!(first.current_page, Page::Main);
        prop_assert_eq!(last.current_page, Page::Salary);
    }

    /// Property: paging is a no-op in settings mode, whatever the page or policy
    #[test]
    fn prop_settings_mode_freezes_paging(page in any_page(), policy in any_policy(), next in any::<bool>()) {
        let machine = PageStateMachine::new(policy, 10);
        let start = WidgetState { current_page: page, ..WidgetState::default() };
        let inside = machine.apply(&start, WidgetAction::EnterSettings, NOW);

        let action = if next { WidgetAction::Next } else { WidgetAction::Previous };
        prop_assert_eq!(machine.apply(&inside, action, NOW), inside.clone());

        let outside = machine.apply(&inside, WidgetAction::ExitSettings, NOW);
        prop_assert_eq!(outside.current_page, page);
    }

    /// Property: cycling the theme N times returns to the starting theme
    #[test]
    fn prop_theme_cycle_returns(theme in any_theme(), forward in any::<bool>()) {
        let machine = PageStateMachine::default();
        let direction = if forward { CycleDirection::Next } else { CycleDirection::Previous };
        let start = WidgetState { theme_id: theme.id().to_string(), ..WidgetState::default() };

        let mut state = start.clone();
        for _ in 0..Theme::ALL.len() {
            state = machine.apply(&state, WidgetAction::ChangeTheme(direction), NOW);
        }
        prop_assert_eq!(state.theme_id, start.theme_id);
    }
}
