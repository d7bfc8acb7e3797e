// Action identifier tests
// Host tap identifiers parse into the closed action set

use test_case::test_case;
use work_hours_widget::models::action::{ActionParseError, TransparencyChange, WidgetAction};
use work_hours_widget::models::theme::{BackgroundColor, CycleDirection};

#[test_case("previous", WidgetAction::Previous)]
#[test_case("next", WidgetAction::Next)]
#[test_case("settings", WidgetAction::ToggleSettings)]
#[test_case("enter_settings", WidgetAction::EnterSettings)]
#[test_case("exit_settings", WidgetAction::ExitSettings)]
#[test_case("transparency_up", WidgetAction::ChangeTransparency(TransparencyChange::Increase))]
#[test_case("transparency_down", WidgetAction::ChangeTransparency(TransparencyChange::Decrease))]
#[test_case("transparency:40", WidgetAction::ChangeTransparency(TransparencyChange::Set(40)))]
#[test_case("transparency:250", WidgetAction::ChangeTransparency(TransparencyChange::Set(250)))]
#[test_case("theme_next", WidgetAction::ChangeTheme(CycleDirection::Next))]
#[test_case("theme_previous", WidgetAction::ChangeTheme(CycleDirection::Previous))]
#[test_case("color:white", WidgetAction::ChangeBackgroundColor(BackgroundColor::White))]
#[test_case("color:blue", WidgetAction::ChangeBackgroundColor(BackgroundColor::Blue))]
#[test_case("clock_in_out", WidgetAction::ClockInOut)]
fn test_parse_identifier(raw: &str, expected: WidgetAction) {
    assert_eq!(raw.parse::<WidgetAction>(), Ok(expected));
    assert_eq!(expected.to_string().parse::<WidgetAction>(), Ok(expected));
}

#[test_case("" ; "empty")]
#[test_case("NEXT" ; "wrong case")]
#[test_case("ACTION_TEST" ; "test action")]
fn test_unknown_identifier(raw: &str) {
    assert!(matches!(
        raw.parse::<WidgetAction>(),
        Err(ActionParseError::Unknown(_))
    ));
}

#[test]
fn test_bad_arguments() {
    assert!(matches!(
        "transparency:".parse::<WidgetAction>(),
        Err(ActionParseError::InvalidTransparency(_))
    ));
    assert!(matches!(
        "color:teal".parse::<WidgetAction>(),
        Err(ActionParseError::UnknownColor(_))
    ));
}
