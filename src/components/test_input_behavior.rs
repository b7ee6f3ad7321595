use gpui::SharedString;

use crate::style::{Appearance, FieldLayout, InputKind};
use crate::theme::Theme;

use super::input_style::LayoutStyle;
use super::{ErrorSource, InputAnatomy, InputProps, InteractionState, PureInput};

fn anatomy(props: InputProps) -> InputAnatomy {
    PureInput::new(props).anatomy(&Theme::default())
}

fn anatomy_with_kind(props: InputProps, current: &InputKind) -> InputAnatomy {
    PureInput::new(props)
        .current_kind(current.clone())
        .anatomy(&Theme::default())
}

#[test]
fn stale_literal_error_hides_the_message_but_keeps_the_markers() {
    let cases = [("abc", "ab"), ("", "x"), ("new@mail", "old@mail")];
    for (value, last_error_value) in cases {
        let result = anatomy(
            InputProps::new("email", "Email")
                .value(value)
                .error("Invalid email")
                .last_error_value(last_error_value),
        );
        assert!(result.error.message.is_none(), "value {value:?}");
        assert!(result.tooltip.message.is_none());
        assert!(!result.tooltip.has_chrome);
        assert!(result.field.data_error);
        assert!(result.field.aria_invalid);
    }
}

#[test]
fn matching_marker_keeps_the_message() {
    let result = anatomy(
        InputProps::new("email", "Email")
            .value("ab")
            .error("Invalid email")
            .last_error_value("ab"),
    );
    assert_eq!(
        result.tooltip.message,
        Some(SharedString::from("Invalid email"))
    );
    assert!(result.tooltip.has_chrome);
}

#[test]
fn error_function_is_evaluated_against_the_current_value() {
    let too_short = |value: &str| {
        (value.chars().count() < 4).then(|| SharedString::from(format!("{value} is too short")))
    };

    let short = anatomy(
        InputProps::new("nick", "Nickname")
            .value("ab")
            .error_fn(too_short),
    );
    assert_eq!(
        short.error.message,
        Some(SharedString::from("ab is too short"))
    );
    assert!(short.tooltip.has_chrome);

    let long_enough = anatomy(
        InputProps::new("nick", "Nickname")
            .value("abcd")
            .error_fn(too_short),
    );
    assert!(long_enough.error.message.is_none());
    assert!(!long_enough.tooltip.has_chrome);
    assert!(long_enough.field.aria_invalid);
    assert!(long_enough.field.data_error);
}

#[test]
fn error_function_marks_the_field_invalid_even_when_it_returns_nothing() {
    let result = anatomy(
        InputProps::new("n", "N")
            .value("abcd")
            .error_fn(|_: &str| None),
    );
    assert!(result.field.aria_invalid);
    assert!(result.field.data_error);
    assert!(!result.tooltip.has_chrome);
    assert!(result.tooltip.message.is_none());
    assert!(result.style.field.ring.is_none());
}

#[test]
fn empty_derived_message_shows_no_chrome() {
    let result = anatomy(
        InputProps::new("nick", "Nickname")
            .value("x")
            .error(ErrorSource::derive(|_| Some(SharedString::default()))),
    );
    assert!(!result.tooltip.has_chrome);
    assert!(!result.error.is_live());
    assert!(result.field.data_error);
}

#[test]
fn double_toggle_restores_the_starting_kind() {
    for start in [InputKind::Password, InputKind::Text] {
        let mut state = InteractionState::new(start.clone());
        state.toggle_kind();
        assert_ne!(state.current_kind(), &start);
        state.toggle_kind();
        assert_eq!(state.current_kind(), &start);
    }
}

#[test]
fn suppressed_message_keeps_aria_invalid_without_chrome() {
    let result = anatomy(
        InputProps::new("code", "Code")
            .value("12")
            .error("Six digits")
            .suppress_error_message(true),
    );
    assert!(result.field.aria_invalid);
    assert!(result.error.is_live());
    assert!(!result.tooltip.has_chrome);
    assert!(result.tooltip.message.is_none());
    assert!(result.style.field.ring.is_some());
}

#[test]
fn auto_focus_fires_once_across_prop_updates() {
    let mut props = InputProps::new("search", "Search").start_focused(true);
    let mut state = InteractionState::new(props.starting_kind().clone());
    let mut focus_calls = 0;

    for value in ["", "a", "ab"] {
        props = props.value(value);
        if state.claim_auto_focus(props.starts_focused(), true) {
            focus_calls += 1;
        }
    }
    assert_eq!(focus_calls, 1);
    assert!(state.has_auto_focused());
}

#[test]
fn auto_focus_never_fires_when_not_requested() {
    let props = InputProps::new("search", "Search");
    let mut state = InteractionState::new(props.starting_kind().clone());
    assert!(!state.claim_auto_focus(props.starts_focused(), true));
    assert!(!state.claim_auto_focus(props.starts_focused(), true));
}

#[test]
fn password_field_offers_show_then_hide() {
    let kind: InputKind = "password".parse().expect("known kind");
    let props = InputProps::new("pw", "Password").kind(kind).start_focused(false);
    let mut state = InteractionState::new(props.starting_kind().clone());

    let before = anatomy_with_kind(props.clone(), state.current_kind());
    let action = before.action.expect("secret fields carry an action");
    assert_eq!(action.label.to_string(), "Show");
    assert_eq!(before.field.kind, InputKind::Password);

    state.toggle_kind();
    let after = anatomy_with_kind(props, state.current_kind());
    let action = after.action.expect("action survives the toggle");
    assert_eq!(action.label.to_string(), "Hide");
    assert_eq!(after.field.kind, InputKind::Text);
    assert!(after.style.field.padding_right > 0.0);
}

#[test]
fn horizontal_orientation_renders_a_row() {
    let row = anatomy(InputProps::new("name", "Name").orientation(FieldLayout::Horizontal));
    assert!(row.is_row());
    assert!(matches!(row.style.layout, LayoutStyle::Row { .. }));

    let stacked = anatomy(InputProps::new("name", "Name"));
    assert!(!stacked.is_row());
    assert_eq!(stacked.style.layout, LayoutStyle::Stacked);
}

#[test]
fn tertiary_icon_uses_a_smaller_inset() {
    let tertiary = anatomy(
        InputProps::new("q", "Search")
            .icon("search")
            .appearance(Appearance::Tertiary),
    );
    let default = anatomy(InputProps::new("q", "Search").icon("search"));

    let tertiary_icon = tertiary.style.icon.expect("icon style");
    let default_icon = default.style.icon.expect("icon style");
    assert!(tertiary_icon.left < default_icon.left);
    assert!(tertiary.style.field.padding_left < default.style.field.padding_left);
    assert!(tertiary.icon.is_some_and(|icon| icon.aria_hidden));
}
