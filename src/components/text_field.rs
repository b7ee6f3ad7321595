use std::{
    collections::HashMap,
    rc::Rc,
    sync::{LazyLock, Mutex},
    time::Duration,
};

use gpui::{
    Animation, AnimationExt, AnyElement, FocusHandle, InteractiveElement, IntoElement,
    KeyDownEvent, MouseButton, ParentElement, RenderOnce, SharedString,
    StatefulInteractiveElement, Styled, Window, div, px,
};

use crate::id::ComponentId;
use crate::style::InputKind;
use crate::theme::LocalTheme;
use crate::tokens::{Opacity, Typography};

use super::control;
use super::input_anatomy::FieldAttributes;
use super::input_style::{FieldStyle, InputStyle, StyleInput};
use super::text_input_state::InputState;

pub type ChangeHandler = Rc<dyn Fn(SharedString, &mut Window, &mut gpui::App)>;
pub type SubmitHandler = Rc<dyn Fn(SharedString, &mut Window, &mut gpui::App)>;

const CARET_BLINK_CYCLE_MS: u64 = 1000;
const MASK_CHAR: char = '•';

static FIELD_FOCUS_HANDLES: LazyLock<Mutex<HashMap<String, FocusHandle>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

/// Editing command decoded from a key press.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FieldKey {
    Insert(String),
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
    Submit,
}

impl FieldKey {
    /// Shortcuts with a command modifier are left to the surrounding app.
    pub fn from_keystroke(key: &str, key_char: Option<&str>, modified: bool) -> Option<Self> {
        if modified {
            return None;
        }
        match key {
            "backspace" => Some(Self::Backspace),
            "delete" => Some(Self::Delete),
            "left" => Some(Self::Left),
            "right" => Some(Self::Right),
            "home" => Some(Self::Home),
            "end" => Some(Self::End),
            "enter" => Some(Self::Submit),
            _ => key_char
                .filter(|text| !text.is_empty() && !text.chars().any(char::is_control))
                .map(|text| Self::Insert(text.to_string())),
        }
    }

    /// Applies the command and reports whether the value changed.
    pub fn apply(&self, state: &mut InputState, read_only: bool, max_length: Option<usize>) -> bool {
        let before = state.value.clone();
        match self {
            Self::Left => {
                state.move_left();
            }
            Self::Right => {
                state.move_right();
            }
            Self::Home => {
                state.move_home();
            }
            Self::End => {
                state.move_end();
            }
            Self::Submit => {}
            Self::Insert(_) | Self::Backspace | Self::Delete if read_only => {}
            Self::Insert(text) => {
                if max_length.is_none_or(|limit| state.len() < limit) {
                    state.insert_text(text);
                    state.clamp_to_max_length(max_length);
                }
            }
            Self::Backspace => {
                state.delete_backward();
            }
            Self::Delete => {
                state.delete_forward();
            }
        }
        state.value != before
    }
}

/// Applies `key` to the live value of field `id`, so keys delivered before the
/// owner re-renders build on each other. Returns the new value when it changed.
pub(crate) fn apply_field_key(
    id: &str,
    key: &FieldKey,
    rendered: &str,
    read_only: bool,
    max_length: Option<usize>,
) -> Option<String> {
    let value = control::field_value(id, rendered);
    let caret = control::caret(id, value.chars().count());
    let mut state = InputState::new(value, caret);
    let changed = key.apply(&mut state, read_only, max_length);
    control::set_caret(id, state.caret);
    if !changed {
        return None;
    }
    control::report_field_value(id, &state.value);
    Some(state.value)
}

/// Text as drawn: secret kinds show one bullet per character.
pub fn display_value(value: &str, kind: &InputKind) -> String {
    if kind.is_secret() {
        std::iter::repeat_n(MASK_CHAR, value.chars().count()).collect()
    } else {
        value.to_string()
    }
}

/// Focusable single-line field. The value is owned by the caller and edits are
/// reported through `on_change`.
#[derive(IntoElement)]
pub struct TextField {
    id: ComponentId,
    attributes: FieldAttributes,
    placeholder: Option<SharedString>,
    disabled: bool,
    inherit_opacity: bool,
    read_only: bool,
    max_length: Option<usize>,
    field_style: Option<FieldStyle>,
    theme: LocalTheme,
    style: gpui::StyleRefinement,
    focus_handle: Option<FocusHandle>,
    on_change: Option<ChangeHandler>,
    on_submit: Option<SubmitHandler>,
}

impl TextField {
    pub fn new(attributes: FieldAttributes) -> Self {
        Self {
            id: ComponentId::new(attributes.id.clone()),
            attributes,
            placeholder: None,
            disabled: false,
            inherit_opacity: false,
            read_only: false,
            max_length: None,
            field_style: None,
            theme: LocalTheme::default(),
            style: gpui::StyleRefinement::default(),
            focus_handle: None,
            on_change: None,
            on_submit: None,
        }
    }

    pub fn placeholder(mut self, value: impl Into<SharedString>) -> Self {
        self.placeholder = Some(value.into());
        self
    }

    pub fn disabled(mut self, value: bool) -> Self {
        self.disabled = value;
        self
    }

    pub fn read_only(mut self, value: bool) -> Self {
        self.read_only = value;
        self
    }

    pub fn max_length(mut self, value: usize) -> Self {
        self.max_length = Some(value);
        self
    }

    pub fn field_style(mut self, value: FieldStyle) -> Self {
        self.field_style = Some(value);
        self
    }

    pub fn focus_handle(mut self, focus_handle: FocusHandle) -> Self {
        self.focus_handle = Some(focus_handle);
        self
    }

    pub fn on_change(
        mut self,
        handler: impl Fn(SharedString, &mut Window, &mut gpui::App) + 'static,
    ) -> Self {
        self.on_change = Some(Rc::new(handler));
        self
    }

    pub fn on_submit(
        mut self,
        handler: impl Fn(SharedString, &mut Window, &mut gpui::App) + 'static,
    ) -> Self {
        self.on_submit = Some(Rc::new(handler));
        self
    }

    pub(crate) fn on_change_handler(mut self, handler: Option<ChangeHandler>) -> Self {
        self.on_change = handler;
        self
    }

    pub(crate) fn on_submit_handler(mut self, handler: Option<SubmitHandler>) -> Self {
        self.on_submit = handler;
        self
    }

    /// The parent already dims the disabled state.
    pub(crate) fn inherit_opacity(mut self) -> Self {
        self.inherit_opacity = true;
        self
    }

    fn disabled_opacity(&self) -> Option<f32> {
        (self.disabled && !self.inherit_opacity).then_some(Opacity::DISABLED)
    }

    pub(crate) fn theme_handle(mut self, theme: LocalTheme) -> Self {
        self.theme = theme;
        self
    }

    pub fn attributes(&self) -> &FieldAttributes {
        &self.attributes
    }

    fn resolved_focus_handle(&self, cx: &gpui::App) -> FocusHandle {
        if let Some(focus_handle) = self.focus_handle.as_ref() {
            return focus_handle.clone();
        }
        if let Ok(mut handles) = FIELD_FOCUS_HANDLES.lock() {
            return handles
                .entry(self.id.to_string())
                .or_insert_with(|| cx.focus_handle())
                .clone();
        }
        cx.focus_handle()
    }

    fn render_caret(&self, style: &FieldStyle) -> AnyElement {
        div()
            .id(self.id.slot("caret"))
            .flex_none()
            .w(px(1.0))
            .h(px(style.font_size))
            .bg(self.theme.resolve_hsla(&style.caret))
            .with_animation(
                self.id.slot("caret-blink"),
                Animation::new(Duration::from_millis(CARET_BLINK_CYCLE_MS))
                    .repeat()
                    .with_easing(gpui::linear),
                |this, delta| {
                    let visible = (delta * 2.0).fract() < 0.5;
                    this.opacity(if visible { 1.0 } else { 0.0 })
                },
            )
            .into_any_element()
    }
}

impl RenderOnce for TextField {
    fn render(mut self, window: &mut Window, cx: &mut gpui::App) -> impl IntoElement {
        self.theme.sync_from_provider(cx);
        let style = self
            .field_style
            .take()
            .unwrap_or_else(|| InputStyle::resolve(&self.theme, StyleInput::default()).field);
        let focus_handle = self.resolved_focus_handle(cx);
        let focused = focus_handle.is_focused(window);
        let editable = !self.disabled && !self.read_only;

        let value = control::sync_field_value(&self.id, &self.attributes.value);
        let len = value.chars().count();
        let caret = control::caret(&self.id, len);

        let mut field = div()
            .id(self.id.slot("field"))
            .relative()
            .flex()
            .items_center()
            .w_full()
            .min_w_0()
            .overflow_hidden()
            .pl(px(style.padding_left))
            .pr(px(style.padding_right))
            .py(px(style.padding_y))
            .text_size(px(style.font_size))
            .line_height(px(style.line_height))
            .text_color(self.theme.resolve_hsla(&style.fg))
            .track_focus(&focus_handle);
        if style.code_font {
            field = field.font_family(Typography::FAMILY_CODE);
        }

        if let Some(opacity) = self.disabled_opacity() {
            field = field.opacity(opacity);
        }
        if self.disabled {
            field = field.cursor_default();
        } else {
            let id_for_click = self.id.clone();
            let handle_for_click = focus_handle.clone();
            field = field
                .cursor_text()
                .on_mouse_down(MouseButton::Left, move |_, window, cx| {
                    let live = control::field_value(&id_for_click, "");
                    control::set_caret(&id_for_click, live.chars().count());
                    window.focus(&handle_for_click, cx);
                    window.refresh();
                });

            let id_for_keys = self.id.clone();
            let value_for_keys = value.clone();
            let read_only = self.read_only;
            let max_length = self.max_length;
            let on_change = self.on_change.clone();
            let on_submit = self.on_submit.clone();
            field = field.on_key_down(move |event: &KeyDownEvent, window, cx| {
                let modifiers = &event.keystroke.modifiers;
                let modified =
                    modifiers.control || modifiers.platform || modifiers.function || modifiers.alt;
                let Some(key) = FieldKey::from_keystroke(
                    &event.keystroke.key,
                    event.keystroke.key_char.as_deref(),
                    modified,
                ) else {
                    return;
                };

                if key == FieldKey::Submit {
                    if let Some(handler) = on_submit.as_ref() {
                        let live = control::field_value(&id_for_keys, &value_for_keys);
                        (handler)(live.into(), window, cx);
                    }
                    cx.stop_propagation();
                    return;
                }

                let edited =
                    apply_field_key(&id_for_keys, &key, &value_for_keys, read_only, max_length);
                if let Some(value) = edited
                    && let Some(handler) = on_change.as_ref()
                {
                    (handler)(value.into(), window, cx);
                }
                window.refresh();
                cx.stop_propagation();
            });
        }

        if value.is_empty() && !focused {
            let placeholder = self.placeholder.clone().unwrap_or_default();
            field = field.child(
                div()
                    .truncate()
                    .text_color(self.theme.resolve_hsla(&style.placeholder))
                    .child(placeholder),
            );
        } else {
            let shown = display_value(&value, &self.attributes.kind);
            let (left, right) = InputState::new(shown, caret).split_at_caret();
            let mut row = div().flex().items_center().whitespace_nowrap().child(left);
            if focused && editable {
                row = row.child(self.render_caret(&style));
            }
            field = field.child(row.child(right));
        }

        gpui::Refineable::refine(gpui::Styled::style(&mut field), &self.style);
        field
    }
}

crate::impl_disableable!(TextField);

impl gpui::Styled for TextField {
    fn style(&mut self) -> &mut gpui::StyleRefinement {
        &mut self.style
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn printable_keys_insert_their_character() {
        assert_eq!(
            FieldKey::from_keystroke("a", Some("a"), false),
            Some(FieldKey::Insert("a".to_string()))
        );
        assert_eq!(
            FieldKey::from_keystroke("space", Some(" "), false),
            Some(FieldKey::Insert(" ".to_string()))
        );
        assert_eq!(FieldKey::from_keystroke("a", Some("a"), true), None);
        assert_eq!(FieldKey::from_keystroke("tab", None, false), None);
        assert_eq!(
            FieldKey::from_keystroke("enter", Some("\n"), false),
            Some(FieldKey::Submit)
        );
    }

    #[test]
    fn read_only_fields_move_the_caret_but_never_edit() {
        let mut state = InputState::new("abc", 3);
        assert!(!FieldKey::Backspace.apply(&mut state, true, None));
        assert!(!FieldKey::Insert("d".to_string()).apply(&mut state, true, None));
        assert!(!FieldKey::Home.apply(&mut state, true, None));
        assert_eq!(state.caret, 0);
        assert_eq!(state.value, "abc");
    }

    #[test]
    fn inserts_stop_at_max_length() {
        let mut state = InputState::new("ab", 2);
        assert!(FieldKey::Insert("cd".to_string()).apply(&mut state, false, Some(3)));
        assert_eq!(state.value, "abc");
        assert!(!FieldKey::Insert("e".to_string()).apply(&mut state, false, Some(3)));
    }

    #[test]
    fn keys_in_one_frame_build_on_each_other() {
        let id = "field-test-burst";
        control::sync_field_value(id, "");
        control::set_caret(id, 0);

        let first = FieldKey::Insert("a".to_string());
        let second = FieldKey::Insert("b".to_string());
        assert_eq!(apply_field_key(id, &first, "", false, None).as_deref(), Some("a"));
        assert_eq!(apply_field_key(id, &second, "", false, None).as_deref(), Some("ab"));
        assert_eq!(control::caret(id, 2), 2);

        assert_eq!(control::sync_field_value(id, "ab"), "ab");
        assert_eq!(apply_field_key(id, &FieldKey::Left, "ab", false, None), None);
    }

    #[test]
    fn owner_reset_replaces_the_live_value() {
        let id = "field-test-reset";
        control::sync_field_value(id, "");
        apply_field_key(id, &FieldKey::Insert("x".to_string()), "", false, None);
        assert_eq!(control::sync_field_value(id, ""), "");
        assert_eq!(
            apply_field_key(id, &FieldKey::Insert("y".to_string()), "", false, None).as_deref(),
            Some("y")
        );
    }

    #[test]
    fn secret_kinds_are_masked_per_character() {
        assert_eq!(display_value("hunter2", &InputKind::Password), "•••••••");
        assert_eq!(display_value("héllo", &InputKind::Password).chars().count(), 5);
        assert_eq!(display_value("visible", &InputKind::Text), "visible");
    }

    #[test]
    fn nested_disabled_field_leaves_dimming_to_its_parent() {
        let attributes =
            FieldAttributes::plain(&ComponentId::new("dimmed"), InputKind::Text, "");
        let standalone = TextField::new(attributes.clone()).disabled(true);
        assert_eq!(standalone.disabled_opacity(), Some(Opacity::DISABLED));
        let nested = TextField::new(attributes).disabled(true).inherit_opacity();
        assert_eq!(nested.disabled_opacity(), None);
    }

    #[test]
    fn field_takes_its_id_from_the_attributes() {
        let attributes = FieldAttributes::plain(
            &ComponentId::new("card-number"),
            InputKind::Number,
            "4242",
        );
        let field = TextField::new(attributes).max_length(19).read_only(true);
        assert_eq!(field.id.as_str(), "card-number");
        assert_eq!(field.attributes().kind, InputKind::Number);
        assert_eq!(field.max_length, Some(19));
        assert!(field.read_only);
    }
}
