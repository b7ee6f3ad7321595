use gpui::SharedString;

use crate::id::ComponentId;
use crate::style::{Appearance, FieldLayout, InputKind};
use crate::theme::Theme;

use super::error_state::{ErrorResolution, ErrorSource, ErrorStateInput};
use super::input_style::{InputStyle, StyleInput};
use super::tooltip::{TooltipPlacement, TooltipTrigger};

/// Everything a field's composition is derived from.
#[derive(Clone, Copy, Debug)]
pub struct AnatomyInput<'a> {
    pub id: &'a ComponentId,
    pub value: &'a str,
    pub label: &'a SharedString,
    pub hide_label: bool,
    pub orientation: FieldLayout,
    pub appearance: Appearance,
    pub icon: Option<&'a str>,
    pub error: Option<&'a ErrorSource>,
    pub suppress_error_message: bool,
    pub last_error_value: Option<&'a str>,
    pub starting_kind: &'a InputKind,
    pub current_kind: &'a InputKind,
    pub class_name: Option<&'a SharedString>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LabelPart {
    pub text: SharedString,
    pub for_id: SharedString,
    /// Kept in the tree for assistive tech but clipped out of sight.
    pub visually_hidden: bool,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct IconPart {
    pub name: SharedString,
    pub aria_hidden: bool,
    pub jiggle: bool,
}

/// Attributes carried by the field element itself.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FieldAttributes {
    pub id: SharedString,
    pub kind: InputKind,
    pub value: SharedString,
    pub aria_describedby: SharedString,
    pub aria_invalid: bool,
    pub data_error: bool,
    pub class_name: Option<SharedString>,
}

impl FieldAttributes {
    /// Bare attributes for a field outside of a labelled input.
    pub fn plain(id: &ComponentId, kind: InputKind, value: impl Into<SharedString>) -> Self {
        Self {
            id: id.as_str().to_string().into(),
            kind,
            value: value.into(),
            aria_describedby: id.slot_name("error").into(),
            aria_invalid: false,
            data_error: false,
            class_name: None,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TooltipPart {
    pub placement: TooltipPlacement,
    pub trigger: TooltipTrigger,
    pub start_open: bool,
    pub has_chrome: bool,
    pub message: Option<SharedString>,
    pub message_id: SharedString,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ActionPart {
    pub label: SharedString,
    pub is_button: bool,
    pub tertiary: bool,
}

/// Parts in composition order: label, then a box holding icon, field (inside
/// its tooltip) and action. Render paints the icon after the field.
#[derive(Clone, Debug, PartialEq)]
pub struct InputAnatomy {
    pub orientation: FieldLayout,
    pub style: InputStyle,
    pub error: ErrorResolution,
    pub label: LabelPart,
    pub icon: Option<IconPart>,
    pub field: FieldAttributes,
    pub tooltip: TooltipPart,
    pub action: Option<ActionPart>,
}

impl InputAnatomy {
    pub fn resolve(theme: &Theme, input: AnatomyInput<'_>) -> Self {
        let error = ErrorResolution::resolve(ErrorStateInput {
            error: input.error,
            value: input.value,
            last_error_value: input.last_error_value,
            suppress_message: input.suppress_error_message,
        });
        let secret_start = input.starting_kind.is_secret();
        let style = InputStyle::resolve(
            theme,
            StyleInput {
                appearance: input.appearance,
                layout: input.orientation,
                hide_label: input.hide_label,
                has_icon: input.icon.is_some(),
                has_error: error.is_live(),
                secret_start,
            },
        );

        let id: SharedString = input.id.as_str().to_string().into();
        let message_id: SharedString = input.id.slot_name("error").into();

        let label = LabelPart {
            text: input.label.clone(),
            for_id: id.clone(),
            visually_hidden: input.hide_label,
        };
        let icon = input.icon.map(|name| IconPart {
            name: name.to_string().into(),
            aria_hidden: true,
            jiggle: error.is_live(),
        });
        let field = FieldAttributes {
            id,
            kind: input.current_kind.clone(),
            value: input.value.to_string().into(),
            aria_describedby: message_id.clone(),
            aria_invalid: error.signal,
            data_error: error.signal,
            class_name: input.class_name.cloned(),
        };
        let tooltip = TooltipPart {
            placement: TooltipPlacement::Right,
            trigger: TooltipTrigger::None,
            start_open: true,
            has_chrome: error.chrome,
            message: error.visible_message().cloned(),
            message_id,
        };
        let action = secret_start.then(|| {
            let tokens = &theme.components.input;
            ActionPart {
                label: if input.current_kind.is_secret() {
                    tokens.show_label.clone()
                } else {
                    tokens.hide_label.clone()
                },
                is_button: true,
                tertiary: true,
            }
        });

        Self {
            orientation: input.orientation,
            style,
            error,
            label,
            icon,
            field,
            tooltip,
            action,
        }
    }

    pub fn is_row(&self) -> bool {
        self.orientation == FieldLayout::Horizontal
    }
}
