use crate::style::{Appearance, FieldLayout};
use crate::theme::{ColorValue, Theme};
use crate::tokens::{Spacing, Typography};

/// Everything the concrete style of a field depends on.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct StyleInput {
    pub appearance: Appearance,
    pub layout: FieldLayout,
    pub hide_label: bool,
    pub has_icon: bool,
    pub has_error: bool,
    pub secret_start: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LabelStyle {
    pub font_size: f32,
    pub bold: bool,
    pub code_font: bool,
    pub margin_bottom: f32,
    pub visually_hidden: bool,
    pub color: ColorValue,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FieldStyle {
    pub font_size: f32,
    pub line_height: f32,
    pub padding_y: f32,
    pub padding_left: f32,
    pub padding_right: f32,
    pub radius: f32,
    pub code_font: bool,
    pub bg: ColorValue,
    pub fg: ColorValue,
    pub placeholder: ColorValue,
    pub caret: ColorValue,
    /// Inset ring drawn while idle; `None` draws nothing.
    pub ring: Option<ColorValue>,
    pub ring_focus: Option<ColorValue>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct IconStyle {
    pub font_size: f32,
    pub box_size: f32,
    pub left: f32,
    pub color: ColorValue,
    pub color_focus: ColorValue,
    pub jiggle: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LayoutStyle {
    Stacked,
    /// Label cell shrinks to its content, field cell takes the rest.
    Row { label_gap: f32 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct InputStyle {
    pub layout: LayoutStyle,
    pub label: LabelStyle,
    pub field: FieldStyle,
    pub icon: Option<IconStyle>,
}

impl InputStyle {
    pub fn resolve(theme: &Theme, input: StyleInput) -> Self {
        Self {
            layout: match input.layout {
                FieldLayout::Vertical => LayoutStyle::Stacked,
                FieldLayout::Horizontal => LayoutStyle::Row {
                    label_gap: if input.hide_label {
                        0.0
                    } else {
                        Spacing::HORIZONTAL_LABEL_GAP
                    },
                },
            },
            label: label_style(theme, input),
            field: field_style(theme, input),
            icon: input.has_icon.then(|| icon_style(theme, input)),
        }
    }
}

fn label_style(theme: &Theme, input: StyleInput) -> LabelStyle {
    let code = input.appearance == Appearance::Code;
    let font_size = if code {
        Typography::SIZE_S1
    } else {
        Typography::SIZE_S2
    };
    LabelStyle {
        font_size,
        bold: !code,
        code_font: code,
        // A hidden label is taken out of flow, so its cell must not leave a gap.
        margin_bottom: if input.hide_label { 0.0 } else { 0.33 * font_size },
        visually_hidden: input.hide_label,
        color: theme.components.input.label.clone(),
    }
}

fn field_style(theme: &Theme, input: StyleInput) -> FieldStyle {
    let tokens = &theme.components.input;
    let (font_size, line_height) = match input.appearance {
        Appearance::Pill => (Typography::SIZE_S1, 16.0),
        Appearance::Code => (Typography::SIZE_S2 - 1.0, 16.0),
        _ => (Typography::SIZE_S2, 20.0),
    };
    let (padding_y, padding_x) = match input.appearance {
        Appearance::Tertiary => (0.0, 0.0),
        Appearance::Pill => (0.5 * font_size, font_size),
        Appearance::Code => (3.0, 6.0),
        Appearance::Default | Appearance::Secondary => (0.715 * font_size, font_size),
    };
    let radius = match input.appearance {
        Appearance::Pill => Spacing::RADIUS_PILL,
        Appearance::Code => Spacing::RADIUS_SMALL,
        _ => Spacing::RADIUS_DEFAULT,
    };
    let bg = match input.appearance {
        Appearance::Tertiary | Appearance::Pill => ColorValue::Transparent,
        Appearance::Code => tokens.bg_code.clone(),
        Appearance::Default | Appearance::Secondary => tokens.bg.clone(),
    };
    let (mut ring, mut ring_focus) = match input.appearance {
        Appearance::Default => (None, Some(tokens.ring_focus.clone())),
        Appearance::Secondary => (
            Some(tokens.ring_secondary.clone()),
            Some(tokens.ring_secondary_focus.clone()),
        ),
        Appearance::Tertiary => (None, None),
        Appearance::Pill => (
            Some(tokens.ring_pill.clone()),
            Some(tokens.ring_secondary_focus.clone()),
        ),
        Appearance::Code => (None, Some(tokens.ring_secondary_focus.clone())),
    };
    if input.has_error && input.appearance != Appearance::Tertiary {
        ring = Some(tokens.ring_error.clone());
        ring_focus = Some(tokens.ring_error.clone());
    }

    let padding_left = if input.has_icon {
        let inset = match input.appearance {
            Appearance::Pill => 2.4,
            Appearance::Tertiary => 1.75,
            _ => 2.45,
        };
        inset * font_size
    } else {
        padding_x
    };
    let padding_right = if input.secret_start {
        3.8 * font_size
    } else {
        padding_x
    };

    FieldStyle {
        font_size,
        line_height,
        padding_y,
        padding_left,
        padding_right,
        radius,
        code_font: input.appearance == Appearance::Code,
        bg,
        fg: tokens.fg.clone(),
        placeholder: tokens.placeholder.clone(),
        caret: tokens.caret.clone(),
        ring,
        ring_focus,
    }
}

fn icon_style(theme: &Theme, input: StyleInput) -> IconStyle {
    let tokens = &theme.components.input;
    let scale = if input.appearance == Appearance::Pill {
        0.75
    } else {
        1.0
    };
    let font_size = Typography::SIZE_S2 * scale;
    let left = if input.appearance == Appearance::Tertiary {
        0.0
    } else {
        0.8 * font_size
    };
    let (color, color_focus) = if input.has_error {
        (tokens.icon_error.clone(), tokens.icon_error.clone())
    } else {
        (tokens.icon.clone(), tokens.icon_focus.clone())
    };
    IconStyle {
        font_size,
        box_size: 0.75 * font_size,
        left,
        color,
        color_focus,
        jiggle: input.has_error,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(input: StyleInput) -> InputStyle {
        InputStyle::resolve(&Theme::default(), input)
    }

    fn with_icon(appearance: Appearance) -> InputStyle {
        resolve(StyleInput {
            appearance,
            has_icon: true,
            ..StyleInput::default()
        })
    }

    #[test]
    fn tertiary_icon_sits_closer_to_the_edge() {
        let default_icon = with_icon(Appearance::Default).icon.expect("icon style");
        let tertiary_icon = with_icon(Appearance::Tertiary).icon.expect("icon style");
        assert!(tertiary_icon.left < default_icon.left);
        assert_eq!(tertiary_icon.left, 0.0);
    }

    #[test]
    fn icon_inset_depends_on_appearance() {
        let default_field = with_icon(Appearance::Default).field;
        let pill_field = with_icon(Appearance::Pill).field;
        let tertiary_field = with_icon(Appearance::Tertiary).field;
        assert!((default_field.padding_left - 2.45 * 14.0).abs() < 1e-4);
        assert!((pill_field.padding_left - 2.4 * 12.0).abs() < 1e-4);
        assert!((tertiary_field.padding_left - 1.75 * 14.0).abs() < 1e-4);
    }

    #[test]
    fn pill_scales_the_icon_down() {
        let pill_icon = with_icon(Appearance::Pill).icon.expect("icon style");
        let default_icon = with_icon(Appearance::Default).icon.expect("icon style");
        assert!(pill_icon.box_size < default_icon.box_size);
    }

    #[test]
    fn no_icon_means_no_icon_style() {
        assert!(resolve(StyleInput::default()).icon.is_none());
    }

    #[test]
    fn tertiary_has_no_ring_even_with_an_error() {
        let style = resolve(StyleInput {
            appearance: Appearance::Tertiary,
            has_error: true,
            has_icon: true,
            ..StyleInput::default()
        });
        assert_eq!(style.field.ring, None);
        assert_eq!(style.field.ring_focus, None);
        assert_eq!(style.field.padding_y, 0.0);
        assert_eq!(style.field.bg, ColorValue::Transparent);
        let icon = style.icon.expect("icon style");
        assert!(icon.jiggle);
    }

    #[test]
    fn errors_paint_a_negative_ring_for_other_appearances() {
        let theme = Theme::default();
        for appearance in [
            Appearance::Default,
            Appearance::Secondary,
            Appearance::Pill,
            Appearance::Code,
        ] {
            let style = InputStyle::resolve(
                &theme,
                StyleInput {
                    appearance,
                    has_error: true,
                    ..StyleInput::default()
                },
            );
            assert_eq!(style.field.ring, Some(theme.components.input.ring_error.clone()));
            assert_eq!(
                style.field.ring_focus,
                Some(theme.components.input.ring_error.clone())
            );
        }
    }

    #[test]
    fn default_ring_only_shows_on_focus() {
        let style = resolve(StyleInput::default());
        assert_eq!(style.field.ring, None);
        assert!(style.field.ring_focus.is_some());
    }

    #[test]
    fn secret_fields_reserve_room_for_the_action() {
        let plain = resolve(StyleInput::default());
        let secret = resolve(StyleInput {
            secret_start: true,
            ..StyleInput::default()
        });
        assert!(secret.field.padding_right > plain.field.padding_right);
        assert!((secret.field.padding_right - 3.8 * 14.0).abs() < 1e-4);
    }

    #[test]
    fn code_appearance_uses_code_typography() {
        let style = resolve(StyleInput {
            appearance: Appearance::Code,
            ..StyleInput::default()
        });
        assert!(style.label.code_font);
        assert!(!style.label.bold);
        assert_eq!(style.label.font_size, Typography::SIZE_S1);
        assert!(style.field.code_font);
        assert_eq!(style.field.font_size, 13.0);
        assert_eq!(style.field.radius, Spacing::RADIUS_SMALL);
    }

    #[test]
    fn horizontal_layout_resolves_to_a_row() {
        let style = resolve(StyleInput {
            layout: FieldLayout::Horizontal,
            ..StyleInput::default()
        });
        assert_eq!(
            style.layout,
            LayoutStyle::Row {
                label_gap: Spacing::HORIZONTAL_LABEL_GAP
            }
        );
        assert_eq!(resolve(StyleInput::default()).layout, LayoutStyle::Stacked);
    }

    #[test]
    fn hidden_label_is_only_visually_hidden() {
        let style = resolve(StyleInput {
            hide_label: true,
            ..StyleInput::default()
        });
        assert!(style.label.visually_hidden);
        assert!(style.label.bold);
    }

    #[test]
    fn hidden_label_leaves_no_gap_in_either_layout() {
        let stacked = resolve(StyleInput {
            hide_label: true,
            ..StyleInput::default()
        });
        assert_eq!(stacked.label.margin_bottom, 0.0);

        let row = resolve(StyleInput {
            layout: FieldLayout::Horizontal,
            hide_label: true,
            ..StyleInput::default()
        });
        assert_eq!(row.layout, LayoutStyle::Row { label_gap: 0.0 });
        assert!(resolve(StyleInput::default()).label.margin_bottom > 0.0);
    }
}
