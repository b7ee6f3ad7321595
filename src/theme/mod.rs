use std::collections::BTreeMap;
use std::sync::{Arc, OnceLock};

use gpui::SharedString;

use crate::tokens::{COLOR_KEYS, ColorCatalog, ColorKey};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ColorValue {
    Token(ColorKey),
    Transparent,
    Custom(String),
}

impl ColorValue {
    pub const fn token(key: ColorKey) -> Self {
        Self::Token(key)
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InputTokens {
    pub bg: ColorValue,
    pub bg_code: ColorValue,
    pub fg: ColorValue,
    pub placeholder: ColorValue,
    pub label: ColorValue,
    pub ring_focus: ColorValue,
    pub ring_secondary: ColorValue,
    pub ring_secondary_focus: ColorValue,
    pub ring_pill: ColorValue,
    pub ring_error: ColorValue,
    pub icon: ColorValue,
    pub icon_focus: ColorValue,
    pub icon_error: ColorValue,
    pub caret: ColorValue,
    pub show_label: SharedString,
    pub hide_label: SharedString,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TooltipTokens {
    pub bg: ColorValue,
    pub fg: ColorValue,
    pub border: ColorValue,
    pub text_size: f32,
    pub padding_x: f32,
    pub padding_y: f32,
    pub radius: f32,
    pub offset: f32,
    pub message_width: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LinkTokens {
    pub fg: ColorValue,
    pub fg_tertiary: ColorValue,
    pub fg_hover: ColorValue,
    pub text_size: f32,
    pub min_width: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ComponentTokens {
    pub input: InputTokens,
    pub tooltip: TooltipTokens,
    pub link: LinkTokens,
}

impl Default for ComponentTokens {
    fn default() -> Self {
        Self {
            input: InputTokens {
                bg: ColorValue::token(ColorKey::Lightest),
                bg_code: ColorValue::Custom("#0000000D".to_string()),
                fg: ColorValue::token(ColorKey::Darkest),
                placeholder: ColorValue::token(ColorKey::MediumDark),
                label: ColorValue::token(ColorKey::Darkest),
                ring_focus: ColorValue::token(ColorKey::Primary),
                ring_secondary: ColorValue::token(ColorKey::MediumLight),
                ring_secondary_focus: ColorValue::token(ColorKey::Secondary),
                ring_pill: ColorValue::token(ColorKey::Medium),
                ring_error: ColorValue::token(ColorKey::Negative),
                icon: ColorValue::token(ColorKey::MediumDark),
                icon_focus: ColorValue::token(ColorKey::Darker),
                icon_error: ColorValue::token(ColorKey::Negative),
                caret: ColorValue::token(ColorKey::Darkest),
                show_label: "Show".into(),
                hide_label: "Hide".into(),
            },
            tooltip: TooltipTokens {
                bg: ColorValue::token(ColorKey::Lightest),
                fg: ColorValue::token(ColorKey::Darkest),
                border: ColorValue::Custom("#0000001A".to_string()),
                text_size: 12.0,
                padding_x: 10.0,
                padding_y: 8.0,
                radius: 4.0,
                offset: 8.0,
                message_width: 170.0,
            },
            link: LinkTokens {
                fg: ColorValue::token(ColorKey::Secondary),
                fg_tertiary: ColorValue::token(ColorKey::MediumDark),
                fg_hover: ColorValue::token(ColorKey::Darker),
                text_size: 11.0,
                min_width: 45.0,
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub palette: BTreeMap<ColorKey, String>,
    pub components: ComponentTokens,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            palette: COLOR_KEYS
                .into_iter()
                .map(|key| (key, ColorCatalog::hex(key).to_string()))
                .collect(),
            components: ComponentTokens::default(),
        }
    }
}

impl Theme {
    pub fn with_palette_override(mut self, key: ColorKey, hex: impl Into<String>) -> Self {
        self.palette.insert(key, hex.into());
        self
    }

    pub fn resolve_color(&self, token: &ColorValue) -> String {
        match token {
            ColorValue::Token(key) => self
                .palette
                .get(key)
                .cloned()
                .unwrap_or_else(|| ColorCatalog::hex(*key).to_string()),
            ColorValue::Transparent => "#00000000".to_string(),
            ColorValue::Custom(value) => value.clone(),
        }
    }

    pub fn resolve_hsla(&self, token: &ColorValue) -> gpui::Hsla {
        let raw = self.resolve_color(token);
        gpui::Rgba::try_from(raw.as_str())
            .map(Into::into)
            .unwrap_or_else(|_| {
                log::warn!("unparseable colour `{raw}`, falling back to black");
                gpui::black()
            })
    }

    pub fn merged(&self, patch: &ThemePatch) -> Self {
        let mut next = self.clone();
        for (key, value) in &patch.palette_overrides {
            next.palette.insert(*key, value.clone());
        }
        next.components = patch.components.apply(next.components);
        next
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct InputPatch {
    pub bg: Option<ColorValue>,
    pub fg: Option<ColorValue>,
    pub placeholder: Option<ColorValue>,
    pub label: Option<ColorValue>,
    pub ring_focus: Option<ColorValue>,
    pub ring_error: Option<ColorValue>,
    pub icon: Option<ColorValue>,
    pub show_label: Option<SharedString>,
    pub hide_label: Option<SharedString>,
}

impl InputPatch {
    fn apply(&self, mut current: InputTokens) -> InputTokens {
        if let Some(value) = &self.bg {
            current.bg = value.clone();
        }
        if let Some(value) = &self.fg {
            current.fg = value.clone();
        }
        if let Some(value) = &self.placeholder {
            current.placeholder = value.clone();
        }
        if let Some(value) = &self.label {
            current.label = value.clone();
        }
        if let Some(value) = &self.ring_focus {
            current.ring_focus = value.clone();
        }
        if let Some(value) = &self.ring_error {
            current.ring_error = value.clone();
            current.icon_error = value.clone();
        }
        if let Some(value) = &self.icon {
            current.icon = value.clone();
        }
        if let Some(value) = &self.show_label {
            current.show_label = value.clone();
        }
        if let Some(value) = &self.hide_label {
            current.hide_label = value.clone();
        }
        current
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TooltipPatch {
    pub bg: Option<ColorValue>,
    pub fg: Option<ColorValue>,
    pub message_width: Option<f32>,
}

impl TooltipPatch {
    fn apply(&self, mut current: TooltipTokens) -> TooltipTokens {
        if let Some(value) = &self.bg {
            current.bg = value.clone();
        }
        if let Some(value) = &self.fg {
            current.fg = value.clone();
        }
        if let Some(value) = self.message_width {
            current.message_width = value.max(0.0);
        }
        current
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ComponentPatch {
    pub input: InputPatch,
    pub tooltip: TooltipPatch,
}

impl ComponentPatch {
    pub fn apply(&self, current: ComponentTokens) -> ComponentTokens {
        ComponentTokens {
            input: self.input.apply(current.input),
            tooltip: self.tooltip.apply(current.tooltip),
            link: current.link,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ThemePatch {
    pub palette_overrides: BTreeMap<ColorKey, String>,
    pub components: ComponentPatch,
}

#[derive(Clone, Default)]
pub struct LocalTheme {
    resolved: Option<Arc<Theme>>,
    component_patch: Option<ComponentPatch>,
}

impl LocalTheme {
    pub fn set_component_patch(&mut self, patch: Option<ComponentPatch>) {
        self.component_patch = patch;
        self.resolved = None;
    }

    pub fn update_component_patch(
        &mut self,
        configure: impl FnOnce(ComponentPatch) -> ComponentPatch,
    ) {
        let current = self.component_patch.take().unwrap_or_default();
        self.set_component_patch(Some(configure(current)));
    }

    pub fn sync_from_provider(&mut self, cx: &gpui::App) {
        let base = crate::provider::CalmProvider::theme_arc_or_default(cx);
        self.sync_from(base);
    }

    pub fn sync_from(&mut self, base: Arc<Theme>) {
        if let Some(component_patch) = &self.component_patch {
            let mut merged = base.as_ref().clone();
            merged.components = component_patch.apply(merged.components);
            self.resolved = Some(Arc::new(merged));
        } else {
            self.resolved = Some(base);
        }
    }

    fn fallback_theme() -> &'static Theme {
        static FALLBACK: OnceLock<Theme> = OnceLock::new();
        FALLBACK.get_or_init(Theme::default)
    }
}

impl std::ops::Deref for LocalTheme {
    type Target = Theme;

    fn deref(&self) -> &Self::Target {
        if let Some(resolved) = self.resolved.as_deref() {
            resolved
        } else {
            Self::fallback_theme()
        }
    }
}
