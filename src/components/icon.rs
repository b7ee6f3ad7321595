use gpui::{
    Hsla, InteractiveElement, IntoElement, ParentElement, RenderOnce, Styled, div, px, svg,
};

use crate::icon::{IconName, IconRegistry};
use crate::id::ComponentId;
use crate::theme::ColorValue;

#[derive(Clone, Debug)]
enum IconColor {
    Token(ColorValue),
    Raw(Hsla),
}

#[derive(IntoElement)]
pub struct Icon {
    id: ComponentId,
    name: IconName,
    size: f32,
    color: Option<IconColor>,
    theme: crate::theme::LocalTheme,
    style: gpui::StyleRefinement,
    registry: IconRegistry,
}

impl Icon {
    #[track_caller]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: ComponentId::auto("icon"),
            name: IconName::new(name),
            size: 16.0,
            color: None,
            theme: crate::theme::LocalTheme::default(),
            style: gpui::StyleRefinement::default(),
            registry: IconRegistry::new(),
        }
    }

    pub fn with_id(mut self, id: impl Into<ComponentId>) -> Self {
        self.id = id.into();
        self
    }

    pub fn size(mut self, size: f32) -> Self {
        self.size = size.max(6.0);
        self
    }

    pub fn color_token(mut self, token: ColorValue) -> Self {
        self.color = Some(IconColor::Token(token));
        self
    }

    pub fn color(mut self, value: Hsla) -> Self {
        self.color = Some(IconColor::Raw(value));
        self
    }

    pub fn registry(mut self, registry: IconRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn name(&self) -> &IconName {
        &self.name
    }

    fn resolve_color(&self) -> Option<Hsla> {
        match &self.color {
            Some(IconColor::Token(token)) => Some(self.theme.resolve_hsla(token)),
            Some(IconColor::Raw(value)) => Some(*value),
            None => None,
        }
    }
}

impl RenderOnce for Icon {
    fn render(mut self, _window: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        self.theme.sync_from_provider(cx);
        let color = self.resolve_color();
        if let Some(path) = self.registry.resolve(&self.name) {
            let mut icon = svg()
                .external_path(path.to_string_lossy().to_string())
                .w(px(self.size))
                .h(px(self.size))
                .id(self.id);
            if let Some(color) = color {
                icon = icon.text_color(color);
            }
            gpui::Refineable::refine(gpui::Styled::style(&mut icon), &self.style);
            return icon.into_any_element();
        }

        log::debug!("icon `{}` not found, drawing fallback", self.name.as_str());
        let mut fallback = div()
            .id(self.id)
            .w(px(self.size))
            .h(px(self.size))
            .flex()
            .items_center()
            .justify_center()
            .text_size(px(self.size * 0.75))
            .child("?");
        if let Some(color) = color {
            fallback = fallback.text_color(color);
        }
        fallback.into_any_element()
    }
}

impl crate::contracts::ComponentThemeOverridable for Icon {
    fn local_theme_mut(&mut self) -> &mut crate::theme::LocalTheme {
        &mut self.theme
    }
}

impl gpui::Styled for Icon {
    fn style(&mut self) -> &mut gpui::StyleRefinement {
        &mut self.style
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_has_a_floor() {
        let icon = Icon::named("lock").size(1.0);
        assert_eq!(icon.size, 6.0);
        assert_eq!(icon.name().as_str(), "lock");
    }

    #[test]
    fn raw_color_wins_without_a_theme_lookup() {
        let red = gpui::red();
        let icon = Icon::named("lock").color(red);
        assert_eq!(icon.resolve_color(), Some(red));
        assert_eq!(Icon::named("lock").resolve_color(), None);
    }
}
