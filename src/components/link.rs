use std::rc::Rc;

use gpui::{
    ClickEvent, FontWeight, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    SharedString, StatefulInteractiveElement, Styled, Window, div, px,
};

use crate::id::ComponentId;
use crate::theme::LocalTheme;
use crate::tokens::Opacity;

pub type ClickHandler = Rc<dyn Fn(&ClickEvent, &mut Window, &mut gpui::App)>;

/// Text-styled action. As a button it is a compact, bold, centred press target.
#[derive(IntoElement)]
pub struct Link {
    id: ComponentId,
    label: SharedString,
    is_button: bool,
    tertiary: bool,
    disabled: bool,
    inherit_opacity: bool,
    theme: LocalTheme,
    style: gpui::StyleRefinement,
    on_click: Option<ClickHandler>,
}

impl Link {
    #[track_caller]
    pub fn new(label: impl Into<SharedString>) -> Self {
        Self {
            id: ComponentId::auto("link"),
            label: label.into(),
            is_button: false,
            tertiary: false,
            disabled: false,
            inherit_opacity: false,
            theme: LocalTheme::default(),
            style: gpui::StyleRefinement::default(),
            on_click: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<ComponentId>) -> Self {
        self.id = id.into();
        self
    }

    pub fn is_button(mut self, value: bool) -> Self {
        self.is_button = value;
        self
    }

    pub fn tertiary(mut self, value: bool) -> Self {
        self.tertiary = value;
        self
    }

    pub fn disabled(mut self, value: bool) -> Self {
        self.disabled = value;
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

    pub fn on_click(
        mut self,
        handler: impl Fn(&ClickEvent, &mut Window, &mut gpui::App) + 'static,
    ) -> Self {
        self.on_click = Some(Rc::new(handler));
        self
    }

    pub fn label(&self) -> &SharedString {
        &self.label
    }
}

impl RenderOnce for Link {
    fn render(mut self, _window: &mut Window, cx: &mut gpui::App) -> impl IntoElement {
        self.theme.sync_from_provider(cx);
        let tokens = &self.theme.components.link;
        let fg = if self.tertiary {
            self.theme.resolve_hsla(&tokens.fg_tertiary)
        } else {
            self.theme.resolve_hsla(&tokens.fg)
        };
        let hover = self.theme.resolve_hsla(&tokens.fg_hover);

        let mut link = div()
            .id(self.id.clone())
            .flex()
            .items_center()
            .text_color(fg)
            .child(self.label.clone());
        if self.is_button {
            link = link
                .justify_center()
                .h_full()
                .min_w(px(tokens.min_width))
                .text_size(px(tokens.text_size))
                .font_weight(FontWeight::BOLD);
        }

        if let Some(opacity) = self.disabled_opacity() {
            link = link.opacity(opacity);
        }
        if self.disabled {
            link = link.cursor_default();
        } else {
            link = link.cursor_pointer().hover(move |style| style.text_color(hover));
            if let Some(handler) = self.on_click {
                link = link.on_click(move |event, window, cx| (handler)(event, window, cx));
            }
        }

        gpui::Refineable::refine(gpui::Styled::style(&mut link), &self.style);
        link
    }
}

crate::impl_disableable!(Link);

impl crate::contracts::ComponentThemeOverridable for Link {
    fn local_theme_mut(&mut self) -> &mut LocalTheme {
        &mut self.theme
    }
}

impl gpui::Styled for Link {
    fn style(&mut self) -> &mut gpui::StyleRefinement {
        &mut self.style
    }
}
