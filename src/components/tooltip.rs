use gpui::{
    AnyElement, FontWeight, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    SharedString, StatefulInteractiveElement, Styled, Window, div, px,
};

use crate::id::ComponentId;
use crate::theme::LocalTheme;

use super::control;
use super::popup::{PopupPlacement, anchored_host};

type SlotRenderer = Box<dyn FnOnce() -> AnyElement>;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum TooltipPlacement {
    #[default]
    Top,
    Right,
    Bottom,
    Left,
}

impl From<TooltipPlacement> for PopupPlacement {
    fn from(value: TooltipPlacement) -> Self {
        match value {
            TooltipPlacement::Top => PopupPlacement::Top,
            TooltipPlacement::Right => PopupPlacement::Right,
            TooltipPlacement::Bottom => PopupPlacement::Bottom,
            TooltipPlacement::Left => PopupPlacement::Left,
        }
    }
}

/// What opens the tooltip. `None` leaves it exactly as `start_open` says.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum TooltipTrigger {
    None,
    #[default]
    Hover,
    Click,
}

#[derive(Clone, Copy, Debug)]
pub struct TooltipOpenInput<'a> {
    pub id: &'a str,
    pub trigger: TooltipTrigger,
    pub start_open: bool,
}

pub fn resolve_open(input: TooltipOpenInput<'_>) -> bool {
    match input.trigger {
        TooltipTrigger::None => input.start_open,
        TooltipTrigger::Hover | TooltipTrigger::Click => {
            control::bool_state(input.id, "opened", None, input.start_open)
        }
    }
}

fn apply_opened(id: &str, value: bool) -> bool {
    let current = control::bool_state(id, "opened", None, value);
    control::set_bool_state(id, "opened", value);
    current != value
}

/// Short text body of a tooltip, optionally headed by a bold title.
#[derive(IntoElement)]
pub struct TooltipMessage {
    id: Option<ComponentId>,
    title: Option<SharedString>,
    desc: SharedString,
    width: Option<f32>,
    theme: LocalTheme,
}

impl TooltipMessage {
    pub fn new(desc: impl Into<SharedString>) -> Self {
        Self {
            id: None,
            title: None,
            desc: desc.into(),
            width: None,
            theme: LocalTheme::default(),
        }
    }

    pub fn with_id(mut self, id: impl Into<ComponentId>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn title(mut self, value: impl Into<SharedString>) -> Self {
        self.title = Some(value.into());
        self
    }

    pub fn width(mut self, value: f32) -> Self {
        self.width = Some(value.max(0.0));
        self
    }

    pub fn id(&self) -> Option<&ComponentId> {
        self.id.as_ref()
    }

    pub fn desc(&self) -> &SharedString {
        &self.desc
    }
}

impl RenderOnce for TooltipMessage {
    fn render(mut self, _window: &mut Window, cx: &mut gpui::App) -> impl IntoElement {
        self.theme.sync_from_provider(cx);
        let tokens = &self.theme.components.tooltip;
        let width = self.width.unwrap_or(tokens.message_width);

        let mut body = div()
            .flex()
            .flex_col()
            .gap_1()
            .w(px(width))
            .text_size(px(tokens.text_size))
            .text_color(self.theme.resolve_hsla(&tokens.fg));
        if let Some(title) = self.title {
            body = body.child(div().font_weight(FontWeight::BOLD).child(title));
        }
        let desc = div().child(self.desc);
        match self.id {
            Some(id) => body.child(desc.id(id)).into_any_element(),
            None => body.child(desc).into_any_element(),
        }
    }
}

#[derive(IntoElement)]
pub struct WithTooltip {
    id: ComponentId,
    placement: TooltipPlacement,
    trigger: TooltipTrigger,
    start_open: bool,
    has_chrome: bool,
    offset_px: Option<f32>,
    theme: LocalTheme,
    style: gpui::StyleRefinement,
    tooltip: Option<SlotRenderer>,
    child: Option<SlotRenderer>,
}

impl WithTooltip {
    #[track_caller]
    pub fn new() -> Self {
        Self {
            id: ComponentId::auto("tooltip"),
            placement: TooltipPlacement::Top,
            trigger: TooltipTrigger::Hover,
            start_open: false,
            has_chrome: true,
            offset_px: None,
            theme: LocalTheme::default(),
            style: gpui::StyleRefinement::default(),
            tooltip: None,
            child: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<ComponentId>) -> Self {
        self.id = id.into();
        self
    }

    pub fn placement(mut self, value: TooltipPlacement) -> Self {
        self.placement = value;
        self
    }

    pub fn trigger(mut self, value: TooltipTrigger) -> Self {
        self.trigger = value;
        self
    }

    pub fn start_open(mut self, value: bool) -> Self {
        self.start_open = value;
        self
    }

    pub fn has_chrome(mut self, value: bool) -> Self {
        self.has_chrome = value;
        self
    }

    pub fn offset(mut self, value: f32) -> Self {
        self.offset_px = Some(value.max(0.0));
        self
    }

    pub fn tooltip(mut self, content: impl IntoElement + 'static) -> Self {
        self.tooltip = Some(Box::new(|| content.into_any_element()));
        self
    }

    pub fn child(mut self, content: impl IntoElement + 'static) -> Self {
        self.child = Some(Box::new(|| content.into_any_element()));
        self
    }

    pub fn is_open(&self) -> bool {
        resolve_open(TooltipOpenInput {
            id: self.id.as_str(),
            trigger: self.trigger,
            start_open: self.start_open,
        })
    }

    pub fn chrome(&self) -> bool {
        self.has_chrome
    }

    fn render_bubble(&self, content: AnyElement) -> AnyElement {
        if !self.has_chrome {
            return div().child(content).into_any_element();
        }
        let tokens = &self.theme.components.tooltip;
        div()
            .id(self.id.slot("bubble"))
            .px(px(tokens.padding_x))
            .py(px(tokens.padding_y))
            .rounded(px(tokens.radius))
            .border(px(1.0))
            .border_color(self.theme.resolve_hsla(&tokens.border))
            .bg(self.theme.resolve_hsla(&tokens.bg))
            .shadow_md()
            .child(content)
            .into_any_element()
    }
}

impl RenderOnce for WithTooltip {
    fn render(mut self, _window: &mut Window, cx: &mut gpui::App) -> impl IntoElement {
        self.theme.sync_from_provider(cx);
        let opened = self.is_open();
        let child = self
            .child
            .take()
            .map(|render| render())
            .unwrap_or_else(|| div().into_any_element());

        let mut trigger = div()
            .id(self.id.slot("trigger"))
            .relative()
            .w_full()
            .child(child);

        match self.trigger {
            TooltipTrigger::None => {}
            TooltipTrigger::Hover => {
                let id = self.id.clone();
                trigger = trigger.on_hover(move |hovered, window, _cx| {
                    if apply_opened(&id, *hovered) {
                        window.refresh();
                    }
                });
            }
            TooltipTrigger::Click => {
                let id = self.id.clone();
                let next = !opened;
                trigger = trigger.on_click(move |_, window, _cx| {
                    if apply_opened(&id, next) {
                        window.refresh();
                    }
                });
            }
        }

        if opened && let Some(content) = self.tooltip.take() {
            let offset = self
                .offset_px
                .unwrap_or(self.theme.components.tooltip.offset);
            let bubble = self.render_bubble(content());
            trigger = trigger.child(anchored_host(
                &self.id,
                "anchor-host",
                self.placement.into(),
                offset,
                bubble,
                24,
            ));
        }

        let mut root = div().id(self.id.clone()).relative().w_full().child(trigger);
        gpui::Refineable::refine(gpui::Styled::style(&mut root), &self.style);
        root
    }
}

impl crate::contracts::ComponentThemeOverridable for WithTooltip {
    fn local_theme_mut(&mut self) -> &mut LocalTheme {
        &mut self.theme
    }
}

crate::impl_placeable!(WithTooltip, TooltipPlacement);

impl gpui::Styled for WithTooltip {
    fn style(&mut self) -> &mut gpui::StyleRefinement {
        &mut self.style
    }
}
