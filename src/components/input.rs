use std::{
    collections::HashMap,
    rc::Rc,
    sync::{LazyLock, Mutex},
    time::Duration,
};

use gpui::{
    Animation, AnimationExt, AnyElement, ClickEvent, Context, FocusHandle, Focusable,
    FontWeight, InteractiveElement, IntoElement, ParentElement, Render, RenderOnce,
    SharedString, StatefulInteractiveElement, Styled, Window, div, px,
};

use crate::contracts::{ComponentThemeOverridable, MotionAware};
use crate::id::ComponentId;
use crate::motion::MotionConfig;
use crate::provider::CalmProvider;
use crate::style::{Appearance, FieldLayout, InputKind};
use crate::theme::{LocalTheme, Theme};
use crate::tokens::{Opacity, Typography};

use super::error_state::ErrorSource;
use super::icon::Icon;
use super::input_anatomy::{AnatomyInput, IconPart, InputAnatomy, LabelPart};
use super::input_state::{ElementRef, InteractionState};
use super::input_style::{IconStyle, InputStyle, LabelStyle, LayoutStyle};
use super::link::{ClickHandler, Link};
use super::text_field::{ChangeHandler, SubmitHandler, TextField};
use super::tooltip::{TooltipMessage, WithTooltip};

static INPUT_FOCUS_HANDLES: LazyLock<Mutex<HashMap<String, FocusHandle>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

/// Display configuration of a labelled input.
#[derive(Clone)]
pub struct InputProps {
    id: ComponentId,
    value: SharedString,
    label: SharedString,
    hide_label: bool,
    orientation: FieldLayout,
    appearance: Appearance,
    icon: Option<SharedString>,
    error: Option<ErrorSource>,
    suppress_error_message: bool,
    last_error_value: Option<SharedString>,
    kind: InputKind,
    start_focused: bool,
    class_name: Option<SharedString>,
    placeholder: Option<SharedString>,
    disabled: bool,
    read_only: bool,
    max_length: Option<usize>,
    motion: Option<MotionConfig>,
    theme: LocalTheme,
    style: gpui::StyleRefinement,
    focus_handle: Option<FocusHandle>,
    on_change: Option<ChangeHandler>,
    on_submit: Option<SubmitHandler>,
}

impl InputProps {
    pub fn new(id: impl Into<ComponentId>, label: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            value: SharedString::default(),
            label: label.into(),
            hide_label: false,
            orientation: FieldLayout::Vertical,
            appearance: Appearance::Default,
            icon: None,
            error: None,
            suppress_error_message: false,
            last_error_value: None,
            kind: InputKind::Text,
            start_focused: false,
            class_name: None,
            placeholder: None,
            disabled: false,
            read_only: false,
            max_length: None,
            motion: None,
            theme: LocalTheme::default(),
            style: gpui::StyleRefinement::default(),
            focus_handle: None,
            on_change: None,
            on_submit: None,
        }
    }

    pub fn value(mut self, value: impl Into<SharedString>) -> Self {
        self.value = value.into();
        self
    }

    pub fn label(mut self, value: impl Into<SharedString>) -> Self {
        self.label = value.into();
        self
    }

    pub fn hide_label(mut self, value: bool) -> Self {
        self.hide_label = value;
        self
    }

    pub fn orientation(mut self, value: FieldLayout) -> Self {
        self.orientation = value;
        self
    }

    pub fn appearance(mut self, value: Appearance) -> Self {
        self.appearance = value;
        self
    }

    pub fn icon(mut self, name: impl Into<SharedString>) -> Self {
        self.icon = Some(name.into());
        self
    }

    pub fn error(mut self, value: impl Into<ErrorSource>) -> Self {
        self.error = Some(value.into());
        self
    }

    /// Error derived from the current value on every render.
    pub fn error_fn(mut self, derive: impl Fn(&str) -> Option<SharedString> + 'static) -> Self {
        self.error = Some(ErrorSource::derive(derive));
        self
    }

    pub fn suppress_error_message(mut self, value: bool) -> Self {
        self.suppress_error_message = value;
        self
    }

    /// Value the current error was computed for; the message hides once the value
    /// moves away from it.
    pub fn last_error_value(mut self, value: impl Into<SharedString>) -> Self {
        self.last_error_value = Some(value.into());
        self
    }

    pub fn kind(mut self, value: InputKind) -> Self {
        self.kind = value;
        self
    }

    pub fn start_focused(mut self, value: bool) -> Self {
        self.start_focused = value;
        self
    }

    pub fn class_name(mut self, value: impl Into<SharedString>) -> Self {
        self.class_name = Some(value.into());
        self
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

    pub fn id(&self) -> &ComponentId {
        &self.id
    }

    pub fn current_value(&self) -> &SharedString {
        &self.value
    }

    pub fn starting_kind(&self) -> &InputKind {
        &self.kind
    }

    pub fn starts_focused(&self) -> bool {
        self.start_focused
    }
}

crate::impl_field_like!(InputProps);
crate::impl_disableable!(InputProps);

impl MotionAware for InputProps {
    fn motion(mut self, value: MotionConfig) -> Self {
        self.motion = Some(value);
        self
    }
}

impl ComponentThemeOverridable for InputProps {
    fn local_theme_mut(&mut self) -> &mut LocalTheme {
        &mut self.theme
    }
}

impl gpui::Styled for InputProps {
    fn style(&mut self) -> &mut gpui::StyleRefinement {
        &mut self.style
    }
}

/// Stateless labelled input: renders exactly what its props describe.
#[derive(IntoElement)]
pub struct PureInput {
    props: InputProps,
    current_kind: Option<InputKind>,
    on_action_click: Option<ClickHandler>,
}

impl PureInput {
    pub fn new(props: InputProps) -> Self {
        Self {
            props,
            current_kind: None,
            on_action_click: None,
        }
    }

    /// Kind the field shows right now; defaults to the starting kind.
    pub fn current_kind(mut self, value: InputKind) -> Self {
        self.current_kind = Some(value);
        self
    }

    pub fn on_action_click(
        mut self,
        handler: impl Fn(&ClickEvent, &mut Window, &mut gpui::App) + 'static,
    ) -> Self {
        self.on_action_click = Some(Rc::new(handler));
        self
    }

    pub fn anatomy(&self, theme: &Theme) -> InputAnatomy {
        let props = &self.props;
        InputAnatomy::resolve(
            theme,
            AnatomyInput {
                id: &props.id,
                value: &props.value,
                label: &props.label,
                hide_label: props.hide_label,
                orientation: props.orientation,
                appearance: props.appearance,
                icon: props.icon.as_deref(),
                error: props.error.as_ref(),
                suppress_error_message: props.suppress_error_message,
                last_error_value: props.last_error_value.as_deref(),
                starting_kind: &props.kind,
                current_kind: self.current_kind.as_ref().unwrap_or(&props.kind),
                class_name: props.class_name.as_ref(),
            },
        )
    }

    fn resolved_focus_handle(&self, cx: &gpui::App) -> FocusHandle {
        if let Some(focus_handle) = self.props.focus_handle.as_ref() {
            return focus_handle.clone();
        }
        if let Ok(mut handles) = INPUT_FOCUS_HANDLES.lock() {
            return handles
                .entry(self.props.id.to_string())
                .or_insert_with(|| cx.focus_handle())
                .clone();
        }
        cx.focus_handle()
    }

    fn render_label(
        &self,
        label: LabelPart,
        style: &LabelStyle,
        focus_handle: &FocusHandle,
    ) -> AnyElement {
        let theme = &self.props.theme;
        let mut text = div()
            .text_size(px(style.font_size))
            .text_color(theme.resolve_hsla(&style.color))
            .child(label.text);
        if style.bold {
            text = text.font_weight(FontWeight::BOLD);
        }
        if style.code_font {
            text = text.font_family(Typography::FAMILY_CODE);
        }

        let handle_for_click = focus_handle.clone();
        let wrapper = div()
            .id(self.props.id.slot("label"))
            .on_click(move |_, window, cx| window.focus(&handle_for_click, cx))
            .child(text);
        if label.visually_hidden {
            wrapper
                .absolute()
                .w(px(1.0))
                .h(px(1.0))
                .overflow_hidden()
                .opacity(0.0)
                .into_any_element()
        } else {
            wrapper.into_any_element()
        }
    }

    fn render_icon(
        &self,
        part: IconPart,
        style: &IconStyle,
        focused: bool,
        motion: MotionConfig,
        message: Option<&SharedString>,
    ) -> AnyElement {
        let color = if focused {
            style.color_focus.clone()
        } else {
            style.color.clone()
        };
        let glyph = Icon::named(part.name.to_string())
            .with_id(self.props.id.slot_name("icon"))
            .size(style.box_size)
            .color_token(color);
        let holder = div()
            .absolute()
            .top_0()
            .bottom_0()
            .left(px(style.left))
            .flex()
            .items_center()
            .child(glyph);

        if !(part.jiggle && motion.animates()) {
            return holder.into_any_element();
        }
        let jiggle = motion.jiggle;
        let replay_key = message.map(ToString::to_string).unwrap_or_default();
        holder
            .with_animation(
                self.props.id.slot(format!("icon-jiggle-{replay_key}")),
                Animation::new(Duration::from_millis(u64::from(jiggle.duration_ms))),
                move |this, delta| this.ml(px(jiggle.offset_at(delta))),
            )
            .into_any_element()
    }
}

impl RenderOnce for PureInput {
    fn render(mut self, window: &mut Window, cx: &mut gpui::App) -> impl IntoElement {
        self.props.theme.sync_from_provider(cx);
        let motion = self
            .props
            .motion
            .unwrap_or_else(|| CalmProvider::motion_or_default(cx));
        let theme = self.props.theme.clone();
        let InputAnatomy {
            style,
            error,
            label,
            icon,
            field,
            tooltip,
            action,
            ..
        } = self.anatomy(&theme);
        let InputStyle {
            layout,
            label: label_style,
            field: field_style,
            icon: icon_style,
        } = style;

        let focus_handle = self.resolved_focus_handle(cx);
        let focused = focus_handle.is_focused(window);
        let label = self.render_label(label, &label_style, &focus_handle);

        let ring = if focused {
            field_style.ring_focus.as_ref()
        } else {
            field_style.ring.as_ref()
        };
        let mut field_box = div()
            .id(self.props.id.slot("box"))
            .relative()
            .flex()
            .items_center()
            .w_full()
            .rounded(px(field_style.radius))
            .bg(theme.resolve_hsla(&field_style.bg));
        if field_style.ring.is_some() || field_style.ring_focus.is_some() {
            let ring = ring
                .map(|color| theme.resolve_hsla(color))
                .unwrap_or_else(gpui::transparent_black);
            field_box = field_box.border(px(1.0)).border_color(ring);
        }
        if self.props.disabled {
            field_box = field_box.opacity(Opacity::DISABLED);
        }

        let mut text_field = TextField::new(field)
            .field_style(field_style)
            .focus_handle(focus_handle.clone())
            .disabled(self.props.disabled)
            .inherit_opacity()
            .read_only(self.props.read_only)
            .on_change_handler(self.props.on_change.clone())
            .on_submit_handler(self.props.on_submit.clone())
            .theme_handle(theme.clone());
        if let Some(placeholder) = self.props.placeholder.clone() {
            text_field = text_field.placeholder(placeholder);
        }
        if let Some(max_length) = self.props.max_length {
            text_field = text_field.max_length(max_length);
        }

        let mut wrapped = WithTooltip::new()
            .with_id(self.props.id.slot_name("tooltip"))
            .placement(tooltip.placement)
            .trigger(tooltip.trigger)
            .start_open(tooltip.start_open)
            .has_chrome(tooltip.has_chrome)
            .child(text_field);
        if let Some(message) = tooltip.message {
            wrapped = wrapped.tooltip(TooltipMessage::new(message).with_id(tooltip.message_id));
        }
        field_box = field_box.child(wrapped);

        // The icon precedes the field in reading order but is painted after it so it stays on top.
        if let (Some(part), Some(icon_style)) = (icon, icon_style.as_ref()) {
            field_box = field_box.child(self.render_icon(
                part,
                icon_style,
                focused,
                motion,
                error.message.as_ref(),
            ));
        }

        if let Some(action) = action {
            let mut link = Link::new(action.label)
                .with_id(self.props.id.slot_name("action"))
                .is_button(action.is_button)
                .tertiary(action.tertiary)
                .disabled(self.props.disabled)
                .inherit_opacity();
            if let Some(handler) = self.on_action_click.clone() {
                link = link.on_click(move |event, window, cx| (handler)(event, window, cx));
            }
            field_box = field_box.child(
                div()
                    .absolute()
                    .top_0()
                    .bottom_0()
                    .right_0()
                    .flex()
                    .items_center()
                    .child(link),
            );
        }

        let mut root = match layout {
            LayoutStyle::Row { label_gap } => div()
                .id(self.props.id.clone())
                .relative()
                .flex()
                .flex_row()
                .items_center()
                .w_full()
                .child(div().flex_none().pr(px(label_gap)).child(label))
                .child(div().flex_1().min_w_0().child(field_box)),
            LayoutStyle::Stacked => div()
                .id(self.props.id.clone())
                .relative()
                .flex()
                .flex_col()
                .w_full()
                .child(div().mb(px(label_style.margin_bottom)).child(label))
                .child(field_box),
        };
        gpui::Refineable::refine(gpui::Styled::style(&mut root), &self.props.style);
        root
    }
}

/// Stateful input view. Keeps the current kind and the auto-focus latch for as
/// long as the entity lives; everything else comes from its props.
pub struct Input {
    props: InputProps,
    state: InteractionState,
    element: ElementRef<FocusHandle>,
}

impl Input {
    pub fn new(props: InputProps, _window: &mut Window, cx: &mut Context<Self>) -> Self {
        let element = ElementRef::resolve(props.focus_handle.clone(), || cx.focus_handle());
        let state = InteractionState::new(props.kind.clone());
        Self {
            props,
            state,
            element,
        }
    }

    /// Replaces the props. The current kind and the element reference survive.
    pub fn set_props(&mut self, props: InputProps, cx: &mut Context<Self>) {
        self.props = props;
        cx.notify();
    }

    pub fn set_value(&mut self, value: impl Into<SharedString>, cx: &mut Context<Self>) {
        self.props.value = value.into();
        cx.notify();
    }

    pub fn value(&self) -> &SharedString {
        &self.props.value
    }

    pub fn props(&self) -> &InputProps {
        &self.props
    }

    pub fn current_kind(&self) -> &InputKind {
        self.state.current_kind()
    }

    pub fn toggle_kind(&mut self, cx: &mut Context<Self>) {
        self.state.toggle_kind();
        cx.notify();
    }

    pub fn has_auto_focused(&self) -> bool {
        self.state.has_auto_focused()
    }

    pub fn owns_focus_handle(&self) -> bool {
        self.element.is_owned()
    }
}

impl Focusable for Input {
    fn focus_handle(&self, _cx: &gpui::App) -> FocusHandle {
        self.element.handle().clone()
    }
}

impl Render for Input {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let handle = self.element.handle().clone();
        if self.state.claim_auto_focus(self.props.starts_focused(), true) {
            let handle = handle.clone();
            window.defer(cx, move |window, cx| window.focus(&handle, cx));
        }

        let changed = cx.listener(|this, value: &SharedString, window, cx| {
            this.props.value = value.clone();
            if let Some(handler) = this.props.on_change.clone() {
                (handler)(value.clone(), window, cx);
            }
            cx.notify();
        });
        let mut props = self.props.clone();
        props.focus_handle = Some(handle);
        props.on_change = Some(Rc::new(
            move |value: SharedString, window: &mut Window, cx: &mut gpui::App| {
                changed(&value, window, cx)
            },
        ));

        PureInput::new(props)
            .current_kind(self.state.current_kind().clone())
            .on_action_click(cx.listener(|this, _: &ClickEvent, _window, cx| {
                cx.stop_propagation();
                this.toggle_kind(cx);
            }))
    }
}
