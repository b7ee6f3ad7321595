use std::sync::Arc;

use crate::motion::MotionConfig;
use crate::theme::Theme;

#[derive(Default)]
pub struct CalmProvider {
    theme: Arc<Theme>,
    motion: MotionConfig,
}

impl gpui::Global for CalmProvider {}

impl CalmProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_theme(mut self, configure: impl FnOnce(Arc<Theme>) -> Theme) -> Self {
        self.theme = configure(self.theme).into();
        self
    }

    pub fn set_motion(mut self, motion: MotionConfig) -> Self {
        self.motion = motion;
        self
    }

    pub fn init(self, cx: &mut gpui::App) {
        log::debug!("installing calmui field provider");
        cx.set_global(self);
    }

    pub fn theme(cx: &gpui::App) -> Arc<Theme> {
        cx.global::<CalmProvider>().theme.clone()
    }

    /// Falls back to the default theme when no provider was installed.
    pub fn theme_arc_or_default(cx: &gpui::App) -> Arc<Theme> {
        cx.try_global::<CalmProvider>()
            .map(|provider| provider.theme.clone())
            .unwrap_or_default()
    }

    pub fn motion_or_default(cx: &gpui::App) -> MotionConfig {
        cx.try_global::<CalmProvider>()
            .map(|provider| provider.motion)
            .unwrap_or_default()
    }
}
