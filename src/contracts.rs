use crate::components::ErrorSource;
use crate::motion::MotionConfig;
use crate::style::FieldLayout;
use crate::theme::{ComponentPatch, LocalTheme};
use gpui::SharedString;

pub trait Disableable: Sized {
    fn disabled(self, value: bool) -> Self;
}

pub trait Placeable<P>: Sized {
    fn placement(self, value: P) -> Self;
}

#[macro_export]
macro_rules! impl_disableable {
    ($type:ty) => {
        impl $crate::contracts::Disableable for $type {
            fn disabled(self, value: bool) -> Self {
                <$type>::disabled(self, value)
            }
        }
    };
}

#[macro_export]
macro_rules! impl_placeable {
    ($type:ty, $placement:ty) => {
        impl $crate::contracts::Placeable<$placement> for $type {
            fn placement(self, value: $placement) -> Self {
                <$type>::placement(self, value)
            }
        }
    };
}

/// Shared surface of labelled form fields.
pub trait FieldLike: Sized {
    fn label(self, value: impl Into<SharedString>) -> Self;
    fn hide_label(self, value: bool) -> Self;
    fn error(self, value: impl Into<ErrorSource>) -> Self;
    fn layout(self, value: FieldLayout) -> Self;
}

#[macro_export]
macro_rules! impl_field_like {
    ($type:ty) => {
        impl $crate::contracts::FieldLike for $type {
            fn label(self, value: impl Into<gpui::SharedString>) -> Self {
                <$type>::label(self, value)
            }

            fn hide_label(self, value: bool) -> Self {
                <$type>::hide_label(self, value)
            }

            fn error(self, value: impl Into<$crate::components::ErrorSource>) -> Self {
                <$type>::error(self, value)
            }

            fn layout(self, value: $crate::style::FieldLayout) -> Self {
                <$type>::orientation(self, value)
            }
        }
    };
}

pub trait MotionAware: Sized {
    fn motion(self, value: MotionConfig) -> Self;
}

pub trait ComponentThemeOverridable: Sized {
    fn local_theme_mut(&mut self) -> &mut LocalTheme;

    fn with_theme_patch(mut self, patch: ComponentPatch) -> Self {
        self.local_theme_mut().set_component_patch(Some(patch));
        self
    }

    fn theme(mut self, configure: impl FnOnce(ComponentPatch) -> ComponentPatch) -> Self {
        self.local_theme_mut().update_component_patch(configure);
        self
    }

    fn clear_theme_patch(mut self) -> Self {
        self.local_theme_mut().set_component_patch(None);
        self
    }
}
