pub use crate::CalmProvider;
pub use crate::components::{
    ErrorSource, Icon, Input, InputProps, Link, PureInput, TextField, TooltipMessage,
    TooltipPlacement, TooltipTrigger, WithTooltip,
};
pub use crate::contracts::{
    ComponentThemeOverridable, Disableable, FieldLike, MotionAware, Placeable,
};
pub use crate::icon::IconRegistry;
pub use crate::id::ComponentId;
pub use crate::motion::{JiggleConfig, MotionConfig, MotionLevel};
pub use crate::style::{Appearance, FieldLayout, InputKind};
pub use crate::theme::{ColorValue, ComponentPatch, InputPatch, Theme, ThemePatch};
