mod control;
mod error_state;
mod icon;
mod input;
mod input_anatomy;
mod input_state;
mod input_style;
mod link;
mod popup;
mod text_field;
mod text_input_state;
mod tooltip;

#[cfg(test)]
mod test_input_behavior;

pub use error_state::{ErrorResolution, ErrorSource, ErrorStateInput};
pub use icon::Icon;
pub use input::{Input, InputProps, PureInput};
pub use input_anatomy::{
    ActionPart, AnatomyInput, FieldAttributes, IconPart, InputAnatomy, LabelPart, TooltipPart,
};
pub use input_state::{ElementRef, InteractionState};
pub use input_style::{
    FieldStyle, IconStyle, InputStyle, LabelStyle, LayoutStyle, StyleInput,
};
pub use link::{ClickHandler, Link};
pub use popup::PopupPlacement;
pub use text_field::{ChangeHandler, FieldKey, SubmitHandler, TextField, display_value};
pub use text_input_state::InputState;
pub use tooltip::{
    TooltipMessage, TooltipOpenInput, TooltipPlacement, TooltipTrigger, WithTooltip,
    resolve_open,
};
