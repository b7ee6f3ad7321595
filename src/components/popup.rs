use gpui::{
    AnyElement, Corner, InteractiveElement, IntoElement, ParentElement, Styled, anchored,
    deferred, div, point, px,
};

use crate::id::ComponentId;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PopupPlacement {
    Top,
    Right,
    Bottom,
    Left,
}

impl PopupPlacement {
    /// Corner of the floating panel pinned to the host.
    pub fn anchor_corner(self) -> Corner {
        match self {
            Self::Top => Corner::BottomLeft,
            Self::Right => Corner::TopLeft,
            Self::Bottom => Corner::TopLeft,
            Self::Left => Corner::TopRight,
        }
    }

    pub fn offset(self, offset_px: f32) -> (f32, f32) {
        let offset_px = offset_px.max(0.0);
        match self {
            Self::Top => (0.0, -offset_px),
            Self::Right => (offset_px, 0.0),
            Self::Bottom => (0.0, offset_px),
            Self::Left => (-offset_px, 0.0),
        }
    }
}

/// Zero-sized host at the edge of the trigger that floats `floating` above
/// everything else.
pub fn anchored_host(
    id: &ComponentId,
    slot: &str,
    placement: PopupPlacement,
    offset_px: f32,
    floating: AnyElement,
    priority: usize,
) -> AnyElement {
    let (offset_x, offset_y) = placement.offset(offset_px);
    let anchored_panel = anchored()
        .anchor(placement.anchor_corner())
        .offset(point(px(offset_x), px(offset_y)))
        .snap_to_window_with_margin(px(8.0))
        .child(floating);

    let host = div().id(id.slot(slot)).absolute().w(px(0.0)).h(px(0.0));
    let host = match placement {
        PopupPlacement::Top | PopupPlacement::Left => host.top_0().left_0(),
        PopupPlacement::Right => host.top_0().right_0(),
        PopupPlacement::Bottom => host.bottom_0().left_0(),
    };
    host.child(deferred(anchored_panel).priority(priority))
        .into_any_element()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn right_placement_pushes_panel_away_horizontally() {
        assert_eq!(PopupPlacement::Right.offset(8.0), (8.0, 0.0));
        assert_eq!(PopupPlacement::Right.anchor_corner(), Corner::TopLeft);
    }

    #[test]
    fn negative_offsets_are_clamped() {
        assert_eq!(PopupPlacement::Top.offset(-4.0), (0.0, -0.0));
        assert_eq!(PopupPlacement::Left.offset(3.0), (-3.0, 0.0));
    }
}
