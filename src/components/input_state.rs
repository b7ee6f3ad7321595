use crate::style::InputKind;

/// Local state of a stateful input, alive from creation of the view until it is
/// dropped.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InteractionState {
    current_kind: InputKind,
    auto_focused: bool,
}

impl InteractionState {
    pub fn new(starting_kind: InputKind) -> Self {
        Self {
            current_kind: starting_kind,
            auto_focused: false,
        }
    }

    pub fn current_kind(&self) -> &InputKind {
        &self.current_kind
    }

    /// Flips between secret and plain text. Any non-secret kind becomes secret.
    pub fn toggle_kind(&mut self) -> &InputKind {
        let next = if self.current_kind.is_secret() {
            InputKind::Text
        } else {
            InputKind::Password
        };
        log::debug!("input kind toggled {} -> {}", self.current_kind, next);
        self.current_kind = next;
        &self.current_kind
    }

    pub fn has_auto_focused(&self) -> bool {
        self.auto_focused
    }

    /// Returns true exactly once per state: the first time focus is requested while
    /// the element exists.
    pub fn claim_auto_focus(&mut self, start_focused: bool, element_ready: bool) -> bool {
        if !start_focused || !element_ready || self.auto_focused {
            return false;
        }
        self.auto_focused = true;
        true
    }
}

/// Reference to the rendered field element, either supplied by the caller or created
/// by the wrapper. Resolved once when the wrapper is built.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ElementRef<H> {
    Borrowed(H),
    Owned(H),
}

impl<H> ElementRef<H> {
    pub fn resolve(external: Option<H>, create: impl FnOnce() -> H) -> Self {
        match external {
            Some(handle) => Self::Borrowed(handle),
            None => Self::Owned(create()),
        }
    }

    pub fn handle(&self) -> &H {
        match self {
            Self::Borrowed(handle) | Self::Owned(handle) => handle,
        }
    }

    pub fn is_owned(&self) -> bool {
        matches!(self, Self::Owned(_))
    }
}
