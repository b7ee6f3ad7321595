use std::fmt;
use std::rc::Rc;

use gpui::SharedString;

type DeriveFn = Rc<dyn Fn(&str) -> Option<SharedString>>;

/// Caller-supplied validation feedback: a literal message or a function of the
/// current value.
#[derive(Clone)]
pub enum ErrorSource {
    Message(SharedString),
    Derive(DeriveFn),
}

impl ErrorSource {
    pub fn message(value: impl Into<SharedString>) -> Self {
        Self::Message(value.into())
    }

    pub fn derive(derive: impl Fn(&str) -> Option<SharedString> + 'static) -> Self {
        Self::Derive(Rc::new(derive))
    }

    /// Empty messages count as no message.
    pub fn evaluate(&self, value: &str) -> Option<SharedString> {
        let message = match self {
            Self::Message(message) => Some(message.clone()),
            Self::Derive(derive) => derive(value),
        };
        message.filter(|message| !message.is_empty())
    }

    /// Whether the source itself marks the field invalid. A derive function
    /// always does, whatever it returns for the current value.
    pub fn is_raised(&self) -> bool {
        match self {
            Self::Message(message) => !message.is_empty(),
            Self::Derive(_) => true,
        }
    }
}

impl fmt::Debug for ErrorSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Message(message) => f.debug_tuple("Message").field(message).finish(),
            Self::Derive(_) => f.write_str("Derive(..)"),
        }
    }
}

impl From<&'static str> for ErrorSource {
    fn from(value: &'static str) -> Self {
        Self::message(value)
    }
}

impl From<String> for ErrorSource {
    fn from(value: String) -> Self {
        Self::message(value)
    }
}

impl From<SharedString> for ErrorSource {
    fn from(value: SharedString) -> Self {
        Self::Message(value)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct ErrorStateInput<'a> {
    pub error: Option<&'a ErrorSource>,
    pub value: &'a str,
    pub last_error_value: Option<&'a str>,
    pub suppress_message: bool,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ErrorResolution {
    /// Raw error signal before the staleness check; backs `aria-invalid` and
    /// `data-error`.
    pub signal: bool,
    /// Message still live after the staleness check, whether or not it is shown.
    pub message: Option<SharedString>,
    /// Tooltip chrome is armed.
    pub chrome: bool,
}

impl ErrorResolution {
    pub fn resolve(input: ErrorStateInput<'_>) -> Self {
        let evaluated = input.error.and_then(|error| error.evaluate(input.value));
        let signal = input.error.is_some_and(ErrorSource::is_raised);

        let stale = input
            .last_error_value
            .filter(|marker| !marker.is_empty())
            .is_some_and(|marker| marker != input.value);
        let message = if stale { None } else { evaluated };
        let chrome = message.is_some() && !input.suppress_message;

        Self {
            signal,
            message,
            chrome,
        }
    }

    pub fn is_live(&self) -> bool {
        self.message.is_some()
    }

    pub fn visible_message(&self) -> Option<&SharedString> {
        self.message.as_ref().filter(|_| self.chrome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(
        error: Option<&ErrorSource>,
        value: &str,
        last_error_value: Option<&str>,
        suppress_message: bool,
    ) -> ErrorResolution {
        ErrorResolution::resolve(ErrorStateInput {
            error,
            value,
            last_error_value,
            suppress_message,
        })
    }

    #[test]
    fn literal_message_is_shown_with_chrome() {
        let error = ErrorSource::message("Required");
        let resolved = resolve(Some(&error), "", None, false);
        assert!(resolved.signal);
        assert!(resolved.chrome);
        assert_eq!(resolved.visible_message().map(|m| m.as_ref()), Some("Required"));
    }

    #[test]
    fn no_error_resolves_to_clean_state() {
        assert_eq!(resolve(None, "abc", Some("x"), true), ErrorResolution::default());
    }

    #[test]
    fn empty_literal_counts_as_no_error() {
        let error = ErrorSource::message("");
        let resolved = resolve(Some(&error), "abc", None, false);
        assert!(!resolved.signal);
        assert!(!resolved.chrome);
    }

    #[test]
    fn derived_message_follows_the_value() {
        let error = ErrorSource::derive(|value| {
            (value.len() < 3).then(|| SharedString::from(format!("{} is too short", value)))
        });
        let short = resolve(Some(&error), "ab", None, false);
        assert_eq!(short.message.as_ref().map(|m| m.as_ref()), Some("ab is too short"));
        assert!(short.chrome);

        let long = resolve(Some(&error), "abcd", None, false);
        assert!(long.signal);
        assert!(!long.chrome);
        assert!(long.message.is_none());
    }

    #[test]
    fn derive_function_raises_the_signal_even_without_a_message() {
        let error = ErrorSource::derive(|_| None);
        let resolved = resolve(Some(&error), "fine", None, false);
        assert!(resolved.signal);
        assert!(!resolved.is_live());
        assert!(!resolved.chrome);
    }

    #[test]
    fn stale_marker_clears_message_but_keeps_signal() {
        let error = ErrorSource::message("Taken");
        let resolved = resolve(Some(&error), "alice2", Some("alice"), false);
        assert!(resolved.signal);
        assert!(resolved.message.is_none());
        assert!(!resolved.chrome);
    }

    #[test]
    fn matching_marker_keeps_message() {
        let error = ErrorSource::message("Taken");
        let resolved = resolve(Some(&error), "alice", Some("alice"), false);
        assert!(resolved.is_live());
        assert!(resolved.chrome);
    }

    #[test]
    fn empty_marker_is_ignored() {
        let error = ErrorSource::message("Taken");
        let resolved = resolve(Some(&error), "alice", Some(""), false);
        assert!(resolved.is_live());
    }

    #[test]
    fn suppression_hides_chrome_but_not_the_live_message() {
        let error = ErrorSource::message("Required");
        let resolved = resolve(Some(&error), "", None, true);
        assert!(resolved.signal);
        assert!(resolved.is_live());
        assert!(!resolved.chrome);
        assert!(resolved.visible_message().is_none());
    }

    #[test]
    fn debug_output_does_not_expose_closures() {
        let error = ErrorSource::derive(|_| None);
        assert_eq!(format!("{error:?}"), "Derive(..)");
    }
}
