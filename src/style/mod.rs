use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Visual treatment of a field. Only styling changes between appearances, never the
/// composition of the rendered parts.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum Appearance {
    #[default]
    Default,
    Secondary,
    Tertiary,
    Pill,
    Code,
}

impl Appearance {
    pub const ALL: [Appearance; 5] = [
        Self::Default,
        Self::Secondary,
        Self::Tertiary,
        Self::Pill,
        Self::Code,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Secondary => "secondary",
            Self::Tertiary => "tertiary",
            Self::Pill => "pill",
            Self::Code => "code",
        }
    }
}

impl fmt::Display for Appearance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Appearance {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim();
        Self::ALL
            .into_iter()
            .find(|appearance| appearance.as_str().eq_ignore_ascii_case(normalized))
            .ok_or_else(|| Error::UnknownAppearance(value.to_string()))
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum FieldLayout {
    #[default]
    Vertical,
    Horizontal,
}

impl FieldLayout {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Vertical => "vertical",
            Self::Horizontal => "horizontal",
        }
    }
}

impl fmt::Display for FieldLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldLayout {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "vertical" => Ok(Self::Vertical),
            "horizontal" => Ok(Self::Horizontal),
            _ => Err(Error::UnknownOrientation(value.to_string())),
        }
    }
}

/// Native kind of the underlying field element.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum InputKind {
    #[default]
    Text,
    Password,
    Email,
    Number,
    Search,
    Tel,
    Url,
    Other(String),
}

impl InputKind {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text => "text",
            Self::Password => "password",
            Self::Email => "email",
            Self::Number => "number",
            Self::Search => "search",
            Self::Tel => "tel",
            Self::Url => "url",
            Self::Other(name) => name,
        }
    }

    /// Content of a secret kind is masked when displayed.
    pub fn is_secret(&self) -> bool {
        matches!(self, Self::Password)
    }
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InputKind {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        Ok(match normalized.as_str() {
            "" => return Err(Error::EmptyInputKind),
            "text" => Self::Text,
            "password" => Self::Password,
            "email" => Self::Email,
            "number" => Self::Number,
            "search" => Self::Search,
            "tel" => Self::Tel,
            "url" => Self::Url,
            _ => Self::Other(normalized),
        })
    }
}
