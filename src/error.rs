use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown appearance `{0}`, expected one of default, secondary, tertiary, pill, code")]
    UnknownAppearance(String),

    #[error("unknown orientation `{0}`, expected vertical or horizontal")]
    UnknownOrientation(String),

    #[error("input kind must not be empty")]
    EmptyInputKind,

    #[error("icon pack `{pack}` could not be extracted: {source}")]
    IconPack {
        pack: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
