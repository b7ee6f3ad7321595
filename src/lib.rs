pub mod components;
pub mod contracts;
pub mod error;
pub mod icon;
pub mod id;
pub mod motion;
pub mod prelude;
pub mod provider;
pub mod style;
pub mod theme;
pub mod tokens;

pub use error::{Error, Result};
pub use provider::CalmProvider;
