pub mod config;
pub mod core;
pub mod detection;

pub use crate::core::converter::{to_arabic, to_roman};
pub use crate::core::ConvertError;
pub use detection::{classify, InputKind};
