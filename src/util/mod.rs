//! Utility types shared by the filtering stages

mod filtered;
mod text;

pub use filtered::Filtered;
pub use text::clip;
