//! Knowledge view state and display lookups shared by both front-ends.

pub mod state;
pub mod style;

pub use state::{ViewAction, ViewMode, ViewState};
pub use style::Swatch;
