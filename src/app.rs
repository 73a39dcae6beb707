//! Application module: exposes the app model used by the TUI and runtime.
//!
//! The `App` model lives in `app::model` and wraps the playlist controller
//! with the cursor used for keyboard navigation.

mod model;

pub use model::*;

#[cfg(test)]
mod tests;
