//! Interactive knowledge base browser and playground.
//!
//! Layout:
//! - Tab bar with quick stats
//! - Knowledge tab: search bar, results (grid or list), page controls,
//!   category panel when nothing is filtered, key hints
//! - Detail view replacing the results for the opened item
//! - Playground tab: editor and simulated output side by side

mod app;
mod event_handler;
mod renderer;
mod state;
mod theme;

use anyhow::Result;

pub use app::BrowseApp;

use super::AppContext;

/// Entry point for `codespace browse`.
pub fn run_browse(ctx: AppContext) -> Result<()> {
    let mut app = BrowseApp::new(ctx)?;
    app.run()
}
