//! Output formats for a loaded leaderboard.

mod ascii;
#[cfg(feature = "full")]
mod command;
#[cfg(feature = "full")]
mod export;
pub mod html;

pub use ascii::render_ascii;
#[cfg(feature = "full")]
pub use command::{OutputFormat, run};
#[cfg(feature = "full")]
pub use export::{render_csv, render_json};
pub use html::{render_loaded, render_loading, render_page};
