//! Application module: the session model driven by the TUI runtime.
//!
//! `App` (in `app::model`) owns the catalog store and all per-screen state.
//! Forms, the simulated player and notifications live in sibling modules.

mod forms;
mod model;
mod player;
mod toast;

pub use forms::*;
pub use model::*;
pub use player::*;
pub use toast::*;
