//! Terminal boundary layer: board rendering, the welcome banner, and the
//! line-based interactive session loop.

mod render;
mod session;

pub use render::{instructions, render_board, ALIVE_GLYPH, DEAD_GLYPH};
pub use session::{Command, Session};
