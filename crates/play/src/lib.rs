//! Terminal front end: board rendering and the human-versus-engine loop.

pub mod game;
pub mod render;

pub use game::run_game;
pub use render::render_board;
