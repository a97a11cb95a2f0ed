// Candidate roster: loading, ranking, selection and the dashboard board
// that ties them together for the HTTP handlers.

pub mod board;
pub mod handlers;
pub mod loader;
pub mod ranking;
pub mod selection;
pub mod tabs;

pub use board::Board;
pub use loader::spawn_reload;
