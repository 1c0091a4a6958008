mod board;
mod completed;

pub use board::BoardView;
pub use completed::CompletedView;
