pub mod replay;
pub mod tui;
