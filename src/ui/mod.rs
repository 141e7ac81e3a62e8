//! Terminal UI: a single game view with a column selector.

mod app;
pub mod board_widget;
mod game_view;

pub use app::App;
