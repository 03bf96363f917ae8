//! CodeMaster - a terminal quiz for practising JavaScript and React
//!
//! Multiple-choice questions per topic with canned explanations, plus
//! on-demand explanations from Claude when a question needs more context.

pub mod app;
pub mod catalog;
pub mod config;
pub mod explain;
pub mod markdown;
pub mod quiz;
pub mod syntax;
pub mod theme;
pub mod ui;

pub use app::App;
pub use catalog::{Catalog, Topic};
pub use config::Config;
pub use quiz::QuizSession;
pub use theme::Theme;
