pub mod app;
pub mod calendar;
pub mod color;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod normalize;
pub mod notify;
pub mod settings;
pub mod source;
pub mod state;
pub mod tooltip;
pub mod ui;
pub mod view;

pub use app::router;
pub use settings::Settings;
pub use source::SessionSource;
pub use state::AppState;
