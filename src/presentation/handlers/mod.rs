mod analyze;
mod assets;
mod health;
mod report;
mod session;

pub use analyze::analyze_handler;
pub use assets::asset_handler;
pub use health::health_handler;
pub use report::report_handler;
pub use session::{SessionResponse, session_handler, session_reset_handler};
