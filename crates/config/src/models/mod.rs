pub mod api_observability;
pub mod app_config;
pub mod logging;
pub mod store;

pub use api_observability::*;
pub use app_config::*;
pub use logging::*;
pub use store::*;
