pub mod clock;
pub mod entities;
pub mod events;
pub mod lifecycle;
pub mod ordering;
pub mod repositories;
pub mod value_objects;

pub use clock::*;
pub use entities::*;
pub use events::*;
pub use ordering::*;
pub use repositories::*;
pub use value_objects::*;
pub use evv_errors::{ErrorCategory, EvvError, EvvResult};
