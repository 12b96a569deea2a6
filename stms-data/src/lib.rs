pub mod loader;

pub use loader::{UavScheduleLoader, UavScheduleLoaderError};
