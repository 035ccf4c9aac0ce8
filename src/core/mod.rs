pub mod aggregate;
pub mod engine;
pub mod fuel;
pub mod loader;
pub mod report;

pub use crate::domain::model::{Fuel, FuelReport, Mass, MissingInputPolicy, ModuleList};
pub use crate::domain::ports::{ConfigProvider, MassSource};
pub use crate::utils::error::Result;
