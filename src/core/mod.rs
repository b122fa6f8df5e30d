pub mod engine;
pub mod probe;

pub use crate::domain::model::{PayloadShape, ProbeReport};
pub use crate::domain::ports::{ConfigProvider, Probe};
pub use crate::utils::error::Result;
