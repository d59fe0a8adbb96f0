pub mod symbol_table;
pub mod translator;

pub use crate::domain::model::Direction;
pub use crate::domain::ports::{ConfigProvider, Converter};
pub use crate::utils::error::Result;
