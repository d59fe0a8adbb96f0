pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::app::session::{Session, SessionEvent};
pub use crate::config::Settings;
pub use crate::core::symbol_table::SymbolTable;
pub use crate::core::translator::{decode, encode, Translator};
pub use crate::domain::model::Direction;
pub use crate::domain::ports::{ConfigProvider, Converter};
pub use crate::utils::error::{MorseError, Result};
