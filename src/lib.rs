pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::collector::{VecCollector, WriterCollector};
pub use crate::adapters::source::{IterSource, LineSource};
pub use crate::config::toml_config::TomlConfig;
pub use crate::core::{count_bolt::CountBolt, counter::WordCounter, executor::BoltExecutor};
pub use crate::domain::model::{Fields, OutputFormat, Tuple, Value, WordCount};
pub use crate::domain::ports::{Bolt, OutputCollector, TupleSource};
pub use crate::utils::error::{BoltError, Result};
