pub mod count_bolt;
pub mod counter;
pub mod executor;

pub use crate::domain::model::{
    Field, FieldType, Fields, OutputFormat, TopologyConf, Tuple, Value, WordCount,
};
pub use crate::domain::ports::{Bolt, ConfigProvider, OutputCollector, TupleSource};
pub use crate::utils::error::Result;
