use crate::domain::model::{Fields, OutputFormat, TopologyConf, Tuple};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Sink through which a component emits records downstream.
pub trait OutputCollector {
    /// Called once by the host with the emitting component's schema, before any emit.
    fn declare(&mut self, _schema: &Fields) -> Result<()> {
        Ok(())
    }

    fn emit(&mut self, tuple: Tuple) -> Result<()>;

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

/// A stream-processing unit with a prepare / execute / cleanup lifecycle.
pub trait Bolt: Send {
    fn name(&self) -> &str;

    fn prepare(&mut self, conf: &TopologyConf) -> Result<()>;

    fn execute(&mut self, input: &Tuple, collector: &mut dyn OutputCollector) -> Result<()>;

    fn cleanup(&mut self) {}

    fn declare_output_fields(&self) -> Fields;
}

#[async_trait]
pub trait TupleSource: Send {
    /// Returns `None` once the stream is exhausted.
    async fn next_tuple(&mut self) -> Result<Option<Tuple>>;
}

pub trait ConfigProvider: Send + Sync {
    fn input_path(&self) -> Option<&str>;
    fn output_path(&self) -> Option<&str>;
    fn output_format(&self) -> OutputFormat;
    fn delimiter(&self) -> &str;
    fn lowercase(&self) -> bool;
    fn topology_conf(&self) -> TopologyConf {
        TopologyConf::new()
    }
}
