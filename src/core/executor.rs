use crate::core::{Bolt, Fields, OutputCollector, TopologyConf, Tuple, TupleSource};
use crate::utils::error::Result;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub processed: u64,
    pub emitted: u64,
    pub elapsed: Duration,
}

/// Checks every emitted tuple against the declared schema and tallies emits.
struct SchemaCheckedCollector<'a, C: OutputCollector> {
    inner: &'a mut C,
    schema: &'a Fields,
    emitted: u64,
}

impl<C: OutputCollector> OutputCollector for SchemaCheckedCollector<'_, C> {
    fn emit(&mut self, tuple: Tuple) -> Result<()> {
        self.schema.validate(&tuple)?;
        self.inner.emit(tuple)?;
        self.emitted += 1;
        Ok(())
    }
}

/// Minimal local host: drives one component over one source, serially.
pub struct BoltExecutor<B: Bolt> {
    bolt: B,
    conf: TopologyConf,
}

impl<B: Bolt> BoltExecutor<B> {
    pub fn new(bolt: B) -> Self {
        Self {
            bolt,
            conf: TopologyConf::new(),
        }
    }

    pub fn with_conf(mut self, conf: TopologyConf) -> Self {
        self.conf = conf;
        self
    }

    pub fn bolt(&self) -> &B {
        &self.bolt
    }

    /// Declares, prepares, feeds every tuple from `source`, then cleans up and flushes.
    ///
    /// The first error from the source, the component or the collector aborts the run.
    /// The component is still cleaned up and the collector flushed before the error is
    /// returned, so records emitted ahead of the failure reach the output.
    pub async fn run<S, C>(&mut self, source: &mut S, collector: &mut C) -> Result<RunSummary>
    where
        S: TupleSource,
        C: OutputCollector,
    {
        let started = Instant::now();
        let name = self.bolt.name().to_string();
        tracing::info!("Starting component '{}'", name);

        let schema = self.bolt.declare_output_fields();
        tracing::debug!("Declared output fields: {:?}", schema.names());
        collector.declare(&schema)?;

        self.bolt.prepare(&self.conf)?;

        let mut processed = 0u64;
        let mut checked = SchemaCheckedCollector {
            inner: &mut *collector,
            schema: &schema,
            emitted: 0,
        };

        let outcome = loop {
            match source.next_tuple().await {
                Ok(Some(tuple)) => {
                    if let Err(e) = self.bolt.execute(&tuple, &mut checked) {
                        tracing::error!("Component '{}' failed on tuple {}: {}", name, processed, e);
                        break Err(e);
                    }
                    processed += 1;
                }
                Ok(None) => break Ok(()),
                Err(e) => {
                    tracing::error!("Source failed after {} tuples: {}", processed, e);
                    break Err(e);
                }
            }
        };
        let emitted = checked.emitted;

        self.bolt.cleanup();
        if let Err(e) = outcome {
            if let Err(flush_err) = collector.flush() {
                tracing::warn!("Flush after failed run also failed: {}", flush_err);
            }
            return Err(e);
        }
        collector.flush()?;

        let summary = RunSummary {
            processed,
            emitted,
            elapsed: started.elapsed(),
        };
        tracing::info!(
            "Component '{}' finished: {} tuples in, {} out, {:?}",
            name,
            summary.processed,
            summary.emitted,
            summary.elapsed
        );

        Ok(summary)
    }
}
