use crate::core::counter::WordCounter;
use crate::core::{Bolt, Fields, OutputCollector, TopologyConf, Tuple};
use crate::utils::error::{BoltError, Result};

const WORD_FIELD: usize = 0;

#[derive(Debug)]
enum Lifecycle {
    Uninitialized,
    Ready(WordCounter),
    Terminated,
}

/// Host-facing word-count component.
///
/// Reads the word from field 0 of each input tuple and emits `(word, count)`.
pub struct CountBolt {
    name: String,
    state: Lifecycle,
    report_top: Option<usize>,
}

impl CountBolt {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            state: Lifecycle::Uninitialized,
            report_top: None,
        }
    }

    /// Logs the `top` most frequent words at cleanup, before the counts are dropped.
    pub fn with_final_report(mut self, top: usize) -> Self {
        self.report_top = Some(top);
        self
    }

    /// The counter, once prepared and until cleanup.
    pub fn counter(&self) -> Option<&WordCounter> {
        match &self.state {
            Lifecycle::Ready(counter) => Some(counter),
            _ => None,
        }
    }

    pub fn is_terminated(&self) -> bool {
        matches!(self.state, Lifecycle::Terminated)
    }
}

impl Default for CountBolt {
    fn default() -> Self {
        Self::new("count")
    }
}

impl Bolt for CountBolt {
    fn name(&self) -> &str {
        &self.name
    }

    fn prepare(&mut self, _conf: &TopologyConf) -> Result<()> {
        if !matches!(self.state, Lifecycle::Uninitialized) {
            return Err(BoltError::AlreadyPrepared {
                component: self.name.clone(),
            });
        }

        tracing::debug!("Preparing component '{}'", self.name);
        self.state = Lifecycle::Ready(WordCounter::new());
        Ok(())
    }

    fn execute(&mut self, input: &Tuple, collector: &mut dyn OutputCollector) -> Result<()> {
        let counter = match &mut self.state {
            Lifecycle::Ready(counter) => counter,
            _ => {
                return Err(BoltError::NotPrepared {
                    component: self.name.clone(),
                })
            }
        };

        let word = input.get_string(WORD_FIELD)?;
        let record = counter.process(word);
        tracing::trace!("{}", record);
        collector.emit(record.into())
    }

    fn cleanup(&mut self) {
        if let Lifecycle::Ready(counter) = &self.state {
            tracing::debug!(
                "Cleaning up component '{}' ({} distinct words)",
                self.name,
                counter.len()
            );
            if let Some(top) = self.report_top {
                for entry in counter.snapshot().into_iter().take(top) {
                    tracing::info!("📊 {:>10}  {}", entry.count, entry.word);
                }
            }
        }
        self.state = Lifecycle::Terminated;
    }

    fn declare_output_fields(&self) -> Fields {
        WordCounter::output_fields()
    }
}
