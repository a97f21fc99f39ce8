use crate::core::{Fields, OutputCollector, OutputFormat, Tuple};
use crate::utils::error::{BoltError, Result};
use std::io::Write;

/// Keeps every emitted tuple in memory.
#[derive(Debug, Clone, Default)]
pub struct VecCollector {
    schema: Option<Fields>,
    tuples: Vec<Tuple>,
}

impl VecCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schema(&self) -> Option<&Fields> {
        self.schema.as_ref()
    }

    pub fn tuples(&self) -> &[Tuple] {
        &self.tuples
    }

    pub fn into_tuples(self) -> Vec<Tuple> {
        self.tuples
    }
}

impl OutputCollector for VecCollector {
    fn declare(&mut self, schema: &Fields) -> Result<()> {
        self.schema = Some(schema.clone());
        Ok(())
    }

    fn emit(&mut self, tuple: Tuple) -> Result<()> {
        self.tuples.push(tuple);
        Ok(())
    }
}

enum Sink<W: Write> {
    Plain(W),
    Csv(csv::Writer<W>),
}

/// Renders each emitted tuple to a writer as text, JSON lines or CSV.
///
/// Text lines look like `(cat, 2)`. JSON lines are objects keyed by the declared
/// field names in declaration order, or plain arrays when nothing was declared.
/// CSV gets a single header row from the declared field names.
pub struct WriterCollector<W: Write> {
    sink: Sink<W>,
    format: OutputFormat,
    schema: Option<Fields>,
}

impl<W: Write> WriterCollector<W> {
    pub fn new(writer: W, format: OutputFormat) -> Self {
        let sink = match format {
            OutputFormat::Csv => Sink::Csv(csv::Writer::from_writer(writer)),
            OutputFormat::Text | OutputFormat::Json => Sink::Plain(writer),
        };
        Self {
            sink,
            format,
            schema: None,
        }
    }

    /// Flushes and hands back the underlying writer.
    pub fn into_inner(self) -> Result<W> {
        match self.sink {
            Sink::Plain(mut w) => {
                w.flush()?;
                Ok(w)
            }
            Sink::Csv(w) => w.into_inner().map_err(|e| e.into_error().into()),
        }
    }

    fn json_line(&self, tuple: &Tuple) -> Result<String> {
        let line = match &self.schema {
            Some(schema) => {
                let object: serde_json::Map<String, serde_json::Value> = schema
                    .iter()
                    .zip(tuple.values())
                    .map(|(field, value)| -> Result<(String, serde_json::Value)> {
                        Ok((field.name.clone(), serde_json::to_value(value)?))
                    })
                    .collect::<Result<_>>()?;
                serde_json::to_string(&object)?
            }
            None => serde_json::to_string(tuple.values())?,
        };
        Ok(line)
    }
}

impl<W: Write> OutputCollector for WriterCollector<W> {
    fn declare(&mut self, schema: &Fields) -> Result<()> {
        match &self.schema {
            Some(declared) if declared == schema => return Ok(()),
            Some(declared) => {
                return Err(BoltError::SchemaMismatch {
                    message: format!(
                        "output already declared as ({}), got ({})",
                        declared.names().join(", "),
                        schema.names().join(", ")
                    ),
                })
            }
            None => {}
        }

        if let Sink::Csv(w) = &mut self.sink {
            w.write_record(schema.names())?;
        }
        self.schema = Some(schema.clone());
        Ok(())
    }

    fn emit(&mut self, tuple: Tuple) -> Result<()> {
        match self.format {
            OutputFormat::Text => {
                let rendered: Vec<String> = tuple.values().iter().map(|v| v.to_string()).collect();
                if let Sink::Plain(w) = &mut self.sink {
                    writeln!(w, "({})", rendered.join(", "))?;
                }
            }
            OutputFormat::Json => {
                let line = self.json_line(&tuple)?;
                if let Sink::Plain(w) = &mut self.sink {
                    writeln!(w, "{}", line)?;
                }
            }
            OutputFormat::Csv => {
                if let Sink::Csv(w) = &mut self.sink {
                    w.write_record(tuple.values().iter().map(|v| v.to_string()))?;
                }
            }
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        match &mut self.sink {
            Sink::Plain(w) => w.flush()?,
            Sink::Csv(w) => w.flush()?,
        }
        Ok(())
    }
}
