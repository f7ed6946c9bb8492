//! Output handling for `PRN`
//!
//! Every printed value is recorded in order. An optional sink additionally
//! receives each value as a decimal line as soon as it is printed.

use std::fmt;
use std::io::Write;

#[derive(Default)]
pub struct IOHandler {
    outputs: Vec<u8>,
    sink: Option<Box<dyn Write>>,
}

impl IOHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handler that also streams to `sink`
    pub fn with_sink(sink: impl Write + 'static) -> Self {
        Self {
            outputs: Vec::new(),
            sink: Some(Box::new(sink)),
        }
    }

    /// Record `value`, streaming it to the sink first. A value the sink
    /// rejected is not recorded.
    pub fn write(&mut self, value: u8) -> std::io::Result<()> {
        if let Some(sink) = self.sink.as_mut() {
            writeln!(sink, "{}", value)?;
        }
        self.outputs.push(value);
        Ok(())
    }

    pub fn flush(&mut self) -> std::io::Result<()> {
        match self.sink.as_mut() {
            Some(sink) => sink.flush(),
            None => Ok(()),
        }
    }

    pub fn outputs(&self) -> &[u8] {
        &self.outputs
    }

    pub fn take_outputs(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.outputs)
    }
}

impl fmt::Debug for IOHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IOHandler")
            .field("outputs", &self.outputs)
            .field("sink", &self.sink.is_some())
            .finish()
    }
}
