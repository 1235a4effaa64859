//! Destinations for emitted control words.
use crate::control_word::{ControlArg, ControlWord};
use crate::error::RenderError;
use std::io::Write;

/// Receives control words in the exact order they are produced.
pub trait ControlWordSink {
    fn write_control(&mut self, word: ControlWord) -> Result<(), RenderError>;

    fn write_bare(&mut self, name: &str) -> Result<(), RenderError> {
        self.write_control(ControlWord::bare(name))
    }

    fn write_text(&mut self, name: &str, arg: &str, emphasize: bool) -> Result<(), RenderError> {
        self.write_control(ControlWord::with_arg(name, ControlArg::from(arg), emphasize))
    }

    fn write_int(&mut self, name: &str, arg: i64, emphasize: bool) -> Result<(), RenderError> {
        self.write_control(ControlWord::with_arg(name, arg, emphasize))
    }
}

/// Keeps every command in memory.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    commands: Vec<ControlWord>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[ControlWord] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<ControlWord> {
        self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// The recorded commands in RTF syntax, concatenated.
    pub fn to_rtf(&self) -> String {
        self.commands.iter().map(ToString::to_string).collect()
    }
}

impl ControlWordSink for RecordingSink {
    fn write_control(&mut self, word: ControlWord) -> Result<(), RenderError> {
        self.commands.push(word);
        Ok(())
    }
}

/// Serializes commands as RTF text into any writer.
pub struct RtfTextSink<W: Write> {
    writer: W,
    written: usize,
}

impl<W: Write> RtfTextSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, written: 0 }
    }

    /// Number of control words written so far.
    pub fn written(&self) -> usize {
        self.written
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ControlWordSink for RtfTextSink<W> {
    fn write_control(&mut self, word: ControlWord) -> Result<(), RenderError> {
        write!(self.writer, "{}", word)?;
        self.written += 1;
        Ok(())
    }
}
