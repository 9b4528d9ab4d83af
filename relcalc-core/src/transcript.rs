//! Append-only audit trail of parsed inputs and computed results.

use crate::calculator::{CommandMode, FieldRole};

/// Log target used for transcript entries.
pub const TRANSCRIPT_TARGET: &str = "relcalc::transcript";

/// Sink receiving one entry per successful field parse and per produced result.
pub trait Transcript {
    fn record(&mut self, entry: String);

    fn record_input(&mut self, role: FieldRole, raw: &str) {
        self.record(format!("{}: {raw}", role.display_name()));
    }

    fn record_result(&mut self, mode: CommandMode, result: &str) {
        self.record(format!("{}: {result}", mode.transcript_tag()));
    }
}

/// Forwards entries to the `log` facade at info level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogTranscript;

impl Transcript for LogTranscript {
    fn record(&mut self, entry: String) {
        log::info!(target: TRANSCRIPT_TARGET, "{entry}");
    }
}

/// Keeps entries in memory.
#[derive(Debug, Default, Clone)]
pub struct MemoryTranscript {
    entries: Vec<String>,
}

impl MemoryTranscript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Transcript for MemoryTranscript {
    fn record(&mut self, entry: String) {
        self.entries.push(entry);
    }
}
