use crate::coords::{parse_coordinates, Coordinates};
use crate::offset::format_triple;
use crate::slots::ResultSlots;
use crate::transcript::Transcript;
use std::fmt;

/// Role of one of the four input fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldRole {
    Origin,
    SourceA,
    SourceB,
    Destination,
}

impl FieldRole {
    pub const ALL: [FieldRole; 4] = [
        FieldRole::Origin,
        FieldRole::SourceA,
        FieldRole::SourceB,
        FieldRole::Destination,
    ];

    /// Name used in transcript entries.
    pub fn display_name(self) -> &'static str {
        match self {
            FieldRole::Origin => "CMD Block",
            FieldRole::SourceA => "Source #1",
            FieldRole::SourceB => "Source #2",
            FieldRole::Destination => "Destination",
        }
    }

    /// Label shown next to the input field.
    pub fn label(self) -> &'static str {
        match self {
            FieldRole::Origin => "CMD Block:",
            FieldRole::SourceA => "Source #1 (optional):",
            FieldRole::SourceB => "Source #2 (optional):",
            FieldRole::Destination => "Destination:",
        }
    }
}

/// Output command shapes, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandMode {
    Set,
    Fill,
    Clone,
}

impl CommandMode {
    pub const ALL: [CommandMode; 3] = [CommandMode::Set, CommandMode::Fill, CommandMode::Clone];

    pub fn command_tag(self) -> &'static str {
        match self {
            CommandMode::Set => "setblock",
            CommandMode::Fill => "fill",
            CommandMode::Clone => "clone",
        }
    }

    pub fn transcript_tag(self) -> String {
        format!("RESULT ({})", self.command_tag())
    }

    /// Points expressed relative to the origin, in output order.
    pub fn points(self) -> &'static [FieldRole] {
        match self {
            CommandMode::Set => &[FieldRole::Destination],
            CommandMode::Fill => &[FieldRole::SourceA, FieldRole::Destination],
            CommandMode::Clone => &[
                FieldRole::SourceA,
                FieldRole::SourceB,
                FieldRole::Destination,
            ],
        }
    }

    /// Hint shown in an output slot before the first calculation.
    pub fn placeholder(self) -> &'static str {
        match self {
            CommandMode::Set => "<dst>",
            CommandMode::Fill => "<src_1> <dst>",
            CommandMode::Clone => "<src_1> <src_2> <dst>",
        }
    }
}

impl fmt::Display for CommandMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.command_tag())
    }
}

/// Raw text of the four input fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalculatorInputs {
    pub origin: String,
    pub source_a: String,
    pub source_b: String,
    pub destination: String,
}

impl CalculatorInputs {
    pub fn field(&self, role: FieldRole) -> &str {
        match role {
            FieldRole::Origin => &self.origin,
            FieldRole::SourceA => &self.source_a,
            FieldRole::SourceB => &self.source_b,
            FieldRole::Destination => &self.destination,
        }
    }

    pub fn field_mut(&mut self, role: FieldRole) -> &mut String {
        match role {
            FieldRole::Origin => &mut self.origin,
            FieldRole::SourceA => &mut self.source_a,
            FieldRole::SourceB => &mut self.source_b,
            FieldRole::Destination => &mut self.destination,
        }
    }
}

/// Triples that parsed in one calculation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParsedFields {
    pub origin: Option<Coordinates>,
    pub source_a: Option<Coordinates>,
    pub source_b: Option<Coordinates>,
    pub destination: Option<Coordinates>,
}

impl ParsedFields {
    pub fn get(&self, role: FieldRole) -> Option<Coordinates> {
        match role {
            FieldRole::Origin => self.origin,
            FieldRole::SourceA => self.source_a,
            FieldRole::SourceB => self.source_b,
            FieldRole::Destination => self.destination,
        }
    }

    fn set(&mut self, role: FieldRole, value: Option<Coordinates>) {
        match role {
            FieldRole::Origin => self.origin = value,
            FieldRole::SourceA => self.source_a = value,
            FieldRole::SourceB => self.source_b = value,
            FieldRole::Destination => self.destination = value,
        }
    }
}

/// One produced command: its mode plus one offset triple per point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    mode: CommandMode,
    triples: Vec<String>,
}

impl CommandResult {
    pub fn mode(&self) -> CommandMode {
        self.mode
    }

    pub fn triples(&self) -> &[String] {
        &self.triples
    }

    /// Offsets without the command tag.
    pub fn arguments(&self) -> String {
        self.triples.join(" ")
    }

    /// Full command text, `<tag> <offsets...>`.
    pub fn text(&self) -> String {
        format!("{} {}", self.mode.command_tag(), self.arguments())
    }
}

impl fmt::Display for CommandResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

/// Results of one pass, in `CommandMode::ALL` order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalculationOutcome {
    results: Vec<CommandResult>,
}

impl CalculationOutcome {
    pub fn get(&self, mode: CommandMode) -> Option<&CommandResult> {
        self.results.iter().find(|result| result.mode == mode)
    }

    pub fn results(&self) -> &[CommandResult] {
        &self.results
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// Builds the result for `mode`, or `None` when a required triple is missing.
pub fn build_result(mode: CommandMode, parsed: &ParsedFields) -> Option<CommandResult> {
    let origin = parsed.origin?;
    let triples = mode
        .points()
        .iter()
        .map(|role| parsed.get(*role).map(|point| format_triple(&point, &origin)))
        .collect::<Option<Vec<_>>>()?;
    Some(CommandResult { mode, triples })
}

/// Runs calculation passes, recording every parse and result to `T`.
///
/// Nothing carries over between passes except what the transcript has seen.
pub struct Calculator<T: Transcript> {
    transcript: T,
}

impl<T: Transcript> Calculator<T> {
    pub fn new(transcript: T) -> Self {
        Self { transcript }
    }

    pub fn transcript(&self) -> &T {
        &self.transcript
    }

    pub fn into_transcript(self) -> T {
        self.transcript
    }

    /// Parses every field independently; successes are recorded in role order.
    pub fn parse_fields(&mut self, inputs: &CalculatorInputs) -> ParsedFields {
        let mut parsed = ParsedFields::default();
        for role in FieldRole::ALL {
            let raw = inputs.field(role);
            let value = parse_coordinates(raw);
            if value.is_some() {
                self.transcript.record_input(role, raw);
            }
            parsed.set(role, value);
        }
        parsed
    }

    /// Parses the inputs and builds every mode whose inputs are present.
    pub fn evaluate(&mut self, inputs: &CalculatorInputs) -> CalculationOutcome {
        let parsed = self.parse_fields(inputs);
        let mut results = Vec::new();
        for mode in CommandMode::ALL {
            match build_result(mode, &parsed) {
                Some(result) => {
                    self.transcript.record_result(mode, &result.text());
                    results.push(result);
                }
                None => log::debug!("{mode} skipped: missing coordinates"),
            }
        }
        CalculationOutcome { results }
    }

    /// Clears `slots`, evaluates the inputs and fills the slot of every produced mode.
    pub fn calculate(
        &mut self,
        inputs: &CalculatorInputs,
        slots: &mut ResultSlots,
    ) -> CalculationOutcome {
        slots.clear_all();
        let outcome = self.evaluate(inputs);
        for result in outcome.results() {
            slots.slot_mut(result.mode()).fill(result.text());
        }
        outcome
    }
}

impl Default for Calculator<crate::transcript::LogTranscript> {
    fn default() -> Self {
        Self::new(crate::transcript::LogTranscript)
    }
}
