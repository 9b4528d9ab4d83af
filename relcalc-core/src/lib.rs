pub mod calculator;
pub mod coords;
pub mod offset;
pub mod settings;
pub mod slots;
pub mod transcript;

pub use calculator::{
    build_result, CalculationOutcome, Calculator, CalculatorInputs, CommandMode, CommandResult,
    FieldRole, ParsedFields,
};
pub use coords::{parse_coordinates, Coordinates};
pub use offset::{format_offset, format_triple};
pub use settings::{CalculatorSettings, SettingsError};
pub use slots::{CopyPolicy, ResultSlot, ResultSlots};
pub use transcript::{LogTranscript, MemoryTranscript, Transcript};
