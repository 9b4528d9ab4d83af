//! Output slots holding the last calculated command of each mode.
//!
//! A slot can be read and copied from but only a calculation pass writes it.

use crate::calculator::CommandMode;
use serde::{Deserialize, Serialize};

/// What a copy action puts on the clipboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CopyPolicy {
    /// The displayed text, command tag included.
    #[default]
    FullCommand,
    /// The displayed text without its first token.
    ArgumentsOnly,
}

impl CopyPolicy {
    pub fn apply(self, text: &str) -> String {
        match self {
            CopyPolicy::FullCommand => text.to_string(),
            CopyPolicy::ArgumentsOnly => match text.split_once(' ') {
                Some((_, rest)) => rest.to_string(),
                None => String::new(),
            },
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSlot {
    text: String,
}

impl ResultSlot {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Text to put on the clipboard, `None` for an empty slot.
    pub fn copy_text(&self, policy: CopyPolicy) -> Option<String> {
        if self.is_empty() {
            None
        } else {
            Some(policy.apply(&self.text))
        }
    }

    pub(crate) fn fill(&mut self, text: String) {
        self.text = text;
    }

    pub(crate) fn clear(&mut self) {
        self.text.clear();
    }
}

/// One slot per `CommandMode`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSlots {
    set: ResultSlot,
    fill: ResultSlot,
    clone: ResultSlot,
    calculated: bool,
}

impl ResultSlots {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn slot(&self, mode: CommandMode) -> &ResultSlot {
        match mode {
            CommandMode::Set => &self.set,
            CommandMode::Fill => &self.fill,
            CommandMode::Clone => &self.clone,
        }
    }

    pub(crate) fn slot_mut(&mut self, mode: CommandMode) -> &mut ResultSlot {
        match mode {
            CommandMode::Set => &mut self.set,
            CommandMode::Fill => &mut self.fill,
            CommandMode::Clone => &mut self.clone,
        }
    }

    /// False until the first calculation pass; slots then show placeholders.
    pub fn has_calculated(&self) -> bool {
        self.calculated
    }

    pub(crate) fn clear_all(&mut self) {
        for mode in CommandMode::ALL {
            self.slot_mut(mode).clear();
        }
        self.calculated = true;
    }
}
