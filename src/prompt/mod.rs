//! Manual field collection
//!
//! The interactive fallback for fields automated extraction never resolved.
//! The prompter sits behind a trait so the controller can be driven by a
//! scripted implementation in tests.

use std::io::{self, BufRead, Write};

use crate::record::{Field, JobRecord};

/// Source of manually entered field values
pub trait FieldPrompter {
    /// Prompts for a single field and returns the entered value
    fn prompt_field(&mut self, field: Field) -> String;
}

/// Interactive prompter reading from stdin
pub struct ConsolePrompter;

impl ConsolePrompter {
    /// Prompts for a named value, re-prompting until input is non-empty.
    ///
    /// Blocks awaiting console input with no timeout; when run
    /// non-interactively with fields missing this loops forever. That
    /// liveness risk is documented behavior at this boundary, not fixed.
    pub fn prompt_value(label: &str) -> String {
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        Self::read_value(label, &mut stdin.lock(), &mut stdout)
    }

    fn read_value<R: BufRead, W: Write>(label: &str, input: &mut R, output: &mut W) -> String {
        loop {
            let _ = write!(output, "Enter {}: ", label);
            let _ = output.flush();

            let mut line = String::new();
            match input.read_line(&mut line) {
                Ok(_) => {
                    let trimmed = line.trim();
                    if !trimmed.is_empty() {
                        return trimmed.to_string();
                    }
                    let _ = writeln!(output, "Input can't be empty!");
                }
                Err(err) => {
                    // A read failure is not empty input; re-prompt quietly
                    tracing::warn!("Failed to read input: {}", err);
                }
            }
        }
    }
}

impl FieldPrompter for ConsolePrompter {
    fn prompt_field(&mut self, field: Field) -> String {
        Self::prompt_value(field.name())
    }
}

/// Prompts for every field still missing from the record, in the fixed
/// order company, position, location. Already-resolved fields are never
/// re-prompted. Entered values are trimmed before assignment.
pub fn collect_missing<P: FieldPrompter>(record: &mut JobRecord, prompter: &mut P) {
    for field in record.missing_fields() {
        let value = prompter.prompt_field(field);
        record.set(field, value.trim().to_string());
    }
}
