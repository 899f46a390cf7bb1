//! The job record under construction
//!
//! A [`JobRecord`] is created empty by the entry point, incrementally
//! populated by the source router, by extraction attempts, and finally by
//! manual collection, then read out by the outbound payload builder.

use std::fmt;

/// The three fields the extraction pipeline tries to resolve.
///
/// The canonical link is not a [`Field`]: it is always derivable from the
/// input alone, so it never participates in completeness checks or prompting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Company,
    Position,
    Location,
}

impl Field {
    /// All extractable fields, in the fixed order used for prompting.
    pub const ALL: [Field; 3] = [Field::Company, Field::Position, Field::Location];

    /// The lowercase field name used in prompts and logs
    pub fn name(&self) -> &'static str {
        match self {
            Field::Company => "company",
            Field::Position => "position",
            Field::Location => "location",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A job posting record, incrementally populated by the pipeline
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobRecord {
    /// Employer name
    pub company: Option<String>,

    /// Role title
    pub position: Option<String>,

    /// Posting location
    pub location: Option<String>,

    /// Canonical public link to the posting, set by the source router
    pub link: String,
}

impl JobRecord {
    /// Creates an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns a field value, overwriting any previous value.
    ///
    /// Overwriting is deliberate: when several elements match the same
    /// marker during one traversal, the last match in traversal order wins.
    /// This matches the observed behavior of the sources this tool targets.
    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Company => &mut self.company,
            Field::Position => &mut self.position,
            Field::Location => &mut self.location,
        };
        *slot = Some(value);
    }

    /// Returns the current value of a field, if resolved
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Company => self.company.as_deref(),
            Field::Position => self.position.as_deref(),
            Field::Location => self.location.as_deref(),
        }
    }

    /// True when company, position, and location are all resolved.
    ///
    /// The link is excluded: it is always present once routing has run.
    pub fn is_complete(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_some())
    }

    /// The fields still unresolved, in prompting order
    pub fn missing_fields(&self) -> Vec<Field> {
        Field::ALL
            .iter()
            .copied()
            .filter(|f| self.get(*f).is_none())
            .collect()
    }
}
