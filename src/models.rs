use std::fmt;

use serde::{Deserialize, Serialize};

/// A person row as it moves through a batch job.
///
/// Both name columns are optional and carried as-is: no trimming, no
/// validation. The field names follow the usual `first_name,last_name`
/// column header, which serde picks up unchanged.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    first_name: Option<String>,
    last_name: Option<String>,
}

impl Person {
    /// Builds a record from its name columns, last name first.
    ///
    /// Note the argument order: a `first,last` row maps in as
    /// `Person::new(&row[1], &row[0])`. Use [`Person::with_first_name`]
    /// and [`Person::with_last_name`] when the call site shouldn't have
    /// to care.
    pub fn new(last_name: &str, first_name: &str) -> Self {
        Self {
            first_name: Some(first_name.to_string()),
            last_name: Some(last_name.to_string()),
        }
    }

    pub fn first_name(&self) -> Option<&str> {
        self.first_name.as_deref()
    }

    pub fn set_first_name(&mut self, first_name: &str) {
        self.first_name = Some(first_name.to_string());
    }

    pub fn last_name(&self) -> Option<&str> {
        self.last_name.as_deref()
    }

    pub fn set_last_name(&mut self, last_name: &str) {
        self.last_name = Some(last_name.to_string());
    }

    /// Chainable form of [`Person::set_first_name`].
    pub fn with_first_name(mut self, first_name: &str) -> Self {
        self.set_first_name(first_name);
        self
    }

    /// Chainable form of [`Person::set_last_name`].
    pub fn with_last_name(mut self, last_name: &str) -> Self {
        self.set_last_name(last_name);
        self
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "firstName: {}, lastName: {}",
            self.first_name.as_deref().unwrap_or("None"),
            self.last_name.as_deref().unwrap_or("None"),
        )
    }
}
