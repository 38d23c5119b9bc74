// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Fixtures standing in for records of an external source, such as the
//! parsed lines of a remote CSV file.

use std::fmt::{self, Display};

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Row {
    pub id: u32,
    pub name: String,
}

impl Row {
    #[must_use]
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Row[id={}, name={}]", self.id, self.name)
    }
}

pub fn row_alice() -> Row {
    Row::new(1, "Alice")
}

pub fn row_bob() -> Row {
    Row::new(2, "Bob")
}

pub fn row_charlie() -> Row {
    Row::new(3, "Charlie")
}
