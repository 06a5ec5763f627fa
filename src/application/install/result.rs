//! Install result types

use std::path::PathBuf;

/// Outcome of a successful run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Deployable directories processed, in traversal order
    pub directories: Vec<PathBuf>,
    /// External commands issued (archiver included)
    pub commands: usize,
}

impl RunSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the run found nothing to do
    pub fn is_empty(&self) -> bool {
        self.directories.is_empty()
    }
}

impl std::fmt::Display for RunSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} director{}, {} command{}",
            self.directories.len(),
            if self.directories.len() == 1 { "y" } else { "ies" },
            self.commands,
            if self.commands == 1 { "" } else { "s" }
        )
    }
}
