use crate::error::ExportError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A genomic region considered as an sncRNA precursor ("masked region").
///
/// Coordinates are absolute positions on the reference sequence `name`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PrecursorRegion {
    pub name: String,
    pub start: u64,
    pub stop: u64,
}

impl PrecursorRegion {
    pub fn new(name: impl Into<String>, start: u64, stop: u64) -> Self {
        Self {
            name: name.into(),
            start,
            stop,
        }
    }

    /// Unique identifier of the precursor: `<name>_<start>_<stop>`
    pub fn uid(&self) -> String {
        format!("{}_{}_{}", self.name, self.start, self.stop)
    }
}

impl fmt::Display for PrecursorRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}-{}", self.name, self.start, self.stop)
    }
}

/// Output formats, numbered as on the command line
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    PerFragment,
    PerNcRna,
    GenBank,
    Gtf,
}

impl ExportFormat {
    pub fn code(&self) -> u8 {
        match self {
            ExportFormat::PerFragment => 1,
            ExportFormat::PerNcRna => 2,
            ExportFormat::GenBank => 3,
            ExportFormat::Gtf => 4,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ExportFormat::PerFragment => "tab-delimited, per fragment",
            ExportFormat::PerNcRna => "tab-delimited, per ncRNA",
            ExportFormat::GenBank => "gen-bank",
            ExportFormat::Gtf => "GTF",
        }
    }
}

impl TryFrom<u8> for ExportFormat {
    type Error = ExportError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(ExportFormat::PerFragment),
            2 => Ok(ExportFormat::PerNcRna),
            3 => Ok(ExportFormat::GenBank),
            4 => Ok(ExportFormat::Gtf),
            other => Err(ExportError::UnsupportedFormat(other)),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}
