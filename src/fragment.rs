use crate::error::{ExportError, ExportResult};
use serde::{Deserialize, Serialize};

/// A padded view of a fragment, used for single-fragment GenBank records.
///
/// `five_prime_cut` and `three_prime_cut` count the padding nucleotides on
/// each side of the fragment proper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtendedSequence {
    pub sequence: String,
    #[serde(rename = "5_prime_cut", alias = "five_prime_cut")]
    pub five_prime_cut: usize,
    #[serde(rename = "3_prime_cut", alias = "three_prime_cut")]
    pub three_prime_cut: usize,
}

/// One detected fragment within a precursor.
///
/// `start` and `stop` are absolute, 0-based and inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FragmentRecord {
    pub start: u64,
    pub stop: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sequence: Option<String>,
    #[serde(default)]
    pub start_supporting_reads: u64,
    #[serde(default)]
    pub stop_supporting_reads: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extended: Option<ExtendedSequence>,
}

impl FragmentRecord {
    pub fn new(start: u64, stop: u64, start_supporting_reads: u64, stop_supporting_reads: u64) -> Self {
        Self {
            start,
            stop,
            sequence: None,
            start_supporting_reads,
            stop_supporting_reads,
            extended: None,
        }
    }

    pub fn with_sequence(mut self, sequence: impl Into<String>) -> Self {
        self.sequence = Some(sequence.into());
        self
    }

    pub fn with_extended(mut self, extended: ExtendedSequence) -> Self {
        self.extended = Some(extended);
        self
    }

    pub fn size(&self) -> u64 {
        self.stop - self.start + 1
    }

    pub fn total_supporting_reads(&self) -> u64 {
        self.start_supporting_reads + self.stop_supporting_reads
    }

    pub fn validate(&self, precursor: &str) -> ExportResult<()> {
        if self.start > self.stop {
            return Err(ExportError::InvalidFragment {
                precursor: precursor.to_string(),
                start: self.start,
                stop: self.stop,
            });
        }
        Ok(())
    }
}

/// Fragment ordinal formatted as used in `FM_<name>_<ordinal>` identifiers
pub fn fragment_id(precursor_name: &str, ordinal: usize) -> String {
    format!("FM_{}_{:012}", precursor_name, ordinal)
}
