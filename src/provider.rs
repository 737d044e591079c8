use anyhow::{Context, Result};
use bio::io::fasta::IndexedReader;
use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

/// Source of reference nucleotide sequences.
///
/// `start` is 0-based and `stop` is exclusive.
pub trait SequenceProvider {
    fn fetch(&mut self, name: &str, start: u64, stop: u64) -> Result<String>;
}

/// Indexed FASTA reference (requires a `.fai` next to the file)
pub struct FastaProvider {
    reader: IndexedReader<File>,
}

impl FastaProvider {
    pub fn from_file<P: AsRef<Path> + std::fmt::Debug>(path: P) -> Result<Self> {
        let reader = IndexedReader::from_file(&path)
            .with_context(|| format!("Failed to open indexed FASTA {:?}", path))?;
        Ok(Self { reader })
    }
}

impl FastaProvider {
    fn sequence_len(&self, name: &str) -> Result<u64> {
        self.reader
            .index
            .sequences()
            .into_iter()
            .find(|sequence| sequence.name == name)
            .map(|sequence| sequence.len)
            .with_context(|| format!("Unknown sequence in FASTA index: {}", name))
    }
}

impl SequenceProvider for FastaProvider {
    fn fetch(&mut self, name: &str, start: u64, stop: u64) -> Result<String> {
        // Clip to the sequence end
        let len = self.sequence_len(name)?;
        let end = stop.min(len);
        let begin = start.min(end);
        if end < stop {
            log::debug!("Clipped {}:{}-{} to sequence length {}", name, start, stop, len);
        }
        if begin == end {
            return Ok(String::new());
        }

        let mut seq = Vec::new();
        self.reader
            .fetch(name, begin, end)
            .with_context(|| format!("Failed to fetch {}:{}-{}", name, begin, end))?;
        self.reader.read(&mut seq)?;
        Ok(String::from_utf8(seq)?)
    }
}

/// Sequences kept in memory, keyed by reference name
#[derive(Debug, Default, Clone)]
pub struct MemoryProvider {
    sequences: HashMap<String, Vec<u8>>,
}

impl MemoryProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sequence(mut self, name: impl Into<String>, sequence: impl Into<String>) -> Self {
        self.sequences.insert(name.into(), sequence.into().into_bytes());
        self
    }
}

impl SequenceProvider for MemoryProvider {
    fn fetch(&mut self, name: &str, start: u64, stop: u64) -> Result<String> {
        let sequence = self
            .sequences
            .get(name)
            .with_context(|| format!("Unknown sequence: {}", name))?;
        // Clip to the sequence end
        let end = (stop as usize).min(sequence.len());
        let begin = (start as usize).min(end);
        let slice = sequence[begin..end].to_vec();
        String::from_utf8(slice)
            .with_context(|| format!("Sequence {}:{}-{} is not valid UTF-8", name, begin, end))
    }
}
