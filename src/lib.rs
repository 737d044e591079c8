pub mod cli;
pub mod commands;
pub mod config;
pub mod container;
pub mod coords;
pub mod error;
pub mod export;
pub mod fragment;
pub mod provider;
pub mod types;
mod utils;

pub use container::{FragmentContainer, SequenceGroup};
pub use error::{ExportError, ExportResult};
pub use export::{ExportSummary, OutputTarget};
pub use fragment::{ExtendedSequence, FragmentRecord};
pub use provider::{FastaProvider, MemoryProvider, SequenceProvider};
pub use types::{ExportFormat, PrecursorRegion};
