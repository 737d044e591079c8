pub mod formats;

use crate::config::Config;
use crate::container::FragmentContainer;
use crate::error::{ExportError, ExportResult};
use crate::types::ExportFormat;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Where an export is written; `-` selects standard output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    pub fn parse(output: &str) -> Self {
        if output == "-" {
            OutputTarget::Stdout
        } else {
            OutputTarget::File(PathBuf::from(output))
        }
    }

    pub fn is_stdout(&self) -> bool {
        matches!(self, OutputTarget::Stdout)
    }

    /// Open a buffered writer; the handle is closed when dropped
    pub fn open(&self) -> io::Result<Box<dyn Write>> {
        Ok(match self {
            OutputTarget::Stdout => Box::new(BufWriter::new(io::stdout().lock())),
            OutputTarget::File(path) => Box::new(BufWriter::new(File::create(path)?)),
        })
    }
}

/// Outcome of one export call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub format: ExportFormat,
    /// Rows (tables, GTF) or grouped records (GenBank) written
    pub records: usize,
    pub outputs: Vec<OutputTarget>,
}

impl FragmentContainer {
    /// Export the whole container in the format selected by its numeric code (1-4)
    pub fn write(&self, format_code: u8, output: &str, config: &Config) -> ExportResult<ExportSummary> {
        let format = ExportFormat::try_from(format_code)?;
        self.write_format(format, output, config)
    }

    pub fn write_format(
        &self,
        format: ExportFormat,
        output: &str,
        config: &Config,
    ) -> ExportResult<ExportSummary> {
        log::info!("Exporting results to: {}", output);
        log::info!("Format: {} (code {})", format, format.code());

        match format {
            ExportFormat::PerFragment => self.export_table_per_fragment(output),
            ExportFormat::PerNcRna => self.export_table_per_ncrna(output, config),
            ExportFormat::GenBank => self.export_genbank(output, config),
            ExportFormat::Gtf => self.export_gtf(output, config),
        }
    }

    pub fn export_table_per_fragment(&self, output: &str) -> ExportResult<ExportSummary> {
        let target = OutputTarget::parse(output);
        let mut writer = target.open()?;
        let records = formats::per_fragment::write_per_fragment(self, &mut writer)?;
        writer.flush()?;
        Ok(self.summary(ExportFormat::PerFragment, records, vec![target]))
    }

    pub fn export_table_per_ncrna(&self, output: &str, config: &Config) -> ExportResult<ExportSummary> {
        let target = OutputTarget::parse(output);
        let mut writer = target.open()?;
        let records = formats::per_ncrna::write_per_ncrna(self, &mut writer, &config.table)?;
        writer.flush()?;
        Ok(self.summary(ExportFormat::PerNcRna, records, vec![target]))
    }

    /// Writes `<prefix><grouped_suffix>` and `<prefix><single_suffix>`
    pub fn export_genbank(&self, prefix: &str, config: &Config) -> ExportResult<ExportSummary> {
        if OutputTarget::parse(prefix).is_stdout() {
            log::warn!("Currently stdout is not supported for genbank");
            return Err(ExportError::UnsupportedTarget { format: "genbank" });
        }

        let grouped = OutputTarget::File(PathBuf::from(format!("{}{}", prefix, config.genbank.grouped_suffix)));
        let single = OutputTarget::File(PathBuf::from(format!("{}{}", prefix, config.genbank.single_suffix)));

        let mut grouped_writer = grouped.open()?;
        let mut single_writer = single.open()?;
        let counts = formats::genbank::write_genbank(
            self,
            &mut grouped_writer,
            &mut single_writer,
            &config.genbank,
        )?;
        grouped_writer.flush()?;
        single_writer.flush()?;

        log::debug!(
            "GenBank: {} grouped and {} single record(s)",
            counts.grouped,
            counts.single
        );
        Ok(self.summary(ExportFormat::GenBank, counts.grouped, vec![grouped, single]))
    }

    pub fn export_gtf(&self, output: &str, config: &Config) -> ExportResult<ExportSummary> {
        let target = OutputTarget::parse(output);
        let mut writer = target.open()?;
        let records = formats::gtf::write_gtf(self, &mut writer, &config.gtf)?;
        writer.flush()?;
        Ok(self.summary(ExportFormat::Gtf, records, vec![target]))
    }

    fn summary(&self, format: ExportFormat, records: usize, outputs: Vec<OutputTarget>) -> ExportSummary {
        if self.is_empty() {
            log::warn!("No fragments detected");
        }
        ExportSummary {
            format,
            records,
            outputs,
        }
    }
}
