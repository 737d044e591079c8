use crate::cli::ExportArgs;
use crate::config::Config;
use crate::container::{FragmentContainer, SequenceGroup};
use crate::export::ExportSummary;
use crate::provider::{FastaProvider, SequenceProvider};
use crate::utils::progress_bar_builder::ProgressBarBuilder;
use anyhow::{Context, Result};
use std::path::Path;

/// Read upstream results: a JSON array of precursor result objects
pub fn load_results(path: &Path) -> Result<Vec<SequenceGroup>> {
    let (reader, compression) = niffler::from_path(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;
    log::debug!("Reading {} ({:?} compression)", path.display(), compression);

    let groups: Vec<SequenceGroup> = serde_json::from_reader(reader)
        .with_context(|| format!("Failed to parse fragment results from {}", path.display()))?;
    for group in &groups {
        group.validate()?;
    }
    Ok(groups)
}

/// Build a container from loaded results, binding the provider (if any) once
pub fn build_container(
    groups: Vec<SequenceGroup>,
    provider: Option<Box<dyn SequenceProvider>>,
) -> Result<FragmentContainer> {
    let mut container = FragmentContainer::new();
    let mut provider = provider;
    for group in groups {
        container.add_fragments(group, provider.take())?;
    }
    if let Some(provider) = provider {
        container.set_sequence_provider(provider);
    }
    Ok(container)
}

pub fn run(args: ExportArgs) -> Result<ExportSummary> {
    let config = match &args.config {
        Some(path) => Config::from_path(path)?,
        None => Config::load(),
    };

    let progress = ProgressBarBuilder::new(format!("Loading {}...", args.input.display()))
        .with_tick()
        .hidden(args.output == "-")
        .build()?;

    let groups = load_results(&args.input)?;
    log::info!("Loaded {} precursor result(s)", groups.len());

    let provider = match &args.fasta {
        Some(path) => Some(Box::new(FastaProvider::from_file(path)?) as Box<dyn SequenceProvider>),
        None => None,
    };
    let container = build_container(groups, provider)?;
    log::info!(
        "{} precursor(s), {} fragment(s)",
        container.len(),
        container.fragment_count()
    );

    progress.set_message(format!("Exporting to {}...", args.output));
    let summary = container.write(args.format, &args.output, &config)?;
    progress.finish_with_message(format!("Wrote {} record(s)", summary.records));

    Ok(summary)
}
