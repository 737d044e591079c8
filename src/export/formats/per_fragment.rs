use crate::container::FragmentContainer;
use crate::coords;
use crate::error::ExportResult;
use crate::fragment::fragment_id;
use std::io::Write;

const HEADER_PREFIX: &str =
    "Fragment\tSize\tReference sequence\tStart\tEnd\tPrecursor\tStart in precursor\tEnd in precursor";
const HEADER_SUFFIX: &str =
    "Corresponding-reads (start)\tCorresponding-reads (end)\tCorresponding-reads (total)";

/// Sequence column label, depending on whether sequences can be resolved
pub fn sequence_label(has_provider: bool) -> &'static str {
    if has_provider {
        "Sequence"
    } else {
        "Sequence (no fasta file given)"
    }
}

/// One row per fragment across all precursors. Returns the number of rows written.
pub fn write_per_fragment<W: Write>(container: &FragmentContainer, writer: &mut W) -> ExportResult<usize> {
    let has_provider = container.has_sequence_provider();
    if !has_provider {
        log::warn!("No sequence provider bound; the sequence column will be empty");
    }

    writeln!(
        writer,
        "{}\t{}\t{}",
        HEADER_PREFIX,
        sequence_label(has_provider),
        HEADER_SUFFIX
    )?;

    let mut rows = 0;
    for group in container.non_empty_groups() {
        let region = &group.masked_region;
        let name = group.name();

        for (i, fragment) in group.sorted_fragments().into_iter().enumerate() {
            let sequence = container
                .fragment_sequence(region, fragment)?
                .unwrap_or_default();

            writeln!(
                writer,
                "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
                fragment_id(name, i + 1),
                fragment.size(),
                name,
                fragment.start,
                fragment.stop,
                name,
                coords::to_precursor(fragment.start, region),
                coords::to_precursor(fragment.stop, region),
                sequence,
                fragment.start_supporting_reads,
                fragment.stop_supporting_reads,
                fragment.total_supporting_reads()
            )?;
            rows += 1;
        }
    }

    Ok(rows)
}
