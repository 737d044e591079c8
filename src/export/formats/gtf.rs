use crate::config::GtfConfig;
use crate::container::FragmentContainer;
use crate::coords;
use crate::error::ExportResult;
use crate::fragment::fragment_id;
use std::io::Write;

/// One GTF line per fragment, 1-based inclusive coordinates.
/// Returns the number of lines written.
pub fn write_gtf<W: Write>(
    container: &FragmentContainer,
    writer: &mut W,
    config: &GtfConfig,
) -> ExportResult<usize> {
    let mut lines = 0;
    for group in container.non_empty_groups() {
        let name = group.name();

        for (i, fragment) in group.sorted_fragments().into_iter().enumerate() {
            let (start, end) = coords::gtf_span(fragment);
            writeln!(
                writer,
                "{}\t{}\t{}\t{}\t{}\t{}\t.\t.\tgene_id \"{}\"",
                name,
                config.source,
                config.feature,
                start,
                end,
                fragment.total_supporting_reads(),
                fragment_id(name, i + 1)
            )?;
            lines += 1;
        }
    }

    Ok(lines)
}
