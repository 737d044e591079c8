use crate::config::GenbankConfig;
use crate::container::{FragmentContainer, SequenceGroup};
use crate::coords;
use crate::error::ExportResult;
use crate::fragment::{ExtendedSequence, FragmentRecord};
use std::io::Write;

const QUALIFIER_INDENT: &str = "                     ";

/// Records written to the grouped and single GenBank files
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GenbankCounts {
    pub grouped: usize,
    pub single: usize,
}

/// ORIGIN block: `width` nucleotides per line, each line led by its
/// right-justified 1-based offset.
pub fn format_sequence(seq: &str, width: usize) -> String {
    let mut out = String::new();
    for (i, chunk) in seq.as_bytes().chunks(width).enumerate() {
        out.push_str(&format!(
            "{:>9} {}\n",
            i * width + 1,
            String::from_utf8_lossy(chunk)
        ));
    }
    out
}

/// Write one LOCUS record per precursor to `grouped` and one per fragment to `single`
pub fn write_genbank<G: Write, S: Write>(
    container: &FragmentContainer,
    grouped: &mut G,
    single: &mut S,
    config: &GenbankConfig,
) -> ExportResult<GenbankCounts> {
    let mut counts = GenbankCounts::default();

    for group in container.non_empty_groups() {
        let name = group.name();
        write_header(grouped, name, name, group.seq.len(), config)?;

        for (i, fragment) in group.sorted_fragments().into_iter().enumerate() {
            let fragment_name = format!("{}_Fragment_{}", name, i + 1);

            let (start, stop) = coords::genbank_grouped_span(fragment);
            write_feature(grouped, &fragment_name, start as usize, stop as usize)?;

            match extended_view(container, group, fragment, config)? {
                Some(extended) => {
                    write_header(single, &fragment_name, name, extended.sequence.len(), config)?;
                    let (start, stop) = coords::extended_span(&extended);
                    write_feature(single, &fragment_name, start, stop)?;
                    write_origin(single, &extended.sequence, config.line_width)?;
                    counts.single += 1;
                }
                None => log::warn!(
                    "No sequence available for {}; skipping its single GenBank record",
                    fragment_name
                ),
            }
        }

        write_origin(grouped, &group.seq, config.line_width)?;
        counts.grouped += 1;
    }

    Ok(counts)
}

/// Extended view of a fragment: as supplied upstream, else fetched with the
/// configured padding, else the bare stored sequence.
fn extended_view(
    container: &FragmentContainer,
    group: &SequenceGroup,
    fragment: &FragmentRecord,
    config: &GenbankConfig,
) -> ExportResult<Option<ExtendedSequence>> {
    if let Some(extended) = &fragment.extended {
        return Ok(Some(extended.clone()));
    }

    let left = config.left_padding.min(fragment.start);
    let start = fragment.start - left;
    let stop = fragment.stop + 1 + config.right_padding;
    if let Some(sequence) = container.fetch_sequence(group.name(), start, stop)? {
        let core_end = (left + fragment.size()) as usize;
        return Ok(Some(ExtendedSequence {
            three_prime_cut: sequence.len().saturating_sub(core_end),
            five_prime_cut: left as usize,
            sequence,
        }));
    }

    Ok(fragment.sequence.as_ref().map(|sequence| ExtendedSequence {
        sequence: sequence.clone(),
        five_prime_cut: 0,
        three_prime_cut: 0,
    }))
}

fn write_header<W: Write>(
    writer: &mut W,
    locus: &str,
    precursor: &str,
    length: usize,
    config: &GenbankConfig,
) -> ExportResult<()> {
    let definition: String = precursor.chars().take(150).collect();
    writeln!(writer, "LOCUS       {}    {} bp    DNA     linear   UNA", locus, length)?;
    writeln!(writer, "DEFINITION  {} {} ncRNA", config.organism, definition)?;
    writeln!(writer, "ACCESSION   {}", locus)?;
    writeln!(writer, "SOURCE      {}", config.organism)?;
    writeln!(writer, "FEATURES             Location/Qualifiers")?;
    Ok(())
}

fn write_feature<W: Write>(writer: &mut W, fragment_name: &str, start: usize, stop: usize) -> ExportResult<()> {
    writeln!(writer, "     Fragment        {}..{}", start, stop)?;
    writeln!(writer, "{}/accession=\"{}\"", QUALIFIER_INDENT, fragment_name)?;
    writeln!(writer, "{}/product=\"{}\"", QUALIFIER_INDENT, fragment_name)?;
    writeln!(writer, "{}/evidence=experimental", QUALIFIER_INDENT)?;
    writeln!(writer, "{}/experiment=\"Solexa\"", QUALIFIER_INDENT)?;
    Ok(())
}

fn write_origin<W: Write>(writer: &mut W, seq: &str, width: usize) -> ExportResult<()> {
    writeln!(writer, "ORIGIN")?;
    write!(writer, "{}", format_sequence(seq, width))?;
    writeln!(writer, "//")?;
    Ok(())
}
