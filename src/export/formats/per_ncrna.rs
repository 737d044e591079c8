use crate::config::TableConfig;
use crate::container::{FragmentContainer, SequenceGroup};
use crate::error::ExportResult;
use crate::fragment::FragmentRecord;
use std::io::Write;

/// Column letter(s) of a fragment slot: A..Z, then AA, AB, ...
pub fn slot_label(index: usize) -> String {
    let mut label = Vec::new();
    let mut n = index + 1;
    while n > 0 {
        let rem = (n - 1) % 26;
        label.push(b'A' + rem as u8);
        n = (n - 1) / 26;
    }
    label.reverse();
    String::from_utf8_lossy(&label).into_owned()
}

/// Number of fragment slots in the header; widened past the minimum if any
/// precursor carries more fragments.
pub fn slot_count(container: &FragmentContainer, config: &TableConfig) -> usize {
    container
        .non_empty_groups()
        .map(|group| group.results.len())
        .max()
        .unwrap_or(0)
        .max(config.min_fragment_slots)
}

/// One row per precursor with its fragments laid out positionally.
/// Returns the number of rows written.
pub fn write_per_ncrna<W: Write>(
    container: &FragmentContainer,
    writer: &mut W,
    config: &TableConfig,
) -> ExportResult<usize> {
    let slots = slot_count(container, config);
    if slots > config.min_fragment_slots {
        log::info!(
            "Widening per-ncRNA table to {} fragment slots (minimum {})",
            slots,
            config.min_fragment_slots
        );
    }

    write!(writer, "NAME\tCurated\tUnreliable")?;
    for i in 0..slots {
        let letter = slot_label(i);
        write!(
            writer,
            "\tFragment-{0}-Start\tFragment-{0}-Stop\tFragment-{0}-Sequence",
            letter
        )?;
    }
    writeln!(writer)?;

    let mut rows = 0;
    for group in container.non_empty_groups() {
        let mut row = format!("{}\tNo\t?", group.name());

        let fragments = group.sorted_fragments();
        for fragment in &fragments {
            let sequence = resolve_sequence(container, group, fragment)?;
            row.push_str(&format!("\t{}\t{}\t{}", fragment.start, fragment.stop, sequence));
        }
        for _ in fragments.len()..slots {
            row.push_str("\t\t\t");
        }

        writeln!(writer, "{}", row)?;
        rows += 1;
    }

    Ok(rows)
}

fn resolve_sequence(
    container: &FragmentContainer,
    group: &SequenceGroup,
    fragment: &FragmentRecord,
) -> ExportResult<String> {
    if let Some(sequence) = &fragment.sequence {
        return Ok(sequence.clone());
    }
    Ok(container
        .fragment_sequence(&group.masked_region, fragment)?
        .unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_labels() {
        assert_eq!(slot_label(0), "A");
        assert_eq!(slot_label(24), "Y");
        assert_eq!(slot_label(25), "Z");
        assert_eq!(slot_label(26), "AA");
        assert_eq!(slot_label(27), "AB");
        assert_eq!(slot_label(51), "AZ");
        assert_eq!(slot_label(52), "BA");
    }
}
