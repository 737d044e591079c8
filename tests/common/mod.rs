#![allow(dead_code)]

use flaimapper::{FragmentContainer, FragmentRecord, PrecursorRegion, SequenceGroup};
use std::fs;
use std::path::{Path, PathBuf};

/// Precursor `chr1_mir` (1000-1050) with two fragments, added out of order
pub fn mir_group() -> SequenceGroup {
    SequenceGroup::new(PrecursorRegion::new("chr1_mir", 1000, 1050), "ACGU".repeat(13))
        .with_fragment(FragmentRecord::new(1025, 1045, 2, 9).with_sequence("CCCCCCCCCCCCCCCCCCCCC"))
        .with_fragment(FragmentRecord::new(1000, 1020, 5, 3).with_sequence("AAAAAAAAAAAAAAAAAAAAA"))
}

pub fn other_group() -> SequenceGroup {
    SequenceGroup::new(PrecursorRegion::new("chr2_snord", 10, 90), "G".repeat(81))
        .with_fragment(FragmentRecord::new(40, 60, 1, 1).with_sequence("GGGGGGGGGGGGGGGGGGGGG"))
}

pub fn empty_group() -> SequenceGroup {
    SequenceGroup::new(PrecursorRegion::new("chr3_trna", 5, 80), "U".repeat(76))
}

pub fn container(groups: Vec<SequenceGroup>) -> FragmentContainer {
    let mut container = FragmentContainer::new();
    for group in groups {
        container.add_fragments(group, None).expect("valid group");
    }
    container
}

/// Reference of `len` nucleotides cycling through ACGT
pub fn reference(len: usize) -> String {
    "ACGT".chars().cycle().take(len).collect()
}

/// Single-record `reference.fa` plus its `.fai` in `dir`
pub fn write_indexed_fasta(dir: &Path, name: &str, seq: &str) -> PathBuf {
    let fasta = dir.join("reference.fa");
    fs::write(&fasta, format!(">{}\n{}\n", name, seq)).expect("write FASTA");
    let offset = name.len() + 2;
    fs::write(
        dir.join("reference.fa.fai"),
        format!("{}\t{}\t{}\t{}\t{}\n", name, seq.len(), offset, seq.len(), seq.len() + 1),
    )
    .expect("write FASTA index");
    fasta
}
