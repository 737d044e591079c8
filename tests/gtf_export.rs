mod common;

use common::{container, empty_group, mir_group, other_group};
use flaimapper::config::Config;
use flaimapper::FragmentContainer;
use std::fs;
use tempfile::NamedTempFile;

#[test]
fn gtf_lines_are_one_based_and_scored() {
    let tmp_out = NamedTempFile::new().expect("create temp output file");
    let container = container(vec![mir_group()]);

    let summary = container
        .export_gtf(tmp_out.path().to_str().unwrap(), &Config::default())
        .expect("GTF export");
    assert_eq!(summary.records, 2);

    let source = format!("flaimapper-v{}", env!("CARGO_PKG_VERSION"));
    let contents = fs::read_to_string(tmp_out.path()).expect("read output");
    let lines: Vec<_> = contents.lines().collect();
    assert_eq!(
        lines,
        vec![
            format!("chr1_mir\t{}\tsncdRNA\t1001\t1021\t8\t.\t.\tgene_id \"FM_chr1_mir_000000000001\"", source),
            format!("chr1_mir\t{}\tsncdRNA\t1026\t1046\t11\t.\t.\tgene_id \"FM_chr1_mir_000000000002\"", source),
        ]
    );
}

#[test]
fn gtf_ordinals_restart_per_precursor() {
    let tmp_out = NamedTempFile::new().expect("create temp output file");
    let container = container(vec![other_group(), empty_group(), mir_group()]);

    container
        .export_gtf(tmp_out.path().to_str().unwrap(), &Config::default())
        .expect("GTF export");

    let contents = fs::read_to_string(tmp_out.path()).expect("read output");
    let ids: Vec<_> = contents
        .lines()
        .map(|line| line.rsplit('\t').next().unwrap().to_string())
        .collect();
    assert_eq!(
        ids,
        vec![
            "gene_id \"FM_chr1_mir_000000000001\"",
            "gene_id \"FM_chr1_mir_000000000002\"",
            "gene_id \"FM_chr2_snord_000000000001\"",
        ]
    );
}

#[test]
fn gtf_uses_configured_source() {
    let tmp_out = NamedTempFile::new().expect("create temp output file");
    let container = container(vec![other_group()]);
    let config = Config::from_toml("[gtf]\nsource = \"custom\"\n").expect("parse config");

    container
        .write(4, tmp_out.path().to_str().unwrap(), &config)
        .expect("GTF export");

    let contents = fs::read_to_string(tmp_out.path()).expect("read output");
    assert_eq!(contents, "chr2_snord\tcustom\tsncdRNA\t41\t61\t2\t.\t.\tgene_id \"FM_chr2_snord_000000000001\"\n");
}

#[test]
fn gtf_empty_container_writes_nothing() {
    let tmp_out = NamedTempFile::new().expect("create temp output file");
    let summary = FragmentContainer::new()
        .export_gtf(tmp_out.path().to_str().unwrap(), &Config::default())
        .expect("GTF export");
    assert_eq!(summary.records, 0);
    assert!(fs::read_to_string(tmp_out.path()).unwrap().is_empty());
}
