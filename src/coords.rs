//! Conversions between the three coordinate spaces used by the exporters.
//!
//! * absolute: positions on the reference sequence, as stored on fragments
//! * precursor-relative: offset from the start of the masked region
//! * fragment-local: offsets into an extracted (extended) fragment sequence
//!
//! Relative values are always derived on demand from absolute ones and never stored.

use crate::fragment::{ExtendedSequence, FragmentRecord};
use crate::types::PrecursorRegion;

/// Absolute position translated into the precursor's coordinate space.
///
/// Signed because a fragment may start upstream of a corrected region start.
pub fn to_precursor(absolute: u64, region: &PrecursorRegion) -> i64 {
    absolute as i64 - region.start as i64
}

/// Half-open interval for a provider fetch covering the inclusive `[start, stop]` fragment
pub fn fetch_interval(fragment: &FragmentRecord) -> (u64, u64) {
    (fragment.start, fragment.stop + 1)
}

/// 1-based inclusive GTF span
pub fn gtf_span(fragment: &FragmentRecord) -> (u64, u64) {
    (fragment.start + 1, fragment.stop + 1)
}

/// Feature span of a fragment inside a grouped GenBank record
pub fn genbank_grouped_span(fragment: &FragmentRecord) -> (u64, u64) {
    (fragment.start + 1, fragment.stop)
}

/// Fragment-local 1-based span of the core fragment within its extended sequence
pub fn extended_span(extended: &ExtendedSequence) -> (usize, usize) {
    (
        extended.five_prime_cut + 1,
        extended.sequence.len().saturating_sub(extended.three_prime_cut),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precursor_round_trip() {
        let region = PrecursorRegion::new("chr1_mir", 1000, 1050);
        for start in [990u64, 1000, 1025, 1049] {
            let relative = to_precursor(start, &region);
            assert_eq!(relative + region.start as i64, start as i64);
        }
        assert_eq!(to_precursor(990, &region), -10);
    }

    #[test]
    fn test_extended_span() {
        let extended = ExtendedSequence {
            sequence: "NNNACGTACGTNNNNN".to_string(),
            five_prime_cut: 3,
            three_prime_cut: 5,
        };
        assert_eq!(extended_span(&extended), (4, 11));
    }
}
