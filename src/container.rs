use crate::coords;
use crate::error::ExportResult;
use crate::fragment::FragmentRecord;
use crate::provider::SequenceProvider;
use crate::types::PrecursorRegion;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;

/// Analysis result for one precursor: the masked region, its sequence and
/// the fragments detected inside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceGroup {
    pub masked_region: PrecursorRegion,
    #[serde(default)]
    pub seq: String,
    #[serde(default)]
    pub results: Vec<FragmentRecord>,
}

impl SequenceGroup {
    pub fn new(masked_region: PrecursorRegion, seq: impl Into<String>) -> Self {
        Self {
            masked_region,
            seq: seq.into(),
            results: Vec::new(),
        }
    }

    pub fn with_fragment(mut self, fragment: FragmentRecord) -> Self {
        self.results.push(fragment);
        self
    }

    pub fn name(&self) -> &str {
        &self.masked_region.name
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Fragments in canonical numbering order.
    ///
    /// Stable sort on `start`: fragments sharing a start keep their input order
    /// and each one still gets its own ordinal.
    pub fn sorted_fragments(&self) -> Vec<&FragmentRecord> {
        let mut fragments: Vec<&FragmentRecord> = self.results.iter().collect();
        fragments.sort_by_key(|fragment| fragment.start);
        fragments
    }

    pub fn validate(&self) -> ExportResult<()> {
        for fragment in &self.results {
            fragment.validate(self.name())?;
        }
        Ok(())
    }
}

/// Aggregation root: every precursor analysed in a run, keyed by its uid.
///
/// Keys iterate in lexicographic order; groups sharing a uid keep their
/// insertion order. A bound [`SequenceProvider`] resolves fragment sequences
/// lazily at export time.
pub struct FragmentContainer {
    sequences: BTreeMap<String, Vec<SequenceGroup>>,
    provider: RefCell<Option<Box<dyn SequenceProvider>>>,
}

impl FragmentContainer {
    pub fn new() -> Self {
        Self {
            sequences: BTreeMap::new(),
            provider: RefCell::new(None),
        }
    }

    /// Ingest one precursor result.
    ///
    /// A provided sequence provider replaces the current binding for the whole
    /// container; `None` keeps whatever is bound. Groups holding a fragment with
    /// `start > stop` are rejected and leave the container unchanged.
    pub fn add_fragments(
        &mut self,
        result: SequenceGroup,
        sequence_provider: Option<Box<dyn SequenceProvider>>,
    ) -> ExportResult<()> {
        result.validate()?;

        let uid = result.masked_region.uid();
        log::debug!(
            "Adding {} fragment(s) for precursor {} ({})",
            result.results.len(),
            uid,
            result.masked_region
        );
        self.sequences.entry(uid).or_default().push(result);

        if let Some(provider) = sequence_provider {
            self.set_sequence_provider(provider);
        }
        Ok(())
    }

    pub fn set_sequence_provider(&mut self, provider: Box<dyn SequenceProvider>) {
        *self.provider.get_mut() = Some(provider);
    }

    pub fn has_sequence_provider(&self) -> bool {
        self.provider.borrow().is_some()
    }

    /// Number of distinct precursor ids
    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    pub fn uids(&self) -> impl Iterator<Item = &str> {
        self.sequences.keys().map(String::as_str)
    }

    pub fn get(&self, uid: &str) -> Option<&[SequenceGroup]> {
        self.sequences.get(uid).map(Vec::as_slice)
    }

    /// All groups in export order
    pub fn groups(&self) -> impl Iterator<Item = &SequenceGroup> {
        self.sequences.values().flat_map(|groups| groups.iter())
    }

    /// Groups that carry at least one fragment, in export order
    pub fn non_empty_groups(&self) -> impl Iterator<Item = &SequenceGroup> {
        self.groups().filter(|group| !group.is_empty())
    }

    pub fn fragment_count(&self) -> usize {
        self.groups().map(|group| group.results.len()).sum()
    }

    /// Fetch `[start, stop)` from the bound provider, `None` when nothing is bound
    pub fn fetch_sequence(&self, name: &str, start: u64, stop: u64) -> ExportResult<Option<String>> {
        let mut provider = self.provider.borrow_mut();
        match provider.as_mut() {
            Some(provider) => Ok(Some(provider.fetch(name, start, stop)?)),
            None => Ok(None),
        }
    }

    /// Reference sequence of a fragment through the bound provider
    pub fn fragment_sequence(
        &self,
        region: &PrecursorRegion,
        fragment: &FragmentRecord,
    ) -> ExportResult<Option<String>> {
        let (start, stop) = coords::fetch_interval(fragment);
        self.fetch_sequence(&region.name, start, stop)
    }
}

impl Default for FragmentContainer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for FragmentContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FragmentContainer")
            .field("sequences", &self.sequences)
            .field("has_sequence_provider", &self.has_sequence_provider())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::MemoryProvider;

    fn group(name: &str, start: u64, stop: u64) -> SequenceGroup {
        SequenceGroup::new(PrecursorRegion::new(name, start, stop), "")
    }

    #[test]
    fn test_uids_are_sorted() {
        let mut container = FragmentContainer::new();
        container.add_fragments(group("mir-b", 10, 20), None).unwrap();
        container.add_fragments(group("mir-a", 30, 40), None).unwrap();
        container.add_fragments(group("mir-a", 1, 5), None).unwrap();

        let uids: Vec<_> = container.uids().collect();
        assert_eq!(uids, vec!["mir-a_1_5", "mir-a_30_40", "mir-b_10_20"]);
    }

    #[test]
    fn test_duplicate_uid_keeps_insertion_order() {
        let mut container = FragmentContainer::new();
        container.add_fragments(group("mir-a", 1, 5).with_fragment(FragmentRecord::new(1, 2, 1, 0)), None).unwrap();
        container.add_fragments(group("mir-a", 1, 5), None).unwrap();

        assert_eq!(container.len(), 1);
        let groups = container.get("mir-a_1_5").unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].results.len(), 1);
        assert!(groups[1].is_empty());
        assert_eq!(container.non_empty_groups().count(), 1);
    }

    #[test]
    fn test_inverted_fragment_rejected_at_ingestion() {
        let mut container = FragmentContainer::new();
        let result = container.add_fragments(
            group("mir-a", 0, 50).with_fragment(FragmentRecord::new(30, 10, 0, 0)),
            None,
        );
        assert!(matches!(
            result,
            Err(crate::error::ExportError::InvalidFragment { start: 30, stop: 10, .. })
        ));
        assert!(container.is_empty());
    }

    #[test]
    fn test_sorted_fragments_keep_duplicate_starts() {
        let group = group("mir-a", 0, 100)
            .with_fragment(FragmentRecord::new(50, 60, 1, 1))
            .with_fragment(FragmentRecord::new(10, 20, 2, 2))
            .with_fragment(FragmentRecord::new(10, 25, 3, 3));

        let starts: Vec<_> = group
            .sorted_fragments()
            .iter()
            .map(|f| (f.start, f.stop))
            .collect();
        assert_eq!(starts, vec![(10, 20), (10, 25), (50, 60)]);
    }

    #[test]
    fn test_provider_binding() {
        let mut container = FragmentContainer::new();
        assert!(!container.has_sequence_provider());
        assert_eq!(container.fetch_sequence("chr1", 0, 2).unwrap(), None);

        let provider = MemoryProvider::new().with_sequence("chr1", "ACGTACGT");
        container.add_fragments(group("chr1", 0, 8), Some(Box::new(provider))).unwrap();
        container.add_fragments(group("chr1", 8, 16), None).unwrap();

        assert!(container.has_sequence_provider());
        let fragment = FragmentRecord::new(2, 4, 0, 0);
        let region = PrecursorRegion::new("chr1", 0, 8);
        assert_eq!(
            container.fragment_sequence(&region, &fragment).unwrap(),
            Some("GTA".to_string())
        );
    }
}
