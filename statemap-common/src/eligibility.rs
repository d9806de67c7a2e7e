use crate::RegionRecord;
use std::collections::HashMap;

/// Regions with a content PDF on disk.
pub const CONTENT_STATES: &[&str] = &[
    "Alabama",
    "Arizona",
    "Arkansas",
    "California",
    "Colorado",
    "Connecticut",
    "Florida",
    "Georgia",
    "Illinois",
    "Indiana",
    "Iowa",
    "Kansas",
    "Kentucky",
    "Louisiana",
    "Maryland",
    "Massachusetts",
    "Michigan",
    "Minnesota",
    "Mississippi",
    "Missouri",
    "Nebraska",
    "New Hampshire",
    "New Jersey",
    "New Mexico",
    "New York",
    "North Carolina",
    "Ohio",
    "Oklahoma",
    "Oregon",
    "Pennsylvania",
    "South Carolina",
    "Tennessee",
    "Utah",
    "Virginia",
    "Washington",
];

/// Lookup from topology feature id (`RegionRecord::val`) to "has content".
///
/// Built once from the region fixture and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Eligibility {
    by_val: HashMap<String, bool>,
}

impl Eligibility {
    pub fn derive(regions: &[RegionRecord]) -> Self {
        Self::derive_with(regions, CONTENT_STATES)
    }

    pub fn derive_with(regions: &[RegionRecord], content_states: &[&str]) -> Self {
        let by_val = regions
            .iter()
            .map(|r| (r.val.clone(), content_states.contains(&r.name.as_str())))
            .collect();
        Self { by_val }
    }

    /// Unknown ids are never clickable.
    pub fn is_eligible(&self, val: &str) -> bool {
        self.get(val).unwrap_or(false)
    }

    pub fn get(&self, val: &str) -> Option<bool> {
        self.by_val.get(val).copied()
    }

    pub fn len(&self) -> usize {
        self.by_val.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_val.is_empty()
    }

    pub fn eligible_count(&self) -> usize {
        self.by_val.values().filter(|v| **v).count()
    }
}
