//! Skinfold site catalog and measurement-document key resolution.

use std::collections::HashMap;

use crate::types::Protocol;

/// Anatomical sites the supported protocols draw from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Site {
    Triceps,
    Biceps,
    Chest,
    Subscapular,
    Axillary,
    Suprailiac,
    Abdomen,
    Thigh,
}

impl Site {
    /// Candidate document keys for this site, canonical spelling first.
    /// Documents written through the Portuguese intake forms use the
    /// alias spellings.
    pub fn candidate_keys(&self) -> &'static [&'static str] {
        match self {
            Site::Triceps => &["triceps"],
            Site::Biceps => &["biceps"],
            Site::Chest => &["chest", "peitoral"],
            Site::Subscapular => &["subscapular", "subescapular"],
            Site::Axillary => &["axillary", "axilar"],
            Site::Suprailiac => &["suprailiac", "supra"],
            Site::Abdomen => &["abdomen", "abdominal"],
            Site::Thigh => &["thigh", "coxa"],
        }
    }
}

pub const JP3_SITES: [Site; 3] = [Site::Chest, Site::Abdomen, Site::Thigh];

pub const JP7_SITES: [Site; 7] = [
    Site::Triceps,
    Site::Chest,
    Site::Subscapular,
    Site::Axillary,
    Site::Suprailiac,
    Site::Abdomen,
    Site::Thigh,
];

pub const DW4_SITES: [Site; 4] = [
    Site::Biceps,
    Site::Triceps,
    Site::Subscapular,
    Site::Suprailiac,
];

impl Protocol {
    /// Sites this protocol consumes, in summation order. Empty for
    /// `Unknown`, which `compute` rejects before summing.
    pub fn sites(&self) -> &'static [Site] {
        match self {
            Protocol::Jp3 => &JP3_SITES,
            Protocol::Jp7 => &JP7_SITES,
            Protocol::Dw4 => &DW4_SITES,
            Protocol::Unknown => &[],
        }
    }
}

/// First-non-zero lookup over the site's candidate keys. A site whose
/// keys are all absent or zero contributes 0 to the protocol sum; this
/// is deliberate policy, not a validation gap.
pub fn fold_value(folds: &HashMap<String, f64>, site: Site) -> f64 {
    for key in site.candidate_keys() {
        if let Some(&value) = folds.get(*key) {
            if value != 0.0 {
                return value;
            }
        }
    }
    0.0
}

/// Sum the given sites' measurements out of a raw fold map.
pub fn sum_folds(folds: &HashMap<String, f64>, sites: &[Site]) -> f64 {
    sites.iter().map(|site| fold_value(folds, *site)).sum()
}
