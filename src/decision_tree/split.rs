//! Split finders and the attribute selector.
//!
//! A numeric attribute is split by the best binary threshold, placed at
//! the midpoint between two consecutive distinct sorted values. A
//! categorical attribute is split into one group per distinct observed
//! value. The selector evaluates every candidate attribute and keeps the
//! split with the strictly greatest information gain.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

use crate::error::TreeError;
use crate::sample::{Attr, AttrKind, Category, Sample, Val};
use super::entropy::{class_counts, entropy, entropy_of_counts};

/// Information gain of a candidate split.
/// This is just a wrapper for `f64`.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
pub(crate) struct Gain(f64);

impl From<f64> for Gain {
    #[inline(always)]
    fn from(gain: f64) -> Self {
        Self(gain)
    }
}

impl Gain {
    /// Whether this split improves on the parent at all.
    #[inline]
    pub(crate) fn is_positive(&self) -> bool {
        self.0 > 0.0
    }
}

impl PartialEq for Gain {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl PartialOrd for Gain {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

/// The winning partition of one attribute.
///
/// Partition vectors hold indices into the caller's sample slice; together
/// they cover the parent's index set exactly once.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Split {
    /// Binary partition of a numeric attribute at `threshold`.
    Numeric {
        threshold: Val,
        less_equal: Vec<usize>,
        greater: Vec<usize>,
    },
    /// Full partition of a categorical attribute, one group per distinct
    /// observed value, in order of first occurrence.
    Categorical {
        groups: Vec<(Category, Vec<usize>)>,
    },
}

/// The best split found for one attribute, with its gain.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Candidate {
    pub(crate) attr: Attr,
    pub(crate) gain: Gain,
    pub(crate) split: Split,
}

/// Find the best binary threshold for a numeric attribute.
///
/// Candidate thresholds sit at the midpoints between consecutive distinct
/// values in sorted order; duplicate values produce no candidate between
/// them. Returns `None` when the attribute has fewer than two distinct
/// values. Ties are broken by the lowest threshold: the sweep runs in
/// ascending order and replaces the incumbent only on strictly greater
/// gain.
pub(crate) fn best_numeric_split<S>(
    samples: &[S],
    indices: &[usize],
    attr: &str,
    parent_entropy: f64,
) -> Result<Option<(Val, Vec<usize>, Vec<usize>, Gain)>, TreeError>
    where S: Sample,
{
    let mut entries = Vec::with_capacity(indices.len());
    for &i in indices {
        let val = samples[i].value(attr)
            .ok_or_else(|| TreeError::MissingValue {
                attr: attr.to_string(),
                sample: i,
            })?;
        let key = val.as_number()
            .ok_or_else(|| TreeError::KindMismatch {
                attr: attr.to_string(),
                sample: i,
                expected: AttrKind::Numeric,
            })?;
        entries.push((val, key, i));
    }

    entries.sort_by(|a, b| a.1.total_cmp(&b.1));

    let n = entries.len();
    let total = n as f64;

    // Move class counts from the right side to the left one boundary at a
    // time, evaluating a candidate wherever two consecutive values differ.
    let mut left: BTreeMap<_, usize> = BTreeMap::new();
    let mut right = class_counts(samples, indices);

    let mut best: Option<(usize, Val, Gain)> = None;

    for cut in 1..n {
        let class = samples[entries[cut - 1].2].class();
        *left.entry(class.clone()).or_insert(0) += 1;
        let count = right.get_mut(&class).unwrap();
        *count -= 1;
        if *count == 0 {
            right.remove(&class);
        }

        // Duplicate values admit no threshold between them.
        if entries[cut - 1].1 >= entries[cut].1 {
            continue;
        }

        let lp = cut as f64 / total;
        let rp = (n - cut) as f64 / total;
        let weighted = lp * entropy_of_counts(left.values().copied(), cut)
            + rp * entropy_of_counts(right.values().copied(), n - cut);
        let gain = Gain::from(parent_entropy - weighted);

        let better = match &best {
            Some((_, _, incumbent)) => gain > *incumbent,
            None => true,
        };
        if better {
            let threshold = entries[cut - 1].0
                .midpoint(&entries[cut].0)
                .unwrap();
            best = Some((cut, threshold, gain));
        }
    }

    Ok(best.map(|(cut, threshold, gain)| {
        let less_equal = entries[..cut].iter().map(|e| e.2).collect();
        let greater = entries[cut..].iter().map(|e| e.2).collect();
        (threshold, less_equal, greater, gain)
    }))
}

/// Partition a categorical attribute by exact value equality.
///
/// Groups appear in order of first occurrence. Returns `None` when only
/// one distinct value is present, since such a split cannot improve on
/// the parent.
pub(crate) fn best_categorical_split<S>(
    samples: &[S],
    indices: &[usize],
    attr: &str,
    parent_entropy: f64,
) -> Result<Option<(Vec<(Category, Vec<usize>)>, Gain)>, TreeError>
    where S: Sample,
{
    let mut groups: Vec<(Category, Vec<usize>)> = Vec::new();
    let mut positions: HashMap<Category, usize> = HashMap::new();

    for &i in indices {
        let val = samples[i].value(attr)
            .ok_or_else(|| TreeError::MissingValue {
                attr: attr.to_string(),
                sample: i,
            })?;
        let category = val.as_category()
            .ok_or_else(|| TreeError::KindMismatch {
                attr: attr.to_string(),
                sample: i,
                expected: AttrKind::Categorical,
            })?;

        match positions.get(&category) {
            Some(&pos) => groups[pos].1.push(i),
            None => {
                positions.insert(category.clone(), groups.len());
                groups.push((category, vec![i]));
            },
        }
    }

    if groups.len() < 2 {
        return Ok(None);
    }

    let total = indices.len() as f64;
    let weighted = groups.iter()
        .map(|(_, group)| {
            let counts = class_counts(samples, group);
            let h = entropy_of_counts(counts.into_values(), group.len());
            (group.len() as f64 / total) * h
        })
        .sum::<f64>();
    let gain = Gain::from(parent_entropy - weighted);

    Ok(Some((groups, gain)))
}

/// Evaluate every candidate attribute and pick the single best split.
///
/// The kind of each attribute is inferred from the first sample's value.
/// Attributes are scored in parallel; the winner is then chosen by a
/// sequential scan in the supplied order, replacing the incumbent only on
/// strictly greater gain, so a tie goes to the first-declared attribute.
/// Returns `None` when no attribute yields positive gain.
pub(crate) fn select_split<S>(
    samples: &[S],
    indices: &[usize],
    attrs: &[Attr],
) -> Result<Option<Candidate>, TreeError>
    where S: Sample + Sync,
{
    let parent_entropy = entropy(samples, indices);
    let first = indices[0];

    let candidates = attrs.par_iter()
        .map(|attr| {
            let kind = samples[first].value(attr)
                .ok_or_else(|| TreeError::MissingValue {
                    attr: attr.clone(),
                    sample: first,
                })?
                .kind();

            let candidate = match kind {
                AttrKind::Numeric => {
                    best_numeric_split(samples, indices, attr, parent_entropy)?
                        .map(|(threshold, less_equal, greater, gain)| {
                            Candidate {
                                attr: attr.clone(),
                                gain,
                                split: Split::Numeric {
                                    threshold, less_equal, greater,
                                },
                            }
                        })
                },
                AttrKind::Categorical => {
                    best_categorical_split(
                        samples, indices, attr, parent_entropy,
                    )?
                        .map(|(groups, gain)| Candidate {
                            attr: attr.clone(),
                            gain,
                            split: Split::Categorical { groups },
                        })
                },
            };
            Ok(candidate)
        })
        .collect::<Result<Vec<_>, TreeError>>()?;

    let mut best: Option<Candidate> = None;
    for candidate in candidates.into_iter().flatten() {
        if !candidate.gain.is_positive() {
            continue;
        }
        let better = match &best {
            Some(incumbent) => candidate.gain > incumbent.gain,
            None => true,
        };
        if better {
            best = Some(candidate);
        }
    }

    Ok(best)
}
