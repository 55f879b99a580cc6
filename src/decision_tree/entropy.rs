//! Shannon entropy of a class-label distribution.

use std::collections::BTreeMap;

use crate::sample::{Class, Sample};

/// Count the occurrences of each class over the selected samples.
#[inline]
pub(crate) fn class_counts<S>(samples: &[S], indices: &[usize])
    -> BTreeMap<Class, usize>
    where S: Sample,
{
    let mut counts = BTreeMap::new();
    for &i in indices {
        *counts.entry(samples[i].class()).or_insert(0) += 1;
    }
    counts
}

/// Base-2 Shannon entropy of a count distribution:
/// `H = -Σ p_c log2(p_c)` over classes with positive count.
///
/// `total` is the number of samples the counts were taken over. Callers
/// guarantee `total > 0`.
#[inline]
pub(crate) fn entropy_of_counts<I>(counts: I, total: usize) -> f64
    where I: IntoIterator<Item = usize>,
{
    let total = total as f64;
    counts.into_iter()
        .filter(|&c| c > 0)
        .map(|c| {
            let p = c as f64 / total;
            -p * p.log2()
        })
        .sum::<f64>()
}

/// Entropy of the empirical class distribution over the selected samples.
/// Callers guarantee `indices` is non-empty.
#[inline]
pub(crate) fn entropy<S>(samples: &[S], indices: &[usize]) -> f64
    where S: Sample,
{
    let counts = class_counts(samples, indices);
    entropy_of_counts(counts.into_values(), indices.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::MapSample;

    const TEST_TOLERANCE: f64 = 1e-9;

    #[test]
    fn test_entropy_pure_set_is_zero() {
        let samples = vec![
            MapSample::labeled("child"),
            MapSample::labeled("child"),
            MapSample::labeled("child"),
        ];
        let ix = [0, 1, 2];
        let res = entropy(&samples, &ix);
        assert!(res.abs() < TEST_TOLERANCE, "expected 0, got {res}.");
    }

    #[test]
    fn test_entropy_balanced_binary_is_one() {
        let samples = vec![
            MapSample::labeled("child"),
            MapSample::labeled("adult"),
            MapSample::labeled("child"),
            MapSample::labeled("adult"),
        ];
        let ix = [0, 1, 2, 3];
        let res = entropy(&samples, &ix);
        assert!(
            (res - 1.0).abs() < TEST_TOLERANCE,
            "expected 1, got {res}.",
        );
    }

    #[test]
    fn test_entropy_three_classes() {
        // H(4/9, 3/9, 2/9).
        let mut samples = Vec::new();
        samples.extend((0..4).map(|_| MapSample::labeled("child")));
        samples.extend((0..3).map(|_| MapSample::labeled("teenager")));
        samples.extend((0..2).map(|_| MapSample::labeled("adult")));
        let ix = (0..9).collect::<Vec<_>>();

        let exp = [4.0, 3.0, 2.0].iter()
            .map(|c| {
                let p: f64 = c / 9.0;
                -p * p.log2()
            })
            .sum::<f64>();
        let res = entropy(&samples, &ix);
        assert!(
            (res - exp).abs() < TEST_TOLERANCE,
            "expected {exp}, got {res}.",
        );
    }

    #[test]
    fn test_entropy_respects_index_subset() {
        let samples = vec![
            MapSample::labeled("child"),
            MapSample::labeled("adult"),
            MapSample::labeled("child"),
        ];
        // Only the two `child` samples.
        let ix = [0, 2];
        let res = entropy(&samples, &ix);
        assert!(res.abs() < TEST_TOLERANCE, "expected 0, got {res}.");
    }
}
