//! Recursive ID3 tree construction.

use std::collections::BTreeMap;

use crate::error::TreeError;
use crate::sample::{Attr, Class, Sample};
use super::entropy::class_counts;
use super::node::Tree;
use super::split::{select_split, Split};

/// Builds a [`Tree`] from a labeled sample set.
///
/// # Example
/// ```
/// use idtree::{MapSample, TreeBuilder};
///
/// let samples = vec![
///     MapSample::labeled("child").with("age", 4),
///     MapSample::labeled("child").with("age", 6),
///     MapSample::labeled("adult").with("age", 30),
///     MapSample::labeled("adult").with("age", 28),
/// ];
/// let attrs = vec!["age".to_string()];
///
/// let tree = TreeBuilder::new()
///     .min_leaf_size(1)
///     .build(&samples, &attrs)
///     .unwrap();
/// assert!(!tree.is_leaf());
/// ```
#[derive(Debug, Clone)]
pub struct TreeBuilder {
    min_leaf_size: usize,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeBuilder {
    /// Construct a builder with the default minimum leaf size of `1`.
    pub fn new() -> Self {
        Self { min_leaf_size: 1 }
    }

    /// A node whose sample count is at most `size` becomes a leaf.
    /// Values below `1` are rejected by [`TreeBuilder::build`].
    pub fn min_leaf_size(mut self, size: usize) -> Self {
        self.min_leaf_size = size;
        self
    }

    /// Build a tree over `samples`, splitting on the attributes in
    /// `attrs`.
    ///
    /// The supplied attribute order is the tie-break order for splits of
    /// equal gain and is kept for every recursive level, so identical
    /// inputs always produce structurally identical trees.
    pub fn build<S>(&self, samples: &[S], attrs: &[Attr])
        -> Result<Tree, TreeError>
        where S: Sample + Sync,
    {
        if samples.is_empty() {
            return Err(TreeError::EmptySampleSet);
        }
        if self.min_leaf_size < 1 {
            return Err(TreeError::InvalidMinLeafSize {
                got: self.min_leaf_size,
            });
        }

        let indices = (0..samples.len()).collect::<Vec<_>>();
        grow(samples, indices, attrs, self.min_leaf_size)
    }
}

/// Build a decision tree with the ID3 algorithm.
///
/// The sole entry point of the induction engine; equivalent to
/// [`TreeBuilder::new().min_leaf_size(min_leaf_size).build(..)`](TreeBuilder).
pub fn build_tree<S>(
    samples: &[S],
    attrs: &[Attr],
    min_leaf_size: usize,
) -> Result<Tree, TreeError>
    where S: Sample + Sync,
{
    TreeBuilder::new()
        .min_leaf_size(min_leaf_size)
        .build(samples, attrs)
}

/// Grow a subtree over the selected samples.
///
/// Each recursive call owns its index vector exclusively; a split always
/// partitions into strict, non-empty subsets, so recursion terminates
/// even though numeric attributes stay eligible at every level.
fn grow<S>(
    samples: &[S],
    indices: Vec<usize>,
    attrs: &[Attr],
    min_leaf_size: usize,
) -> Result<Tree, TreeError>
    where S: Sample + Sync,
{
    if indices.len() <= min_leaf_size || single_class(samples, &indices) {
        return Ok(Tree::leaf(classification(samples, &indices)));
    }

    // No positive-gain split is a normal terminal condition.
    let Some(winner) = select_split(samples, &indices, attrs)? else {
        return Ok(Tree::leaf(classification(samples, &indices)));
    };

    match winner.split {
        Split::Numeric { threshold, less_equal, greater } => {
            let less_equal = grow(samples, less_equal, attrs, min_leaf_size)?;
            let greater = grow(samples, greater, attrs, min_leaf_size)?;
            Ok(Tree::num_split(winner.attr, threshold, less_equal, greater))
        },
        Split::Categorical { groups } => {
            let mut children = BTreeMap::new();
            for (category, group) in groups {
                let child = grow(samples, group, attrs, min_leaf_size)?;
                children.insert(category, child);
            }
            Ok(Tree::val_split(winner.attr, children))
        },
    }
}

/// Whether every selected sample shares one class.
fn single_class<S>(samples: &[S], indices: &[usize]) -> bool
    where S: Sample,
{
    let first = samples[indices[0]].class();
    indices[1..].iter().all(|&i| samples[i].class() == first)
}

/// The leaf distribution over the selected samples: classes tied for the
/// maximum frequency share the weight equally, all others are omitted.
fn classification<S>(samples: &[S], indices: &[usize])
    -> BTreeMap<Class, f64>
    where S: Sample,
{
    let counts = class_counts(samples, indices);
    let top = counts.values().copied().max().unwrap();
    let tied = counts.values().filter(|&&c| c == top).count();
    let share = 1.0 / tied as f64;

    counts.into_iter()
        .filter(|&(_, count)| count == top)
        .map(|(class, _)| (class, share))
        .collect()
}
