//! Failure modes of tree construction.
//!
//! Construction either returns a fully formed [`Tree`](crate::Tree) or
//! fails with one of the variants below; there is no partial-result mode.

use crate::sample::AttrKind;

/// An error raised while building a decision tree.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    /// The training set is empty.
    #[error("cannot build a tree from an empty sample set")]
    EmptySampleSet,

    /// `min_leaf_size` must be at least `1`.
    #[error("min_leaf_size must be at least 1, got {got}")]
    InvalidMinLeafSize {
        /// The rejected value.
        got: usize,
    },

    /// A sample holds no value for an attribute eligible for splitting.
    #[error("sample {sample} holds no value for attribute `{attr}`")]
    MissingValue {
        /// The attribute that was looked up.
        attr: String,
        /// Index of the offending sample in the training set.
        sample: usize,
    },

    /// A sample's value contradicts the attribute's inferred kind,
    /// e.g. a token where every other sample holds a number.
    #[error(
        "attribute `{attr}` is {expected} but sample {sample} \
         holds a value of the other kind"
    )]
    KindMismatch {
        /// The attribute whose values disagree.
        attr: String,
        /// Index of the offending sample in the training set.
        sample: usize,
        /// The kind inferred from the first sample.
        expected: AttrKind,
    },
}
