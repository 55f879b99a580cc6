#![warn(missing_docs)]

//!
//! Decision tree induction with the ID3 algorithm.
//!
//! Given a labeled sample set, [`build_tree`] recursively partitions it by
//! the attribute that most reduces the entropy of the class label, until a
//! partition is pure, exhausted of useful attributes, or too small to
//! split further. Numeric attributes split by a binary threshold placed at
//! the midpoint between consecutive distinct values; categorical
//! attributes split into one subtree per distinct value.
//!
//! # Example
//!
//! ```
//! use idtree::{build_tree, Class, MapSample, Tree, Val};
//!
//! let samples = vec![
//!     MapSample::labeled("child").with("age", 3),
//!     MapSample::labeled("child").with("age", 5),
//!     MapSample::labeled("adult").with("age", 28),
//!     MapSample::labeled("adult").with("age", 30),
//! ];
//! let attrs = vec!["age".to_string()];
//!
//! let tree = build_tree(&samples, &attrs, 1).unwrap();
//!
//! let unseen = MapSample::labeled("?").with("age", 4);
//! let classification = tree.classify(&unseen).unwrap();
//! assert_eq!(classification[&Class::from("child")], 1.0);
//! ```
//!
//! Construction is deterministic: the supplied attribute order breaks
//! gain ties, and identical inputs always produce structurally identical
//! trees. The induced [`Tree`] is immutable, compares structurally, and
//! serializes with `serde`.

pub mod error;
pub mod sample;
pub mod decision_tree;

pub use error::TreeError;
pub use sample::{Attr, AttrKind, Attributes, Category, Class, MapSample,
                 Sample, Val};
pub use decision_tree::{build_tree, Tree, TreeBuilder};
