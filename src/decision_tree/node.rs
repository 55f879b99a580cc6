//! The induced decision tree.

use serde::{Deserialize, Serialize};

use std::collections::BTreeMap;

use crate::sample::{Attr, Attributes, Category, Class, Val};

/// A node of an induced decision tree.
///
/// A tree is exactly one of a leaf or an internal split, and an internal
/// split is exactly one of numeric or categorical; the enum makes the
/// "exactly one" invariant structural. Trees are immutable once
/// construction returns and compare structurally, so tests can assert
/// whole expected trees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Tree {
    /// A terminal node holding the class distribution of its samples.
    Leaf {
        /// Non-negative weights summing to 1.0. More than one class
        /// carries positive weight only when the leaf's samples tie on
        /// majority frequency.
        classification: BTreeMap<Class, f64>,
    },
    /// A binary split of a numeric attribute.
    NumSplit {
        /// The attribute this node splits on.
        attr: Attr,
        /// Midpoint threshold; samples with value `<=` threshold go left.
        threshold: Val,
        /// Subtree for samples with value `<=` threshold.
        less_equal: Box<Tree>,
        /// Subtree for samples with value `>` threshold.
        greater: Box<Tree>,
    },
    /// A full partition of a categorical attribute.
    ValSplit {
        /// The attribute this node splits on.
        attr: Attr,
        /// One subtree per distinct value observed at this node.
        children: BTreeMap<Category, Tree>,
    },
}

impl Tree {
    /// A leaf node over the given class distribution.
    #[inline]
    pub fn leaf(classification: BTreeMap<Class, f64>) -> Self {
        Self::Leaf { classification }
    }

    /// A numeric split node.
    #[inline]
    pub fn num_split(
        attr: Attr,
        threshold: Val,
        less_equal: Tree,
        greater: Tree,
    ) -> Self
    {
        Self::NumSplit {
            attr,
            threshold,
            less_equal: Box::new(less_equal),
            greater: Box::new(greater),
        }
    }

    /// A categorical split node.
    #[inline]
    pub fn val_split(attr: Attr, children: BTreeMap<Category, Tree>) -> Self {
        Self::ValSplit { attr, children }
    }

    /// Whether this node is a leaf.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf { .. })
    }

    /// Walk from this node to a leaf and return its class distribution.
    ///
    /// Returns `None` when the walk falls off the tree: the record misses
    /// a value, holds a non-numeric value at a numeric split, or holds a
    /// categorical value never observed during construction.
    pub fn classify<A>(&self, record: &A) -> Option<&BTreeMap<Class, f64>>
        where A: Attributes + ?Sized,
    {
        match self {
            Self::Leaf { classification } => Some(classification),
            Self::NumSplit { attr, threshold, less_equal, greater } => {
                let value = record.value(attr)?.as_number()?;
                let threshold = threshold.as_number()?;
                if value <= threshold {
                    less_equal.classify(record)
                } else {
                    greater.classify(record)
                }
            },
            Self::ValSplit { attr, children } => {
                let category = record.value(attr)?.as_category()?;
                children.get(&category)?.classify(record)
            },
        }
    }

    /// Render this tree in Graphviz dot format.
    pub fn to_dot(&self) -> String {
        let (info, _) = self.to_dot_info(0);
        format!("graph tree {{\n{}}}\n", info.concat())
    }

    fn to_dot_info(&self, id: usize) -> (Vec<String>, usize) {
        match self {
            Self::Leaf { classification } => {
                let label = classification.iter()
                    .map(|(class, weight)| format!("{class}: {weight:.2}"))
                    .collect::<Vec<_>>()
                    .join(", ");
                let info = format!(
                    "\tnode_{id} [ label = \"{label}\", shape = box ];\n",
                );

                (vec![info], id + 1)
            },
            Self::NumSplit { attr, threshold, less_equal, greater } => {
                let node = format!(
                    "\tnode_{id} [ label = \"{attr} <= {threshold} ?\" ];\n",
                );

                let left_id = id + 1;
                let (left, right_id) = less_equal.to_dot_info(left_id);
                let (mut right, return_id) = greater.to_dot_info(right_id);

                let mut info = vec![node];
                info.extend(left);
                info.append(&mut right);

                info.push(format!(
                    "\tnode_{id} -- node_{left_id} [ label = \"Yes\" ];\n",
                ));
                info.push(format!(
                    "\tnode_{id} -- node_{right_id} [ label = \"No\" ];\n",
                ));

                (info, return_id)
            },
            Self::ValSplit { attr, children } => {
                let mut info = vec![format!(
                    "\tnode_{id} [ label = \"{attr} = ?\" ];\n",
                )];

                let mut next_id = id + 1;
                for (category, child) in children {
                    let child_id = next_id;
                    let (child_info, return_id) = child.to_dot_info(child_id);
                    info.extend(child_info);
                    info.push(format!(
                        "\tnode_{id} -- node_{child_id} \
                         [ label = \"{category}\" ];\n",
                    ));
                    next_id = return_id;
                }

                (info, next_id)
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::{MapSample, Val};

    fn leaf_for(class: &str) -> Tree {
        Tree::leaf(BTreeMap::from([(Class::from(class), 1.0)]))
    }

    fn sample_tree() -> Tree {
        // height <= 3.65 ? child : (drinks ? adult : teenager)
        Tree::num_split(
            "height".to_string(),
            Val::Float(3.65),
            leaf_for("child"),
            Tree::val_split(
                "drinks".to_string(),
                BTreeMap::from([
                    (Category::Bool(true), leaf_for("adult")),
                    (Category::Bool(false), leaf_for("teenager")),
                ]),
            ),
        )
    }

    #[test]
    fn test_classify_walks_both_split_kinds() {
        let tree = sample_tree();

        let short = MapSample::labeled("?").with("height", 2.0);
        let res = tree.classify(&short).unwrap();
        assert_eq!(res, &BTreeMap::from([(Class::from("child"), 1.0)]));

        let tall_drinker = MapSample::labeled("?")
            .with("height", 5.5)
            .with("drinks", true);
        let res = tree.classify(&tall_drinker).unwrap();
        assert_eq!(res, &BTreeMap::from([(Class::from("adult"), 1.0)]));
    }

    #[test]
    fn test_classify_boundary_value_goes_less_equal() {
        let tree = sample_tree();
        let boundary = MapSample::labeled("?").with("height", 3.65);
        let res = tree.classify(&boundary).unwrap();
        assert_eq!(res, &BTreeMap::from([(Class::from("child"), 1.0)]));
    }

    #[test]
    fn test_classify_falls_off_on_missing_or_unseen_values() {
        let tree = sample_tree();

        let missing = MapSample::labeled("?");
        assert_eq!(tree.classify(&missing), None);

        let wrong_kind = MapSample::labeled("?").with("height", "tall");
        assert_eq!(tree.classify(&wrong_kind), None);

        let unseen = MapSample::labeled("?")
            .with("height", 5.5)
            .with("drinks", "sometimes");
        assert_eq!(tree.classify(&unseen), None);
    }

    #[test]
    fn test_to_dot_renders_every_node() {
        let dot = sample_tree().to_dot();

        assert!(dot.starts_with("graph tree {"));
        assert!(dot.contains("height <= 3.65 ?"));
        assert!(dot.contains("drinks = ?"));
        assert!(dot.contains("child: 1.00"));
        assert!(dot.contains("[ label = \"true\" ]"));
    }
}
