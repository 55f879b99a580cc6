//! Attribute values and class labels.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use std::fmt;

/// The value a sample holds for one attribute.
///
/// Numeric values (`Int`, `Float`) support ordering comparison through
/// [`Val::as_number`]; discrete values (`Bool`, `Token`) support equality
/// only. An attribute whose samples mix the two kinds is rejected during
/// construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Val {
    /// An integer-valued numeric attribute.
    Int(i64),
    /// A real-valued numeric attribute.
    Float(f64),
    /// A boolean attribute.
    Bool(bool),
    /// An arbitrary discrete token.
    Token(String),
}

/// The kind of an attribute, inferred from the values its samples hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttrKind {
    /// Ordered values split by a binary threshold.
    Numeric,
    /// Discrete values split into one group per distinct value.
    Categorical,
}

impl fmt::Display for AttrKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Numeric => "numeric",
            Self::Categorical => "categorical",
        };
        write!(f, "{name}")
    }
}

impl Val {
    /// The kind this value belongs to.
    #[inline]
    pub fn kind(&self) -> AttrKind {
        match self {
            Self::Int(_) | Self::Float(_) => AttrKind::Numeric,
            Self::Bool(_) | Self::Token(_) => AttrKind::Categorical,
        }
    }

    /// The value as a number, if it is numeric.
    #[inline]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Int(v) => Some(*v as f64),
            Self::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// The value as a discrete category, if it is categorical.
    #[inline]
    pub fn as_category(&self) -> Option<Category> {
        match self {
            Self::Bool(b) => Some(Category::Bool(*b)),
            Self::Token(t) => Some(Category::Token(t.clone())),
            _ => None,
        }
    }

    /// The midpoint between two numeric values.
    ///
    /// Two integers yield an integer midpoint, flooring so the midpoint
    /// never lands on the larger of two consecutive values; an
    /// all-integer attribute keeps integer thresholds. Any float operand
    /// yields a float midpoint. Returns `None` unless both values are
    /// numeric.
    #[inline]
    pub fn midpoint(&self, other: &Self) -> Option<Self> {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => {
                // Sum in i128 so extreme values cannot overflow.
                let mid = (*a as i128 + *b as i128).div_euclid(2);
                Some(Self::Int(mid as i64))
            },
            _ => {
                let a = self.as_number()?;
                let b = other.as_number()?;
                Some(Self::Float((a + b) / 2.0))
            },
        }
    }
}

impl From<i64> for Val {
    fn from(v: i64) -> Self { Self::Int(v) }
}

impl From<i32> for Val {
    fn from(v: i32) -> Self { Self::Int(v as i64) }
}

impl From<f64> for Val {
    fn from(v: f64) -> Self { Self::Float(v) }
}

impl From<bool> for Val {
    fn from(v: bool) -> Self { Self::Bool(v) }
}

impl From<&str> for Val {
    fn from(v: &str) -> Self { Self::Token(v.to_string()) }
}

impl From<String> for Val {
    fn from(v: String) -> Self { Self::Token(v) }
}

impl fmt::Display for Val {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Token(v) => write!(f, "{v}"),
        }
    }
}

/// A discrete, equality-comparable value.
///
/// Used both as the key of a categorical split and, via the [`Class`]
/// alias, as the label a tree predicts. The derived `Ord` gives
/// categorical children and leaf distributions a stable order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    /// A boolean value.
    Bool(bool),
    /// An integer label.
    Int(i64),
    /// An arbitrary token.
    Token(String),
}

/// The label a tree is trained to predict.
pub type Class = Category;

impl From<bool> for Category {
    fn from(v: bool) -> Self { Self::Bool(v) }
}

impl From<i64> for Category {
    fn from(v: i64) -> Self { Self::Int(v) }
}

impl From<i32> for Category {
    fn from(v: i32) -> Self { Self::Int(v as i64) }
}

impl From<&str> for Category {
    fn from(v: &str) -> Self { Self::Token(v.to_string()) }
}

impl From<String> for Category {
    fn from(v: String) -> Self { Self::Token(v) }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Token(v) => write!(f, "{v}"),
        }
    }
}

// Categories appear as map keys in leaf distributions and categorical
// splits, so they (de)serialize as plain strings. Parsing prefers bool,
// then integer, then token; a token that spells a bool or an integer
// does not survive a round trip through a string-keyed format.
impl Serialize for Category {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        let category = match text.as_str() {
            "true" => Self::Bool(true),
            "false" => Self::Bool(false),
            _ => match text.parse::<i64>() {
                Ok(v) => Self::Int(v),
                Err(_) => Self::Token(text),
            },
        };
        Ok(category)
    }
}
