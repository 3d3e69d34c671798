//! Attribute tree produced by the Liberty parser.

use std::fmt;

/// A parsed Liberty library: owns the root `library` group and everything below it.
#[derive(Debug, Clone, PartialEq)]
pub struct Library {
    root: Group,
}

impl Library {
    /// Wrap a root group. The parser only calls this for `library` groups.
    pub(crate) fn new(root: Group) -> Self {
        Self { root }
    }

    /// The root `library` group.
    pub fn root(&self) -> &Group {
        &self.root
    }

    /// The library's instance name, e.g. `asap7sc7p5t` for `library (asap7sc7p5t) { ... }`.
    pub fn name(&self) -> &str {
        &self.root.instance_name
    }

    /// Take ownership of the root group.
    pub fn into_root(self) -> Group {
        self.root
    }
}

/// A `kind (args) { ... }` block.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    /// Group keyword (`library`, `cell`, `pin`, `timing`, ...). Never empty.
    pub group_kind: String,
    /// Argument texts joined with `","`; empty for groups without arguments.
    pub instance_name: String,
    /// Parsed arguments
    pub args: Vec<Scalar>,
    /// Statements in source order
    pub children: Vec<Statement>,
}

impl Group {
    /// Nested groups, in source order.
    pub fn groups(&self) -> impl Iterator<Item = &Group> {
        self.children.iter().filter_map(|child| match child {
            Statement::Group(group) => Some(group),
            Statement::SimpleAttribute { .. } | Statement::ComplexAttribute { .. } => None,
        })
    }

    /// `name : value ;` statements, in source order.
    pub fn simple_attributes(&self) -> impl Iterator<Item = (&str, &Scalar)> {
        self.children.iter().filter_map(|child| match child {
            Statement::SimpleAttribute { name, value } => Some((name.as_str(), value)),
            Statement::Group(_) | Statement::ComplexAttribute { .. } => None,
        })
    }
}

/// One statement inside a group body.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// Nested group
    Group(Group),
    /// `name : value ;`
    SimpleAttribute { name: String, value: Scalar },
    /// `name ( v1, v2, ... ) ;`
    ComplexAttribute { name: String, values: Vec<Scalar> },
}

/// A single attribute value.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    /// Numeric literal without decimal point or exponent
    Integer(i64),
    /// Numeric literal with a decimal point or exponent
    Float(f64),
    /// Quoted string (quotes stripped) or bare identifier
    Text(String),
    /// Bare `true` / `false`
    Boolean(bool),
}

impl Scalar {
    /// Numeric value, widening integers. `None` for text and booleans.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(v) => Some(*v as f64),
            Self::Float(v) => Some(*v),
            Self::Text(_) | Self::Boolean(_) => None,
        }
    }

    /// Integer value. Floats are not narrowed.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(v) => Some(*v),
            Self::Float(_) | Self::Text(_) | Self::Boolean(_) => None,
        }
    }

    /// Text value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Integer(_) | Self::Float(_) | Self::Boolean(_) => None,
        }
    }

    /// Boolean value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            Self::Integer(_) | Self::Float(_) | Self::Text(_) => None,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(v) => write!(f, "{}", v),
            Self::Float(v) => write!(f, "{}", v),
            Self::Text(s) => write!(f, "{}", s),
            Self::Boolean(b) => write!(f, "{}", b),
        }
    }
}
