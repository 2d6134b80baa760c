//! Path expression abstract syntax tree

/// Parsed path expression
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Location path (`/a/b`, `//a`, `a/b`)
    Path(LocationPath),

    /// Parenthesized or primary expression followed by predicates and
    /// further steps (`(//a)[1]/b`)
    Filter {
        /// Expression producing the initial node set
        base: Box<Expr>,
        /// Predicates applied to the base node set in document order
        predicates: Vec<Expr>,
        /// Relative steps applied afterwards
        steps: Vec<Step>,
    },

    /// Union of node sets (`a | b`)
    Union(Vec<Expr>),

    /// Logical disjunction
    Or(Box<Expr>, Box<Expr>),

    /// Logical conjunction
    And(Box<Expr>, Box<Expr>),

    /// Comparison between two operands
    Comparison {
        left: Box<Expr>,
        operator: ComparisonOp,
        right: Box<Expr>,
    },

    /// Unary minus
    Negate(Box<Expr>),

    /// String literal
    Literal(String),

    /// Number literal
    Number(f64),

    /// Function call
    Function { name: String, args: Vec<Expr> },
}

/// Sequence of steps, optionally anchored at the document node
#[derive(Debug, Clone, PartialEq)]
pub struct LocationPath {
    pub absolute: bool,
    pub steps: Vec<Step>,
}

/// One location step: axis, node test and predicates
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub axis: Axis,
    pub test: NodeTest,
    pub predicates: Vec<Expr>,
}

impl Step {
    #[must_use]
    pub fn new(axis: Axis, test: NodeTest) -> Self {
        Self {
            axis,
            test,
            predicates: Vec::new(),
        }
    }

    /// The step `//` abbreviates
    #[must_use]
    pub fn descendant_or_self() -> Self {
        Self::new(Axis::DescendantOrSelf, NodeTest::Node)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Child,
    Descendant,
    DescendantOrSelf,
    SelfNode,
    Parent,
    Ancestor,
    AncestorOrSelf,
    FollowingSibling,
    PrecedingSibling,
    Attribute,
}

impl Axis {
    /// Resolve an axis name as written before `::`
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "child" => Axis::Child,
            "descendant" => Axis::Descendant,
            "descendant-or-self" => Axis::DescendantOrSelf,
            "self" => Axis::SelfNode,
            "parent" => Axis::Parent,
            "ancestor" => Axis::Ancestor,
            "ancestor-or-self" => Axis::AncestorOrSelf,
            "following-sibling" => Axis::FollowingSibling,
            "preceding-sibling" => Axis::PrecedingSibling,
            "attribute" => Axis::Attribute,
            _ => return None,
        })
    }

    /// Reverse axes number their nodes nearest-first
    #[must_use]
    pub fn is_reverse(self) -> bool {
        matches!(
            self,
            Axis::Parent | Axis::Ancestor | Axis::AncestorOrSelf | Axis::PrecedingSibling
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeTest {
    /// Elements (or attributes) with this name
    Name(String),
    /// Any element (or attribute)
    Wildcard,
    /// Any node, the document node included
    Node,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonOp {
    Equal,
    NotEqual,
    Less,
    LessEq,
    Greater,
    GreaterEq,
}
