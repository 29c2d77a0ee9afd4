use std::fmt::{self, Display};

/// Expression tree node.
///
/// The tag of each variant (see [`Node::tag`]) is the spelling of the token
/// that introduced it, so `a.b` is a `.` node and `f(x)` a `(` node.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Number, string or keyword constant, spelled as in the source.
    Literal(String),
    /// Identifier.
    Name(String),
    /// Prefix operator: `-x`, `not x`.
    Unary { operator: String, operand: Box<Node> },
    /// Infix operator, including the fused `is not` and `not in`.
    Binary {
        operator: String,
        left: Box<Node>,
        right: Box<Node>,
    },
    /// `then if condition else otherwise`
    Ternary {
        then: Box<Node>,
        condition: Box<Node>,
        otherwise: Box<Node>,
    },
    /// `object.name`
    Attribute { object: Box<Node>, name: String },
    /// `object[index]`
    Index { object: Box<Node>, index: Box<Node> },
    /// `callee(arguments...)`
    Call { callee: Box<Node>, arguments: Vec<Node> },
    /// `lambda parameters: body`
    Lambda { parameters: Vec<String>, body: Box<Node> },
    Tuple(Vec<Node>),
    List(Vec<Node>),
    /// Key/value pairs in source order.
    Dict(Vec<(Node, Node)>),
}

impl Node {
    pub fn unary(operator: impl Into<String>, operand: Node) -> Self {
        Node::Unary {
            operator: operator.into(),
            operand: Box::new(operand),
        }
    }

    pub fn binary(operator: impl Into<String>, left: Node, right: Node) -> Self {
        Node::Binary {
            operator: operator.into(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn tag(&self) -> &str {
        match self {
            Node::Literal(_) => "literal",
            Node::Name(_) => "name",
            Node::Unary { operator, .. } | Node::Binary { operator, .. } => operator.as_str(),
            Node::Ternary { .. } => "if",
            Node::Attribute { .. } => ".",
            Node::Index { .. } => "[",
            Node::Call { .. } | Node::Tuple(_) => "(",
            Node::Lambda { .. } => "lambda",
            Node::List(_) => "[",
            Node::Dict(_) => "{",
        }
    }
}

/// Writes `[a, b, c]`, or nothing for an empty list.
fn write_list<'n, I>(f: &mut fmt::Formatter<'_>, items: I) -> fmt::Result
where
    I: IntoIterator<Item = &'n dyn Display>,
{
    let mut items = items.into_iter().peekable();
    if items.peek().is_none() {
        return Ok(());
    }

    write!(f, " [")?;
    for (i, item) in items.enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", item)?;
    }
    write!(f, "]")
}

/// Leaf rendering of a bare identifier, as attribute and parameter names
/// are shown.
struct NameLeaf<'n>(&'n str);

impl Display for NameLeaf<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(name {})", self.0)
    }
}

impl Node {
    fn fmt_children(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Literal(_) | Node::Name(_) => Ok(()),
            Node::Unary { operand, .. } => write!(f, " {}", operand),
            Node::Binary { left, right, .. } => write!(f, " {} {}", left, right),
            Node::Ternary {
                then,
                condition,
                otherwise,
            } => write!(f, " {} {} {}", then, condition, otherwise),
            Node::Attribute { object, name } => write!(f, " {} {}", object, NameLeaf(name)),
            Node::Index { object, index } => write!(f, " {} {}", object, index),
            Node::Call { callee, arguments } => {
                write!(f, " {}", callee)?;
                write_list(f, arguments.iter().map(|a| a as &dyn Display))
            }
            Node::Lambda { parameters, body } => {
                let names: Vec<NameLeaf> = parameters.iter().map(|p| NameLeaf(p.as_str())).collect();
                write_list(f, names.iter().map(|n| n as &dyn Display))?;
                write!(f, " {}", body)
            }
            Node::Tuple(items) | Node::List(items) => {
                write_list(f, items.iter().map(|i| i as &dyn Display))
            }
            Node::Dict(pairs) => write_list(
                f,
                pairs
                    .iter()
                    .flat_map(|(key, value)| [key as &dyn Display, value as &dyn Display]),
            ),
        }
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Literal(value) => write!(f, "(literal {})", value),
            Node::Name(value) => write!(f, "{}", NameLeaf(value)),
            _ => {
                write!(f, "({}", self.tag())?;
                self.fmt_children(f)?;
                write!(f, ")")
            }
        }
    }
}
