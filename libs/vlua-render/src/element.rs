//! # Visual Elements
//!
//! Output-agnostic tree of rendering primitives produced by the translator
//! and consumed by a serializer.
//!
//! ## Primitives
//!
//! - [`Container`]: ordered children tagged with a structural [`Role`] and a
//!   [`Layout`] telling backends how the children flow
//! - [`Element::Text`]: a plain text run such as `=`, `(` or `,`
//! - [`Leaf`]: a styled token with an [`Emphasis`] kind
//!
//! ## Example
//!
//! ```rust
//! use vlua_render::element::{Element, Emphasis, Layout, Role};
//!
//! let unit = Element::container(
//!     Role::Goto,
//!     Layout::Inline,
//!     vec![Element::keyword("goto"), Element::leaf("top", Emphasis::Label)],
//! );
//! assert_eq!(unit.tokens(), vec!["goto", "top"]);
//! ```

use serde::Serialize;

// =============================================================================
// ELEMENT
// =============================================================================

/// A node of the visual tree. Immutable once built; holds no reference back
/// to the syntax tree it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Element {
    Container(Container),
    Text(String),
    Leaf(Leaf),
}

/// Structural unit with ordered children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Container {
    pub role: Role,
    pub layout: Layout,
    pub children: Vec<Element>,
}

/// Styled token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Leaf {
    pub text: String,
    pub emphasis: Emphasis,
}

impl Element {
    pub fn container(role: Role, layout: Layout, children: Vec<Element>) -> Self {
        Self::Container(Container {
            role,
            layout,
            children,
        })
    }

    /// Container whose children stack vertically.
    pub fn block(role: Role, children: Vec<Element>) -> Self {
        Self::container(role, Layout::Block, children)
    }

    /// Container whose children flow on one line.
    pub fn inline(role: Role, children: Vec<Element>) -> Self {
        Self::container(role, Layout::Inline, children)
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    pub fn leaf(text: impl Into<String>, emphasis: Emphasis) -> Self {
        Self::Leaf(Leaf {
            text: text.into(),
            emphasis,
        })
    }

    pub fn keyword(text: &str) -> Self {
        Self::leaf(text, Emphasis::Keyword)
    }

    /// Role of a container, `None` for text runs and leaves.
    pub fn role(&self) -> Option<Role> {
        match self {
            Self::Container(container) => Some(container.role),
            Self::Text(_) | Self::Leaf(_) => None,
        }
    }

    /// Children of a container; empty for text runs and leaves.
    pub fn children(&self) -> &[Element] {
        match self {
            Self::Container(container) => &container.children,
            Self::Text(_) | Self::Leaf(_) => &[],
        }
    }

    /// Every text run and leaf below this element, in reading order.
    pub fn tokens(&self) -> Vec<&str> {
        let mut tokens = Vec::new();
        self.collect_tokens(&mut tokens);
        tokens
    }

    fn collect_tokens<'a>(&'a self, tokens: &mut Vec<&'a str>) {
        match self {
            Self::Container(container) => {
                for child in &container.children {
                    child.collect_tokens(tokens);
                }
            }
            Self::Text(text) => tokens.push(text),
            Self::Leaf(leaf) => tokens.push(&leaf.text),
        }
    }

    /// All containers with the given role, in pre-order.
    pub fn find_all(&self, role: Role) -> Vec<&Container> {
        let mut found = Vec::new();
        self.collect_role(role, &mut found);
        found
    }

    fn collect_role<'a>(&'a self, role: Role, found: &mut Vec<&'a Container>) {
        if let Self::Container(container) = self {
            if container.role == role {
                found.push(container);
            }
            for child in &container.children {
                child.collect_role(role, found);
            }
        }
    }
}

// =============================================================================
// ROLE
// =============================================================================

/// Grammar construct a container stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    Chunk,
    /// Statement sequence
    Block,
    /// Wrapper around one statement
    Statement,
    Assign,
    LocalAssign,
    While,
    Do,
    Repeat,
    If,
    ElseIf,
    Else,
    /// Opening line of a compound statement
    Header,
    /// Closing line of `repeat ... until`
    Footer,
    Label,
    Goto,
    Return,
    ForNum,
    ForIn,
    Function,
    LocalFunction,
    Method,
    /// `source:name` in a method declaration
    MethodName,
    AnonymousFunction,
    Parameters,
    Call,
    Invoke,
    Arguments,
    /// Comma-separated targets, values or iterators
    ExprList,
    Table,
    Field,
    FieldKey,
    FieldValue,
    BinaryOp,
    UnaryOp,
    Index,
}

impl Role {
    /// CSS-style class name for this role.
    pub const fn class_name(&self) -> &'static str {
        match self {
            Self::Chunk => "chunk",
            Self::Block => "block",
            Self::Statement => "statement",
            Self::Assign => "assign",
            Self::LocalAssign => "local-assign",
            Self::While => "while",
            Self::Do => "do",
            Self::Repeat => "repeat",
            Self::If => "if",
            Self::ElseIf => "elseif",
            Self::Else => "else",
            Self::Header => "header",
            Self::Footer => "footer",
            Self::Label => "label",
            Self::Goto => "goto",
            Self::Return => "return",
            Self::ForNum => "for-num",
            Self::ForIn => "for-in",
            Self::Function => "function",
            Self::LocalFunction => "local-function",
            Self::Method => "method",
            Self::MethodName => "method-name",
            Self::AnonymousFunction => "anonymous-function",
            Self::Parameters => "parameters",
            Self::Call => "call",
            Self::Invoke => "invoke",
            Self::Arguments => "arguments",
            Self::ExprList => "expr-list",
            Self::Table => "table",
            Self::Field => "field",
            Self::FieldKey => "field-key",
            Self::FieldValue => "field-value",
            Self::BinaryOp => "binary-op",
            Self::UnaryOp => "unary-op",
            Self::Index => "index",
        }
    }

    /// Operator units get parenthesized when nested in plain text output.
    pub const fn is_operator(&self) -> bool {
        matches!(self, Self::BinaryOp | Self::UnaryOp)
    }
}

// =============================================================================
// LAYOUT & EMPHASIS
// =============================================================================

/// How a container's children flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    /// One child per line
    Block,
    /// Children on a single line
    Inline,
    /// Tabular data made of rows
    Table,
    Row,
    Cell,
}

impl Layout {
    pub const fn class_name(&self) -> &'static str {
        match self {
            Self::Block => "block",
            Self::Inline => "inline",
            Self::Table => "table",
            Self::Row => "row",
            Self::Cell => "cell",
        }
    }
}

/// Styling hint for a leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Emphasis {
    Keyword,
    Operator,
    Nil,
    Boolean,
    Number,
    String,
    Name,
    Label,
    Varargs,
}

impl Emphasis {
    pub const fn class_name(&self) -> &'static str {
        match self {
            Self::Keyword => "keyword",
            Self::Operator => "operator",
            Self::Nil => "nil",
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::Name => "name",
            Self::Label => "label",
            Self::Varargs => "varargs",
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
