//! # AST Nodes
//!
//! Statement and expression node types for Lua 5.3.
//!
//! ## Structure
//!
//! ```text
//! Chunk
//! └── Block
//!     └── Stmt*
//!         └── Expr*
//! ```

use crate::literals::{Delimiter, LuaString, Number};
use crate::operators::{BinaryOpKind, UnaryOpKind};
use serde::{Deserialize, Serialize};

// =============================================================================
// CHUNK / BLOCK
// =============================================================================

/// Root of a parsed Lua file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Chunk {
    pub body: Block,
}

impl Chunk {
    pub fn new(body: Block) -> Self {
        Self { body }
    }
}

/// Ordered sequence of statements.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Block {
    pub body: Vec<Stmt>,
}

impl Block {
    pub fn new(body: Vec<Stmt>) -> Self {
        Self { body }
    }

    /// Block with no statements, as in `do end`.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

// =============================================================================
// NAMES
// =============================================================================

/// An identifier as written in the source.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Name {
    pub id: String,
}

impl Name {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

// =============================================================================
// STATEMENTS
// =============================================================================

/// Lua statements.
///
/// `elseif` clauses are not statements of their own: they only occur as the
/// `orelse` of an [`If`] or of another [`ElseIf`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Stmt {
    /// `a, b.c = 1, 2`
    Assign(Assign),
    /// `local a, b = 1, 2` or `local a`
    LocalAssign(Assign),
    /// `while test do body end`
    While(While),
    /// `do body end`
    Do(Block),
    /// `repeat body until test`
    Repeat(Repeat),
    /// `if test then body [elseif ...] [else ...] end`
    If(If),
    /// `::id::`
    Label(Name),
    /// `goto label`
    Goto(Name),
    /// `break`
    Break,
    /// `return a, b`
    Return(Vec<Expr>),
    /// `for i = start, stop[, step] do body end`
    Fornum(Fornum),
    /// `for k, v in iter do body end`
    Forin(Forin),
    /// `function a.b.c(args) body end`
    Function(Function),
    /// `local function f(args) body end`
    LocalFunction(LocalFunction),
    /// `function a.b:m(args) body end`
    Method(Method),
    /// Function or method call used as a statement.
    Expr(Expr),
    /// Empty statement `;`
    SemiColon,
}

impl Stmt {
    pub fn assign(targets: Vec<Expr>, values: Vec<Expr>) -> Self {
        Self::Assign(Assign { targets, values })
    }

    pub fn local_assign(targets: Vec<Expr>, values: Vec<Expr>) -> Self {
        Self::LocalAssign(Assign { targets, values })
    }
}

/// Target and value lists shared by global and local assignment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Assign {
    pub targets: Vec<Expr>,
    pub values: Vec<Expr>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct While {
    pub test: Expr,
    pub body: Block,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Repeat {
    pub body: Block,
    pub test: Expr,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct If {
    pub test: Expr,
    pub body: Block,
    pub orelse: Option<ElseBranch>,
}

/// One `elseif` link of an if-chain.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ElseIf {
    pub test: Expr,
    pub body: Block,
    pub orelse: Option<ElseBranch>,
}

/// Continuation of an if-chain: another `elseif` or the final `else`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum ElseBranch {
    ElseIf(Box<ElseIf>),
    Else(Block),
}

/// Numeric `for`.
///
/// `step` is always present; the parser supplies the integer literal `1`
/// when the source omits it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Fornum {
    pub target: Name,
    pub start: Expr,
    pub stop: Expr,
    pub step: Expr,
    pub body: Block,
}

/// Generic `for ... in`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Forin {
    pub targets: Vec<Name>,
    pub iter: Vec<Expr>,
    pub body: Block,
}

/// Global function declaration. `name` is a [`Expr::Name`] or a dotted
/// [`Expr::Index`] chain.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Function {
    pub name: Expr,
    pub args: Vec<Expr>,
    pub body: Block,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LocalFunction {
    pub name: Name,
    pub args: Vec<Expr>,
    pub body: Block,
}

/// Method declaration `function source:name(args)`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Method {
    pub source: Expr,
    pub name: Name,
    pub args: Vec<Expr>,
    pub body: Block,
}

// =============================================================================
// EXPRESSIONS
// =============================================================================

/// Lua expressions.
///
/// Function parameters are represented as a `Vec<Expr>` holding
/// [`Expr::Name`]s, optionally ending with [`Expr::Varargs`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Expr {
    Nil,
    True,
    False,
    Number(Number),
    String(LuaString),
    Table(Table),
    /// `...`
    Varargs,
    AnonymousFunction(AnonymousFunction),
    Name(Name),
    Index(Index),
    Call(Call),
    Invoke(Invoke),
    BinaryOp(BinaryOp),
    UnaryOp(UnaryOp),
}

impl Expr {
    pub fn name(id: impl Into<String>) -> Self {
        Self::Name(Name::new(id))
    }

    pub fn int(value: i64) -> Self {
        Self::Number(Number::Int(value))
    }

    pub fn float(value: f64) -> Self {
        Self::Number(Number::Float(value))
    }

    pub fn string(value: impl Into<String>, delimiter: Delimiter) -> Self {
        Self::String(LuaString::new(value, delimiter))
    }

    pub fn binary(op: BinaryOpKind, left: Expr, right: Expr) -> Self {
        Self::BinaryOp(BinaryOp {
            op,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    pub fn unary(op: UnaryOpKind, operand: Expr) -> Self {
        Self::UnaryOp(UnaryOp {
            op,
            operand: Box::new(operand),
        })
    }

    /// `value.key`
    pub fn dot(value: Expr, key: impl Into<String>) -> Self {
        Self::Index(Index {
            value: Box::new(value),
            idx: Box::new(Expr::name(key)),
            notation: IndexNotation::Dot,
        })
    }

    /// `value[idx]`
    pub fn bracket(value: Expr, idx: Expr) -> Self {
        Self::Index(Index {
            value: Box::new(value),
            idx: Box::new(idx),
            notation: IndexNotation::Bracket,
        })
    }

    pub fn call(func: Expr, args: Vec<Expr>) -> Self {
        Self::Call(Call {
            func: Box::new(func),
            args,
        })
    }

    pub fn invoke(source: Expr, func: impl Into<String>, args: Vec<Expr>) -> Self {
        Self::Invoke(Invoke {
            source: Box::new(source),
            func: Name::new(func),
            args,
        })
    }

    /// True for expressions that may appear on the left of `=`.
    pub fn is_assignable(&self) -> bool {
        matches!(self, Self::Name(_) | Self::Index(_))
    }

    /// True for expressions that may stand alone as a statement.
    pub fn is_call(&self) -> bool {
        matches!(self, Self::Call(_) | Self::Invoke(_))
    }
}

/// Table constructor `{ ... }`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Table {
    pub fields: Vec<Field>,
}

/// One entry of a table constructor.
///
/// - `{ v }`: `key: None` (positional)
/// - `{ k = v }`: `key: Some(Name)`, `bracketed: false`
/// - `{ [k] = v }`: `key: Some(expr)`, `bracketed: true`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Field {
    pub key: Option<Expr>,
    pub value: Expr,
    pub bracketed: bool,
}

impl Field {
    pub fn positional(value: Expr) -> Self {
        Self {
            key: None,
            value,
            bracketed: false,
        }
    }

    pub fn named(key: impl Into<String>, value: Expr) -> Self {
        Self {
            key: Some(Expr::name(key)),
            value,
            bracketed: false,
        }
    }

    pub fn bracketed(key: Expr, value: Expr) -> Self {
        Self {
            key: Some(key),
            value,
            bracketed: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnonymousFunction {
    pub args: Vec<Expr>,
    pub body: Block,
}

/// How an index was written in the source.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum IndexNotation {
    /// `a.b`
    Dot,
    /// `a[b]`
    Bracket,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Index {
    pub value: Box<Expr>,
    pub idx: Box<Expr>,
    pub notation: IndexNotation,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Call {
    pub func: Box<Expr>,
    pub args: Vec<Expr>,
}

/// Method call `source:func(args)`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Invoke {
    pub source: Box<Expr>,
    pub func: Name,
    pub args: Vec<Expr>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BinaryOp {
    pub op: BinaryOpKind,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UnaryOp {
    pub op: UnaryOpKind,
    pub operand: Box<Expr>,
}
