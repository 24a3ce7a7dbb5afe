//! # Lua AST Crate
//!
//! Typed Abstract Syntax Tree for Lua programs. The tree is produced by
//! `lua-parser` (or any other front end that emits the same shape, for
//! example as JSON) and consumed read-only by the vlua renderer.
//!
//! ## Architecture
//!
//! ```text
//! Lua Source → lua-parser → lua-ast (Chunk) → vlua-render → markup
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use lua_ast::{BinaryOpKind, Block, Chunk, Expr, Stmt};
//!
//! // local x = 1 + 2
//! let chunk = Chunk::new(Block::new(vec![Stmt::local_assign(
//!     vec![Expr::name("x")],
//!     vec![Expr::binary(BinaryOpKind::Add, Expr::int(1), Expr::int(2))],
//! )]));
//! assert_eq!(chunk.body.body.len(), 1);
//! ```
//!
//! ## Design Principles
//!
//! - **Closed Variants**: Every grammar construct is an enum variant, so
//!   consumers match exhaustively
//! - **Structural Invariants**: Operators own exactly their operands (`Box`),
//!   a numeric `for` always carries a step
//! - **Verbatim Literals**: String delimiters are stored as written
//! - **No Evaluation**: Pure syntax, no name resolution

pub mod ast;
pub mod literals;
pub mod operators;

// Re-exports for convenience
pub use ast::*;
pub use literals::{Delimiter, LuaString, Number};
pub use operators::{BinaryOpKind, UnaryOpKind};
