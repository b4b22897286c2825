//! # SimpleLisp - Token Representation
//!
//! This module defines the parsed form of a SimpleLisp program.
//!
//! ## Architecture Overview
//!
//! - **[tokens]** - The flattened [`Token`] sequence produced by the parser
//! - **[operators]** - Arithmetic, comparison and boolean operator kinds
//!
//! ## Quick Start
//!
//! ```text
//! (* (+ 1 2) 4)
//! ```
//!
//! evaluates to `12`.
//!
//! ## Core Concepts
//!
//! ### Flattened Sequences
//!
//! A program is not stored as a nested tree of applications. Every parsed
//! expression unit becomes one [`Token::SubExpression`] whose body lists the
//! operator first and then each operand, every operand wrapped in its own
//! `SubExpression`:
//!
//! ```text
//! (+ 2 3)  =>  [Sub([+, Sub([2]), Sub([3])])]
//! ```
//!
//! ### Conditionals
//!
//! There is no `if`. Comparisons and boolean operators take two extra
//! branch operands and evaluate only the selected one:
//!
//! ```text
//! (< 1 2 (+ 1 1) (/ 1 0))     // 2, the division never runs
//! (& (= 1 1) (= 2 2) 10 20)   // 10
//! ```
//!
//! ### Lambdas
//!
//! A lambda is applied where it is written. The body is followed by exactly
//! one argument per declared parameter:
//!
//! ```text
//! (lambda (x, y) (+ x y) 3 4) // 7
//! ```
//!
//! The body sees only its own parameters, never those of an enclosing
//! lambda.
pub mod operators;
pub mod tokens;

pub use operators::{BooleanOp, LogicalOp, MathOp};
pub use tokens::Token;
