// Common utilities for the set expression macro
//
// This module contains:
// - set_expr: Set expression parsing and expansion
// - parse_utils: Operand parsing helpers

mod parse_utils;
mod set_expr;

pub use parse_utils::*;
pub use set_expr::*;
