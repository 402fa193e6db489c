//! Turn engine composition for moves, bulk input, and session lifecycle.
//! This file wires focused engine submodules together.

use super::*;

mod bulk;
mod lifecycle;
mod turn;

#[cfg(test)]
mod tests;
