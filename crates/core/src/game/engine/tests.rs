//! Regression test module wiring for engine behaviors.


/// Shared imports for engine regression tests.
mod support {
    pub(super) use super::super::*;
    pub(super) use crate::game::test_support::*;
}
