//! Grammar tests
//!
//! These tests drive the public `compile` entry point and check the shape
//! of the resulting tree.

mod helpers;

mod nesting;
mod scenarios;
