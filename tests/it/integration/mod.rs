//! Integration tests for sheetchart.
//!
//! These tests drive a full session from upload to rendered chart and
//! verify the lifecycle guarantees across multiple generations.

mod lifecycle_tests;
