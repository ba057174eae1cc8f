//! Integration test driver for `tests/integration/` submodule.
//!
//! Each `mod` below maps to a file that exercises the driver against mock
//! adapters.  All tests run on the host (x86_64) with no real hardware
//! required.

mod blink_tests;
mod enable_tests;
mod fade_tests;
mod mock_hw;
