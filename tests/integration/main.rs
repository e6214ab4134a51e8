//! Integration test driver for `tests/integration/` submodules.
//!
//! Each `mod` below maps to a file that drives the public API the way a
//! control loop would, against a recording sink.

mod mock_sink;
mod scenario_tests;
mod service_tests;
mod wire_tests;
