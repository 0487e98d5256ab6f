/// Contains functionality to create representative bolts and value fields.
///
/// Provides shared functionality for tests and benchmarks.
extern crate aitios_bolt as bolt;
extern crate rand;

pub mod bolts;
