//! Checked-in protobuf messages and tonic stubs generated from `proto/`.

#[allow(clippy::all)]
mod gen;

pub use gen::*;
