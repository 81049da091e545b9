//! Unit test module
//!
//! Handler unit tests live here, separate from source files.
//! Tests drive handlers through the public `Handler` API with a recording bot and a stub rate lookup.

mod logging_handler_test;
mod support;
