//! Process-level tests for the `vitts` and `vitts-b64` binaries.

mod args;
mod e2e;
