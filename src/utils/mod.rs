// Utils module - code shared by the CLI and build.rs
pub mod ffi_bindings;
