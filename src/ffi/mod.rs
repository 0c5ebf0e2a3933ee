// FFI module for foreign callers
// The header describing these exports is generated by utils::ffi_bindings
// from this directory

// C FFI bindings (only compiled for non-WASM targets)
#[cfg(not(target_arch = "wasm32"))]
pub mod c_ffi;
