// Regenerate the C header into OUT_DIR whenever the FFI sources change

#[allow(dead_code)]
#[path = "src/utils/ffi_bindings.rs"]
mod ffi_bindings;

fn main() {
    println!("cargo:rerun-if-changed=src/ffi");
    ffi_bindings::generate_ffi_bindings();
}
