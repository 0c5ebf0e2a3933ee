use crate::ffi::c_ffi;
use anyhow::{bail, Result};
use std::ffi::CStr;

/// Get version string for CLI
pub fn get_version_string() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Print the version reported across the C boundary
pub fn print_version() -> Result<()> {
    let version = c_ffi::greetbridge_version();
    if version.is_null() {
        bail!("greetbridge_version returned NULL");
    }

    let text = unsafe { CStr::from_ptr(version) }
        .to_string_lossy()
        .into_owned();
    unsafe { c_ffi::greetbridge_string_free(version) };

    println!("greetbridge {}", text);
    Ok(())
}
