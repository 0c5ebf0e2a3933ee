use crate::ffi::c_ffi;
use anyhow::{bail, Context, Result};
use std::ffi::{CStr, CString};
use std::ptr;

/// Greet through the C boundary exactly as a foreign caller would
/// No name passes NULL, which is greeted with the placeholder
pub fn handle_greet(name: Option<&str>) -> Result<()> {
    let person = name
        .map(CString::new)
        .transpose()
        .context("Name must not contain NUL bytes")?;
    let person_ptr = person.as_ref().map_or(ptr::null(), |p| p.as_ptr());

    let greeting = unsafe { c_ffi::greetbridge_greet(person_ptr) };
    if greeting.is_null() {
        bail!("greetbridge_greet returned NULL");
    }

    let text = unsafe { CStr::from_ptr(greeting) }
        .to_string_lossy()
        .into_owned();
    unsafe { c_ffi::greetbridge_string_free(greeting) };

    println!("{}", text);
    Ok(())
}
