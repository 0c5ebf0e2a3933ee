// C FFI bindings
// This module exports C-compatible functions that Swift, Go or C code can call

use crate::greeting::{self, Person};
use std::ffi::{c_char, CString};
use std::ptr;

/// Hand an owned Rust string to the caller as a C string (NULL if it holds a NUL byte)
fn into_c_string(s: String) -> *mut c_char {
    match CString::new(s) {
        Ok(c_str) => c_str.into_raw(),
        Err(_) => ptr::null_mut(),
    }
}

/// Greet a person
/// Returns "Hello, <person>" as a newly allocated UTF-8 string
/// person: NULL is greeted as "there"; invalid UTF-8 is replaced with U+FFFD
/// Caller must free the returned string with greetbridge_string_free
#[greetbridge_ffi_macro::ffi_boundary]
#[unsafe(no_mangle)]
pub unsafe extern "C" fn greetbridge_greet(person: *const c_char) -> *mut c_char {
    let person = unsafe { Person::from_ptr(person) };
    into_c_string(greeting::greet(&person))
}

/// Get the library version
/// Caller must free the returned string with greetbridge_string_free
#[greetbridge_ffi_macro::ffi_boundary]
#[unsafe(no_mangle)]
pub extern "C" fn greetbridge_version() -> *mut c_char {
    into_c_string(env!("CARGO_PKG_VERSION").to_string())
}

/// Free a string returned by the FFI
/// NULL is ignored; any pointer not returned by this library is undefined behavior
#[greetbridge_ffi_macro::ffi_boundary]
#[unsafe(no_mangle)]
pub unsafe extern "C" fn greetbridge_string_free(ptr: *mut c_char) {
    if !ptr.is_null() {
        unsafe {
            let _ = CString::from_raw(ptr);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CStr;

    unsafe fn take(ptr: *mut c_char) -> String {
        assert!(!ptr.is_null());
        let s = unsafe { CStr::from_ptr(ptr) }.to_str().unwrap().to_string();
        unsafe { greetbridge_string_free(ptr) };
        s
    }

    #[greetbridge_ffi_macro::ffi_boundary]
    extern "C" fn panics_with_pointer() -> *mut c_char {
        panic!("boundary test")
    }

    #[greetbridge_ffi_macro::ffi_boundary]
    extern "C" fn panics_with_const_pointer() -> *const c_char {
        panic!("boundary test")
    }

    #[greetbridge_ffi_macro::ffi_boundary]
    extern "C" fn panics_with_status() -> i32 {
        panic!("boundary test")
    }

    #[greetbridge_ffi_macro::ffi_boundary]
    extern "C" fn returns_early(flag: bool) -> i32 {
        if flag {
            return 7;
        }
        3
    }

    #[test]
    fn greet_world() {
        let name = CString::new("World").unwrap();
        let out = unsafe { take(greetbridge_greet(name.as_ptr())) };
        assert_eq!(out, "Hello, World");
    }

    #[test]
    fn greet_null_uses_placeholder() {
        let out = unsafe { take(greetbridge_greet(ptr::null())) };
        assert_eq!(out, "Hello, there");
    }

    #[test]
    fn version_matches_package() {
        let out = unsafe { take(greetbridge_version()) };
        assert_eq!(out, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn free_ignores_null() {
        unsafe { greetbridge_string_free(ptr::null_mut()) };
    }

    #[test]
    fn into_c_string_rejects_interior_nul() {
        assert!(into_c_string("a\0b".to_string()).is_null());
    }

    #[test]
    fn boundary_turns_panic_into_fallback() {
        assert!(panics_with_pointer().is_null());
        assert!(panics_with_const_pointer().is_null());
        assert_eq!(panics_with_status(), 0);
    }

    #[test]
    fn boundary_keeps_early_return() {
        assert_eq!(returns_early(true), 7);
        assert_eq!(returns_early(false), 3);
    }
}
