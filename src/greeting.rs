// Greeting core - decodes a borrowed person name and composes the greeting
// Nothing here touches global state or performs I/O

use std::borrow::Cow;
use std::ffi::{c_char, CStr};
use std::fmt;

/// Literal placed in front of every name
pub const PREFIX: &str = "Hello, ";

/// Name substituted when the caller passes no name at all
pub const PLACEHOLDER: &str = "there";

/// Name handed over by the caller, decoded from its foreign representation
///
/// `Named` borrows the caller's bytes when they are valid UTF-8 and only owns
/// a copy when invalid sequences had to be replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Person<'a> {
    Named(Cow<'a, str>),
    Absent,
}

impl<'a> Person<'a> {
    /// Decode a C string, replacing invalid UTF-8 sequences with U+FFFD
    pub fn from_c_str(raw: &'a CStr) -> Self {
        Person::Named(raw.to_string_lossy())
    }

    /// Decode a nullable C string pointer
    ///
    /// # Safety
    /// `ptr` must be null or point to a NUL-terminated buffer that stays
    /// valid and unmodified for `'a`.
    pub unsafe fn from_ptr(ptr: *const c_char) -> Self {
        if ptr.is_null() {
            return Person::Absent;
        }
        Self::from_c_str(unsafe { CStr::from_ptr(ptr) })
    }

    /// Decode without substitution, reporting what the lossy path would hide
    pub fn decode_strict(raw: Option<&'a CStr>) -> Result<Self, GreetError> {
        let raw = raw.ok_or(GreetError::NullInput)?;
        match raw.to_str() {
            Ok(name) => Ok(Person::Named(Cow::Borrowed(name))),
            Err(e) => Err(GreetError::InvalidEncoding {
                valid_up_to: e.valid_up_to(),
            }),
        }
    }

    /// The name that ends up in the greeting
    pub fn name(&self) -> &str {
        match self {
            Person::Named(name) => name,
            Person::Absent => PLACEHOLDER,
        }
    }
}

impl<'a> From<&'a str> for Person<'a> {
    fn from(name: &'a str) -> Self {
        Person::Named(Cow::Borrowed(name))
    }
}

impl<'a> From<Option<&'a str>> for Person<'a> {
    fn from(name: Option<&'a str>) -> Self {
        name.map_or(Person::Absent, Person::from)
    }
}

/// Build a fresh greeting for `person`
pub fn greet(person: &Person<'_>) -> String {
    let name = person.name();
    let mut greeting = String::with_capacity(PREFIX.len() + name.len());
    greeting.push_str(PREFIX);
    greeting.push_str(name);
    greeting
}

/// Ways the caller's text can fall short of a well-formed name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GreetError {
    /// The caller passed a null pointer
    NullInput,
    /// The bytes are not UTF-8; everything before `valid_up_to` is
    InvalidEncoding { valid_up_to: usize },
}

impl fmt::Display for GreetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GreetError::NullInput => write!(f, "person is null"),
            GreetError::InvalidEncoding { valid_up_to } => write!(
                f,
                "person is not valid UTF-8 (valid up to byte {})",
                valid_up_to
            ),
        }
    }
}

impl std::error::Error for GreetError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CString;

    #[test]
    fn greets_plain_name() {
        assert_eq!(greet(&Person::from("World")), "Hello, World");
    }

    #[test]
    fn empty_name_keeps_prefix() {
        assert_eq!(greet(&Person::from("")), "Hello, ");
    }

    #[test]
    fn absent_uses_placeholder() {
        assert_eq!(greet(&Person::Absent), "Hello, there");
        assert_eq!(greet(&Person::from(None::<&str>)), "Hello, there");
    }

    #[test]
    fn non_ascii_is_preserved() {
        let greeting = greet(&Person::from("Zoë"));
        assert_eq!(greeting, "Hello, Zoë");
        assert_eq!(greeting.as_bytes(), b"Hello, Zo\xc3\xab");
    }

    #[test]
    fn valid_c_str_is_borrowed() {
        let raw = CString::new("Zoë").unwrap();
        match Person::from_c_str(&raw) {
            Person::Named(Cow::Borrowed(name)) => assert_eq!(name, "Zoë"),
            other => panic!("expected borrowed name, got {:?}", other),
        }
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        let raw = CStr::from_bytes_with_nul(b"Zo\xffe\0").unwrap();
        let person = Person::from_c_str(raw);
        assert_eq!(person.name(), "Zo\u{FFFD}e");
        assert_eq!(greet(&person), "Hello, Zo\u{FFFD}e");
    }

    #[test]
    fn null_pointer_decodes_to_absent() {
        let person = unsafe { Person::from_ptr(std::ptr::null()) };
        assert_eq!(person, Person::Absent);
    }

    #[test]
    fn strict_decode_reports_errors() {
        assert_eq!(Person::decode_strict(None), Err(GreetError::NullInput));

        let raw = CStr::from_bytes_with_nul(b"ab\xc3\0").unwrap();
        assert_eq!(
            Person::decode_strict(Some(raw)),
            Err(GreetError::InvalidEncoding { valid_up_to: 2 })
        );

        let raw = CStr::from_bytes_with_nul(b"World\0").unwrap();
        assert_eq!(
            Person::decode_strict(Some(raw)),
            Ok(Person::from("World"))
        );
    }

    #[test]
    fn error_messages() {
        assert_eq!(GreetError::NullInput.to_string(), "person is null");
        assert_eq!(
            GreetError::InvalidEncoding { valid_up_to: 3 }.to_string(),
            "person is not valid UTF-8 (valid up to byte 3)"
        );
    }
}
