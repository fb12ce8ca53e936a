// src/debug/printers.rs

//! Printer macros for errors, and helpers for readable debug output of raw
//! line bytes.

#[doc(hidden)]
#[allow(unused_imports)]
use ::bstr::ByteSlice; // provides `.chars()` on `&[u8]`

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// `d`ebug `e`println! an `err`or
#[macro_export]
macro_rules! de_err {
    (
        $($args:tt)*
    ) => {
        {
            #[cfg(any(debug_assertions,test))]
            eprint!("ERROR: ");
            #[cfg(any(debug_assertions,test))]
            eprintln!($($args)*)
        }
    }
}
pub use de_err;

/// `e`println! an `err`or, prefixed with the name of the program at fault,
/// e.g. `golint-filter: failed to start "golint"`.
#[macro_export]
macro_rules! e_err {
    (
        $prog:expr,
        $($args:tt)*
    ) => {
        {
            eprint!("{}: ", $prog);
            eprintln!($($args)*)
        }
    }
}
pub use e_err;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// helper functions for debug printing
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// turn passed char into a char that is safe to print on one terminal line.
/// control characters become pictoral representations, e.g. '\n' returns
/// '␊'.
///
/// only intended to aid visual debugging
#[cfg(any(debug_assertions, test))]
pub const fn char_to_char_noraw(c: char) -> char {
    // C0 controls map to the Control Pictures block U+2400..=U+241F
    let picture: u32 = match c as u32 {
        val @ 0..=31 => 0x2400 + val,
        127 => 0x2421,
        _ => return c,
    };
    match char::from_u32(picture) {
        Some(val) => val,
        None => c,
    }
}

/// transform a line of bytes to a printable String.
/// bytes may be invalid utf-8.
///
/// only intended for debugging
#[doc(hidden)]
#[allow(non_snake_case)]
#[cfg(any(debug_assertions, test))]
pub fn buffer_to_String_noraw(buffer: &[u8]) -> String {
    let mut s2: String = String::with_capacity(buffer.len() + 1);
    for c in buffer.chars() {
        s2.push(char_to_char_noraw(c));
    }
    s2
}
