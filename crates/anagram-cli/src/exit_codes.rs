//! Exit codes for the `anagram` binary. Part of the public contract.

pub const EXIT_SUCCESS: i32 = 0;
pub const INPUT_ERROR: i32 = 2; // Unreadable input, malformed word list, or write failure
