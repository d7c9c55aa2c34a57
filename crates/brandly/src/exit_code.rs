//! Process exit codes. `build.rs` compiles this file too, so it must stay
//! dependency-free.
#![allow(dead_code)]

pub const SUCCESS: i32 = 0;
pub const GENERAL: i32 = 1;
pub const USAGE: i32 = 2;
pub const NOT_FOUND: i32 = 4;
pub const CONNECTION: i32 = 7;
pub const PROTOCOL: i32 = 8;
pub const CONFIG: i32 = 9;

/// Every code with its meaning, for the man page.
pub const MEANINGS: &[(i32, &str)] = &[
    (SUCCESS, "The command completed."),
    (
        GENERAL,
        "The catalogue answered with an unexpected HTTP status, or a local I/O error occurred.",
    ),
    (
        USAGE,
        "Bad arguments: an unknown flag value, a malformed base URL, or a brand id the id policy rejects.",
    ),
    (NOT_FOUND, "The requested brand does not exist."),
    (
        CONNECTION,
        "The catalogue could not be reached (refused, DNS, TLS, or timeout).",
    ),
    (
        PROTOCOL,
        "The catalogue answered with a body that is not the expected brand JSON.",
    ),
    (
        CONFIG,
        "Unknown profile, unusable config values, or config init over an existing file without --force.",
    ),
];
