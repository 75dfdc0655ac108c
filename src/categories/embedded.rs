//! Embedded category data
//!
//! Category table compiled into the binary at build time.

// Include generated category table from build script
include!(concat!(env!("OUT_DIR"), "/categories.rs"));
