// This module is for testing and demonstrating alternative approaches
// that didn't make the cut for various reasons into the library
// Having this nested sub folder under tests along with its own main.rs
// is the suggested approach from the cargo docs for having a nested folder
// under tests.
// See: https://doc.rust-lang.org/stable/cargo/guide/project-layout.html

#![cfg(feature = "experiments")]

// Uncomment sections within this module as a refresher on which family
// bounds the compiler rejects. Left here for reference purposes.
mod bound_limitations;

mod open_family_downcast;
