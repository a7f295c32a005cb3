//! Protocol Tests
//!
//! Tokenizing, id conversion, command parsing and response text.

mod id_tests;
