//! Session engine for manipulating delimited prompts, with a tag-count
//! lookup mode.
//!
//! - **input**: how one logical prompt is read (one line, many lines, direct)
//! - **finder**: tag table, output dialects and the token finder
//! - **session**: single, dual and non-interactive read-execute-write loops
//! - **setop**: set algebra over two prompts, used by the dual session

pub mod clipboard;
pub mod config;
pub mod error;
pub mod finder;
pub mod input;
pub mod session;
pub mod setop;
pub mod ui;

#[cfg(test)]
mod test_utils;
