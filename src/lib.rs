//! `monodash` is a declare-and-match command line parser for single-dash, single-character flags.
//!
//! Flags are declared directly against the token list: each declaration call scans the full
//! argument vector exactly once, records the flag's presence/error state, and returns a cheap
//! queryable handle.
//! Errors never interrupt control flow — they accumulate on the individual flags and on the
//! owning [`FlagSet`], to be polled via [`FlagSet::is_valid`] once all declarations are made.
//!
//! ### Example
//! ```
//! use monodash::FlagSet;
//!
//! let mut set = FlagSet::new(vec!["program", "-i", "in.txt", "-vV"], "An example program.");
//! let input = set.add_value_flag::<String, 1>('i', "Input file", true);
//! let verbose = set.add_flag('v', "Verbose output", false);
//! let version = set.add_flag('V', "Display version", false);
//!
//! assert!(set.is_valid());
//! assert!(verbose.exists());
//! assert!(version.exists());
//! assert_eq!(input.value(0), "in.txt");
//! ```
#![deny(missing_docs)]
mod flag;
mod interface;
mod matcher;
mod printer;
mod set;
mod value;

pub use flag::{Flag, ValueFlag};
pub use set::FlagSet;
pub use value::{FlagValue, InvalidToken};

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
