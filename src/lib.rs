//! Angular momentum algebra: exact half-integers, coupling ranges, phases,
//! Wigner symbols, Racah reduction factors, and reduced matrix elements.
extern crate conv;
extern crate fnv;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;
extern crate num;
#[macro_use]
extern crate quick_error;
extern crate regex;
extern crate serde;
#[macro_use]
extern crate serde_derive;
#[cfg(test)]
extern crate serde_yaml;
extern crate wigner_symbols;

#[macro_use]
mod macros;

pub mod ang_mom;
pub mod half;
pub mod parity;
pub mod racah;
pub mod rme;
pub mod utils;
pub mod wigner;

pub use half::HalfInt;
