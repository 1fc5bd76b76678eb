//! Savings Challenge Registration
//!
//! The registration wizard of the savings challenge console. It validates,
//! sequences and maps a registration draft, then submits it to the
//! registration API.

#[macro_use]
extern crate accord;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate serde_derive;
#[macro_use(debug, info, warn, error, o)]
extern crate slog;

#[cfg(test)]
#[macro_use]
extern crate rusty_fork;

mod validation;

pub mod client;
pub mod config;
pub mod logger;
pub mod mapper;
pub mod model;
pub mod request;
pub mod service;
pub mod wizard;

pub use crate::validation::ValidationError;

// macros

#[macro_export]
macro_rules! hashmap(
    { $($key:expr => $value:expr),+ } => {
        {
            let mut m = ::std::collections::HashMap::new();
            $(m.insert($key, $value);)+
            m
        }
    };
);

#[macro_export]
macro_rules! fnvhashmap(
    { $($key:expr => $value:expr),+ } => {
        {
            let mut m = ::fnv::FnvHashMap::default();
            $(m.insert($key, $value);)+
            m
        }
    };
);

