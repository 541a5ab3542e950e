//! Core functionality for the loam console.
//!
//! This crate contains the console runtime (command definitions,
//! pre-execution hooks and the default-value injector), the
//! hierarchical configuration store, the site inspection services and
//! the module scaffolding generators. The `loam` binary wires these
//! together; embedders can do the same with their own command set.
//!
//! Dispatch is sequential and synchronous. Each invocation gets its
//! own clone of the command's definition, so hook mutations (injected
//! defaults in particular) never leak into later invocations within
//! the same process.

pub mod chain;
pub mod config;
pub mod console;
pub mod generator;
pub mod site;
