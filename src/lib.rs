//! PetFriends API client
//!
//! A thin wrapper over the PetFriends REST service plus the pieces the
//! black-box suites and the `petfriends` binary share.

pub mod cli;
pub mod client;
pub mod commands;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod ua;
