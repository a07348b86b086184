//! objctl library
//!
//! Layered object writes and solution status queries against the object
//! store service.

pub mod cli;
pub mod commands;
pub mod errors;
pub mod filesys;
pub mod http;
pub mod layers;
pub mod logs;
pub mod output;
pub mod storage;
pub mod utils;
