//! Command implementations for the mdstitch CLI

pub mod build;
pub mod completions;
pub mod helpers;
pub mod process;
pub mod translate;
pub mod version;
