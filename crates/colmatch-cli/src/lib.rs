//! Library components of the `colmatch` command line tool.

pub mod fixture;
pub mod logging;
