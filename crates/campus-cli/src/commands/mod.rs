//! One module per subcommand.  Each exposes an `execute` function that
//! `main::run` dispatches to.

pub mod completions;
pub mod config;
pub mod demo;
pub mod init;
pub mod run;
