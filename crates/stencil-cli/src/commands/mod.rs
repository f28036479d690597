//! Command handlers, one module per subcommand.

pub mod completions;
pub mod init;
pub mod list;
pub mod new;
