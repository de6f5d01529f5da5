//! CLI domain: parse, route and output only.
//! No merge logic; routing hands settings to the merger.

mod output;
mod parse;
mod route;

pub use output::map_error;
pub use parse::Cli;
pub use route::RunContext;
