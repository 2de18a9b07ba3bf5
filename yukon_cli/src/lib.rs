mod config;
mod recording;
mod repl;
pub use config::*;
pub use recording::*;
pub use repl::*;
