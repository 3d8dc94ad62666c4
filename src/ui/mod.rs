pub mod repl;
pub mod state;
