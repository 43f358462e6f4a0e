// Adapters layer: concrete input sources and display regions behind the domain ports.

pub mod display;
pub mod input;

pub use display::{MemoryDisplay, TerminalDisplay};
pub use input::{CliInput, StaticInput};
