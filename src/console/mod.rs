pub mod command;
pub mod console;

pub use console::spawn_stdin_reader;
pub use console::Console;
pub use console::ConsoleReporter;
pub use console::ConsoleResolver;
