pub mod shell;

pub use shell::App;
