//! Application systems
//!
//! Pieces of the application loop that can be built and tested outside `main.rs`.

mod window;

pub use window::{format_title, WindowError, WindowSystem};
