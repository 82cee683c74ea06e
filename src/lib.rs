//! Sigview - frameless shell for a signal-analyzer workbench
//!
//! The crate provides the presentation chrome of the analyzer
//! application: a borderless main window with hand-rolled title bar
//! and resize borders, modal dialogs, and settings persistence. The
//! analyzer content itself sits behind the [`session::ContentView`]
//! trait.

pub mod dialogs;
pub mod frame;
pub mod session;
pub mod utils;
