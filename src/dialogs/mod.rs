//! Dialog components for Sigview
//!
//! Dialogs are modal: while one is open the shell routes input only to
//! it, and the rest of the chrome is inert until it is dismissed.

pub mod confirm;

pub use confirm::ConfirmDialog;
