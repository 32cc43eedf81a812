//! tuido - a minimal terminal todo list.
//!
//! This crate provides a todo list TUI backed by a predictable state
//! container: every user gesture becomes an intent applied as a pure state
//! transition, with a monotonic id allocator that survives clears.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing the state container.
pub mod application;
/// Domain layer containing entities and keybindings.
pub mod domain;
/// Infrastructure layer containing configuration adapters.
pub mod infrastructure;
/// Presentation layer containing UI components and event handling.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "tuido";
