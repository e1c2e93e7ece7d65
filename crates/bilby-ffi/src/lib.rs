//! C ABI boundary for the bilby engine core loop.
//!
//! A foreign embedder drives the engine by handing it a [`CallbackGame`]: an
//! opaque context pointer plus one function pointer per lifecycle operation,
//! bound together at construction. The adapter forwards every call verbatim
//! and invokes the shutdown callback exactly once when it is dropped.
//!
//! Rust embedders go the other way through [`wrap::into_raw_parts`], and
//! embedders shipped as a shared library are resolved by [`library::GameLibrary`].
#![allow(clippy::missing_safety_doc)]

pub mod exports;
pub mod game;
pub mod library;
pub mod panic;
pub mod ptr;
pub mod sig;
pub mod wrap;

pub use game::CallbackGame;
