/// Different signatures a foreign embedder supplies for the core loop.
use std::ffi::c_void;

use crate::ptr::InputStatePtr;
use bilby_engine::math::Extent2;
use bilby_engine::GameStatus;

/// CName: `bilby_game_init`
///
/// One-time setup against the embedder's context. Returning `false` aborts
/// the bootstrap sequence.
pub type Init = unsafe extern "C" fn(ctx: *mut c_void) -> bool;

/// CName: `bilby_game_frame`
///
/// Advances the simulation by one frame. The input pointer is only valid for
/// the duration of the call.
pub type Frame = unsafe extern "C" fn(ctx: *mut c_void, input: InputStatePtr) -> GameStatus;

/// CName: `bilby_game_resize`
///
/// Surface resolution changed. Purely informational.
pub type Resize = unsafe extern "C" fn(ctx: *mut c_void, resolution: *const Extent2);

/// CName: `bilby_game_shutdown`
///
/// Called exactly once when the adapter is destroyed, so the embedder can
/// release everything tied to the context.
pub type Shutdown = unsafe extern "C" fn(ctx: *mut c_void);

/// CName: `bilby_game_create`
///
/// Only looked up when the embedder ships as a shared library: produces the
/// context the other four callbacks are invoked with.
pub type Create = unsafe extern "C" fn() -> *mut c_void;
