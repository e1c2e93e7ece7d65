//! Helper pointers and typedef definitions.

use bilby_engine::InputState;
use std::ffi::c_void;

/// A mutable pointer to an [`InputState`].
///
/// Defined in `bilby.h` as the opaque `InputState`; foreign code never
/// dereferences it, only threads it back through engine calls.
pub type InputStatePtr = *mut InputState;

/// The embedder-owned context threaded through every callback.
///
/// Defined in `bilby.h` as `GameCtx`. The shim never inspects or owns it.
pub type GameCtxPtr = *mut c_void;
