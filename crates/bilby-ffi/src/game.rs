//! The callback adapter: function pointers in, [`Game`] lifecycle out.

use crate::ptr::GameCtxPtr;
use crate::sig::{Frame, Init, Resize, Shutdown};
use bilby_engine::math::Extent2;
use bilby_engine::{Game, GameStatus, InputState};

/// Implements [`Game`] by forwarding every operation to an externally
/// supplied function pointer bundle, threading the embedder's context
/// through each call.
///
/// All five values are bound at construction and never change. The adapter
/// does not interpret, log or retry anything: init's boolean and the frame
/// status come back verbatim, and the shutdown callback runs exactly once
/// when the adapter is dropped, on every destruction path.
///
/// The raw context field keeps this type `!Send` and `!Sync`, which matches
/// the single-threaded run-loop model; the callbacks are never assumed to be
/// reentrant.
pub struct CallbackGame {
    ctx: GameCtxPtr,
    init: Init,
    frame: Frame,
    resize: Resize,
    shutdown: Shutdown,
}

impl CallbackGame {
    /// Binds a context and its four callbacks into an adapter.
    ///
    /// # Safety
    ///
    /// All four function pointers must be valid for the adapter's entire
    /// lifetime; they are never re-validated. The caller owns `ctx` and must
    /// keep whatever it points at alive until the shutdown callback has run.
    pub unsafe fn new(
        ctx: GameCtxPtr,
        init: Init,
        frame: Frame,
        resize: Resize,
        shutdown: Shutdown,
    ) -> Self {
        Self {
            ctx,
            init,
            frame,
            resize,
            shutdown,
        }
    }

    /// The bound context, for embedders that need to recognise their own
    /// adapter. Still owned by the embedder.
    pub fn ctx(&self) -> GameCtxPtr {
        self.ctx
    }
}

impl Game for CallbackGame {
    fn on_init(&mut self) -> bool {
        unsafe { (self.init)(self.ctx) }
    }

    fn on_frame(&mut self, input: &mut InputState) -> GameStatus {
        unsafe { (self.frame)(self.ctx, input as *mut InputState) }
    }

    fn on_resize(&mut self, resolution: Extent2) {
        unsafe { (self.resize)(self.ctx, &resolution) }
    }
}

impl Drop for CallbackGame {
    fn drop(&mut self) {
        unsafe { (self.shutdown)(self.ctx) }
    }
}
