//! `extern "C"` entry points for constructing and destroying the adapter.

use crate::game::CallbackGame;
use crate::ptr::GameCtxPtr;
use crate::sig::{Frame, Init, Resize, Shutdown};

/// Binds a context and four callbacks into a heap-allocated adapter.
///
/// Returns null if any callback pointer is null; the context itself may be
/// null if the callbacks can cope with that. The returned adapter must be
/// released with [`bilby_game_free`], which runs the shutdown callback.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn bilby_game_new(
    ctx: GameCtxPtr,
    init: Option<Init>,
    frame: Option<Frame>,
    resize: Option<Resize>,
    shutdown: Option<Shutdown>,
) -> *mut CallbackGame {
    let (Some(init), Some(frame), Some(resize), Some(shutdown)) = (init, frame, resize, shutdown)
    else {
        eprintln!("[bilby_game_new] [ERROR] received null callback pointer");
        return std::ptr::null_mut();
    };

    Box::into_raw(Box::new(unsafe {
        CallbackGame::new(ctx, init, frame, resize, shutdown)
    }))
}

/// Destroys an adapter made by [`bilby_game_new`], invoking its shutdown
/// callback exactly once. Null is a no-op.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn bilby_game_free(game: *mut CallbackGame) {
    if game.is_null() {
        return;
    }
    drop(unsafe { Box::from_raw(game) });
}
