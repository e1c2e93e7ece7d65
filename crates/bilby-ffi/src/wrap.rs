//! Turns a Rust [`Game`] implementation into a callback bundle, so it can be
//! handed to a consumer that only understands the C shape.

use crate::ptr::InputStatePtr;
use crate::sig::{Frame, Init, Resize, Shutdown};
use bilby_engine::math::Extent2;
use bilby_engine::{Game, GameStatus};
use std::ffi::c_void;

/// The pieces [`CallbackGame::new`](crate::CallbackGame::new) wants, produced
/// from a boxed [`Game`].
///
/// The context is the leaked box; ownership travels with the bundle and comes
/// back when the shutdown callback runs, which reconstitutes and drops it.
pub struct RawGameParts {
    pub ctx: *mut c_void,
    pub init: Init,
    pub frame: Frame,
    pub resize: Resize,
    pub shutdown: Shutdown,
}

/// Decomposes `game` into a context pointer plus monomorphized trampolines.
///
/// The returned bundle owns the game; dropping it without running the
/// shutdown callback leaks the box. Feeding the parts into
/// [`CallbackGame`](crate::CallbackGame) restores the usual drop guarantee.
pub fn into_raw_parts<G: Game>(game: Box<G>) -> RawGameParts {
    RawGameParts {
        ctx: Box::into_raw(game) as *mut c_void,
        init: init_trampoline::<G>,
        frame: frame_trampoline::<G>,
        resize: resize_trampoline::<G>,
        shutdown: shutdown_trampoline::<G>,
    }
}

unsafe extern "C" fn init_trampoline<G: Game>(ctx: *mut c_void) -> bool {
    let game = unsafe { &mut *(ctx as *mut G) };
    game.on_init()
}

unsafe extern "C" fn frame_trampoline<G: Game>(ctx: *mut c_void, input: InputStatePtr) -> GameStatus {
    let game = unsafe { &mut *(ctx as *mut G) };
    game.on_frame(unsafe { &mut *input })
}

unsafe extern "C" fn resize_trampoline<G: Game>(ctx: *mut c_void, resolution: *const Extent2) {
    let game = unsafe { &mut *(ctx as *mut G) };
    game.on_resize(unsafe { *resolution })
}

unsafe extern "C" fn shutdown_trampoline<G: Game>(ctx: *mut c_void) {
    drop(unsafe { Box::from_raw(ctx as *mut G) });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CallbackGame;
    use bilby_engine::InputState;
    use std::cell::Cell;
    use std::rc::Rc;

    struct CountingGame {
        frames: Rc<Cell<u32>>,
        dropped: Rc<Cell<u32>>,
        last_resize: Rc<Cell<Extent2>>,
    }

    impl Game for CountingGame {
        fn on_init(&mut self) -> bool {
            true
        }

        fn on_frame(&mut self, _input: &mut InputState) -> GameStatus {
            self.frames.set(self.frames.get() + 1);
            if self.frames.get() < 3 {
                GameStatus::Continue
            } else {
                GameStatus::Stop
            }
        }

        fn on_resize(&mut self, resolution: Extent2) {
            self.last_resize.set(resolution);
        }
    }

    impl Drop for CountingGame {
        fn drop(&mut self) {
            self.dropped.set(self.dropped.get() + 1);
        }
    }

    #[test]
    fn test_round_trip_through_bundle() {
        let frames = Rc::new(Cell::new(0));
        let dropped = Rc::new(Cell::new(0));
        let last_resize = Rc::new(Cell::new(Extent2::default()));

        let parts = into_raw_parts(Box::new(CountingGame {
            frames: frames.clone(),
            dropped: dropped.clone(),
            last_resize: last_resize.clone(),
        }));
        let mut game = unsafe {
            CallbackGame::new(parts.ctx, parts.init, parts.frame, parts.resize, parts.shutdown)
        };
        let mut input = InputState::new();

        assert!(game.on_init());
        assert_eq!(game.on_frame(&mut input), GameStatus::Continue);
        assert_eq!(game.on_frame(&mut input), GameStatus::Continue);
        assert_eq!(game.on_frame(&mut input), GameStatus::Stop);
        game.on_resize(Extent2::new(800, 600));
        drop(game);

        assert_eq!(frames.get(), 3);
        assert_eq!(last_resize.get(), Extent2::new(800, 600));
        assert_eq!(dropped.get(), 1);
    }
}
