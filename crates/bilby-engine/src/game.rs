use crate::input::InputState;
use crate::math::Extent2;

/// The lifecycle interface driven by the engine run-loop.
///
/// The run-loop calls [`Game::on_init`] once during bootstrap, then
/// [`Game::on_frame`] every frame until the returned [`GameStatus`] asks it
/// to stop, with [`Game::on_resize`] interleaved whenever the surface
/// resolution changes. Teardown is `Drop`; there is no separate exit call.
///
/// Ordering discipline (not calling `on_frame` before `on_init` succeeded)
/// belongs to the run-loop, not to implementations of this trait.
pub trait Game {
    /// One-time setup. Returning `false` aborts the bootstrap sequence.
    fn on_init(&mut self) -> bool;

    /// Advances the simulation by one frame against the engine-owned input
    /// snapshot for that frame.
    fn on_frame(&mut self, input: &mut InputState) -> GameStatus;

    /// Notification that the surface was resized to `resolution`.
    fn on_resize(&mut self, resolution: Extent2);
}

/// Outcome of a single frame, reported by [`Game::on_frame`].
///
/// `#[repr(C)]` because this crosses the C boundary by value; the shim layer
/// passes it through without interpreting it.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    /// Keep running, call `on_frame` again next frame.
    Continue,
    /// Clean shutdown was requested; the run-loop winds down.
    Stop,
    /// The frame failed. The run-loop decides what to surface to the user.
    Error,
}
