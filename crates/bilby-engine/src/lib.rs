//! Engine-side interface surface for the bilby core loop.
//!
//! This crate owns the types that cross the engine boundary: the [`Game`]
//! lifecycle trait the run-loop drives, the closed [`GameStatus`] set a frame
//! reports back, the per-frame [`InputState`] snapshot and the fixed-layout
//! math records. The C ABI surface over all of this lives in `bilby-ffi`.

pub mod game;
pub mod input;
pub mod logging;
pub mod math;

pub use game::{Game, GameStatus};
pub use input::InputState;
pub use math::{Extent2, Vec2, Vec3, Vec3A, Vec4};
