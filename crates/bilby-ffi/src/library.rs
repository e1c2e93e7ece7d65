//! Resolves the callback bundle out of an embedder shipped as a shared
//! library, in the same shape a statically linked embedder would pass to
//! [`bilby_game_new`](crate::exports::bilby_game_new).

use crate::game::CallbackGame;
use crate::sig::{Create, Frame, Init, Resize, Shutdown};
use anyhow::anyhow;
use libloading::{Library, Symbol};
use std::path::Path;

/// A loaded embedder library with all five symbols resolved up front, so a
/// missing symbol surfaces at load time rather than mid-frame.
#[derive(Debug)]
pub struct GameLibrary {
    #[allow(dead_code)]
    /// The libloading library that is currently loaded
    library: Library,
    create_fn: Symbol<'static, Create>,
    init_fn: Symbol<'static, Init>,
    frame_fn: Symbol<'static, Frame>,
    resize_fn: Symbol<'static, Resize>,
    shutdown_fn: Symbol<'static, Shutdown>,
}

impl GameLibrary {
    /// Loads the library at `lib_path` and resolves the core loop symbols.
    pub fn new(lib_path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let lib_path = lib_path.as_ref();
        if !lib_path.exists() {
            anyhow::bail!(
                "Game library missing at '{}'. Expected this file next to the runtime executable or inside its 'libs' directory.",
                lib_path.display()
            );
        }
        unsafe {
            let library = Library::new(lib_path)
                .map_err(|err| anyhow!("Failed to load game library '{}': {err}", lib_path.display()))?;

            let create_fn = load_symbol(&library, b"bilby_game_create\0", "bilby_game_create")?;
            let init_fn = load_symbol(&library, b"bilby_game_init\0", "bilby_game_init")?;
            let frame_fn = load_symbol(&library, b"bilby_game_frame\0", "bilby_game_frame")?;
            let resize_fn = load_symbol(&library, b"bilby_game_resize\0", "bilby_game_resize")?;
            let shutdown_fn =
                load_symbol(&library, b"bilby_game_shutdown\0", "bilby_game_shutdown")?;

            log::debug!("Loaded game library from {}", lib_path.display());

            Ok(Self {
                library,
                create_fn,
                init_fn,
                frame_fn,
                resize_fn,
                shutdown_fn,
            })
        }
    }

    /// Asks the library for a fresh context and binds it into an adapter.
    ///
    /// The adapter's function pointers stay valid for as long as this
    /// `GameLibrary` is alive, so it must outlive every adapter it produced.
    pub fn instantiate(&self) -> anyhow::Result<CallbackGame> {
        let ctx = unsafe { (self.create_fn)() };
        if ctx.is_null() {
            anyhow::bail!("bilby_game_create returned a null context");
        }
        Ok(unsafe {
            CallbackGame::new(
                ctx,
                *self.init_fn,
                *self.frame_fn,
                *self.resize_fn,
                *self.shutdown_fn,
            )
        })
    }
}

unsafe fn load_symbol<T>(
    library: &Library,
    symbol: &[u8],
    display: &str,
) -> anyhow::Result<Symbol<'static, T>> {
    let symbol: Symbol<'_, T> = unsafe { library.get(symbol) }
        .map_err(|err| anyhow!("Game library does not export '{display}': {err}"))?;
    // lifetime erasure only; the Library field keeps the mapping alive
    Ok(unsafe { std::mem::transmute::<Symbol<'_, T>, Symbol<'static, T>>(symbol) })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_library_names_path() {
        let err = GameLibrary::new("/definitely/not/here/libgame.so").unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here/libgame.so"));
    }
}
