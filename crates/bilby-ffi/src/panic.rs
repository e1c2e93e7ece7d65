//! Routing Rust panics out to the embedder.
//!
//! A panic on the Rust side of the boundary is a bug, but the foreign host
//! still needs a chance to log it and shut down in its own way before the
//! process dies. The handler is a function pointer plus a data pointer, both
//! stored globally and replaceable from C; the default handler writes the
//! formatted panic to stderr.
//!
//! # Safety
//!
//! There is a small race between [`bilby_set_panic_handler`] and
//! [`bilby_set_panic_data`]: a panic on another thread between the two calls
//! reaches the new handler with the old data pointer. Setting both before
//! any other Rust code runs, as hosts normally do, avoids it entirely.

use std::ffi::{c_char, c_void, CStr, CString};
use std::io::Write;
use std::panic::PanicHookInfo;
use std::ptr::null_mut;
use std::sync::atomic::{AtomicPtr, Ordering};

/// Function pointer type for the panic handler.
///
/// # Arguments
///
/// - `void*`: the data pointer provided via [`bilby_set_panic_data`]. Must
///   gracefully deal with null.
/// - `const char*`: human readable information about the panic, including a
///   backtrace. Never null, always utf8 and null terminated.
pub type PanicHandler = unsafe extern "C" fn(*mut c_void, *const c_char);

// There are no atomic function pointers, so the handler is laundered
// through a raw pointer.
type PanicHandlerProxy = *mut PanicHandler;

static PANIC_HANDLER: AtomicPtr<PanicHandler> =
    AtomicPtr::new(bilby_default_panic_handler as PanicHandlerProxy);
static PANIC_HANDLER_DATA: AtomicPtr<c_void> = AtomicPtr::new(null_mut());

/// The handler installed until the host replaces it. Ignores the data
/// pointer and prints the string to stderr.
///
/// # Safety
///
/// The string must be non-null per the contract of [`PanicHandler`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn bilby_default_panic_handler(_: *mut c_void, string: *const c_char) {
    let _ = std::io::stderr()
        .lock()
        .write_all(unsafe { CStr::from_ptr(string) }.to_bytes());
}

/// Replaces the panic handler.
///
/// # Safety
///
/// `handler` must uphold the contract of [`PanicHandler`] for the rest of
/// the process lifetime. See the module docs for the race with
/// [`bilby_set_panic_data`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn bilby_set_panic_handler(handler: PanicHandler) {
    PANIC_HANDLER.store(handler as PanicHandlerProxy, Ordering::SeqCst);
}

/// Sets the data pointer passed to the panic handler. May be null if the
/// installed handler tolerates that.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn bilby_set_panic_data(data: *mut c_void) {
    PANIC_HANDLER_DATA.store(data, Ordering::SeqCst);
}

/// Returns the currently set panic handler. Non-null.
#[unsafe(no_mangle)]
pub extern "C" fn bilby_get_panic_handler() -> PanicHandler {
    let proxy: PanicHandlerProxy = PANIC_HANDLER.load(Ordering::SeqCst);
    unsafe { std::mem::transmute::<PanicHandlerProxy, PanicHandler>(proxy) }
}

/// Returns the currently set panic data. May be null.
#[unsafe(no_mangle)]
pub extern "C" fn bilby_get_panic_data() -> *mut c_void {
    PANIC_HANDLER_DATA.load(Ordering::SeqCst)
}

/// Hooks the dispatcher into the standard library panic hook.
pub fn init_panic_handler() {
    std::panic::set_hook(Box::new(panic_dispatch))
}

fn panic_dispatch(info: &PanicHookInfo<'_>) {
    let payload = info.payload();
    let message = payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("<non-string panic payload>");
    let location = info
        .location()
        .map(ToString::to_string)
        .unwrap_or_else(|| String::from("<unknown location>"));

    let bt = backtrace::Backtrace::new();
    let msg = format!("Panic: {message} at {location}\n\n{bt:?}");
    // interior nuls cannot come from format output of valid strings, but a
    // panic payload can contain anything
    let c_msg = CString::new(msg)
        .unwrap_or_else(|_| CString::new("Panic: <payload contained nul>").unwrap());
    unsafe {
        let handler = bilby_get_panic_handler();
        handler(PANIC_HANDLER_DATA.load(Ordering::SeqCst), c_msg.as_ptr())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handler_and_data_round_trip() {
        let mut token: u64 = 0xB1B1;
        unsafe {
            bilby_set_panic_data(&mut token as *mut u64 as *mut c_void);
            bilby_set_panic_handler(bilby_default_panic_handler);
        }
        assert_eq!(
            bilby_get_panic_data(),
            &mut token as *mut u64 as *mut c_void
        );
        assert_eq!(
            bilby_get_panic_handler() as usize,
            bilby_default_panic_handler as usize
        );
        unsafe { bilby_set_panic_data(null_mut()) };
    }
}
