// Console plumbing: panic hook, warnings/errors and console.time guards.
// Off wasm32 (native unit tests) the same messages go to stderr.

#[cfg(target_arch = "wasm32")]
use web_sys::console;

pub fn set_panic_hook() {
    // Forwards panic messages to console.error instead of "unreachable executed"
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

#[cfg(target_arch = "wasm32")]
pub fn warn(msg: &str) {
    console::warn_1(&msg.into());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn warn(msg: &str) {
    eprintln!("warning: {}", msg);
}

#[cfg(target_arch = "wasm32")]
pub fn error(msg: &str) {
    console::error_1(&msg.into());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn error(msg: &str) {
    eprintln!("error: {}", msg);
}

// Times its own lifetime with console.time, only with the "timing" feature
pub struct Timer<'a> {
    #[allow(dead_code)]
    name: &'a str,
}

impl<'a> Timer<'a> {
    pub fn new(name: &'a str) -> Timer<'a> {
        #[cfg(all(feature = "timing", target_arch = "wasm32"))]
        console::time_with_label(name);
        Timer { name }
    }
}

#[cfg(all(feature = "timing", target_arch = "wasm32"))]
impl<'a> Drop for Timer<'a> {
    fn drop(&mut self) {
        console::time_end_with_label(self.name);
    }
}
