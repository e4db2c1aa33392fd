//! Console logging for the browser build.

/// Route `log` records to the browser console and report panics there.
///
/// Safe to call more than once; later calls keep the first logger.
pub fn init() {
    #[cfg(feature = "csr")]
    {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Debug);
    }
}
