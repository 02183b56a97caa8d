//! Browser API wrappers
//!
//! Implementations of the core seams on top of the browser: `fetch` through
//! `gloo-net`, `localStorage` through `web_sys`, timers through `gloo-timers`.

mod http;
mod storage;
mod timer;

pub use http::GlooHttpClient;
pub use storage::LocalTokenStore;
pub use timer::BrowserTimer;

/// Origin of the page, e.g. `http://localhost:8080`.
pub fn page_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}
