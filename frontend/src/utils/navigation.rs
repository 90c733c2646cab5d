#[cfg(target_arch = "wasm32")]
pub fn redirect_to(path: &str) {
    if let Some(window) = web_sys::window() {
        let location = window.location();
        if location.pathname().map(|p| p == path).unwrap_or(false) {
            return;
        }
        let _ = location.set_href(path);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn redirect_to(path: &str) {
    log::debug!("redirect to {} skipped outside the browser", path);
}
