//! Best-effort platform side effects: clipboard and link opening.
//!
//! Failures here are logged and swallowed; they never touch the scan state.

/// Copy text to the system clipboard, fire-and-forget.
pub fn copy_to_clipboard(text: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let clipboard = window.navigator().clipboard();
        let text = text.to_string();
        wasm_bindgen_futures::spawn_local(async move {
            let write = wasm_bindgen_futures::JsFuture::from(clipboard.write_text(&text));
            if let Err(err) = write.await {
                tracing::error!("clipboard write failed: {err:?}");
            }
        });
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::debug!("no clipboard backend on this platform ({} chars dropped)", text.len());
    }
}

/// Open a scanned link in a new browsing context. Refuses anything that is
/// not an absolute http(s) URL.
pub fn open_in_new_tab(url: &str) {
    if !session::is_openable_url(url) {
        return;
    }

    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(err) = window.open_with_url_and_target(url, "_blank") {
            tracing::error!("window.open failed: {err:?}");
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        if let Err(err) = open::that(url) {
            tracing::error!("failed to open browser: {err}");
        }
    }
}
