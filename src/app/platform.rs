//! Browser helpers with native stand-ins so the crate builds and tests
//! off-WASM.

use std::time::Duration;

/// Suspend the calling task for `duration`.
pub async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    {
        let millis = i32::try_from(duration.as_millis()).unwrap_or(i32::MAX);
        let promise = js_sys::Promise::new(&mut |resolve, _reject| {
            if let Some(window) = web_sys::window() {
                let _ = window
                    .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, millis);
            }
        });
        let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
    }

    #[cfg(all(not(target_arch = "wasm32"), feature = "server"))]
    {
        tokio::time::sleep(duration).await;
    }

    #[cfg(all(not(target_arch = "wasm32"), not(feature = "server")))]
    {
        let _ = duration;
        futures::future::pending::<()>().await;
    }
}

/// Show a blocking browser alert. Logged instead when not in a browser.
pub fn alert(message: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::info!("alert: {}", message);
    }
}
