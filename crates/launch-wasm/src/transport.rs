use launch_core::error::TransferError;
use launch_core::loader::{TransferResponse, Transport};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response, Window};

/// `window.fetch` based transport.
pub struct FetchTransport {
    window: Window,
}

impl FetchTransport {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

fn js_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

impl Transport for FetchTransport {
    async fn get(&self, uri: &str) -> Result<TransferResponse, TransferError> {
        let opts = RequestInit::new();
        opts.set_method("GET");

        let request = Request::new_with_str_and_init(uri, &opts)
            .map_err(|e| TransferError::Network(js_message(&e)))?;

        let response: Response = JsFuture::from(self.window.fetch_with_request(&request))
            .await
            .map_err(|e| TransferError::Network(js_message(&e)))?
            .dyn_into()
            .map_err(|e| TransferError::Network(js_message(&e)))?;

        let status = response.status();
        if !response.ok() {
            // The loader reports the status; no point downloading an error page.
            return Ok(TransferResponse {
                status,
                body: Vec::new(),
            });
        }

        let buffer = response
            .array_buffer()
            .map_err(|e| TransferError::Body(js_message(&e)))?;
        let buffer = JsFuture::from(buffer)
            .await
            .map_err(|e| TransferError::Body(js_message(&e)))?;
        let body = js_sys::Uint8Array::new(&buffer).to_vec();

        Ok(TransferResponse { status, body })
    }
}
