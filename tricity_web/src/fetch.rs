use tricity::quote::QuoteRequest;
use tricity::submit::{QuoteEndpoint, SubmitError, interpret_response};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

use crate::dom;

/// Posts quote requests as JSON with `fetch`.
#[derive(Debug, Clone)]
pub struct FetchEndpoint {
    url: String,
}

impl FetchEndpoint {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    fn build_request(&self, body: &str) -> Result<Request, JsValue> {
        let headers = Headers::new()?;
        headers.set("Content-Type", "application/json")?;

        let init = RequestInit::new();
        init.set_method("POST");
        init.set_headers(&headers);
        init.set_body(&JsValue::from_str(body));

        Request::new_with_str_and_init(&self.url, &init)
    }
}

fn network_error(value: JsValue) -> SubmitError {
    SubmitError::Network(dom::describe_js_error(&value))
}

impl QuoteEndpoint for FetchEndpoint {
    async fn submit(&self, request: &QuoteRequest) -> Result<(), SubmitError> {
        let body = request
            .to_json()
            .map_err(|e| SubmitError::Encode(e.to_string()))?;
        let request = self.build_request(&body).map_err(network_error)?;
        let window = dom::window().map_err(network_error)?;

        let response: Response = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(network_error)?
            .dyn_into()
            .map_err(network_error)?;

        let text = JsFuture::from(response.text().map_err(network_error)?)
            .await
            .map_err(network_error)?
            .as_string()
            .unwrap_or_default();

        interpret_response(response.status(), response.ok(), &text)
    }
}
