//! Contact submission over `fetch` via `gloo-net`.

use futures::FutureExt;
use futures::future::LocalBoxFuture;
use gloo_net::http::Request;
use web_sys::UrlSearchParams;

use crate::error::SubmitError;
use crate::forms::FormFields;
use crate::forms::contact::FormTransport;

/// POSTs form-encoded fields and reports only the response status.
pub struct FetchTransport;

impl FormTransport for FetchTransport {
    fn post(&self, endpoint: &str, fields: FormFields) -> LocalBoxFuture<'static, Result<(), SubmitError>> {
        let endpoint = endpoint.to_owned();
        async move { send(&endpoint, &fields).await }.boxed_local()
    }
}

async fn send(endpoint: &str, fields: &FormFields) -> Result<(), SubmitError> {
    let body = UrlSearchParams::new().map_err(|err| SubmitError::Network(format!("{err:?}")))?;
    for (name, value) in fields {
        body.append(name, value);
    }
    // The response body is never read; only `ok()` matters.
    let resp = Request::post(endpoint)
        .header("Accept", "application/json")
        .body(body)
        .map_err(|err| SubmitError::Network(err.to_string()))?
        .send()
        .await
        .map_err(|err| SubmitError::Network(err.to_string()))?;
    if resp.ok() {
        Ok(())
    } else {
        Err(SubmitError::Rejected(resp.status()))
    }
}
