use anyhow::{Context as _, Result, anyhow};
use minreq::Response;
use serde::de::DeserializeOwned;
use simplelog::{debug, error};
use url::Url;

use crate::{context::Context, error::ApiError};

use super::{
    Backend,
    data::{BList, BObject},
};

const STATUS_OK: i32 = 200;
const STATUS_NOT_FOUND: i32 = 404;

impl Backend {
    pub(super) fn list_url(&self, target: &str, page: u32, per_page: u32) -> Result<Url> {
        let mut url = self
            .url
            .join(target)
            .with_context(|| format!("Invalid collection path {target}"))?;
        url.query_pairs_mut()
            .append_pair("page", &page.to_string())
            .append_pair("per_page", &per_page.to_string());
        Ok(url)
    }

    pub(super) fn detail_url(&self, target: &str, id: &str) -> Result<Url> {
        self.url
            .join(&format!("{target}/{id}"))
            .with_context(|| format!("Invalid resource path {target}/{id}"))
    }

    pub(super) fn get_list<T: DeserializeOwned>(
        &self,
        context: &Context,
        url: &Url,
    ) -> Result<BList<T>> {
        let response = self.send(context, url)?;
        Self::check_response(url, &response)?;
        Self::parse(url, &response)
    }

    /// `Ok(None)` when the panel answers 404 for the object.
    pub(super) fn get_object<T: DeserializeOwned>(
        &self,
        context: &Context,
        url: &Url,
    ) -> Result<Option<BObject<T>>> {
        let response = self.send(context, url)?;
        if response.status_code == STATUS_NOT_FOUND {
            debug!("Panel has no object at {}", url);
            return Ok(None);
        }
        Self::check_response(url, &response)?;
        Self::parse(url, &response).map(Some)
    }

    fn send(&self, context: &Context, url: &Url) -> Result<Response> {
        context.check()?;

        debug!("Sending request to the panel: GET {}", url);
        minreq::get(url.as_str())
            .with_header("Authorization", format!("Bearer {}", self.token))
            .with_header("Accept", "application/json")
            .with_timeout(self.request_timeout(context))
            .send()
            .map_err(|error| anyhow!("Failed to send request to the panel at {}: {}", url, error))
    }

    /// Whole seconds for one request: the configured timeout, capped by what is left
    /// of the context deadline, never below one.
    fn request_timeout(&self, context: &Context) -> u64 {
        let timeout = match context.remaining() {
            Some(remaining) => self.timeout.min(remaining),
            None => self.timeout,
        };
        timeout.as_secs().max(1)
    }

    fn check_response(url: &Url, response: &Response) -> Result<()> {
        if response.status_code != STATUS_OK {
            error!(
                "An unexpected error occurred while sending a request to the panel at {}: Received {} status code {}",
                url, response.status_code, response.reason_phrase
            );
            debug!(
                "Response body: {}",
                String::from_utf8_lossy(response.as_bytes())
            );
            return Err(ApiError {
                url: url.to_string(),
                status: response.status_code,
                reason: response.reason_phrase.clone(),
            }
            .into());
        }
        Ok(())
    }

    fn parse<T: DeserializeOwned>(url: &Url, response: &Response) -> Result<T> {
        serde_json::from_slice::<T>(response.as_bytes()).map_err(|parse_error| {
            error!(
                "Failed to parse response from the panel at URL {}: {}",
                url, &parse_error
            );
            debug!(
                "Response body: {}",
                String::from_utf8_lossy(response.as_bytes())
            );
            anyhow!(parse_error).context(format!("Malformed response from {url}"))
        })
    }
}
