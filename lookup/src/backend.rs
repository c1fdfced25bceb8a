use std::{marker::PhantomData, time::Duration};

use anyhow::{Context as _, Result};
use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    catalog::{Catalog, Summary},
    config::Config,
    context::Context,
    page::{Page, PageRequest},
};

mod http;
pub mod data;

/// Client for a panel-style JSON API: `data[].attributes` bodies with `meta.pagination`.
#[derive(Clone)]
pub struct Backend {
    url: Url,
    token: String,
    timeout: Duration,
}

impl Backend {
    pub fn new(config: &Config) -> Self {
        Self::with_url(config.url().clone(), config.token(), *config.timeout())
    }

    pub fn with_url(mut url: Url, token: &str, timeout: Duration) -> Self {
        // Collection paths are joined onto the base, which only works on a directory url
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        Self {
            url,
            token: token.to_string(),
            timeout,
        }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Catalog over the collection at `target`, e.g. `backend.catalog("node", "nodes")`.
    pub fn catalog<S, D>(&self, kind: &str, target: &str) -> ApiCatalog<S, D> {
        ApiCatalog {
            backend: self.clone(),
            kind: kind.to_string(),
            target: target.trim_matches('/').to_string(),
            types: PhantomData,
        }
    }
}

pub struct ApiCatalog<S, D> {
    backend: Backend,
    kind: String,
    target: String,
    types: PhantomData<fn() -> (S, D)>,
}

impl<S, D> Catalog for ApiCatalog<S, D>
where
    S: Summary + DeserializeOwned,
    D: DeserializeOwned,
{
    type Summary = S;
    type Detail = D;

    fn kind(&self) -> &str {
        &self.kind
    }

    fn list_summaries(&self, context: &Context, request: &PageRequest) -> Result<Page<S>> {
        let page = match request.cursor() {
            Some(cursor) => cursor
                .parse::<u32>()
                .with_context(|| format!("Invalid page cursor {cursor}"))?,
            None => 1,
        };
        let url = self.backend.list_url(&self.target, page, *request.limit())?;
        let list = self
            .backend
            .get_list::<S>(context, &url)
            .with_context(|| format!("Failed to list {} page {}", self.kind, page))?;

        let next = list.next_page(page).map(|page| page.to_string());
        Ok(Page::new(
            list.data.into_iter().map(|object| object.attributes).collect(),
            next,
        ))
    }

    fn get_detail(&self, context: &Context, id: &S::Id) -> Result<Option<D>> {
        let url = self.backend.detail_url(&self.target, &id.to_string())?;
        Ok(self
            .backend
            .get_object::<D>(context, &url)
            .with_context(|| format!("Failed to get {} {}", self.kind, id))?
            .map(|object| object.attributes))
    }
}
