use anyhow::Result;
use simplelog::debug;

use crate::{
    catalog::{Catalog, Summary},
    config::Config,
    context::Context,
    error::{NotFoundError, is_not_found},
    page::{MAX_PAGE_SIZE, Pages, clamp_page_size},
};

/// Finds a resource by its exact name and returns the full detail record.
pub struct Resolver<C: Catalog> {
    catalog: C,
    page_size: u32,
}

impl<C: Catalog> Resolver<C> {
    pub fn new(catalog: C) -> Self {
        Self {
            catalog,
            page_size: MAX_PAGE_SIZE,
        }
    }

    /// Resolver requesting pages of the configured `[lookup] page_size`.
    pub fn from_config(catalog: C, config: &Config) -> Self {
        Self::new(catalog).with_page_size(config.page_size())
    }

    #[must_use]
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = clamp_page_size(page_size);
        self
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Scans the listing in order and stops paginating at the first exact match.
    pub fn find_summary(&self, context: &Context, name: &str) -> Result<Option<C::Summary>> {
        for page in Pages::new(&self.catalog, context, self.page_size) {
            let candidate = page?
                .into_items()
                .into_iter()
                .find(|summary| summary.name() == name);
            if let Some(summary) = candidate {
                debug!(
                    "Found {} {} with id {}",
                    self.catalog.kind(),
                    name,
                    summary.id()
                );
                return Ok(Some(summary));
            }
        }
        Ok(None)
    }

    pub fn resolve(&self, context: &Context, name: &str) -> Result<C::Detail> {
        let kind = self.catalog.kind();
        let Some(summary) = self.find_summary(context, name)? else {
            return Err(NotFoundError::new(kind, name).into());
        };

        let id = summary.id();
        match self.catalog.get_detail(context, &id)? {
            Some(detail) => Ok(detail),
            None => Err(NotFoundError::new(kind, name)
                .with_last_request(format!("get {kind} {id}"))
                .into()),
        }
    }

    /// Like [`Resolver::resolve`], but absence is `Ok(None)` instead of an error.
    pub fn resolve_optional(&self, context: &Context, name: &str) -> Result<Option<C::Detail>> {
        match self.resolve(context, name) {
            Ok(detail) => Ok(Some(detail)),
            Err(error) if is_not_found(&error) => {
                debug!("{}", error);
                Ok(None)
            }
            Err(error) => Err(error),
        }
    }
}
