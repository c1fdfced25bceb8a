use std::fmt::{Debug, Display};

use anyhow::Result;

use crate::{
    context::Context,
    page::{Page, PageRequest},
};

/// Lightweight record returned by a listing call.
pub trait Summary {
    type Id: Clone + Display + Debug;

    fn id(&self) -> Self::Id;
    fn name(&self) -> &str;
}

/// One resource collection of a cloud API: a paged listing plus a point lookup by id.
///
/// Implementations own transport concerns (auth, retries, wire format) and must honor
/// the [`Context`] they are handed.
pub trait Catalog {
    type Summary: Summary;
    type Detail;

    /// Resource kind used in log lines and not-found messages, e.g. `"node"`.
    fn kind(&self) -> &str;

    fn list_summaries(
        &self,
        context: &Context,
        request: &PageRequest,
    ) -> Result<Page<Self::Summary>>;

    /// `Ok(None)` when the service answered but holds no record for `id`.
    fn get_detail(
        &self,
        context: &Context,
        id: &<Self::Summary as Summary>::Id,
    ) -> Result<Option<Self::Detail>>;
}
