use serde::Deserialize;

use crate::catalog::Summary;

#[derive(Deserialize, Debug)]
pub struct BPagination {
    pub total_pages: u32,
}

#[derive(Deserialize, Debug)]
pub struct BMetadata {
    pub pagination: BPagination,
}

#[derive(Deserialize, Debug)]
pub struct BBody<T> {
    pub data: T,
    pub meta: Option<BMetadata>,
}

#[derive(Deserialize, Debug)]
pub struct BObject<T> {
    pub attributes: T,
}

pub type BList<T> = BBody<Vec<BObject<T>>>;

impl<T> BList<T> {
    /// Page following `current`, if the panel reports one. A body without `meta` is
    /// treated as the only page.
    pub fn next_page(&self, current: u32) -> Option<u32> {
        match &self.meta {
            Some(meta) if meta.pagination.total_pages > current => Some(current + 1),
            _ => None,
        }
    }
}

/// Summary shape shared by most panel collections.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BResource {
    pub id: u32,
    pub name: String,
}

impl Summary for BResource {
    type Id = u32;

    fn id(&self) -> u32 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Users are listed by `username` instead of `name`.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BUser {
    pub id: u32,
    pub username: String,
}

impl Summary for BUser {
    type Id = u32;

    fn id(&self) -> u32 {
        self.id
    }

    fn name(&self) -> &str {
        &self.username
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{BList, BResource, BUser};
    use crate::catalog::Summary;

    #[test]
    fn list_with_meta_points_to_next_page() {
        let list: BList<BResource> = serde_json::from_str(
            r#"{
                "object": "list",
                "data": [
                    { "object": "node", "attributes": { "id": 1, "name": "alpha", "fqdn": "a.example.com" } },
                    { "object": "node", "attributes": { "id": 2, "name": "beta", "fqdn": "b.example.com" } }
                ],
                "meta": { "pagination": { "total": 150, "count": 2, "per_page": 100, "current_page": 1, "total_pages": 2 } }
            }"#,
        )
        .unwrap();

        assert_eq!(list.data.len(), 2);
        assert_eq!(list.data[1].attributes.name(), "beta");
        assert_eq!(list.next_page(1), Some(2));
        assert_eq!(list.next_page(2), None);
    }

    #[test]
    fn list_without_meta_is_the_last_page() {
        let list: BList<BResource> =
            serde_json::from_str(r#"{ "data": [ { "attributes": { "id": 9, "name": "solo" } } ] }"#)
                .unwrap();
        assert_eq!(list.next_page(1), None);
    }

    #[test]
    fn users_match_on_username() {
        let user: BUser =
            serde_json::from_str(r#"{ "id": 4, "username": "admin", "email": "a@b.c" }"#).unwrap();
        assert_eq!(user.name(), "admin");
        assert_eq!(user.id(), 4);
    }
}
