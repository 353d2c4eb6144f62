//! Generic client for one resource family.
//!
//! A [`Resource`] is a collection path, the field its pages keep items under,
//! default query parameters and a decoder. The per-family wrappers in
//! [`crate::api`] build one per call and only add argument handling.

use reqwest::StatusCode;
use serde_json::Value;

use crate::{
    factory::Decode,
    pagination::ItemList,
    params::Params,
    request::{ItemsKey, Request},
    transport::Transport,
    Error,
};

pub struct Resource<'a, T, D> {
    transport: &'a T,
    path: String,
    items_key: ItemsKey,
    defaults: Params,
    decode: D,
}

impl<'a, T, D> Resource<'a, T, D>
where
    T: Transport,
    D: Decode + Clone,
{
    pub fn new(transport: &'a T, path: impl Into<String>, decode: D) -> Self {
        Self {
            transport,
            path: path.into(),
            items_key: ItemsKey::default(),
            defaults: Params::new(),
            decode,
        }
    }

    pub fn with_items_key(mut self, items_key: ItemsKey) -> Self {
        self.items_key = items_key;
        self
    }

    /// Query parameters sent on every request unless the caller sets them.
    pub fn with_defaults(mut self, defaults: Params) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Path of a single member of the collection.
    pub fn item_path(&self, id: &str) -> Result<String, Error> {
        check_id("id", id)?;
        Ok(format!("{}/{}", self.path, id))
    }

    /// Lazily lists the collection with a GET per page.
    pub fn list(&self, query: Params) -> ItemList<'a, T, D> {
        let request = Request::get(self.path.clone()).with_query(query.with_defaults(&self.defaults));
        ItemList::new(
            self.transport,
            request,
            self.items_key.clone(),
            self.decode.clone(),
        )
    }

    /// Lazily lists the collection by POSTing a search body.
    pub fn search(&self, body: Value) -> ItemList<'a, T, D> {
        let request = Request::post(self.path.clone(), body).with_query(self.defaults.clone());
        ItemList::new(
            self.transport,
            request,
            self.items_key.clone(),
            self.decode.clone(),
        )
    }

    /// GETs the collection path itself (singleton resources such as `people/me`).
    pub async fn fetch(&self, query: Params) -> Result<D::Output, Error> {
        let request = Request::get(self.path.clone()).with_query(query.with_defaults(&self.defaults));
        self.send(request).await
    }

    pub async fn get(&self, id: &str, query: Params) -> Result<D::Output, Error> {
        let request = Request::get(self.item_path(id)?).with_query(query.with_defaults(&self.defaults));
        self.send(request).await
    }

    pub async fn create(
        &self,
        body: Value,
        query: Params,
        expected: StatusCode,
    ) -> Result<D::Output, Error> {
        let request = Request::post(self.path.clone(), body)
            .with_query(query.with_defaults(&self.defaults))
            .expect(expected);
        self.send(request).await
    }

    pub async fn update(
        &self,
        id: &str,
        body: Value,
        query: Params,
        expected: StatusCode,
    ) -> Result<D::Output, Error> {
        let request = Request::put(self.item_path(id)?, body)
            .with_query(query.with_defaults(&self.defaults))
            .expect(expected);
        self.send(request).await
    }

    /// PUT for endpoints that only acknowledge the update; the body, if any,
    /// is discarded.
    pub async fn replace(
        &self,
        id: &str,
        body: Value,
        query: Params,
        expected: StatusCode,
    ) -> Result<(), Error> {
        let request = Request::put(self.item_path(id)?, body)
            .with_query(query.with_defaults(&self.defaults))
            .expect(expected);
        self.transport.request(&request).await?;
        Ok(())
    }

    pub async fn delete(&self, id: &str, query: Params) -> Result<(), Error> {
        let request =
            Request::delete(self.item_path(id)?).with_query(query.with_defaults(&self.defaults));
        self.transport.request(&request).await?;
        Ok(())
    }

    async fn send(&self, request: Request) -> Result<D::Output, Error> {
        let json = self.transport.request(&request).await?;
        Ok(self.decode.decode(json))
    }
}

/// Path-embedded identifiers must be a single non-empty segment that URL
/// resolution leaves alone.
pub(crate) fn check_id(name: &str, id: &str) -> Result<(), Error> {
    if id.is_empty() {
        return Err(Error::invalid_argument(name, "must not be empty"));
    }
    if id == "." || id == ".." {
        return Err(Error::invalid_argument(name, format!("`{}` is not a valid segment", id)));
    }
    if let Some(c) = id.chars().find(|c| matches!(c, '/' | '\\' | '?' | '#')) {
        return Err(Error::invalid_argument(name, format!("must not contain `{}`", c)));
    }
    Ok(())
}

/// Like [`check_id`], but the value may span several `/`-separated segments,
/// each of which must be valid on its own.
fn check_segments(name: &str, value: &str) -> Result<(), Error> {
    if value.is_empty() {
        return Err(Error::invalid_argument(name, "must not be empty"));
    }
    value.split('/').try_for_each(|segment| check_id(name, segment))
}

/// Substitutes `{name}` placeholders in a path template.
///
/// Every value is checked as a single path segment, except placeholders
/// listed in `multi_segment` (feature names such as `v2/skill`), whose
/// segments are checked one by one. Unknown placeholders are an error.
pub fn expand(
    template: &str,
    vars: &[(&str, &str)],
    multi_segment: &[&str],
) -> Result<String, Error> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let end = rest[start..].find('}').ok_or_else(|| {
            Error::invalid_argument("template", format!("unclosed placeholder in `{}`", template))
        })? + start;
        let name = &rest[start + 1..end];
        let value = vars
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| *value)
            .ok_or_else(|| Error::invalid_argument(name, "no value for path placeholder"))?;
        if multi_segment.contains(&name) {
            check_segments(name, value)?;
        } else {
            check_id(name, value)?;
        }
        out.push_str(value);
        rest = &rest[end + 1..];
    }
    out.push_str(rest);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::{check_id, expand};
    use crate::Error;

    #[test]
    fn expands_placeholders() {
        let path = expand(
            "/organization/{orgId}/{feature}/{id}",
            &[("orgId", "org-1"), ("feature", "team"), ("id", "t-9")],
            &["feature"],
        )
        .unwrap();
        assert_eq!(path, "/organization/org-1/team/t-9");
    }

    #[test]
    fn feature_may_span_segments() {
        let path = expand(
            "/organization/{orgId}/{feature}",
            &[("orgId", "o"), ("feature", "v2/skill")],
            &["feature"],
        )
        .unwrap();
        assert_eq!(path, "/organization/o/v2/skill");
    }

    #[test]
    fn empty_placeholder_value_is_rejected() {
        let err = expand("/organization/{orgId}/skill", &[("orgId", "")], &[]).unwrap_err();
        match err {
            Error::InvalidArgument { name, .. } => assert_eq!(name, "orgId"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn missing_placeholder_value_is_rejected() {
        assert!(expand("/organization/{orgId}", &[], &[]).is_err());
    }

    #[test]
    fn ids_are_single_segments() {
        assert!(check_id("workspaceId", "Y2lzY29zcGFyazovL3Vz").is_ok());
        assert!(check_id("workspaceId", "team.v2").is_ok());
        for bad in ["", ".", "..", "a/b", "a\\b", "w-1?orgId=other", "w-1#frag"] {
            assert!(check_id("workspaceId", bad).is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn single_segment_placeholders_reject_traversal() {
        let err = expand(
            "/organization/{orgId}/{feature}",
            &[("orgId", "org/../other-org"), ("feature", "team")],
            &["feature"],
        )
        .unwrap_err();
        match err {
            Error::InvalidArgument { name, .. } => assert_eq!(name, "orgId"),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(expand(
            "telephony/config/locations/{locationId}/huntGroups/{id}",
            &[("locationId", "loc-1"), ("id", "hg?x=1")],
            &[],
        )
        .is_err());
    }

    #[test]
    fn multi_segment_placeholders_check_each_segment() {
        for bad in ["v2/../people", "v2//skill", "skill?orgId=other", "./skill"] {
            let result = expand(
                "/organization/{orgId}/{feature}",
                &[("orgId", "o"), ("feature", bad)],
                &["feature"],
            );
            assert!(result.is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn dot_segment_ids_are_rejected_before_the_path_is_built() {
        use serde_json::Value;

        use crate::{
            factory::Raw,
            request::{ItemsKey, Request},
            transport::{Page, Transport},
        };

        struct Unreachable;

        impl Transport for Unreachable {
            async fn request(&self, _request: &Request) -> Result<Value, Error> {
                panic!("no request expected")
            }

            async fn fetch_page(&self, _request: &Request, _items_key: &ItemsKey) -> Result<Page, Error> {
                panic!("no request expected")
            }
        }

        let resource = super::Resource::new(&Unreachable, "workspaces", Raw);
        assert!(resource.item_path("..").is_err());
        assert!(resource.item_path("w-1?orgId=other").is_err());
        assert_eq!(resource.item_path("w-1").unwrap(), "workspaces/w-1");
    }
}
