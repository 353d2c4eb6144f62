//! Lazy iteration over paginated collections.

use std::collections::VecDeque;

use crate::{
    factory::Decode,
    request::{ItemsKey, Request},
    transport::Transport,
    Error,
};

/// A paginated collection that has not been fetched yet.
///
/// Nothing is sent until a cursor is advanced. Each call to [`ItemList::iter`]
/// starts from the first page again, so the same list can be walked more than
/// once (each walk re-issues the requests).
pub struct ItemList<'a, T, D> {
    transport: &'a T,
    request: Request,
    items_key: ItemsKey,
    decode: D,
}

impl<'a, T, D> ItemList<'a, T, D>
where
    T: Transport,
    D: Decode + Clone,
{
    pub fn new(transport: &'a T, request: Request, items_key: ItemsKey, decode: D) -> Self {
        Self {
            transport,
            request,
            items_key,
            decode,
        }
    }

    /// The request for the first page.
    pub fn request(&self) -> &Request {
        &self.request
    }

    pub fn items_key(&self) -> &ItemsKey {
        &self.items_key
    }

    /// Starts a fresh forward-only walk over the collection.
    pub fn iter(&self) -> Items<'a, T, D> {
        Items {
            transport: self.transport,
            next: Some(self.request.clone()),
            items_key: self.items_key.clone(),
            buffer: VecDeque::new(),
            decode: self.decode.clone(),
            pages: 0,
        }
    }

    /// Walks the whole collection, stopping at the first error.
    pub async fn collect(&self) -> Result<Vec<D::Output>, Error> {
        let mut items = self.iter();
        let mut out = Vec::new();
        while let Some(item) = items.next().await {
            out.push(item?);
        }
        Ok(out)
    }
}

/// Cursor over a paginated collection. The next page is only requested once
/// the current one has been fully consumed.
pub struct Items<'a, T, D> {
    transport: &'a T,
    next: Option<Request>,
    items_key: ItemsKey,
    buffer: VecDeque<serde_json::Value>,
    decode: D,
    pages: usize,
}

impl<T, D> Items<'_, T, D>
where
    T: Transport,
    D: Decode,
{
    /// Returns the next item, `None` once the collection is exhausted.
    ///
    /// A transport error is returned once and ends the walk.
    pub async fn next(&mut self) -> Option<Result<D::Output, Error>> {
        loop {
            if let Some(raw) = self.buffer.pop_front() {
                return Some(Ok(self.decode.decode(raw)));
            }
            let request = self.next.take()?;
            tracing::trace!(
                "Fetching page {} of {} {}",
                self.pages + 1,
                request.method,
                request.path
            );
            match self.transport.fetch_page(&request, &self.items_key).await {
                Ok(page) => {
                    self.pages += 1;
                    self.buffer.extend(page.items);
                    self.next = page.next;
                }
                Err(e) => return Some(Err(e)),
            }
        }
    }

    /// Number of pages fetched so far.
    pub fn pages_fetched(&self) -> usize {
        self.pages
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use serde_json::{json, Value};

    use super::ItemList;
    use crate::{
        factory::Raw,
        request::{ItemsKey, Request},
        transport::{Page, Transport},
        Error,
    };

    /// Serves page `n` for path `n`; an `Err` entry fails with that status.
    struct Pages {
        pages: Vec<Result<Vec<Value>, u16>>,
        calls: Cell<usize>,
    }

    impl Pages {
        fn new(pages: Vec<Result<Vec<Value>, u16>>) -> Self {
            Self {
                pages,
                calls: Cell::new(0),
            }
        }
    }

    impl Transport for Pages {
        async fn request(&self, _request: &Request) -> Result<Value, Error> {
            Err(Error::MalformedResponse("single requests are not served".to_string()))
        }

        async fn fetch_page(&self, request: &Request, _items_key: &ItemsKey) -> Result<Page, Error> {
            self.calls.set(self.calls.get() + 1);
            let index: usize = request.path.parse().unwrap();
            let items = match &self.pages[index] {
                Ok(items) => items.clone(),
                Err(status) => {
                    return Err(Error::HttpStatus {
                        status: *status,
                        expected: 200,
                        body: String::new(),
                    })
                }
            };
            let next = (index + 1 < self.pages.len()).then(|| Request::get((index + 1).to_string()));
            Ok(Page { items, next })
        }
    }

    fn list(transport: &Pages) -> ItemList<'_, Pages, Raw> {
        ItemList::new(transport, Request::get("0"), ItemsKey::default(), Raw)
    }

    #[tokio::test]
    async fn walks_pages_in_order() {
        let transport = Pages::new(vec![
            Ok(vec![json!(1), json!(2)]),
            Ok(vec![json!(3)]),
            Ok(vec![json!(4), json!(5)]),
        ]);
        let items = list(&transport).collect().await.unwrap();
        assert_eq!(items, vec![json!(1), json!(2), json!(3), json!(4), json!(5)]);
        assert_eq!(transport.calls.get(), 3);
    }

    #[tokio::test]
    async fn empty_first_page_is_empty_sequence() {
        let transport = Pages::new(vec![Ok(vec![])]);
        let items = list(&transport).collect().await.unwrap();
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn empty_middle_page_is_skipped() {
        let transport = Pages::new(vec![Ok(vec![json!("a")]), Ok(vec![]), Ok(vec![json!("b")])]);
        let items = list(&transport).collect().await.unwrap();
        assert_eq!(items, vec![json!("a"), json!("b")]);
    }

    #[tokio::test]
    async fn pages_are_fetched_on_demand() {
        let transport = Pages::new(vec![Ok(vec![json!(1), json!(2)]), Ok(vec![json!(3)])]);
        let list = list(&transport);
        let mut items = list.iter();
        assert_eq!(transport.calls.get(), 0);

        assert_eq!(items.next().await.unwrap().unwrap(), json!(1));
        assert_eq!(transport.calls.get(), 1);
        assert_eq!(items.next().await.unwrap().unwrap(), json!(2));
        assert_eq!(transport.calls.get(), 1);
        assert_eq!(items.next().await.unwrap().unwrap(), json!(3));
        assert_eq!(items.pages_fetched(), 2);
        assert!(items.next().await.is_none());
    }

    #[tokio::test]
    async fn error_is_yielded_once_and_ends_the_walk() {
        let transport = Pages::new(vec![Ok(vec![json!(1)]), Err(500), Ok(vec![json!(3)])]);
        let list = list(&transport);
        let mut items = list.iter();
        assert_eq!(items.next().await.unwrap().unwrap(), json!(1));
        assert!(matches!(
            items.next().await,
            Some(Err(Error::HttpStatus { status: 500, .. }))
        ));
        assert!(items.next().await.is_none());
        assert_eq!(transport.calls.get(), 2);

        assert!(list.collect().await.is_err());
    }

    #[tokio::test]
    async fn list_is_restartable() {
        let transport = Pages::new(vec![Ok(vec![json!("x")]), Ok(vec![json!("y")])]);
        let list = list(&transport);
        let first = list.collect().await.unwrap();
        let second = list.collect().await.unwrap();
        assert_eq!(first, second);
        assert_eq!(transport.calls.get(), 4);
    }
}
