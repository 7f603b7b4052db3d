use crate::model::Product;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchState {
    Loading,
    Empty,
    Populated,
}

impl FetchState {
    /// A fetch in flight wins over whatever collection is still around from
    /// the previous fetch. An absent collection after loading is `Empty`.
    pub fn resolve(is_loading: bool, collection: Option<&[Product]>) -> Self {
        if is_loading {
            return FetchState::Loading;
        }

        match collection {
            Some(items) if !items.is_empty() => FetchState::Populated,
            _ => FetchState::Empty,
        }
    }
}

/// What the data source currently exposes: a loading flag and the last
/// collection it produced, if any.
#[derive(Debug, Clone, Default)]
pub struct QuerySnapshot {
    pub is_loading: bool,
    pub data: Option<Arc<Vec<Product>>>,
}

impl QuerySnapshot {
    pub fn loading() -> Self {
        Self {
            is_loading: true,
            data: None,
        }
    }

    pub fn loaded(data: Vec<Product>) -> Self {
        Self {
            is_loading: false,
            data: Some(Arc::new(data)),
        }
    }

    pub fn products(&self) -> Option<&[Product]> {
        self.data.as_deref().map(Vec::as_slice)
    }

    pub fn fetch_state(&self) -> FetchState {
        FetchState::resolve(self.is_loading, self.products())
    }
}
