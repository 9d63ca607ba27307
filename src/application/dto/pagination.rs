use crate::domain::pagination::Pagination;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: serde::de::DeserializeOwned"
))]
pub struct PageDto<T> {
    pub content: Vec<T>,
    pub page: u64,
    pub size: u64,
    pub total_elements: u64,
    pub total_pages: u64,
    pub first: bool,
    pub last: bool,
    pub empty: bool,
}

impl<T> PageDto<T> {
    pub fn from_page<D>(page: Pagination<D>) -> Self
    where
        T: From<D>,
    {
        let total_pages = page.total_pages();
        let first = page.is_first();
        let last = page.is_last();
        let empty = page.is_empty();
        Self {
            content: page.content.into_iter().map(T::from).collect(),
            page: page.page_number,
            size: page.page_size,
            total_elements: page.total_elements,
            total_pages,
            first,
            last,
            empty,
        }
    }
}
