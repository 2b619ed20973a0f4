//! One page of a list endpoint.

use crate::validation::Validate;
use crate::CoreResult;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagedData<T> {
    pub data: Vec<T>,
    /// Next page number, if any
    pub next: Option<u32>,
    /// Previous page number, if any
    pub prev: Option<u32>,
    /// Total number of pages
    pub pages: u32,
}

impl<T> PagedData<T> {
    /// Replace the items while keeping the paging cursors
    pub fn with_data<U>(self, data: Vec<U>) -> PagedData<U> {
        PagedData {
            data,
            next: self.next,
            prev: self.prev,
            pages: self.pages,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl<T: Validate> Validate for PagedData<T> {
    fn validate(&self) -> CoreResult<()> {
        self.data.iter().try_for_each(Validate::validate)
    }

    fn into_validated(self) -> CoreResult<Self> {
        let data = self
            .data
            .into_iter()
            .map(Validate::into_validated)
            .collect::<CoreResult<Vec<T>>>()?;
        Ok(PagedData {
            data,
            next: self.next,
            prev: self.prev,
            pages: self.pages,
        })
    }
}
