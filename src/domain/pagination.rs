//! "Load more" windowing over an already materialised result.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub has_more: bool,
}

/// Returns the first `page_size * pages_loaded` items.
pub fn paginate<T: Clone>(items: &[T], page_size: usize, pages_loaded: usize) -> Page<T> {
    let end = page_size.saturating_mul(pages_loaded).min(items.len());
    let window = items[..end].to_vec();
    Page {
        has_more: items.len() > window.len(),
        items: window,
    }
}

/// Caller-held pagination state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageCursor {
    pub page_size: usize,
    pub pages_loaded: usize,
}

impl PageCursor {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size,
            pages_loaded: 1,
        }
    }

    pub fn load_more(&mut self) {
        self.pages_loaded = self.pages_loaded.saturating_add(1);
    }

    pub fn reset(&mut self) {
        self.pages_loaded = 1;
    }

    pub fn window_len(&self) -> usize {
        self.page_size.saturating_mul(self.pages_loaded)
    }

    pub fn apply<T: Clone>(&self, items: &[T]) -> Page<T> {
        paginate(items, self.page_size, self.pages_loaded)
    }
}
