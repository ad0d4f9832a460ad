use serde::Serialize;

/// One page of a result list
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
}

/// Pages are 1-based; out-of-range requests are clamped to the nearest page.
pub fn paginate<T: Clone>(all: &[T], page: usize, page_size: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let total_pages = total_pages(all.len(), page_size);
    let page = page.clamp(1, total_pages.max(1));

    let start = (page - 1) * page_size;
    let end = (start + page_size).min(all.len());
    let items = all.get(start..end).map(<[T]>::to_vec).unwrap_or_default();

    Page {
        items,
        total: all.len(),
        page,
        page_size,
        total_pages,
    }
}

pub fn total_pages(total: usize, page_size: usize) -> usize {
    if total == 0 {
        0
    } else {
        (total - 1) / page_size + 1
    }
}

impl<T> Page<T> {
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            page_size: self.page_size,
            total_pages: self.total_pages,
        }
    }
}
