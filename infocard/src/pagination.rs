use alloc::format;
use alloc::string::String;

use crate::classes::{ClassList, css};

/// Cyclic page index over `count` listings.
///
/// `index` is always in `0..count`. A count of zero is a caller error; it is treated as one page
/// so the modulo arithmetic stays defined.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    index: usize,
    count: usize,
}

impl Pagination {
    pub fn new(count: usize) -> Self {
        debug_assert!(count > 0, "Pagination: count must be at least 1");
        Self {
            index: 0,
            count: count.max(1),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Paging is only offered when more than one listing shares the card.
    pub fn is_carousel(&self) -> bool {
        self.count > 1
    }

    /// Advances to the next listing, wrapping to the first. Returns the new index.
    pub fn next(&mut self) -> usize {
        self.index = (self.index + 1) % self.count;
        ictrace!(index = self.index, count = self.count, "Pagination::next");
        self.index
    }

    /// Steps back to the previous listing, wrapping to the last. Returns the new index.
    pub fn previous(&mut self) -> usize {
        self.index = (self.index + self.count - 1) % self.count;
        ictrace!(index = self.index, count = self.count, "Pagination::previous");
        self.index
    }

    /// One-based `"i/N"` label.
    pub fn label(&self) -> String {
        format!("{}/{}", self.index + 1, self.count)
    }

    /// The pagination strip, or `None` when there is nothing to page through.
    pub fn view(&self) -> Option<PaginationView> {
        if !self.is_carousel() {
            return None;
        }
        Some(PaginationView {
            index: self.index,
            count: self.count,
            label: self.label(),
            class: ClassList::new()
                .with(css::PAGINATION_INFO)
                .with(css::BORDER_RADIUS_INHERIT_BOTTOM),
            previous_class: ClassList::new().with(css::PAGINATION_PREV),
            page_class: ClassList::new().with(css::PAGINATION_PAGE),
            next_class: ClassList::new().with(css::PAGINATION_NEXT),
        })
    }
}

/// Read-only render data of the pagination strip.
///
/// Clicks on its buttons are routed back to the owning card as
/// [`ClickTarget::PreviousPage`](crate::ClickTarget::PreviousPage) /
/// [`ClickTarget::NextPage`](crate::ClickTarget::NextPage).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaginationView {
    pub index: usize,
    pub count: usize,
    pub label: String,
    pub class: ClassList,
    pub previous_class: ClassList,
    pub page_class: ClassList,
    pub next_class: ClassList,
}
