//! Pagination Calculator
//!
//! Computes derived pagination facts from a total record count and the
//! requested page/limit. Pure: it knows nothing about which resource is
//! being paginated; applying skip/limit to a query is the persistence
//! layer's concern.

use serde::{Deserialize, Serialize};
use shared::error::{AppError, AppResult};

/// Derived facts for one page of a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    /// Records to skip before this page: (page - 1) * limit
    pub skip: u64,
    /// ceil(total / limit)
    pub total_pages: u64,
    /// Records per full page, capped by the total
    pub items_by_page: u64,
    /// Records covered up to and including this page
    pub current_items_quantity: u64,
}

/// Compute pagination facts
///
/// `page` and `limit` must both be at least 1; the caller rejects the
/// request before touching persistence otherwise.
pub fn paginate(total_items: u64, page: u64, limit: u64) -> AppResult<PageInfo> {
    if page < 1 || limit < 1 {
        return Err(
            AppError::validation("Page and limit are required as positive integers")
                .with_detail("page", page)
                .with_detail("limit", limit),
        );
    }

    Ok(PageInfo {
        skip: (page - 1) * limit,
        total_pages: total_items.div_ceil(limit),
        items_by_page: limit.min(total_items),
        current_items_quantity: (limit * page).min(total_items),
    })
}
