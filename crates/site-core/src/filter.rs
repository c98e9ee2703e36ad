use smallvec::SmallVec;

pub const FILTER_ALL: &str = "all";

/// Space-separated `data-category` value split into its categories.
pub fn categories(attr: &str) -> SmallVec<[&str; 4]> {
    attr.split_whitespace().collect()
}

/// Whether a card with the given `data-category` passes the active filter.
pub fn matches_filter(category_attr: Option<&str>, filter: &str) -> bool {
    if filter == FILTER_ALL {
        return true;
    }
    category_attr
        .map(|attr| categories(attr).contains(&filter))
        .unwrap_or(false)
}
