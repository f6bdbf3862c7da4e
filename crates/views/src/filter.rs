use clearout_items::{Category, Disposition, Item};

/// A filter chip: show everything, or only one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter<T> {
    #[default]
    All,
    Only(T),
}

impl<T: PartialEq> Filter<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(wanted) => wanted == value,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Filter::All)
    }
}

/// Restrict a snapshot to the items matching both filters (logical AND).
///
/// Filtering borrows; the underlying items are never mutated and their
/// order is preserved.
pub fn visible<'a>(
    items: &'a [Item],
    category: &Filter<Category>,
    status: &Filter<Disposition>,
) -> Vec<&'a Item> {
    items
        .iter()
        .filter(|item| category.matches(&item.category) && status.matches(&item.status))
        .collect()
}

/// Items in `category`, counted over the full unfiltered set.
///
/// Chip badges use these counts, so they must not move when a filter is
/// active, only when the underlying item set changes.
pub fn category_count(items: &[Item], category: Category) -> usize {
    items.iter().filter(|i| i.category == category).count()
}

/// Items at `disposition`, counted over the full unfiltered set.
pub fn disposition_count(items: &[Item], disposition: Disposition) -> usize {
    items.iter().filter(|i| i.status == disposition).count()
}
