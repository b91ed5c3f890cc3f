use std::{collections::VecDeque, sync::Arc};

/// Most favorites kept; older entries are evicted.
pub const FAVORITES_CAPACITY: usize = 5;

/// A saved snapshot of a presented composite, stored as encoded PNG bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Favorite {
    pub png: Arc<[u8]>,
    /// Generation count at the time the snapshot was taken.
    pub generation: u64,
}

/// Most-recent-first list of favorites, bounded to [`FAVORITES_CAPACITY`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Favorites {
    items: VecDeque<Favorite>,
}

impl Favorites {
    pub fn push(&mut self, favorite: Favorite) {
        self.items.push_front(favorite);
        self.items.truncate(FAVORITES_CAPACITY);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Favorite> + '_ {
        self.items.iter()
    }

    pub fn latest(&self) -> Option<&Favorite> {
        self.items.front()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/state/favorites.rs"]
mod tests;
