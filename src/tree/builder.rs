//! Bulk construction of trees from existing collections.

use log::debug;
use rand::seq::SliceRandom;

use super::BinaryTree;

/// Build a tree by inserting every item in sequence.
///
/// With `shuffle` set, the insertion order is randomized first. That is a
/// performance hint, not a correctness knob: sorted input inserted in
/// order degenerates the tree into a list, while a shuffled order keeps
/// the expected depth near O(log n). The resulting values are identical
/// either way (duplicates collapse on insertion regardless of order).
pub fn build_tree<T, I>(items: I, shuffle: bool) -> BinaryTree<T>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let mut items: Vec<T> = items.into_iter().collect();
    if shuffle {
        items.shuffle(&mut rand::thread_rng());
    }

    let total = items.len();
    let mut tree = BinaryTree::new();
    let mut inserted = 0usize;
    for item in items {
        if tree.insert(item) {
            inserted += 1;
        }
    }
    debug!(
        "built tree: {} of {} items inserted, height {}",
        inserted,
        total,
        tree.height()
    );

    tree
}

impl<T: Ord> FromIterator<T> for BinaryTree<T> {
    /// Collect into a tree in iteration order (no shuffling).
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        build_tree(iter, false)
    }
}
