use crate::comparator::{Comparator, NaturalOrder};
use crate::entry::Entry;
use crate::red_black_tree::node::NIL;
use crate::red_black_tree::tree;
use std::fmt;
use std::vec;

/// An ordered map implemented by a red black tree.
///
/// A red black tree is a self-balancing binary search tree in which every node
/// carries a color bit. The tree maintains that the root is black, that no red
/// node has a red child, and that every path from a node to a descendant leaf
/// holds the same number of black nodes, which bounds the height and keeps all
/// operations logarithmic.
///
/// Keys are ordered by a `Comparator` supplied at construction time;
/// `NaturalOrder` delegates to the key's `Ord` implementation.
///
/// # Examples
///
/// ```
/// use ordered_collections::red_black_tree::RedBlackMap;
///
/// let mut map = RedBlackMap::new();
/// map.insert(0, 1);
/// map.insert(3, 4);
///
/// assert_eq!(map.get(&0), Some(&1));
/// assert_eq!(map.get(&1), None);
/// assert_eq!(map.len(), 2);
///
/// assert_eq!(map.min(), Some((&0, &1)));
/// assert_eq!(map.ceil(&2), Some(&3));
///
/// *map.get_mut(&0).unwrap() = 2;
/// assert_eq!(map.remove(&0), Some((0, 2)));
/// assert_eq!(map.remove(&1), None);
/// ```
pub struct RedBlackMap<T, U, C = NaturalOrder> {
    tree: tree::Tree<T, U>,
    comparator: C,
}

impl<T, U> RedBlackMap<T, U> {
    /// Constructs a new, empty `RedBlackMap<T, U>` ordered by the key's `Ord`
    /// implementation.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::red_black_tree::RedBlackMap;
    ///
    /// let map: RedBlackMap<u32, u32> = RedBlackMap::new();
    /// ```
    pub fn new() -> Self {
        RedBlackMap {
            tree: tree::Tree::new(),
            comparator: NaturalOrder,
        }
    }
}

impl<T, U, C> RedBlackMap<T, U, C> {
    /// Constructs a new, empty `RedBlackMap<T, U, C>` ordered by `comparator`.
    ///
    /// All keys inserted into the map must be mutually comparable under the
    /// comparator for the lifetime of the map; the comparator is trusted, not
    /// validated.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::with_comparator(|lhs: &u32, rhs: &u32| rhs.cmp(lhs));
    /// map.insert(1, 'a');
    /// map.insert(3, 'c');
    ///
    /// assert_eq!(map.min(), Some((&3, &'c')));
    /// ```
    pub fn with_comparator(comparator: C) -> Self {
        RedBlackMap {
            tree: tree::Tree::new(),
            comparator,
        }
    }

    /// Returns the number of elements in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns `true` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::red_black_tree::RedBlackMap;
    ///
    /// let map: RedBlackMap<u32, u32> = RedBlackMap::new();
    /// assert!(map.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Clears the map, removing all entries.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// map.insert(2, 2);
    /// map.clear();
    /// assert_eq!(map.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Returns the entry with the minimum key of the map. Returns `None` if
    /// the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// map.insert(3, 3);
    /// assert_eq!(map.min(), Some((&1, &1)));
    /// ```
    pub fn min(&self) -> Option<(&T, &U)> {
        let index = self.tree.min_index();
        if index == NIL {
            return None;
        }
        let entry = &self.tree.node(index).entry;
        Some((&entry.key, &entry.value))
    }

    /// Returns the entry with the maximum key of the map. Returns `None` if
    /// the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// map.insert(3, 3);
    /// assert_eq!(map.max(), Some((&3, &3)));
    /// ```
    pub fn max(&self) -> Option<(&T, &U)> {
        let index = self.tree.max_index();
        if index == NIL {
            return None;
        }
        let entry = &self.tree.node(index).entry;
        Some((&entry.key, &entry.value))
    }

    /// Returns an iterator over the map. The iterator will yield key-value
    /// pairs using in-order traversal, restarting from the minimum key.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// map.insert(3, 3);
    ///
    /// let mut iterator = map.iter();
    /// assert_eq!(iterator.next(), Some((&1, &1)));
    /// assert_eq!(iterator.next(), Some((&3, &3)));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> RedBlackMapIter<'_, T, U> {
        RedBlackMapIter {
            tree: &self.tree,
            current: self.tree.min_index(),
        }
    }

    /// Returns an iterator over the keys of the map in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 'a');
    /// map.insert(3, 'c');
    ///
    /// assert_eq!(map.keys().collect::<Vec<&u32>>(), vec![&1, &3]);
    /// ```
    pub fn keys(&self) -> RedBlackMapKeys<'_, T, U> {
        RedBlackMapKeys { inner: self.iter() }
    }

    /// Returns an iterator over the values of the map, ordered by key.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 'a');
    /// map.insert(3, 'c');
    ///
    /// assert_eq!(map.values().collect::<Vec<&char>>(), vec![&'a', &'c']);
    /// ```
    pub fn values(&self) -> RedBlackMapValues<'_, T, U> {
        RedBlackMapValues { inner: self.iter() }
    }
}

impl<T, U, C> RedBlackMap<T, U, C>
where
    C: Comparator<T>,
{
    /// Inserts a key-value pair into the map. If the key already exists in
    /// the map, it will return and replace the old key-value pair; the tree
    /// shape and length are unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// assert_eq!(map.insert(1, 1), None);
    /// assert_eq!(map.get(&1), Some(&1));
    /// assert_eq!(map.insert(1, 2), Some((1, 1)));
    /// assert_eq!(map.get(&1), Some(&2));
    /// ```
    pub fn insert(&mut self, key: T, value: U) -> Option<(T, U)> {
        self.tree
            .insert(key, value, &self.comparator)
            .map(|entry| (entry.key, entry.value))
    }

    /// Removes a key-value pair from the map. If the key exists in the map,
    /// it will return the associated key-value pair. Otherwise the map is
    /// untouched and it will return `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.remove(&1), Some((1, 1)));
    /// assert_eq!(map.remove(&1), None);
    /// ```
    pub fn remove(&mut self, key: &T) -> Option<(T, U)> {
        self.tree
            .remove(key, &self.comparator)
            .map(|entry| (entry.key, entry.value))
    }

    /// Returns an immutable reference to the value associated with a
    /// particular key. Returns `None` if the key does not exist in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.get(&0), None);
    /// assert_eq!(map.get(&1), Some(&1));
    /// ```
    pub fn get(&self, key: &T) -> Option<&U> {
        let index = self.tree.find(key, &self.comparator);
        if index == NIL {
            return None;
        }
        Some(&self.tree.node(index).entry.value)
    }

    /// Returns a mutable reference to the value associated with a particular
    /// key. Returns `None` if the key does not exist in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// *map.get_mut(&1).unwrap() = 2;
    /// assert_eq!(map.get(&1), Some(&2));
    /// ```
    pub fn get_mut(&mut self, key: &T) -> Option<&mut U> {
        let index = self.tree.find(key, &self.comparator);
        if index == NIL {
            return None;
        }
        Some(&mut self.tree.node_mut(index).entry.value)
    }

    /// Checks if a key exists in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// assert!(!map.contains_key(&0));
    /// assert!(map.contains_key(&1));
    /// ```
    pub fn contains_key(&self, key: &T) -> bool {
        self.tree.find(key, &self.comparator) != NIL
    }

    /// Returns a key in the map that is less than or equal to a particular
    /// key. Returns `None` if such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.floor(&0), None);
    /// assert_eq!(map.floor(&2), Some(&1));
    /// ```
    pub fn floor(&self, key: &T) -> Option<&T> {
        let index = self.tree.floor_index(key, &self.comparator);
        if index == NIL {
            return None;
        }
        Some(&self.tree.node(index).entry.key)
    }

    /// Returns a key in the map that is greater than or equal to a particular
    /// key. Returns `None` if such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.ceil(&0), Some(&1));
    /// assert_eq!(map.ceil(&2), None);
    /// ```
    pub fn ceil(&self, key: &T) -> Option<&T> {
        let index = self.tree.ceil_index(key, &self.comparator);
        if index == NIL {
            return None;
        }
        Some(&self.tree.node(index).entry.key)
    }
}

impl<T, U, C> IntoIterator for RedBlackMap<T, U, C> {
    type IntoIter = RedBlackMapIntoIter<T, U>;
    type Item = (T, U);

    fn into_iter(self) -> Self::IntoIter {
        let order = self.tree.in_order_indices();
        let entries = self
            .tree
            .into_nodes()
            .into_iter()
            .map(|node| Some(node.entry))
            .collect();
        RedBlackMapIntoIter {
            entries,
            order: order.into_iter(),
        }
    }
}

impl<'a, T, U, C> IntoIterator for &'a RedBlackMap<T, U, C>
where
    T: 'a,
    U: 'a,
{
    type IntoIter = RedBlackMapIter<'a, T, U>;
    type Item = (&'a T, &'a U);

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator for `RedBlackMap<T, U, C>`.
///
/// This iterator traverses the elements of the map in-order and yields owned
/// key-value pairs.
pub struct RedBlackMapIntoIter<T, U> {
    entries: Vec<Option<Entry<T, U>>>,
    order: vec::IntoIter<usize>,
}

impl<T, U> Iterator for RedBlackMapIntoIter<T, U> {
    type Item = (T, U);

    fn next(&mut self) -> Option<Self::Item> {
        self.order
            .next()
            .and_then(|index| self.entries[index].take())
            .map(|entry| (entry.key, entry.value))
    }
}

/// An iterator for `RedBlackMap<T, U, C>`.
///
/// This iterator traverses the elements of the map in-order and yields
/// immutable references. It advances by following the parent back-references
/// of the tree, so no auxiliary stack is kept.
pub struct RedBlackMapIter<'a, T, U> {
    tree: &'a tree::Tree<T, U>,
    current: usize,
}

impl<'a, T, U> Iterator for RedBlackMapIter<'a, T, U> {
    type Item = (&'a T, &'a U);

    fn next(&mut self) -> Option<Self::Item> {
        if self.current == NIL {
            return None;
        }
        let tree = self.tree;
        let entry = &tree.node(self.current).entry;
        self.current = tree.successor(self.current);
        Some((&entry.key, &entry.value))
    }
}

/// An iterator over the keys of a `RedBlackMap<T, U, C>` in ascending order.
pub struct RedBlackMapKeys<'a, T, U> {
    inner: RedBlackMapIter<'a, T, U>,
}

impl<'a, T, U> Iterator for RedBlackMapKeys<'a, T, U> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|pair| pair.0)
    }
}

/// An iterator over the values of a `RedBlackMap<T, U, C>`, ordered by key.
pub struct RedBlackMapValues<'a, T, U> {
    inner: RedBlackMapIter<'a, T, U>,
}

impl<'a, T, U> Iterator for RedBlackMapValues<'a, T, U> {
    type Item = &'a U;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|pair| pair.1)
    }
}

impl<T, U> Default for RedBlackMap<T, U> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, U, C> fmt::Debug for RedBlackMap<T, U, C>
where
    T: fmt::Debug,
    U: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::RedBlackMap;

    #[test]
    fn test_len_empty() {
        let map: RedBlackMap<u32, u32> = RedBlackMap::new();
        assert_eq!(map.len(), 0);
    }

    #[test]
    fn test_is_empty() {
        let map: RedBlackMap<u32, u32> = RedBlackMap::new();
        assert!(map.is_empty());
    }

    #[test]
    fn test_min_max_empty() {
        let map: RedBlackMap<u32, u32> = RedBlackMap::new();
        assert_eq!(map.min(), None);
        assert_eq!(map.max(), None);
    }

    #[test]
    fn test_insert() {
        let mut map = RedBlackMap::new();
        assert_eq!(map.insert(1, 1), None);
        assert!(map.contains_key(&1));
        assert_eq!(map.get(&1), Some(&1));
    }

    #[test]
    fn test_insert_replace() {
        let mut map = RedBlackMap::new();
        assert_eq!(map.insert(1, 1), None);
        assert_eq!(map.insert(1, 3), Some((1, 1)));
        assert_eq!(map.get(&1), Some(&3));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_remove() {
        let mut map = RedBlackMap::new();
        map.insert(1, 1);
        assert_eq!(map.remove(&1), Some((1, 1)));
        assert!(!map.contains_key(&1));
    }

    #[test]
    fn test_remove_absent() {
        let mut map = RedBlackMap::new();
        map.insert(1, 1);
        assert_eq!(map.remove(&2), None);
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_min_max() {
        let mut map = RedBlackMap::new();
        map.insert(1, 1);
        map.insert(3, 3);
        map.insert(5, 5);

        assert_eq!(map.min(), Some((&1, &1)));
        assert_eq!(map.max(), Some((&5, &5)));
    }

    #[test]
    fn test_get_mut() {
        let mut map = RedBlackMap::new();
        map.insert(1, 1);
        {
            let value = map.get_mut(&1);
            *value.unwrap() = 3;
        }
        assert_eq!(map.get(&1), Some(&3));
    }

    #[test]
    fn test_floor_ceil() {
        let mut map = RedBlackMap::new();
        map.insert(1, 1);
        map.insert(3, 3);
        map.insert(5, 5);

        assert_eq!(map.floor(&0), None);
        assert_eq!(map.floor(&2), Some(&1));
        assert_eq!(map.floor(&4), Some(&3));
        assert_eq!(map.floor(&6), Some(&5));

        assert_eq!(map.ceil(&0), Some(&1));
        assert_eq!(map.ceil(&2), Some(&3));
        assert_eq!(map.ceil(&4), Some(&5));
        assert_eq!(map.ceil(&6), None);
    }

    #[test]
    fn test_insert_scenario() {
        let mut map = RedBlackMap::new();
        for &(key, value) in &[
            ('5', 'e'),
            ('6', 'f'),
            ('7', 'g'),
            ('3', 'c'),
            ('4', 'd'),
            ('1', 'x'),
            ('2', 'b'),
        ] {
            assert_eq!(map.insert(key, value), None);
        }
        assert_eq!(map.insert('1', 'a'), Some(('1', 'x')));

        assert_eq!(map.len(), 7);
        assert_eq!(map.keys().collect::<String>(), "1234567");
        assert_eq!(map.values().collect::<String>(), "abcdefg");
        assert_eq!(map.get(&'8'), None);
    }

    #[test]
    fn test_remove_scenario() {
        let mut map = RedBlackMap::new();
        for &(key, value) in &[
            ('5', 'e'),
            ('6', 'f'),
            ('7', 'g'),
            ('3', 'c'),
            ('4', 'd'),
            ('1', 'a'),
            ('2', 'b'),
        ] {
            map.insert(key, value);
        }

        assert_eq!(map.remove(&'5'), Some(('5', 'e')));
        assert_eq!(map.remove(&'6'), Some(('6', 'f')));
        assert_eq!(map.remove(&'7'), Some(('7', 'g')));
        assert_eq!(map.remove(&'8'), None);
        assert_eq!(map.remove(&'5'), None);

        assert_eq!(map.keys().collect::<String>(), "1234");
        assert_eq!(map.values().collect::<String>(), "abcd");
        assert_eq!(map.len(), 4);

        for key in &['1', '2', '3', '4'] {
            assert!(map.remove(key).is_some());
        }
        assert!(map.is_empty());
        assert_eq!(map.len(), 0);
        assert_eq!(map.keys().count(), 0);
        assert_eq!(map.values().count(), 0);
    }

    #[test]
    fn test_reverse_comparator() {
        let mut map = RedBlackMap::with_comparator(|lhs: &u32, rhs: &u32| rhs.cmp(lhs));
        map.insert(1, 'a');
        map.insert(2, 'b');
        map.insert(3, 'c');

        assert_eq!(map.min(), Some((&3, &'c')));
        assert_eq!(map.max(), Some((&1, &'a')));
        assert_eq!(map.keys().collect::<Vec<&u32>>(), vec![&3, &2, &1]);
        assert_eq!(map.remove(&2), Some((2, 'b')));
        assert_eq!(map.keys().collect::<Vec<&u32>>(), vec![&3, &1]);
    }

    #[test]
    fn test_clear() {
        let mut map = RedBlackMap::new();
        map.insert(1, 1);
        map.insert(2, 2);
        map.clear();
        assert!(map.is_empty());
        assert_eq!(map.iter().count(), 0);
    }

    #[test]
    fn test_into_iter() {
        let mut map = RedBlackMap::new();
        map.insert(1, 2);
        map.insert(5, 6);
        map.insert(3, 4);

        assert_eq!(
            map.into_iter().collect::<Vec<(u32, u32)>>(),
            vec![(1, 2), (3, 4), (5, 6)],
        );
    }

    #[test]
    fn test_iter() {
        let mut map = RedBlackMap::new();
        map.insert(1, 2);
        map.insert(5, 6);
        map.insert(3, 4);

        assert_eq!(
            map.iter().collect::<Vec<(&u32, &u32)>>(),
            vec![(&1, &2), (&3, &4), (&5, &6)],
        );
    }

    #[test]
    fn test_debug() {
        let mut map = RedBlackMap::new();
        map.insert(2, 'b');
        map.insert(1, 'a');

        assert_eq!(format!("{:?}", map), "{1: 'a', 2: 'b'}");
    }
}
