use crate::comparator::Comparator;
use crate::entry::Entry;
use crate::red_black_tree::node::{Color, Node, NIL};
use std::cmp::Ordering;
use std::mem;

/// The node graph of a red black tree.
///
/// Nodes live in a slab indexed by `usize`; `NIL` marks an absent link and is
/// treated as a black leaf. The slab is kept dense: removing a node moves the
/// last slot into the hole and repairs every index that referred to it, so the
/// element count is always the slab length.
pub struct Tree<T, U> {
    pub nodes: Vec<Node<T, U>>,
    pub root: usize,
}

impl<T, U> Tree<T, U> {
    pub fn new() -> Self {
        Tree {
            nodes: Vec::new(),
            root: NIL,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = NIL;
    }

    pub fn node(&self, index: usize) -> &Node<T, U> {
        &self.nodes[index]
    }

    pub fn node_mut(&mut self, index: usize) -> &mut Node<T, U> {
        &mut self.nodes[index]
    }

    pub fn into_nodes(self) -> Vec<Node<T, U>> {
        self.nodes
    }

    pub fn color(&self, index: usize) -> Color {
        if index == NIL {
            Color::Black
        } else {
            self.nodes[index].color
        }
    }

    /// Returns the index of the node holding `key`, or `NIL` if the key is
    /// absent.
    pub fn find<C>(&self, key: &T, comparator: &C) -> usize
    where
        C: Comparator<T>,
    {
        let mut current = self.root;
        while current != NIL {
            match comparator.compare(key, &self.nodes[current].entry.key) {
                Ordering::Equal => return current,
                Ordering::Less => current = self.nodes[current].left,
                Ordering::Greater => current = self.nodes[current].right,
            }
        }
        NIL
    }

    /// Inserts a key-value pair. An equal key overwrites the existing entry in
    /// place and returns it; the tree shape and count are untouched. An absent
    /// key becomes a new red leaf, which is then rebalanced.
    pub fn insert<C>(&mut self, key: T, value: U, comparator: &C) -> Option<Entry<T, U>>
    where
        C: Comparator<T>,
    {
        let mut parent = NIL;
        let mut current = self.root;
        let mut ordering = Ordering::Equal;
        while current != NIL {
            ordering = comparator.compare(&key, &self.nodes[current].entry.key);
            match ordering {
                Ordering::Equal => {
                    let entry = Entry { key, value };
                    return Some(mem::replace(&mut self.nodes[current].entry, entry));
                },
                Ordering::Less => {
                    parent = current;
                    current = self.nodes[current].left;
                },
                Ordering::Greater => {
                    parent = current;
                    current = self.nodes[current].right;
                },
            }
        }

        let index = self.nodes.len();
        self.nodes.push(Node::new(key, value, parent));
        if parent == NIL {
            self.root = index;
        } else if ordering == Ordering::Less {
            self.nodes[parent].left = index;
        } else {
            self.nodes[parent].right = index;
        }
        self.insert_fixup(index);
        None
    }

    /// Removes the node holding `key` and returns its entry, or `None` if the
    /// key is absent.
    pub fn remove<C>(&mut self, key: &T, comparator: &C) -> Option<Entry<T, U>>
    where
        C: Comparator<T>,
    {
        let mut node = self.find(key, comparator);
        if node == NIL {
            return None;
        }

        if self.nodes[node].left != NIL && self.nodes[node].right != NIL {
            // Swap the doomed entry with its in-order predecessor, the
            // maximum of the left subtree, and remove that node instead. The
            // predecessor has no right child, so the one-child splice below
            // applies.
            let mut pred = self.nodes[node].left;
            while self.nodes[pred].right != NIL {
                pred = self.nodes[pred].right;
            }
            self.swap_entries(node, pred);
            node = pred;
        }

        let child = if self.nodes[node].right == NIL {
            self.nodes[node].left
        } else {
            self.nodes[node].right
        };
        if self.nodes[node].color == Color::Black {
            // The fixup runs before the splice, on the node being removed,
            // with its single child standing in as the substitute.
            self.nodes[node].color = self.color(child);
            self.delete_fixup(node);
        }
        self.replace_child(node, child);
        if self.nodes[node].parent == NIL && child != NIL {
            self.nodes[child].color = Color::Black;
        }

        Some(self.detach(node))
    }

    /// Returns the index of the leftmost node, or `NIL` on an empty tree.
    pub fn min_index(&self) -> usize {
        let mut current = self.root;
        if current == NIL {
            return NIL;
        }
        while self.nodes[current].left != NIL {
            current = self.nodes[current].left;
        }
        current
    }

    /// Returns the index of the rightmost node, or `NIL` on an empty tree.
    pub fn max_index(&self) -> usize {
        let mut current = self.root;
        if current == NIL {
            return NIL;
        }
        while self.nodes[current].right != NIL {
            current = self.nodes[current].right;
        }
        current
    }

    /// Returns the index of the in-order successor of `index`, or `NIL` if
    /// `index` is the rightmost node.
    pub fn successor(&self, index: usize) -> usize {
        let right = self.nodes[index].right;
        if right != NIL {
            let mut current = right;
            while self.nodes[current].left != NIL {
                current = self.nodes[current].left;
            }
            return current;
        }
        let mut current = index;
        let mut parent = self.nodes[current].parent;
        while parent != NIL && current == self.nodes[parent].right {
            current = parent;
            parent = self.nodes[parent].parent;
        }
        parent
    }

    /// Returns the index of the node with the greatest key that is less than
    /// or equal to `key`, or `NIL` if no such key exists.
    pub fn floor_index<C>(&self, key: &T, comparator: &C) -> usize
    where
        C: Comparator<T>,
    {
        let mut current = self.root;
        let mut result = NIL;
        while current != NIL {
            match comparator.compare(key, &self.nodes[current].entry.key) {
                Ordering::Equal => return current,
                Ordering::Less => current = self.nodes[current].left,
                Ordering::Greater => {
                    result = current;
                    current = self.nodes[current].right;
                },
            }
        }
        result
    }

    /// Returns the index of the node with the least key that is greater than
    /// or equal to `key`, or `NIL` if no such key exists.
    pub fn ceil_index<C>(&self, key: &T, comparator: &C) -> usize
    where
        C: Comparator<T>,
    {
        let mut current = self.root;
        let mut result = NIL;
        while current != NIL {
            match comparator.compare(key, &self.nodes[current].entry.key) {
                Ordering::Equal => return current,
                Ordering::Greater => current = self.nodes[current].right,
                Ordering::Less => {
                    result = current;
                    current = self.nodes[current].left;
                },
            }
        }
        result
    }

    /// Returns the slab indices of all nodes in key order.
    pub fn in_order_indices(&self) -> Vec<usize> {
        let mut indices = Vec::with_capacity(self.len());
        let mut current = self.min_index();
        while current != NIL {
            indices.push(current);
            current = self.successor(current);
        }
        indices
    }

    fn swap_entries(&mut self, a: usize, b: usize) {
        let (low, high) = if a < b { (a, b) } else { (b, a) };
        let (head, tail) = self.nodes.split_at_mut(high);
        mem::swap(&mut head[low].entry, &mut tail[0].entry);
    }

    fn sibling(&self, node: usize) -> usize {
        let parent = self.nodes[node].parent;
        if node == self.nodes[parent].left {
            self.nodes[parent].right
        } else {
            self.nodes[parent].left
        }
    }

    /// Splices `new` into the place `old` occupies in `old`'s parent link, or
    /// the root. `old`'s own links are left untouched.
    fn replace_child(&mut self, old: usize, new: usize) {
        let parent = self.nodes[old].parent;
        if parent == NIL {
            self.root = new;
        } else if old == self.nodes[parent].left {
            self.nodes[parent].left = new;
        } else {
            self.nodes[parent].right = new;
        }
        if new != NIL {
            self.nodes[new].parent = parent;
        }
    }

    fn rotate_left(&mut self, node: usize) {
        let right = self.nodes[node].right;
        self.replace_child(node, right);
        let right_left = self.nodes[right].left;
        self.nodes[node].right = right_left;
        if right_left != NIL {
            self.nodes[right_left].parent = node;
        }
        self.nodes[right].left = node;
        self.nodes[node].parent = right;
    }

    fn rotate_right(&mut self, node: usize) {
        let left = self.nodes[node].left;
        self.replace_child(node, left);
        let left_right = self.nodes[left].right;
        self.nodes[node].left = left_right;
        if left_right != NIL {
            self.nodes[left_right].parent = node;
        }
        self.nodes[left].right = node;
        self.nodes[node].parent = left;
    }

    fn insert_fixup(&mut self, mut node: usize) {
        loop {
            // case 1: the inserted node is the root
            let parent = self.nodes[node].parent;
            if parent == NIL {
                self.nodes[node].color = Color::Black;
                return;
            }

            // case 2: a black parent leaves every invariant intact
            if self.color(parent) == Color::Black {
                return;
            }

            // The parent is red, so it is not the root and the grandparent
            // exists.
            let grandparent = self.nodes[parent].parent;
            let uncle = if parent == self.nodes[grandparent].left {
                self.nodes[grandparent].right
            } else {
                self.nodes[grandparent].left
            };

            // case 3: a red uncle needs only recoloring, which may move the
            // violation two levels up
            if self.color(uncle) == Color::Red {
                self.nodes[parent].color = Color::Black;
                self.nodes[uncle].color = Color::Black;
                self.nodes[grandparent].color = Color::Red;
                node = grandparent;
                continue;
            }

            // case 4: rotate an inner grandchild into the outer configuration
            if node == self.nodes[parent].right && parent == self.nodes[grandparent].left {
                self.rotate_left(parent);
                node = self.nodes[node].left;
            } else if node == self.nodes[parent].left && parent == self.nodes[grandparent].right {
                self.rotate_right(parent);
                node = self.nodes[node].right;
            }

            // case 5: the node is an outer grandchild of a red parent under a
            // black grandparent; one rotation of the grandparent rebalances
            let parent = self.nodes[node].parent;
            let grandparent = self.nodes[parent].parent;
            self.nodes[parent].color = Color::Black;
            self.nodes[grandparent].color = Color::Red;
            if node == self.nodes[parent].left {
                self.rotate_right(grandparent);
            } else {
                self.rotate_left(grandparent);
            }
            return;
        }
    }

    fn delete_fixup(&mut self, mut node: usize) {
        loop {
            // case 1: the doomed node is the root
            let parent = self.nodes[node].parent;
            if parent == NIL {
                return;
            }

            // case 2: a red sibling is rotated into a black one so the
            // remaining cases apply
            let mut sibling = self.sibling(node);
            if self.color(sibling) == Color::Red {
                self.nodes[parent].color = Color::Red;
                self.nodes[sibling].color = Color::Black;
                if node == self.nodes[parent].left {
                    self.rotate_left(parent);
                } else {
                    self.rotate_right(parent);
                }
                sibling = self.sibling(node);
            }

            // case 3: parent, sibling, and both nephews black; recoloring the
            // sibling pushes the missing black one level up
            if self.color(parent) == Color::Black
                && self.color(sibling) == Color::Black
                && self.color(self.nodes[sibling].left) == Color::Black
                && self.color(self.nodes[sibling].right) == Color::Black
            {
                self.nodes[sibling].color = Color::Red;
                node = parent;
                continue;
            }

            // case 4: a red parent absorbs the missing black
            if self.color(parent) == Color::Red
                && self.color(sibling) == Color::Black
                && self.color(self.nodes[sibling].left) == Color::Black
                && self.color(self.nodes[sibling].right) == Color::Black
            {
                self.nodes[sibling].color = Color::Red;
                self.nodes[parent].color = Color::Black;
                return;
            }

            // case 5: the sibling's red child is on the near side; rotate the
            // sibling so it moves to the far side
            if node == self.nodes[parent].left
                && self.color(sibling) == Color::Black
                && self.color(self.nodes[sibling].left) == Color::Red
                && self.color(self.nodes[sibling].right) == Color::Black
            {
                self.nodes[sibling].color = Color::Red;
                let near = self.nodes[sibling].left;
                self.nodes[near].color = Color::Black;
                self.rotate_right(sibling);
            } else if node == self.nodes[parent].right
                && self.color(sibling) == Color::Black
                && self.color(self.nodes[sibling].right) == Color::Red
                && self.color(self.nodes[sibling].left) == Color::Black
            {
                self.nodes[sibling].color = Color::Red;
                let near = self.nodes[sibling].right;
                self.nodes[near].color = Color::Black;
                self.rotate_left(sibling);
            }

            // case 6: the far nephew is red; exchanging colors and rotating
            // the parent toward the doomed side restores the black-height
            let sibling = self.sibling(node);
            self.nodes[sibling].color = self.color(parent);
            self.nodes[parent].color = Color::Black;
            if node == self.nodes[parent].left {
                let far = self.nodes[sibling].right;
                self.nodes[far].color = Color::Black;
                self.rotate_left(parent);
            } else {
                let far = self.nodes[sibling].left;
                self.nodes[far].color = Color::Black;
                self.rotate_right(parent);
            }
            return;
        }
    }

    /// Reclaims the slab slot of a node that is no longer linked into the
    /// tree. The last slot moves into the hole and every index that referred
    /// to it is repaired.
    fn detach(&mut self, index: usize) -> Entry<T, U> {
        let node = self.nodes.swap_remove(index);
        let moved = self.nodes.len();
        if index != moved {
            let parent = self.nodes[index].parent;
            if parent == NIL {
                self.root = index;
            } else if self.nodes[parent].left == moved {
                self.nodes[parent].left = index;
            } else {
                self.nodes[parent].right = index;
            }
            let left = self.nodes[index].left;
            if left != NIL {
                self.nodes[left].parent = index;
            }
            let right = self.nodes[index].right;
            if right != NIL {
                self.nodes[right].parent = index;
            }
        }
        node.entry
    }
}
