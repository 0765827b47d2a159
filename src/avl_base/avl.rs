use std::mem;

use super::{
    avl_traits::{AvlParams, KeyComparator},
    deletion::{DeletionResult, DeletionResultFlags},
    iter::{AvlIterator, AvlReverseIterator},
    node::{AvlNode, Link},
    tree_stats::TreeStats,
};

pub struct AvlTree<T: AvlParams> {
    root_: Link<T>,
    stats_: TreeStats,
    key_less: T::KeyCompareType,
}

/// Convenient Key Comparison Functions Generated From key_less
impl<T: AvlParams> AvlTree<T> {
    // key comparison functions
    pub fn key_comp(&self) -> &T::KeyCompareType {
        &self.key_less
    }

    // convenient key comparison functions generated from key_less
    fn key_less(&self, a: &T::KeyType, b: &T::KeyType) -> bool {
        self.key_less.less(a, b)
    }

    fn key_lessequal(&self, a: &T::KeyType, b: &T::KeyType) -> bool {
        !self.key_less.less(b, a)
    }

    fn key_greater(&self, a: &T::KeyType, b: &T::KeyType) -> bool {
        self.key_less.less(b, a)
    }

    #[allow(dead_code)]
    fn key_greaterequal(&self, a: &T::KeyType, b: &T::KeyType) -> bool {
        !self.key_less.less(a, b)
    }

    fn key_equal(&self, a: &T::KeyType, b: &T::KeyType) -> bool {
        !self.key_less.less(a, b) && !self.key_less.less(b, a)
    }
}

/// Access Functions to the item count
impl<T: AvlParams> AvlTree<T> {
    // access functions to the item count
    pub fn size(&self) -> usize {
        self.stats_.size
    }

    pub fn empty(&self) -> bool {
        self.size() == 0
    }

    /// Height of the whole tree, 0 when empty. Bounded by ~1.44 * log2(n + 2)
    /// while the balance invariant holds.
    pub fn height(&self) -> u16 {
        AvlNode::height_of(&self.root_)
    }

    pub fn get_stats(&self) -> &TreeStats {
        &self.stats_
    }

    /// Removes every entry. Rotation counters are reset along with the size.
    pub fn clear(&mut self) {
        self.root_ = None;
        self.stats_ = TreeStats::new();
    }
}

/// Access functions querying the tree by descending from the root
impl<T: AvlParams> AvlTree<T> {
    /// Checks whether a key is in the tree. The same as get(k).is_some().
    pub fn exists(&self, key: &T::KeyType) -> bool {
        self.get(key).is_some()
    }

    /// Tries to locate a key and returns a reference to its value if found.
    pub fn get(&self, key: &T::KeyType) -> Option<&T::ValueType> {
        let mut n = self.root_.as_deref();

        while let Some(node) = n {
            if self.key_less(key, &node.key) {
                n = node.left.as_deref();
            } else if self.key_greater(key, &node.key) {
                n = node.right.as_deref();
            } else {
                return Some(&node.value);
            }
        }

        None
    }

    /// Tries to locate a key and returns a mutable reference to its value if
    /// found.
    pub fn get_mut(&mut self, key: &T::KeyType) -> Option<&mut T::ValueType> {
        let cmp = self.key_less.clone();
        let mut n = self.root_.as_deref_mut();

        while let Some(node) = n {
            if cmp.less(key, &node.key) {
                n = node.left.as_deref_mut();
            } else if cmp.less(&node.key, key) {
                n = node.right.as_deref_mut();
            } else {
                return Some(&mut node.value);
            }
        }

        None
    }

    /// Entry with the smallest key, or None for the empty tree.
    pub fn first(&self) -> Option<(&T::KeyType, &T::ValueType)> {
        let mut node = self.root_.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some((&node.key, &node.value))
    }

    /// Entry with the largest key, or None for the empty tree.
    pub fn last(&self) -> Option<(&T::KeyType, &T::ValueType)> {
        let mut node = self.root_.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some((&node.key, &node.value))
    }

    /// Returns the first entry with a key equal to or greater than `key`, or
    /// None if all keys are smaller.
    pub fn lower_bound(&self, key: &T::KeyType) -> Option<(&T::KeyType, &T::ValueType)> {
        let mut n = self.root_.as_deref();
        let mut candidate = None;

        while let Some(node) = n {
            if self.key_less(&node.key, key) {
                n = node.right.as_deref();
            } else {
                candidate = Some((&node.key, &node.value));
                n = node.left.as_deref();
            }
        }

        candidate
    }

    /// Returns the first entry with a key greater than `key`, or None if all
    /// keys are smaller or equal.
    pub fn upper_bound(&self, key: &T::KeyType) -> Option<(&T::KeyType, &T::ValueType)> {
        let mut n = self.root_.as_deref();
        let mut candidate = None;

        while let Some(node) = n {
            if self.key_lessequal(&node.key, key) {
                n = node.right.as_deref();
            } else {
                candidate = Some((&node.key, &node.value));
                n = node.left.as_deref();
            }
        }

        candidate
    }
}

/// Iteration
impl<T: AvlParams> AvlTree<T> {
    /// Lazy in-order iterator, increasing key order.
    pub fn iter(&self) -> AvlIterator<'_, T> {
        AvlIterator::new(&self.root_, self.height())
    }

    /// Lazy reverse-in-order iterator, decreasing key order.
    pub fn iter_rev(&self) -> AvlReverseIterator<'_, T> {
        AvlReverseIterator::new(&self.root_, self.height())
    }

    /// In-order traversal. Invokes `visit` once per entry, in strictly
    /// increasing key order.
    pub fn ascend<F>(&self, mut visit: F)
    where
        F: FnMut(&T::KeyType, &T::ValueType),
    {
        for (key, value) in self.iter() {
            visit(key, value);
        }
    }

    /// Reverse-in-order traversal. Invokes `visit` once per entry, in
    /// strictly decreasing key order.
    pub fn descend<F>(&self, mut visit: F)
    where
        F: FnMut(&T::KeyType, &T::ValueType),
    {
        for (key, value) in self.iter_rev() {
            visit(key, value);
        }
    }
}

/// Insertion
impl<T: AvlParams> AvlTree<T> {
    /// Insert a key/data pair into the tree. If the key is already present
    /// its value is replaced and the old value returned; the tree shape is
    /// unchanged in that case.
    pub fn insert(&mut self, key: T::KeyType, value: T::ValueType) -> Option<T::ValueType> {
        log::debug!("AvlTree::insert({:?}) into tree of size {}", key, self.size());

        let mut root = self.root_.take();
        let old = self.insert_descend(&mut root, key, value);
        self.root_ = root;

        if old.is_none() {
            self.stats_.size += 1;
        }

        if T::SELF_VERIFY {
            self.verify();
        }

        old
    }

    /// Descend to the insertion position, link the new node, then recache
    /// heights and rebalance on the unwound path.
    fn insert_descend(
        &mut self,
        link: &mut Link<T>,
        key: T::KeyType,
        value: T::ValueType,
    ) -> Option<T::ValueType> {
        match link {
            None => {
                *link = Some(Box::new(AvlNode::new(key, value)));
                None
            }
            Some(node) => {
                let old = if self.key_less(&key, &node.key) {
                    self.insert_descend(&mut node.left, key, value)
                } else if self.key_greater(&key, &node.key) {
                    self.insert_descend(&mut node.right, key, value)
                } else {
                    // duplicate key: overwrite in place, no structural change
                    return Some(mem::replace(&mut node.value, value));
                };

                if old.is_none() {
                    node.update_height();
                    self.rebalance(link);
                }

                old
            }
        }
    }
}

/// Rotations
impl<T: AvlParams> AvlTree<T> {
    /// Restore the balance invariant at `link` after one child subtree
    /// changed height. At most one single or double rotation is needed.
    fn rebalance(&mut self, link: &mut Link<T>) {
        let mut node = match link.take() {
            Some(node) => node,
            None => return,
        };

        let balance = node.balance_factor();
        if (-1..=1).contains(&balance) {
            *link = Some(node);
            return;
        }

        if balance > 1 {
            let left = node.left.take().expect("left-heavy node has a left child");
            if left.balance_factor() < 0 {
                log::debug!("AvlTree::rebalance left-right at key {:?}", node.key);
                node.left = Some(Self::rotate_left(left));
                self.stats_.double_rotations += 1;
            } else {
                log::debug!("AvlTree::rebalance left-left at key {:?}", node.key);
                node.left = Some(left);
                self.stats_.single_rotations += 1;
            }
            *link = Some(Self::rotate_right(node));
        } else {
            let right = node
                .right
                .take()
                .expect("right-heavy node has a right child");
            if right.balance_factor() > 0 {
                log::debug!("AvlTree::rebalance right-left at key {:?}", node.key);
                node.right = Some(Self::rotate_right(right));
                self.stats_.double_rotations += 1;
            } else {
                log::debug!("AvlTree::rebalance right-right at key {:?}", node.key);
                node.right = Some(right);
                self.stats_.single_rotations += 1;
            }
            *link = Some(Self::rotate_left(node));
        }
    }

    /// Rotate the subtree left around its right child, recaching heights
    /// bottom-up. Keeps the in-order sequence intact.
    fn rotate_left(mut node: Box<AvlNode<T>>) -> Box<AvlNode<T>> {
        let mut pivot = node.right.take().expect("rotate_left needs a right child");
        node.right = pivot.left.take();
        node.update_height();
        pivot.left = Some(node);
        pivot.update_height();
        pivot
    }

    /// Mirror image of rotate_left.
    fn rotate_right(mut node: Box<AvlNode<T>>) -> Box<AvlNode<T>> {
        let mut pivot = node.left.take().expect("rotate_right needs a left child");
        node.left = pivot.right.take();
        node.update_height();
        pivot.right = Some(node);
        pivot.update_height();
        pivot
    }
}

/// Erase
impl<T: AvlParams> AvlTree<T> {
    /// Remove the entry for `key`, returning its value, or None if the key
    /// was not present.
    pub fn erase(&mut self, key: &T::KeyType) -> Option<T::ValueType> {
        log::debug!("AvlTree::erase({:?}) on tree of size {}", key, self.size());

        let mut root = self.root_.take();
        let result = self.erase_descend(&mut root, key);
        self.root_ = root;

        if result.has(DeletionResultFlags::NotFound) {
            return None;
        }

        self.stats_.size -= 1;

        if T::SELF_VERIFY {
            self.verify();
        }

        result.removed
    }

    /// Descend to the node holding `key` and unlink it. Ancestors recache
    /// and rebalance only while the Shrunk flag keeps propagating.
    fn erase_descend(&mut self, link: &mut Link<T>, key: &T::KeyType) -> DeletionResult<T> {
        let node = match link.as_deref_mut() {
            Some(node) => node,
            None => return DeletionResult::new(DeletionResultFlags::NotFound),
        };
        let old_height = node.height;

        let result = if self.key_less(key, &node.key) {
            self.erase_descend(&mut node.left, key)
        } else if self.key_greater(key, &node.key) {
            self.erase_descend(&mut node.right, key)
        } else {
            debug_assert!(self.key_equal(key, &node.key));
            return self.erase_node(link);
        };

        if result.has(DeletionResultFlags::NotFound) || !result.has(DeletionResultFlags::Shrunk) {
            return result;
        }

        node.update_height();
        self.rebalance(link);

        let mut myres = DeletionResult::new(DeletionResultFlags::Ok);
        myres.removed = result.removed;
        if AvlNode::height_of(link) < old_height {
            myres.flags = myres.flags | DeletionResultFlags::Shrunk;
        }
        myres
    }

    /// Unlink the node at `link` itself. A node with two children is
    /// replaced by its in-order successor so the ordering invariant holds.
    fn erase_node(&mut self, link: &mut Link<T>) -> DeletionResult<T> {
        let mut node = link.take().expect("erase_node on a non-empty link");
        let old_height = node.height;

        let removed = match (node.left.take(), node.right.take()) {
            (None, None) => {
                let AvlNode { value, .. } = *node;
                value
            }
            (Some(left), None) => {
                *link = Some(left);
                let AvlNode { value, .. } = *node;
                value
            }
            (None, Some(right)) => {
                *link = Some(right);
                let AvlNode { value, .. } = *node;
                value
            }
            (Some(left), Some(right)) => {
                let mut right_link = Some(right);
                let succ = self.take_leftmost(&mut right_link);

                let AvlNode {
                    key: succ_key,
                    value: succ_value,
                    ..
                } = *succ;

                node.key = succ_key;
                let removed = mem::replace(&mut node.value, succ_value);
                node.left = Some(left);
                node.right = right_link;
                node.update_height();

                *link = Some(node);
                self.rebalance(link);

                removed
            }
        };

        let mut result = DeletionResult::new_with_value(DeletionResultFlags::Ok, removed);
        if AvlNode::height_of(link) < old_height {
            result.flags = result.flags | DeletionResultFlags::Shrunk;
        }
        result
    }

    /// Detach the leftmost node below `link`, rebalancing the spine it is
    /// pulled out of. The returned node has no left child.
    fn take_leftmost(&mut self, link: &mut Link<T>) -> Box<AvlNode<T>> {
        let node = link
            .as_deref_mut()
            .expect("take_leftmost on a non-empty link");

        if node.left.is_some() {
            let leftmost = self.take_leftmost(&mut node.left);
            node.update_height();
            self.rebalance(link);
            leftmost
        } else {
            let mut node = link.take().expect("link checked non-empty above");
            *link = node.right.take();
            node
        }
    }
}

/// Verification
impl<T: AvlParams> AvlTree<T> {
    /// Walks the whole tree asserting the structural invariants: strict
    /// in-order key ordering, correct cached heights, balance factors
    /// within [-1, 1], and size agreement. Runs after every mutation when
    /// the config sets SELF_VERIFY.
    pub fn verify(&self) {
        let mut prev: Option<&T::KeyType> = None;
        let mut count = 0usize;
        self.verify_order(&self.root_, &mut prev, &mut count);
        assert_eq!(count, self.stats_.size);

        Self::verify_node(&self.root_);
    }

    fn verify_order<'a>(
        &self,
        link: &'a Link<T>,
        prev: &mut Option<&'a T::KeyType>,
        count: &mut usize,
    ) {
        if let Some(node) = link {
            self.verify_order(&node.left, prev, count);

            if let Some(prev_key) = *prev {
                assert!(self.key_less(prev_key, &node.key));
            }
            *prev = Some(&node.key);
            *count += 1;

            self.verify_order(&node.right, prev, count);
        }
    }

    fn verify_node(link: &Link<T>) -> u16 {
        match link {
            None => 0,
            Some(node) => {
                let left_height = Self::verify_node(&node.left);
                let right_height = Self::verify_node(&node.right);

                assert_eq!(node.height, 1 + left_height.max(right_height));
                assert!((left_height as i32 - right_height as i32).abs() <= 1);

                node.height
            }
        }
    }
}

/// Debug
impl<T: AvlParams> AvlTree<T> {
    fn print_node(
        f: &mut std::fmt::Formatter<'_>,
        node: &AvlNode<T>,
        depth: usize,
    ) -> std::fmt::Result {
        for _ in 0..depth {
            write!(f, "  ")?;
        }

        if node.is_leafnode() {
            writeln!(f, "leaf key {:?} height {}", node.key, node.height)?;
        } else {
            writeln!(
                f,
                "node key {:?} height {} balance {:+}",
                node.key,
                node.height,
                node.balance_factor()
            )?;

            if let Some(left) = node.left.as_deref() {
                Self::print_node(f, left, depth + 1)?;
            }
            if let Some(right) = node.right.as_deref() {
                Self::print_node(f, right, depth + 1)?;
            }
        }

        Ok(())
    }
}

/// Display
impl<T: AvlParams> std::fmt::Debug for AvlTree<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(root) = self.root_.as_deref() {
            Self::print_node(f, root, 0)?;
        }

        Ok(())
    }
}

impl<T: AvlParams> AvlTree<T> {
    pub fn new() -> Self {
        Self {
            root_: None,
            stats_: TreeStats::new(),
            key_less: T::KeyCompareType::new(),
        }
    }
}
