use super::{
    avl_traits::AvlParams,
    node::{AvlNode, Link},
};

/// In-order iterator over a tree, yielding entries in increasing key order.
///
/// Keeps the chain of not-yet-visited ancestors on an explicit stack; the
/// stack never grows past the tree height.
pub struct AvlIterator<'a, T: AvlParams> {
    stack: Vec<&'a AvlNode<T>>,
}

impl<'a, T: AvlParams> AvlIterator<'a, T> {
    pub(crate) fn new(root: &'a Link<T>, height: u16) -> Self {
        let mut it = Self {
            stack: Vec::with_capacity(height as usize),
        };
        it.push_left_spine(root);
        it
    }

    fn push_left_spine(&mut self, mut link: &'a Link<T>) {
        while let Some(node) = link {
            self.stack.push(node);
            link = &node.left;
        }
    }
}

impl<'a, T: AvlParams> Iterator for AvlIterator<'a, T> {
    type Item = (&'a T::KeyType, &'a T::ValueType);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(&node.right);
        Some((&node.key, &node.value))
    }
}

/// Reverse-in-order counterpart of [`AvlIterator`], yielding entries in
/// decreasing key order.
pub struct AvlReverseIterator<'a, T: AvlParams> {
    stack: Vec<&'a AvlNode<T>>,
}

impl<'a, T: AvlParams> AvlReverseIterator<'a, T> {
    pub(crate) fn new(root: &'a Link<T>, height: u16) -> Self {
        let mut it = Self {
            stack: Vec::with_capacity(height as usize),
        };
        it.push_right_spine(root);
        it
    }

    fn push_right_spine(&mut self, mut link: &'a Link<T>) {
        while let Some(node) = link {
            self.stack.push(node);
            link = &node.right;
        }
    }
}

impl<'a, T: AvlParams> Iterator for AvlReverseIterator<'a, T> {
    type Item = (&'a T::KeyType, &'a T::ValueType);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_right_spine(&node.left);
        Some((&node.key, &node.value))
    }
}
