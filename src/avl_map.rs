use crate::avl_base::{
    avl::AvlTree,
    avl_traits::AvlParams,
    iter::{AvlIterator, AvlReverseIterator},
    DefaultAvlConfig,
};

pub struct AvlMap<T: AvlParams> {
    _tree: AvlTree<T>,
}

impl<T: AvlParams> AvlMap<T> {
    pub fn is_empty(&self) -> bool {
        self._tree.empty()
    }

    pub fn len(&self) -> usize {
        self._tree.size()
    }

    pub fn height(&self) -> u16 {
        self._tree.height()
    }

    pub fn contains_key(&self, key: &T::KeyType) -> bool {
        self._tree.exists(key)
    }

    /// Inserts a key/value pair. If the key was already present its value is
    /// replaced and the old value returned.
    pub fn put(&mut self, key: T::KeyType, value: T::ValueType) -> Option<T::ValueType> {
        self._tree.insert(key, value)
    }

    pub fn get(&self, key: &T::KeyType) -> Option<&T::ValueType> {
        self._tree.get(key)
    }

    pub fn get_mut(&mut self, key: &T::KeyType) -> Option<&mut T::ValueType> {
        self._tree.get_mut(key)
    }

    /// Removes the entry for `key`, returning its value if it was present.
    pub fn remove(&mut self, key: &T::KeyType) -> Option<T::ValueType> {
        self._tree.erase(key)
    }

    pub fn first(&self) -> Option<(&T::KeyType, &T::ValueType)> {
        self._tree.first()
    }

    pub fn last(&self) -> Option<(&T::KeyType, &T::ValueType)> {
        self._tree.last()
    }

    /// Visits every entry in strictly increasing key order.
    pub fn ascend<F>(&self, visit: F)
    where
        F: FnMut(&T::KeyType, &T::ValueType),
    {
        self._tree.ascend(visit)
    }

    /// Visits every entry in strictly decreasing key order.
    pub fn descend<F>(&self, visit: F)
    where
        F: FnMut(&T::KeyType, &T::ValueType),
    {
        self._tree.descend(visit)
    }

    pub fn iter(&self) -> AvlIterator<'_, T> {
        self._tree.iter()
    }

    pub fn iter_rev(&self) -> AvlReverseIterator<'_, T> {
        self._tree.iter_rev()
    }

    pub fn clear(&mut self) {
        self._tree.clear()
    }

    pub fn new() -> Self {
        Self {
            _tree: AvlTree::new(),
        }
    }
}

pub type DefaultAvlMap<K, V> = AvlMap<DefaultAvlConfig<K, V>>;
