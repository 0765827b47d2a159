pub mod avl;
pub mod avl_traits;
mod deletion;
pub mod iter;
mod node;
pub mod tree_stats;

use self::{
    avl::AvlTree,
    avl_traits::{KeyComparator, _AvlTree},
};
use std::{fmt::Debug, marker::PhantomData};

#[derive(Clone, Debug)]
pub struct DefaultKeyComparator<T> {
    _t: PhantomData<T>,
}
impl<T> KeyComparator<T> for DefaultKeyComparator<T>
where
    T: Ord + Clone + Debug,
{
    fn new() -> Self {
        Self { _t: PhantomData }
    }
    fn less(&self, lhs: &T, rhs: &T) -> bool {
        lhs < rhs
    }
}

pub type DefaultAvlConfig<K, V> = _AvlTree<K, V, DefaultKeyComparator<K>>;
pub type DefaultAvlTree<K, V> = AvlTree<DefaultAvlConfig<K, V>>;

#[cfg(test)]
#[test]
fn test_default_key_comparator() {
    let cmp = DefaultKeyComparator::<u64>::new();
    assert!(cmp.less(&1, &2));
    assert!(!cmp.less(&2, &1));
    assert!(!cmp.less(&2, &2));
}
