use std::fmt::Debug;
use std::marker::PhantomData;

// Traits bound
pub trait KeyComparator<T>: Clone + Debug {
    fn new() -> Self;
    fn less(&self, lhs: &T, rhs: &T) -> bool;
}

pub trait AvlParams: Clone + Debug {
    type KeyType: Clone + Debug;
    type ValueType: Clone + Debug;
    type KeyCompareType: KeyComparator<Self::KeyType>;
    const SELF_VERIFY: bool;
}

#[derive(Clone, Debug)]
pub struct _AvlTree<TKey: Clone + Debug, TValue: Clone + Debug, TCompare> {
    _phantom_key: PhantomData<TKey>,
    _phantom_value: PhantomData<TValue>,
    _phantom_compare: PhantomData<TCompare>,
}

impl<TKey, TValue, TCompare> AvlParams for _AvlTree<TKey, TValue, TCompare>
where
    TKey: Clone + Debug,
    TValue: Clone + Debug,
    TCompare: KeyComparator<TKey>,
{
    type KeyType = TKey;
    type ValueType = TValue;
    type KeyCompareType = TCompare;
    const SELF_VERIFY: bool = false;
}
