use bitmask_enum::bitmask;

use super::avl_traits::AvlParams;

#[bitmask(u8)]
pub enum DeletionResultFlags {
    Ok = 0,
    NotFound = 1,
    Shrunk = 2,
}

pub struct DeletionResult<T: AvlParams> {
    pub flags: DeletionResultFlags,
    pub removed: Option<T::ValueType>,
}

impl<T: AvlParams> DeletionResult<T> {
    pub fn new(flags: DeletionResultFlags) -> Self {
        Self {
            flags,
            removed: None,
        }
    }
    pub fn new_with_value(flags: DeletionResultFlags, removed: T::ValueType) -> Self {
        Self {
            flags,
            removed: Some(removed),
        }
    }

    pub fn has(&self, flag: DeletionResultFlags) -> bool {
        self.flags.contains(flag)
    }
}
