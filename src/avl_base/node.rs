use super::avl_traits::AvlParams;

pub type Link<T> = Option<Box<AvlNode<T>>>;

#[derive(Clone, Debug)]
pub struct AvlNode<T: AvlParams> {
    pub key: T::KeyType,
    pub value: T::ValueType,
    pub height: u16,
    pub left: Link<T>,
    pub right: Link<T>,
}

impl<T: AvlParams> AvlNode<T> {
    pub fn new(key: T::KeyType, value: T::ValueType) -> Self {
        Self {
            key,
            value,
            height: 1,
            left: None,
            right: None,
        }
    }

    /// Cached height of the subtree behind `link`, 0 for the empty subtree.
    #[inline]
    pub fn height_of(link: &Link<T>) -> u16 {
        link.as_ref().map_or(0, |node| node.height)
    }

    #[inline]
    pub fn update_height(&mut self) {
        self.height = 1 + Self::height_of(&self.left).max(Self::height_of(&self.right));
    }

    /// Positive when the left subtree is taller.
    #[inline]
    pub fn balance_factor(&self) -> i32 {
        Self::height_of(&self.left) as i32 - Self::height_of(&self.right) as i32
    }

    #[inline]
    pub fn is_leafnode(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}
