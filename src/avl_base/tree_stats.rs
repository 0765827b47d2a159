pub struct TreeStats {
    pub size: usize,
    pub single_rotations: usize,
    pub double_rotations: usize,
}

impl TreeStats {
    pub fn new() -> Self {
        Self {
            size: 0,
            single_rotations: 0,
            double_rotations: 0,
        }
    }

    pub fn rotations(&self) -> usize {
        self.single_rotations + self.double_rotations
    }
}
