/// Disjoint sets over the elements `0..len` with path compression and union
/// by size.
#[derive(Clone, Debug)]
pub struct UnionFind {
    parents: Vec<u32>,
    sizes: Vec<u32>,
    number_of_sets: u32,
}

impl UnionFind {
    /// Every element starts in its own set.
    pub fn new(len: u32) -> UnionFind {
        UnionFind {
            parents: (0..len).collect(),
            sizes: vec![1; len as usize],
            number_of_sets: len,
        }
    }

    pub fn number_of_sets(&self) -> u32 {
        self.number_of_sets
    }

    /// Representative of the set containing `element`. Every element on the
    /// way up is pointed directly at the root afterwards.
    pub fn find(&mut self, element: u32) -> u32 {
        let mut root = element;
        while self.parents[root as usize] != root {
            root = self.parents[root as usize];
        }

        let mut current = element;
        while current != root {
            let parent = self.parents[current as usize];
            self.parents[current as usize] = root;
            current = parent;
        }

        root
    }

    /// Merges the sets of `x` and `y`. Returns false if they already were the
    /// same set.
    pub fn union(&mut self, x: u32, y: u32) -> bool {
        let mut root_x = self.find(x);
        let mut root_y = self.find(y);
        if root_x == root_y {
            return false;
        }

        // the smaller tree goes below the larger one
        if self.sizes[root_x as usize] < self.sizes[root_y as usize] {
            std::mem::swap(&mut root_x, &mut root_y);
        }
        self.parents[root_y as usize] = root_x;
        self.sizes[root_x as usize] += self.sizes[root_y as usize];
        self.number_of_sets -= 1;

        true
    }

    pub fn same_set(&mut self, x: u32, y: u32) -> bool {
        self.find(x) == self.find(y)
    }
}
