/// A set of integers in the range `0..capacity`, stored as a vector of flags
#[derive(Clone, Debug, PartialEq)]
pub struct RangeSet {
    len: usize,
    flags: Vec<bool>,
}

impl RangeSet {
    /// Creates an empty set that can hold values below `capacity`
    pub fn new(capacity: usize) -> RangeSet {
        RangeSet {
            len: 0,
            flags: vec![false; capacity],
        }
    }

    /// Creates a set containing every value below `capacity`
    pub fn with_all(capacity: usize) -> RangeSet {
        RangeSet {
            len: capacity,
            flags: vec![true; capacity],
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn contains(&self, n: usize) -> bool {
        self.flags.get(n).copied().unwrap_or(false)
    }

    pub fn insert(&mut self, n: usize) -> bool {
        if self.flags[n] {
            return false;
        }
        self.flags[n] = true;
        self.len += 1;
        true
    }

    pub fn remove(&mut self, n: usize) -> bool {
        if !self.contains(n) {
            return false;
        }
        self.flags[n] = false;
        self.len -= 1;
        true
    }

    /// Removes every value for which `f` returns false.
    /// Returns the removed values in ascending order.
    pub fn retain(&mut self, mut f: impl FnMut(usize) -> bool) -> Vec<usize> {
        let removed: Vec<usize> = self.iter().filter(|&n| !f(n)).collect();
        for &n in &removed {
            self.flags[n] = false;
        }
        self.len -= removed.len();
        removed
    }

    pub fn single_value(&self) -> Option<usize> {
        match self.len {
            1 => self.iter().next(),
            _ => None,
        }
    }

    /// Iterates over the values in ascending order
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            flags: &self.flags,
            index: 0,
        }
    }
}

pub struct Iter<'a> {
    flags: &'a [bool],
    index: usize,
}

impl Iterator for Iter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        while self.index < self.flags.len() {
            let i = self.index;
            self.index += 1;
            if self.flags[i] {
                return Some(i);
            }
        }
        None
    }
}

impl<'a> IntoIterator for &'a RangeSet {
    type Item = usize;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
