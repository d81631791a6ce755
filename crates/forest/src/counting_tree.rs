use std::fmt;
use std::iter::FusedIterator;

use ordkit_ordering::{LessThan, NaturalOrder};
use tracing::trace;

use crate::print::{label_with_count, print_subtree};
use crate::types::Node;
use crate::util::{first, height, last, next, prev, size, transplant};

/// Counting tree node. Equal insertions collapse into `n`.
#[derive(Clone, Debug)]
pub(crate) struct CountNode<T> {
    p: Option<u32>,
    l: Option<u32>,
    r: Option<u32>,
    v: T,
    /// Always at least 1 while the node is linked.
    n: usize,
}

impl<T> CountNode<T> {
    fn new(v: T, p: Option<u32>) -> Self {
        Self {
            p,
            l: None,
            r: None,
            v,
            n: 1,
        }
    }
}

impl<T> Node for CountNode<T> {
    fn p(&self) -> Option<u32> {
        self.p
    }

    fn l(&self) -> Option<u32> {
        self.l
    }

    fn r(&self) -> Option<u32> {
        self.r
    }

    fn set_p(&mut self, v: Option<u32>) {
        self.p = v;
    }

    fn set_l(&mut self, v: Option<u32>) {
        self.l = v;
    }

    fn set_r(&mut self, v: Option<u32>) {
        self.r = v;
    }
}

/// Unbalanced binary search tree with ordered-multiset semantics.
///
/// Nodes live in a dense arena and are linked by `u32` slot indices with
/// parent back-links. Every distinct value (under the tree's predicate)
/// occupies exactly one node carrying its multiplicity. No rebalancing is
/// performed, so adversarial insertion orders produce O(n) depth; every
/// operation walks links iteratively and never recurses.
///
/// Insertion accepts `T` or `Option<T>`; `None` is the missing marker and is
/// skipped.
///
/// ```
/// use ordkit_forest::CountingTree;
///
/// let mut tree = CountingTree::<i32>::new();
/// tree.insert(3).insert(1).insert(None::<i32>).insert(3);
/// assert_eq!(tree.to_ascending_vec(), vec![1, 3, 3]);
/// assert_eq!(tree.to_descending_vec(), vec![3, 3, 1]);
/// ```
#[derive(Clone)]
pub struct CountingTree<T, L = NaturalOrder> {
    root: Option<u32>,
    less: L,
    arena: Vec<CountNode<T>>,
    len: usize,
}

impl<T: PartialOrd> CountingTree<T, NaturalOrder> {
    pub fn new() -> Self {
        Self::with_less(NaturalOrder)
    }
}

impl<T: PartialOrd> Default for CountingTree<T, NaturalOrder> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, L> CountingTree<T, L>
where
    L: LessThan<T>,
{
    pub fn with_less(less: L) -> Self {
        Self {
            root: None,
            less,
            arena: Vec::new(),
            len: 0,
        }
    }

    pub fn less(&self) -> &L {
        &self.less
    }

    fn push_node(&mut self, value: T, p: Option<u32>) -> u32 {
        self.arena.push(CountNode::new(value, p));
        (self.arena.len() - 1) as u32
    }

    fn find(&self, value: &T) -> Option<u32> {
        let mut curr = self.root;
        while let Some(i) = curr {
            let node = &self.arena[i as usize];
            curr = if self.less.less(value, &node.v) {
                node.l
            } else if self.less.less(&node.v, value) {
                node.r
            } else {
                return Some(i);
            };
        }
        None
    }

    /// Adds one occurrence of `value`. `None` is ignored.
    pub fn insert(&mut self, value: impl Into<Option<T>>) -> &mut Self {
        let Some(value) = value.into() else {
            return self;
        };
        self.len += 1;

        let Some(mut p) = self.root else {
            let n = self.push_node(value, None);
            self.root = Some(n);
            return self;
        };

        loop {
            let node = &self.arena[p as usize];
            let (l, r) = (node.l, node.r);
            if self.less.less(&value, &node.v) {
                match l {
                    Some(l) => p = l,
                    None => {
                        let n = self.push_node(value, Some(p));
                        self.arena[p as usize].l = Some(n);
                        return self;
                    }
                }
            } else if self.less.less(&node.v, &value) {
                match r {
                    Some(r) => p = r,
                    None => {
                        let n = self.push_node(value, Some(p));
                        self.arena[p as usize].r = Some(n);
                        return self;
                    }
                }
            } else {
                self.arena[p as usize].n += 1;
                return self;
            }
        }
    }

    /// Inserts every present element of `values` in order.
    pub fn insert_all<I>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Option<T>>,
    {
        for value in values {
            self.insert(value);
        }
        self
    }

    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    /// Multiplicity of `value`, 0 when absent.
    pub fn count(&self, value: &T) -> usize {
        self.find(value).map_or(0, |i| self.arena[i as usize].n)
    }

    pub fn min(&self) -> Option<&T> {
        first(&self.arena, self.root).map(|i| &self.arena[i as usize].v)
    }

    pub fn max(&self) -> Option<&T> {
        last(&self.arena, self.root).map(|i| &self.arena[i as usize].v)
    }

    /// Removes one occurrence of `value`, or every occurrence when
    /// `remove_all` is set. Returns `false` when the value was absent.
    pub fn remove(&mut self, value: &T, remove_all: bool) -> bool {
        let Some(z) = self.find(value) else {
            return false;
        };

        let node = &mut self.arena[z as usize];
        if node.n > 1 && !remove_all {
            node.n -= 1;
            self.len -= 1;
            return true;
        }

        self.len -= node.n;
        self.unlink(z);
        true
    }

    /// Splices node `z` out of the tree and frees its slot.
    ///
    /// With two children the in-order successor `y` takes `z`'s place: `y`
    /// is first detached from its own position (it has no left child), then
    /// adopts both of `z`'s subtrees.
    fn unlink(&mut self, z: u32) {
        let (l, r) = {
            let node = &self.arena[z as usize];
            (node.l, node.r)
        };

        match (l, r) {
            (None, _) => self.root = transplant(&mut self.arena, self.root, z, r),
            (_, None) => self.root = transplant(&mut self.arena, self.root, z, l),
            (Some(l), Some(r)) => {
                let y = first(&self.arena, Some(r)).unwrap_or(r);
                if y != r {
                    let yr = self.arena[y as usize].r;
                    self.root = transplant(&mut self.arena, self.root, y, yr);
                    self.arena[y as usize].r = Some(r);
                    self.arena[r as usize].p = Some(y);
                }
                self.root = transplant(&mut self.arena, self.root, z, Some(y));
                self.arena[y as usize].l = Some(l);
                self.arena[l as usize].p = Some(y);
            }
        }

        self.release(z);
    }

    /// Drops the detached slot `idx`, moving the last slot into it and
    /// rewriting the three edges that referenced the moved node.
    fn release(&mut self, idx: u32) {
        let moved = (self.arena.len() - 1) as u32;
        if idx != moved {
            let (p, l, r) = {
                let node = &self.arena[moved as usize];
                (node.p, node.l, node.r)
            };
            match p {
                Some(p) => {
                    let parent = &mut self.arena[p as usize];
                    if parent.l == Some(moved) {
                        parent.l = Some(idx);
                    } else {
                        parent.r = Some(idx);
                    }
                }
                None => self.root = Some(idx),
            }
            if let Some(l) = l {
                self.arena[l as usize].p = Some(idx);
            }
            if let Some(r) = r {
                self.arena[r as usize].p = Some(idx);
            }
        }
        self.arena.swap_remove(idx as usize);
    }

    /// Empties the tree, then inserts every present element of `values`.
    pub fn rebuild<I>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Option<T>>,
    {
        self.reset();
        self.insert_all(values);
        trace!(
            len = self.len,
            distinct = self.arena.len(),
            "rebuilt counting tree"
        );
        self
    }

    pub fn reset(&mut self) {
        trace!(len = self.len, distinct = self.arena.len(), "reset counting tree");
        self.root = None;
        self.arena.clear();
        self.len = 0;
    }

    /// Validates ordering, parent links, multiplicities and the cached
    /// length.
    pub fn assert_valid(&self) -> Result<(), String> {
        let Some(root) = self.root else {
            if !self.arena.is_empty() || self.len != 0 {
                return Err(format!(
                    "empty root with {} slots and len {}",
                    self.arena.len(),
                    self.len
                ));
            }
            return Ok(());
        };

        if self.arena[root as usize].p.is_some() {
            return Err(format!("root {root} has a parent"));
        }

        let mut total = 0;
        let mut stack = vec![root];
        while let Some(i) = stack.pop() {
            let node = &self.arena[i as usize];
            total += node.n;
            if node.n == 0 {
                return Err(format!("node {i} has zero multiplicity"));
            }
            for child in [node.l, node.r].into_iter().flatten() {
                if self.arena[child as usize].p != Some(i) {
                    return Err(format!("node {child} does not point back to parent {i}"));
                }
                stack.push(child);
            }
        }

        let nodes = size(&self.arena, self.root);
        if nodes != self.arena.len() {
            return Err(format!(
                "{} slots but {nodes} reachable nodes",
                self.arena.len()
            ));
        }
        if total != self.len {
            return Err(format!("len {} but multiplicities sum to {total}", self.len));
        }

        let mut curr = first(&self.arena, self.root);
        while let Some(i) = curr {
            let after = next(&self.arena, i);
            if let Some(j) = after {
                let (a, b) = (&self.arena[i as usize].v, &self.arena[j as usize].v);
                if !self.less.less(a, b) || self.less.less(b, a) {
                    return Err(format!("nodes {i} and {j} are out of order"));
                }
            }
            curr = after;
        }

        Ok(())
    }
}

impl<T, L> CountingTree<T, L> {
    /// Total number of occurrences.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Number of distinct values (nodes).
    pub fn distinct_len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn height(&self) -> usize {
        height(&self.arena, self.root)
    }

    /// Ascending values, each repeated by its multiplicity. Reverse it for
    /// descending order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            arena: &self.arena,
            front: first(&self.arena, self.root),
            front_used: 0,
            back: last(&self.arena, self.root),
            back_used: 0,
            remaining: self.len,
        }
    }

    /// Ascending `(value, multiplicity)` pairs.
    pub fn distinct(&self) -> Distinct<'_, T> {
        Distinct {
            arena: &self.arena,
            curr: first(&self.arena, self.root),
        }
    }

    pub fn to_ascending_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    pub fn to_descending_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().rev().cloned().collect()
    }

    pub fn print(&self) -> String
    where
        T: fmt::Debug,
    {
        print_subtree(&self.arena, self.root, "", &|n: &CountNode<T>| {
            label_with_count(&n.v, n.n)
        })
    }
}

impl<T: fmt::Debug, L> fmt::Debug for CountingTree<T, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.distinct()).finish()
    }
}

impl<T, V> FromIterator<V> for CountingTree<T, NaturalOrder>
where
    T: PartialOrd,
    V: Into<Option<T>>,
{
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.insert_all(iter);
        tree
    }
}

impl<T, L, V> Extend<V> for CountingTree<T, L>
where
    L: LessThan<T>,
    V: Into<Option<T>>,
{
    fn extend<I: IntoIterator<Item = V>>(&mut self, iter: I) {
        self.insert_all(iter);
    }
}

impl<'a, T, L> IntoIterator for &'a CountingTree<T, L> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// In-order iterator over a [`CountingTree`], repeating each value by its
/// multiplicity.
pub struct Iter<'a, T> {
    arena: &'a [CountNode<T>],
    front: Option<u32>,
    front_used: usize,
    back: Option<u32>,
    back_used: usize,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let i = self.front?;
        let node = &self.arena[i as usize];
        self.front_used += 1;
        if self.front_used == node.n {
            self.front = next(self.arena, i);
            self.front_used = 0;
        }
        self.remaining -= 1;
        Some(&node.v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let i = self.back?;
        let node = &self.arena[i as usize];
        self.back_used += 1;
        if self.back_used == node.n {
            self.back = prev(self.arena, i);
            self.back_used = 0;
        }
        self.remaining -= 1;
        Some(&node.v)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Ascending `(value, multiplicity)` pairs of a [`CountingTree`].
pub struct Distinct<'a, T> {
    arena: &'a [CountNode<T>],
    curr: Option<u32>,
}

impl<'a, T> Iterator for Distinct<'a, T> {
    type Item = (&'a T, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let i = self.curr?;
        let node = &self.arena[i as usize];
        self.curr = next(self.arena, i);
        Some((&node.v, node.n))
    }
}

impl<T> FusedIterator for Distinct<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn shape(tree: &CountingTree<i32>) -> Vec<(i32, Option<i32>, Option<i32>)> {
        let mut out: Vec<_> = tree
            .arena
            .iter()
            .map(|n| {
                (
                    n.v,
                    n.l.map(|i| tree.arena[i as usize].v),
                    n.r.map(|i| tree.arena[i as usize].v),
                )
            })
            .collect();
        out.sort();
        out
    }

    #[test]
    fn insert_builds_leaf_links() {
        let tree: CountingTree<i32> = [5, 3, 8].into_iter().collect();
        assert_eq!(
            shape(&tree),
            vec![(3, None, None), (5, Some(3), Some(8)), (8, None, None)]
        );
    }

    #[test]
    fn remove_two_children_promotes_successor() {
        //        50
        //      /    \
        //    30      70
        //           /  \
        //         60    80
        //           \
        //            65
        let mut tree: CountingTree<i32> = [50, 30, 70, 60, 80, 65].into_iter().collect();
        assert!(tree.remove(&50, false));
        tree.assert_valid().unwrap();
        assert_eq!(tree.arena[tree.root.unwrap() as usize].v, 60);
        assert_eq!(
            shape(&tree),
            vec![
                (30, None, None),
                (60, Some(30), Some(70)),
                (65, None, None),
                (70, Some(65), Some(80)),
                (80, None, None),
            ]
        );
    }

    #[test]
    fn remove_two_children_with_direct_successor() {
        let mut tree: CountingTree<i32> = [50, 30, 70, 80].into_iter().collect();
        assert!(tree.remove(&50, false));
        tree.assert_valid().unwrap();
        assert_eq!(tree.arena[tree.root.unwrap() as usize].v, 70);
        assert_eq!(
            shape(&tree),
            vec![(30, None, None), (70, Some(30), Some(80)), (80, None, None)]
        );
    }

    #[test]
    fn release_compacts_arena() {
        let mut tree: CountingTree<i32> = [4, 2, 6, 1, 3, 5, 7].into_iter().collect();
        assert_eq!(tree.arena.len(), 7);
        tree.remove(&2, false);
        tree.assert_valid().unwrap();
        assert_eq!(tree.arena.len(), 6);
        tree.remove(&4, false);
        tree.assert_valid().unwrap();
        assert_eq!(tree.arena.len(), 5);
        assert_eq!(tree.to_ascending_vec(), vec![1, 3, 5, 6, 7]);
    }

    #[test]
    fn assert_valid_flags_unreachable_slot() {
        let mut tree: CountingTree<i32> = [2, 1, 3].into_iter().collect();
        tree.arena.push(CountNode::new(9, None));
        tree.len += 1;
        let err = tree.assert_valid().unwrap_err();
        assert_eq!(err, "4 slots but 3 reachable nodes");
    }
}
