//! Union-find over arbitrary keys.
//!
//! [`UnionFind`] works on dense integers. [`Renumber`] interns arbitrary
//! values as such integers (in first-seen order) and [`PolyUnionFind`]
//! combines the two so that groups can be formed over token ids,
//! characters or any other hashable key.

use std::{collections::HashMap, hash::Hash};

/// Path-compressing union-find over dense integers.
///
/// Integers never seen before are singleton groups, so `find` is total.
#[derive(Debug, Clone, Default)]
pub struct UnionFind {
    parents: Vec<Option<usize>>,
}

impl UnionFind {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Returns the representative of the group `x` belongs to.
    pub fn find(&mut self, x: usize) -> usize {
        if x >= self.parents.len() {
            self.parents.resize(x + 1, None);
        }

        let mut root = x;
        while let Some(parent) = self.parents[root].filter(|&parent| parent != root) {
            root = parent;
        }
        self.parents[root] = Some(root);

        let mut current = x;
        while current != root {
            let next = self.parents[current].unwrap_or(root);
            self.parents[current] = Some(root);
            current = next;
        }

        root
    }

    /// Puts `x` and `y` in the same group and returns its representative.
    /// The representative of `x`'s group is kept.
    pub fn union(&mut self, x: usize, y: usize) -> usize {
        let find_x = self.find(x);
        let find_y = self.find(y);
        if find_x != find_y {
            self.parents[find_y] = Some(find_x);
        }

        find_x
    }

    /// Puts all of `xs` in the same group. Returns the group's representative
    /// or `None` if `xs` is empty.
    pub fn unions(&mut self, xs: &[usize]) -> Option<usize> {
        let (&first, rest) = xs.split_first()?;

        let mut representative = self.find(first);
        for &x in rest {
            representative = self.union(first, x);
        }

        Some(representative)
    }
}

/// Assigns a unique number to each distinct value, counting from zero in the
/// order the values are first seen.
///
/// Values are told apart by a serialisation function. By default this is the
/// value itself, but any projection can be used, for example case-folding:
///
/// ```
/// use parallel_corpus::Renumber;
///
/// let mut renumber = Renumber::with_serializer(|s: &String| s.to_lowercase());
/// assert_eq!(renumber.num(&"foo".to_owned()), 0);
/// assert_eq!(renumber.num(&"FOO".to_owned()), 0);
/// assert_eq!(renumber.un(0).map(String::as_str), Some("foo"));
/// ```
#[derive(Debug, Clone)]
pub struct Renumber<A, K = A> {
    serialize: fn(&A) -> K,
    backward: HashMap<K, usize>,
    forward: Vec<A>,
}

impl<A> Default for Renumber<A, A>
where
    A: Clone + Eq + Hash,
{
    fn default() -> Self { Self::with_serializer(A::clone) }
}

impl<A> Renumber<A, A>
where
    A: Clone + Eq + Hash,
{
    #[must_use]
    pub fn new() -> Self { Self::default() }
}

impl<A, K> Renumber<A, K>
where
    A: Clone,
    K: Eq + Hash,
{
    #[must_use]
    pub fn with_serializer(serialize: fn(&A) -> K) -> Self {
        Self {
            serialize,
            backward: HashMap::new(),
            forward: Vec::new(),
        }
    }

    /// Returns the number of `a`, assigning the next free one if `a` hasn't
    /// been seen before.
    pub fn num(&mut self, a: &A) -> usize {
        let key = (self.serialize)(a);
        if let Some(&n) = self.backward.get(&key) {
            return n;
        }

        let n = self.forward.len();
        self.forward.push(a.clone());
        self.backward.insert(key, n);
        n
    }

    /// Returns the first value that has been assigned `n`, if any.
    #[must_use]
    pub fn un(&self, n: usize) -> Option<&A> { self.forward.get(n) }

    #[must_use]
    pub fn len(&self) -> usize { self.forward.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.forward.is_empty() }
}

/// Union-find over any value that a [`Renumber`] can intern.
#[derive(Debug, Clone)]
pub struct PolyUnionFind<A, K = A> {
    union_find: UnionFind,
    renumber: Renumber<A, K>,
}

impl<A> Default for PolyUnionFind<A, A>
where
    A: Clone + Eq + Hash,
{
    fn default() -> Self {
        Self {
            union_find: UnionFind::new(),
            renumber: Renumber::new(),
        }
    }
}

impl<A> PolyUnionFind<A, A>
where
    A: Clone + Eq + Hash,
{
    #[must_use]
    pub fn new() -> Self { Self::default() }
}

impl<A, K> PolyUnionFind<A, K>
where
    A: Clone,
    K: Eq + Hash,
{
    #[must_use]
    pub fn with_serializer(serialize: fn(&A) -> K) -> Self {
        Self {
            union_find: UnionFind::new(),
            renumber: Renumber::with_serializer(serialize),
        }
    }

    /// The dense integer representing `x`'s group.
    pub fn repr(&mut self, x: &A) -> usize {
        let n = self.renumber.num(x);
        self.union_find.find(n)
    }

    /// The value representing `x`'s group.
    pub fn find(&mut self, x: &A) -> A {
        let representative = self.repr(x);
        self.value_of(representative, x)
    }

    /// Puts `x` and `y` in the same group and returns the value representing
    /// it.
    pub fn union(&mut self, x: &A, y: &A) -> A {
        let x_n = self.renumber.num(x);
        let y_n = self.renumber.num(y);
        let representative = self.union_find.union(x_n, y_n);
        self.value_of(representative, x)
    }

    /// Puts all of `xs` in the same group.
    pub fn unions(&mut self, xs: &[A]) {
        let numbers: Vec<usize> = xs.iter().map(|x| self.renumber.num(x)).collect();
        self.union_find.unions(&numbers);
    }

    // Representatives are always interned before they are looked up, so the
    // fallback is never taken.
    fn value_of(&self, representative: usize, fallback: &A) -> A {
        self.renumber
            .un(representative)
            .unwrap_or(fallback)
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::{assert_eq, assert_ne};

    use super::*;

    #[test]
    fn test_union_find() {
        let mut uf = UnionFind::new();
        assert_ne!(uf.find(10), uf.find(20));

        uf.union(10, 20);
        assert_eq!(uf.find(10), uf.find(20));

        uf.union(20, 30);
        assert_eq!(uf.find(10), uf.find(30));

        uf.unions(&[10, 40, 50]);
        assert_eq!(uf.find(20), uf.find(40));
        assert_eq!(uf.find(20), uf.find(50));
        assert_ne!(uf.find(20), uf.find(60));
    }

    #[test]
    fn test_union_is_commutative() {
        let mut left = UnionFind::new();
        left.union(1, 2);
        left.union(3, 2);

        let mut right = UnionFind::new();
        right.union(2, 3);
        right.union(2, 1);

        for x in 1..=3 {
            assert_eq!(left.find(x), left.find(1));
            assert_eq!(right.find(x), right.find(1));
        }
    }

    #[test]
    fn test_unions_of_nothing() {
        let mut uf = UnionFind::new();
        assert_eq!(uf.unions(&[]), None);
        assert_eq!(uf.unions(&[7]), Some(7));
    }

    #[test]
    fn test_long_chain_is_compressed() {
        let mut uf = UnionFind::new();
        for x in 1..10_000 {
            uf.union(x, x - 1);
        }

        let representative = uf.find(0);
        assert_eq!(uf.find(9_999), representative);
        assert_eq!(uf.find(5_000), representative);
    }

    #[test]
    fn test_renumber_default() {
        let mut renumber = Renumber::new();
        assert_eq!(renumber.num(&"foo"), 0);
        assert_eq!(renumber.num(&"bar"), 1);
        assert_eq!(renumber.num(&"foo"), 0);
        assert_eq!(renumber.un(0), Some(&"foo"));
        assert_eq!(renumber.un(1), Some(&"bar"));
        assert_eq!(renumber.un(2), None);
        assert_eq!(renumber.len(), 2);
    }

    #[test]
    fn test_renumber_lowercase() {
        let mut renumber = Renumber::with_serializer(|s: &&str| s.to_lowercase());
        assert_eq!(renumber.num(&"foo"), 0);
        assert_eq!(renumber.num(&"FOO"), 0);
        assert_eq!(renumber.un(0), Some(&"foo"));
    }

    #[test]
    fn test_poly_union_find() {
        let mut uf = PolyUnionFind::with_serializer(|s: &&str| s.to_lowercase());
        assert_eq!(uf.repr(&"a"), 0);
        assert_eq!(uf.repr(&"A"), 0);
        assert_eq!(uf.find(&"a"), "a");
        assert_eq!(uf.find(&"A"), "a");
        assert_ne!(uf.find(&"a"), uf.find(&"b"));

        uf.union(&"A", &"B");
        assert_eq!(uf.find(&"a"), uf.find(&"b"));
    }

    #[test]
    fn test_poly_unions() {
        let mut uf = PolyUnionFind::new();
        uf.unions(&["s0", "t3", "s1"]);
        assert_eq!(uf.find(&"t3"), "s0");
        assert_eq!(uf.find(&"s1"), "s0");
        assert_eq!(uf.find(&"t4"), "t4");
    }
}
