/// A run of consecutive items that are all inserted, deleted, or kept
/// unchanged by a diff.
///
/// Diffs are lists of `RawOperation`-s that, read in order, spell out the
/// old sequence (`Delete` and `Equal` items) and the new sequence (`Insert`
/// and `Equal` items).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawOperation<T> {
    Insert(Vec<T>),
    Delete(Vec<T>),
    Equal(Vec<T>),
}

impl<T> RawOperation<T> {
    pub fn items(&self) -> &Vec<T> {
        match self {
            RawOperation::Insert(items)
            | RawOperation::Delete(items)
            | RawOperation::Equal(items) => items,
        }
    }

    pub fn items_mut(&mut self) -> &mut Vec<T> {
        match self {
            RawOperation::Insert(items)
            | RawOperation::Delete(items)
            | RawOperation::Equal(items) => items,
        }
    }

    pub fn into_items(self) -> Vec<T> {
        match self {
            RawOperation::Insert(items)
            | RawOperation::Delete(items)
            | RawOperation::Equal(items) => items,
        }
    }

    pub fn len(&self) -> usize { self.items().len() }

    pub fn is_empty(&self) -> bool { self.items().is_empty() }

    pub fn is_equal(&self) -> bool { matches!(self, RawOperation::Equal(_)) }

    pub fn is_insert(&self) -> bool { matches!(self, RawOperation::Insert(_)) }

    pub fn is_delete(&self) -> bool { matches!(self, RawOperation::Delete(_)) }

    /// Same kind of operation wrapping other items.
    pub fn with_items(&self, items: Vec<T>) -> Self {
        match self {
            RawOperation::Insert(_) => RawOperation::Insert(items),
            RawOperation::Delete(_) => RawOperation::Delete(items),
            RawOperation::Equal(_) => RawOperation::Equal(items),
        }
    }
}

impl<T: Clone> RawOperation<T> {
    pub fn insert(items: &[T]) -> Self { RawOperation::Insert(items.to_vec()) }

    pub fn delete(items: &[T]) -> Self { RawOperation::Delete(items.to_vec()) }

    pub fn equal(items: &[T]) -> Self { RawOperation::Equal(items.to_vec()) }
}

/// Items of the old sequence touched by the diff, in order.
#[cfg(test)]
pub fn old_items<T: Clone>(diff: &[RawOperation<T>]) -> Vec<T> {
    diff.iter()
        .filter(|op| !op.is_insert())
        .flat_map(|op| op.items().iter().cloned())
        .collect()
}

/// Items of the new sequence touched by the diff, in order.
#[cfg(test)]
pub fn new_items<T: Clone>(diff: &[RawOperation<T>]) -> Vec<T> {
    diff.iter()
        .filter(|op| !op.is_delete())
        .flat_map(|op| op.items().iter().cloned())
        .collect()
}
