//! # Queries
//!
//! A [`Query`] is a filter plus an optional ordering, evaluated inside the actor against its
//! store. The same value drives one-shot `List` reads and live `Subscribe` requests.

use std::cmp::Ordering;
use std::fmt;

type Filter<T> = Box<dyn Fn(&T) -> bool + Send + Sync>;
type Comparator<T> = Box<dyn Fn(&T, &T) -> Ordering + Send + Sync>;

/// Filtered, optionally ordered view over an actor's store.
pub struct Query<T> {
    filter: Filter<T>,
    order: Option<Comparator<T>>,
}

impl<T> Query<T> {
    /// Matches every entity, in store (insertion) order.
    pub fn all() -> Self {
        Self {
            filter: Box::new(|_| true),
            order: None,
        }
    }

    /// Matches the entities for which `predicate` holds.
    pub fn filter(predicate: impl Fn(&T) -> bool + Send + Sync + 'static) -> Self {
        Self {
            filter: Box::new(predicate),
            order: None,
        }
    }

    /// Orders results with `compare`. The sort is stable, so equal items keep store order.
    pub fn sorted_by(mut self, compare: impl Fn(&T, &T) -> Ordering + Send + Sync + 'static) -> Self {
        self.order = Some(Box::new(compare));
        self
    }

    pub fn matches(&self, item: &T) -> bool {
        (self.filter)(item)
    }

    /// Runs the query over `items`, returning owned copies of the matches.
    pub fn evaluate<'a, I>(&self, items: I) -> Vec<T>
    where
        I: IntoIterator<Item = &'a T>,
        T: Clone + 'a,
    {
        let mut matched: Vec<T> = items
            .into_iter()
            .filter(|item| self.matches(item))
            .cloned()
            .collect();
        if let Some(order) = &self.order {
            matched.sort_by(|a, b| order(a, b));
        }
        matched
    }
}

impl<T> fmt::Debug for Query<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Query")
            .field("ordered", &self.order.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_then_stable_sort() {
        let items = vec![(1, 'a'), (2, 'b'), (1, 'c'), (3, 'd')];
        let query = Query::filter(|item: &(i32, char)| item.0 < 3).sorted_by(|a, b| b.0.cmp(&a.0));

        let result = query.evaluate(items.iter());
        assert_eq!(result, vec![(2, 'b'), (1, 'a'), (1, 'c')]);
    }

    #[test]
    fn all_keeps_store_order() {
        let items = vec![3, 1, 2];
        assert_eq!(Query::all().evaluate(items.iter()), vec![3, 1, 2]);
    }
}
