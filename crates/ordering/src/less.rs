/// Strict "less-than" relation over `T`.
///
/// Implementations are expected to be a strict weak ordering: irreflexive,
/// transitive, and with a transitive induced equivalence.
pub trait LessThan<T: ?Sized> {
    fn less(&self, a: &T, b: &T) -> bool;

    /// Neither value is less than the other.
    #[inline]
    fn equivalent(&self, a: &T, b: &T) -> bool {
        !self.less(a, b) && !self.less(b, a)
    }
}

impl<T: ?Sized, F> LessThan<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

/// The value type's own `<` operator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<T: PartialOrd + ?Sized> LessThan<T> for NaturalOrder {
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

/// A caller-supplied predicate, or the natural order when none was given.
///
/// Built from an `Option` so code that forwards an optional predicate never
/// has to branch on it.
#[derive(Clone, Copy, Debug, Default)]
pub enum Predicate<L> {
    #[default]
    Natural,
    Custom(L),
}

impl<L> Predicate<L> {
    pub fn is_natural(&self) -> bool {
        matches!(self, Predicate::Natural)
    }
}

impl<L> From<Option<L>> for Predicate<L> {
    fn from(less: Option<L>) -> Self {
        match less {
            Some(less) => Predicate::Custom(less),
            None => Predicate::Natural,
        }
    }
}

impl<T, L> LessThan<T> for Predicate<L>
where
    T: PartialOrd + ?Sized,
    L: LessThan<T>,
{
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        match self {
            Predicate::Natural => a < b,
            Predicate::Custom(less) => less.less(a, b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn natural_order_matrix() {
        assert!(NaturalOrder.less(&1, &2));
        assert!(!NaturalOrder.less(&2, &1));
        assert!(!NaturalOrder.less(&2, &2));
        assert!(NaturalOrder.equivalent(&2, &2));
        assert!(NaturalOrder.less("abc", "abd"));
    }

    #[test]
    fn closure_predicate_matrix() {
        let by_abs = |a: &i32, b: &i32| a.abs() < b.abs();
        assert!(by_abs.less(&1, &-2));
        assert!(by_abs.equivalent(&-3, &3));
    }

    #[test]
    fn predicate_fallback_matrix() {
        let natural: Predicate<fn(&i32, &i32) -> bool> = None.into();
        assert!(natural.is_natural());
        assert!(natural.less(&1, &2));

        fn greater(a: &i32, b: &i32) -> bool {
            a > b
        }
        let desc: Predicate<fn(&i32, &i32) -> bool> = Some(greater as fn(&i32, &i32) -> bool).into();
        assert!(!desc.is_natural());
        assert!(desc.less(&2, &1));
        assert!(!desc.less(&1, &2));
    }
}
