//! Composable predicates over records.
//!
//! A [`Predicate`] is a shared closure `Fn(&T) -> bool` paired with a
//! readable rendering of the expression it evaluates. Predicates combine with
//! [`Predicate::and`] and [`Predicate::or`], which short-circuit at
//! evaluation time exactly like `&&` and `||`.
//!
//! ```rust
//! use sift_query::Predicate;
//!
//! let positive = Predicate::new("x > 0", |x: &i32| *x > 0);
//! let even = Predicate::new("x % 2 = 0", |x: &i32| x % 2 == 0);
//! let both = positive.and(even);
//!
//! assert!(both.evaluate(&4));
//! assert!(!both.evaluate(&-4));
//! assert_eq!(both.to_string(), "(x > 0 AND x % 2 = 0)");
//! ```

use std::fmt;
use std::sync::Arc;

type PredicateFn<T> = dyn Fn(&T) -> bool + Send + Sync;

/// A boolean function over `T` with a readable expression.
pub struct Predicate<T> {
    func: Arc<PredicateFn<T>>,
    expr: Arc<str>,
}

impl<T> Predicate<T> {
    /// Create a predicate from a closure and its rendering.
    pub fn new<F>(expr: impl Into<Arc<str>>, func: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Self {
            func: Arc::new(func),
            expr: expr.into(),
        }
    }

    /// Evaluate the predicate against a record.
    #[inline]
    pub fn evaluate(&self, record: &T) -> bool {
        (self.func)(record)
    }

    /// Borrow the predicate as a plain closure, e.g. for `Iterator::filter`.
    pub fn as_fn(&self) -> impl Fn(&T) -> bool + '_ {
        move |record: &T| self.evaluate(record)
    }

    /// The rendered expression.
    pub fn expr(&self) -> &str {
        &self.expr
    }

    /// Records from `items` accepted by this predicate, in order.
    pub fn filter<'a, I>(&self, items: I) -> Vec<&'a T>
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        items.into_iter().filter(|record| self.evaluate(record)).collect()
    }
}

impl<T: 'static> Predicate<T> {
    /// A predicate that accepts every record (identity of AND).
    pub fn always_true() -> Self {
        Self::new("TRUE", |_: &T| true)
    }

    /// A predicate that rejects every record (identity of OR).
    pub fn always_false() -> Self {
        Self::new("FALSE", |_: &T| false)
    }

    /// Logical AND; `other` is only evaluated when `self` holds.
    pub fn and(self, other: Predicate<T>) -> Self {
        let expr = format!("({} AND {})", self.expr, other.expr);
        let (left, right) = (self.func, other.func);
        Self::new(expr, move |record: &T| left(record) && right(record))
    }

    /// Logical OR; `other` is only evaluated when `self` fails.
    pub fn or(self, other: Predicate<T>) -> Self {
        let expr = format!("({} OR {})", self.expr, other.expr);
        let (left, right) = (self.func, other.func);
        Self::new(expr, move |record: &T| left(record) || right(record))
    }

    /// AND over a list, evaluated left to right.
    ///
    /// Stops at the first predicate that fails. The expression nests to the
    /// left like repeated [`Predicate::and`], but the closure stays flat, so
    /// long lists neither deepen the call stack nor the drop chain. An empty
    /// list accepts everything.
    pub fn all(predicates: Vec<Predicate<T>>) -> Self {
        Self::flat(predicates, "AND", Self::always_true, |funcs, record| {
            funcs.iter().all(|func| func(record))
        })
    }

    /// OR over a list, evaluated left to right.
    ///
    /// Stops at the first predicate that holds. An empty list rejects
    /// everything.
    pub fn any(predicates: Vec<Predicate<T>>) -> Self {
        Self::flat(predicates, "OR", Self::always_false, |funcs, record| {
            funcs.iter().any(|func| func(record))
        })
    }

    fn flat(
        mut predicates: Vec<Predicate<T>>,
        keyword: &str,
        identity: fn() -> Self,
        combine: fn(&[Arc<PredicateFn<T>>], &T) -> bool,
    ) -> Self {
        if predicates.len() <= 1 {
            return predicates.pop().unwrap_or_else(identity);
        }

        let expr = render_left_nested(&predicates, keyword);
        let funcs: Vec<Arc<PredicateFn<T>>> = predicates.into_iter().map(|p| p.func).collect();
        Self::new(expr, move |record: &T| combine(&funcs, record))
    }

    /// Logical NOT.
    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Self {
        let expr = format!("NOT {}", self.expr);
        let inner = self.func;
        Self::new(expr, move |record: &T| !inner(record))
    }
}

/// `((a OP b) OP c)`, built in one pass.
fn render_left_nested<T>(predicates: &[Predicate<T>], keyword: &str) -> String {
    let len: usize = predicates.iter().map(|p| p.expr.len() + keyword.len() + 3).sum();
    let mut expr = String::with_capacity(len);
    expr.extend(std::iter::repeat_n('(', predicates.len() - 1));
    for (i, predicate) in predicates.iter().enumerate() {
        if i > 0 {
            expr.push(' ');
            expr.push_str(keyword);
            expr.push(' ');
        }
        expr.push_str(&predicate.expr);
        if i > 0 {
            expr.push(')');
        }
    }
    expr
}

impl<T> Clone for Predicate<T> {
    fn clone(&self) -> Self {
        Self {
            func: Arc::clone(&self.func),
            expr: Arc::clone(&self.expr),
        }
    }
}

impl<T> fmt::Debug for Predicate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Predicate").field(&self.expr).finish()
    }
}

impl<T> fmt::Display for Predicate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.expr)
    }
}
