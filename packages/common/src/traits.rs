//! Marker traits used by the builder APIs

/// Marks values that an `on_result` handler may return
///
/// Handlers exist to unwrap a `Result`, so their output must be a plain
/// value. `Result` itself intentionally has no implementation.
pub trait NotResult {}

impl NotResult for () {}
impl NotResult for bool {}
impl NotResult for String {}
impl NotResult for &str {}
impl NotResult for usize {}
impl<T> NotResult for Vec<T> {}
impl<T> NotResult for Option<T> {}
impl<T> NotResult for Box<T> {}
impl<T, U> NotResult for (T, U)
where
    T: NotResult,
    U: NotResult,
{
}
