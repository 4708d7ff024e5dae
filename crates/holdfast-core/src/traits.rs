//! Capability traits for element types.

/// Capability required of every element stored in a bounded container.
///
/// A container allocates its storage in bulk and fills every slot at
/// construction time, so each element type must have a default state.
/// Assignment needs no extra bound: any owned `T` can be moved into a slot.
///
/// Implemented for every `T: Default`; there is nothing to implement by hand.
///
/// ```
/// use holdfast_core::Element;
///
/// fn fresh<T: Element>() -> T {
///     T::default()
/// }
///
/// assert_eq!(fresh::<i32>(), 0);
/// assert_eq!(fresh::<String>(), "");
/// ```
///
/// Types with no default state cannot be used:
///
/// ```compile_fail
/// use holdfast_core::Element;
///
/// struct Port(u16);
///
/// fn needs_element<T: Element>() {}
/// needs_element::<Port>();
/// ```
pub trait Element: Default {}

impl<T: Default> Element for T {}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_element<T: Element>() {}

    #[derive(Default)]
    struct TwoFields {
        _left: i64,
        _right: String,
    }

    #[test]
    fn default_types_are_elements() {
        assert_element::<u8>();
        assert_element::<String>();
        assert_element::<Vec<u32>>();
        assert_element::<Option<Box<i32>>>();
        assert_element::<TwoFields>();
    }
}
