//! Variadic front-ends for the assertion functions.

/// Asserts that an iterator (or anything `IntoIterator`) yields exactly the
/// given elements, in order. With no elements, asserts it yields nothing.
///
/// ```ignore
/// assert_iter_contains!(values.iter(), 1, 2, 3);
/// assert_iter_contains!(std::iter::empty::<u8>());
/// ```
#[macro_export]
macro_rules! assert_iter_contains {
    ($iter:expr $(,)?) => {
        $crate::assertions::assert_iterator_empty(::std::iter::IntoIterator::into_iter($iter))
    };
    ($iter:expr, $($expected:expr),+ $(,)?) => {
        $crate::assertions::assert_iterable_contains($iter, &[$($expected),+])
    };
}

/// Asserts the size and then the ordered elements of a list. With no
/// elements, asserts the list is empty.
#[macro_export]
macro_rules! assert_list_contains {
    ($list:expr $(,)?) => {
        $crate::assertions::assert_list_empty(&$list[..])
    };
    ($list:expr, $($expected:expr),+ $(,)?) => {
        $crate::assertions::assert_list_contains(&$list[..], &[$($expected),+])
    };
}

/// Asserts the size of a collection and that each element is a member.
/// With no elements, asserts the collection is empty.
#[macro_export]
macro_rules! assert_collection_contains {
    ($collection:expr $(,)?) => {
        $crate::assertions::assert_collection_empty(&$collection)
    };
    ($collection:expr, $($expected:expr),+ $(,)?) => {
        $crate::assertions::assert_collection_contains(&$collection, &[$($expected),+])
    };
}

/// Asserts that a map holds exactly the given `key => value` entries.
///
/// ```ignore
/// assert_map_contains!(map, "a" => 1);
/// assert_map_contains!(map, "a" => 1, "b" => 2);
/// assert_map_contains!(empty_map);
/// ```
#[macro_export]
macro_rules! assert_map_contains {
    ($map:expr $(,)?) => {
        $crate::assertions::assert_map_empty(&$map)
    };
    ($map:expr, $key:expr => $value:expr $(,)?) => {
        $crate::assertions::assert_map_contains_entry(&$map, $key, $value)
    };
    ($map:expr, $key1:expr => $value1:expr, $key2:expr => $value2:expr $(,)?) => {
        $crate::assertions::assert_map_contains_entries(&$map, ($key1, $value1), ($key2, $value2))
    };
    ($map:expr, $($key:expr => $value:expr),+ $(,)?) => {
        $crate::assertions::assert_map_contains(&$map, &[$(($key, $value)),+])
    };
}

/// Asserts the length of an array and positional equality at every index.
/// With no elements, asserts the array is empty.
#[macro_export]
macro_rules! assert_array_contains {
    ($array:expr $(,)?) => {
        $crate::assertions::assert_array_empty(&$array[..])
    };
    ($array:expr, $($expected:expr),+ $(,)?) => {
        $crate::assertions::assert_array_contains(&$array[..], &[$($expected),+])
    };
}

/// Asserts that an error's message contains the given text.
///
/// ```ignore
/// assert_error_message_contains!(err, "not found");
/// ```
#[macro_export]
macro_rules! assert_error_message_contains {
    ($error:expr, $text:expr $(,)?) => {
        $crate::assertions::assert_error_message_contains($text, &$error)
    };
}
