/// Builds a [`Value`](crate::Value) from literal syntax.
///
/// ```rust
/// use jsonic::jsonic;
///
/// let value = jsonic!({
///     "name": "Alice",
///     "tags": ["a", "b"],
///     "extra": null
/// });
/// assert!(value.is_object());
/// ```
#[macro_export]
macro_rules! jsonic {
    // Handle null
    (null) => {
        $crate::Value::Null
    };

    // Handle true
    (true) => {
        $crate::Value::Bool(true)
    };

    // Handle false
    (false) => {
        $crate::Value::Bool(false)
    };

    // Handle empty array
    ([]) => {
        $crate::Value::Array(vec![])
    };

    // Handle non-empty array
    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array(vec![$($crate::jsonic!($elem)),*])
    };

    // Handle empty object
    ({}) => {
        $crate::Value::Object($crate::JsonMap::new())
    };

    // Handle non-empty object
    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::JsonMap::new();
        $(
            object.insert($key.to_string(), $crate::jsonic!($value));
        )*
        $crate::Value::Object(object)
    }};

    // Fallback: anything convertible into a Value
    ($other:expr) => {
        $crate::Value::from($other)
    };
}
