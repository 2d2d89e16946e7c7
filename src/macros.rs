//! The [`props!`] macro for building [`Value`](crate::Value) trees from
//! literal syntax.

/// Builds a [`Value`](crate::Value) from a literal: `null`, booleans,
/// numbers, strings, `[...]` sequences, and `{ "key": value }` records.
///
/// # Examples
///
/// ```rust
/// use serde_props::props;
///
/// let config = props!({
///     "host": "localhost",
///     "port": 8080,
///     "tags": ["web", "prod"]
/// });
/// assert!(config.is_record());
/// ```
#[macro_export]
macro_rules! props {
    (null) => {
        $crate::Value::Null
    };

    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([]) => {
        $crate::Value::Seq(vec![])
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Seq(vec![$($crate::props!($elem)),*])
    };

    ({}) => {
        $crate::Value::Record($crate::PropMap::new())
    };

    // Braced literals build records, not mappings: fields written out by
    // hand read like a struct declaration.
    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut record = $crate::PropMap::new();
        $(
            record.insert($key.to_string(), $crate::props!($value));
        )*
        $crate::Value::Record(record)
    }};

    // Anything else goes through the From conversions.
    ($v:expr) => {
        $crate::Value::from($v)
    };
}

#[cfg(test)]
mod tests {
    use crate::{Number, PropMap, Value};

    #[test]
    fn test_props_macro_primitives() {
        assert_eq!(props!(null), Value::Null);
        assert_eq!(props!(true), Value::Bool(true));
        assert_eq!(props!(false), Value::Bool(false));
        assert_eq!(props!(42), Value::Number(Number::Int(42)));
        assert_eq!(props!(3.5), Value::Number(Number::Float(3.5)));
        assert_eq!(props!("hello"), Value::String("hello".to_string()));
    }

    #[test]
    fn test_props_macro_sequences() {
        assert_eq!(props!([]), Value::Seq(vec![]));

        let seq = props!([1, 2, 3]);
        match seq {
            Value::Seq(items) => {
                assert_eq!(items.len(), 3);
                assert_eq!(items[0], Value::Number(Number::Int(1)));
                assert_eq!(items[2], Value::Number(Number::Int(3)));
            }
            _ => panic!("Expected sequence"),
        }
    }

    #[test]
    fn test_props_macro_records() {
        assert_eq!(props!({}), Value::Record(PropMap::new()));

        let record = props!({
            "name": "Alice",
            "age": 30
        });

        match record {
            Value::Record(fields) => {
                assert_eq!(fields.len(), 2);
                assert_eq!(fields.get("name"), Some(&Value::String("Alice".to_string())));
                assert_eq!(fields.get("age"), Some(&Value::Number(Number::Int(30))));
            }
            _ => panic!("Expected record"),
        }
    }

    #[test]
    fn test_props_macro_nested() {
        let record = props!({
            "server": {
                "host": "localhost",
                "port": 8080
            },
            "tags": ["a", "b"]
        });

        let fields = record.as_map().unwrap();
        let server = fields.get("server").unwrap().as_map().unwrap();
        assert_eq!(server.get("port"), Some(&Value::Number(Number::Int(8080))));
        assert_eq!(fields.get("tags").unwrap().as_seq().unwrap().len(), 2);
    }
}
