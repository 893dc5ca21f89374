//! Declarative conversion between application records and [`Value`] objects.
//!
//! A record type opts in by implementing [`Mappable`]: it names itself with
//! [`TYPE_NAME`](Mappable::TYPE_NAME) and declares one [`FieldBinding`] per
//! field it wants exposed. The binding pairs an exposed key with a getter
//! and a setter; nothing is inferred at runtime.
//!
//! [`save`] wraps a record's fields under its type name, so several record
//! types can round-trip through the same document without key collisions:
//!
//! ```text
//! {"Item":{"Amount":5,"Name":"Coffee"}}
//! ```
//!
//! ## Examples
//!
//! ```rust
//! use jsonic::{load_new, save, FieldBinding, Mappable, Value};
//!
//! #[derive(Clone, Default, PartialEq, Debug)]
//! struct Item {
//!     name: String,
//!     amount: i64,
//! }
//!
//! impl Mappable for Item {
//!     const TYPE_NAME: &'static str = "Item";
//!
//!     fn bindings() -> Vec<FieldBinding<Self>> {
//!         vec![
//!             FieldBinding::new(
//!                 "Name",
//!                 |item| Value::from(item.name.clone()),
//!                 |item, value| {
//!                     item.name = value.as_string()?.to_string();
//!                     Ok(())
//!                 },
//!             ),
//!             FieldBinding::new(
//!                 "Amount",
//!                 |item| Value::from(item.amount),
//!                 |item, value| {
//!                     item.amount = value.as_integer()?;
//!                     Ok(())
//!                 },
//!             ),
//!         ]
//!     }
//! }
//!
//! let item = Item { name: "Coffee".to_string(), amount: 5 };
//! let saved = save(&item);
//! let restored: Item = load_new(&saved).unwrap();
//! assert_eq!(item, restored);
//! ```
//!
//! ## Atomicity
//!
//! [`load`] applies every setter to a clone of the target record and commits
//! the clone only once all of them succeed. A record is never left with half
//! its declared fields updated.
//!
//! [`Value`]: crate::Value

use crate::{Error, JsonMap, Result, Value};

/// Associates one record field with its exposed key.
///
/// The getter wraps the field's current value as a [`Value`]; the setter
/// decodes a stored [`Value`] back into the field, failing with a
/// wrong-variant or mapping error when the stored shape does not fit.
pub struct FieldBinding<T> {
    pub key: &'static str,
    pub get: fn(&T) -> Value,
    pub set: fn(&mut T, &Value) -> Result<()>,
}

impl<T> FieldBinding<T> {
    /// Declares a binding from `key` to a getter/setter pair.
    #[must_use]
    pub fn new(
        key: &'static str,
        get: fn(&T) -> Value,
        set: fn(&mut T, &Value) -> Result<()>,
    ) -> Self {
        FieldBinding { key, get, set }
    }
}

/// A record type that declares how its fields map to object keys.
///
/// `Default` supports [`load_new`]; `Clone` supports the all-or-nothing
/// commit in [`load`].
pub trait Mappable: Default + Clone {
    /// Namespace key under which this type's fields are stored.
    const TYPE_NAME: &'static str;

    /// The declared field bindings, one per exposed field.
    fn bindings() -> Vec<FieldBinding<Self>>;
}

/// Converts a record into a namespaced object value.
///
/// Every declared field is read through its getter and inserted under its
/// exposed key; the field object is wrapped under
/// [`TYPE_NAME`](Mappable::TYPE_NAME) inside a fresh outer object.
#[must_use]
pub fn save<T: Mappable>(record: &T) -> Value {
    let mut container = JsonMap::new();
    save_into(&mut container, record);
    Value::Object(container)
}

/// Inserts a record's namespaced entry into an existing container, so
/// multiple mappable types can share one document.
pub fn save_into<T: Mappable>(container: &mut JsonMap, record: &T) {
    let mut fields = JsonMap::new();
    for binding in T::bindings() {
        fields.insert(binding.key.to_string(), (binding.get)(record));
    }
    container.insert(T::TYPE_NAME.to_string(), Value::Object(fields));
}

/// Populates a record from its namespaced entry in `container`.
///
/// Every declared field present as a key in the entry is decoded and
/// written through its setter. Fields absent from the entry keep their
/// current value.
///
/// # Errors
///
/// [`Error::Mapping`] when the container is not an object, holds no entry
/// for the record's type, the entry is not an object, or any present field
/// fails to decode. On error the record is left untouched.
pub fn load<T: Mappable>(record: &mut T, container: &Value) -> Result<()> {
    let container = container
        .as_object()
        .map_err(|_| Error::mapping(format!("container for '{}' is not an object", T::TYPE_NAME)))?;

    let fields = container
        .get(T::TYPE_NAME)
        .ok_or_else(|| Error::mapping(format!("no entry for type '{}'", T::TYPE_NAME)))?
        .as_object()
        .map_err(|_| Error::mapping(format!("entry for '{}' is not an object", T::TYPE_NAME)))?;

    // All-or-nothing: mutate a clone, commit only on full success.
    let mut staged = record.clone();
    for binding in T::bindings() {
        if let Some(value) = fields.get(binding.key) {
            (binding.set)(&mut staged, value).map_err(|err| {
                Error::mapping(format!(
                    "field '{}' of '{}': {err}",
                    binding.key,
                    T::TYPE_NAME
                ))
            })?;
        }
    }
    *record = staged;
    Ok(())
}

/// Constructs a default record and populates it from `container`.
///
/// # Errors
///
/// Same as [`load`].
pub fn load_new<T: Mappable>(container: &Value) -> Result<T> {
    let mut record = T::default();
    load(&mut record, container)?;
    Ok(record)
}
