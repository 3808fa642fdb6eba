//! Named field accessors for field-keyed grouping.
//!
//! Rust has no runtime field introspection, so the caller registers one
//! accessor per field name. Each accessor renders the field as text, which
//! becomes the grouping key.

use std::collections::HashMap;
use std::fmt;

use crate::error::{Result, SeqError};

type Accessor<T> = dyn Fn(&T) -> String;

/// Table of `field name → accessor` for record type `T`.
///
/// # Examples
/// ```
/// use u_seqkit::grouping::FieldRegistry;
///
/// struct City { name: &'static str, country: &'static str }
///
/// let registry = FieldRegistry::new()
///     .with_field("name", |c: &City| c.name.to_string())
///     .with_field("country", |c: &City| c.country.to_string());
///
/// let paris = City { name: "Paris", country: "FR" };
/// let country = registry.resolve("country").unwrap();
/// assert_eq!(country(&paris), "FR");
/// assert!(registry.resolve("population").is_err());
/// ```
pub struct FieldRegistry<T> {
    accessors: HashMap<String, Box<Accessor<T>>>,
}

impl<T> FieldRegistry<T> {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            accessors: HashMap::new(),
        }
    }

    /// Builder form of [`register`](Self::register).
    pub fn with_field<F>(mut self, name: impl Into<String>, accessor: F) -> Self
    where
        F: Fn(&T) -> String + 'static,
    {
        self.register(name, accessor);
        self
    }

    /// Registers `accessor` under `name`.
    ///
    /// Returns `true` if an accessor with the same name was replaced.
    pub fn register<F>(&mut self, name: impl Into<String>, accessor: F) -> bool
    where
        F: Fn(&T) -> String + 'static,
    {
        self.accessors
            .insert(name.into(), Box::new(accessor))
            .is_some()
    }

    /// Returns the accessor for `name`, if registered.
    pub fn get(&self, name: &str) -> Option<&Accessor<T>> {
        self.accessors.get(name).map(|a| &**a)
    }

    /// Returns the accessor for `name`.
    ///
    /// # Errors
    /// [`SeqError::TypeMismatch`] if no accessor is registered under `name`.
    pub fn resolve(&self, name: &str) -> Result<&Accessor<T>> {
        self.get(name).ok_or_else(|| SeqError::TypeMismatch {
            field: name.to_string(),
            type_name: std::any::type_name::<T>(),
        })
    }

    /// Returns `true` if `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.accessors.contains_key(name)
    }

    /// Returns the registered field names in sorted order.
    pub fn field_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.accessors.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Returns the number of registered fields.
    pub fn len(&self) -> usize {
        self.accessors.len()
    }

    /// Returns `true` if no fields are registered.
    pub fn is_empty(&self) -> bool {
        self.accessors.is_empty()
    }
}

impl<T> Default for FieldRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for FieldRegistry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldRegistry")
            .field("type", &std::any::type_name::<T>())
            .field("fields", &self.field_names())
            .finish()
    }
}
