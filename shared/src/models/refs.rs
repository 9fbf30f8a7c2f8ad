//! Typed record references

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// A bare, typed reference to a record (String ID)
///
/// Order lines always store `Ref`s, never embedded records. The hydrated
/// form of a reference is simply the model type itself, returned by the
/// catalog lookup; re-attaching full records for display is a read-path
/// concern outside the engine.
#[derive(Serialize, Deserialize)]
#[serde(transparent, bound = "")]
pub struct Ref<T> {
    id: String,
    #[serde(skip)]
    _marker: PhantomData<fn() -> T>,
}

impl<T> Ref<T> {
    /// Create a reference from a record id
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            _marker: PhantomData,
        }
    }

    /// The referenced record id
    pub fn id(&self) -> &str {
        &self.id
    }
}

// Manual impls: derives would require `T` itself to satisfy the bounds,
// but a reference compares by id only.
impl<T> Clone for Ref<T> {
    fn clone(&self) -> Self {
        Self::new(self.id.clone())
    }
}

impl<T> PartialEq for Ref<T> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<T> Eq for Ref<T> {}

impl<T> Hash for Ref<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl<T> fmt::Debug for Ref<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ref({})", self.id)
    }
}

impl<T> fmt::Display for Ref<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

impl<T> From<&str> for Ref<T> {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl<T> From<String> for Ref<T> {
    fn from(id: String) -> Self {
        Self::new(id)
    }
}
