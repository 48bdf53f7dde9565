//! Typed UUID wrappers.
//!
//! `Id<T, V>` wraps `uuid::Uuid` so that a `PostId` can never be passed where a
//! `ReviewId` or `AuthorId` was expected. Stored entities use time-ordered v7
//! ids; short-lived sessions use random v4 ids.
//!
//! ```compile_fail
//! use psyche_core::common::id::Id;
//!
//! struct Author;
//! struct Post;
//!
//! let author_id: Id<Author> = Id::new();
//! let post_id: Id<Post> = author_id;
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::str::FromStr;
use uuid::Uuid;

/// How fresh ids of a given version are generated.
pub trait UuidVersion {
    fn generate() -> Uuid;
}

/// Time-ordered ids.
pub struct V7;

/// Random ids.
pub struct V4;

impl UuidVersion for V7 {
    fn generate() -> Uuid {
        Uuid::now_v7()
    }
}

impl UuidVersion for V4 {
    fn generate() -> Uuid {
        Uuid::new_v4()
    }
}

#[repr(transparent)]
pub struct Id<T, V = V7>(Uuid, PhantomData<fn() -> (T, V)>);

impl<T, V: UuidVersion> Id<T, V> {
    pub fn new() -> Self {
        Self(V::generate(), PhantomData)
    }
}

impl<T, V: UuidVersion> Default for Id<T, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, V> Id<T, V> {
    /// Wrap a raw uuid, e.g. a GraphQL argument.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid, PhantomData)
    }

    pub fn into_uuid(self) -> Uuid {
        self.0
    }

    pub fn parse(s: &str) -> Result<Self, uuid::Error> {
        Uuid::parse_str(s).map(Self::from_uuid)
    }
}

// Manual impls: derives would put bounds on the marker types.

impl<T, V> Clone for Id<T, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, V> Copy for Id<T, V> {}

impl<T, V> PartialEq for Id<T, V> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T, V> Eq for Id<T, V> {}

impl<T, V> Hash for Id<T, V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl<T, V> fmt::Debug for Id<T, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entity = std::any::type_name::<T>()
            .rsplit("::")
            .next()
            .unwrap_or("?");
        write!(f, "{}Id({})", entity, self.0)
    }
}

impl<T, V> fmt::Display for Id<T, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl<T, V> FromStr for Id<T, V> {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<T, V> Serialize for Id<T, V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de, T, V> Deserialize<'de> for Id<T, V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Uuid::deserialize(deserializer).map(Self::from_uuid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Author;
    struct Session;

    type AuthorId = Id<Author>;
    type SessionId = Id<Session, V4>;

    #[test]
    fn test_versions() {
        assert_eq!(AuthorId::new().into_uuid().get_version_num(), 7);
        assert_eq!(SessionId::new().into_uuid().get_version_num(), 4);
        assert_ne!(AuthorId::new(), AuthorId::new());
    }

    #[test]
    fn test_parse_matches_display() {
        let id = AuthorId::new();
        assert_eq!(AuthorId::parse(&id.to_string()).unwrap(), id);
        assert!("not-a-uuid".parse::<AuthorId>().is_err());
    }

    #[test]
    fn test_debug_names_the_entity() {
        let id = AuthorId::new();
        assert_eq!(format!("{:?}", id), format!("AuthorId({})", id));
    }

    #[test]
    fn test_serializes_as_plain_uuid() {
        let id = AuthorId::new();
        let json = serde_json::to_value(id).unwrap();
        assert_eq!(json, serde_json::Value::String(id.to_string()));
    }
}
