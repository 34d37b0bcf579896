//! Session store trait for the per-caller pending verification slots.
//!
//! The web framework owns the session; implementations adapt it. Methods take
//! `&self` because framework sessions use interior mutability.

pub trait SessionStore {
    /// Read a slot
    fn get(&self, key: &str) -> Result<Option<String>, String>;

    /// Write a slot, replacing any previous value
    fn insert(&self, key: &str, value: &str) -> Result<(), String>;

    /// Delete a slot, returning its previous value
    fn remove(&self, key: &str) -> Result<Option<String>, String>;
}
