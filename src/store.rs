use std::fmt::Debug;

use uniffi::trait_interface;

use crate::error::StoreResult;
use crate::models::HighlightState;

pub mod file;
pub mod memory;

#[trait_interface]
pub trait HighlightStore: Send + Sync + Debug {
    /// Load the persisted state for a view, if any
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the store fails
    fn load(&self, view_id: &str) -> StoreResult<Option<HighlightState>>;

    /// Save a view's state, replacing any previous state
    ///
    /// # Errors
    ///
    /// Returns an error if the state has an empty view identifier or if
    /// writing to the store fails
    fn save(&mut self, state: &HighlightState) -> StoreResult<()>;

    /// Delete a view's persisted state
    ///
    /// # Errors
    ///
    /// Returns an error if deleting from the store fails
    fn delete(&mut self, view_id: &str) -> StoreResult<()>;

    /// List the view identifiers with persisted state
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the store fails
    fn list_views(&self) -> StoreResult<Vec<String>>;
}
