//! The editing model: action maps, their actions and their flat binding lists.
//!
//! ## Module Structure
//!
//! - [`asset_data`] - Serializable asset, map, action and binding types
//! - [`naming`] - Unique names and fresh ids for pasted elements
//! - [`selectors`] - Composite runs, binding groups and id lookups

mod asset_data;
pub mod naming;
pub mod selectors;

pub use asset_data::{Action, ActionMap, ActionType, Binding, BindingFlags, InputActionAsset};
pub use naming::{AssetElement, ensure_unique_name, make_unique_name};
