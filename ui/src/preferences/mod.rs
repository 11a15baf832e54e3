//! Location and Scheme Preference Selection
//!
//! The applicant picks a region, then a location within it, then ranks up to
//! two of the schemes that location offers.
//!
//! # Architecture
//!
//! - **catalog**: the static region -> location -> scheme mapping, validated once
//! - **types**: selection state, actions and option-value encodings
//! - **logic**: `PreferenceSelector`, the state container and reducer
//! - **initial**: restoring state from server-rendered preselections
//! - **view**: rendering as a pure function of state
//! - **form_validation**: save readiness and user-facing messages
//!
//! # Usage
//!
//! ```rust,ignore
//! let mut selector = PreferenceSelector::restore(catalog, &initial)?;
//! selector.reduce_in_place(PreferenceAction::SelectRegion("North".into()));
//! let view = render_view(&selector, &config);
//! ```

pub mod catalog;
pub mod form_validation;
pub mod initial;
pub mod logic;
pub mod types;
pub mod view;

pub use catalog::{Location, Region, RegionCatalog};
pub use form_validation::*;
pub use initial::InitialSelection;
pub use logic::PreferenceSelector;
pub use types::*;
pub use view::*;
