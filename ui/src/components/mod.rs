//! User Interface Components
//!
//! Reusable Dioxus components for the preference step:
//!
//! - **forms**: region map, location dropdown and scheme dropdowns
//! - **display**: map legend, region blurb and choice summary
//!
//! Components draw a `PreferenceView` and report user input as
//! `PreferenceAction`s; none of them hold selection state.

pub mod display;
pub mod forms;
