//! Browser Helpers
//!
//! Thin wrappers over `web_sys` for the few side effects the selector needs:
//! reloading, focusing and scrolling. Off wasm32 every helper is a no-op so the
//! state logic can be unit tested natively.

#[cfg(target_arch = "wasm32")]
use crate::{console_error, console_warn};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use web_sys::{window, HtmlElement, ScrollBehavior, ScrollToOptions};

/// Reload the current page; used when "clear" should restore server answers
pub fn reload_page() {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = window() {
            if let Err(e) = window.location().reload() {
                console_error!("[Browser] Page reload failed: {:?}", e);
            }
        }
    }
}

/// Current viewport width in CSS pixels
pub fn viewport_width() -> Option<f64> {
    #[cfg(target_arch = "wasm32")]
    {
        window()?.inner_width().ok()?.as_f64()
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

/// Move keyboard focus to the element with the given id
pub fn focus_element(id: &str) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        let element = window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
            .and_then(|e| e.dyn_into::<HtmlElement>().ok());

        match element {
            Some(element) => element.focus().is_ok(),
            None => {
                console_warn!("[Browser] No focusable element with id {}", id);
                false
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = id;
        false
    }
}

/// Smooth-scroll so the element sits `offset` pixels below the viewport top
pub fn scroll_to_element(id: &str, offset: f64) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = window() else {
            return false;
        };
        let Some(element) = window.document().and_then(|d| d.get_element_by_id(id)) else {
            console_warn!("[Browser] No element with id {} to scroll to", id);
            return false;
        };

        let top = element.get_bounding_client_rect().top() + window.scroll_y().unwrap_or(0.0);
        let options = ScrollToOptions::new();
        options.set_top((top - offset).max(0.0));
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
        true
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (id, offset);
        false
    }
}

/// Text content of a page element, e.g. a `<script type="application/json">` block
pub fn element_text(id: &str) -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        window()?
            .document()?
            .get_element_by_id(id)?
            .text_content()
            .filter(|text| !text.trim().is_empty())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = id;
        None
    }
}
