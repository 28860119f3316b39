use web_sys::{MouseEvent, ScrollBehavior, ScrollToOptions};
use yew::Callback;

use crate::config::HEADER_OFFSET_PX;

/// Smoothly scrolls so the element with `id` sits just below the nav bar.
pub fn scroll_to_section(id: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(element) = window.document().and_then(|document| document.get_element_by_id(id)) else {
        log::debug!("no section with id {id}");
        return;
    };
    let element_top = element.get_bounding_client_rect().top();
    let page_offset = window.page_y_offset().unwrap_or(0.0);
    smooth_scroll(&window, section_offset(element_top, page_offset));
}

/// Click handler for an in-page `#id` link.
pub fn jump_to(id: &'static str) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        scroll_to_section(id);
    })
}

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        smooth_scroll(&window, 0.0);
    }
}

fn smooth_scroll(window: &web_sys::Window, top: f64) {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

fn section_offset(element_top: f64, page_offset: f64) -> f64 {
    element_top + page_offset - HEADER_OFFSET_PX
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_leaves_room_for_the_nav_bar() {
        assert_eq!(section_offset(500.0, 1200.0), 1620.0);
        assert_eq!(section_offset(0.0, 0.0), -80.0);
    }
}
