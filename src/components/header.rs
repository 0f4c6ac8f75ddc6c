use web_sys::{ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

/// Height of the fixed header, compensated for when scrolling to anchors.
pub const HEADER_OFFSET_PX: f64 = 80.0;

/// Scroll position that puts an anchor target just below the fixed header.
pub fn anchor_scroll_top(rect_top: f64, page_y_offset: f64) -> f64 {
    rect_top + page_y_offset - HEADER_OFFSET_PX
}

/// Smoothly scroll to a same-page anchor. Missing targets are a no-op.
pub fn scroll_to_anchor(href: &str) {
    let id = href.trim_start_matches('#');
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(target) = window.document().and_then(|doc| doc.get_element_by_id(id)) else {
        return;
    };
    let page_y = window.page_y_offset().unwrap_or(0.0);
    let top = anchor_scroll_top(target.get_bounding_client_rect().top(), page_y);
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

#[function_component(Header)]
pub fn header() -> Html {
    let menu_open = use_state(|| false);

    let on_toggle = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let nav_link = |href: &'static str, label: &'static str| -> Html {
        let menu_open = menu_open.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            // Clicking any nav link closes the mobile menu, open or not.
            menu_open.set(false);
            if href == "#" {
                return;
            }
            e.prevent_default();
            scroll_to_anchor(href);
        });
        html! {
            <a class="nav-link" {href} {onclick}>{label}</a>
        }
    };

    html! {
        <header class="site-header">
            <a class="nav-logo" href="#">{"fixguard"}</a>
            <nav id="nav" class={classes!("nav", (*menu_open).then(|| "active"))}>
                { nav_link("#features", "Features") }
                { nav_link("#install", "Install") }
                { nav_link("#feedback", "Feedback") }
            </nav>
            <button
                id="menu-toggle"
                class={classes!("menu-toggle", (*menu_open).then(|| "active"))}
                aria-label="Toggle navigation"
                onclick={on_toggle}
            >
                <span class="menu-bar"></span>
                <span class="menu-bar"></span>
                <span class="menu-bar"></span>
            </button>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_scroll_top_subtracts_header_offset() {
        assert_eq!(anchor_scroll_top(100.0, 50.0), 70.0);
        assert_eq!(anchor_scroll_top(0.0, 0.0), -HEADER_OFFSET_PX);
    }
}
