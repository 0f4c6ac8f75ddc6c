use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use yew::prelude::*;

/// How long the checkmark confirmation stays on screen.
const COPIED_RESET_MS: u32 = 2_000;

#[derive(Properties, PartialEq)]
pub struct CopyButtonProps {
    /// Text to copy. When absent, the previous sibling's text content is
    /// used at click time.
    #[prop_or_default]
    pub text: Option<AttrValue>,
}

#[function_component(CopyButton)]
pub fn copy_button(props: &CopyButtonProps) -> Html {
    let node = use_node_ref();
    let copied = use_state(|| false);

    let onclick = {
        let node = node.clone();
        let copied = copied.clone();
        let text = props.text.clone();
        Callback::from(move |_: MouseEvent| {
            let payload = text.as_ref().map(|t| t.to_string()).or_else(|| {
                node.cast::<web_sys::Element>()
                    .and_then(|el| el.previous_element_sibling())
                    .and_then(|el| el.text_content())
            });
            let Some(payload) = payload else {
                return;
            };
            let Some(window) = web_sys::window() else {
                return;
            };
            let clipboard = window.navigator().clipboard();
            let copied = copied.clone();
            spawn_local(async move {
                match JsFuture::from(clipboard.write_text(&payload)).await {
                    Ok(_) => {
                        copied.set(true);
                        let copied = copied.clone();
                        Timeout::new(COPIED_RESET_MS, move || copied.set(false)).forget();
                    }
                    // Clipboard access can be denied; leave the UI alone.
                    Err(e) => log::error!("Failed to copy: {:?}", e),
                }
            });
        })
    };

    html! {
        <button
            ref={node}
            class={classes!("copy-btn", (*copied).then(|| "copied"))}
            data-copy={props.text.clone()}
            title="Copy to clipboard"
            {onclick}
        >
            {
                if *copied {
                    html! {
                        <svg width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                            <polyline points="20 6 9 17 4 12"></polyline>
                        </svg>
                    }
                } else {
                    html! {
                        <svg width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                            <rect x="9" y="9" width="13" height="13" rx="2" ry="2"></rect>
                            <path d="M5 15H4a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2h9a2 2 0 0 1 2 2v1"></path>
                        </svg>
                    }
                }
            }
        </button>
    }
}
