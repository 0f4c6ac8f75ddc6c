use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::js_sys;
use yew::prelude::*;

use crate::animation::{Animator, DEMO_SCRIPT, START_DELAY_MS};

/// Run one animator step and schedule the next one from inside the
/// callback, so at most one timer is ever pending for the loop.
fn schedule_tick(
    animator: Rc<RefCell<Animator>>,
    typed: UseStateHandle<String>,
    output: UseStateHandle<String>,
    delay_ms: u32,
) {
    Timeout::new(delay_ms, move || {
        let next_delay = {
            let mut animator = animator.borrow_mut();
            let delay = animator.tick(js_sys::Math::random());
            typed.set(animator.visible_command().to_string());
            output.set(animator.visible_output().to_string());
            delay
        };
        schedule_tick(animator, typed, output, next_delay);
    })
    .forget();
}

/// The hero terminal, replaying the demo script for the page's lifetime.
#[function_component(Terminal)]
pub fn terminal() -> Html {
    let typed = use_state(String::new);
    let output = use_state(String::new);

    {
        let typed = typed.clone();
        let output = output.clone();
        use_effect_with_deps(
            move |_| {
                if web_sys::window().is_some() {
                    let animator = Rc::new(RefCell::new(Animator::new(DEMO_SCRIPT)));
                    schedule_tick(animator, typed, output, START_DELAY_MS);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="terminal-window">
            <div class="terminal-header">
                <span class="terminal-dot"></span>
                <span class="terminal-dot"></span>
                <span class="terminal-dot"></span>
                <span class="terminal-title">{"fixguard — zsh"}</span>
            </div>
            <div class="terminal-body">
                <div class="terminal-line">
                    <span class="terminal-prompt">{"$ "}</span>
                    <span id="typed-command">{(*typed).clone()}</span>
                    <span class="terminal-cursor">{"▋"}</span>
                </div>
                <pre id="terminal-output">{(*output).clone()}</pre>
            </div>
        </div>
    }
}
