//! Generic modal dialog shell.
//!
//! DESIGN
//! ======
//! Pages own the dialog contents and open/close state; this component only
//! provides the backdrop, title bar, and Escape/backdrop dismissal.

use leptos::prelude::*;

/// Centered dialog over a dimmed backdrop.
#[component]
pub fn Modal(#[prop(into)] title: String, on_close: Callback<()>, children: Children) -> impl IntoView {
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(()) on:keydown=on_keydown>
            <div class="dialog" role="dialog" aria-modal="true" on:click=move |ev| ev.stop_propagation()>
                <header class="dialog__header">
                    <h2>{title}</h2>
                    <button class="btn dialog__close" title="Close" on:click=move |_| on_close.run(())>
                        "×"
                    </button>
                </header>
                {children()}
            </div>
        </div>
    }
}
