use web_sys::KeyboardEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CodeModalProps {
    pub is_open: bool,
    pub title: AttrValue,
    pub close_label: AttrValue,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(CodeModal)]
pub fn code_modal(props: &CodeModalProps) -> Html {
    {
        let is_open = props.is_open;
        let on_close = props.on_close.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if is_open && e.key() == "Escape" {
                on_close.emit(());
            }
        });
    }

    if !props.is_open {
        return html! {};
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_close.emit(());
        })
    };

    // Clicks inside the dialog must not reach the backdrop
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="modal-backdrop" onclick={close.clone()}>
            <div class="modal-component" role="dialog" aria-modal="true" onclick={keep_open}>
                <div class="modal-header">
                    <h2 class="modal-title">{&props.title}</h2>
                    <button class="modal-close" aria-label={props.close_label.clone()} onclick={close}>
                        {"×"}
                    </button>
                </div>
                <div class="modal-component-content">
                    { for props.children.iter() }
                </div>
            </div>
        </div>
    }
}
