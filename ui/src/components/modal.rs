use yew::prelude::*;

use crate::hooks::use_outside_click;

/// A reusable modal that closes when the user clicks anywhere outside its
/// panel.
///
/// # Example
///
/// ```rust,ignore
/// use crate::components::Modal;
/// use yew::prelude::*;
///
/// #[function_component]
/// fn MyComponent() -> Html {
///     let show_modal = use_state(|| false);
///
///     let close_modal = {
///         let show_modal = show_modal.clone();
///         Callback::from(move |_| show_modal.set(false))
///     };
///
///     html! {
///         if *show_modal {
///             <Modal on_close={close_modal}>
///                 <h3>{"Modal Title"}</h3>
///             </Modal>
///         }
///     }
/// }
/// ```
#[derive(Properties, PartialEq)]
pub struct ModalProps {
    /// Modal content (passed as children)
    pub children: Html,
    /// Called when user clicks outside the panel
    pub on_close: Callback<()>,
    /// Maximum width class (default: "max-w-md")
    #[prop_or_else(|| AttrValue::from("max-w-md"))]
    pub max_width: AttrValue,
    /// Whether clicking outside the panel closes the modal (default: true)
    #[prop_or(true)]
    pub close_on_outside_click: bool,
}

#[function_component]
pub fn Modal(props: &ModalProps) -> Html {
    // Memoized so the document listener is only replaced when these change.
    let on_outside_click = use_callback(
        (props.on_close.clone(), props.close_on_outside_click),
        |_: (), (on_close, close_on_outside_click)| {
            if *close_on_outside_click {
                on_close.emit(());
            }
        },
    );
    let panel_ref = use_outside_click(on_outside_click, true);

    let max_width = props.max_width.to_string();

    html! {
        <div
            class="fixed inset-0 bg-black bg-opacity-50 z-50 flex
                   items-center justify-center p-4"
        >
            <div
                ref={panel_ref}
                class={format!(
                    "bg-white dark:bg-neutral-800 rounded-lg shadow-xl \
                     w-full p-6 {}",
                    max_width
                )}
            >
                {props.children.clone()}
            </div>
        </div>
    }
}
