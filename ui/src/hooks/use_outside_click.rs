use yew::prelude::*;

use crate::outside_click::{DocumentSurface, OutsideClickHandle};

/// Call `handler` whenever a click lands outside the element holding the
/// returned `NodeRef`.
///
/// `listen_capturing` registers the document listener in the capture phase
/// (the usual choice), so clicks whose propagation is stopped further down
/// are still seen, and the click that mounted the component is not.
///
/// # Example
///
/// ```rust,ignore
/// let on_close = props.on_close.clone();
/// let panel_ref = use_outside_click(on_close, true);
///
/// html! { <div ref={panel_ref}>{"..."}</div> }
/// ```
#[hook]
pub fn use_outside_click(
    handler: Callback<()>,
    listen_capturing: bool,
) -> NodeRef {
    let node_ref = use_node_ref();
    let handle =
        use_mut_ref(|| OutsideClickHandle::new(DocumentSurface::current()));

    // Follow the rendered element; before the first render there is none.
    {
        let node_ref = node_ref.clone();
        let handle = handle.clone();
        use_effect(move || {
            let handle = handle.borrow();
            match node_ref.get() {
                Some(node) => handle.bind(node),
                None => handle.unbind(),
            }
        });
    }

    {
        let handle = handle.clone();
        use_effect_with(
            (handler, listen_capturing),
            move |(handler, listen_capturing)| {
                handle
                    .borrow_mut()
                    .attach(handler.clone(), *listen_capturing);

                move || handle.borrow_mut().detach()
            },
        );
    }

    node_ref
}
