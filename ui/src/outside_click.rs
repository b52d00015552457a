//! Detect clicks that land outside a single node.
//!
//! [`OutsideClickHandle`] owns one document-level click listener and a slot
//! for the node that counts as "inside". The listener and the node have
//! separate lifecycles: the listener follows the callback (and is replaced
//! whenever the callback or capture flag changes), while the node follows
//! whatever is currently rendered. Clicks arriving while no node is bound
//! are ignored.
//!
//! The document is abstracted by [`ClickSurface`] so the handle can be
//! driven without a browser. [`DocumentSurface`] is the real one.

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::{Document, MouseEvent, Node};
use yew::Callback;

/// Somewhere click listeners can be registered.
pub trait ClickSurface {
    type Node;
    type Target;
    /// Registration guard. Dropping it removes the listener.
    type Listener;

    fn listen(
        &self,
        capture: bool,
        on_click: Box<dyn Fn(&Self::Target)>,
    ) -> Self::Listener;

    /// True if `target` is `node` or one of its descendants.
    fn contains(&self, node: &Self::Node, target: &Self::Target) -> bool;
}

pub struct OutsideClickHandle<S: ClickSurface> {
    surface: S,
    node: Rc<RefCell<Option<S::Node>>>,
    listener: Option<S::Listener>,
}

impl<S> OutsideClickHandle<S>
where
    S: ClickSurface + Clone + 'static,
    S::Node: 'static,
    S::Target: 'static,
{
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            node: Rc::new(RefCell::new(None)),
            listener: None,
        }
    }

    /// Start listening, replacing any listener from a previous call.
    pub fn attach(&mut self, callback: Callback<()>, capture: bool) {
        // The old listener must be gone before the new one exists, or a
        // single click could reach both.
        self.detach();

        let surface = self.surface.clone();
        let node = self.node.clone();
        let on_click = Box::new(move |target: &S::Target| {
            let outside = match node.borrow().as_ref() {
                Some(node) => !surface.contains(node, target),
                None => false,
            };
            if outside {
                callback.emit(());
            }
        });

        self.listener = Some(self.surface.listen(capture, on_click));
    }

    pub fn detach(&mut self) {
        self.listener = None;
    }

    pub fn bind(&self, node: S::Node) {
        *self.node.borrow_mut() = Some(node);
    }

    pub fn unbind(&self) {
        *self.node.borrow_mut() = None;
    }

    pub fn is_bound(&self) -> bool {
        self.node.borrow().is_some()
    }

    pub fn is_attached(&self) -> bool {
        self.listener.is_some()
    }
}

/// The browser document.
#[derive(Clone)]
pub struct DocumentSurface {
    document: Option<Document>,
}

impl DocumentSurface {
    pub fn current() -> Self {
        let document = web_sys::window().and_then(|window| window.document());
        if document.is_none() {
            tracing::warn!("No document available, outside clicks are ignored");
        }
        Self { document }
    }
}

pub struct DocumentClickListener {
    document: Option<Document>,
    closure: Closure<dyn FnMut(MouseEvent)>,
    capture: bool,
}

impl Drop for DocumentClickListener {
    fn drop(&mut self) {
        if let Some(document) = &self.document {
            let _ = document.remove_event_listener_with_callback_and_bool(
                "click",
                self.closure.as_ref().unchecked_ref(),
                self.capture,
            );
        }
    }
}

impl ClickSurface for DocumentSurface {
    type Node = Node;
    type Target = Node;
    type Listener = DocumentClickListener;

    fn listen(
        &self,
        capture: bool,
        on_click: Box<dyn Fn(&Node)>,
    ) -> DocumentClickListener {
        let closure = Closure::wrap(Box::new(move |event: MouseEvent| {
            if let Some(target) =
                event.target().and_then(|target| target.dyn_into::<Node>().ok())
            {
                on_click(&target);
            }
        }) as Box<dyn FnMut(MouseEvent)>);

        if let Some(document) = &self.document
            && let Err(e) = document.add_event_listener_with_callback_and_bool(
                "click",
                closure.as_ref().unchecked_ref(),
                capture,
            )
        {
            tracing::error!("Failed to add click listener: {:?}", e);
        }

        DocumentClickListener {
            document: self.document.clone(),
            closure,
            capture,
        }
    }

    fn contains(&self, node: &Node, target: &Node) -> bool {
        node.contains(Some(target))
    }
}
