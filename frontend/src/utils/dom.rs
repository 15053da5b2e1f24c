use std::{cell::RefCell, collections::HashMap, rc::Rc};

/// Attribute sink for the document root (`<html>` and `<body>`).
pub trait RootAttributes {
    fn set_attribute(&self, name: &str, value: &str);
    fn attribute(&self, name: &str) -> Option<String>;
}

pub type SharedRoot = Rc<dyn RootAttributes>;

/// Off-DOM root used on host builds and in tests.
#[derive(Clone, Default)]
pub struct DetachedRoot {
    attributes: Rc<RefCell<HashMap<String, String>>>,
}

impl RootAttributes for DetachedRoot {
    fn set_attribute(&self, name: &str, value: &str) {
        self.attributes
            .borrow_mut()
            .insert(name.to_string(), value.to_string());
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.attributes.borrow().get(name).cloned()
    }
}

#[cfg(target_arch = "wasm32")]
pub struct DocumentRoot;

#[cfg(target_arch = "wasm32")]
impl RootAttributes for DocumentRoot {
    fn set_attribute(&self, name: &str, value: &str) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        if let Some(html) = document.document_element() {
            let _ = html.set_attribute(name, value);
        }
        if let Some(body) = document.body() {
            let _ = body.set_attribute(name, value);
        }
    }

    fn attribute(&self, name: &str) -> Option<String> {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
            .and_then(|html| html.get_attribute(name))
    }
}

pub fn document_root() -> SharedRoot {
    #[cfg(target_arch = "wasm32")]
    {
        Rc::new(DocumentRoot)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Rc::new(DetachedRoot::default())
    }
}

pub fn prefers_dark_scheme() -> Option<bool> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok())
            .flatten()
            .map(|m| m.matches())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

#[cfg(target_arch = "wasm32")]
pub mod listeners {
    use wasm_bindgen::{closure::Closure, JsCast};

    /// Document-level event listener that detaches itself when dropped.
    pub struct DocumentListener {
        event: &'static str,
        closure: Closure<dyn FnMut(web_sys::Event)>,
    }

    impl DocumentListener {
        pub fn attach(event: &'static str, handler: impl FnMut(web_sys::Event) + 'static) -> Option<Self> {
            let document = web_sys::window()?.document()?;
            let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
            document
                .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
                .ok()?;
            Some(Self { event, closure })
        }
    }

    impl Drop for DocumentListener {
        fn drop(&mut self) {
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                let _ = document.remove_event_listener_with_callback(
                    self.event,
                    self.closure.as_ref().unchecked_ref(),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detached_root_records_attributes() {
        let root = DetachedRoot::default();
        assert!(root.attribute("data-theme").is_none());
        root.set_attribute("data-theme", "light");
        assert_eq!(root.attribute("data-theme").as_deref(), Some("light"));
    }
}
