use std::collections::HashMap;

/// The slice of a page the helpers touch. Ids that do not exist are ignored.
pub trait Dom {
    fn set_display(&mut self, id: &str, display: &str);
    fn set_text(&mut self, id: &str, text: &str);
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub display: Option<String>,
    pub text: String,
}

/// In-memory page with a fixed set of element ids.
#[derive(Debug, Clone, Default)]
pub struct MemoryDom {
    elements: HashMap<String, Element>,
}

impl MemoryDom {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_elements<'a>(ids: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            elements: ids
                .into_iter()
                .map(|id| (id.to_string(), Element::default()))
                .collect(),
        }
    }

    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.get(id)
    }

    pub fn display(&self, id: &str) -> Option<&str> {
        self.element(id).and_then(|e| e.display.as_deref())
    }
}

impl Dom for MemoryDom {
    fn set_display(&mut self, id: &str, display: &str) {
        if let Some(element) = self.elements.get_mut(id) {
            element.display = Some(display.to_string());
        }
    }

    fn set_text(&mut self, id: &str, text: &str) {
        if let Some(element) = self.elements.get_mut(id) {
            element.text = text.to_string();
        }
    }
}
