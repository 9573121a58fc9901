use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::foundation::core::{Rect, Vec2, Viewport};
use crate::foundation::error::{FolioError, FolioResult};
use crate::page::model::PageDef;

/// Handle to an element of a [`Document`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementId(pub(crate) usize);

/// Live state of one element.
#[derive(Debug, Clone)]
pub struct Element {
    pub(crate) id: Option<String>,
    pub(crate) tag: String,
    pub(crate) classes: BTreeSet<String>,
    pub(crate) text: String,
    pub(crate) attrs: BTreeMap<String, String>,
    pub(crate) rect: Rect,
    pub(crate) parent: Option<ElementId>,
    pub(crate) scale: f64,
    pub(crate) scroll: Vec2,
}

impl Element {
    /// Element id, if any.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Tag name.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Current text content.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Attribute value.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    /// Whether the class list contains `class`.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    /// Current class list in sorted order.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    /// Transform scale applied for emphasis.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Scroll offset of this element's content box.
    pub fn scroll(&self) -> Vec2 {
        self.scroll
    }
}

/// Element tree, viewport and window scroll of a running page.
#[derive(Debug, Clone)]
pub struct Document {
    elements: Vec<Element>,
    by_id: HashMap<String, ElementId>,
    viewport: Viewport,
    window_scroll: Vec2,
    notices: Vec<String>,
}

impl Document {
    /// Build the live document. Parents must appear before their children.
    pub fn from_def(def: &PageDef) -> FolioResult<Self> {
        def.viewport.validate()?;
        let mut elements = Vec::with_capacity(def.elements.len());
        let mut by_id = HashMap::new();
        for (i, e) in def.elements.iter().enumerate() {
            let parent = match &e.parent {
                Some(p) => Some(*by_id.get(p.as_str()).ok_or_else(|| {
                    FolioError::validation(format!(
                        "element #{i} ('{}') references unknown or later parent '{p}'",
                        e.tag
                    ))
                })?),
                None => None,
            };
            if let Some(id) = &e.id
                && by_id.insert(id.clone(), ElementId(i)).is_some()
            {
                return Err(FolioError::validation(format!("duplicate element id '{id}'")));
            }
            elements.push(Element {
                id: e.id.clone(),
                tag: e.tag.clone(),
                classes: e.classes.iter().cloned().collect(),
                text: e.text.clone(),
                attrs: e.attrs.clone(),
                rect: e.layout_rect(),
                parent,
                scale: 1.0,
                scroll: Vec2::ZERO,
            });
        }
        Ok(Self {
            elements,
            by_id,
            viewport: def.viewport,
            window_scroll: Vec2::ZERO,
            notices: Vec::new(),
        })
    }

    /// Borrow an element.
    pub fn get(&self, id: ElementId) -> &Element {
        &self.elements[id.0]
    }

    fn get_mut(&mut self, id: ElementId) -> &mut Element {
        &mut self.elements[id.0]
    }

    /// Look an element up by its id attribute.
    pub fn by_id(&self, id: &str) -> Option<ElementId> {
        self.by_id.get(id).copied()
    }

    /// Like [`Document::by_id`], but a missing element is a wiring error.
    pub fn require(&self, id: &str) -> FolioResult<ElementId> {
        self.by_id(id)
            .ok_or_else(|| FolioError::wiring(format!("required element '#{id}' is missing")))
    }

    /// First element with the given tag, in document order.
    pub fn first_by_tag(&self, tag: &str) -> Option<ElementId> {
        self.ids().find(|&id| self.get(id).tag == tag)
    }

    /// All elements in document order.
    pub fn ids(&self) -> impl Iterator<Item = ElementId> + '_ {
        (0..self.elements.len()).map(ElementId)
    }

    /// Elements carrying `class`, in document order.
    pub fn with_class(&self, class: &str) -> Vec<ElementId> {
        self.ids().filter(|&id| self.get(id).has_class(class)).collect()
    }

    /// Elements carrying attribute `name`, in document order.
    pub fn with_attr(&self, name: &str) -> Vec<ElementId> {
        self.ids()
            .filter(|&id| self.get(id).attrs.contains_key(name))
            .collect()
    }

    /// Direct children of `parent`, in document order.
    pub fn children(&self, parent: ElementId) -> Vec<ElementId> {
        self.ids()
            .filter(|&id| self.get(id).parent == Some(parent))
            .collect()
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the document has no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Add `class`; returns `true` when it was not present.
    pub fn add_class(&mut self, id: ElementId, class: &str) -> bool {
        self.get_mut(id).classes.insert(class.to_owned())
    }

    /// Remove `class`; returns `true` when it was present.
    pub fn remove_class(&mut self, id: ElementId, class: &str) -> bool {
        self.get_mut(id).classes.remove(class)
    }

    /// Force `class` on or off.
    pub fn toggle_class(&mut self, id: ElementId, class: &str, on: bool) {
        if on {
            self.add_class(id, class);
        } else {
            self.remove_class(id, class);
        }
    }

    /// Replace text content.
    pub fn set_text(&mut self, id: ElementId, text: impl Into<String>) {
        self.get_mut(id).text = text.into();
    }

    /// Set an attribute.
    pub fn set_attr(&mut self, id: ElementId, name: &str, value: impl Into<String>) {
        self.get_mut(id).attrs.insert(name.to_owned(), value.into());
    }

    /// Set the emphasis scale.
    pub fn set_scale(&mut self, id: ElementId, scale: f64) {
        self.get_mut(id).scale = scale;
    }

    /// Current viewport.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub(crate) fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        let clamped = self.clamp_window_scroll(self.window_scroll);
        self.window_scroll = clamped;
    }

    /// Window scroll offset.
    pub fn window_scroll(&self) -> Vec2 {
        self.window_scroll
    }

    /// Set the window scroll, clamped to the scrollable range.
    pub fn set_window_scroll(&mut self, offset: Vec2) {
        self.window_scroll = self.clamp_window_scroll(offset);
    }

    /// Set an element's content scroll, clamped to its scrollable range.
    pub fn set_element_scroll(&mut self, id: ElementId, offset: Vec2) {
        let range = self.scroll_range(id);
        self.get_mut(id).scroll = Vec2::new(
            offset.x.clamp(0.0, range.x),
            offset.y.clamp(0.0, range.y),
        );
    }

    /// Box of `id` in document coordinates, ignoring window scroll.
    pub fn document_rect(&self, id: ElementId) -> Rect {
        let el = self.get(id);
        let mut origin = Vec2::new(el.rect.x0, el.rect.y0);
        let mut cur = el.parent;
        while let Some(p) = cur {
            let parent = self.get(p);
            origin += Vec2::new(parent.rect.x0, parent.rect.y0) - parent.scroll;
            cur = parent.parent;
        }
        Rect::from_origin_size(origin.to_point(), el.rect.size())
    }

    /// Box of `id` relative to the viewport, like a bounding client rect.
    pub fn client_rect(&self, id: ElementId) -> Rect {
        self.document_rect(id) - self.window_scroll
    }

    /// Extent of the document: the union of top-level boxes and the viewport.
    pub fn document_size(&self) -> Vec2 {
        let mut w = f64::from(self.viewport.width);
        let mut h = f64::from(self.viewport.height);
        for el in self.elements.iter().filter(|e| e.parent.is_none()) {
            w = w.max(el.rect.x1);
            h = h.max(el.rect.y1);
        }
        Vec2::new(w, h)
    }

    /// Maximum window scroll offset on each axis.
    pub fn max_window_scroll(&self) -> Vec2 {
        let size = self.document_size();
        Vec2::new(
            (size.x - f64::from(self.viewport.width)).max(0.0),
            (size.y - f64::from(self.viewport.height)).max(0.0),
        )
    }

    fn clamp_window_scroll(&self, offset: Vec2) -> Vec2 {
        let max = self.max_window_scroll();
        Vec2::new(offset.x.clamp(0.0, max.x), offset.y.clamp(0.0, max.y))
    }

    /// Scrollable range of an element's content box: children extent minus own size.
    pub fn scroll_range(&self, id: ElementId) -> Vec2 {
        let el = self.get(id);
        let mut w: f64 = 0.0;
        let mut h: f64 = 0.0;
        for child in self.children(id) {
            let r = self.get(child).rect;
            w = w.max(r.x1);
            h = h.max(r.y1);
        }
        Vec2::new(
            (w - el.rect.width()).max(0.0),
            (h - el.rect.height()).max(0.0),
        )
    }

    /// Record a user-visible notice (the headless stand-in for an alert box).
    pub fn push_notice(&mut self, msg: impl Into<String>) {
        self.notices.push(msg.into());
    }

    /// Notices in emission order.
    pub fn notices(&self) -> &[String] {
        &self.notices
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/document.rs"]
mod tests;
