use std::collections::HashMap;
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StyleId(u64);

/// An element mounted into the page body: its class attribute, inner markup,
/// and whatever inline styles the presenter sets on it.
#[derive(Debug, Clone)]
pub struct Node {
    pub class: String,
    pub html: String,
    pub inline_styles: HashMap<String, String>,
}

/// Headless stand-in for the host page the script runs inside.
///
/// The overlay's side effects on the page — injected style blocks, mounted
/// nodes, the body class freezing animations — are explicit mutations here,
/// so acquiring and releasing presentation resources is observable. Taking
/// `&mut Document` also makes the presenter's check-then-create sequence
/// exclusive: no second trigger can interleave with it.
#[derive(Debug)]
pub struct Document {
    url: Url,
    dataset: HashMap<String, String>,
    body_classes: Vec<String>,
    nodes: Vec<(NodeId, Node)>,
    styles: Vec<(StyleId, String)>,
    next_id: u64,
    layout_flushes: u64,
}

impl Document {
    pub fn new(url: Url) -> Self {
        Self {
            url,
            dataset: HashMap::new(),
            body_classes: Vec::new(),
            nodes: Vec::new(),
            styles: Vec::new(),
            next_id: 0,
            layout_flushes: 0,
        }
    }

    pub fn with_dataset(mut self, key: &str, value: &str) -> Self {
        self.set_dataset(key, value);
        self
    }

    /// Address of the page itself; the sidecar address derives from it.
    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn set_dataset(&mut self, key: &str, value: &str) {
        self.dataset.insert(key.to_string(), value.to_string());
    }

    pub fn dataset(&self, key: &str) -> Option<&str> {
        self.dataset.get(key).map(String::as_str)
    }

    pub fn append_style(&mut self, css: &str) -> StyleId {
        let id = StyleId(self.bump_id());
        self.styles.push((id, css.to_string()));
        id
    }

    pub fn remove_style(&mut self, id: StyleId) -> bool {
        let before = self.styles.len();
        self.styles.retain(|(style_id, _)| *style_id != id);
        self.styles.len() < before
    }

    pub fn style_count(&self) -> usize {
        self.styles.len()
    }

    pub fn append_node(&mut self, class: &str, html: &str) -> NodeId {
        let id = NodeId(self.bump_id());
        self.nodes.push((
            id,
            Node {
                class: class.to_string(),
                html: html.to_string(),
                inline_styles: HashMap::new(),
            },
        ));
        id
    }

    pub fn remove_node(&mut self, id: NodeId) -> bool {
        let before = self.nodes.len();
        self.nodes.retain(|(node_id, _)| *node_id != id);
        self.nodes.len() < before
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes
            .iter()
            .find(|(node_id, _)| *node_id == id)
            .map(|(_, node)| node)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn set_node_style(&mut self, id: NodeId, property: &str, value: &str) {
        if let Some((_, node)) = self.nodes.iter_mut().find(|(node_id, _)| *node_id == id) {
            node.inline_styles
                .insert(property.to_string(), value.to_string());
        }
    }

    pub fn has_node_with_class(&self, class: &str) -> bool {
        self.nodes.iter().any(|(_, node)| node.class == class)
    }

    pub fn add_body_class(&mut self, class: &str) {
        if !self.body_classes.iter().any(|c| c == class) {
            self.body_classes.push(class.to_string());
        }
    }

    pub fn remove_body_class(&mut self, class: &str) {
        self.body_classes.retain(|c| c != class);
    }

    pub fn body_has_class(&self, class: &str) -> bool {
        self.body_classes.iter().any(|c| c == class)
    }

    /// Forces a layout pass. The presenter calls this between mounting a
    /// node at opacity 0 and raising it to 1 so the CSS transition runs
    /// instead of snapping.
    pub fn flush_layout(&mut self) {
        self.layout_flushes += 1;
    }

    pub fn layout_flushes(&self) -> u64 {
        self.layout_flushes
    }

    fn bump_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}
