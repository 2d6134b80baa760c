//! Indented XML rendering for inspecting encoded trees

use std::fmt::Write;

use super::{NodeId, NodeKind, Tree};

impl Tree {
    /// Render the tree below the document node as indented XML
    ///
    /// Attribute values and text are escaped; empty elements are
    /// self-closing.
    #[must_use]
    pub fn to_xml_string(&self) -> String {
        let mut out = String::new();
        for &child in self.children(self.document()) {
            self.render_node(child, 0, &mut out);
        }
        out
    }

    /// Render a single node and its subtree
    #[must_use]
    pub fn node_to_xml_string(&self, id: NodeId) -> String {
        let mut out = String::new();
        if self.kind(id) == NodeKind::Document {
            return self.to_xml_string();
        }
        self.render_node(id, 0, &mut out);
        out
    }

    fn render_node(&self, id: NodeId, depth: usize, out: &mut String) {
        let indent = "  ".repeat(depth);
        let tag = self.tag(id);
        let _ = write!(out, "{indent}<{tag}");
        for (name, value) in self.attributes(id) {
            let _ = write!(out, " {name}=\"{}\"", escape(value, true));
        }

        let children = self.children(id);
        match (self.text(id), children.is_empty()) {
            (None, true) => out.push_str("/>\n"),
            (Some(text), true) => {
                let _ = writeln!(out, ">{}</{tag}>", escape(text, false));
            }
            (text, false) => {
                out.push('>');
                if let Some(text) = text {
                    out.push_str(&escape(text, false));
                }
                out.push('\n');
                for &child in children {
                    self.render_node(child, depth + 1, out);
                }
                let _ = writeln!(out, "{indent}</{tag}>");
            }
        }
    }
}

fn escape(raw: &str, attribute: bool) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' if attribute => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_nested_elements_with_escaping() {
        let mut tree = Tree::new();
        let root = tree.create_element("root");
        let leaf = tree.create_element("note");
        let empty = tree.create_element("empty");
        tree.append_child(tree.document(), root);
        tree.append_child(root, leaf);
        tree.append_child(root, empty);
        tree.set_attribute(leaf, "datatype", "str");
        tree.set_text(leaf, "a < b & \"c\"");

        let xml = tree.to_xml_string();
        assert_eq!(
            xml,
            "<root>\n  <note datatype=\"str\">a &lt; b &amp; \"c\"</note>\n  <empty/>\n</root>\n"
        );
    }
}
