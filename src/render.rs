use super::markup::{escape_html, wrap_escaped, Markup};
use super::pattern::Node;
use super::record::{Key, NameRecord};
use super::segment::{first_character, initials};
use super::settings::Settings;
use super::token::{Component, Source};
use super::transform;
use compact_str::CompactString;
use smallvec::SmallVec;
use std::ops::Range;

/// A run of rendered text, remembering which name component (if any) it
/// came from so markup can be applied after transforms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Fragment {
    pub text: CompactString,
    pub key: Option<Key>,
    pub escape: bool,
}

/// The rendered value of a node. Fragments are never empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Rendered {
    pub fragments: SmallVec<[Fragment; 2]>,
}

impl Rendered {
    pub fn literal(text: &str) -> Rendered {
        let mut rendered = Rendered::default();
        rendered.push(text, None);
        rendered
    }

    pub fn component(text: &str, key: Key) -> Rendered {
        let mut rendered = Rendered::default();
        rendered.push(text, Some(key));
        rendered
    }

    pub fn push(&mut self, text: &str, key: Option<Key>) {
        if !text.is_empty() {
            self.fragments.push(Fragment {
                text: text.into(),
                key,
                escape: false,
            });
        }
    }

    pub fn append(&mut self, other: Rendered) {
        self.fragments.extend(other.fragments);
    }

    /// Blank text counts as empty.
    pub fn is_empty(&self) -> bool {
        self.fragments.iter().all(|f| f.text.trim().is_empty())
    }

    pub fn plain(&self) -> String {
        self.fragments.iter().map(|f| f.text.as_str()).collect()
    }

    /// Keep only the given byte range of the plain text, which must fall on
    /// character boundaries.
    pub fn slice(self, range: Range<usize>) -> Rendered {
        let mut result = Rendered::default();
        let mut offset = 0;

        for fragment in self.fragments {
            let start = offset;
            let end = offset + fragment.text.len();
            offset = end;

            let keep_start = range.start.max(start);
            let keep_end = range.end.min(end);
            if keep_start < keep_end {
                let text = &fragment.text[keep_start - start..keep_end - start];
                result.fragments.push(Fragment {
                    text: text.into(),
                    ..fragment
                });
            }
        }

        result
    }

    pub fn map_text<F>(self, mut f: F) -> Rendered
    where
        F: FnMut(&str) -> String,
    {
        let mut result = Rendered::default();
        for fragment in self.fragments {
            let text = f(&fragment.text);
            if !text.is_empty() {
                result.fragments.push(Fragment {
                    text: text.into(),
                    ..fragment
                });
            }
        }
        result
    }

    /// The final string, with escaping and markup applied.
    pub fn finish(self, markup: Markup) -> String {
        let mut out = String::new();

        for fragment in &self.fragments {
            match fragment.key {
                Some(key) if markup == Markup::Wrapped && !fragment.text.trim().is_empty() => {
                    out.push_str(&wrap_escaped(&escape_html(&fragment.text), key));
                }
                _ if fragment.escape => out.push_str(&escape_html(&fragment.text)),
                _ => out.push_str(&fragment.text),
            }
        }

        out
    }
}

pub(crate) struct Evaluator<'a> {
    record: &'a NameRecord,
    settings: &'a Settings,
}

impl<'a> Evaluator<'a> {
    pub fn new(record: &'a NameRecord, settings: &'a Settings) -> Evaluator<'a> {
        Evaluator { record, settings }
    }

    pub fn sequence(&self, nodes: &[Node]) -> Rendered {
        let mut result = Rendered::default();
        for node in nodes {
            result.append(self.node(node));
        }
        result
    }

    pub fn node(&self, node: &Node) -> Rendered {
        match node {
            Node::Literal(text) => Rendered::literal(text),
            Node::Component(component) => self.component(*component),
            Node::Separator(separator) => Rendered::literal(self.settings.separator(*separator)),
            Node::Group(children) => self.sequence(children),
            Node::Modifier { pipeline, operand } => pipeline
                .iter()
                .fold(self.node(operand), |value, &t| transform::apply(t, value)),
            Node::Conditional {
                condition,
                literal,
                neighbours,
            } => {
                let mut result = self.optional(neighbours.before.as_deref());
                let after = self.optional(neighbours.after.as_deref());

                if condition.inserts(result.is_empty(), after.is_empty()) {
                    result.append(self.node(literal));
                }
                result.append(after);
                result
            }
            Node::Fallback(chain) => {
                let mut last = Rendered::default();
                for child in chain {
                    last = self.node(child);
                    if !last.is_empty() {
                        break;
                    }
                }
                last
            }
        }
    }

    fn optional(&self, node: Option<&Node>) -> Rendered {
        node.map(|n| self.node(n)).unwrap_or_default()
    }

    fn first_value(&self, keys: &[Key]) -> Option<(&'a str, Key)> {
        keys.iter()
            .find_map(|&key| self.record.value(key).map(|value| (value, key)))
    }

    fn component(&self, component: Component) -> Rendered {
        match component.source() {
            Source::Value(keys) => match self.first_value(keys) {
                Some((value, key)) => Rendered::component(value, key),
                None => Rendered::default(),
            },
            Source::FirstLetter(keys) => {
                match self.first_value(keys).and_then(|(value, key)| Some((first_character(value)?, key))) {
                    Some((letter, key)) => Rendered::component(&letter, key),
                    None => Rendered::default(),
                }
            }
            Source::Initials(keys) => {
                let mut result = Rendered::default();
                for &key in keys {
                    if let Some(value) = self.record.value(key) {
                        result.push(&initials(value).to_uppercase(), Some(key));
                    }
                }
                result
            }
        }
    }
}
