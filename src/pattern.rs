use super::error::Result;
use super::parse;
use super::record::NameRecord;
use super::render::Evaluator;
use super::settings::Settings;
use super::token::{Component, Condition, Separator, Transform};
use compact_str::CompactString;
use smallvec::SmallVec;
use tracing::trace;

/// A node of a compiled pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Verbatim text.
    Literal(CompactString),
    /// Data from the name record.
    Component(Component),
    /// One of the separators from the settings.
    Separator(Separator),
    /// The children of a `(`…`)` pair, rendered in order.
    Group(Vec<Node>),
    /// Transforms applied left to right to the rendered operand.
    Modifier {
        pipeline: SmallVec<[Transform; 2]>,
        operand: Box<Node>,
    },
    /// A literal inserted or suppressed depending on its neighbours, which
    /// render as usual around it.
    Conditional {
        condition: Condition,
        literal: Box<Node>,
        neighbours: Neighbours,
    },
    /// The first child that renders non-empty.
    Fallback(Vec<Node>),
}

/// The neighbouring units a conditional tests. A missing unit counts as
/// empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Neighbours {
    pub before: Option<Box<Node>>,
    pub after: Option<Box<Node>>,
}

impl Node {
    pub(crate) fn literal(text: impl Into<CompactString>) -> Node {
        Node::Literal(text.into())
    }

    pub(crate) fn char(c: char) -> Node {
        let mut buf = [0; 4];
        Node::Literal(CompactString::from(&*c.encode_utf8(&mut buf)))
    }
}

/// A compiled format pattern.
///
/// Compiling is pure and never fails, and the result holds no name data,
/// so one `Pattern` can render any number of records, from any number of
/// threads.
///
/// # Examples
/// ```
/// use name_format::{Key, NameRecord, Pattern, Settings};
///
/// let pattern = Pattern::compile("((((t+ig)+im)+if)+is)+jc");
/// let settings = Settings::default();
///
/// let record = NameRecord::new()
///     .with(Key::Title, "Dr")
///     .with(Key::Given, "Grace")
///     .with(Key::Family, "Hopper")
///     .with(Key::Credentials, "PhD");
/// assert_eq!("Dr Grace Hopper, PhD", pattern.render(&record, &settings));
///
/// let record = NameRecord::new().with(Key::Family, "Hopper");
/// assert_eq!("Hopper", pattern.render(&record, &settings));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    source: CompactString,
    nodes: Vec<Node>,
}

impl Pattern {
    pub fn compile(pattern: &str) -> Pattern {
        let nodes = parse::parse(pattern);
        trace!(pattern, nodes = nodes.len(), "compiled name pattern");

        Pattern {
            source: pattern.into(),
            nodes,
        }
    }

    /// Compile a pattern from raw bytes, which must be valid UTF-8.
    pub fn from_utf8(bytes: &[u8]) -> Result<Pattern> {
        let pattern = std::str::from_utf8(bytes)?;
        Ok(Pattern::compile(pattern))
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// The top-level nodes, rendered in order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn render(&self, record: &NameRecord, settings: &Settings) -> String {
        Evaluator::new(record, settings)
            .sequence(&self.nodes)
            .finish(settings.markup)
    }
}
