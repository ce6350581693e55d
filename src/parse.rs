use super::pattern::{Node, Neighbours};
use super::token::{Condition, Token, Transform};
use smallvec::SmallVec;
use tracing::trace;

const MAX_NESTING: usize = u8::MAX as usize;

/// Scan a pattern into tokens, resolving escapes and pairing brackets.
///
/// Brackets pair with the nearest unmatched opener. A `)` with nothing to
/// close, or a `(` that is never closed, becomes a literal, as does any `(`
/// nested deeper than `MAX_NESTING`.
pub(crate) fn tokenize(pattern: &str) -> Vec<Token> {
    let mut tokens = Vec::with_capacity(pattern.len());
    let mut open: SmallVec<[usize; 8]> = SmallVec::new();
    let mut chars = pattern.chars();

    while let Some(c) = chars.next() {
        let token = match c {
            '\\' => Token::Literal(chars.next().unwrap_or('\\')),
            '(' if open.len() >= MAX_NESTING => Token::Literal('('),
            '(' => {
                open.push(tokens.len());
                // Patched once the matching close is found
                Token::Open { close: 0 }
            }
            ')' => match open.pop() {
                Some(start) => {
                    tokens[start] = Token::Open {
                        close: tokens.len(),
                    };
                    Token::Close
                }
                None => {
                    trace!(pattern, "unmatched ')' kept as text");
                    Token::Literal(')')
                }
            },
            c => Token::classify(c),
        };
        tokens.push(token);
    }

    for start in open {
        trace!(pattern, "unclosed '(' kept as text");
        tokens[start] = Token::Literal('(');
    }

    tokens
}

pub(crate) fn parse(pattern: &str) -> Vec<Node> {
    let tokens = tokenize(pattern);
    let mut op = ParseOp {
        tokens: &tokens,
        pos: 0,
    };
    op.sequence(tokens.len())
        .into_iter()
        .map(|(node, _)| node)
        .collect()
}

/// A parsed node and the height of its tree.
type Unit = (Node, usize);

fn max_height(units: &[Unit]) -> usize {
    units.iter().map(|&(_, height)| height).max().unwrap_or(0)
}

struct ParseOp<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> ParseOp<'a> {
    /// Parse everything up to (not including) `end`. Operators combine with
    /// the unit already parsed to their left, so chains associate left.
    fn sequence(&mut self, end: usize) -> Vec<Unit> {
        let mut units = Vec::new();

        while self.pos < end {
            match self.tokens[self.pos] {
                Token::Condition(condition) => {
                    self.pos += 1;
                    self.conditional(condition, &mut units, end);
                }
                Token::Alternation => {
                    self.pos += 1;
                    self.alternation(&mut units, end);
                }
                _ => {
                    if let Some(unit) = self.unit(end) {
                        units.push(unit);
                    }
                }
            }
        }

        units
    }

    /// Parse a single unit: a literal, component, separator, group, or a run
    /// of transforms with their operand. Operators aren't units; at one (or at
    /// `end`) nothing is consumed.
    fn unit(&mut self, end: usize) -> Option<Unit> {
        if self.pos >= end {
            return None;
        }

        let unit = match self.tokens[self.pos] {
            Token::Condition(_) | Token::Alternation => return None,
            Token::Literal(c) => {
                self.pos += 1;
                (Node::char(c), 1)
            }
            Token::Close => {
                // Only reachable for a close outside the range being parsed
                self.pos += 1;
                (Node::char(')'), 1)
            }
            Token::Component(component) => {
                self.pos += 1;
                (Node::Component(component), 1)
            }
            Token::Separator(separator) => {
                self.pos += 1;
                (Node::Separator(separator), 1)
            }
            Token::Open { close } => {
                self.pos += 1;
                let children = self.sequence(close.min(end));
                self.pos = close + 1;
                let height = max_height(&children) + 1;
                (Node::Group(children.into_iter().map(|(node, _)| node).collect()), height)
            }
            Token::Transform(_) => {
                let mut pipeline: SmallVec<[Transform; 2]> = SmallVec::new();
                while self.pos < end {
                    if let Token::Transform(transform) = self.tokens[self.pos] {
                        pipeline.push(transform);
                        self.pos += 1;
                    } else {
                        break;
                    }
                }

                match self.unit(end) {
                    Some((operand, height)) => (
                        Node::Modifier {
                            pipeline,
                            operand: Box::new(operand),
                        },
                        height + 1,
                    ),
                    None => {
                        trace!("transform without operand kept as text");
                        (Node::literal(pipeline.iter().map(|t| t.letter()).collect::<String>()), 1)
                    }
                }
            }
        };

        Some(unit)
    }

    /// A conditional that would make the tree deeper than `MAX_NESTING` is
    /// not built; its operator is kept as text and its units stay in the
    /// sequence, as for an unmatched bracket.
    fn conditional(&mut self, condition: Condition, units: &mut Vec<Unit>, end: usize) {
        let (literal, literal_height) = match self.unit(end) {
            Some(literal) => literal,
            None => {
                trace!("conditional without literal kept as text");
                units.push((Node::char(condition.symbol()), 1));
                return;
            }
        };

        let after = self.unit(end);
        let before = if condition.uses_previous() {
            units.pop()
        } else {
            None
        };

        let height = 1 + before
            .iter()
            .chain(after.iter())
            .map(|&(_, height)| height)
            .fold(literal_height, usize::max);

        if height > MAX_NESTING {
            trace!("conditional nested too deeply kept as text");
            units.extend(before);
            units.push((Node::char(condition.symbol()), 1));
            units.push((literal, literal_height));
            units.extend(after);
            return;
        }

        let node = Node::Conditional {
            condition,
            literal: Box::new(literal),
            neighbours: Neighbours {
                before: before.map(|(node, _)| Box::new(node)),
                after: after.map(|(node, _)| Box::new(node)),
            },
        };
        units.push((node, height));
    }

    fn alternation(&mut self, units: &mut Vec<Unit>, end: usize) {
        let (next, next_height) = match self.unit(end) {
            Some(next) => next,
            None => {
                trace!("alternation without alternative kept as text");
                units.push((Node::char('|'), 1));
                return;
            }
        };

        let (previous, previous_height) = match units.pop() {
            Some(previous) => previous,
            None => {
                units.push((next, next_height));
                return;
            }
        };

        // A chain grows wider, not deeper
        let height = match previous {
            Node::Fallback(_) => previous_height.max(next_height + 1),
            _ => previous_height.max(next_height) + 1,
        };

        if height > MAX_NESTING {
            trace!("alternation nested too deeply kept as text");
            units.push((previous, previous_height));
            units.push((Node::char('|'), 1));
            units.push((next, next_height));
            return;
        }

        let chain = match previous {
            Node::Fallback(mut chain) => {
                chain.push(next);
                chain
            }
            node => vec![node, next],
        };
        units.push((Node::Fallback(chain), height));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::{Component, Separator};

    fn given() -> Node {
        Node::Component(Component::Given)
    }

    fn family() -> Node {
        Node::Component(Component::Family)
    }

    fn sep1() -> Node {
        Node::Separator(Separator::First)
    }

    #[test]
    fn brackets_pair_with_nearest() {
        let tokens = tokenize("((g)");
        assert_eq!(Token::Literal('('), tokens[0]);
        assert_eq!(Token::Open { close: 3 }, tokens[1]);
        assert_eq!(Token::Close, tokens[3]);
    }

    #[test]
    fn bracket_recovery() {
        assert_eq!(
            vec![
                Node::Group(vec![given()]),
                Node::char(')'),
                Node::Group(vec![]),
                Node::char('('),
            ],
            parse("(g))()(")
        );
    }

    #[test]
    fn escapes() {
        assert_eq!(vec![Node::char('g'), Node::char('(')], parse("\\g\\("));
        assert_eq!(vec![given(), Node::char('\\')], parse("g\\"));
    }

    #[test]
    fn plain_sequence() {
        assert_eq!(vec![given(), Node::char(' '), family()], parse("g f"));
        assert!(parse("").is_empty());
    }

    #[test]
    fn modifier_pipeline() {
        assert_eq!(
            vec![Node::Modifier {
                pipeline: SmallVec::from_slice(&[Transform::Lowercase, Transform::CapitalizeFirst]),
                operand: Box::new(given()),
            }],
            parse("LFg")
        );
    }

    #[test]
    fn modifier_takes_group() {
        assert_eq!(
            vec![Node::Modifier {
                pipeline: SmallVec::from_slice(&[Transform::Uppercase]),
                operand: Box::new(Node::Group(vec![given(), sep1(), family()])),
            }],
            parse("U(gif)")
        );
    }

    #[test]
    fn dangling_modifier() {
        assert_eq!(vec![given(), Node::literal("UL")], parse("gUL"));
        assert_eq!(
            vec![Node::Group(vec![given(), Node::literal("T")])],
            parse("(gT)")
        );
    }

    #[test]
    fn both_non_empty() {
        assert_eq!(
            vec![Node::Conditional {
                condition: Condition::BothNonEmpty,
                literal: Box::new(sep1()),
                neighbours: Neighbours {
                    before: Some(Box::new(given())),
                    after: Some(Box::new(family())),
                },
            }],
            parse("g+if")
        );
    }

    #[test]
    fn next_conditions_leave_previous_alone() {
        let nodes = parse("g=if");
        assert_eq!(2, nodes.len());
        assert_eq!(given(), nodes[0]);
        assert!(matches!(
            &nodes[1],
            Node::Conditional { condition: Condition::IfNextNonEmpty, neighbours: Neighbours { before: None, after: Some(_) }, .. }
        ));

        let nodes = parse("g^if");
        assert!(matches!(
            &nodes[1],
            Node::Conditional { condition: Condition::IfNextEmpty, .. }
        ));
    }

    #[test]
    fn conditionals_associate_left() {
        let nodes = parse("t+ig+if");
        assert_eq!(1, nodes.len());
        match &nodes[0] {
            Node::Conditional { neighbours, .. } => {
                assert!(matches!(
                    neighbours.before.as_deref(),
                    Some(Node::Conditional { .. })
                ));
                assert_eq!(Some(&family()), neighbours.after.as_deref());
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn dangling_conditionals() {
        assert_eq!(vec![given(), Node::char('+')], parse("g+"));
        assert_eq!(
            vec![Node::Conditional {
                condition: Condition::BothNonEmpty,
                literal: Box::new(sep1()),
                neighbours: Neighbours::default(),
            }],
            parse("+i")
        );
    }

    #[test]
    fn fallback_chains_flatten() {
        assert_eq!(
            vec![Node::Fallback(vec![
                Node::Component(Component::Preferred),
                given(),
                family()
            ])],
            parse("q|g|f")
        );
        assert_eq!(vec![given()], parse("|g"));
        assert_eq!(vec![given(), Node::char('|')], parse("g|"));
    }

    fn height(node: &Node) -> usize {
        match node {
            Node::Group(children) | Node::Fallback(children) => 1 + children.iter().map(height).max().unwrap_or(0),
            Node::Modifier { operand, .. } => 1 + height(operand),
            Node::Conditional { literal, neighbours, .. } => {
                let units = neighbours.before.iter().chain(neighbours.after.iter());
                1 + units.map(|n| height(n)).fold(height(literal), usize::max)
            }
            _ => 1,
        }
    }

    #[test]
    fn long_chains_stay_shallow() {
        for link in ["+ig", "+ig|f", "+i(g|f)"] {
            let pattern = format!("g{}", link.repeat(1_000));
            let nodes = parse(&pattern);
            assert!(nodes.len() > 1, "{}", link);
            assert!(nodes.iter().all(|n| height(n) <= MAX_NESTING), "{}", link);
            assert!(nodes.contains(&Node::char('+')), "{}", link);
        }
    }

    #[test]
    fn short_chains_are_not_limited() {
        let pattern = format!("g{}", "+ig".repeat(MAX_NESTING - 2));
        let nodes = parse(&pattern);
        assert_eq!(1, nodes.len());
        assert_eq!(MAX_NESTING - 1, height(&nodes[0]));
    }

    #[test]
    fn operators_inside_groups_stop_at_close() {
        assert_eq!(
            vec![Node::Group(vec![given(), Node::char('+')]), family()],
            parse("(g+)f")
        );
    }
}
