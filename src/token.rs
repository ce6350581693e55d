use super::record::Key;

/// A letter that renders data from the name record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    /// `t`
    Title,
    /// `g`
    Given,
    /// `m`
    Middle,
    /// `f`
    Family,
    /// `c`
    Credentials,
    /// `s`
    Generational,
    /// `p`: preferred, falling back to given
    PreferredOrGiven,
    /// `q`
    Preferred,
    /// `a`
    Alternative,
    /// `x`
    GivenInitial,
    /// `y`
    MiddleInitial,
    /// `z`
    FamilyInitial,
    /// `w`: first letter of preferred, falling back to given
    PreferredOrGivenInitial,
    /// `v`
    PreferredInitial,
    /// `A`
    AlternativeInitial,
    /// `d`
    PreferredOrFamily,
    /// `D`
    FamilyOrPreferred,
    /// `e`
    GivenOrFamily,
    /// `E`
    FamilyOrGiven,
    /// `I`: initials of given and family names
    GivenFamilyInitials,
    /// `J`: initials of given, middle and family names
    FullInitials,
    /// `K`
    GivenInitials,
    /// `M`: initials of given and middle names
    GivenMiddleInitials,
}

/// Where a component's text comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// The first non-empty value among the keys
    Value(&'static [Key]),
    /// The first character of the first non-empty value among the keys
    FirstLetter(&'static [Key]),
    /// Upper-cased initials of every non-empty value among the keys
    Initials(&'static [Key]),
}

impl Component {
    pub fn from_letter(c: char) -> Option<Component> {
        use Component::*;

        let component = match c {
            't' => Title,
            'g' => Given,
            'm' => Middle,
            'f' => Family,
            'c' => Credentials,
            's' => Generational,
            'p' => PreferredOrGiven,
            'q' => Preferred,
            'a' => Alternative,
            'x' => GivenInitial,
            'y' => MiddleInitial,
            'z' => FamilyInitial,
            'w' => PreferredOrGivenInitial,
            'v' => PreferredInitial,
            'A' => AlternativeInitial,
            'd' => PreferredOrFamily,
            'D' => FamilyOrPreferred,
            'e' => GivenOrFamily,
            'E' => FamilyOrGiven,
            'I' => GivenFamilyInitials,
            'J' => FullInitials,
            'K' => GivenInitials,
            'M' => GivenMiddleInitials,
            _ => return None,
        };
        Some(component)
    }

    pub fn letter(self) -> char {
        use Component::*;

        match self {
            Title => 't',
            Given => 'g',
            Middle => 'm',
            Family => 'f',
            Credentials => 'c',
            Generational => 's',
            PreferredOrGiven => 'p',
            Preferred => 'q',
            Alternative => 'a',
            GivenInitial => 'x',
            MiddleInitial => 'y',
            FamilyInitial => 'z',
            PreferredOrGivenInitial => 'w',
            PreferredInitial => 'v',
            AlternativeInitial => 'A',
            PreferredOrFamily => 'd',
            FamilyOrPreferred => 'D',
            GivenOrFamily => 'e',
            FamilyOrGiven => 'E',
            GivenFamilyInitials => 'I',
            FullInitials => 'J',
            GivenInitials => 'K',
            GivenMiddleInitials => 'M',
        }
    }

    pub fn source(self) -> Source {
        use Component::*;
        use Key::{Alternative as Alt, Family as Fam, Given as Giv, Middle as Mid, Preferred as Pref};

        match self {
            Title => Source::Value(&[Key::Title]),
            Given => Source::Value(&[Giv]),
            Middle => Source::Value(&[Mid]),
            Family => Source::Value(&[Fam]),
            Credentials => Source::Value(&[Key::Credentials]),
            Generational => Source::Value(&[Key::Generational]),
            PreferredOrGiven => Source::Value(&[Pref, Giv]),
            Preferred => Source::Value(&[Pref]),
            Alternative => Source::Value(&[Alt]),
            GivenInitial => Source::FirstLetter(&[Giv]),
            MiddleInitial => Source::FirstLetter(&[Mid]),
            FamilyInitial => Source::FirstLetter(&[Fam]),
            PreferredOrGivenInitial => Source::FirstLetter(&[Pref, Giv]),
            PreferredInitial => Source::FirstLetter(&[Pref]),
            AlternativeInitial => Source::FirstLetter(&[Alt]),
            PreferredOrFamily => Source::Value(&[Pref, Fam]),
            FamilyOrPreferred => Source::Value(&[Fam, Pref]),
            GivenOrFamily => Source::Value(&[Giv, Fam]),
            FamilyOrGiven => Source::Value(&[Fam, Giv]),
            GivenFamilyInitials => Source::Initials(&[Giv, Fam]),
            FullInitials => Source::Initials(&[Giv, Mid, Fam]),
            GivenInitials => Source::Initials(&[Giv]),
            GivenMiddleInitials => Source::Initials(&[Giv, Mid]),
        }
    }
}

/// `i`, `j` and `k` refer to the separators supplied in the settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Separator {
    First,
    Second,
    Third,
}

impl Separator {
    pub fn from_letter(c: char) -> Option<Separator> {
        match c {
            'i' => Some(Separator::First),
            'j' => Some(Separator::Second),
            'k' => Some(Separator::Third),
            _ => None,
        }
    }

    pub fn letter(self) -> char {
        match self {
            Separator::First => 'i',
            Separator::Second => 'j',
            Separator::Third => 'k',
        }
    }
}

/// A text transform applied to the rendered value of the following unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transform {
    /// `L`
    Lowercase,
    /// `U`
    Uppercase,
    /// `F`: first letter of the whole text
    CapitalizeFirst,
    /// `G`: first letter of every word
    CapitalizeWords,
    /// `T`: strip surrounding whitespace
    Trim,
    /// `S`: HTML-escape on output
    Sanitize,
    /// `B`
    FirstWord,
    /// `b`
    LastWord,
}

impl Transform {
    pub fn from_letter(c: char) -> Option<Transform> {
        let transform = match c {
            'L' => Transform::Lowercase,
            'U' => Transform::Uppercase,
            'F' => Transform::CapitalizeFirst,
            'G' => Transform::CapitalizeWords,
            'T' => Transform::Trim,
            'S' => Transform::Sanitize,
            'B' => Transform::FirstWord,
            'b' => Transform::LastWord,
            _ => return None,
        };
        Some(transform)
    }

    pub fn letter(self) -> char {
        match self {
            Transform::Lowercase => 'L',
            Transform::Uppercase => 'U',
            Transform::CapitalizeFirst => 'F',
            Transform::CapitalizeWords => 'G',
            Transform::Trim => 'T',
            Transform::Sanitize => 'S',
            Transform::FirstWord => 'B',
            Transform::LastWord => 'b',
        }
    }
}

/// When the literal of a conditional is inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Condition {
    /// `+`: the units on both sides are non-empty
    BothNonEmpty,
    /// `=`: the following unit is non-empty
    IfNextNonEmpty,
    /// `^`: the following unit is empty
    IfNextEmpty,
}

impl Condition {
    pub fn from_symbol(c: char) -> Option<Condition> {
        match c {
            '+' => Some(Condition::BothNonEmpty),
            '=' => Some(Condition::IfNextNonEmpty),
            '^' => Some(Condition::IfNextEmpty),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Condition::BothNonEmpty => '+',
            Condition::IfNextNonEmpty => '=',
            Condition::IfNextEmpty => '^',
        }
    }

    /// Does the literal get inserted, given the emptiness of the units
    /// before and after it? A missing unit counts as empty.
    pub fn inserts(self, before_empty: bool, after_empty: bool) -> bool {
        match self {
            Condition::BothNonEmpty => !before_empty && !after_empty,
            Condition::IfNextNonEmpty => !after_empty,
            Condition::IfNextEmpty => after_empty,
        }
    }

    /// Whether the unit before the operator takes part in the test.
    pub fn uses_previous(self) -> bool {
        matches!(self, Condition::BothNonEmpty)
    }
}

/// One pattern character, after escapes and brackets are resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Token {
    Literal(char),
    Component(Component),
    Separator(Separator),
    Transform(Transform),
    Condition(Condition),
    Alternation,
    Open { close: usize },
    Close,
}

impl Token {
    /// Classify a character that is neither escaped nor a bracket.
    pub(crate) fn classify(c: char) -> Token {
        if let Some(component) = Component::from_letter(c) {
            Token::Component(component)
        } else if let Some(separator) = Separator::from_letter(c) {
            Token::Separator(separator)
        } else if let Some(transform) = Transform::from_letter(c) {
            Token::Transform(transform)
        } else if let Some(condition) = Condition::from_symbol(c) {
            Token::Condition(condition)
        } else if c == '|' {
            Token::Alternation
        } else {
            Token::Literal(c)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_round_trip() {
        for c in ('a'..='z').chain('A'..='Z') {
            if let Some(component) = Component::from_letter(c) {
                assert_eq!(c, component.letter());
            }
            if let Some(transform) = Transform::from_letter(c) {
                assert_eq!(c, transform.letter());
            }
            if let Some(separator) = Separator::from_letter(c) {
                assert_eq!(c, separator.letter());
            }
        }
    }

    #[test]
    fn alphabet_is_disjoint() {
        for c in ('a'..='z').chain('A'..='Z') {
            let kinds = [
                Component::from_letter(c).is_some(),
                Separator::from_letter(c).is_some(),
                Transform::from_letter(c).is_some(),
            ];
            assert!(kinds.iter().filter(|&&k| k).count() <= 1, "{} is ambiguous", c);
        }
    }

    #[test]
    fn classify() {
        assert_eq!(Token::Component(Component::Given), Token::classify('g'));
        assert_eq!(Token::Separator(Separator::Third), Token::classify('k'));
        assert_eq!(Token::Transform(Transform::LastWord), Token::classify('b'));
        assert_eq!(Token::Condition(Condition::IfNextEmpty), Token::classify('^'));
        assert_eq!(Token::Alternation, Token::classify('|'));
        assert_eq!(Token::Literal('h'), Token::classify('h'));
        assert_eq!(Token::Literal(','), Token::classify(','));
    }

    #[test]
    fn conditions_are_exhaustive() {
        for before_empty in [false, true] {
            for after_empty in [false, true] {
                assert_eq!(
                    !before_empty && !after_empty,
                    Condition::BothNonEmpty.inserts(before_empty, after_empty)
                );
                assert_ne!(
                    Condition::IfNextNonEmpty.inserts(before_empty, after_empty),
                    Condition::IfNextEmpty.inserts(before_empty, after_empty)
                );
            }
        }
    }
}
