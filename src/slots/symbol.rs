//! Reel symbols and the pattern tokens payout rules are written in.
//!
//! Symbols are opaque labels ("red 7", "2 bar", "blank"). Wildcard classes only look at
//! well-known markers inside those labels, so an override table can introduce new symbols
//! without touching the matcher.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Label of the blank (non-paying filler) symbol.
pub const BLANK: &str = "blank";
/// Marker carried by every seven symbol.
pub const SEVEN_MARKER: &str = "7";
/// Marker carried by every bar symbol.
pub const BAR_MARKER: &str = "bar";

/// A symbol printed on a reel strip. Equality is by label.
#[derive(Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    pub fn new(label: impl Into<String>) -> Self {
        Symbol(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_blank(&self) -> bool {
        self.0 == BLANK
    }

    pub fn is_seven(&self) -> bool {
        self.0.contains(SEVEN_MARKER)
    }

    pub fn is_bar(&self) -> bool {
        self.0.contains(BAR_MARKER)
    }

    /// True if the symbol carries the colour marker or is the colour's bar.
    pub fn has_colour(&self, colour: Colour) -> bool {
        self.0.contains(colour.marker()) || self.0 == colour.bar()
    }
}

impl Clone for Symbol {
    fn clone(&self) -> Self {
        Symbol(self.0.clone())
    }

    // the analyzer overwrites one buffer per combination
    fn clone_from(&mut self, source: &Self) {
        self.0.clone_from(&source.0);
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Symbol {
    fn from(label: &str) -> Self {
        Symbol::new(label)
    }
}

impl From<String> for Symbol {
    fn from(label: String) -> Self {
        Symbol(label)
    }
}

/// Colour families recognised by the `any red` / `any white` / `any blue` wildcards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Colour {
    Red,
    White,
    Blue,
}

impl Colour {
    pub fn marker(self) -> &'static str {
        match self {
            Colour::Red => "red",
            Colour::White => "white",
            Colour::Blue => "blue",
        }
    }

    /// The bar symbol counted as this colour.
    pub fn bar(self) -> &'static str {
        match self {
            Colour::Red => "1 bar",
            Colour::White => "2 bar",
            Colour::Blue => "3 bar",
        }
    }
}

/// One position of a payout pattern.
///
/// Textual form (as used in table files): `any`, `any 7`, `any bar`, `any red`,
/// `any white`, `any blue`, `matching non-blank`. Any other text is an exact symbol.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PatternToken {
    Exact(Symbol),
    Any,
    AnySeven,
    AnyBar,
    AnyColour(Colour),
    /// Any non-blank symbol; two adjacent tokens of this kind also demand the symbols match.
    MatchingNonBlank,
}

impl PatternToken {
    pub fn parse(text: &str) -> Self {
        match text {
            "any" => PatternToken::Any,
            "any 7" => PatternToken::AnySeven,
            "any bar" => PatternToken::AnyBar,
            "any red" => PatternToken::AnyColour(Colour::Red),
            "any white" => PatternToken::AnyColour(Colour::White),
            "any blue" => PatternToken::AnyColour(Colour::Blue),
            "matching non-blank" => PatternToken::MatchingNonBlank,
            other => PatternToken::Exact(Symbol::new(other)),
        }
    }

    /// Position-wise check, without the adjacency refinement.
    pub fn accepts(&self, symbol: &Symbol) -> bool {
        match self {
            PatternToken::Exact(expected) => expected == symbol,
            PatternToken::Any => true,
            PatternToken::AnySeven => symbol.is_seven(),
            PatternToken::AnyBar => symbol.is_bar(),
            PatternToken::AnyColour(colour) => symbol.has_colour(*colour),
            PatternToken::MatchingNonBlank => !symbol.is_blank(),
        }
    }

    pub fn is_matching(&self) -> bool {
        matches!(self, PatternToken::MatchingNonBlank)
    }

    /// Literal text that reads like a wildcard but is not one of the known classes.
    /// Such a token only matches a symbol with exactly that label.
    pub fn is_suspicious_literal(&self) -> bool {
        match self {
            PatternToken::Exact(symbol) => {
                let s = symbol.as_str();
                s.starts_with("any ") || s.starts_with("matching ")
            }
            _ => false,
        }
    }
}

impl From<String> for PatternToken {
    fn from(text: String) -> Self {
        PatternToken::parse(&text)
    }
}

impl From<&str> for PatternToken {
    fn from(text: &str) -> Self {
        PatternToken::parse(text)
    }
}

impl From<PatternToken> for String {
    fn from(token: PatternToken) -> Self {
        token.to_string()
    }
}

impl fmt::Display for PatternToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternToken::Exact(symbol) => f.write_str(symbol.as_str()),
            PatternToken::Any => f.write_str("any"),
            PatternToken::AnySeven => f.write_str("any 7"),
            PatternToken::AnyBar => f.write_str("any bar"),
            PatternToken::AnyColour(colour) => write!(f, "any {}", colour.marker()),
            PatternToken::MatchingNonBlank => f.write_str("matching non-blank"),
        }
    }
}
