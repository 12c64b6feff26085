//! Token value expressions.
//!
//! Leaf values are mostly opaque CSS literals, but token documents also use
//! alias references (`{color.primary.base}`) and simple arithmetic
//! (`{spacing.unit} * 2`), which have to be rewritten into `var()` and
//! `calc()` when the tokens are emitted as custom properties.

use itertools::Itertools;
use tracing::{debug, warn};

/// A terminal scalar inside a value expression, kept verbatim.
///
/// Colors are only distinguished so they can be validated; the original
/// text is what ends up in the stylesheet.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Color(String),
    Any(String),
}

impl Literal {
    fn as_css(&self) -> &str {
        match self {
            Literal::Color(raw) => raw,
            Literal::Any(raw) => raw,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ValueExpr {
    /// Alias reference to another token, path keys from the flatten root.
    Ref(Vec<String>),
    Mul(Box<ValueExpr>, Box<ValueExpr>),
    Div(Box<ValueExpr>, Box<ValueExpr>),
    Literal(Literal),
}

impl ValueExpr {
    pub fn literal(raw: impl Into<String>) -> Self {
        ValueExpr::Literal(Literal::Any(raw.into()))
    }

    /// Render under the given variable namespace (`--pgn-`, `--humain-`).
    pub fn to_css(&self, namespace: &str) -> String {
        match self {
            ValueExpr::Ref(path) => {
                format!("var({namespace}{})", path.iter().join("-"))
            }
            ValueExpr::Mul(a, b) => {
                format!("calc({} * {})", a.to_css(namespace), b.to_css(namespace))
            }
            ValueExpr::Div(a, b) => {
                format!("calc({} / {})", a.to_css(namespace), b.to_css(namespace))
            }
            ValueExpr::Literal(lit) => lit.as_css().to_string(),
        }
    }

    /// The literal text, if the whole expression is a single literal.
    pub fn literal_text(&self) -> Option<&str> {
        match self {
            ValueExpr::Literal(lit) => Some(lit.as_css()),
            _ => None,
        }
    }

    fn validated(self) -> ValueExpr {
        match self {
            ValueExpr::Literal(Literal::Color(raw)) => {
                if csscolorparser::parse(&raw).is_err() {
                    warn!(value = %raw, "color literal does not parse as a CSS color");
                    ValueExpr::Literal(Literal::Any(raw))
                } else {
                    ValueExpr::Literal(Literal::Color(raw))
                }
            }
            ValueExpr::Mul(a, b) => ValueExpr::Mul(Box::new(a.validated()), Box::new(b.validated())),
            ValueExpr::Div(a, b) => ValueExpr::Div(Box::new(a.validated()), Box::new(b.validated())),
            other => other,
        }
    }
}

/// Parse a string token value.
///
/// Anything the grammar does not recognize is kept as one opaque literal;
/// a value must never be rejected just because it is unusual CSS.
pub fn parse_value(raw: &str) -> ValueExpr {
    match expr_parser::expr(raw) {
        Ok(expr) => expr.validated(),
        Err(err) => {
            debug!(value = raw, %err, "value does not match the expression grammar, keeping it verbatim");
            ValueExpr::literal(raw)
        }
    }
}

peg::parser! {
  grammar expr_parser() for str {
    rule _ = quiet!{[' ' | '\n' | '\t']*}


    pub(crate) rule expr() -> ValueExpr = precedence!{
        x:(@) _ "*" _ y:@ { ValueExpr::Mul(Box::new(x), Box::new(y)) }
        x:(@) _ "/" _ y:@ { ValueExpr::Div(Box::new(x), Box::new(y)) }
        --
        "{" v:($((!"}" !"." [_])*) ** ".") "}" { ValueExpr::Ref(v.iter().map(|x| x.to_string()).collect()) }
        "#" v:$(['a'..='z' | 'A'..='Z' | '0'..='9']*) { ValueExpr::Literal(Literal::Color(format!("#{v}"))) }
        v:$(['a'..='z' | 'A'..='Z' | '0'..='9' | '#' | '%' | '-' | '.' | ',' | '(' | ')' | '\'' | '"' | '_' | ' ']*) { ValueExpr::Literal(Literal::Any(v.to_string())) }
    }
  }
}

#[test]
fn test() {
    assert_eq!(
        parse_value("{color.primary}"),
        ValueExpr::Ref(vec!["color".to_string(), "primary".to_string()])
    );
    assert_eq!(
        parse_value("#ff00ff"),
        ValueExpr::Literal(Literal::Color("#ff00ff".to_string()))
    );
    assert_eq!(
        parse_value("90%"),
        ValueExpr::Literal(Literal::Any("90%".to_string()))
    );
    assert_eq!(
        parse_value("-90%"),
        ValueExpr::Literal(Literal::Any("-90%".to_string()))
    );
    assert_eq!(
        parse_value("ABC Diatype Variable"),
        ValueExpr::Literal(Literal::Any("ABC Diatype Variable".to_string()))
    );
    assert_eq!(
        parse_value("232.8300018310547"),
        ValueExpr::Literal(Literal::Any("232.8300018310547".to_string()))
    );

    assert_eq!(
        parse_value("{x} * {y}"),
        ValueExpr::Mul(
            Box::new(ValueExpr::Ref(vec!["x".to_string()])),
            Box::new(ValueExpr::Ref(vec!["y".to_string()])),
        )
    );
    assert_eq!(
        parse_value("{x}/5"),
        ValueExpr::Div(
            Box::new(ValueExpr::Ref(vec!["x".to_string()])),
            Box::new(ValueExpr::literal("5")),
        )
    );

    // Unrecognized syntax falls back to one opaque literal.
    assert_eq!(
        parse_value("url(https://cdn.example.com/x.woff2)"),
        ValueExpr::literal("url(https://cdn.example.com/x.woff2)")
    );
    // An invalid color is demoted to an opaque literal, text unchanged.
    assert_eq!(parse_value("#zz"), ValueExpr::literal("#zz"));
    assert_eq!(parse_value(""), ValueExpr::literal(""));
}

#[test]
fn test_to_css() {
    assert_eq!(
        parse_value("{color.primary.base}").to_css("--pgn-"),
        "var(--pgn-color-primary-base)"
    );
    assert_eq!(
        parse_value("{spacing.unit} * 2").to_css("--pgn-"),
        "calc(var(--pgn-spacing-unit) * 2)"
    );
    assert_eq!(
        parse_value("{spacing.unit}/2").to_css("--humain-"),
        "calc(var(--humain-spacing-unit) / 2)"
    );
    // Literal case is preserved byte for byte.
    assert_eq!(parse_value("#FF0000").to_css("--pgn-"), "#FF0000");
    assert_eq!(
        parse_value("rgba(10, 15, 13, 0.5)").to_css("--pgn-"),
        "rgba(10, 15, 13, 0.5)"
    );
}
