//! Route-template rendering between path-parameter grammars.
//!
//! # Responsibilities
//! - Render typed path components into a router template string
//! - Translate the generic bracket grammar (`{name}`) into a host grammar
//!
//! # Design Decisions
//! - Translation is purely syntactic; parameter names are not validated
//!   and unbalanced braces yield whatever naive substitution yields
//! - The renderer is parameterized by grammar because host routers
//!   disagree: axum uses `{name}`, dollar-brace hosts use `${name}`,
//!   colon hosts use `:name`

use std::fmt;

/// One component of a typed route path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouterPathComponent {
    /// Literal path segment.
    Constant(String),
    /// Named parameter capturing one path segment.
    Parameter(String),
}

impl RouterPathComponent {
    pub fn constant(segment: impl Into<String>) -> Self {
        Self::Constant(segment.into())
    }

    pub fn parameter(name: impl Into<String>) -> Self {
        Self::Parameter(name.into())
    }
}

/// Placeholder grammar used by a host router.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamStyle {
    /// `{name}` — axum's native grammar, identical to the generic one.
    Brace,
    /// `${name}` — prefix-dollar grammar.
    DollarBrace,
    /// `:name` — colon grammar.
    Colon,
}

impl ParamStyle {
    fn render(self, name: &str, out: &mut String) {
        match self {
            ParamStyle::Brace => {
                out.push('{');
                out.push_str(name);
                out.push('}');
            }
            ParamStyle::DollarBrace => {
                out.push_str("${");
                out.push_str(name);
                out.push('}');
            }
            ParamStyle::Colon => {
                out.push(':');
                out.push_str(name);
            }
        }
    }
}

impl fmt::Display for ParamStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let example = match self {
            ParamStyle::Brace => "{name}",
            ParamStyle::DollarBrace => "${name}",
            ParamStyle::Colon => ":name",
        };
        f.write_str(example)
    }
}

/// Render path components joined by `/` in the given grammar.
///
/// An empty component list renders as the empty string.
pub fn render_path(components: &[RouterPathComponent], style: ParamStyle) -> String {
    let mut rendered = String::new();
    for (index, component) in components.iter().enumerate() {
        if index > 0 {
            rendered.push('/');
        }
        match component {
            RouterPathComponent::Constant(segment) => rendered.push_str(segment),
            RouterPathComponent::Parameter(name) => style.render(name, &mut rendered),
        }
    }
    rendered
}

/// Translate a path template from the generic bracket grammar into the
/// given host grammar by textual substitution.
pub fn translate(path: &str, style: ParamStyle) -> String {
    match style {
        ParamStyle::Brace => path.to_owned(),
        ParamStyle::DollarBrace => path.replace('{', "${"),
        ParamStyle::Colon => path.replace('{', ":").replace('}', ""),
    }
}
