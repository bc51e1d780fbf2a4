//! Secret rendering
//!
//! Documents are rendered as text before they are parsed, so placeholders may
//! appear anywhere, including inside JSON strings. The template language is
//! deliberately small:
//!
//! | placeholder                  | value                                   |
//! |------------------------------|-----------------------------------------|
//! | `{{ .Environment }}`         | environment name                        |
//! | `{{ .System }}`              | system name                             |
//! | `{{ .Component }}`           | component name                          |
//! | `{{ .Env.NAME }}`            | captured variable `NAME`, empty if unset |
//! | `{{ index .Env "NAME" }}`    | same, for names that are not identifiers |
//! | `{{ "text" }}`               | the literal                              |
//! | `{{/* note */}}`             | nothing                                  |
//!
//! `{{-` and `-}}` trim the whitespace before and after an action. Any other
//! field or function is an error.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

const OPEN: &str = "{{";
const COMMENT_OPEN: &str = "/*";
const COMMENT_CLOSE: &str = "*/";
const TRIM_SPACE: [char; 4] = [' ', '\t', '\r', '\n'];

/// One action: `{{`, an optional `- ` trim marker, then either a comment or
/// a body (quoted strings may contain `}}`), an optional ` -` marker and `}}`.
static ACTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"\{\{(?<open>-[ \t\r\n])?",
        r"(?s:(?<comment>/\*.*?\*/)",
        r#"|(?<body>(?:"(?:\\.|[^"\\])*"|`[^`]*`|[^"`}]|\}[^}])*?))"#,
        r"(?<close>[ \t\r\n]-)?\}\}",
    ))
    .expect("Invalid action regex")
});

/// Tokens inside an action body. `other` catches anything unexpected.
static TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?<space>[ \t\r\n]+)",
        r"|(?<field>\.(?:[\p{L}_][\p{L}\p{N}_]*(?:\.[\p{L}_][\p{L}\p{N}_]*)*)?)",
        r"|(?<ident>[\p{L}_][\p{L}\p{N}_]*)",
        r#"|(?<quoted>"(?:\\.|[^"\\])*")"#,
        r"|`(?<raw>[^`]*)`",
        r"|(?s:(?<other>.))",
    ))
    .expect("Invalid token regex")
});

/// Values visible to templates. Captured once per provider.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Context {
    pub environment: String,
    pub system: String,
    pub component: String,
    pub env: BTreeMap<String, String>,
}

impl Context {
    pub fn new(
        environment: impl Into<String>,
        system: impl Into<String>,
        component: impl Into<String>,
    ) -> Self {
        Self {
            environment: environment.into(),
            system: system.into(),
            component: component.into(),
            env: BTreeMap::new(),
        }
    }

    pub fn with_env(mut self, env: BTreeMap<String, String>) -> Self {
        self.env = env;
        self
    }

    fn variable(&self, name: &str) -> &str {
        self.env.get(name).map(String::as_str).unwrap_or_default()
    }
}

/// Template parse and execution errors. Lines are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("line {line}: unclosed action")]
    UnclosedAction { line: usize },

    #[error("line {line}: unclosed comment")]
    UnclosedComment { line: usize },

    #[error("line {line}: missing value for command")]
    EmptyAction { line: usize },

    #[error("line {line}: unexpected {token} in action")]
    Unexpected { line: usize, token: String },

    #[error("line {line}: function {name:?} not defined")]
    UnknownFunction { line: usize, name: String },

    #[error("line {line}: wrong arguments for {name}")]
    WrongArguments { line: usize, name: &'static str },

    #[error("line {line}: can't evaluate field {field}")]
    UnknownField { line: usize, field: String },

    #[error("line {line}: {field} is not a value that can be printed")]
    NotPrintable { line: usize, field: String },

    #[error("line {line}: can't index {field}, it is not a map")]
    NotAMap { line: usize, field: String },
}

/// How substituted values are written into the output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Escape {
    /// Values are written verbatim.
    #[default]
    Raw,
    /// Values are escaped as JSON string content, so a substitution can
    /// never end a string early or inject structure.
    Json,
}

impl Escape {
    fn write(self, out: &mut String, value: &str) {
        match self {
            Self::Raw => out.push_str(value),
            Self::Json => {
                let quoted = Value::from(value).to_string();
                out.push_str(&quoted[1..quoted.len() - 1]);
            }
        }
    }
}

/// A parsed template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    nodes: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Node {
    Text(String),
    Action { line: usize, expr: Expr },
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Expr {
    /// `.A.B`; empty for the bare dot.
    Field(Vec<String>),
    Index { target: Vec<String>, key: String },
    Literal(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Field(Vec<String>),
    Ident(String),
    Str(String),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(path) => write!(f, "field .{}", path.join(".")),
            Self::Ident(name) => write!(f, "identifier {name}"),
            Self::Str(value) => write!(f, "string {value:?}"),
        }
    }
}

impl Template {
    pub fn parse(text: &str) -> Result<Self, RenderError> {
        let mut nodes = Vec::new();
        let mut cursor = 0;
        let mut line = 1;
        let mut trim_leading = false;

        for caps in ACTION.captures_iter(text) {
            let Some(action) = caps.get(0) else {
                continue;
            };
            let mut literal = &text[cursor..action.start()];
            check_unclosed(literal, line)?;
            let action_line = line + count_lines(literal);

            if trim_leading {
                literal = literal.trim_start();
            }
            if caps.name("open").is_some() {
                literal = literal.trim_end();
            }
            push_text(&mut nodes, literal);

            if let Some(body) = caps.name("body").map(|m| m.as_str()) {
                if body.starts_with(COMMENT_OPEN) && !body.contains(COMMENT_CLOSE) {
                    return Err(RenderError::UnclosedComment { line: action_line });
                }
                let expr = parse_expr(tokenize(body, action_line)?, action_line)?;
                nodes.push(Node::Action {
                    line: action_line,
                    expr,
                });
            }

            trim_leading = caps.name("close").is_some();
            line = action_line + count_lines(action.as_str());
            cursor = action.end();
        }

        let mut rest = &text[cursor..];
        check_unclosed(rest, line)?;
        if trim_leading {
            rest = rest.trim_start();
        }
        push_text(&mut nodes, rest);
        Ok(Self { nodes })
    }

    pub fn execute(&self, context: &Context, escape: Escape) -> Result<String, RenderError> {
        let mut out = String::new();
        for node in &self.nodes {
            match node {
                Node::Text(text) => out.push_str(text),
                Node::Action { line, expr } => escape.write(&mut out, expr.evaluate(context, *line)?),
            }
        }
        Ok(out)
    }
}

/// Render `text` strictly, writing values verbatim.
pub fn render(text: &str, context: &Context) -> Result<String, RenderError> {
    Template::parse(text)?.execute(context, Escape::Raw)
}

/// Render a JSON document strictly, escaping values as string content.
pub fn render_document(text: &str, context: &Context) -> Result<String, RenderError> {
    Template::parse(text)?.execute(context, Escape::Json)
}

/// Render `text`, returning it unchanged on any error.
pub fn render_best_effort(text: &str, context: &Context) -> String {
    render(text, context).unwrap_or_else(|_| text.to_string())
}

impl Expr {
    fn evaluate<'a>(&'a self, context: &'a Context, line: usize) -> Result<&'a str, RenderError> {
        match self {
            Self::Literal(value) => Ok(value),
            Self::Field(path) => lookup(context, path, line),
            Self::Index { target, key } => match target.as_slice() {
                [env] if env == "Env" => Ok(context.variable(key)),
                _ => Err(RenderError::NotAMap {
                    line,
                    field: dotted(target),
                }),
            },
        }
    }
}

fn lookup<'a>(context: &'a Context, path: &[String], line: usize) -> Result<&'a str, RenderError> {
    match path {
        [] => Err(RenderError::NotPrintable {
            line,
            field: ".".to_string(),
        }),
        [field] => match field.as_str() {
            "Environment" => Ok(&context.environment),
            "System" => Ok(&context.system),
            "Component" => Ok(&context.component),
            "Env" => Err(RenderError::NotPrintable {
                line,
                field: ".Env".to_string(),
            }),
            _ => Err(RenderError::UnknownField {
                line,
                field: field.clone(),
            }),
        },
        [env, key] if env == "Env" => Ok(context.variable(key)),
        [first, second, ..] => {
            // The first segment that does not resolve.
            let field = match first.as_str() {
                "Environment" | "System" | "Component" => second,
                "Env" => &path[2],
                _ => first,
            };
            Err(RenderError::UnknownField {
                line,
                field: field.clone(),
            })
        }
    }
}

/// Reject a `{{` left in literal text: an action that never closed.
fn check_unclosed(text: &str, line: usize) -> Result<(), RenderError> {
    let Some(start) = text.find(OPEN) else {
        return Ok(());
    };
    let line = line + count_lines(&text[..start]);
    let after = &text[start + OPEN.len()..];
    let after = match after.strip_prefix('-') {
        Some(marked) if marked.starts_with(TRIM_SPACE) => &marked[1..],
        _ => after,
    };
    if after.starts_with(COMMENT_OPEN) {
        Err(RenderError::UnclosedComment { line })
    } else {
        Err(RenderError::UnclosedAction { line })
    }
}

fn tokenize(source: &str, line: usize) -> Result<Vec<Token>, RenderError> {
    let mut tokens = Vec::new();
    for caps in TOKEN.captures_iter(source) {
        if let Some(field) = caps.name("field") {
            let path = &field.as_str()[1..];
            tokens.push(Token::Field(if path.is_empty() {
                Vec::new()
            } else {
                path.split('.').map(str::to_string).collect()
            }));
        } else if let Some(ident) = caps.name("ident") {
            tokens.push(Token::Ident(ident.as_str().to_string()));
        } else if let Some(quoted) = caps.name("quoted") {
            // Quoted literals share JSON's escape rules.
            let value = serde_json::from_str(quoted.as_str()).map_err(|_| RenderError::Unexpected {
                line,
                token: format!("string {}", quoted.as_str()),
            })?;
            tokens.push(Token::Str(value));
        } else if let Some(raw) = caps.name("raw") {
            tokens.push(Token::Str(raw.as_str().to_string()));
        } else if let Some(other) = caps.name("other") {
            return Err(RenderError::Unexpected {
                line,
                token: other.as_str().chars().map(|c| format!("{c:?}")).collect(),
            });
        }
    }
    Ok(tokens)
}

fn parse_expr(tokens: Vec<Token>, line: usize) -> Result<Expr, RenderError> {
    let mut tokens = tokens.into_iter();
    let Some(head) = tokens.next() else {
        return Err(RenderError::EmptyAction { line });
    };
    let args: Vec<Token> = tokens.collect();

    match head {
        Token::Ident(name) if name == "index" => match <[Token; 2]>::try_from(args) {
            Ok([Token::Field(target), Token::Str(key)]) => Ok(Expr::Index { target, key }),
            _ => Err(RenderError::WrongArguments {
                line,
                name: "index",
            }),
        },
        Token::Ident(name) => Err(RenderError::UnknownFunction { line, name }),
        Token::Field(path) => no_arguments(args, line).map(|()| Expr::Field(path)),
        Token::Str(value) => no_arguments(args, line).map(|()| Expr::Literal(value)),
    }
}

fn no_arguments(args: Vec<Token>, line: usize) -> Result<(), RenderError> {
    match args.into_iter().next() {
        Some(extra) => Err(RenderError::Unexpected {
            line,
            token: extra.to_string(),
        }),
        None => Ok(()),
    }
}

fn push_text(nodes: &mut Vec<Node>, text: &str) {
    if !text.is_empty() {
        nodes.push(Node::Text(text.to_string()));
    }
}

fn count_lines(text: &str) -> usize {
    text.bytes().filter(|&b| b == b'\n').count()
}

fn dotted(path: &[String]) -> String {
    format!(".{}", path.join("."))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn context() -> Context {
        Context::new("test", "sys", "cmp").with_env(BTreeMap::from([
            ("INFRA_TEST_VAR".to_string(), "test_value".to_string()),
            ("QUOTED".to_string(), r#"pa"ss\word"#.to_string()),
            ("DASHED-NAME".to_string(), "dashed".to_string()),
        ]))
    }

    #[rstest]
    #[case("test", "test")]
    #[case("", "")]
    #[case("this is a {{ .Environment }}", "this is a test")]
    #[case("{{.System}}-{{ .Component }}", "sys-cmp")]
    #[case("prefix_{{ .Env.INFRA_TEST_VAR }}_suffix", "prefix_test_value_suffix")]
    #[case("[{{ .Env.MISSING }}]", "[]")]
    #[case(r#"{{ index .Env "DASHED-NAME" }}"#, "dashed")]
    #[case(r#"{{ "{{ literal }}" }}"#, "{{ literal }}")]
    #[case("a {{/* hidden */}}b", "a b")]
    #[case("a  {{- .Environment -}}  b", "atestb")]
    #[case("a {{- /* hidden */ -}}\n b", "ab")]
    #[case("{{ .Environment }}}", "test}")]
    #[case("no {braces} here }}", "no {braces} here }}")]
    #[case(r#"{{ "a\"b\n" }}"#, "a\"b\n")]
    #[case("{{ `raw }} text` }}", "raw }} text")]
    #[case("{{.Environment -}}\n\n{{- .System}}", "testsys")]
    fn test_render(#[case] template: &str, #[case] expected: &str) {
        assert_eq!(render(template, &context()).unwrap(), expected);
    }

    #[rstest]
    #[case::unknown_field("{{ .InvalidProp }}", RenderError::UnknownField { line: 1, field: "InvalidProp".into() })]
    #[case::unknown_function("{{ test }}", RenderError::UnknownFunction { line: 1, name: "test".into() })]
    #[case::empty("{{ }}", RenderError::EmptyAction { line: 1 })]
    #[case::unclosed("{\n\n  \"a\": \"{{ .Env.X\"\n}", RenderError::UnclosedAction { line: 3 })]
    #[case::unclosed_comment("{{/* never closed }}", RenderError::UnclosedComment { line: 1 })]
    #[case::map("{{ .Env }}", RenderError::NotPrintable { line: 1, field: ".Env".into() })]
    #[case::dot("{{ . }}", RenderError::NotPrintable { line: 1, field: ".".into() })]
    #[case::field_of_string("{{ .System.Name }}", RenderError::UnknownField { line: 1, field: "Name".into() })]
    #[case::field_of_variable("{{ .Env.INFRA_TEST_VAR.X }}", RenderError::UnknownField { line: 1, field: "X".into() })]
    #[case::index_arity("{{ index .Env }}", RenderError::WrongArguments { line: 1, name: "index" })]
    #[case::index_non_map(r#"{{ index .System "x" }}"#, RenderError::NotAMap { line: 1, field: ".System".into() })]
    #[case::pipeline("{{ .Environment | upper }}", RenderError::Unexpected { line: 1, token: "'|'".into() })]
    #[case::spaced_comment("{{ /* note */ }}", RenderError::Unexpected { line: 1, token: "'/'".into() })]
    #[case::unclosed_comment_at_end("text {{- /* never closed", RenderError::UnclosedComment { line: 1 })]
    #[case::bad_escape(r#"{{ "\q" }}"#, RenderError::Unexpected { line: 1, token: r#"string "\q""#.into() })]
    fn test_render_errors(#[case] template: &str, #[case] expected: RenderError) {
        assert_eq!(render(template, &context()), Err(expected));
    }

    #[test]
    fn test_error_line_numbers() {
        let template = "{\n  \"a\": \"{{ .Environment }}\",\n  \"b\": \"{{ .Nope }}\"\n}";
        let err = render(template, &context()).unwrap_err();
        assert_eq!(err, RenderError::UnknownField { line: 3, field: "Nope".into() });
        assert!(err.to_string().starts_with("line 3:"));
    }

    #[test]
    fn test_best_effort_returns_input_on_error() {
        let ctx = context();
        assert_eq!(render_best_effort("{{ test }}", &ctx), "{{ test }}");
        assert_eq!(render_best_effort("{{ .Nope }}", &ctx), "{{ .Nope }}");
        assert_eq!(render_best_effort("{{ .Component }}", &ctx), "cmp");
    }

    #[test]
    fn test_document_escapes_values() {
        let rendered = render_document(r#"{"password": "{{ .Env.QUOTED }}"}"#, &context()).unwrap();
        assert_eq!(rendered, r#"{"password": "pa\"ss\\word"}"#);

        let value: Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["password"], r#"pa"ss\word"#);
    }

    #[test]
    fn test_raw_does_not_escape() {
        assert_eq!(render("{{ .Env.QUOTED }}", &context()).unwrap(), r#"pa"ss\word"#);
    }

    #[test]
    fn test_template_reuse() {
        let template = Template::parse("{{ .Environment }}/{{ .Env.INFRA_TEST_VAR }}").unwrap();
        let other = Context::new("prod", "s", "c");

        assert_eq!(template.execute(&context(), Escape::Raw).unwrap(), "test/test_value");
        assert_eq!(template.execute(&other, Escape::Raw).unwrap(), "prod/");
    }
}
