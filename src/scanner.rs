//! Placeholder-aware SQL scanner.
//!
//! Splits raw SQL text into literal fragments and named placeholders in a
//! single left-to-right pass. Placeholder-looking text inside string literals
//! and comments is kept as literal text, so `WHERE note = ':x'` or
//! `-- :todo` never produce a parameter.

/// How a placeholder's value is substituted into the statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamKind {
    /// `:name` - a bound value.
    Value,
    /// `::name` - a SQL identifier (table or column name) in dialects that
    /// support identifier placeholders; an ordinary bound value otherwise.
    Identifier,
}

/// One piece of a scanned statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Verbatim SQL text, including quotes and comments.
    Literal(String),
    /// A named substitution point.
    Placeholder { name: String, kind: ParamKind },
}

/// The parsed, dialect-agnostic form of a SQL string.
///
/// A `Template` is built once per distinct SQL text and is immutable after
/// construction, so it can be bound any number of times (and shared across
/// threads) without re-scanning. Concatenating its literal fragments with any
/// placeholder rendering, in order, reproduces the original SQL with only the
/// placeholders rewritten.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    /// The ordered segments of the statement.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Placeholder names in occurrence order, duplicates included.
    pub fn placeholders(&self) -> impl Iterator<Item = (&str, ParamKind)> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Placeholder { name, kind } => Some((name.as_str(), *kind)),
            Segment::Literal(_) => None,
        })
    }

    /// Number of placeholder occurrences (duplicates counted).
    pub fn placeholder_count(&self) -> usize {
        self.placeholders().count()
    }
}

/// Scanner state while walking the SQL text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Normal,
    SingleQuoted,
    DoubleQuoted,
    LineComment,
    BlockComment,
}

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Scans SQL text into a [`Template`].
///
/// This is a total function: malformed quoting or an unterminated comment is
/// not detected here - the open mode simply runs to the end of the input and
/// everything it covered stays literal text.
///
/// Any `::identifier` in normal mode is taken as an identifier placeholder,
/// including a genuine type cast like `id::int`. Callers that need an
/// unsubstituted cast must keep a non-identifier character after the `::`
/// (for example a quoted type name). This ambiguity is accepted rather than
/// guessed around.
///
/// # Examples
///
/// ```
/// use named_sql::scanner::{scan, ParamKind};
///
/// let template = scan("SELECT * FROM ::t WHERE id = :id AND note = ':x';");
/// let placeholders: Vec<_> = template.placeholders().collect();
/// assert_eq!(
///     placeholders,
///     vec![("t", ParamKind::Identifier), ("id", ParamKind::Value)]
/// );
/// ```
pub fn scan(sql: &str) -> Template {
    let chars: Vec<char> = sql.chars().collect();
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut mode = Mode::Normal;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        match mode {
            Mode::Normal => match c {
                '\'' => {
                    literal.push(c);
                    mode = Mode::SingleQuoted;
                    i += 1;
                }
                '"' => {
                    literal.push(c);
                    mode = Mode::DoubleQuoted;
                    i += 1;
                }
                '-' if chars.get(i + 1) == Some(&'-') => {
                    literal.push_str("--");
                    mode = Mode::LineComment;
                    i += 2;
                }
                '/' if chars.get(i + 1) == Some(&'*') => {
                    literal.push_str("/*");
                    mode = Mode::BlockComment;
                    i += 2;
                }
                ':' => {
                    let double = chars.get(i + 1) == Some(&':');
                    let name_at = if double { i + 2 } else { i + 1 };
                    if chars.get(name_at).copied().is_some_and(is_ident_start) {
                        let (name, next) = take_name(&chars, name_at);
                        if !literal.is_empty() {
                            segments.push(Segment::Literal(std::mem::take(&mut literal)));
                        }
                        let kind = if double {
                            ParamKind::Identifier
                        } else {
                            ParamKind::Value
                        };
                        segments.push(Segment::Placeholder { name, kind });
                        i = next;
                    } else {
                        // Bare colon, `::1`, `: ` and similar stay literal.
                        literal.push(':');
                        i += 1;
                    }
                }
                _ => {
                    literal.push(c);
                    i += 1;
                }
            },
            Mode::SingleQuoted => {
                literal.push(c);
                i += 1;
                if c == '\'' {
                    if chars.get(i) == Some(&'\'') {
                        // Doubled quote is an escape, not a close.
                        literal.push('\'');
                        i += 1;
                    } else {
                        mode = Mode::Normal;
                    }
                }
            }
            Mode::DoubleQuoted => {
                literal.push(c);
                i += 1;
                if c == '"' {
                    if chars.get(i) == Some(&'"') {
                        literal.push('"');
                        i += 1;
                    } else {
                        mode = Mode::Normal;
                    }
                }
            }
            Mode::LineComment => {
                literal.push(c);
                i += 1;
                if c == '\n' {
                    mode = Mode::Normal;
                }
            }
            Mode::BlockComment => {
                if c == '*' && chars.get(i + 1) == Some(&'/') {
                    literal.push_str("*/");
                    mode = Mode::Normal;
                    i += 2;
                } else {
                    literal.push(c);
                    i += 1;
                }
            }
        }
    }

    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }
    Template { segments }
}

/// Consumes the maximal identifier run starting at `from`.
fn take_name(chars: &[char], from: usize) -> (String, usize) {
    let mut end = from;
    while chars.get(end).copied().is_some_and(is_ident_char) {
        end += 1;
    }
    (chars[from..end].iter().collect(), end)
}
