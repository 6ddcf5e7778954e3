//! Parse the text props format into [`RawProps`].
//!
//! ```text
//! # anchor watch widget
//! cluster = "anchor"
//! kind = "distance"
//! anchorDistance = 42.5
//! position = {lat: 54.32, lon: 10.14}
//! ```

use miette::{NamedSource, SourceSpan};
use pest::Parser;
use pest::error::InputLocation;
use pest::iterators::Pair;

use crate::errors::PropsError;
use crate::value::{PropMap, RawProps, Value};
use crate::{PropsParser, Rule};

/// Parse props text. Later duplicate keys overwrite earlier ones.
pub fn parse_props(source: &str) -> Result<RawProps, PropsError> {
    parse_props_named("<props>", source)
}

/// Parse props text, naming the source in diagnostics
pub fn parse_props_named(name: &str, source: &str) -> Result<RawProps, PropsError> {
    let ctx = Ctx { name, source };
    let pairs = PropsParser::parse(Rule::props, source).map_err(|e| ctx.syntax(e))?;

    let mut props = RawProps::new();
    for pair in pairs.flat_map(Pair::into_inner) {
        if pair.as_rule() != Rule::entry {
            continue;
        }
        let mut inner = pair.into_inner();
        let (Some(key), Some(value)) = (inner.next(), inner.next()) else {
            continue;
        };
        props.insert(key.as_str(), ctx.value(value)?);
    }
    Ok(props)
}

struct Ctx<'a> {
    name: &'a str,
    source: &'a str,
}

impl Ctx<'_> {
    fn src(&self) -> NamedSource<String> {
        NamedSource::new(self.name, self.source.to_string())
    }

    fn syntax(&self, error: pest::error::Error<Rule>) -> PropsError {
        let span: SourceSpan = match error.location {
            InputLocation::Pos(pos) => (pos, 0).into(),
            InputLocation::Span((start, end)) => (start, end - start).into(),
        };
        PropsError::Syntax {
            message: error.variant.message().into_owned(),
            src: self.src(),
            span,
        }
    }

    fn value(&self, pair: Pair<'_, Rule>) -> Result<Value, PropsError> {
        match pair.as_rule() {
            Rule::null => Ok(Value::Null),
            Rule::boolean => Ok(Value::Bool(pair.as_str() == "true")),
            Rule::number => self.number(&pair),
            Rule::string => self.string(pair),
            Rule::list => pair
                .into_inner()
                .map(|item| self.value(item))
                .collect::<Result<Vec<_>, _>>()
                .map(Value::List),
            Rule::map => {
                let mut map = PropMap::new();
                for entry in pair.into_inner() {
                    let mut inner = entry.into_inner();
                    let (Some(key), Some(value)) = (inner.next(), inner.next()) else {
                        continue;
                    };
                    let key = match key.as_rule() {
                        Rule::string => match self.string(key)? {
                            Value::Text(text) => text,
                            other => other.to_string(),
                        },
                        _ => key.as_str().to_string(),
                    };
                    map.insert(key, self.value(value)?);
                }
                Ok(Value::Map(map))
            }
            _ => Err(PropsError::Syntax {
                message: format!("unexpected {:?}", pair.as_rule()),
                src: self.src(),
                span: span_of(&pair),
            }),
        }
    }

    fn number(&self, pair: &Pair<'_, Rule>) -> Result<Value, PropsError> {
        let text = pair.as_str();
        match text.parse::<f64>() {
            Ok(n) if n.is_finite() => Ok(Value::Number(n)),
            _ => Err(PropsError::InvalidNumber {
                text: text.to_string(),
                src: self.src(),
                span: span_of(pair),
            }),
        }
    }

    fn string(&self, pair: Pair<'_, Rule>) -> Result<Value, PropsError> {
        let Some(inner) = pair.into_inner().next() else {
            return Ok(Value::Text(String::new()));
        };
        let base = inner.as_span().start();
        let raw = inner.as_str();
        let mut out = String::with_capacity(raw.len());
        let mut chars = raw.char_indices();
        while let Some((_, c)) = chars.next() {
            if c != '\\' {
                out.push(c);
                continue;
            }
            match chars.next() {
                Some((_, '"')) => out.push('"'),
                Some((_, '\\')) => out.push('\\'),
                Some((_, 'n')) => out.push('\n'),
                Some((_, 't')) => out.push('\t'),
                Some((at, other)) => {
                    return Err(PropsError::InvalidEscape {
                        src: self.src(),
                        span: (base + at - 1, other.len_utf8() + 1).into(),
                    });
                }
                None => {
                    return Err(PropsError::InvalidEscape {
                        src: self.src(),
                        span: (base + raw.len() - 1, 1).into(),
                    });
                }
            }
        }
        Ok(Value::Text(out))
    }
}

fn span_of(pair: &Pair<'_, Rule>) -> SourceSpan {
    let span = pair.as_span();
    (span.start(), span.end() - span.start()).into()
}
