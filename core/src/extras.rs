use std::collections::BTreeMap;
use std::fmt;

use log::{debug, warn};

use crate::PLACEHOLDER;
use crate::errors::ActifuzzError;

/// Extras keyed by name, ordered so generated command lines are reproducible
pub type ExtrasMap = BTreeMap<String, ExtraValue>;

/// Type declared on the command line for a group of extras
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtraType {
    String,
    Int,
    Bool,
    Float,
    /// Same value space as [`ExtraType::Int`], kept for the `--long` flag
    Long,
}

/// Value of a single intent extra
#[derive(Debug, Clone, PartialEq)]
pub enum ExtraValue {
    String(String),
    Integer(i64),
    Boolean(bool),
    Float(f64),
}

impl ExtraValue {
    /// Coerce raw text into the declared type.
    ///
    /// Values carrying the placeholder stay uncoerced strings until payloads
    /// are substituted. Numbers that don't parse fall back to the raw string,
    /// booleans never fail: anything outside `true`, `1`, `yes` is `false`.
    pub fn from_declared(raw: &str, declared: ExtraType) -> ExtraValue {
        if raw.contains(PLACEHOLDER) {
            return ExtraValue::String(raw.to_owned());
        }

        let coerced = match declared {
            ExtraType::String => Some(ExtraValue::String(raw.to_owned())),
            ExtraType::Bool => Some(ExtraValue::Boolean(matches!(
                raw.to_lowercase().as_str(),
                "true" | "1" | "yes"
            ))),
            ExtraType::Int | ExtraType::Long => parse_integer(raw).map(ExtraValue::Integer),
            ExtraType::Float => parse_float(raw).map(ExtraValue::Float),
        };

        coerced.unwrap_or_else(|| {
            debug!("can't coerce {raw:?} to {declared:?}, keeping it as string");
            ExtraValue::String(raw.to_owned())
        })
    }

    /// Reclassify a string by its content, other kinds are returned as is.
    ///
    /// `true`/`false` (any case) become booleans, text without a dot is tried
    /// as an integer and text with a dot as a float. Anything else stays a string.
    pub fn reclassify(self) -> ExtraValue {
        let text = match self {
            ExtraValue::String(text) => text,
            other => return other,
        };

        match text.to_lowercase().as_str() {
            "true" => return ExtraValue::Boolean(true),
            "false" => return ExtraValue::Boolean(false),
            _ => {}
        }

        let parsed = if text.contains('.') {
            parse_float(&text).map(ExtraValue::Float)
        } else {
            parse_integer(&text).map(ExtraValue::Integer)
        };

        parsed.unwrap_or(ExtraValue::String(text))
    }

    /// Whether this value still waits for payload substitution
    pub fn is_fuzz_target(&self) -> bool {
        matches!(self, ExtraValue::String(s) if s.contains(PLACEHOLDER))
    }
}

impl fmt::Display for ExtraValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtraValue::String(s) => f.write_str(s),
            ExtraValue::Integer(i) => write!(f, "{i}"),
            ExtraValue::Boolean(b) => write!(f, "{b}"),
            // debug formatting keeps the trailing `.0` for whole numbers
            ExtraValue::Float(v) => write!(f, "{v:?}"),
        }
    }
}

fn parse_integer(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

fn parse_float(raw: &str) -> Option<f64> {
    raw.trim().parse().ok()
}

/// Parse `key=value` pairs declared with one type.
///
/// The split happens on the first `=`, so values may contain `=` themselves.
/// Within one call the last occurrence of a key wins.
pub fn parse_key_value_pairs<I, S>(pairs: I, declared: ExtraType) -> Result<ExtrasMap, ActifuzzError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut extras = ExtrasMap::new();

    for pair in pairs {
        let pair = pair.as_ref();
        let (key, value) = pair
            .split_once('=')
            .ok_or_else(|| ActifuzzError::InvalidFormat(pair.to_owned()))?;

        extras.insert(key.to_owned(), ExtraValue::from_declared(value, declared));
    }

    Ok(extras)
}

/// Re-run content based coercion over every entry of the map
pub fn reclassify_extras(extras: ExtrasMap) -> ExtrasMap {
    extras
        .into_iter()
        .map(|(key, value)| (key, value.reclassify()))
        .collect()
}

/// Merges typed groups of extras into one map.
///
/// Groups are applied in the order they are added. A key that shows up in
/// two groups silently takes the value of the later group.
#[derive(Debug, Default)]
pub struct ExtrasBuilder {
    extras: ExtrasMap,
}

impl ExtrasBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add<I, S>(mut self, declared: ExtraType, pairs: I) -> Result<Self, ActifuzzError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for (key, value) in parse_key_value_pairs(pairs, declared)? {
            if let Some(previous) = self.extras.get(&key) {
                warn!("extra {key:?} redeclared as {declared:?}, overriding {previous:?}");
            }
            self.extras.insert(key, value);
        }

        Ok(self)
    }

    pub fn build(self) -> ExtrasMap {
        self.extras
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn string(s: &str) -> ExtraValue {
        ExtraValue::String(s.to_owned())
    }

    #[test]
    fn parse_splits_on_first_equal_sign() {
        let extras = parse_key_value_pairs(["url=http://x/?a=b"], ExtraType::String).unwrap();
        assert_eq!(extras["url"], string("http://x/?a=b"));
    }

    #[test]
    fn parse_rejects_missing_equal_sign() {
        let err = parse_key_value_pairs(["novalue"], ExtraType::Int).unwrap_err();
        assert!(matches!(err, ActifuzzError::InvalidFormat(ref s) if s == "novalue"));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn parse_defers_coercion_for_placeholder() {
        let extras = parse_key_value_pairs(["uid=FUZZ", "n=1FUZZ"], ExtraType::Int).unwrap();
        assert_eq!(extras["uid"], string("FUZZ"));
        assert_eq!(extras["n"], string("1FUZZ"));
        assert!(extras["uid"].is_fuzz_target());
    }

    #[test]
    fn parse_coerces_declared_types() {
        let ints = parse_key_value_pairs(["a=42", "b=-7", "c=12abc"], ExtraType::Int).unwrap();
        assert_eq!(ints["a"], ExtraValue::Integer(42));
        assert_eq!(ints["b"], ExtraValue::Integer(-7));
        assert_eq!(ints["c"], string("12abc"));

        let longs = parse_key_value_pairs(["big=9999999999"], ExtraType::Long).unwrap();
        assert_eq!(longs["big"], ExtraValue::Integer(9_999_999_999));

        let floats = parse_key_value_pairs(["f=3", "g=2.5", "h=x"], ExtraType::Float).unwrap();
        assert_eq!(floats["f"], ExtraValue::Float(3.0));
        assert_eq!(floats["g"], ExtraValue::Float(2.5));
        assert_eq!(floats["h"], string("x"));
    }

    #[test]
    fn parse_bool_is_lenient() {
        let extras = parse_key_value_pairs(
            ["a=TRUE", "b=1", "c=Yes", "d=false", "e=garbage"],
            ExtraType::Bool,
        )
        .unwrap();
        assert_eq!(extras["a"], ExtraValue::Boolean(true));
        assert_eq!(extras["b"], ExtraValue::Boolean(true));
        assert_eq!(extras["c"], ExtraValue::Boolean(true));
        assert_eq!(extras["d"], ExtraValue::Boolean(false));
        assert_eq!(extras["e"], ExtraValue::Boolean(false));
    }

    #[test]
    fn parse_last_write_wins_within_group() {
        let extras = parse_key_value_pairs(["k=1", "k=2"], ExtraType::Int).unwrap();
        assert_eq!(extras.len(), 1);
        assert_eq!(extras["k"], ExtraValue::Integer(2));
    }

    #[test]
    fn builder_later_group_overrides_earlier() {
        let extras = ExtrasBuilder::new()
            .add(ExtraType::String, ["k=text", "s=hello"])
            .unwrap()
            .add(ExtraType::Int, ["k=5"])
            .unwrap()
            .build();
        assert_eq!(extras["k"], ExtraValue::Integer(5));
        assert_eq!(extras["s"], string("hello"));
    }

    #[test]
    fn builder_propagates_format_error() {
        let result = ExtrasBuilder::new().add(ExtraType::Bool, ["flag"]);
        assert!(matches!(result, Err(ActifuzzError::InvalidFormat(_))));
    }

    #[test]
    fn reclassify_by_content() {
        assert_eq!(string("TRUE").reclassify(), ExtraValue::Boolean(true));
        assert_eq!(string("False").reclassify(), ExtraValue::Boolean(false));
        assert_eq!(string("-1").reclassify(), ExtraValue::Integer(-1));
        assert_eq!(string("9999999999").reclassify(), ExtraValue::Integer(9_999_999_999));
        assert_eq!(string("1.5").reclassify(), ExtraValue::Float(1.5));
        assert_eq!(string("1.2.3").reclassify(), string("1.2.3"));
        assert_eq!(string("").reclassify(), string(""));
        assert_eq!(string(" ").reclassify(), string(" "));
        assert_eq!(string("null").reclassify(), string("null"));
        // `yes` is only understood for declared booleans
        assert_eq!(string("yes").reclassify(), string("yes"));
        assert_eq!(ExtraValue::Integer(3).reclassify(), ExtraValue::Integer(3));
    }

    #[test]
    fn reclassify_is_idempotent() {
        let extras: ExtrasMap = [
            ("a", string("12")),
            ("b", string("0.25")),
            ("c", string("true")),
            ("d", string("<script>")),
            ("e", ExtraValue::Boolean(false)),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_owned(), v))
        .collect();

        let once = reclassify_extras(extras);
        let twice = reclassify_extras(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn display_matches_command_line_form() {
        assert_eq!(ExtraValue::Boolean(true).to_string(), "true");
        assert_eq!(ExtraValue::Integer(-1).to_string(), "-1");
        assert_eq!(ExtraValue::Float(3.0).to_string(), "3.0");
        assert_eq!(ExtraValue::Float(0.5).to_string(), "0.5");
        assert_eq!(string("a b").to_string(), "a b");
    }
}
