//! Loose parsing for free-text key/value form fields.
//!
//! Form fields like headers or cookies arrive as raw text that may be JSON,
//! JSON written with single quotes, or a Python-style literal pasted from a
//! script. Parsing is an explicit ordered fallback chain; total failure is
//! reported as `None` so callers decide how to degrade.

use serde_json::{Map, Value};

/// Parses text into a string-keyed map, trying strict JSON first, then JSON
/// with single quotes rewritten to double quotes, then a Python-style
/// literal. Empty or whitespace-only text is an empty map, not a failure.
pub fn parse_value_map(text: &str) -> Option<Map<String, Value>> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Some(Map::new());
    }

    if let Some(map) = parse_json_object(trimmed) {
        return Some(map);
    }

    let requoted = trimmed.replace('\'', "\"");
    if let Some(map) = parse_json_object(&requoted) {
        return Some(map);
    }

    parse_literal(trimmed).and_then(into_object)
}

/// Converts an unparseable field into an empty map and records exactly one
/// warning naming the field.
pub fn normalize_field(text: &str, field: &str, warnings: &mut Vec<String>) -> Map<String, Value> {
    match parse_value_map(text) {
        Some(map) => map,
        None => {
            warnings.push(format!("Invalid JSON in {}, using empty object", field));
            Map::new()
        }
    }
}

fn parse_json_object(text: &str) -> Option<Map<String, Value>> {
    serde_json::from_str::<Value>(text).ok().and_then(into_object)
}

fn into_object(value: Value) -> Option<Map<String, Value>> {
    match value {
        Value::Object(map) => Some(map),
        _ => None,
    }
}

/// Parses a Python-style literal: dicts, lists, tuples, single- or
/// double-quoted strings, numbers, `True`/`False`/`None`. Tuples come back
/// as arrays. Anything else is a parse failure.
pub fn parse_literal(text: &str) -> Option<Value> {
    let mut parser = LiteralParser::new(text);
    let value = parser.parse_value()?;
    parser.skip_ws();
    if parser.peek().is_some() {
        return None;
    }
    Some(value)
}

struct LiteralParser {
    chars: Vec<char>,
    pos: usize,
}

impl LiteralParser {
    fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek();
        if c.is_some() {
            self.pos += 1;
        }
        c
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn skip_ws(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.pos += 1;
        }
    }

    fn parse_value(&mut self) -> Option<Value> {
        self.skip_ws();
        match self.peek()? {
            '{' => self.parse_dict(),
            '[' => self.parse_seq('[', ']'),
            '(' => self.parse_seq('(', ')'),
            '\'' | '"' => self.parse_string(),
            c if c.is_ascii_digit() || c == '-' || c == '+' || c == '.' => self.parse_number(),
            c if c.is_alphabetic() => self.parse_word(),
            _ => None,
        }
    }

    fn parse_dict(&mut self) -> Option<Value> {
        if !self.eat('{') {
            return None;
        }
        let mut map = Map::new();
        self.skip_ws();
        if self.eat('}') {
            return Some(Value::Object(map));
        }
        loop {
            let key = match self.parse_value()? {
                Value::String(s) => s,
                other => other.to_string(),
            };
            self.skip_ws();
            if !self.eat(':') {
                return None;
            }
            let value = self.parse_value()?;
            map.insert(key, value);
            self.skip_ws();
            if self.eat('}') {
                return Some(Value::Object(map));
            }
            if !self.eat(',') {
                return None;
            }
            self.skip_ws();
            // trailing comma
            if self.eat('}') {
                return Some(Value::Object(map));
            }
        }
    }

    fn parse_seq(&mut self, open: char, close: char) -> Option<Value> {
        if !self.eat(open) {
            return None;
        }
        let mut items = Vec::new();
        self.skip_ws();
        if self.eat(close) {
            return Some(Value::Array(items));
        }
        loop {
            items.push(self.parse_value()?);
            self.skip_ws();
            if self.eat(close) {
                return Some(Value::Array(items));
            }
            if !self.eat(',') {
                return None;
            }
            self.skip_ws();
            if self.eat(close) {
                return Some(Value::Array(items));
            }
        }
    }

    fn parse_string(&mut self) -> Option<Value> {
        let quote = self.bump()?;
        let mut out = String::new();
        loop {
            match self.bump()? {
                c if c == quote => return Some(Value::String(out)),
                '\\' => match self.bump()? {
                    'n' => out.push('\n'),
                    't' => out.push('\t'),
                    'r' => out.push('\r'),
                    other => out.push(other),
                },
                c => out.push(c),
            }
        }
    }

    fn parse_number(&mut self) -> Option<Value> {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_ascii_digit() || "+-.eE".contains(c)) {
            self.pos += 1;
        }
        let text: String = self.chars[start..self.pos].iter().collect();
        if let Ok(n) = text.parse::<i64>() {
            return Some(Value::from(n));
        }
        text.parse::<f64>()
            .ok()
            .and_then(serde_json::Number::from_f64)
            .map(Value::Number)
    }

    fn parse_word(&mut self) -> Option<Value> {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_alphanumeric() || c == '_') {
            self.pos += 1;
        }
        let word: String = self.chars[start..self.pos].iter().collect();
        match word.as_str() {
            "True" | "true" => Some(Value::Bool(true)),
            "False" | "false" => Some(Value::Bool(false)),
            "None" | "null" => Some(Value::Null),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_text_is_empty_map() {
        assert_eq!(parse_value_map(""), Some(Map::new()));
        assert_eq!(parse_value_map("   \n\t"), Some(Map::new()));
    }

    #[test]
    fn test_valid_json_parses_exactly() {
        let map = parse_value_map(r#"{"User-Agent": "curl/8", "n": 3}"#).unwrap();
        assert_eq!(map.get("User-Agent"), Some(&json!("curl/8")));
        assert_eq!(map.get("n"), Some(&json!(3)));
    }

    #[test]
    fn test_single_quoted_json_is_requoted() {
        let map = parse_value_map("{'a': 'b', 'c': 1}").unwrap();
        assert_eq!(map.get("a"), Some(&json!("b")));
        assert_eq!(map.get("c"), Some(&json!(1)));
    }

    #[test]
    fn test_python_literal_fallback() {
        // Requoting breaks on the apostrophe, the literal parser does not.
        let map = parse_value_map(r#"{'note': "it's fine", 'flag': True, 'gone': None}"#).unwrap();
        assert_eq!(map.get("note"), Some(&json!("it's fine")));
        assert_eq!(map.get("flag"), Some(&json!(true)));
        assert_eq!(map.get("gone"), Some(&Value::Null));
    }

    #[test]
    fn test_tuples_become_arrays() {
        let map = parse_value_map("{'pair': (1, 2), 'list': [3, 4]}").unwrap();
        assert_eq!(map.get("pair"), Some(&json!([1, 2])));
        assert_eq!(map.get("list"), Some(&json!([3, 4])));
    }

    #[test]
    fn test_garbage_is_unparsed() {
        assert_eq!(parse_value_map("not a mapping"), None);
        assert_eq!(parse_value_map("{'unterminated': "), None);
        // valid JSON but not an object
        assert_eq!(parse_value_map("[1, 2, 3]"), None);
    }

    #[test]
    fn test_normalize_field_warns_once_with_field_name() {
        let mut warnings = Vec::new();
        let map = normalize_field("}{ nonsense", "Headers", &mut warnings);
        assert!(map.is_empty());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("Headers"));
    }

    #[test]
    fn test_normalize_field_no_warning_on_success() {
        let mut warnings = Vec::new();
        let map = normalize_field("{'k': 'v'}", "Cookies", &mut warnings);
        assert_eq!(map.get("k"), Some(&json!("v")));
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_literal_numbers_and_nesting() {
        let value = parse_literal("{'outer': {'inner': -2.5}, 'n': 10}").unwrap();
        assert_eq!(value, json!({"outer": {"inner": -2.5}, "n": 10}));
    }

    #[test]
    fn test_literal_rejects_trailing_garbage() {
        assert_eq!(parse_literal("{'a': 1} extra"), None);
    }
}
