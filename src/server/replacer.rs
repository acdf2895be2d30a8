//! Request-scoped placeholder store.

use std::collections::HashMap;

use axum::{body::Body, http::Request};

use crate::placeholder::{PlaceholderSet, PlaceholderValue};

/// Key-value store attached to each request as an extension.
///
/// Middlewares write into it, handlers resolve `{key}` references against it.
#[derive(Debug, Clone, Default)]
pub struct Replacer {
    values: HashMap<String, PlaceholderValue>,
}

impl Replacer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replacer seeded with the `http.request.*` keys of a request
    pub fn for_request(req: &Request<Body>) -> Self {
        let mut repl = Self::new();
        repl.set("http.request.method", req.method().as_str());
        repl.set("http.request.uri", req.uri().to_string());
        repl.set("http.request.uri.path", req.uri().path());
        let host = req
            .headers()
            .get(axum::http::header::HOST)
            .and_then(|v| v.to_str().ok())
            .or_else(|| req.uri().host())
            .unwrap_or_default();
        repl.set("http.request.host", host);
        repl
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<PlaceholderValue>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&PlaceholderValue> {
        self.values.get(key)
    }

    /// Write every entry of `set`, overwriting existing keys.
    pub fn extend(&mut self, set: PlaceholderSet) {
        self.values.extend(set);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PlaceholderValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Substitute every `{key}` whose key is known; unknown references are
    /// left untouched.
    pub fn replace_known(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        let mut rest = input;

        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            match after.find('}') {
                Some(close) => match self.values.get(&after[..close]) {
                    Some(value) => {
                        out.push_str(&value.to_string());
                        rest = &after[close + 1..];
                    }
                    None => {
                        out.push('{');
                        rest = after;
                    }
                },
                None => {
                    out.push_str(&rest[open..]);
                    rest = "";
                }
            }
        }
        out.push_str(rest);
        out
    }
}
