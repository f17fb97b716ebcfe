// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Context name templates.
//!
//! Templates are rendered with minijinja against a [`ClusterInfo`]. Go-style field
//! references such as `{{ .ProjectId }}` are accepted: the leading dot is dropped
//! before compilation. Undefined fields are errors, never empty strings.

use minijinja::{Environment, UndefinedBehavior};
use std::fmt;

use crate::error::{GkeKubeconfigError, Result};
use crate::types::ClusterInfo;

const TEMPLATE_NAME: &str = "context-name";

/// A compiled context name template
pub struct ContextNameTemplate {
    source: String,
    env: Environment<'static>,
}

impl fmt::Debug for ContextNameTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContextNameTemplate")
            .field("source", &self.source)
            .finish()
    }
}

impl ContextNameTemplate {
    /// Compile `source`. Syntax errors surface here, before any API call is made.
    pub fn compile(source: &str) -> Result<Self> {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.add_filter("trimPrefix", trim_prefix);
        env.add_filter("trimSuffix", trim_suffix);
        env.add_filter("trunc", trunc);

        env.add_template_owned(TEMPLATE_NAME, strip_field_dots(source))
            .map_err(GkeKubeconfigError::TemplateCompile)?;

        Ok(Self {
            source: source.to_string(),
            env,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Render the context name for one cluster
    pub fn render(&self, cluster: &ClusterInfo) -> Result<String> {
        self.env
            .get_template(TEMPLATE_NAME)
            .and_then(|t| t.render(cluster))
            .map_err(|source| GkeKubeconfigError::TemplateRender {
                cluster: cluster.id(),
                source,
            })
    }
}

fn trim_prefix(value: String, prefix: String) -> String {
    value
        .strip_prefix(prefix.as_str())
        .map(str::to_string)
        .unwrap_or(value)
}

fn trim_suffix(value: String, suffix: String) -> String {
    value
        .strip_suffix(suffix.as_str())
        .map(str::to_string)
        .unwrap_or(value)
}

/// First `n` characters, or the last `-n` when negative
fn trunc(value: String, n: i64) -> String {
    let len = value.chars().count();
    let keep = usize::try_from(n.unsigned_abs()).unwrap_or(usize::MAX).min(len);
    if n >= 0 {
        value.chars().take(keep).collect()
    } else {
        value.chars().skip(len - keep).collect()
    }
}

/// Drop the leading dot of Go-style field references inside `{{ ... }}`
fn strip_field_dots(source: &str) -> String {
    let mut result = String::with_capacity(source.len());
    let mut remaining = source;

    while let Some(start) = remaining.find("{{") {
        result.push_str(&remaining[..start + 2]);
        remaining = &remaining[start + 2..];

        if let Some(end) = remaining.find("}}") {
            result.push_str(&strip_expression_dots(&remaining[..end]));
            result.push_str("}}");
            remaining = &remaining[end + 2..];
        } else {
            // Unterminated, left for the compiler to reject
            result.push_str(remaining);
            remaining = "";
        }
    }

    result.push_str(remaining);
    result
}

/// A dot is a field reference when it starts an identifier and does not follow
/// a value (`a.b`, `f().b`, `1.5` keep their dots). Quoted strings are untouched.
fn strip_expression_dots(expr: &str) -> String {
    let mut result = String::with_capacity(expr.len());
    let mut chars = expr.chars().peekable();
    let mut quote: Option<char> = None;

    while let Some(ch) = chars.next() {
        match quote {
            Some(q) => {
                if ch == q {
                    quote = None;
                }
                result.push(ch);
            }
            None if ch == '"' || ch == '\'' => {
                quote = Some(ch);
                result.push(ch);
            }
            None if ch == '.' => {
                let follows_value = result
                    .chars()
                    .last()
                    .is_some_and(|c| c.is_alphanumeric() || matches!(c, '_' | ')' | ']'));
                let starts_field = chars
                    .peek()
                    .is_some_and(|c| c.is_alphabetic() || *c == '_');
                if follows_value || !starts_field {
                    result.push(ch);
                }
            }
            None => result.push(ch),
        }
    }

    result
}
