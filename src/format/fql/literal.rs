// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Fqlbench-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Fqlbench and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt::Write as _;

use crate::model::{DocumentRef, Value};

use super::reference::encode_reference;

/// A value the renderer had to leave out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderDiagnostic {
    /// JSON-path-like location, e.g. `$.items[1].product`.
    pub path: String,
    pub shape: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FqlSource {
    pub text: String,
    pub diagnostics: Vec<RenderDiagnostic>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Position {
    TopLevel,
    Element,
    Field,
}

/// Renders a structured value as an FQL literal.
///
/// Object fields holding `null`, `{}` or `[]` are omitted. Documents nested under a field collapse
/// into `Coll.byId("<reference token>")` so the highlighter can make them clickable; at the top level
/// and inside arrays they are spelled out in full. Unsupported shapes are skipped and reported.
pub fn to_fql(value: &Value) -> FqlSource {
    let mut writer = FqlWriter::default();
    writer.write_value(value, Position::TopLevel, "$");
    FqlSource {
        text: writer.out,
        diagnostics: writer.diagnostics,
    }
}

#[derive(Default)]
struct FqlWriter {
    out: String,
    diagnostics: Vec<RenderDiagnostic>,
}

impl FqlWriter {
    fn write_value(&mut self, value: &Value, position: Position, path: &str) {
        match value {
            Value::Null => self.out.push_str("null"),
            Value::Bool(value) => {
                let _ = write!(self.out, "{value}");
            }
            Value::Number(value) => {
                let _ = write!(self.out, "{value}");
            }
            Value::String(value) => write_string_literal(&mut self.out, value),
            Value::Array(items) => self.write_array(items, path),
            Value::Object(fields) => self.write_object(None, fields, path),
            Value::Time(iso) => {
                self.out.push_str("Time(");
                write_string_literal(&mut self.out, iso);
                self.out.push(')');
            }
            Value::Ref(reference) => self.write_lookup(reference),
            Value::Document { reference, fields } => {
                if position == Position::Field {
                    self.write_lookup(reference);
                } else {
                    self.write_object(Some(reference), fields, path);
                }
            }
            Value::Module(name) => self.out.push_str(name),
            Value::Unsupported { shape } => self.report(path, shape),
        }
    }

    fn write_array(&mut self, items: &[Value], path: &str) {
        self.out.push('[');
        let mut first = true;
        for (idx, item) in items.iter().enumerate() {
            let item_path = format!("{path}[{idx}]");
            if let Value::Unsupported { shape } = item {
                self.report(&item_path, shape);
                continue;
            }
            if !first {
                self.out.push_str(", ");
            }
            first = false;
            self.write_value(item, Position::Element, &item_path);
        }
        self.out.push(']');
    }

    fn write_object(
        &mut self,
        reference: Option<&DocumentRef>,
        fields: &[(String, Value)],
        path: &str,
    ) {
        self.out.push('{');
        let mut first = true;
        if let Some(reference) = reference {
            self.out.push_str("coll: ");
            self.out.push_str(reference.collection());
            self.out.push_str(", id: ");
            write_string_literal(&mut self.out, reference.id());
            first = false;
        }

        for (key, value) in fields {
            if value.is_omitted_field() {
                continue;
            }
            let field_path = format!("{path}.{key}");
            if let Value::Unsupported { shape } = value {
                self.report(&field_path, shape);
                continue;
            }
            if !first {
                self.out.push_str(", ");
            }
            first = false;
            write_field_name(&mut self.out, key);
            self.out.push_str(": ");
            self.write_value(value, Position::Field, &field_path);
        }
        self.out.push('}');
    }

    fn write_lookup(&mut self, reference: &DocumentRef) {
        self.out.push_str(reference.collection());
        self.out.push_str(".byId(");
        write_string_literal(
            &mut self.out,
            &encode_reference(reference.collection(), reference.id()),
        );
        self.out.push(')');
    }

    fn report(&mut self, path: &str, shape: &str) {
        tracing::warn!(path, shape, "skipping result value with unsupported shape");
        self.diagnostics.push(RenderDiagnostic {
            path: path.to_owned(),
            shape: shape.to_owned(),
        });
    }
}

fn write_field_name(out: &mut String, name: &str) {
    if is_identifier(name) {
        out.push_str(name);
    } else {
        write_string_literal(out, name);
    }
}

pub(crate) fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_alphabetic() || first == '_')
        && chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
}

pub(crate) fn write_string_literal(out: &mut String, value: &str) {
    out.push('"');
    for ch in value.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            ch if ch.is_control() => {
                let _ = write!(out, "\\u{{{:x}}}", ch as u32);
            }
            ch => out.push(ch),
        }
    }
    out.push('"');
}

#[cfg(test)]
mod tests;
