// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Fqlbench-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Fqlbench and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Lexical highlighting for rendered FQL.
//!
//! Every string literal whose content is a reference token is rewritten to show only the document
//! id and carries the decoded [`DocumentRef`], which is what makes it clickable in the result pane.

use std::fmt::Write as _;
use std::sync::OnceLock;

use regex::Regex;

use crate::format::fql::{decode_reference, string_end};
use crate::model::DocumentRef;

use super::text::display_width;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenClass {
    Punctuation,
    String,
    Number,
    Keyword,
    Property,
    Function,
    ClassName,
    Operator,
    Plain,
    Whitespace,
}

impl TokenClass {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Punctuation => "punctuation",
            Self::String => "string",
            Self::Number => "number",
            Self::Keyword => "keyword",
            Self::Property => "property",
            Self::Function => "function",
            Self::ClassName => "class-name",
            Self::Operator => "operator",
            Self::Plain => "plain",
            Self::Whitespace => "whitespace",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightSpan {
    pub text: String,
    pub class: TokenClass,
    pub reference: Option<DocumentRef>,
}

impl HighlightSpan {
    fn new(text: impl Into<String>, class: TokenClass) -> Self {
        Self {
            text: text.into(),
            class,
            reference: None,
        }
    }

    pub fn is_reference(&self) -> bool {
        self.reference.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HighlightedLine {
    pub spans: Vec<HighlightSpan>,
}

impl HighlightedLine {
    pub fn text(&self) -> String {
        self.spans.iter().map(|span| span.text.as_str()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Highlighted {
    pub lines: Vec<HighlightedLine>,
}

impl Highlighted {
    /// Visible text, with reference tokens already replaced by their ids.
    pub fn plain_text(&self) -> String {
        self.lines
            .iter()
            .map(HighlightedLine::text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// `(line, span_index, reference)` for every reference span, in reading order.
    pub fn references(&self) -> Vec<(usize, usize, &DocumentRef)> {
        let mut out = Vec::new();
        for (line_idx, line) in self.lines.iter().enumerate() {
            for (span_idx, span) in line.spans.iter().enumerate() {
                if let Some(reference) = &span.reference {
                    out.push((line_idx, span_idx, reference));
                }
            }
        }
        out
    }

    /// The span covering a display cell, if any.
    pub fn span_at(&self, line: usize, column: usize) -> Option<&HighlightSpan> {
        let line = self.lines.get(line)?;
        let mut start = 0;
        for span in &line.spans {
            let end = start + display_width(&span.text);
            if (start..end).contains(&column) {
                return Some(span);
            }
            start = end;
        }
        None
    }

    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        for (idx, line) in self.lines.iter().enumerate() {
            if idx > 0 {
                out.push('\n');
            }
            for span in &line.spans {
                write_span_markup(&mut out, span);
            }
        }
        out
    }
}

fn write_span_markup(out: &mut String, span: &HighlightSpan) {
    if span.class == TokenClass::Whitespace {
        escape_html_into(out, &span.text);
        return;
    }

    let _ = write!(out, "<span class=\"token {}", span.class.css_class());
    if let Some(reference) = &span.reference {
        out.push_str(" reference\" data-collection=\"");
        escape_html_into(out, reference.collection());
        out.push_str("\" data-id=\"");
        escape_html_into(out, reference.id());
    }
    out.push_str("\">");
    escape_html_into(out, &span.text);
    out.push_str("</span>");
}

fn escape_html_into(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            ch => out.push(ch),
        }
    }
}

fn number_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^-?[0-9]+(?:\.[0-9]+)?(?:[eE][+-]?[0-9]+)?").expect("valid number regex")
    })
}

pub fn highlight(source: &str) -> Highlighted {
    Highlighted {
        lines: source.split('\n').map(highlight_line).collect(),
    }
}

fn highlight_line(line: &str) -> HighlightedLine {
    let bytes = line.as_bytes();
    let mut spans = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        let start = i;
        match b {
            b' ' | b'\t' | b'\r' => {
                while i < bytes.len() && matches!(bytes[i], b' ' | b'\t' | b'\r') {
                    i += 1;
                }
                spans.push(HighlightSpan::new(&line[start..i], TokenClass::Whitespace));
            }
            b'"' => {
                i = string_end(bytes, start).unwrap_or(bytes.len());
                let literal = &line[start..i];
                spans.push(string_span(literal, next_significant(bytes, i) == Some(b':')));
            }
            b'{' | b'}' | b'[' | b']' | b'(' | b')' | b',' | b':' => {
                i += 1;
                spans.push(HighlightSpan::new(&line[start..i], TokenClass::Punctuation));
            }
            b'.' => {
                i += 1;
                spans.push(HighlightSpan::new(".", TokenClass::Operator));
            }
            b if b.is_ascii_alphabetic() || b == b'_' => {
                while i < bytes.len() && (bytes[i].is_ascii_alphanumeric() || bytes[i] == b'_') {
                    i += 1;
                }
                let word = &line[start..i];
                let class = classify_word(word, next_significant(bytes, i));
                spans.push(HighlightSpan::new(word, class));
            }
            _ => {
                if let Some(found) = number_pattern().find(&line[start..]) {
                    i += found.end();
                    spans.push(HighlightSpan::new(found.as_str(), TokenClass::Number));
                } else {
                    let ch_len = line[start..].chars().next().map_or(1, char::len_utf8);
                    i += ch_len;
                    spans.push(HighlightSpan::new(&line[start..i], TokenClass::Plain));
                }
            }
        }
    }

    HighlightedLine { spans }
}

fn next_significant(bytes: &[u8], from: usize) -> Option<u8> {
    bytes[from..].iter().copied().find(|b| !matches!(b, b' ' | b'\t'))
}

fn classify_word(word: &str, next: Option<u8>) -> TokenClass {
    match word {
        "true" | "false" | "null" => return TokenClass::Keyword,
        _ => {}
    }
    match next {
        Some(b':') => TokenClass::Property,
        Some(b'(') => TokenClass::Function,
        _ if word.starts_with(|ch: char| ch.is_ascii_uppercase()) => TokenClass::ClassName,
        _ => TokenClass::Plain,
    }
}

fn string_span(literal: &str, is_key: bool) -> HighlightSpan {
    if is_key {
        return HighlightSpan::new(literal, TokenClass::Property);
    }

    let inner = literal
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'));
    match inner.and_then(decode_reference) {
        Some(reference) => HighlightSpan {
            text: format!("\"{}\"", reference.id()),
            class: TokenClass::String,
            reference: Some(reference),
        },
        None => HighlightSpan::new(literal, TokenClass::String),
    }
}

#[cfg(test)]
mod tests {
    use super::{highlight, Highlighted, TokenClass};
    use crate::model::DocumentRef;
    use crate::render::text::display_width;

    fn reference_at(highlighted: &Highlighted, line: usize, column: usize) -> Option<&DocumentRef> {
        highlighted.span_at(line, column)?.reference.as_ref()
    }

    fn classes(source: &str) -> Vec<(String, TokenClass)> {
        highlight(source).lines[0]
            .spans
            .iter()
            .filter(|span| span.class != TokenClass::Whitespace)
            .map(|span| (span.text.clone(), span.class))
            .collect()
    }

    #[test]
    fn classifies_fql_tokens() {
        assert_eq!(
            classes(r#"{ name: "Ada", n: -1.5e3, ok: true, at: Time("x"), coll: Users }"#),
            vec![
                ("{".to_owned(), TokenClass::Punctuation),
                ("name".to_owned(), TokenClass::Property),
                (":".to_owned(), TokenClass::Punctuation),
                ("\"Ada\"".to_owned(), TokenClass::String),
                (",".to_owned(), TokenClass::Punctuation),
                ("n".to_owned(), TokenClass::Property),
                (":".to_owned(), TokenClass::Punctuation),
                ("-1.5e3".to_owned(), TokenClass::Number),
                (",".to_owned(), TokenClass::Punctuation),
                ("ok".to_owned(), TokenClass::Property),
                (":".to_owned(), TokenClass::Punctuation),
                ("true".to_owned(), TokenClass::Keyword),
                (",".to_owned(), TokenClass::Punctuation),
                ("at".to_owned(), TokenClass::Property),
                (":".to_owned(), TokenClass::Punctuation),
                ("Time".to_owned(), TokenClass::Function),
                ("(".to_owned(), TokenClass::Punctuation),
                ("\"x\"".to_owned(), TokenClass::String),
                (")".to_owned(), TokenClass::Punctuation),
                (",".to_owned(), TokenClass::Punctuation),
                ("coll".to_owned(), TokenClass::Property),
                (":".to_owned(), TokenClass::Punctuation),
                ("Users".to_owned(), TokenClass::ClassName),
                ("}".to_owned(), TokenClass::Punctuation),
            ]
        );
    }

    #[test]
    fn quoted_keys_are_properties() {
        let spans = classes(r#"{ "first name": "Ada" }"#);
        assert_eq!(spans[1], ("\"first name\"".to_owned(), TokenClass::Property));
        assert_eq!(spans[3], ("\"Ada\"".to_owned(), TokenClass::String));
    }

    #[test]
    fn reference_tokens_show_only_the_id() {
        let highlighted = highlight(r#"{ owner: Users.byId("collection:Users:123") }"#);
        assert_eq!(highlighted.plain_text(), r#"{ owner: Users.byId("123") }"#);

        let refs = highlighted.references();
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].2, &DocumentRef::new("Users", "123"));

        let line = &highlighted.lines[0];
        assert!(line.spans[refs[0].1].is_reference());
    }

    #[test]
    fn span_at_resolves_display_cells() {
        let highlighted = highlight("x: Users.byId(\"collection:Users:7\")\nnext");
        let column = highlighted.lines[0].text().find("\"7\"").expect("id span");
        assert_eq!(
            reference_at(&highlighted, 0, column + 1),
            Some(&DocumentRef::new("Users", "7"))
        );
        assert_eq!(reference_at(&highlighted, 0, 0), None);
        assert_eq!(reference_at(&highlighted, 1, 0), None);
        assert_eq!(reference_at(&highlighted, 9, 0), None);
    }

    #[test]
    fn span_at_counts_wide_characters_as_two_cells() {
        let highlighted = highlight("{ \"東京\": Users.byId(\"collection:Users:7\") }");
        let text = highlighted.lines[0].text();
        let prefix = &text[..text.find("\"7\"").expect("id span")];
        let column = display_width(prefix);
        assert_eq!(column, prefix.chars().count() + 2);
        assert_eq!(
            reference_at(&highlighted, 0, column + 1),
            Some(&DocumentRef::new("Users", "7"))
        );
        assert_eq!(reference_at(&highlighted, 0, prefix.chars().count() + 1), None);
    }

    #[test]
    fn markup_escapes_and_exposes_reference_attributes() {
        let markup = highlight(r#"[Users.byId("collection:Users:a%3Cb"), "<i>"]"#).to_markup();
        assert!(markup.contains(
            r#"<span class="token string reference" data-collection="Users" data-id="a&lt;b">&quot;a&lt;b&quot;</span>"#
        ));
        assert!(markup.contains(r#"<span class="token string">&quot;&lt;i&gt;&quot;</span>"#));
        assert!(markup.starts_with(r#"<span class="token punctuation">[</span>"#));
    }

    #[test]
    fn strings_that_are_not_tokens_stay_strings() {
        let highlighted = highlight(r#"{ note: "collection:has space:1" }"#);
        assert!(highlighted.references().is_empty());
    }

    #[test]
    fn unterminated_strings_run_to_end_of_line() {
        let spans = classes(r#"x "open"#);
        assert_eq!(spans[1], ("\"open".to_owned(), TokenClass::String));
    }
}
