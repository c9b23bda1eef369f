// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Fqlbench-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Fqlbench and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Width-aware reflow of FQL literals.
//!
//! Bracket groups (`{}`, `[]`, `()`) are printed on one line when they fit and otherwise broken
//! one item per line, prettier-style. The formatter only looks at brackets, commas, colons and
//! string boundaries, so it works on any FQL-ish text; input it cannot balance is returned as-is.

use memchr::memchr2;

use crate::render::text::display_width;

pub const DEFAULT_PRINT_WIDTH: usize = 80;
const INDENT: usize = 2;

pub fn format_fql(source: &str, width: usize) -> String {
    let Some(tokens) = tokenize(source) else {
        return source.to_owned();
    };
    let mut pos = 0;
    let Some(items) = parse_items(&tokens, &mut pos, None) else {
        return source.to_owned();
    };
    // A bare top-level comma list is not a literal we know how to lay out.
    let [nodes] = items.as_slice() else {
        return source.to_owned();
    };

    let mut printer = Printer {
        out: String::with_capacity(source.len() + source.len() / 4),
        col: 0,
        width,
    };
    printer.print_seq(nodes, 0, 0);
    printer.out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tok<'a> {
    Open(char),
    Close(char),
    Comma,
    Colon,
    Str(&'a str),
    Atom(&'a str),
}

fn tokenize(source: &str) -> Option<Vec<Tok<'_>>> {
    let bytes = source.as_bytes();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        match b {
            b' ' | b'\t' | b'\n' | b'\r' => i += 1,
            b'{' | b'[' | b'(' => {
                tokens.push(Tok::Open(b as char));
                i += 1;
            }
            b'}' | b']' | b')' => {
                tokens.push(Tok::Close(b as char));
                i += 1;
            }
            b',' => {
                tokens.push(Tok::Comma);
                i += 1;
            }
            b':' => {
                tokens.push(Tok::Colon);
                i += 1;
            }
            b'"' => {
                let end = string_end(bytes, i)?;
                tokens.push(Tok::Str(&source[i..end]));
                i = end;
            }
            _ => {
                let start = i;
                while i < bytes.len() && !is_atom_boundary(bytes[i]) {
                    i += 1;
                }
                tokens.push(Tok::Atom(&source[start..i]));
            }
        }
    }

    Some(tokens)
}

/// Byte index just past the closing quote of the string starting at `start`.
pub(crate) fn string_end(bytes: &[u8], start: usize) -> Option<usize> {
    let mut i = start + 1;
    loop {
        let offset = memchr2(b'"', b'\\', &bytes[i..])?;
        i += offset;
        if bytes[i] == b'\\' {
            i += 2;
            if i > bytes.len() {
                return None;
            }
            continue;
        }
        return Some(i + 1);
    }
}

fn is_atom_boundary(b: u8) -> bool {
    matches!(
        b,
        b' ' | b'\t' | b'\n' | b'\r' | b'{' | b'[' | b'(' | b'}' | b']' | b')' | b',' | b':' | b'"'
    )
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Node<'a> {
    Atom(&'a str),
    Str(&'a str),
    Colon,
    Group(Group<'a>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Group<'a> {
    open: char,
    close: char,
    items: Vec<Vec<Node<'a>>>,
}

fn closing_for(open: char) -> char {
    match open {
        '{' => '}',
        '[' => ']',
        _ => ')',
    }
}

fn parse_items<'a>(
    tokens: &[Tok<'a>],
    pos: &mut usize,
    close: Option<char>,
) -> Option<Vec<Vec<Node<'a>>>> {
    let mut items = Vec::new();
    let mut current = Vec::new();

    loop {
        let Some(tok) = tokens.get(*pos).copied() else {
            // Running out of input is only fine at the top level.
            if close.is_some() {
                return None;
            }
            break;
        };
        *pos += 1;

        match tok {
            Tok::Close(ch) => {
                if close != Some(ch) {
                    return None;
                }
                break;
            }
            Tok::Open(open) => {
                let close = closing_for(open);
                let inner = parse_items(tokens, pos, Some(close))?;
                current.push(Node::Group(Group {
                    open,
                    close,
                    items: inner,
                }));
            }
            Tok::Comma => items.push(std::mem::take(&mut current)),
            Tok::Colon => current.push(Node::Colon),
            Tok::Str(text) => current.push(Node::Str(text)),
            Tok::Atom(text) => current.push(Node::Atom(text)),
        }
    }

    if !current.is_empty() {
        items.push(current);
    }
    Some(items)
}

fn separator(prev: &Node<'_>, next: &Node<'_>) -> &'static str {
    match (prev, next) {
        (_, Node::Colon) => "",
        (Node::Colon, _) => " ",
        (Node::Atom(_) | Node::Group(_), Node::Group(group)) if group.open != '{' => "",
        (_, Node::Atom(atom)) if atom.starts_with('.') => "",
        _ => " ",
    }
}

fn flat_seq(nodes: &[Node<'_>], out: &mut String) {
    for (idx, node) in nodes.iter().enumerate() {
        if idx > 0 {
            out.push_str(separator(&nodes[idx - 1], node));
        }
        match node {
            Node::Atom(text) | Node::Str(text) => out.push_str(text),
            Node::Colon => out.push(':'),
            Node::Group(group) => flat_group(group, out),
        }
    }
}

fn flat_group(group: &Group<'_>, out: &mut String) {
    out.push(group.open);
    let padded = group.open == '{' && !group.items.is_empty();
    if padded {
        out.push(' ');
    }
    for (idx, item) in group.items.iter().enumerate() {
        if idx > 0 {
            out.push_str(", ");
        }
        flat_seq(item, out);
    }
    if padded {
        out.push(' ');
    }
    out.push(group.close);
}

struct Printer {
    out: String,
    col: usize,
    width: usize,
}

impl Printer {
    fn push(&mut self, text: &str) {
        self.out.push_str(text);
        self.col += display_width(text);
    }

    fn newline(&mut self, indent: usize) {
        self.out.push('\n');
        self.out.extend(std::iter::repeat(' ').take(indent));
        self.col = indent;
    }

    fn print_seq(&mut self, nodes: &[Node<'_>], indent: usize, suffix_len: usize) {
        for (idx, node) in nodes.iter().enumerate() {
            if idx > 0 {
                self.push(separator(&nodes[idx - 1], node));
            }
            let suffix = if idx + 1 == nodes.len() { suffix_len } else { 0 };
            match node {
                Node::Atom(text) | Node::Str(text) => self.push(text),
                Node::Colon => self.push(":"),
                Node::Group(group) => self.print_group(group, indent, suffix),
            }
        }
    }

    fn print_group(&mut self, group: &Group<'_>, indent: usize, suffix_len: usize) {
        let mut flat = String::new();
        flat_group(group, &mut flat);
        if group.items.is_empty() || self.col + display_width(&flat) + suffix_len <= self.width {
            self.push(&flat);
            return;
        }

        let inner = indent + INDENT;
        let trailing_comma = group.open != '(';
        self.push(&group.open.to_string());
        for (idx, item) in group.items.iter().enumerate() {
            self.newline(inner);
            self.print_seq(item, inner, 1);
            if trailing_comma || idx + 1 < group.items.len() {
                self.push(",");
            }
        }
        self.newline(indent);
        self.push(&group.close.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::{format_fql, string_end, DEFAULT_PRINT_WIDTH};

    #[test]
    fn short_literals_stay_on_one_line() {
        assert_eq!(
            format_fql(r#"{name: "Ada", age: 30}"#, DEFAULT_PRINT_WIDTH),
            r#"{ name: "Ada", age: 30 }"#
        );
        assert_eq!(format_fql("[1, 2, 3]", DEFAULT_PRINT_WIDTH), "[1, 2, 3]");
        assert_eq!(format_fql("{}", DEFAULT_PRINT_WIDTH), "{}");
    }

    #[test]
    fn long_objects_break_with_trailing_commas() {
        let src = r#"{name: "Ada Lovelace", email: "ada@example.com", roles: ["admin", "analyst"]}"#;
        assert_eq!(
            format_fql(src, 40),
            "{\n  name: \"Ada Lovelace\",\n  email: \"ada@example.com\",\n  roles: [\"admin\", \"analyst\"],\n}"
        );
    }

    #[test]
    fn calls_and_method_chains_keep_tight_spacing() {
        assert_eq!(
            format_fql(r#"{owner: Users.byId("collection:Users:1"), at: Time("2023")}"#, 80),
            r#"{ owner: Users.byId("collection:Users:1"), at: Time("2023") }"#
        );
        assert_eq!(format_fql("Users.all().reverse()", 80), "Users.all().reverse()");
    }

    #[test]
    fn nested_groups_break_outside_in() {
        let src = r#"{data: [{id: "1", name: "first document"}, {id: "2", name: "second document"}]}"#;
        assert_eq!(
            format_fql(src, 50),
            "{\n  data: [\n    { id: \"1\", name: \"first document\" },\n    { id: \"2\", name: \"second document\" },\n  ],\n}"
        );
    }

    #[test]
    fn strings_with_brackets_are_opaque() {
        assert_eq!(
            format_fql(r#"{text: "a, b: {c}", q: "say \"hi\""}"#, 80),
            r#"{ text: "a, b: {c}", q: "say \"hi\"" }"#
        );
    }

    #[test]
    fn unbalanced_input_is_returned_unchanged() {
        assert_eq!(format_fql("{a: [1, 2}", 80), "{a: [1, 2}");
        assert_eq!(format_fql("{a: \"open", 80), "{a: \"open");
        assert_eq!(format_fql("a, b", 80), "a, b");
    }

    #[test]
    fn string_end_skips_escapes() {
        let src = br#""a\"b" rest"#;
        assert_eq!(string_end(src, 0), Some(6));
        assert_eq!(string_end(br#""open"#, 0), None);
    }
}
