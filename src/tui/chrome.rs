// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Fqlbench-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Fqlbench and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.


/// Focus, title, footer and help helpers used by TUI rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Sidebar,
    Editor,
    Results,
}

impl Focus {
    fn cycle(self) -> Self {
        match self {
            Self::Sidebar => Self::Editor,
            Self::Editor => Self::Results,
            Self::Results => Self::Sidebar,
        }
    }

    fn cycle_back(self) -> Self {
        match self {
            Self::Sidebar => Self::Results,
            Self::Editor => Self::Sidebar,
            Self::Results => Self::Editor,
        }
    }
}

fn footer_uses_compact_mode(area: Rect) -> bool {
    area.width < 90
}

fn view_title(label: &str, tail: &str) -> String {
    let mut title = format!("─ {label}");
    let tail = tail.trim();
    if !tail.is_empty() {
        title.push_str(" · ");
        title.push_str(tail);
    }
    title.push(' ');
    title
}

fn tab_title(label: &str, running: bool) -> String {
    if running {
        format!(" {label} {RUNNING_MARKER} ")
    } else {
        format!(" {label} ")
    }
}

fn footer_line<S: KeyValueStore>(app: &mut App<S>, compact: bool) -> Line<'static> {
    let mut spans = Vec::<Span<'static>>::new();

    if compact {
        push_footer_entry(&mut spans, "RUN", "F5");
        push_footer_entry(&mut spans, "HELP", "F1");
        push_footer_entry(&mut spans, "QUIT", "^Q");
    } else {
        push_footer_entry(&mut spans, "RUN", "F5");
        push_footer_entry(&mut spans, "NEW", "^T");
        push_footer_entry(&mut spans, "CLOSE", "^W");
        push_footer_entry(&mut spans, "TABS", "Alt-←→");
        match app.focus {
            Focus::Sidebar => push_footer_entry(&mut spans, "OPEN", "Enter"),
            Focus::Results => {
                let no_result = !app.has_result();
                let no_references = app.reference_count() == 0;
                push_footer_entry_maybe_disabled(&mut spans, "FOLLOW", "Enter", no_references);
                push_footer_entry_maybe_disabled(&mut spans, "COPY", "^Y", no_result);
            }
            Focus::Editor => {}
        }
        push_footer_entry(&mut spans, "HELP", "F1");
        push_footer_entry(&mut spans, "QUIT", "^Q");
    }

    let running = app.workbench.bridge().running_count();
    if running > 0 {
        spans.push(Span::styled(
            format!("  {RUNNING_MARKER} {running} running"),
            Style::default().fg(Color::Yellow),
        ));
    }

    let message = app.active_toast().or(app.workbench.status());
    if let Some(message) = message {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            "Toast:".to_owned(),
            Style::default().fg(FOOTER_LABEL_COLOR),
        ));
        spans.push(Span::raw(message.to_owned()));
    }

    Line::from(spans)
}

fn help_key_style() -> Style {
    Style::default()
        .fg(FOOTER_KEY_COLOR)
        .add_modifier(Modifier::BOLD)
}

fn help_header_style() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

fn centered_rect(width_percent: u16, height_percent: u16, area: Rect) -> Rect {
    let vertical_margin = (100u16.saturating_sub(height_percent)) / 2;
    let horizontal_margin = (100u16.saturating_sub(width_percent)) / 2;

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(vertical_margin),
            Constraint::Percentage(height_percent),
            Constraint::Percentage(vertical_margin),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(horizontal_margin),
            Constraint::Percentage(width_percent),
            Constraint::Percentage(horizontal_margin),
        ])
        .split(vertical[1])[1]
}

fn help_kv(key: &str, desc: &str, key_width: usize, key_style: Style) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{key:>width$}", width = key_width), key_style),
        Span::raw("  "),
        Span::raw(desc.to_owned()),
    ])
}

const HELP_SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Global",
        &[
            ("F1", "Help (toggle)"),
            ("Ctrl-Q", "Quit"),
            ("Tab/Shift-Tab", "Cycle focus"),
            ("F5, Ctrl-R", "Run the active tab"),
            ("Ctrl-Y", "Copy the result"),
        ],
    ),
    (
        "Tabs",
        &[
            ("Ctrl-T", "New tab"),
            ("Ctrl-W", "Close tab"),
            ("Ctrl-O", "Close other tabs"),
            ("F2", "Rename tab"),
            ("Alt-←/→", "Previous/next tab"),
            ("Alt-Shift-←/→", "Move tab left/right"),
        ],
    ),
    (
        "Collections",
        &[("↑/↓", "Move cursor"), ("Enter", "Query the collection")],
    ),
    (
        "Result",
        &[
            ("↑/↓", "Select reference"),
            ("PgUp/PgDn", "Scroll"),
            ("Enter", "Open the referenced document"),
        ],
    ),
];

fn render_help(frame: &mut Frame<'_>, main_area: Rect) {
    let area = centered_rect(70, 80, main_area);
    frame.render_widget(Clear, area);

    let key_style = help_key_style();
    let header_style = help_header_style();
    let key_col_width = HELP_SECTIONS
        .iter()
        .flat_map(|(_, entries)| entries.iter())
        .map(|(key, _)| display_width(key))
        .max()
        .unwrap_or(0);

    let mut lines = Vec::<Line<'static>>::new();
    for (idx, (header, entries)) in HELP_SECTIONS.iter().enumerate() {
        if idx > 0 {
            lines.push(Line::default());
        }
        lines.push(Line::from(Span::styled(
            format!("--- {header} ---"),
            header_style,
        )));
        for (key, desc) in entries.iter() {
            lines.push(help_kv(key, desc, key_col_width, key_style));
        }
    }
    lines.push(Line::default());
    lines.push(Line::from(vec![
        Span::styled("Note: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            "clicking a reference in the result opens it in its own tab.",
            Style::default().fg(Color::DarkGray),
        ),
    ]));

    let block = Block::default()
        .borders(Borders::ALL)
        .title("─ Help ─")
        .border_style(Style::default().fg(Color::Cyan))
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn push_footer_entry(spans: &mut Vec<Span<'static>>, label: &str, value: &str) {
    push_footer_entry_maybe_disabled(spans, label, value, false);
}

fn push_footer_entry_maybe_disabled(
    spans: &mut Vec<Span<'static>>,
    label: &str,
    value: &str,
    disabled: bool,
) {
    if !spans.is_empty() {
        spans.push(Span::styled(
            " | ".to_owned(),
            Style::default().fg(FOOTER_LABEL_COLOR),
        ));
    }
    spans.push(Span::styled(
        format!("{}:", footer_label_ucfirst(label)),
        Style::default().fg(FOOTER_LABEL_COLOR),
    ));
    spans.push(footer_value_span(value, disabled));
}

fn footer_label_ucfirst(label: &str) -> String {
    let lower = label.to_lowercase();
    let mut chars = lower.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let mut out = first.to_uppercase().collect::<String>();
    out.push_str(chars.as_str());
    out
}

fn footer_value_span(value: &str, disabled: bool) -> Span<'static> {
    let color = if disabled {
        Color::DarkGray
    } else {
        FOOTER_KEY_COLOR
    };
    Span::styled(
        value.to_owned(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )
}
