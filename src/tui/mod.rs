// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Fqlbench-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Fqlbench and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Terminal UI.
//!
//! A ratatui + crossterm front end for the workbench: collections sidebar, tab bar, query editor
//! and result pane. Navigation (sidebar entries, reference clicks) is sent to the controller as
//! [`WorkbenchEvent`]s; the UI itself never edits the session.

use std::{
    error::Error,
    io,
    time::{Duration, Instant},
};

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    style::Print,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};

use crate::exec::{Completion, SubmitError};
use crate::model::{TabId, TabOverrides};
use crate::ops::{ApplyError, TabOp};
use crate::render::text::{display_width, truncate_with_ellipsis};
use crate::render::RenderedResult;
use crate::store::KeyValueStore;
use crate::ui::WorkbenchEvent;
use crate::workbench::Workbench;

mod editor;
mod theme;

use editor::TextEditor;
use theme::TuiTheme;

const FOOTER_LABEL_COLOR: Color = Color::Gray;
const FOOTER_KEY_COLOR: Color = Color::Cyan;
const SIDEBAR_WIDTH: u16 = 26;
const TOAST_TTL: Duration = Duration::from_secs(3);
const IDLE_TICK: Duration = Duration::from_millis(50);
const RUNNING_MARKER: &str = "●";

/// Runs the interactive terminal UI until the user quits.
///
/// Must be awaited on a tokio runtime; query executions run as tasks on the same runtime.
pub async fn run<S: KeyValueStore>(workbench: Workbench<S>) -> Result<(), Box<dyn Error>> {
    let mut terminal = TerminalSession::new()?;
    let mut app = App::new(workbench);

    while !app.should_quit {
        if app.workbench.drain_completions() > 0 {
            app.sync_editor();
        }
        terminal.draw(|frame| draw(frame, &mut app))?;
        if let Some(text) = app.take_clipboard() {
            if let Err(err) = terminal.copy_to_clipboard(&text) {
                app.set_toast(format!("Copy failed: {err}"));
            }
        }

        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                _ => {}
            }
            if app.should_quit {
                return Ok(());
            }
        }

        tokio::select! {
            Some(completion) = app.workbench.next_completion() => app.handle_completion(completion),
            _ = tokio::time::sleep(IDLE_TICK) => {}
        }
    }

    Ok(())
}

fn draw<S: KeyValueStore>(frame: &mut Frame<'_>, app: &mut App<S>) {
    let area = frame.size();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);
    let main_area = rows[0];
    let footer_area = rows[1];

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
        .split(main_area);
    let sidebar_area = columns[0];
    let work_area = columns[1];

    let panes = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Percentage(35),
            Constraint::Min(0),
        ])
        .split(work_area);

    draw_sidebar(frame, app, sidebar_area);
    draw_tab_bar(frame, app, panes[0]);
    draw_editor(frame, app, panes[1]);
    draw_results(frame, app, panes[2]);

    let footer = footer_line(app, footer_uses_compact_mode(footer_area));
    frame.render_widget(Paragraph::new(footer), footer_area);

    if let Some(buffer) = &app.rename_buffer {
        draw_rename(frame, buffer, main_area);
    }
    if app.show_help {
        render_help(frame, main_area);
    }
}

fn draw_sidebar<S: KeyValueStore>(frame: &mut Frame<'_>, app: &mut App<S>, area: Rect) {
    let focused = app.focus == Focus::Sidebar;
    let title = view_title("Collections", app.workbench.connection());
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(app.theme.panel_border_style(focused));
    let inner = block.inner(area);
    app.hit_areas.sidebar = Some(inner);

    let collections = app.workbench.collections();
    if collections.is_empty() {
        let empty = Paragraph::new("No collections").style(app.theme.muted_style());
        frame.render_widget(empty.block(block), area);
        return;
    }

    let width = inner.width as usize;
    let items = collections
        .iter()
        .map(|name| ListItem::new(truncate_with_ellipsis(name, width)))
        .collect::<Vec<_>>();
    let list = List::new(items)
        .block(block)
        .highlight_style(if focused {
            app.theme.selection_style()
        } else {
            app.theme.base_style()
        });
    let mut state = ListState::default();
    state.select(Some(app.sidebar_cursor.min(collections.len() - 1)));
    frame.render_stateful_widget(list, area, &mut state);
    app.sidebar_offset = state.offset();
}

fn draw_tab_bar<S: KeyValueStore>(frame: &mut Frame<'_>, app: &mut App<S>, area: Rect) {
    app.hit_areas.tabs.clear();
    let session = app.workbench.session();
    let active = session.active_tab_id();

    let mut spans = Vec::new();
    let mut x = area.x;
    let right = area.x.saturating_add(area.width);
    for tab in session.tabs() {
        let running = app.workbench.is_running(tab.tab_id());
        let label = tab_title(tab.label(), running);
        let width = display_width(&label) as u16;
        if x >= right {
            break;
        }
        let visible = width.min(right - x);
        app.hit_areas
            .tabs
            .push((Rect::new(x, area.y, visible, 1), tab.tab_id().clone()));

        let style = if tab.tab_id() == active {
            app.theme.selection_style()
        } else if running {
            app.theme.running_style()
        } else {
            app.theme.base_style()
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));
        x = x.saturating_add(width + 1);
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_editor<S: KeyValueStore>(frame: &mut Frame<'_>, app: &mut App<S>, area: Rect) {
    let focused = app.focus == Focus::Editor;
    let running = app.workbench.is_running(app.workbench.session().active_tab_id());
    let title = view_title("Query", if running { "running" } else { "" });
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(app.theme.panel_border_style(focused));
    let inner = block.inner(area);

    let (row, col) = app.editor.cursor_position();
    let visible_rows = inner.height.max(1) as usize;
    let scroll = row.saturating_sub(visible_rows - 1);
    let paragraph = Paragraph::new(app.editor.text().to_owned())
        .block(block)
        .scroll((scroll as u16, 0));
    frame.render_widget(paragraph, area);

    if focused && app.rename_buffer.is_none() && !app.show_help {
        let x = inner.x.saturating_add(col as u16).min(inner.right().saturating_sub(1));
        let y = inner.y.saturating_add((row - scroll) as u16);
        frame.set_cursor(x, y);
    }
}

fn draw_results<S: KeyValueStore>(frame: &mut Frame<'_>, app: &mut App<S>, area: Rect) {
    let focused = app.focus == Focus::Results;
    let active = app.workbench.session().active_tab_id().clone();
    let running = app.workbench.is_running(&active);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(view_title("Result", ""))
        .border_style(app.theme.panel_border_style(focused));
    let inner = block.inner(area);

    let theme = app.theme.clone();
    let selected = app.result_cursor;
    let scroll = app.result_scroll;
    let Some(rendered) = app.workbench.rendered(&active) else {
        app.hit_areas.result_body = None;
        let message = if running {
            "Running…"
        } else {
            "Run the query with F5 to see its result"
        };
        let paragraph = Paragraph::new(message).style(theme.muted_style()).block(block);
        frame.render_widget(paragraph, area);
        return;
    };

    let (lines, header_rows) = result_lines(rendered, &theme, focused.then_some(selected), running);
    app.hit_areas.result_body = Some((inner, header_rows));
    // Unwrapped so screen rows map one-to-one onto body lines for hit-testing.
    let paragraph = Paragraph::new(Text::from(lines))
        .block(block)
        .scroll((scroll, 0));
    frame.render_widget(paragraph, area);
}

/// Header lines (banner or stats) followed by the highlighted body.
fn result_lines(
    rendered: &RenderedResult,
    theme: &TuiTheme,
    selected_reference: Option<usize>,
    running: bool,
) -> (Vec<Line<'static>>, u16) {
    let mut lines = Vec::new();
    if running {
        lines.push(Line::from(Span::styled("Running…", theme.running_style())));
    }
    if let Some(banner) = &rendered.banner {
        lines.push(Line::from(Span::styled(banner.clone(), theme.error_style())));
    }
    if let Some(stats) = &rendered.stats {
        lines.push(Line::from(Span::styled(stats.clone(), theme.muted_style())));
    }
    lines.push(Line::default());
    let header_rows = lines.len() as u16;

    let mut reference_idx = 0usize;
    for line in &rendered.body.lines {
        let spans = line
            .spans
            .iter()
            .map(|span| {
                let style = if span.is_reference() {
                    let is_selected = selected_reference == Some(reference_idx);
                    reference_idx += 1;
                    theme.reference_style(is_selected)
                } else {
                    theme.token_style(span.class)
                };
                Span::styled(span.text.clone(), style)
            })
            .collect::<Vec<_>>();
        lines.push(Line::from(spans));
    }
    (lines, header_rows)
}

fn draw_rename(frame: &mut Frame<'_>, buffer: &str, main_area: Rect) {
    let area = centered_rect(50, 20, main_area);
    let area = Rect::new(area.x, area.y, area.width, main_area.height.min(3));
    frame.render_widget(Clear, area);
    let paragraph = Paragraph::new(format!("{buffer}▏")).block(
        Block::default()
            .borders(Borders::ALL)
            .title(view_title("Rename tab", "Enter to confirm, Esc to cancel")),
    );
    frame.render_widget(paragraph, area);
}

include!("chrome.rs");

#[derive(Debug, Clone)]
struct Toast {
    message: String,
    expires_at: Instant,
}

/// Screen regions recorded while drawing, for mouse hit-testing.
#[derive(Debug, Clone, Default)]
struct HitAreas {
    tabs: Vec<(Rect, TabId)>,
    sidebar: Option<Rect>,
    /// Result pane interior plus the number of header rows above the body.
    result_body: Option<(Rect, u16)>,
}

struct App<S> {
    workbench: Workbench<S>,
    theme: TuiTheme,
    focus: Focus,
    editor: TextEditor,
    editor_tab: TabId,
    sidebar_cursor: usize,
    sidebar_offset: usize,
    result_cursor: usize,
    result_scroll: u16,
    rename_buffer: Option<String>,
    show_help: bool,
    toast: Option<Toast>,
    clipboard: Option<String>,
    hit_areas: HitAreas,
    should_quit: bool,
}

impl<S: KeyValueStore> App<S> {
    fn new(workbench: Workbench<S>) -> Self {
        let active = workbench.session().active_tab();
        let editor = TextEditor::new(active.content());
        let editor_tab = active.tab_id().clone();
        Self {
            workbench,
            theme: TuiTheme,
            focus: Focus::Editor,
            editor,
            editor_tab,
            sidebar_cursor: 0,
            sidebar_offset: 0,
            result_cursor: 0,
            result_scroll: 0,
            rename_buffer: None,
            show_help: false,
            toast: None,
            clipboard: None,
            hit_areas: HitAreas::default(),
            should_quit: false,
        }
    }

    /// Reloads the editor buffer when the active tab, or its content, changed underneath it.
    fn sync_editor(&mut self) {
        let active = self.workbench.session().active_tab();
        let switched = active.tab_id() != &self.editor_tab;
        if switched || active.content() != self.editor.text() {
            self.editor = TextEditor::new(active.content());
            self.editor_tab = active.tab_id().clone();
        }
        if switched {
            self.result_cursor = 0;
            self.result_scroll = 0;
        }
    }

    fn set_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast {
            message: message.into(),
            expires_at: Instant::now() + TOAST_TTL,
        });
    }

    fn active_toast(&self) -> Option<&str> {
        self.toast
            .as_ref()
            .filter(|toast| toast.expires_at > Instant::now())
            .map(|toast| toast.message.as_str())
    }

    fn take_clipboard(&mut self) -> Option<String> {
        self.clipboard.take()
    }

    fn apply(&mut self, op: TabOp) {
        match self.workbench.apply(op) {
            Ok(_) => {}
            Err(ApplyError::LastTab { .. }) => self.set_toast("Cannot close the last tab"),
            Err(err) => self.set_toast(err.to_string()),
        }
        self.sync_editor();
    }

    fn emit(&mut self, event: WorkbenchEvent) {
        if let Err(err) = self.workbench.handle_event(event) {
            self.set_toast(err.to_string());
        }
        self.sync_editor();
    }

    fn handle_completion(&mut self, completion: Completion) {
        self.emit(WorkbenchEvent::ExecutionFinished(completion));
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if self.handle_key_event(key) {
            self.should_quit = true;
        }
    }

    /// Returns `true` when the app should quit.
    fn handle_key_event(&mut self, key: KeyEvent) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);
        let shift = key.modifiers.contains(KeyModifiers::SHIFT);

        if ctrl && key.code == KeyCode::Char('q') {
            return true;
        }

        if self.rename_buffer.is_some() {
            self.handle_rename_key(key.code);
            return false;
        }

        if self.show_help {
            if matches!(key.code, KeyCode::Esc | KeyCode::F(1)) {
                self.show_help = false;
            }
            return false;
        }

        match key.code {
            KeyCode::F(1) => self.show_help = true,
            KeyCode::F(5) => self.run_active(),
            KeyCode::Char('r') if ctrl => self.run_active(),
            KeyCode::Char('t') if ctrl => {
                self.apply(TabOp::CreateTab(TabOverrides::default()));
                self.focus = Focus::Editor;
            }
            KeyCode::Char('w') if ctrl => {
                let active = self.workbench.session().active_tab_id().clone();
                self.apply(TabOp::CloseTab(active));
            }
            KeyCode::Char('o') if ctrl => {
                let active = self.workbench.session().active_tab_id().clone();
                self.apply(TabOp::CloseOthers(active));
            }
            KeyCode::Char('y') if ctrl => self.copy_result(),
            KeyCode::F(2) => {
                self.rename_buffer = Some(self.workbench.session().active_tab().label().to_owned());
            }
            KeyCode::Left if alt && shift => self.move_active_tab(-1),
            KeyCode::Right if alt && shift => self.move_active_tab(1),
            KeyCode::Left if alt => self.switch_tab(-1),
            KeyCode::Right if alt => self.switch_tab(1),
            KeyCode::Tab => self.focus = self.focus.cycle(),
            KeyCode::BackTab => self.focus = self.focus.cycle_back(),
            KeyCode::Esc => self.toast = None,
            code => match self.focus {
                Focus::Editor if !ctrl && !alt => self.handle_editor_key(code),
                Focus::Sidebar => self.handle_sidebar_key(code),
                Focus::Results => self.handle_results_key(code),
                Focus::Editor => {}
            },
        }
        false
    }

    fn handle_rename_key(&mut self, code: KeyCode) {
        let Some(buffer) = self.rename_buffer.as_mut() else {
            return;
        };
        match code {
            KeyCode::Char(ch) => buffer.push(ch),
            KeyCode::Backspace => {
                buffer.pop();
            }
            KeyCode::Esc => self.rename_buffer = None,
            KeyCode::Enter => {
                let label = self.rename_buffer.take().unwrap_or_default();
                let label = label.trim();
                if label.is_empty() {
                    self.set_toast("Tab name cannot be empty");
                    return;
                }
                let tab_id = self.workbench.session().active_tab_id().clone();
                self.apply(TabOp::RenameTab {
                    tab_id,
                    label: label.to_owned(),
                });
            }
            _ => {}
        }
    }

    fn handle_editor_key(&mut self, code: KeyCode) {
        let changed = match code {
            KeyCode::Char(ch) => {
                self.editor.insert_char(ch);
                true
            }
            KeyCode::Enter => {
                self.editor.insert_newline();
                true
            }
            KeyCode::Backspace => self.editor.backspace(),
            KeyCode::Delete => self.editor.delete(),
            KeyCode::Left => {
                self.editor.move_left();
                false
            }
            KeyCode::Right => {
                self.editor.move_right();
                false
            }
            KeyCode::Up => {
                self.editor.move_up();
                false
            }
            KeyCode::Down => {
                self.editor.move_down();
                false
            }
            KeyCode::Home => {
                self.editor.move_home();
                false
            }
            KeyCode::End => {
                self.editor.move_end();
                false
            }
            _ => false,
        };

        if changed {
            let tab_id = self.editor_tab.clone();
            let content = self.editor.text().to_owned();
            self.apply(TabOp::UpdateContent { tab_id, content });
        }
    }

    fn handle_sidebar_key(&mut self, code: KeyCode) {
        let count = self.workbench.collections().len();
        match code {
            KeyCode::Up => self.sidebar_cursor = self.sidebar_cursor.saturating_sub(1),
            KeyCode::Down if count > 0 => {
                self.sidebar_cursor = (self.sidebar_cursor + 1).min(count - 1);
            }
            KeyCode::Enter => self.open_collection(self.sidebar_cursor),
            _ => {}
        }
    }

    fn handle_results_key(&mut self, code: KeyCode) {
        let count = self.reference_count();
        match code {
            KeyCode::Up => self.result_cursor = self.result_cursor.saturating_sub(1),
            KeyCode::Down if count > 0 => {
                self.result_cursor = (self.result_cursor + 1).min(count - 1);
            }
            KeyCode::PageUp => self.result_scroll = self.result_scroll.saturating_sub(10),
            KeyCode::PageDown => self.result_scroll = self.result_scroll.saturating_add(10),
            KeyCode::Enter => self.open_selected_reference(),
            _ => {}
        }
    }

    fn has_result(&mut self) -> bool {
        let active = self.workbench.session().active_tab_id().clone();
        self.workbench.rendered(&active).is_some()
    }

    fn reference_count(&mut self) -> usize {
        let active = self.workbench.session().active_tab_id().clone();
        self.workbench
            .rendered(&active)
            .map_or(0, |rendered| rendered.body.references().len())
    }

    fn open_collection(&mut self, index: usize) {
        let Some(collection) = self.workbench.collections().get(index).cloned() else {
            return;
        };
        self.emit(WorkbenchEvent::CollectionActivated(collection));
        self.focus = Focus::Results;
    }

    fn open_selected_reference(&mut self) {
        let active = self.workbench.session().active_tab_id().clone();
        let event = self.workbench.rendered(&active).and_then(|rendered| {
            let (line, span, _) = *rendered.body.references().get(self.result_cursor)?;
            WorkbenchEvent::from_span(&rendered.body.lines[line].spans[span])
        });
        if let Some(event) = event {
            self.emit(event);
        }
    }

    fn run_active(&mut self) {
        match self.workbench.submit_active() {
            Ok(()) => {
                self.result_cursor = 0;
                self.result_scroll = 0;
            }
            Err(SubmitError::AlreadyRunning { .. }) => self.set_toast("Query already running"),
            Err(SubmitError::EmptyQuery { .. }) => self.set_toast("Nothing to run"),
        }
    }

    fn switch_tab(&mut self, step: isize) {
        let Some(target) = self.neighbour_tab(step) else {
            return;
        };
        self.apply(TabOp::SetActiveTab(target));
    }

    fn move_active_tab(&mut self, step: isize) {
        let Some(target) = self.neighbour_tab(step) else {
            return;
        };
        let dragged = self.workbench.session().active_tab_id().clone();
        self.apply(TabOp::ReorderTab { dragged, target });
    }

    fn neighbour_tab(&self, step: isize) -> Option<TabId> {
        let session = self.workbench.session();
        let index = session.tab_index(session.active_tab_id())?;
        let target = index.checked_add_signed(step)?;
        session.tabs().get(target).map(|tab| tab.tab_id().clone())
    }

    fn copy_result(&mut self) {
        let active = self.workbench.session().active_tab_id().clone();
        let Some(text) = self
            .workbench
            .rendered(&active)
            .map(|rendered| rendered.body.plain_text())
        else {
            self.set_toast("Nothing to copy");
            return;
        };
        self.clipboard = Some(text);
        self.set_toast("Result copied");
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.click(mouse.column, mouse.row),
            MouseEventKind::ScrollDown if self.focus == Focus::Results => {
                self.result_scroll = self.result_scroll.saturating_add(1);
            }
            MouseEventKind::ScrollUp if self.focus == Focus::Results => {
                self.result_scroll = self.result_scroll.saturating_sub(1);
            }
            _ => {}
        }
    }

    fn click(&mut self, column: u16, row: u16) {
        if self.show_help || self.rename_buffer.is_some() {
            return;
        }

        let tab = self
            .hit_areas
            .tabs
            .iter()
            .find(|(rect, _)| contains(*rect, column, row))
            .map(|(_, tab_id)| tab_id.clone());
        if let Some(tab_id) = tab {
            self.apply(TabOp::SetActiveTab(tab_id));
            return;
        }

        if let Some(area) = self.hit_areas.sidebar.filter(|area| contains(*area, column, row)) {
            self.focus = Focus::Sidebar;
            let index = self.sidebar_offset + (row - area.y) as usize;
            if index < self.workbench.collections().len() {
                self.sidebar_cursor = index;
                self.open_collection(index);
            }
            return;
        }

        if let Some((area, header_rows)) = self.hit_areas.result_body {
            if !contains(area, column, row) {
                return;
            }
            self.focus = Focus::Results;
            let content_row = (row - area.y).saturating_add(self.result_scroll);
            let Some(line) = content_row.checked_sub(header_rows) else {
                return;
            };
            let active = self.workbench.session().active_tab_id().clone();
            let event = self.workbench.rendered(&active).and_then(|rendered| {
                rendered
                    .body
                    .span_at(line as usize, (column - area.x) as usize)
                    .and_then(WorkbenchEvent::from_span)
            });
            if let Some(event) = event {
                self.emit(event);
            }
        }
    }
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
}

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture).map_err(|err| {
            teardown_terminal();
            err
        })?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).map_err(|err| {
            teardown_terminal();
            err
        })?;
        terminal.clear().map_err(|err| {
            teardown_terminal();
            err
        })?;

        Ok(Self { terminal })
    }

    fn draw(&mut self, draw_fn: impl FnOnce(&mut Frame<'_>)) -> io::Result<()> {
        self.terminal.draw(draw_fn)?;
        Ok(())
    }

    fn copy_to_clipboard(&mut self, text: &str) -> io::Result<()> {
        execute!(self.terminal.backend_mut(), Print(osc52_sequence(text)))
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        teardown_terminal();
    }
}

fn teardown_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = execute!(stdout, DisableMouseCapture, LeaveAlternateScreen);
}

fn osc52_sequence(text: &str) -> String {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine as _;

    let encoded = STANDARD.encode(text.as_bytes());
    format!("\x1b]52;c;{encoded}\x1b\\")
}
