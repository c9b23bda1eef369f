// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Fqlbench-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Fqlbench and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use ratatui::style::{Color, Modifier, Style};

use crate::render::TokenClass;

/// Fixed 16-color palette for the workbench.
#[derive(Debug, Clone, Default)]
pub(crate) struct TuiTheme;

impl TuiTheme {
    pub(crate) fn base_style(&self) -> Style {
        Style::default()
    }

    pub(crate) fn panel_border_style(&self, focused: bool) -> Style {
        if focused {
            self.base_style().fg(Color::LightGreen)
        } else {
            self.base_style()
        }
    }

    pub(crate) fn selection_style(&self) -> Style {
        self.base_style()
            .add_modifier(Modifier::REVERSED | Modifier::BOLD)
    }

    pub(crate) fn muted_style(&self) -> Style {
        self.base_style().fg(Color::DarkGray)
    }

    pub(crate) fn error_style(&self) -> Style {
        self.base_style()
            .fg(Color::Red)
            .add_modifier(Modifier::BOLD)
    }

    pub(crate) fn running_style(&self) -> Style {
        self.base_style().fg(Color::Yellow)
    }

    pub(crate) fn token_style(&self, class: TokenClass) -> Style {
        let base = self.base_style();
        match class {
            TokenClass::Punctuation | TokenClass::Operator => base.fg(Color::Gray),
            TokenClass::String => base.fg(Color::Green),
            TokenClass::Number => base.fg(Color::LightMagenta),
            TokenClass::Keyword => base.fg(Color::Magenta),
            TokenClass::Property => base.fg(Color::LightBlue),
            TokenClass::Function => base.fg(Color::Yellow),
            TokenClass::ClassName => base.fg(Color::LightCyan),
            TokenClass::Plain | TokenClass::Whitespace => base,
        }
    }

    /// Reference spans: clickable, so underlined on top of the string color.
    pub(crate) fn reference_style(&self, selected: bool) -> Style {
        let style = self
            .token_style(TokenClass::String)
            .fg(Color::Cyan)
            .add_modifier(Modifier::UNDERLINED);
        if selected {
            style.add_modifier(Modifier::REVERSED)
        } else {
            style
        }
    }
}
