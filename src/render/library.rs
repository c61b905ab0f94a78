// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Render the video library.
//!
//! The library is shown as a list of folders, drilling into a folder shows a
//! table of its videos.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, List, ListItem, Padding, Paragraph, Row, Table, TableState},
};

use crate::{
    App,
    browser::{LibraryBrowser, LibraryPane},
    model::library::VideoLibrary,
    render::icons::ICON_FOLDER,
    theme::Theme,
    util::format::format_modified,
};

/// Renders the library view, a header line above the folder list or the
/// file table of the folder drilled into.
pub(crate) fn draw_library(f: &mut Frame, area: Rect, app: &mut App) {
    let App {
        browser,
        library,
        catalog,
        theme,
        ..
    } = app;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(area);

    let title = match browser.selected_folder() {
        Some(folder) => format!(" Library / {} ", folder),
        None => " Library ".to_string(),
    };
    let summary = catalog
        .summary()
        .unwrap_or_else(|| format!("{} videos", library.len()));

    let header = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(48)])
        .split(chunks[0]);

    f.render_widget(
        Paragraph::new(title).style(Style::default().fg(theme.accent_colour).add_modifier(Modifier::BOLD)),
        header[0],
    );
    f.render_widget(
        Paragraph::new(summary)
            .alignment(Alignment::Right)
            .fg(theme.dim_colour),
        header[1],
    );

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(theme.border_colour))
        .padding(Padding::horizontal(1));

    if library.is_empty() {
        let hint = Paragraph::new(vec![
            Line::from(""),
            Line::from("No videos yet."),
            Line::from(vec![
                Span::raw("Type "),
                Span::styled(":open <folder>", Style::default().fg(theme.accent_colour)),
                Span::raw(" to add a folder of videos."),
            ]),
        ])
        .alignment(Alignment::Center)
        .fg(theme.dim_colour)
        .block(block);
        f.render_widget(hint, chunks[1]);
        return;
    }

    match browser.pane() {
        LibraryPane::Folders => draw_folders(f, chunks[1], block, browser, theme),
        LibraryPane::Files => draw_files(f, chunks[1], block, browser, library, theme),
    }
}

fn draw_folders(f: &mut Frame, area: Rect, block: Block, browser: &mut LibraryBrowser, theme: &Theme) {
    let items: Vec<ListItem> = browser
        .groups()
        .groups()
        .iter()
        .map(|group| {
            ListItem::new(Line::from(vec![
                Span::raw(format!("{} ", ICON_FOLDER)),
                Span::styled(group.name.clone(), Style::default().fg(theme.table_name_fg)),
                Span::styled(format!("  ({})", group.members.len()), Style::default().fg(theme.dim_colour)),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(theme.highlight_colour).add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");

    f.render_stateful_widget(list, area, &mut browser.folders_state);
}

fn draw_files(
    f: &mut Frame,
    area: Rect,
    block: Block,
    browser: &mut LibraryBrowser,
    library: &VideoLibrary,
    theme: &Theme,
) {
    let rows: Vec<Row> = browser
        .folder_entries(library)
        .into_iter()
        .map(|entry| {
            Row::new(vec![
                Cell::from(Line::from(entry.name.as_str()).style(Style::default().fg(theme.table_name_fg))),
                Cell::from(
                    Line::from(entry.size.as_str())
                        .style(Style::default().fg(theme.table_size_fg))
                        .alignment(Alignment::Right),
                ),
                Cell::from(""),
                Cell::from(
                    Line::from(format_modified(entry.modified.as_ref()))
                        .style(Style::default().fg(theme.table_modified_fg)),
                ),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Min(0),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(16),
        ],
    )
    .header(
        Row::new(vec![
            Cell::from("Name"),
            Cell::from(Line::from("Size").alignment(Alignment::Right)),
            Cell::from(""),
            Cell::from("Modified"),
        ])
        .style(Style::default().bold().fg(theme.accent_colour))
        .bottom_margin(1),
    )
    .row_highlight_style(Style::default().bg(theme.highlight_colour))
    .block(block);

    // The browser tracks its cursor as a list, carry the scroll offset across.
    let mut state = TableState::default()
        .with_offset(browser.files_state.offset())
        .with_selected(browser.files_state.selected());
    f.render_stateful_widget(table, area, &mut state);
    *browser.files_state.offset_mut() = state.offset();
}
