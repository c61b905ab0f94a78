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

//! Render the video player interface.
//!
//! The video itself plays in the backend's own window. The terminal shows
//! what is bound, the playback controls and the player settings.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Padding, Paragraph},
};

use crate::{
    App,
    player::{PlayerState, controller::PlayerController},
    render::icons::{
        ICON_BRIGHTNESS, ICON_ERROR, ICON_LOCKED, ICON_MUTED, ICON_NEXT, ICON_PAUSE, ICON_PLAY,
        ICON_PREV, ICON_STOP, ICON_UNLOCKED, ICON_VOLUME,
    },
    theme::Theme,
    util::format::format_time,
};

/// Renders the main player widget including entry info and controls.
pub(crate) fn draw_player(f: &mut Frame, area: Rect, app: &App) {
    let player = &app.player;
    let theme = &app.theme;

    let block = Block::default()
        .borders(Borders::TOP | Borders::BOTTOM)
        .border_style(Style::default().fg(theme.border_colour))
        .padding(Padding::horizontal(1));

    let inner_area = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner_area);

    let Some(entry) = player.entry() else {
        return;
    };

    let title_line = Line::from(vec![
        Span::styled(entry.name.as_str(), Style::default().add_modifier(Modifier::BOLD)).fg(theme.accent_colour),
        Span::raw(" in "),
        Span::styled(entry.folder.as_str(), Style::default().add_modifier(Modifier::BOLD)).fg(theme.accent_colour),
        Span::styled(format!("  {}  {}", entry.size, entry.mime_type), Style::default().fg(theme.dim_colour)),
    ]);
    f.render_widget(Paragraph::new(title_line), chunks[0]);

    if let Some(message) = player.error() {
        draw_error(f, chunks[2], message, theme);
    } else if player.is_locked() {
        draw_locked(f, chunks[2], theme);
    } else if player.controls_visible() {
        draw_controls(f, chunks[2], player, theme);
    } else {
        let hint = Paragraph::new("Press any key to show the controls")
            .alignment(Alignment::Center)
            .fg(theme.dim_colour);
        f.render_widget(hint, chunks[2]);
    }
}

fn draw_error(f: &mut Frame, area: Rect, message: &str, theme: &Theme) {
    let text = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(format!("{} ", ICON_ERROR), Style::default().fg(theme.error_colour)),
            Span::styled(message, Style::default().fg(theme.error_colour).add_modifier(Modifier::BOLD)),
        ]),
        Line::from(""),
        Line::from("Press Esc or b to go back to the library").fg(theme.dim_colour),
    ];
    f.render_widget(Paragraph::new(text).alignment(Alignment::Center), area);
}

fn draw_locked(f: &mut Frame, area: Rect, theme: &Theme) {
    let text = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(format!("{} ", ICON_LOCKED), Style::default().fg(theme.accent_colour)),
            Span::styled("Controls locked", Style::default().add_modifier(Modifier::BOLD)),
        ]),
        Line::from("Press l to unlock").fg(theme.dim_colour),
    ];
    f.render_widget(Paragraph::new(text).alignment(Alignment::Center), area);
}

fn draw_controls(f: &mut Frame, area: Rect, player: &PlayerController, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    let icon = match player.state() {
        PlayerState::Playing => ICON_PLAY,
        PlayerState::Paused => ICON_PAUSE,
        PlayerState::Stopped | PlayerState::Failed => ICON_STOP,
    };

    let status_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(24)])
        .split(chunks[0]);

    let navigation = player.navigation();
    let nav_style = |available: bool| {
        if available {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(theme.dim_colour)
        }
    };
    let status_line = Line::from(vec![
        Span::styled(format!("{} ", ICON_PREV), nav_style(navigation.has_previous)),
        Span::styled(format!("{} ", icon), Style::default().add_modifier(Modifier::BOLD)).fg(Color::White),
        Span::styled(format!("{} ", ICON_NEXT), nav_style(navigation.has_next)),
        Span::styled(format!(" {} ", ICON_UNLOCKED), Style::default().fg(theme.dim_colour)),
    ]);
    f.render_widget(Paragraph::new(status_line), status_chunks[0]);

    let duration = player.duration().unwrap_or(0.0);
    let time_line = Line::from(vec![
        Span::styled(format_time(player.current_time()), Style::default().add_modifier(Modifier::BOLD)).fg(theme.accent_colour),
        Span::styled(" / ", Style::default().add_modifier(Modifier::BOLD)).fg(Color::White),
        Span::styled(format_time(duration), Style::default().add_modifier(Modifier::BOLD)).fg(theme.accent_colour),
    ]);
    f.render_widget(Paragraph::new(time_line).alignment(Alignment::Right), status_chunks[1]);

    let position_gauge = Gauge::default()
        .gauge_style(Style::default().fg(theme.accent_colour).bg(theme.gauge_track_colour))
        .ratio((player.progress_percent() / 100.0).clamp(0.0, 1.0))
        .label("")
        .use_unicode(true);
    f.render_widget(position_gauge, chunks[1]);

    let settings = player.settings();
    let settings_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(26)])
        .split(chunks[3]);

    let settings_line = Line::from(vec![
        Span::styled("Speed ", Style::default().fg(theme.dim_colour)),
        Span::styled(settings.speed.to_string(), Style::default().fg(theme.accent_colour)),
        Span::styled("  Aspect ", Style::default().fg(theme.dim_colour)),
        Span::styled(settings.aspect_ratio.to_string(), Style::default().fg(theme.accent_colour)),
        Span::styled(format!("  {} ", ICON_BRIGHTNESS), Style::default().fg(theme.dim_colour)),
        Span::styled(format!("{}%", player.brightness().percent()), Style::default().fg(theme.accent_colour)),
    ]);
    f.render_widget(Paragraph::new(settings_line), settings_chunks[0]);

    let volume = player.volume();
    let volume_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(3), Constraint::Min(0), Constraint::Length(5)])
        .split(settings_chunks[1]);

    let volume_icon = if volume.value() > 0.0 { ICON_VOLUME } else { ICON_MUTED };
    f.render_widget(Paragraph::new(volume_icon).fg(Color::White), volume_layout[0]);

    let volume_gauge = Gauge::default()
        .gauge_style(Style::default().fg(theme.accent_colour).bg(theme.gauge_track_colour))
        .ratio(f64::from(volume.value()))
        .label("")
        .use_unicode(true);
    f.render_widget(volume_gauge, volume_layout[1]);

    let volume_label = Paragraph::new(format!(" {}%", volume.percent()))
        .alignment(Alignment::Right)
        .fg(Color::White);
    f.render_widget(volume_label, volume_layout[2]);

    let keys = Paragraph::new(
        "space play  ,/. seek  0-9 jump  a aspect  s speed  -/+ volume  [/] brightness  f full  l lock  n/p next/prev  b back",
    )
    .fg(theme.dim_colour);
    f.render_widget(keys, chunks[4]);
}
