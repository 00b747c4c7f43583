use crate::ui::app::{AccessibilityAction, App};
use crate::ui::chat::Sender;
use crate::ui::layout::{
    ACCESSIBILITY_TRIGGER_LABEL, CHAT_BUTTON_LABEL, MENU_TRIGGER_LABEL, SCROLL_TOP_LABEL,
};
use crate::ui::page::LineKind;
use crate::ui::theme::Theme;
use crate::ui::widgets::Panel;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Padding, Paragraph},
    Frame,
};

pub fn render(frame: &mut Frame, app: &App) {
    let theme = app.theme();
    let areas = app.areas;

    frame.render_widget(
        Block::default().style(Style::default().bg(theme.bg).fg(theme.fg)),
        frame.area(),
    );

    render_header(frame, app, theme);
    render_page(frame, app, theme);
    render_footer(frame, app, theme);

    if app.nav_menu.is_active() {
        render_nav_menu(frame, app, theme, areas.nav_dropdown);
    }
    if app.accessibility.is_active() {
        render_accessibility_menu(frame, app, theme, areas.accessibility_dropdown);
    }
    if app.chat.is_open() {
        render_chat(frame, app, theme, areas.chat_modal);
    }
}

fn trigger_style(theme: &Theme, active: bool) -> Style {
    if active {
        Style::default()
            .fg(theme.bg)
            .bg(theme.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.accent).bg(theme.surface)
    }
}

fn render_header(frame: &mut Frame, app: &App, theme: &Theme) {
    let areas = app.areas;
    let header = Paragraph::new(Line::from(Span::styled(
        format!(" 🇵🇭 {}", app.page.title),
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD),
    )))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent)),
    );
    frame.render_widget(header, areas.header);

    frame.render_widget(
        Paragraph::new(MENU_TRIGGER_LABEL)
            .style(trigger_style(theme, app.nav_menu.is_active())),
        areas.menu_trigger,
    );
    frame.render_widget(
        Paragraph::new(ACCESSIBILITY_TRIGGER_LABEL)
            .style(trigger_style(theme, app.accessibility.is_active())),
        areas.accessibility_trigger,
    );
}

fn render_page(frame: &mut Frame, app: &App, theme: &Theme) {
    let lines: Vec<Line> = app
        .layout
        .lines
        .iter()
        .map(|line| {
            let style = match line.kind {
                LineKind::PageTitle => Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
                LineKind::SectionTitle => Style::default()
                    .fg(theme.secondary)
                    .add_modifier(Modifier::BOLD),
                LineKind::AccordionHeader { index, open } => {
                    let mut style = Style::default().fg(theme.secondary);
                    if open {
                        style = style.add_modifier(Modifier::BOLD);
                    }
                    if index == app.accordion_cursor {
                        style = style.bg(theme.surface);
                    }
                    style
                }
                LineKind::AccordionBody => Style::default().fg(theme.fg_dim),
                LineKind::Body | LineKind::Blank => Style::default().fg(theme.fg),
            };
            Line::from(Span::styled(line.text.clone(), style))
        })
        .collect();

    let page = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.fg_dim))
                .padding(Padding::horizontal(1)),
        )
        .scroll((app.scroll.offset() as u16, 0));

    frame.render_widget(page, app.areas.body);
}

fn render_footer(frame: &mut Frame, app: &App, theme: &Theme) {
    let areas = app.areas;
    let help_text = if app.chat.is_open() {
        "[Enter] Send  [Esc] Close chat"
    } else if app.accessibility.is_active() || app.nav_menu.is_active() {
        "[↑↓/jk] Move  [Enter] Choose  [Esc] Close"
    } else {
        "[↑↓/jk] Scroll  [n] Next section  [Tab] Questions  [d] Dark mode  [Q] Quit"
    };

    frame.render_widget(
        Paragraph::new(help_text).style(Style::default().fg(theme.fg_dim)),
        areas.footer,
    );

    if app.scroll.show_scroll_top_button() {
        frame.render_widget(
            Paragraph::new(SCROLL_TOP_LABEL).style(trigger_style(theme, false)),
            areas.scroll_top_button,
        );
    }
    frame.render_widget(
        Paragraph::new(CHAT_BUTTON_LABEL).style(
            Style::default()
                .fg(theme.bg)
                .bg(theme.success)
                .add_modifier(Modifier::BOLD),
        ),
        areas.chat_button,
    );
}

fn dropdown_block<'a>(title: &'a str, theme: &Theme) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(theme.accent))
        .style(Style::default().bg(theme.bg))
}

fn dropdown_items<'a>(
    labels: impl Iterator<Item = &'a str>,
    selected: usize,
    theme: &Theme,
) -> Vec<ListItem<'a>> {
    labels
        .enumerate()
        .map(|(i, label)| {
            let style = if i == selected {
                Style::default()
                    .fg(theme.bg)
                    .bg(theme.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.fg)
            };
            ListItem::new(label).style(style)
        })
        .collect()
}

fn render_nav_menu(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let items = dropdown_items(
        app.page.sections.iter().map(|s| s.title),
        app.nav_menu.selected(),
        theme,
    );
    frame.render_widget(Clear, area);
    frame.render_widget(List::new(items).block(dropdown_block("Sections", theme)), area);
}

fn render_accessibility_menu(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let items = dropdown_items(
        AccessibilityAction::ALL
            .iter()
            .map(|action| action.label(app.dark_mode)),
        app.accessibility.selected(),
        theme,
    );
    frame.render_widget(Clear, area);
    frame.render_widget(
        List::new(items).block(dropdown_block("Accessibility", theme)),
        area,
    );
}

fn render_chat(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title("💬 Passport Assistant")
        .border_style(Style::default().fg(theme.success))
        .style(Style::default().bg(theme.bg));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(inner);

    let width = chunks[0].width.max(1) as usize;
    let mut lines: Vec<Line> = Vec::new();
    if app.chat.log.is_empty() {
        push_wrapped(
            &mut lines,
            "Ask about eligibility, appointments, fees, processing time or validity.",
            width,
            Style::default().fg(theme.fg_dim),
        );
    }
    for message in app.chat.log.messages() {
        let (who, color) = match message.sender {
            Sender::User => ("You", theme.success),
            Sender::Bot => ("Assistant", theme.accent),
        };
        lines.push(Line::from(vec![
            Span::styled(
                format!("{} ", who),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                message.sent_at.format("%H:%M").to_string(),
                Style::default().fg(theme.fg_dim),
            ),
        ]));
        push_wrapped(&mut lines, &message.text, width, Style::default().fg(theme.fg));
        lines.push(Line::from(""));
    }
    if app.chat.has_pending() {
        lines.push(Line::from(Span::styled(
            "Assistant is typing…",
            Style::default()
                .fg(theme.fg_dim)
                .add_modifier(Modifier::ITALIC),
        )));
    }

    // Keep the newest message in view
    let scroll = lines.len().saturating_sub(chunks[0].height as usize);
    frame.render_widget(
        Paragraph::new(lines).scroll((scroll as u16, 0)),
        chunks[0],
    );

    let input = Paragraph::new(format!("{}▏", app.chat.input))
        .style(Style::default().fg(theme.fg))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Type your question")
                .border_style(Style::default().fg(theme.fg_dim)),
        );
    frame.render_widget(input, chunks[1]);
}

fn push_wrapped(lines: &mut Vec<Line<'static>>, text: &str, width: usize, style: Style) {
    for part in textwrap::wrap(text, width) {
        lines.push(Line::from(Span::styled(part.into_owned(), style)));
    }
}
