use crate::app::{App, TemplateEditorState};
use crate::time_utils::format_display_date;
use crate::ui::Theme;
use flow_core::domain::TemplateKind;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph, Wrap},
    Frame,
};

pub fn render_documents_view(frame: &mut Frame, app: &App, body: Rect, theme: &Theme) {
    if let Some(editor) = &app.editor {
        render_editor(frame, editor, body, theme);
        return;
    }

    let outer = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(4),
            Constraint::Length(3),
        ])
        .split(body);

    // Kind tabs
    let tab = |kind: TemplateKind, active: bool| {
        let style = if active {
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.muted)
        };
        Span::styled(format!(" {} ", kind.label()), style)
    };
    let tabs = Paragraph::new(Line::from(vec![
        tab(
            TemplateKind::Proposal,
            app.template_kind == TemplateKind::Proposal,
        ),
        Span::styled("/", Style::default().fg(theme.border)),
        tab(
            TemplateKind::Contract,
            app.template_kind == TemplateKind::Contract,
        ),
        Span::styled("  (Tab to switch)", Style::default().fg(theme.muted)),
    ]));
    frame.render_widget(tabs, outer[0]);

    // Template list
    let items: Vec<ListItem> = app
        .templates_for_kind()
        .iter()
        .enumerate()
        .map(|(i, t)| {
            let selected = i == app.selected_template;
            let style = if selected {
                Style::default()
                    .fg(theme.highlight)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text)
            };
            let marker = if selected { "› " } else { "  " };
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(marker, style),
                    Span::styled(t.name.clone(), style),
                    Span::styled(
                        format!("  ({} sections)", t.sections.len()),
                        Style::default().fg(theme.muted),
                    ),
                ]),
                Line::from(vec![
                    Span::raw("    "),
                    Span::styled(t.description.clone(), Style::default().fg(theme.muted)),
                    Span::styled(
                        format!("  — modified {}", format_display_date(t.last_modified)),
                        Style::default().fg(theme.muted),
                    ),
                ]),
            ])
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .title(Span::styled(
                " Document Templates ",
                Style::default().fg(theme.text),
            )),
    );
    frame.render_widget(list, outer[1]);

    let controls = Paragraph::new(Line::from(vec![
        Span::styled("Enter", Style::default().fg(theme.highlight)),
        Span::raw(": Edit  "),
        Span::styled("A", Style::default().fg(theme.highlight)),
        Span::raw(": New template  "),
        Span::styled("Tab", Style::default().fg(theme.highlight)),
        Span::raw(": Proposals/Contracts  "),
        Span::styled("1/3/4", Style::default().fg(theme.highlight)),
        Span::raw(": Views  "),
        Span::styled("Q", Style::default().fg(theme.highlight)),
        Span::raw(": Quit"),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .title(Span::styled(" Controls ", Style::default().fg(theme.muted))),
    );
    frame.render_widget(controls, outer[2]);
}

fn render_editor(frame: &mut Frame, editor: &TemplateEditorState, body: Rect, theme: &Theme) {
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Min(6), Constraint::Length(3)])
        .split(body);

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(34), Constraint::Percentage(66)])
        .split(outer[0]);

    // Section list
    let items: Vec<ListItem> = editor
        .template
        .sections
        .iter()
        .enumerate()
        .map(|(i, section)| {
            let selected = i == editor.selected_section;
            let style = if selected {
                Style::default()
                    .fg(theme.highlight)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text)
            };
            let marker = if selected { "› " } else { "  " };
            let title = if let (true, Some(input)) = (selected, &editor.rename_input) {
                format!("{}█", input.value)
            } else {
                section.title.clone()
            };
            ListItem::new(Line::from(vec![
                Span::styled(marker, style),
                Span::styled(title, style),
            ]))
        })
        .collect();

    let list_title = format!(" {} — Sections ", editor.template.name);
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border_focused))
            .title(Span::styled(list_title, Style::default().fg(theme.text))),
    );
    frame.render_widget(list, panels[0]);

    // Content preview / editor
    let content = if let Some(input) = &editor.content_input {
        let (before, after) = input.split_at_cursor();
        format!("{}█{}", before, after)
    } else {
        editor
            .template
            .sections
            .get(editor.selected_section)
            .map(|s| s.content.clone())
            .unwrap_or_default()
    };
    let editing = editor.content_input.is_some();
    let content_border = if editing {
        theme.border_focused
    } else {
        theme.border
    };
    let preview = Paragraph::new(content)
        .style(Style::default().fg(theme.text))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(content_border))
                .title(Span::styled(
                    if editing { " Content (editing) " } else { " Content " },
                    Style::default().fg(theme.text),
                ))
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(preview, panels[1]);

    let controls = Paragraph::new(Line::from(vec![
        Span::styled("J/K", Style::default().fg(theme.highlight)),
        Span::raw(": Reorder  "),
        Span::styled("A", Style::default().fg(theme.highlight)),
        Span::raw(": Add  "),
        Span::styled("X", Style::default().fg(theme.highlight)),
        Span::raw(": Delete  "),
        Span::styled("R", Style::default().fg(theme.highlight)),
        Span::raw(": Rename  "),
        Span::styled("Enter", Style::default().fg(theme.highlight)),
        Span::raw(": Edit content  "),
        Span::styled("Ctrl+S", Style::default().fg(theme.highlight)),
        Span::raw(": Save  "),
        Span::styled("Esc", Style::default().fg(theme.highlight)),
        Span::raw(": Close"),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .title(Span::styled(" Controls ", Style::default().fg(theme.muted))),
    );
    frame.render_widget(controls, outer[1]);
}
