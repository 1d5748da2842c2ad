use crate::app::App;
use crate::ui::Theme;
use flow_core::domain::ReportPeriod;
use flow_core::{format_currency, percent_change, profit_margin, Timeframe};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

/// Shared color palette — same order for pie slices and legend rows.
const PALETTE: [Color; 8] = [
    Color::Blue,
    Color::Green,
    Color::Yellow,
    Color::Magenta,
    Color::Cyan,
    Color::Red,
    Color::LightBlue,
    Color::LightGreen,
];

pub fn render_reports_view(frame: &mut Frame, app: &App, body: Rect, theme: &Theme) {
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(4),
            Constraint::Min(8),
            Constraint::Length(3),
        ])
        .split(body);

    render_period_bar(frame, app, outer[0], theme);

    let Some(report) = app.current_report() else {
        let empty = Paragraph::new("No report data for this period")
            .style(Style::default().fg(theme.muted))
            .alignment(Alignment::Center);
        frame.render_widget(empty, outer[2]);
        render_controls(frame, outer[3], theme);
        return;
    };
    let report = report.clone();
    let previous = app.previous_report().cloned();

    render_metrics(frame, &report, previous.as_ref(), outer[1], theme);

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(outer[2]);
    render_revenue_pie(frame, &report, panels[0], theme);
    render_monthly_bars(frame, &report, panels[1], theme);

    render_controls(frame, outer[3], theme);
}

fn render_period_bar(frame: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let period_label = match app.report.timeframe {
        Timeframe::Quarterly => format!("Q{} {}", app.report.quarter, app.report.year),
        Timeframe::Annual => format!("{}", app.report.year),
    };
    let timeframe_label = match app.report.timeframe {
        Timeframe::Quarterly => "Quarterly",
        Timeframe::Annual => "Annual",
    };
    let line = Line::from(vec![
        Span::styled(
            " Financial Reports — ",
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            period_label,
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  [{}]", timeframe_label),
            Style::default().fg(theme.muted),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn delta_span(change: f64, inverse: bool, theme: &Theme) -> Span<'static> {
    // For expenses, a drop is the good direction.
    let good = if inverse { change <= 0.0 } else { change >= 0.0 };
    let arrow = if change >= 0.0 { "▲" } else { "▼" };
    let color = if good { theme.success } else { theme.error };
    Span::styled(
        format!("{} {:.1}%", arrow, change.abs()),
        Style::default().fg(color),
    )
}

fn render_metrics(
    frame: &mut Frame,
    report: &ReportPeriod,
    previous: Option<&ReportPeriod>,
    area: Rect,
    theme: &Theme,
) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let prev_revenue = previous.map(|p| p.revenue.total).unwrap_or(0.0);
    let prev_expenses = previous.map(|p| p.expenses.total).unwrap_or(0.0);
    let prev_profit = previous.map(|p| p.profit).unwrap_or(0.0);
    let prev_margin = previous
        .map(|p| profit_margin(p.profit, p.revenue.total))
        .unwrap_or(0.0);
    let margin = profit_margin(report.profit, report.revenue.total);

    let metric = |title: &str, value: String, change: f64, inverse: bool| -> Paragraph {
        Paragraph::new(vec![
            Line::from(Span::styled(
                value,
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            )),
            Line::from(delta_span(change, inverse, theme)),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border))
                .title(Span::styled(
                    format!(" {} ", title),
                    Style::default().fg(theme.muted),
                )),
        )
    };

    frame.render_widget(
        metric(
            "Total Revenue",
            format_currency(report.revenue.total),
            percent_change(report.revenue.total, prev_revenue),
            false,
        ),
        columns[0],
    );
    frame.render_widget(
        metric(
            "Total Expenses",
            format_currency(report.expenses.total),
            percent_change(report.expenses.total, prev_expenses),
            true,
        ),
        columns[1],
    );
    frame.render_widget(
        metric(
            "Net Profit",
            format_currency(report.profit),
            percent_change(report.profit, prev_profit),
            false,
        ),
        columns[2],
    );
    frame.render_widget(
        metric(
            "Profit Margin",
            format!("{:.1}%", margin),
            percent_change(margin, prev_margin),
            false,
        ),
        columns[3],
    );
}

fn render_revenue_pie(frame: &mut Frame, report: &ReportPeriod, area: Rect, theme: &Theme) {
    use tui_piechart::{PieChart, PieSlice};

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .title(Span::styled(
            " Revenue by Category ",
            Style::default().fg(theme.text),
        ))
        .padding(Padding::horizontal(2));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let categories = &report.revenue.by_category;
    if categories.is_empty() {
        let empty = Paragraph::new("No category breakdown for this period")
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.muted));
        frame.render_widget(empty, inner);
        return;
    }

    let total: f64 = categories.iter().map(|c| c.amount).sum();
    let slices: Vec<PieSlice> = categories
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let pct = if total > 0.0 {
                c.amount / total * 100.0
            } else {
                0.0
            };
            PieSlice::new(c.label.as_str(), pct, PALETTE[i % PALETTE.len()])
        })
        .collect();

    let legend_rows = categories.len() as u16 + 1;
    let pie_height = (inner.width / 2)
        .min(inner.height / 2)
        .min(inner.height.saturating_sub(legend_rows));
    let split = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(pie_height), Constraint::Min(0)])
        .split(inner);

    let pie = PieChart::new(slices)
        .show_legend(false)
        .show_percentages(false);
    frame.render_widget(pie, split[0]);

    let mut legend_lines: Vec<Line> = Vec::new();
    for (i, c) in categories.iter().enumerate() {
        let pct = if total > 0.0 {
            c.amount / total * 100.0
        } else {
            0.0
        };
        legend_lines.push(Line::from(vec![
            Span::styled("■ ", Style::default().fg(PALETTE[i % PALETTE.len()])),
            Span::styled(
                format!("{} — {} ({:.0}%)", c.label, format_currency(c.amount), pct),
                Style::default().fg(theme.muted),
            ),
        ]));
    }
    if !report.revenue.by_client.is_empty() {
        legend_lines.push(Line::from(""));
        legend_lines.push(Line::from(Span::styled(
            "By client",
            Style::default().fg(theme.text),
        )));
        for c in &report.revenue.by_client {
            legend_lines.push(Line::from(Span::styled(
                format!("{} — {}", c.label, format_currency(c.amount)),
                Style::default().fg(theme.muted),
            )));
        }
    }
    let legend = Paragraph::new(legend_lines)
        .alignment(Alignment::Center)
        .block(Block::default().padding(Padding::new(0, 0, 1, 0)));
    frame.render_widget(legend, split[1]);
}

fn render_monthly_bars(frame: &mut Frame, report: &ReportPeriod, area: Rect, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .title(Span::styled(
            " Monthly Revenue vs Expenses ",
            Style::default().fg(theme.text),
        ))
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let months = &report.monthly_breakdown;
    let max_value = months
        .iter()
        .map(|m| m.revenue.max(m.expenses))
        .fold(0.0_f64, f64::max);
    if max_value <= 0.0 {
        return;
    }

    // bar_cols = width - 4 (month label) - 12 (amount column)
    let bar_cols = (inner.width as i32 - 4 - 12).max(1) as usize;
    let mut lines: Vec<Line> = Vec::new();
    for m in months {
        let revenue_fill = ((m.revenue / max_value) * bar_cols as f64).round() as usize;
        let expense_fill = ((m.expenses / max_value) * bar_cols as f64).round() as usize;
        lines.push(Line::from(vec![
            Span::styled(format!("{:<4}", m.month), Style::default().fg(theme.text)),
            Span::styled("█".repeat(revenue_fill.min(bar_cols)), Style::default().fg(theme.success)),
            Span::styled(
                "░".repeat(bar_cols.saturating_sub(revenue_fill)),
                Style::default().fg(theme.border),
            ),
            Span::styled(
                format!(" {:>10}", format_currency(m.revenue)),
                Style::default().fg(theme.text),
            ),
        ]));
        lines.push(Line::from(vec![
            Span::raw("    "),
            Span::styled("█".repeat(expense_fill.min(bar_cols)), Style::default().fg(theme.error)),
            Span::styled(
                "░".repeat(bar_cols.saturating_sub(expense_fill)),
                Style::default().fg(theme.border),
            ),
            Span::styled(
                format!(" {:>10}", format_currency(m.expenses)),
                Style::default().fg(theme.muted),
            ),
        ]));
    }
    lines.push(Line::from(vec![
        Span::styled("■ revenue  ", Style::default().fg(theme.success)),
        Span::styled("■ expenses", Style::default().fg(theme.error)),
    ]));

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_controls(frame: &mut Frame, area: Rect, theme: &Theme) {
    let controls = Paragraph::new(Line::from(vec![
        Span::styled("F", Style::default().fg(theme.highlight)),
        Span::raw(": Quarterly/Annual  "),
        Span::styled("←/→", Style::default().fg(theme.highlight)),
        Span::raw(": Period  "),
        Span::styled("1/2/4", Style::default().fg(theme.highlight)),
        Span::raw(": Views  "),
        Span::styled("T", Style::default().fg(theme.highlight)),
        Span::raw(": Theme  "),
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
    frame.render_widget(controls, area);
}
