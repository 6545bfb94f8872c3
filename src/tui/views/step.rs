//! Step body view
//!
//! Renders the form, summary or dashboard of the current step. Rows line up
//! with `App::items` so the highlighted row is the one keys act on.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::display::{format_dashboard, review_sections};
use crate::models::{Choice, CompletionMode, DocumentStatus, Step};
use crate::tui::app::{App, InputMode, Item};
use crate::wizard::{prompts, Field, FieldKind};

/// Render the body of the current step
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let lines = body_lines(app);
    let selected_line = lines
        .iter()
        .position(|line| line.style.add_modifier.contains(Modifier::REVERSED))
        .unwrap_or(0);
    let visible = area.height.saturating_sub(2) as usize;
    let scroll = selected_line.saturating_sub(visible.saturating_sub(2));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((u16::try_from(scroll).unwrap_or(0), 0));
    frame.render_widget(paragraph, area);
}

fn heading(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    ))
}

fn bullet(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("  • {}", text),
        Style::default().fg(Color::Gray),
    ))
}

fn note(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(Color::DarkGray),
    ))
}

/// A selectable row; the selected one is reversed
fn row(selected: bool, label: String, value: Vec<Span<'static>>) -> Line<'static> {
    let marker = if selected { "▶ " } else { "  " };
    let mut spans = vec![
        Span::raw(marker),
        Span::styled(format!("{:<44}", label), Style::default().fg(Color::Cyan)),
    ];
    spans.extend(value);
    let line = Line::from(spans);
    if selected {
        line.style(Style::default().add_modifier(Modifier::REVERSED))
    } else {
        line
    }
}

fn body_lines(app: &App) -> Vec<Line<'static>> {
    let record = app.wizard.record();
    let selected = app.selected_item();
    let mut lines = Vec::new();

    match record.step {
        Step::Intro => {
            lines.push(heading("What happens next"));
            for text in prompts::INTRO_BULLETS {
                lines.push(bullet(text));
            }
            lines.push(Line::from(""));
            lines.push(heading("Your portfolio"));
            for (i, item) in record.portfolio_items.iter().enumerate() {
                lines.push(row(
                    selected == Some(Item::Portfolio(i)),
                    item.name.clone(),
                    vec![Span::raw(item.amount.to_string())],
                ));
            }
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(
                    format!("{:<44}", "Total"),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    record.portfolio_total().to_string(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ]));
            lines.push(Line::from(""));
            lines.push(note("Enter: edit amount"));
        }
        Step::Documents => {
            let documents = &record.document_statuses;
            lines.push(heading("Primary ID (required)"));
            lines.push(row(
                selected == Some(Item::PrimaryId),
                "Government-issued ID".to_string(),
                vec![status_span(documents.primary_id_label(), documents.primary_id_uploaded)],
            ));
            lines.push(Line::from(""));
            lines.push(heading("Verification items"));
            for kind in crate::models::DocumentKind::ALL {
                let status = documents.status(kind);
                lines.push(row(
                    selected == Some(Item::Document(kind)),
                    kind.label().to_string(),
                    vec![status_span(status.label(), status == DocumentStatus::Uploaded)],
                ));
            }
            lines.push(Line::from(""));
            lines.push(heading("Submit with pending documents"));
            lines.push(note(&format!(
                "You can submit now. Anything missing shows on your status dashboard. Currently pending: {}",
                documents.pending().len()
            )));
            lines.push(note("Enter: upload / mark pending"));
        }
        Step::Review => {
            for field in Field::for_step(Step::Review, record) {
                lines.push(field_row(app, field, selected == Some(Item::Field(field))));
            }
            lines.push(Line::from(""));
            for section in review_sections(record, app.settings.mask_tax_id) {
                lines.push(row(
                    selected == Some(Item::EditSection(section.edit_step)),
                    section.title.to_string(),
                    vec![Span::styled("[Edit]", Style::default().fg(Color::Blue))],
                ));
                for (label, value) in section.rows {
                    lines.push(Line::from(vec![
                        Span::raw("      "),
                        Span::styled(format!("{:<20}", label), Style::default().fg(Color::Gray)),
                        Span::raw(value),
                    ]));
                }
            }
            lines.push(Line::from(""));
            lines.push(heading("After submission"));
            lines.push(note(
                "Your information will be reviewed. Next steps and any missing items appear on your dashboard.",
            ));
        }
        Step::Submitted => {
            let dashboard = format_dashboard(record, &app.settings.date_format);
            for text in dashboard.lines() {
                lines.push(Line::from(text.to_string()));
            }
            lines.push(Line::from(""));
            lines.push(row(
                selected == Some(Item::UploadMissing),
                "Upload missing documents".to_string(),
                vec![],
            ));
        }
        step => {
            for field in Field::for_step(step, record) {
                lines.push(field_row(app, field, selected == Some(Item::Field(field))));
            }
            lines.push(Line::from(""));
            match step {
                Step::ModeChoice => {
                    for mode in CompletionMode::ALL {
                        lines.push(note(&format!(
                            "{} ({}): {}",
                            mode.label(),
                            mode.tag(),
                            mode.description()
                        )));
                    }
                }
                Step::Eligibility => {
                    lines.push(heading("What this affects"));
                    for text in prompts::ELIGIBILITY_EFFECTS {
                        lines.push(bullet(text));
                    }
                }
                Step::TaxId => {
                    lines.push(heading("Why we ask this"));
                    lines.push(note(prompts::why_we_ask(Step::TaxId)));
                }
                _ => {}
            }
            lines.push(note("Enter: edit  ←/→: change option  * required"));
        }
    }

    lines
}

fn status_span(text: &str, done: bool) -> Span<'static> {
    let color = if done { Color::Green } else { Color::Yellow };
    Span::styled(text.to_string(), Style::default().fg(color))
}

fn field_row(app: &App, field: Field, selected: bool) -> Line<'static> {
    let record = app.wizard.record();
    let required = if field.is_required(record) { " *" } else { "" };
    let label = format!("{}{}", field.label(), required);

    let value = if selected && app.input_mode == InputMode::Editing && !app.has_dialog() {
        editing_spans(app)
    } else {
        let current = field.value(record);
        match field.kind() {
            FieldKind::Toggle => {
                let checked = current == "Yes";
                vec![Span::raw(if checked { "[x]" } else { "[ ]" })]
            }
            FieldKind::Select if current.is_empty() => vec![Span::styled(
                "‹ Select… ›",
                Style::default().fg(Color::DarkGray),
            )],
            FieldKind::Select => vec![Span::raw(format!("‹ {} ›", current))],
            FieldKind::Text { .. } if current.is_empty() => vec![Span::styled(
                field.placeholder(record).to_string(),
                Style::default().fg(Color::DarkGray),
            )],
            FieldKind::Text { .. } => vec![Span::raw(current)],
        }
    };

    row(selected, label, value)
}

/// Inline rendering of the text being edited, with a block cursor
fn editing_spans(app: &App) -> Vec<Span<'static>> {
    let input = &app.input;
    let chars: Vec<char> = input.value().chars().collect();
    let cursor = input.cursor.min(chars.len());
    let before: String = chars[..cursor].iter().collect();
    let at = chars.get(cursor).copied().unwrap_or(' ');
    let after: String = chars.get(cursor + 1..).map(|rest| rest.iter().collect()).unwrap_or_default();

    vec![
        Span::styled(before, Style::default().fg(Color::White)),
        Span::styled(at.to_string(), Style::default().fg(Color::Black).bg(Color::Cyan)),
        Span::styled(after, Style::default().fg(Color::White)),
    ]
}
