use std::ops::Range;

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::models::{Answer, OptionId, Question, QuestionType};
use crate::session::{Feedback, feedback};

const OPTION_LABELS: [char; 8] = ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H'];

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();
    let Some(question) = session.current_question() else {
        render_empty_module(frame, area);
        return;
    };

    let index = session.current_index();
    let answer = session.answer(index);
    let review = session.is_complete();
    let has_details = review || app.show_explanation();

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(if has_details { 6 } else { 0 }),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_header(frame, chunks[0], app);
    render_question_text(frame, chunks[1], question);
    render_options(frame, chunks[2], question, answer, app.selected_option(), review);
    if has_details {
        render_details(frame, chunks[3], question, answer, review);
    }
    render_navigation(frame, chunks[4], app);
    render_controls(frame, chunks[5], review);
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();
    let title = session
        .active()
        .map(|active| format!("{} · {}", active.course, active.module))
        .unwrap_or_default();

    let progress = format!(
        "{}/{}  {:.0}% complete",
        app.current_question_number(),
        app.total_questions(),
        session.progress_percent()
    );

    let chunks = Layout::horizontal([Constraint::Fill(1), Constraint::Length(24)]).split(area);
    frame.render_widget(Paragraph::new(title).fg(Color::Cyan), chunks[0]);
    frame.render_widget(
        Paragraph::new(progress)
            .alignment(Alignment::Right)
            .fg(Color::DarkGray),
        chunks[1],
    );
}

fn render_question_text(frame: &mut Frame, area: Rect, question: &Question) {
    let instruction = match question.kind {
        QuestionType::SingleAnswer => "Select the best answer from the options below.",
        QuestionType::MultipleAnswer => "Select all correct answers from the options below.",
    };

    let mut lines = vec![
        Line::from(Span::styled(
            question.text.as_str(),
            Style::default().fg(Color::White).bold(),
        )),
        Line::from(instruction.fg(Color::DarkGray)),
    ];
    if let Some(image) = question.image() {
        lines.push(Line::from(format!("[image] {}", image).fg(Color::DarkGray)));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

fn render_options(
    frame: &mut Frame,
    area: Rect,
    question: &Question,
    answer: Option<&Answer>,
    cursor: usize,
    review: bool,
) {
    let mut lines: Vec<Line> = Vec::with_capacity(question.options.len() * 2);

    for id in question.option_ids() {
        let option = &question.options[id.index()];
        let is_cursor = id.index() == cursor;
        let is_chosen = answer.is_some_and(|answer| answer.contains(id));

        let style = if review && option.is_correct {
            Style::default().fg(Color::Green)
        } else if review && is_chosen {
            Style::default().fg(Color::Red)
        } else if is_cursor {
            Style::default().fg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if is_cursor && !review { ">" } else { " " };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(choice_box(question.kind, is_chosen), style),
            Span::styled(format!("{}. ", option_label(id)), style),
            Span::styled(option.text.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

fn choice_box(kind: QuestionType, is_chosen: bool) -> &'static str {
    match (kind, is_chosen) {
        (QuestionType::SingleAnswer, true) => "(•) ",
        (QuestionType::SingleAnswer, false) => "( ) ",
        (QuestionType::MultipleAnswer, true) => "[x] ",
        (QuestionType::MultipleAnswer, false) => "[ ] ",
    }
}

fn option_label(id: OptionId) -> String {
    OPTION_LABELS
        .get(id.index())
        .map_or_else(|| (id.index() + 1).to_string(), char::to_string)
}

fn render_details(
    frame: &mut Frame,
    area: Rect,
    question: &Question,
    answer: Option<&Answer>,
    review: bool,
) {
    let mut lines = Vec::new();
    if review {
        let (label, color) = match feedback(question, answer) {
            Feedback::Correct => ("Correct", Color::Green),
            Feedback::Partial => ("Partially correct", Color::Yellow),
            Feedback::Incorrect => ("Incorrect", Color::Red),
            Feedback::Unanswered => ("Not answered", Color::DarkGray),
        };
        lines.push(Line::from(Span::styled(label, Style::default().fg(color).bold())));
    }
    if !question.explanation.is_empty() {
        lines.push(Line::from(question.explanation.as_str().fg(Color::Gray)));
    }

    let widget = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray)
            .title(" Explanation ")
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}

fn render_navigation(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();
    let current = session.current_index();
    let total = app.total_questions();

    let jump_prompt = app
        .pending_jump()
        .map(|digits| format!("  go to {}_", digits))
        .unwrap_or_default();
    let cell_width = total.max(1).to_string().len() + 2;
    let room = usize::from(area.width).saturating_sub(jump_prompt.chars().count() + 4);
    let window = strip_window(current, total, room / cell_width);

    let mut spans: Vec<Span> = Vec::with_capacity(window.len() + 3);
    spans.push(edge_marker(window.start > 0, "< "));
    spans.extend(window.clone().map(|index| {
        let style = if index == current {
            Style::default().fg(Color::Black).bg(Color::Cyan).bold()
        } else if session.is_answered(index) {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        Span::styled(
            format!(" {:>width$} ", index + 1, width = cell_width - 2),
            style,
        )
    }));
    spans.push(edge_marker(window.end < total, " >"));
    spans.push(Span::styled(jump_prompt, Style::default().fg(Color::Yellow)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// The range of question indices that fits in `visible` cells, centred on `current`.
fn strip_window(current: usize, total: usize, visible: usize) -> Range<usize> {
    let visible = visible.max(1).min(total);
    let start = current
        .saturating_sub(visible / 2)
        .min(total.saturating_sub(visible));
    start..start + visible
}

fn edge_marker(more: bool, marker: &'static str) -> Span<'static> {
    if more {
        Span::styled(marker, Style::default().fg(Color::DarkGray))
    } else {
        Span::raw("  ")
    }
}

fn render_controls(frame: &mut Frame, area: Rect, review: bool) {
    let text = if review {
        "h/l question  ·  v results  ·  r retry  ·  b back  ·  q quit"
    } else {
        "j/k option  ·  space select  ·  h/l question  ·  0-9 enter go to  ·  e explain  ·  s submit  ·  b back  ·  q quit"
    };
    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

fn render_empty_module(frame: &mut Frame, area: Rect) {
    let content = vec![
        Line::from(""),
        Line::from("This module has no questions.".fg(Color::Yellow)),
        Line::from(""),
        Line::from("s submit  ·  b back  ·  q quit".fg(Color::DarkGray)),
    ];
    frame.render_widget(
        Paragraph::new(content).alignment(Alignment::Center),
        area,
    );
}
