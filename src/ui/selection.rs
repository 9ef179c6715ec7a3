use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::app::{App, Pane};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_title(frame, chunks[0]);

    let panes = Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(chunks[1]);

    let course_lines: Vec<Line> = app
        .course_names()
        .into_iter()
        .enumerate()
        .map(|(index, name)| {
            let modules = app
                .session()
                .data()
                .course(name)
                .map_or(0, |course| course.modules.len());
            entry_line(
                name,
                &format!("{} modules", modules),
                index == app.course_cursor(),
                app.pane() == Pane::Courses,
            )
        })
        .collect();
    render_list(frame, panes[0], " Courses ", course_lines, app.pane() == Pane::Courses);

    let course = app.highlighted_course().unwrap_or_default();
    let module_lines: Vec<Line> = app
        .module_names()
        .into_iter()
        .enumerate()
        .map(|(index, name)| {
            let questions = app
                .session()
                .data()
                .module(course, name)
                .map_or(0, |module| module.question_count());
            entry_line(
                name,
                &format!("{} questions", questions),
                index == app.module_cursor(),
                app.pane() == Pane::Modules,
            )
        })
        .collect();
    render_list(frame, panes[1], " Modules ", module_lines, app.pane() == Pane::Modules);

    render_controls(frame, chunks[2]);
}

fn render_title(frame: &mut Frame, area: Rect) {
    let content = vec![
        Line::from(Span::styled(
            "QUIZ PREP",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from("Choose a course and a module".fg(Color::DarkGray)),
    ];
    frame.render_widget(Paragraph::new(content).alignment(Alignment::Center), area);
}

fn entry_line<'a>(name: &'a str, detail: &str, is_selected: bool, focused: bool) -> Line<'a> {
    let style = match (is_selected, focused) {
        (true, true) => Style::default().fg(Color::Cyan).bold(),
        (true, false) => Style::default().fg(Color::White),
        _ => Style::default().fg(Color::Gray),
    };
    let marker = if is_selected { ">" } else { " " };

    Line::from(vec![
        Span::styled(format!(" {} ", marker), style),
        Span::styled(name, style),
        Span::styled(format!("  ({})", detail), Style::default().fg(Color::DarkGray)),
    ])
}

fn render_list(frame: &mut Frame, area: Rect, title: &str, lines: Vec<Line>, focused: bool) {
    let border = if focused { Color::Cyan } else { Color::DarkGray };
    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(title)
            .title_style(Style::default().fg(Color::Cyan))
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k navigate  ·  tab switch  ·  enter start  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
