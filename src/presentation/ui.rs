use crate::application::{App, Screen};
use crate::domain::{JobPosting, ALL_LEVELS};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

pub fn render_ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    match app.screen() {
        Screen::EducationPicker => render_education_picker(f, app, chunks[1]),
        Screen::SkillPicker => render_skill_picker(f, app, chunks[1]),
        Screen::SkillPickerWithResults => {
            let body = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
                .split(chunks[1]);
            render_skill_picker(f, app, body[0]);
            render_results(f, app, body[1]);
        }
    }

    render_status_bar(f, app, chunks[2]);

    if app.show_help {
        render_help_popup(f, app.help_scroll);
    }
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let title = match app.selection.chosen_education {
        Some(level) => format!("skillmatch - Career Mentor | Education: {}", level.label()),
        None => "skillmatch - Career Mentor".to_string(),
    };
    let header = Paragraph::new(title).style(Style::default().fg(Color::Cyan));
    f.render_widget(header, area);
}

fn render_education_picker(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = ALL_LEVELS
        .iter()
        .enumerate()
        .map(|(i, level)| {
            let style = if i == app.education_cursor {
                Style::default().bg(Color::Blue).fg(Color::White)
            } else {
                Style::default()
            };
            let line = Line::from(vec![
                Span::styled(format!(" {:<16}", level.label()), style.add_modifier(Modifier::BOLD)),
                Span::styled(level.description(), style.fg(Color::Gray)),
            ]);
            ListItem::new(line).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Select Your Education Level"),
    );
    f.render_widget(list, area);
}

fn render_skill_picker(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .current_skills()
        .iter()
        .enumerate()
        .map(|(i, skill)| {
            let chosen = app.selection.chosen_skills.contains(skill);
            let marker = if chosen { "[x]" } else { "[ ]" };
            let style = if i == app.skill_cursor {
                Style::default().bg(Color::Blue).fg(Color::White)
            } else if chosen {
                Style::default().fg(Color::Green)
            } else {
                Style::default()
            };
            ListItem::new(format!(" {} {}", marker, skill)).style(style)
        })
        .collect();

    let chosen_count = app.selection.chosen_skills.len();
    let title = if chosen_count == 0 {
        "Select Your Skills".to_string()
    } else {
        format!("Select Your Skills ({} chosen)", chosen_count)
    };

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(list, area);
}

fn render_results(f: &mut Frame, app: &App, area: Rect) {
    let postings = app.matching_postings();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("Matching Job Opportunities ({})", postings.len()));

    if postings.is_empty() {
        let empty = Paragraph::new("No postings require the skills you chose.")
            .style(Style::default().fg(Color::Gray))
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let mut lines: Vec<Line> = Vec::new();
    for &posting in &postings {
        lines.extend(posting_card(app, posting));
        lines.push(Line::from(""));
    }

    let results = Paragraph::new(lines).block(block);
    f.render_widget(results, area);
}

fn posting_card<'a>(app: &App, posting: &'a JobPosting) -> Vec<Line<'a>> {
    let mut skill_spans: Vec<Span> = vec![Span::styled(
        "  Required: ",
        Style::default().fg(Color::Gray),
    )];
    for (i, skill) in posting.required_skills.iter().enumerate() {
        if i > 0 {
            skill_spans.push(Span::raw(", "));
        }
        let style = if app.selection.chosen_skills.contains(skill) {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        skill_spans.push(Span::styled(*skill, style));
    }

    vec![
        Line::from(vec![
            Span::styled(
                posting.role,
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(posting.compensation, Style::default().fg(Color::Cyan)),
        ]),
        Line::from(Span::styled(
            format!("  {} - {}", posting.organization, posting.location),
            Style::default().fg(Color::White),
        )),
        Line::from(skill_spans),
        Line::from(Span::styled(
            format!("  Experience: {}", posting.experience),
            Style::default().fg(Color::Gray),
        )),
    ]
}

fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let text = if let Some(ref status) = app.status_message {
        status.clone()
    } else {
        match app.screen() {
            Screen::EducationPicker => {
                "↑↓/jk: move | Enter: choose level | F1/?: help | q: quit".to_string()
            }
            Screen::SkillPicker => {
                if app.selection.chosen_skills.is_empty() {
                    "↑↓/jk: move | Space/Enter: toggle skill | Esc/b: restart | F1/?: help | q: quit"
                        .to_string()
                } else {
                    "↑↓/jk: move | Space/Enter: toggle | r: show opportunities | Esc/b: restart | q: quit"
                        .to_string()
                }
            }
            Screen::SkillPickerWithResults => {
                "↑↓/jk: move | Space/Enter: toggle (hides results) | Esc/b: restart | q: quit"
                    .to_string()
            }
        }
    };

    let style = match app.screen() {
        Screen::EducationPicker => Style::default(),
        Screen::SkillPicker => Style::default().fg(Color::Green),
        Screen::SkillPickerWithResults => Style::default().fg(Color::Yellow),
    };

    let status = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(style);
    f.render_widget(status, area);
}

fn render_help_popup(f: &mut Frame, scroll: usize) {
    let area = f.area();
    let popup_area = Rect {
        x: area.width / 10,
        y: area.height / 10,
        width: area.width * 4 / 5,
        height: area.height * 4 / 5,
    };

    f.render_widget(Clear, popup_area);

    let help_text = get_help_text();
    let help_lines: Vec<&str> = help_text.lines().collect();
    let visible_height = popup_area.height.saturating_sub(2) as usize;

    let start_line = scroll.min(help_lines.len().saturating_sub(visible_height));
    let end_line = (start_line + visible_height).min(help_lines.len());

    let visible_text = help_lines[start_line..end_line].join("\n");

    let help_widget = Paragraph::new(visible_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("skillmatch Help")
                .style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::White));

    f.render_widget(help_widget, popup_area);
}

fn get_help_text() -> String {
    r#"SKILLMATCH - CAREER MENTOR

=== THE WIZARD ===
1. Pick your education level.
2. Toggle the skills you have.
3. Show the job opportunities that need at least one of them.

All data is built in. Nothing is saved and nothing leaves your machine.

=== EDUCATION SCREEN ===
↑↓ or j/k       Move between the three levels
Enter           Choose the highlighted level

=== SKILL SCREEN ===
↑↓ or j/k       Move between skills
Space / Enter   Toggle the highlighted skill
r               Show matching opportunities (needs at least one skill)
Esc or b        Restart skill selection for the current level

Note: the restart control clears your chosen skills and hides results;
it does not return to the education screen. Choose a different level by
restarting and picking again.

=== RESULTS ===
Opportunities list every posting that requires at least one of your
chosen skills. Skills you hold are shown in green on each card.
Toggling any skill hides the results until you show them again.

=== EVERYWHERE ===
F1 or ?         Open this help (scroll with ↑↓, PgUp/PgDn, Home)
q               Quit

=== HELP NAVIGATION ===
↑↓ or j/k       Scroll one line
Page Up/Down    Scroll five lines
Home            Jump to top
Esc/F1/?/q      Close this window"#
        .to_string()
}
