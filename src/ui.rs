use anyhow::Result;
use bmi_calculator::{BmiCalculator, History, Outcome};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame, Terminal,
};
use std::io;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Weight,
    Height,
}

impl Field {
    pub fn next(&self) -> Self {
        match self {
            Field::Weight => Field::Height,
            Field::Height => Field::Weight,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Field::Weight => "Weight (kg)",
            Field::Height => "Height (m)",
        }
    }

    pub fn placeholder(&self) -> &str {
        match self {
            Field::Weight => "Ex: 70.5",
            Field::Height => "Ex: 1.75",
        }
    }
}

pub struct App {
    pub calculator: BmiCalculator,
    pub history: History,
    pub weight_input: String,
    pub height_input: String,
    pub active_field: Field,
    pub last_outcome: Option<Outcome>,
    pub history_state: ListState,
}

impl App {
    pub fn new(calculator: BmiCalculator) -> Self {
        Self {
            calculator,
            history: History::new(),
            weight_input: String::new(),
            height_input: String::new(),
            active_field: Field::Weight,
            last_outcome: None,
            history_state: ListState::default(),
        }
    }

    fn active_input_mut(&mut self) -> &mut String {
        match self.active_field {
            Field::Weight => &mut self.weight_input,
            Field::Height => &mut self.height_input,
        }
    }

    pub fn next_field(&mut self) {
        self.active_field = self.active_field.next();
    }

    pub fn push_char(&mut self, c: char) {
        self.active_input_mut().push(c);
    }

    pub fn pop_char(&mut self) {
        self.active_input_mut().pop();
    }

    /// Run one calculation and, on success, prepend it to the session history
    pub fn calculate(&mut self) {
        let outcome = self
            .calculator
            .compute(&self.weight_input, &self.height_input);

        if let Outcome::Success(ref result) = outcome {
            self.history.record(result);
            // Keep the selection on the freshest entry
            self.history_state.select(Some(0));
        }

        self.last_outcome = Some(outcome);
    }

    pub fn scroll_down(&mut self) {
        let len = self.history.len();
        if len == 0 {
            return;
        }
        let i = match self.history_state.selected() {
            Some(i) => {
                if i >= len - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.history_state.select(Some(i));
    }

    pub fn scroll_up(&mut self) {
        let len = self.history.len();
        if len == 0 {
            return;
        }
        let i = match self.history_state.selected() {
            Some(i) => {
                if i == 0 {
                    len - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.history_state.select(Some(i));
    }
}

pub fn run_ui(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("Error: {:?}", err);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            // Windows terminals deliver both press and release events
            if key.kind == KeyEventKind::Release {
                continue;
            }
            match key.code {
                KeyCode::Esc => return Ok(()),
                KeyCode::Enter => app.calculate(),
                KeyCode::Tab => app.next_field(),
                KeyCode::Backspace => app.pop_char(),
                KeyCode::Down => app.scroll_down(),
                KeyCode::Up => app.scroll_up(),
                KeyCode::Char(c) if c.is_ascii_digit() || c == '.' || c == ',' => {
                    app.push_char(c);
                }
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Weight field
            Constraint::Length(3), // Height field
            Constraint::Length(4), // Result message + emoji
            Constraint::Min(0),    // History list
            Constraint::Length(3), // Status bar
        ])
        .split(f.size());

    render_title(f, chunks[0]);
    render_input(f, chunks[1], app, Field::Weight);
    render_input(f, chunks[2], app, Field::Height);
    render_result(f, chunks[3], app);
    render_history(f, chunks[4], app);
    render_status_bar(f, chunks[5], app);
}

fn render_title(f: &mut Frame, area: Rect) {
    let title = Paragraph::new(Line::from(Span::styled(
        "BMI Calculator",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));

    f.render_widget(title, area);
}

fn render_input(f: &mut Frame, area: Rect, app: &App, field: Field) {
    let active = app.active_field == field;
    let value = match field {
        Field::Weight => &app.weight_input,
        Field::Height => &app.height_input,
    };

    let border_style = if active {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let content = if value.is_empty() && !active {
        Line::from(Span::styled(
            field.placeholder(),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ))
    } else if active {
        // Block cursor at the end of the active field
        Line::from(vec![
            Span::raw(value.clone()),
            Span::styled("█", Style::default().fg(Color::Yellow)),
        ])
    } else {
        Line::from(Span::raw(value.clone()))
    };

    let input = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(format!(" {} ", field.label())),
    );

    f.render_widget(input, area);
}

fn render_result(f: &mut Frame, area: Rect, app: &App) {
    let content = match &app.last_outcome {
        Some(outcome) => {
            let color = match outcome {
                Outcome::Success(_) => Color::Green,
                Outcome::MissingInput => Color::Yellow,
                Outcome::InvalidInput => Color::Red,
            };

            outcome
                .message()
                .lines()
                .map(|l| {
                    Line::from(Span::styled(
                        l.to_string(),
                        Style::default().fg(color).add_modifier(Modifier::BOLD),
                    ))
                })
                .chain(std::iter::once(Line::from(Span::raw(
                    outcome.emoji().to_string(),
                ))))
                .collect::<Vec<_>>()
        }
        None => vec![Line::from(Span::styled(
            "Enter weight and height, then press Enter",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ))],
    };

    let result = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::White))
                .title(" Result "),
        );

    f.render_widget(result, area);
}

fn render_history(f: &mut Frame, area: Rect, app: &mut App) {
    let items: Vec<ListItem> = app
        .history
        .iter()
        .map(|entry| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{} ", entry.recorded_at.format("%H:%M:%S")),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(entry.line()),
            ]))
        })
        .collect();

    let title = format!(" History ({}) ", app.history.len());
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::White))
                .title(title),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("→ ");

    f.render_stateful_widget(list, area, &mut app.history_state);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let status_spans = vec![
        Span::styled("Enter", Style::default().fg(Color::Yellow)),
        Span::raw(" Calculate | "),
        Span::styled("Tab", Style::default().fg(Color::Yellow)),
        Span::raw(" Switch field | "),
        Span::styled("↑/↓", Style::default().fg(Color::Yellow)),
        Span::raw(" History | "),
        Span::styled("Esc", Style::default().fg(Color::Red)),
        Span::raw(" Quit | "),
        Span::styled(
            format!("{} calculations", app.history.len()),
            Style::default().fg(Color::Cyan),
        ),
    ];

    let status_bar = Paragraph::new(vec![Line::from(status_spans)]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White)),
    );

    f.render_widget(status_bar, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_records_only_success() {
        let mut app = App::new(BmiCalculator::new());

        app.weight_input = "abc".to_string();
        app.height_input = "1.75".to_string();
        app.calculate();
        assert_eq!(app.history.len(), 0);
        assert_eq!(app.last_outcome, Some(Outcome::InvalidInput));

        app.weight_input = "70".to_string();
        app.calculate();
        assert_eq!(app.history.len(), 1);
    }

    #[test]
    fn test_field_editing() {
        let mut app = App::new(BmiCalculator::new());

        app.push_char('7');
        app.push_char('0');
        assert_eq!(app.weight_input, "70");

        app.next_field();
        app.push_char('1');
        app.push_char('.');
        app.push_char('7');
        app.push_char('5');
        app.pop_char();
        assert_eq!(app.height_input, "1.7");
        assert_eq!(app.weight_input, "70");
    }

    #[test]
    fn test_history_scroll_wraps() {
        let mut app = App::new(BmiCalculator::new());

        app.weight_input = "70".to_string();
        app.height_input = "1.75".to_string();
        app.calculate();
        app.calculate();

        assert_eq!(app.history_state.selected(), Some(0));
        app.scroll_down();
        assert_eq!(app.history_state.selected(), Some(1));
        app.scroll_down();
        assert_eq!(app.history_state.selected(), Some(0));
        app.scroll_up();
        assert_eq!(app.history_state.selected(), Some(1));
    }
}
