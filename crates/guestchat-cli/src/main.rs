use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use guestchat_config::Config;
use guestchat_engine::{MessageFile, QuickAction, RenderedMessage, io, render_blocks, transform};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use std::{
    env,
    io::{Stdout, stdout},
    path::{Path, PathBuf},
    process,
};

struct App {
    transcripts_path: PathBuf,
    messages: Vec<MessageFile>,
    message_list_state: ListState,
    rendered: RenderedMessage,
    selected_action: Option<usize>,
    status: String,
}

impl App {
    fn new(transcripts_path: PathBuf, extensions: &[String]) -> Result<Self> {
        let messages = io::scan_message_files(&transcripts_path, extensions)?;

        let mut app = Self {
            transcripts_path,
            messages,
            message_list_state: ListState::default(),
            rendered: RenderedMessage::default(),
            selected_action: None,
            status: String::new(),
        };

        // Select first message if available
        if !app.messages.is_empty() {
            app.message_list_state.select(Some(0));
            app.update_content_for_selection();
        }

        Ok(app)
    }

    fn next_message(&mut self) {
        if self.messages.is_empty() {
            return;
        }
        let i = match self.message_list_state.selected() {
            Some(i) => (i + 1) % self.messages.len(),
            None => 0,
        };
        self.message_list_state.select(Some(i));
        self.update_content_for_selection();
    }

    fn previous_message(&mut self) {
        if self.messages.is_empty() {
            return;
        }
        let i = match self.message_list_state.selected() {
            Some(0) | None => self.messages.len() - 1,
            Some(i) => i - 1,
        };
        self.message_list_state.select(Some(i));
        self.update_content_for_selection();
    }

    fn update_content_for_selection(&mut self) {
        self.selected_action = None;
        let Some(file) = self
            .message_list_state
            .selected()
            .and_then(|index| self.messages.get(index))
        else {
            return;
        };

        self.rendered = match io::read_message(file.relative_path(), &self.transcripts_path) {
            Ok(content) => render_blocks(&transform(&content)),
            Err(e) => RenderedMessage {
                lines: vec![format!("Error reading message: {e}")],
                actions: vec![],
            },
        };
        if !self.rendered.actions.is_empty() {
            self.selected_action = Some(0);
        }
    }

    fn next_action(&mut self) {
        let count = self.rendered.actions.len();
        if count == 0 {
            return;
        }
        self.selected_action = Some(match self.selected_action {
            Some(i) => (i + 1) % count,
            None => 0,
        });
    }

    fn activate_selected_action(&mut self) {
        let Some(index) = self.selected_action else {
            return;
        };
        let mut status = None;
        let mut handler = |action: &QuickAction| {
            status = Some(format!(
                "{}: {} \"{}\" requested",
                action.action(),
                action.data().item_type(),
                action.data().item_name()
            ));
        };
        if self.rendered.trigger(index, &mut handler)
            && let Some(status) = status
        {
            self.status = status;
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let args: Vec<String> = env::args().collect();

    match args.get(1).map(String::as_str) {
        Some("--print") | Some("--json") if args.len() == 3 => {
            return print_message(&args[1], &PathBuf::from(&args[2]));
        }
        Some("--print") | Some("--json") => {
            eprintln!("Usage: {} {} <message-file>", args[0], args[1]);
            process::exit(1);
        }
        _ => {}
    }

    // Determine transcripts path from CLI args or config file
    let config_path = Config::config_path();

    let transcripts_path;
    let extensions;
    let from_config;

    if args.len() == 2 {
        transcripts_path = PathBuf::from(&args[1]);
        extensions = match Config::load() {
            Ok(Some(config)) => config.extensions,
            _ => Config::new(transcripts_path.clone()).extensions,
        };
        from_config = false;
    } else if args.len() == 1 {
        match Config::load() {
            Ok(Some(config)) => {
                transcripts_path = config.transcripts_path;
                extensions = config.extensions;
                from_config = true;
            }
            Ok(None) => {
                eprintln!("Error: No transcripts path provided and no config file found");
                eprintln!("Usage: {} <transcripts-folder-path>", args[0]);
                eprintln!("Or create a config file at {}", config_path.display());
                process::exit(1);
            }
            Err(e) => {
                eprintln!("Error: Failed to load config file: {e}");
                eprintln!("Usage: {} <transcripts-folder-path>", args[0]);
                process::exit(1);
            }
        }
    } else {
        eprintln!("Usage: {} [transcripts-folder-path]", args[0]);
        eprintln!("       {} --print <message-file>", args[0]);
        eprintln!("       {} --json <message-file>", args[0]);
        process::exit(1);
    };

    if let Err(e) = io::validate_transcripts_dir(&transcripts_path) {
        let source = if from_config {
            format!(" from config file '{}'", config_path.display())
        } else {
            String::new()
        };
        eprintln!(
            "Error: Transcripts path '{}'{} is invalid: {e}",
            transcripts_path.display(),
            source
        );
        process::exit(1);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = App::new(transcripts_path, &extensions)
        .and_then(|mut app| run_app(&mut terminal, &mut app));

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

/// Non-interactive mode: parse one message file and write it to stdout.
fn print_message(mode: &str, path: &Path) -> Result<()> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read message file {}", path.display()))?;
    let blocks = transform(&content);

    if mode == "--json" {
        println!("{}", serde_json::to_string_pretty(&blocks)?);
    } else {
        for line in render_blocks(&blocks).lines {
            println!("{line}");
        }
    }
    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.next_message(),
                KeyCode::Up | KeyCode::Char('k') => app.previous_message(),
                KeyCode::Tab => app.next_action(),
                KeyCode::Enter | KeyCode::Char(' ') => app.activate_selected_action(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)].as_ref())
        .split(f.area());

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)].as_ref())
        .split(rows[0]);

    // Message list panel
    let message_items: Vec<ListItem> = app
        .messages
        .iter()
        .map(|file| {
            let display_text = format!("💬 {}", file.display_name());
            ListItem::new(vec![Line::from(vec![Span::raw(display_text)])])
        })
        .collect();

    let message_list = List::new(message_items)
        .block(Block::default().borders(Borders::ALL).title("Messages"))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    f.render_stateful_widget(message_list, chunks[0], &mut app.message_list_state);

    // Content panel, with the selected call-to-action highlighted
    let selected_line = app
        .selected_action
        .and_then(|i| app.rendered.actions.get(i))
        .map(|cta| cta.line);
    let content_text: Vec<Line> = if app.rendered.lines.is_empty() {
        vec![Line::from("Select a message to view its content")]
    } else {
        app.rendered
            .lines
            .iter()
            .enumerate()
            .map(|(i, line)| {
                if Some(i) == selected_line {
                    Line::from(Span::styled(
                        line.clone(),
                        Style::default().bg(Color::Cyan).fg(Color::Black),
                    ))
                } else {
                    Line::from(vec![Span::raw(line.clone())])
                }
            })
            .collect()
    };

    let content = Paragraph::new(content_text)
        .block(Block::default().borders(Borders::ALL).title("Content"))
        .wrap(ratatui::widgets::Wrap { trim: false });

    f.render_widget(content, chunks[1]);

    // Instructions and the last quick action
    let mut footer = vec![Line::from(vec![
        Span::raw("q: Quit | "),
        Span::raw("↑/k: Previous | "),
        Span::raw("↓/j: Next | "),
        Span::raw("Tab: Next action | Enter/Space: Book"),
    ])];
    if !app.status.is_empty() {
        footer.push(Line::from(Span::styled(
            app.status.clone(),
            Style::default().fg(Color::Green),
        )));
    }

    let help = Paragraph::new(footer).block(Block::default());
    f.render_widget(help, rows[1]);
}
