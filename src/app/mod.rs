//! Application state and event handling

pub mod command;
pub mod help;
pub mod input;
pub mod state;

use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc;

use crate::catalog::resources::ResourceLink;
use crate::catalog::{Catalog, Question, Topic};
use crate::config::Config;
use crate::explain::{ApiKeyManager, ClaudeModel, ExplanationProvider, provider_from_config};
use crate::quiz::{AnswerOutcome, HelpDelivery, QuizError};
use crate::theme::Theme;
use crate::ui;
use command::{Command, ParseResult, parse_command};
use help::{HelpReply, spawn_help};
use input::{Action, key_to_action};
use state::AppState;

/// Lines moved per scroll step
const SCROLL_STEP: u16 = 3;

/// The main application
pub struct App {
    /// Application configuration
    config: Config,

    /// Theme resolved from the configuration
    theme: Theme,

    /// Current application state
    state: AppState,

    /// Source of supplemental explanations
    provider: Arc<dyn ExplanationProvider>,

    /// Explanation replies from background tasks
    help_tx: mpsc::Sender<HelpReply>,
    help_rx: mpsc::Receiver<HelpReply>,

    /// Terminal backend
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl App {
    /// Create a new application instance
    pub fn new(config: Config, catalog: Catalog, topic: Topic) -> Result<Self> {
        let provider = provider_from_config(&config);
        let theme = config.active_theme();
        let (help_tx, help_rx) = mpsc::channel(8);
        let terminal = Self::setup_terminal()?;

        Ok(Self {
            config,
            theme,
            state: AppState::new(catalog, topic),
            provider,
            help_tx,
            help_rx,
            terminal,
        })
    }

    /// Set up the terminal for TUI rendering
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    /// Restore the terminal to its original state
    fn restore_terminal(&mut self) -> Result<()> {
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
        self.terminal.show_cursor()?;
        Ok(())
    }

    /// Run the application main loop
    pub async fn run(&mut self) -> Result<()> {
        // Set up panic hook to restore terminal
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
            original_hook(panic_info);
        }));

        tracing::info!(topic = %self.state.topic(), "Starting quiz UI");

        loop {
            self.terminal.draw(|frame| {
                ui::draw(frame, &self.state, &self.theme);
            })?;

            if event::poll(Duration::from_millis(16))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        match self.handle_key(key) {
                            Ok(true) => break,
                            Ok(false) => {}
                            Err(e) => {
                                tracing::error!("Error handling key: {:#}", e);
                                self.state.command_line.set_error(format!("{:#}", e));
                            }
                        }
                    }
                }
            }

            self.drain_help_replies();
            self.state.tick(Instant::now());
        }

        self.restore_terminal()?;
        Ok(())
    }

    /// Apply any explanations that finished since the last frame
    fn drain_help_replies(&mut self) {
        while let Ok(HelpReply { ticket, result }) = self.help_rx.try_recv() {
            if let Err(e) = &result {
                tracing::warn!(question = ticket.question_index(), "Explanation failed: {}", e);
                if e.requires_reauth() {
                    self.state.command_line.set_error("No valid API key. Use :key <api-key> to set one.");
                }
            }
            if self.state.quiz.complete_help(ticket, result) == HelpDelivery::Applied {
                tracing::debug!(question = ticket.question_index(), "Explanation applied");
            }
        }
    }

    /// Handle a key press, returns true if should exit
    fn handle_key(&mut self, key: KeyEvent) -> Result<bool> {
        if self.state.command_line.is_input_mode() {
            return self.handle_command_input(key);
        }

        if self.state.show_help {
            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return Ok(true),
                KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?') | KeyCode::Char('q') => {
                    self.state.show_help = false;
                }
                _ => {}
            }
            return Ok(false);
        }

        match key_to_action(self.state.screen, key.code, key.modifiers) {
            Some(action) => self.handle_action(action),
            None => Ok(false),
        }
    }

    fn handle_action(&mut self, action: Action) -> Result<bool> {
        match action {
            Action::Select(index) => self.select_option(index),
            Action::RequestHelp => self.request_help(),
            Action::Next => self.next_question(),
            Action::ScrollDown => self.state.scroll_down(SCROLL_STEP),
            Action::ScrollUp => self.state.scroll_up(SCROLL_STEP),
            Action::ShowResources => self.state.close_quiz(),
            Action::StartPractice => {
                self.state.open_quiz();
                self.state.command_line.clear_message();
            }
            Action::CycleTopic => {
                let topic = self.state.topic().next();
                self.state.switch_topic(topic);
                self.state.command_line.set_message(format!("Topic: {}", topic.display_name()));
            }
            Action::CopyLink(which) => self.copy_link(which)?,
            Action::Back => {
                self.state.command_line.clear_message();
                self.state.close_quiz();
            }
            Action::CommandMode => self.state.command_line.enter_command_mode(),
            Action::ToggleHelp => self.state.show_help = !self.state.show_help,
            Action::Quit => return Ok(true),
        }
        Ok(false)
    }

    fn select_option(&mut self, index: usize) {
        let quiz = &mut self.state.quiz;
        match quiz.select_option(index) {
            Ok(AnswerOutcome::Correct) => {
                let secs = self.config.celebration_secs;
                self.state.celebrate(Instant::now(), Duration::from_secs(secs));
                self.state.command_line.set_message("Correct!");
            }
            Ok(AnswerOutcome::Incorrect) => {
                let correct = quiz.current_question().correct_index;
                self.state.command_line.set_message(format!(
                    "Not quite. The answer is {}.",
                    Question::option_label(correct)
                ));
            }
            Err(QuizError::OptionOutOfRange { .. }) => {
                // Letters beyond the last option are ignored
            }
            Err(e) => self.state.command_line.set_error(e.to_string()),
        }
    }

    fn request_help(&mut self) {
        match self.state.quiz.request_help() {
            Ok(request) => {
                tracing::info!(concept = %request.concept, "Help requested");
                spawn_help(Arc::clone(&self.provider), request, self.help_tx.clone());
            }
            Err(e) => self.state.command_line.set_error(e.to_string()),
        }
    }

    fn next_question(&mut self) {
        let quiz = &mut self.state.quiz;
        if quiz.is_terminal() {
            let msg = format!(
                "Quiz complete: {}/{}. :restart to go again, t to switch topic.",
                quiz.score(),
                quiz.len()
            );
            self.state.command_line.set_message(msg);
            return;
        }

        match quiz.advance() {
            Ok(()) => {
                self.state.scroll = 0;
                self.state.celebration_until = None;
                self.state.command_line.clear_message();
            }
            Err(e) => self.state.command_line.set_error(e.to_string()),
        }
    }

    fn copy_link(&mut self, which: ResourceLink) -> Result<()> {
        let url = self.state.topic().resources().link(which);
        let mut clipboard = arboard::Clipboard::new().context("Clipboard unavailable")?;
        clipboard.set_text(url).context("Failed to copy to clipboard")?;
        tracing::debug!(url, "Copied link");
        self.state.command_line.set_message(format!("Copied {}", url));
        Ok(())
    }

    fn handle_command_input(&mut self, key: KeyEvent) -> Result<bool> {
        let cl = &mut self.state.command_line;
        match key.code {
            KeyCode::Esc => cl.exit_input_mode(),
            KeyCode::Enter => {
                let input = cl.input.clone();
                cl.add_to_history(input.clone());
                cl.exit_input_mode();
                return self.execute_command(&input);
            }
            KeyCode::Backspace => {
                if cl.input.is_empty() {
                    cl.exit_input_mode();
                } else {
                    cl.delete_char();
                }
            }
            KeyCode::Delete => cl.delete_char_forward(),
            KeyCode::Left => cl.move_left(),
            KeyCode::Right => cl.move_right(),
            KeyCode::Home => cl.move_start(),
            KeyCode::End => cl.move_end(),
            KeyCode::Up => cl.history_up(),
            KeyCode::Down => cl.history_down(),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                cl.exit_input_mode();
            }
            KeyCode::Char(c) => cl.insert_char(c),
            _ => {}
        }
        Ok(false)
    }

    fn execute_command(&mut self, input: &str) -> Result<bool> {
        let command = match parse_command(input) {
            ParseResult::Ok(command) => command,
            ParseResult::UnknownCommand(cmd) => {
                self.state.command_line.set_error(format!("Unknown command: {}", cmd));
                return Ok(false);
            }
            ParseResult::MissingArgument(cmd) => {
                self.state.command_line.set_error(format!(":{} needs an argument", cmd));
                return Ok(false);
            }
        };

        match command {
            Command::Quit => return Ok(true),
            Command::Help => self.state.show_help = true,
            Command::Topic(key) => match Topic::parse(&key) {
                Some(topic) => {
                    self.state.switch_topic(topic);
                    self.state.open_quiz();
                    self.state.command_line.set_message(format!("Topic: {}", topic.display_name()));
                }
                None => self.state.command_line.set_error(format!("Unknown topic: {}", key)),
            },
            Command::Practice => self.state.open_quiz(),
            Command::Resources => self.state.close_quiz(),
            Command::Restart => {
                self.state.restart();
                self.state.open_quiz();
                self.state.command_line.set_message("Quiz restarted");
            }
            Command::Yank(which) => match ResourceLink::parse(&which) {
                Some(link) => self.copy_link(link)?,
                None => self.state.command_line.set_error("Usage: :yank video|docs"),
            },
            Command::Model(name) => self.set_model(&name)?,
            Command::Key(key) => match ApiKeyManager::set_api_key(&key) {
                Ok(()) => {
                    self.provider = provider_from_config(&self.config);
                    self.state
                        .command_line
                        .set_message(format!("API key saved: {}", ApiKeyManager::mask_key(&key)));
                }
                Err(e) => self.state.command_line.set_error(e.to_string()),
            },
            Command::Nop => self.state.command_line.clear_message(),
        }
        Ok(false)
    }

    fn set_model(&mut self, name: &str) -> Result<()> {
        let Some(model) = ClaudeModel::parse(name) else {
            let names: Vec<_> = ClaudeModel::all().iter().map(|m| m.display_name()).collect();
            self.state
                .command_line
                .set_error(format!("Unknown model: {} (try {})", name, names.join(", ")));
            return Ok(());
        };

        self.config.model = model;
        self.config.save()?;
        self.provider = provider_from_config(&self.config);
        tracing::info!(model = model.display_name(), "Model changed");
        self.state.command_line.set_message(format!("Model: {}", model.display_name()));
        Ok(())
    }
}

impl Drop for App {
    fn drop(&mut self) {
        let _ = self.restore_terminal();
    }
}
