//! Application state definitions

use std::time::{Duration, Instant};

use crate::catalog::{Catalog, Topic};
use crate::quiz::QuizSession;

/// Which screen is currently displayed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Screen {
    /// Links and quick tips for the current topic
    #[default]
    Resources,
    /// The practice quiz
    Quiz,
}

/// Command line mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CommandMode {
    /// Normal mode - command line hidden or showing status
    #[default]
    Normal,
    /// Command mode - accepting : commands
    Command,
}

/// State for the command line input
#[derive(Debug, Clone, Default)]
pub struct CommandLineState {
    /// Current mode
    pub mode: CommandMode,
    /// Input buffer
    pub input: String,
    /// Cursor position in input
    pub cursor: usize,
    /// Status/error message to display (when not in input mode)
    pub message: Option<String>,
    /// Whether message is an error
    pub is_error: bool,
    /// Command history
    pub history: Vec<String>,
    /// Current history index when navigating
    pub history_index: Option<usize>,
}

impl CommandLineState {
    /// Maximum number of history entries to keep
    const MAX_HISTORY: usize = 100;

    /// Start command mode
    pub fn enter_command_mode(&mut self) {
        self.mode = CommandMode::Command;
        self.input.clear();
        self.cursor = 0;
        self.message = None;
        self.history_index = None;
    }

    /// Exit input mode
    pub fn exit_input_mode(&mut self) {
        self.mode = CommandMode::Normal;
        self.input.clear();
        self.cursor = 0;
    }

    /// Set a status message
    pub fn set_message(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
        self.is_error = false;
    }

    /// Set an error message
    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
        self.is_error = true;
    }

    pub fn clear_message(&mut self) {
        self.message = None;
    }

    fn char_to_byte_index(&self, char_idx: usize) -> usize {
        self.input.char_indices().nth(char_idx).map(|(i, _)| i).unwrap_or(self.input.len())
    }

    fn char_count(&self) -> usize {
        self.input.chars().count()
    }

    /// Insert a character at cursor (cursor is character index)
    pub fn insert_char(&mut self, c: char) {
        let byte_idx = self.char_to_byte_index(self.cursor);
        self.input.insert(byte_idx, c);
        self.cursor += 1;
    }

    /// Delete character before cursor
    pub fn delete_char(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let byte_idx = self.char_to_byte_index(self.cursor);
            self.input.remove(byte_idx);
        }
    }

    /// Delete character at cursor
    pub fn delete_char_forward(&mut self) {
        if self.cursor < self.char_count() {
            let byte_idx = self.char_to_byte_index(self.cursor);
            self.input.remove(byte_idx);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    /// Text shown on the command line row
    pub fn display_text(&self) -> String {
        match self.mode {
            CommandMode::Normal => self.message.clone().unwrap_or_default(),
            CommandMode::Command => format!(":{}", self.input),
        }
    }

    pub fn is_input_mode(&self) -> bool {
        self.mode == CommandMode::Command
    }

    /// Add to history, skipping immediate repeats and anything holding a secret
    pub fn add_to_history(&mut self, cmd: String) {
        if Self::holds_secret(&cmd) {
            return;
        }
        if !cmd.is_empty() && self.history.last() != Some(&cmd) {
            if self.history.len() >= Self::MAX_HISTORY {
                self.history.remove(0);
            }
            self.history.push(cmd);
        }
    }

    /// `:key <api-key>` must not be recallable
    fn holds_secret(cmd: &str) -> bool {
        cmd.split_whitespace().next().is_some_and(|word| word.eq_ignore_ascii_case("key"))
    }

    /// Navigate history up
    pub fn history_up(&mut self) {
        if self.history.is_empty() {
            return;
        }
        match self.history_index {
            None => self.history_index = Some(self.history.len() - 1),
            Some(i) if i > 0 => self.history_index = Some(i - 1),
            _ => {}
        }
        if let Some(i) = self.history_index {
            self.input = self.history[i].clone();
            self.cursor = self.char_count();
        }
    }

    /// Navigate history down
    pub fn history_down(&mut self) {
        if let Some(i) = self.history_index {
            if i + 1 < self.history.len() {
                self.history_index = Some(i + 1);
                self.input = self.history[i + 1].clone();
                self.cursor = self.char_count();
            } else {
                self.history_index = None;
                self.input.clear();
                self.cursor = 0;
            }
        }
    }
}

/// Full application state
#[derive(Debug)]
pub struct AppState {
    /// Current screen
    pub screen: Screen,

    /// Key binding overlay
    pub show_help: bool,

    /// Built-in questions for every topic
    pub catalog: Catalog,

    /// The running quiz
    pub quiz: QuizSession,

    /// When the "correct!" banner should disappear
    pub celebration_until: Option<Instant>,

    /// Quiz scroll position (lines from top)
    pub scroll: u16,

    /// Command line state
    pub command_line: CommandLineState,
}

impl AppState {
    pub fn new(catalog: Catalog, topic: Topic) -> Self {
        let quiz = QuizSession::new(catalog.question_set(topic));
        Self {
            screen: Screen::default(),
            show_help: false,
            catalog,
            quiz,
            celebration_until: None,
            scroll: 0,
            command_line: CommandLineState::default(),
        }
    }

    pub fn topic(&self) -> Topic {
        self.quiz.topic()
    }

    /// Switch to another topic, starting its quiz from scratch
    pub fn switch_topic(&mut self, topic: Topic) {
        tracing::info!(%topic, "Switching topic");
        self.quiz.reset(self.catalog.question_set(topic));
        self.celebration_until = None;
        self.scroll = 0;
    }

    /// Start the current topic's quiz over
    pub fn restart(&mut self) {
        self.switch_topic(self.topic());
    }

    /// Show the quiz screen
    pub fn open_quiz(&mut self) {
        self.screen = Screen::Quiz;
    }

    /// Leave the quiz for the resources screen.
    ///
    /// The session is discarded, so reopening starts at the first question and
    /// explanations still in flight are dropped when they arrive.
    pub fn close_quiz(&mut self) {
        if self.screen == Screen::Quiz {
            tracing::debug!(topic = %self.topic(), "Closing quiz");
            self.restart();
        }
        self.screen = Screen::Resources;
    }

    /// Show the banner for `duration` from `now`
    pub fn celebrate(&mut self, now: Instant, duration: Duration) {
        self.celebration_until = Some(now + duration);
    }

    pub fn is_celebrating(&self, now: Instant) -> bool {
        self.celebration_until.is_some_and(|until| now < until)
    }

    /// Drop the banner once it has expired
    pub fn tick(&mut self, now: Instant) {
        if self.celebration_until.is_some_and(|until| now >= until) {
            self.celebration_until = None;
        }
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_add(lines);
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_sub(lines);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::HelpDelivery;

    fn state() -> AppState {
        AppState::new(Catalog::builtin().unwrap(), Topic::JavaScript)
    }

    #[test]
    fn starts_on_resources() {
        let state = state();
        assert_eq!(state.screen, Screen::Resources);
        assert_eq!(state.topic(), Topic::JavaScript);
        assert_eq!(state.quiz.current_index(), 0);
    }

    #[test]
    fn switch_topic_resets_quiz() {
        let mut state = state();
        state.quiz.select_option(1).unwrap();
        state.quiz.advance().unwrap();
        state.scroll = 7;

        state.switch_topic(Topic::React);

        assert_eq!(state.topic(), Topic::React);
        assert_eq!(state.quiz.current_index(), 0);
        assert_eq!(state.quiz.score(), 0);
        assert_eq!(state.scroll, 0);
    }

    #[test]
    fn restart_keeps_topic() {
        let mut state = state();
        state.switch_topic(Topic::React);
        state.quiz.select_option(0).unwrap();

        state.restart();

        assert_eq!(state.topic(), Topic::React);
        assert!(!state.quiz.is_answered());
    }

    #[test]
    fn closing_quiz_discards_session() {
        let mut state = state();
        state.open_quiz();
        state.quiz.select_option(1).unwrap();
        state.quiz.advance().unwrap();
        let ticket = state.quiz.request_help().unwrap().ticket;

        state.close_quiz();
        assert_eq!(state.screen, Screen::Resources);
        state.open_quiz();

        assert_eq!(state.quiz.current_index(), 0);
        assert_eq!(state.quiz.score(), 0);
        assert!(!state.quiz.is_answered());
        assert_eq!(
            state.quiz.complete_help::<String>(ticket, Ok("late".into())),
            HelpDelivery::Stale
        );
        assert_eq!(state.quiz.supplemental_explanation(), None);
    }

    #[test]
    fn closing_from_resources_keeps_session() {
        let mut state = state();
        state.quiz.select_option(1).unwrap();

        state.close_quiz();

        assert_eq!(state.quiz.score(), 1);
    }

    #[test]
    fn celebration_expires() {
        let mut state = state();
        let now = Instant::now();
        state.celebrate(now, Duration::from_secs(3));

        assert!(state.is_celebrating(now + Duration::from_secs(1)));
        state.tick(now + Duration::from_secs(1));
        assert!(state.celebration_until.is_some());

        state.tick(now + Duration::from_secs(3));
        assert!(!state.is_celebrating(now + Duration::from_secs(3)));
        assert!(state.celebration_until.is_none());
    }

    #[test]
    fn command_line_editing() {
        let mut cl = CommandLineState::default();
        cl.enter_command_mode();
        for c in "topc".chars() {
            cl.insert_char(c);
        }
        cl.move_left();
        cl.insert_char('i');
        assert_eq!(cl.input, "topic");
        assert_eq!(cl.display_text(), ":topic");

        cl.move_start();
        cl.delete_char_forward();
        assert_eq!(cl.input, "opic");
        cl.move_end();
        cl.delete_char();
        assert_eq!(cl.input, "opi");
    }

    #[test]
    fn api_key_never_enters_history() {
        let mut cl = CommandLineState::default();
        cl.add_to_history("key sk-ant-REDACTED".into());
        cl.add_to_history("KEY sk-ant-other".into());
        cl.add_to_history("topic react".into());

        assert_eq!(cl.history, vec!["topic react".to_string()]);
        cl.history_up();
        cl.history_up();
        assert_eq!(cl.input, "topic react");
    }

    #[test]
    fn command_history_navigation() {
        let mut cl = CommandLineState::default();
        cl.add_to_history("quiz".into());
        cl.add_to_history("quiz".into());
        cl.add_to_history("topic react".into());
        assert_eq!(cl.history.len(), 2);

        cl.history_up();
        assert_eq!(cl.input, "topic react");
        cl.history_up();
        assert_eq!(cl.input, "quiz");
        cl.history_down();
        assert_eq!(cl.input, "topic react");
        cl.history_down();
        assert!(cl.input.is_empty());
    }
}
