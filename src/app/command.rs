//! Command parsing for the command line

/// Parsed command from the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Quit the application: :q or :quit
    Quit,
    /// Show key bindings: :help or :h
    Help,
    /// Switch topic: :topic <javascript|react>
    Topic(String),
    /// Open the quiz: :quiz or :practice
    Practice,
    /// Open the resources screen: :resources
    Resources,
    /// Start the current quiz over: :restart
    Restart,
    /// Copy a resource link to the clipboard: :yank <video|docs>
    Yank(String),
    /// Set the explanation model: :model <haiku|sonnet|opus>
    Model(String),
    /// Store the API key in the keyring: :key <api-key>
    Key(String),
    /// Clear message: (empty command)
    Nop,
}

/// Result of parsing a command
#[derive(Debug)]
pub enum ParseResult {
    /// Successfully parsed command
    Ok(Command),
    /// Unknown command
    UnknownCommand(String),
    /// Command needs an argument
    MissingArgument(String),
}

fn with_arg(name: &str, args: &str, make: impl FnOnce(String) -> Command) -> ParseResult {
    if args.is_empty() {
        ParseResult::MissingArgument(name.to_string())
    } else {
        ParseResult::Ok(make(args.to_string()))
    }
}

/// Parse a command string (without the leading :)
pub fn parse_command(input: &str) -> ParseResult {
    let input = input.trim();

    if input.is_empty() {
        return ParseResult::Ok(Command::Nop);
    }

    let mut parts = input.splitn(2, char::is_whitespace);
    let cmd = parts.next().unwrap_or("");
    let args = parts.next().map(|s| s.trim()).unwrap_or("");

    match cmd.to_lowercase().as_str() {
        "quit" | "q" => ParseResult::Ok(Command::Quit),
        "help" | "h" => ParseResult::Ok(Command::Help),
        "topic" | "t" => with_arg("topic", args, Command::Topic),
        "quiz" | "practice" | "p" => ParseResult::Ok(Command::Practice),
        "resources" | "res" | "r" => ParseResult::Ok(Command::Resources),
        "restart" => ParseResult::Ok(Command::Restart),
        "yank" | "y" => with_arg("yank", args, Command::Yank),
        "model" | "m" => with_arg("model", args, Command::Model),
        "key" => with_arg("key", args, Command::Key),
        _ => ParseResult::UnknownCommand(cmd.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_quit_command() {
        assert!(matches!(parse_command("q"), ParseResult::Ok(Command::Quit)));
        assert!(matches!(parse_command("quit"), ParseResult::Ok(Command::Quit)));
        assert!(matches!(parse_command("Q"), ParseResult::Ok(Command::Quit)));
    }

    #[test]
    fn parse_help_command() {
        assert!(matches!(parse_command("help"), ParseResult::Ok(Command::Help)));
        assert!(matches!(parse_command("h"), ParseResult::Ok(Command::Help)));
    }

    #[test]
    fn parse_topic_command() {
        match parse_command("topic react") {
            ParseResult::Ok(Command::Topic(topic)) => assert_eq!(topic, "react"),
            other => panic!("Expected Topic command, got {:?}", other),
        }
        assert!(matches!(parse_command("topic"), ParseResult::MissingArgument(_)));
    }

    #[test]
    fn parse_screen_commands() {
        assert!(matches!(parse_command("quiz"), ParseResult::Ok(Command::Practice)));
        assert!(matches!(parse_command("practice"), ParseResult::Ok(Command::Practice)));
        assert!(matches!(parse_command("resources"), ParseResult::Ok(Command::Resources)));
        assert!(matches!(parse_command("restart"), ParseResult::Ok(Command::Restart)));
    }

    #[test]
    fn parse_yank_command() {
        match parse_command("yank  docs ") {
            ParseResult::Ok(Command::Yank(which)) => assert_eq!(which, "docs"),
            other => panic!("Expected Yank command, got {:?}", other),
        }
        assert!(matches!(parse_command("yank"), ParseResult::MissingArgument(_)));
    }

    #[test]
    fn parse_model_and_key() {
        assert!(matches!(parse_command("model sonnet"), ParseResult::Ok(Command::Model(m)) if m == "sonnet"));
        assert!(matches!(parse_command("key sk-ant-abc"), ParseResult::Ok(Command::Key(k)) if k == "sk-ant-abc"));
        assert!(matches!(parse_command("key"), ParseResult::MissingArgument(_)));
    }

    #[test]
    fn parse_unknown_command() {
        assert!(matches!(parse_command("unknown"), ParseResult::UnknownCommand(c) if c == "unknown"));
    }

    #[test]
    fn parse_empty_is_nop() {
        assert!(matches!(parse_command(""), ParseResult::Ok(Command::Nop)));
        assert!(matches!(parse_command("   "), ParseResult::Ok(Command::Nop)));
    }
}
