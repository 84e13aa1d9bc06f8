use nasa_common::ActivePanel;

/// One line of terminal input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Toggle a gallery panel
    Toggle(ActivePanel),
    /// Free-text image search
    Search(String),
    Weather,
    Help,
    Quit,
    Unknown(String),
}

impl Command {
    /// Parse a line. Blank input yields `None`.
    ///
    /// # Examples
    /// ```
    /// use nasa_frontend::command::Command;
    /// use nasa_common::ActivePanel;
    ///
    /// assert_eq!(Command::parse("/hubble"), Some(Command::Toggle(ActivePanel::Hubble)));
    /// assert_eq!(Command::parse("search crab nebula"), Some(Command::Search("crab nebula".to_string())));
    /// ```
    pub fn parse(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }

        let (word, rest) = Self::split_word(trimmed);
        let word = word.trim_start_matches(['/', '\\']).to_lowercase();
        let arguments = rest.trim();

        let command = match word.as_str() {
            "close" => Command::Toggle(ActivePanel::None),
            "search" | "q" if !arguments.is_empty() => Command::Search(arguments.to_string()),
            "weather" => Command::Weather,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            panel if arguments.is_empty() => match panel.parse::<ActivePanel>() {
                Ok(panel) => Command::Toggle(panel),
                Err(_) => Command::Unknown(trimmed.to_string()),
            },
            _ => Command::Unknown(trimmed.to_string()),
        };
        Some(command)
    }

    fn split_word(text: &str) -> (&str, &str) {
        match text.find(char::is_whitespace) {
            Some(pos) => (&text[..pos], &text[pos..]),
            None => (text, ""),
        }
    }
}

pub const HELP_TEXT: &str = "\
Commands:
  hubble | nebula | spacex   toggle a search panel
  mars                       toggle the Curiosity photo gallery
  close                      close the open panel
  search <query>             free-text image search
  weather                    show the latest Mars weather
  help                       show this help
  quit                       exit";
