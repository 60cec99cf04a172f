//! Splitting a line of input into a command word and its arguments.

/// Every command the assistant understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    Phone,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    /// `close` or `exit`
    Exit,
    /// Anything else, including an empty line.
    Unknown(String),
}

impl Command {
    /// Map a lowercase command word to a command.
    pub fn from_word(word: &str) -> Self {
        match word {
            "hello" => Self::Hello,
            "add" => Self::Add,
            "change" => Self::Change,
            "phone" => Self::Phone,
            "all" => Self::All,
            "add-birthday" => Self::AddBirthday,
            "show-birthday" => Self::ShowBirthday,
            "birthdays" => Self::Birthdays,
            "close" | "exit" => Self::Exit,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// The word this command is invoked with.
    pub fn name(&self) -> &str {
        match self {
            Self::Hello => "hello",
            Self::Add => "add",
            Self::Change => "change",
            Self::Phone => "phone",
            Self::All => "all",
            Self::AddBirthday => "add-birthday",
            Self::ShowBirthday => "show-birthday",
            Self::Birthdays => "birthdays",
            Self::Exit => "exit",
            Self::Unknown(word) => word,
        }
    }
}

/// A tokenized line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInput {
    pub command: Command,
    pub args: Vec<String>,
}

impl ParsedInput {
    /// Arguments as string slices, the form handlers take.
    pub fn arg_refs(&self) -> Vec<&str> {
        self.args.iter().map(String::as_str).collect()
    }
}

/// Split `line` on whitespace.
///
/// The first token, lowercased, selects the command; the remaining tokens
/// are kept verbatim as arguments.
pub fn parse_input(line: &str) -> ParsedInput {
    let mut tokens = line.split_whitespace();
    let command = match tokens.next() {
        Some(word) => Command::from_word(&word.to_lowercase()),
        None => Command::Unknown(String::new()),
    };
    ParsedInput {
        command,
        args: tokens.map(str::to_string).collect(),
    }
}
