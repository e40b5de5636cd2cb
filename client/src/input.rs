use tictactoe_common::games::tictactoe::CELL_COUNT;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Zero-based cell index.
    Place(usize),
    NewGame,
    Help,
    Quit,
}

/// Cells are typed as 1-9, matching the numbers drawn on empty squares.
pub fn parse_command(line: &str) -> Result<Command, String> {
    let text = line.trim().to_lowercase();
    match text.as_str() {
        "" => Err("Enter a cell number from 1 to 9".to_string()),
        "q" | "quit" | "exit" => Ok(Command::Quit),
        "n" | "new" => Ok(Command::NewGame),
        "h" | "help" | "?" => Ok(Command::Help),
        other => match other.parse::<usize>() {
            Ok(number) if (1..=CELL_COUNT).contains(&number) => Ok(Command::Place(number - 1)),
            Ok(number) => Err(format!("Cell {} does not exist, use 1 to 9", number)),
            Err(_) => Err(format!("Unknown command '{}', type 'h' for help", line.trim())),
        },
    }
}
