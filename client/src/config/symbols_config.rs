use serde::{Deserialize, Serialize};
use tictactoe_common::config::Validate;
use tictactoe_common::games::tictactoe::Mark;

/// Characters drawn for each side. Display only; the engine always thinks in
/// X and O.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct SymbolsConfig {
    pub human: char,
    pub computer: char,
}

impl SymbolsConfig {
    pub fn for_mark(&self, mark: Mark) -> char {
        match mark {
            Mark::X => self.human,
            Mark::O => self.computer,
        }
    }
}

fn check_symbol(name: &str, symbol: char) -> Result<(), String> {
    if symbol.is_whitespace() || symbol.is_ascii_digit() || matches!(symbol, '_' | '[' | ']') {
        return Err(format!(
            "{} symbol '{}' would be confused with the board layout",
            name, symbol
        ));
    }
    Ok(())
}

impl Validate for SymbolsConfig {
    fn validate(&self) -> Result<(), String> {
        check_symbol("human", self.human)?;
        check_symbol("computer", self.computer)?;
        if self.human == self.computer {
            return Err("human and computer symbols must differ".to_string());
        }
        Ok(())
    }
}

impl Default for SymbolsConfig {
    fn default() -> Self {
        Self {
            human: 'X',
            computer: 'O',
        }
    }
}
