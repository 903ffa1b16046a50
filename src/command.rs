//! Acciones que entiende la maquina y como se interpreta lo que escribe el usuario.
use std::str::FromStr;

use crate::errors::CoffeeMachineError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Buy,
    Fill,
    Take,
    Remaining,
    Exit,
    /// Cualquier otra cosa. Se ignora y se vuelve a pedir una accion.
    Unknown,
}

impl From<&str> for Command {
    fn from(input: &str) -> Self {
        match input.trim() {
            "buy" => Command::Buy,
            "fill" => Command::Fill,
            "take" => Command::Take,
            "remaining" => Command::Remaining,
            "exit" => Command::Exit,
            _ => Command::Unknown,
        }
    }
}

/// Respuesta del usuario al menu de compra
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Back,
    Index(usize),
}

impl FromStr for Selection {
    type Err = CoffeeMachineError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim();
        if input == "back" {
            return Ok(Selection::Back);
        }
        input
            .parse::<usize>()
            .map(Selection::Index)
            .map_err(|_| CoffeeMachineError::InvalidSelection(input.to_string()))
    }
}

/// Cantidad para reponer: un entero no negativo
pub fn parse_quantity(input: &str) -> Result<u64, CoffeeMachineError> {
    let input = input.trim();
    input
        .parse::<u64>()
        .map_err(|_| CoffeeMachineError::BadRefillInput(input.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_recognize_every_action() {
        assert_eq!(Command::Buy, Command::from("buy"));
        assert_eq!(Command::Fill, Command::from("fill"));
        assert_eq!(Command::Take, Command::from("take"));
        assert_eq!(Command::Remaining, Command::from("remaining\n"));
        assert_eq!(Command::Exit, Command::from("  exit "));
    }

    #[test]
    fn should_not_recognize_other_input() {
        assert_eq!(Command::Unknown, Command::from("BUY"));
        assert_eq!(Command::Unknown, Command::from(""));
        assert_eq!(Command::Unknown, Command::from("coffee"));
    }

    #[test]
    fn should_parse_back_and_indexes() {
        assert_eq!(Selection::Back, "back".parse::<Selection>().unwrap());
        assert_eq!(Selection::Index(3), " 3\n".parse::<Selection>().unwrap());
    }

    #[test]
    fn should_reject_a_non_numeric_selection() {
        let result = "latte".parse::<Selection>();
        assert!(matches!(result, Err(CoffeeMachineError::InvalidSelection(input)) if input == "latte"));
    }

    #[test]
    fn should_reject_a_negative_selection() {
        assert!("-1".parse::<Selection>().is_err());
    }

    #[test]
    fn should_parse_non_negative_quantities_only() {
        assert_eq!(0, parse_quantity("0").unwrap());
        assert_eq!(1000, parse_quantity("1000\n").unwrap());
        assert!(matches!(
            parse_quantity("-5"),
            Err(CoffeeMachineError::BadRefillInput(_))
        ));
        assert!(matches!(
            parse_quantity("lots"),
            Err(CoffeeMachineError::BadRefillInput(_))
        ));
        assert!(matches!(
            parse_quantity(""),
            Err(CoffeeMachineError::BadRefillInput(_))
        ));
    }
}
