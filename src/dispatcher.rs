//! Interfaz de texto de la maquina. Lee acciones linea por linea y se las aplica a la maquina.
use std::io::{BufRead, Write};

use log::debug;

use crate::{
    command::{parse_quantity, Command, Selection},
    errors::CoffeeMachineError,
    machine_ledger::MachineLedger,
    recipe::Drink,
};

const PROMPT: &str = "> ";

/// Lee de `input` y escribe en `output`. La maquina la sigue siendo del que la creo.
pub struct CommandDispatcher<'a, R: BufRead, W: Write> {
    machine: &'a mut MachineLedger,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> CommandDispatcher<'a, R, W> {
    pub fn new(machine: &'a mut MachineLedger, input: R, output: W) -> CommandDispatcher<'a, R, W> {
        CommandDispatcher {
            machine,
            input,
            output,
        }
    }

    /// Atiende acciones hasta recibir `exit`. Solo termina con error si se cierra la entrada
    /// o falla la escritura/lectura.
    pub fn run(&mut self) -> Result<(), CoffeeMachineError> {
        loop {
            writeln!(self.output, "Write action (buy, fill, take, remaining, exit):")?;
            let command = Command::from(self.read_input()?.as_str());
            debug!("[DISPATCHER] Received {:?}", command);
            match command {
                Command::Buy => self.buy()?,
                Command::Fill => self.fill()?,
                Command::Take => self.take()?,
                Command::Remaining => self.remaining()?,
                Command::Exit => return Ok(()),
                Command::Unknown => {}
            }
        }
    }

    fn read_input(&mut self) -> Result<String, CoffeeMachineError> {
        write!(self.output, "{}", PROMPT)?;
        self.output.flush()?;
        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Err(CoffeeMachineError::InputClosed);
        }
        // Una linea que no es UTF-8 valido se trata como entrada invalida, no como error de lectura
        Ok(String::from_utf8_lossy(&line).trim().to_string())
    }

    fn buy(&mut self) -> Result<(), CoffeeMachineError> {
        let drink = match self.choose_drink() {
            Ok(Some(drink)) => drink,
            Ok(None) => return Ok(()),
            Err(err @ CoffeeMachineError::InvalidSelection(_)) => {
                debug!("[DISPATCHER] {}", err);
                writeln!(self.output, "Sorry, {}.", err)?;
                writeln!(self.output)?;
                return Ok(());
            }
            Err(err) => return Err(err),
        };

        match self.machine.purchase(drink) {
            Ok(()) => writeln!(self.output, "I have enough resources, making you a coffee!")?,
            Err(CoffeeMachineError::InsufficientResource(resource)) => {
                writeln!(self.output, "Sorry, not enough {}!", resource)?
            }
            Err(err) => return Err(err),
        }
        writeln!(self.output)?;
        Ok(())
    }

    /// `None` indica que el usuario volvio al menu principal
    fn choose_drink(&mut self) -> Result<Option<Drink>, CoffeeMachineError> {
        writeln!(self.output)?;
        writeln!(self.output, "What do you want to buy? (back - to main menu)")?;
        for entry in self.machine.menu() {
            writeln!(self.output, "  {}. {}", entry.index, entry.drink)?;
        }

        let input = self.read_input()?;
        match input.parse::<Selection>()? {
            Selection::Back => Ok(None),
            Selection::Index(index) => self
                .machine
                .select(index)
                .map(Some)
                .ok_or(CoffeeMachineError::InvalidSelection(input)),
        }
    }

    fn fill(&mut self) -> Result<(), CoffeeMachineError> {
        writeln!(self.output)?;
        let water = self.ask_quantity("Write how many ml of water you want to add:")?;
        let milk = self.ask_quantity("Write how many ml of milk you want to add:")?;
        let beans = self.ask_quantity("Write how many grams of coffee beans you want to add:")?;
        let cups = self.ask_quantity("Write how many disposable cups you want to add:")?;
        writeln!(self.output)?;

        self.machine.refill(water, milk, beans, cups);
        Ok(())
    }

    /// Pregunta hasta recibir un entero no negativo
    fn ask_quantity(&mut self, question: &str) -> Result<u64, CoffeeMachineError> {
        writeln!(self.output, "{}", question)?;
        loop {
            match parse_quantity(&self.read_input()?) {
                Ok(quantity) => return Ok(quantity),
                Err(err) => {
                    debug!("[DISPATCHER] {}", err);
                    writeln!(self.output, "{}, try again:", err)?;
                }
            }
        }
    }

    fn take(&mut self) -> Result<(), CoffeeMachineError> {
        let money = self.machine.collect_revenue();
        writeln!(self.output)?;
        writeln!(self.output, "I gave you ${}", money)?;
        writeln!(self.output)?;
        Ok(())
    }

    fn remaining(&mut self) -> Result<(), CoffeeMachineError> {
        let snapshot = self.machine.inspect();
        writeln!(self.output)?;
        writeln!(self.output, "The coffee machine has:")?;
        writeln!(self.output, "{} ml of water", snapshot.water)?;
        writeln!(self.output, "{} ml of milk", snapshot.milk)?;
        writeln!(self.output, "{} g of coffee beans", snapshot.beans)?;
        writeln!(self.output, "{} disposable cups", snapshot.cups)?;
        writeln!(self.output, "${} of money", snapshot.revenue)?;
        writeln!(self.output)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::machine_ledger::Snapshot;

    fn run_with<I: AsRef<[u8]>>(
        machine: &mut MachineLedger,
        input: I,
    ) -> (Result<(), CoffeeMachineError>, String) {
        let mut output = Vec::new();
        let result = CommandDispatcher::new(machine, Cursor::new(input), &mut output).run();
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn should_stop_on_exit() {
        let mut machine = MachineLedger::with_factory_settings();
        let (result, output) = run_with(&mut machine, "exit\nbuy\n");
        assert!(result.is_ok());
        assert_eq!("Write action (buy, fill, take, remaining, exit):\n> ", output);
    }

    #[test]
    fn should_fail_when_input_is_closed() {
        let mut machine = MachineLedger::with_factory_settings();
        let (result, _) = run_with(&mut machine, "remaining\n");
        assert!(matches!(result, Err(CoffeeMachineError::InputClosed)));
    }

    #[test]
    fn should_print_what_remains() {
        let mut machine = MachineLedger::with_factory_settings();
        let (_, output) = run_with(&mut machine, "remaining\nexit\n");
        assert!(output.contains(
            "The coffee machine has:\n400 ml of water\n540 ml of milk\n120 g of coffee beans\n9 disposable cups\n$540 of money\n"
        ));
    }

    #[test]
    fn should_buy_the_selected_drink() {
        let mut machine = MachineLedger::with_factory_settings();
        let (_, output) = run_with(&mut machine, "buy\n1\nexit\n");
        assert!(output.contains("  1. Espresso\n  2. Ristretto\n  3. Latte\n  4. Cappuccino\n"));
        assert!(output.contains("I have enough resources, making you a coffee!"));
        assert_eq!(544, machine.inspect().revenue);
    }

    #[test]
    fn should_report_the_missing_resource() {
        let mut machine = MachineLedger::with_factory_settings();
        let (_, output) = run_with(&mut machine, "buy\n1\nbuy\n1\nexit\n");
        assert!(output.contains("Sorry, not enough water!"));
        assert_eq!(8, machine.inspect().cups);
    }

    #[test]
    fn should_go_back_without_buying() {
        let mut machine = MachineLedger::with_factory_settings();
        let before = machine.inspect();
        let (result, _) = run_with(&mut machine, "buy\nback\nexit\n");
        assert!(result.is_ok());
        assert_eq!(before, machine.inspect());
    }

    #[test]
    fn should_keep_running_after_an_invalid_selection() {
        let mut machine = MachineLedger::with_factory_settings();
        let (result, output) = run_with(&mut machine, "buy\n9\nbuy\nlatte\nbuy\n0\ntake\nexit\n");
        assert!(result.is_ok());
        assert!(output.contains("Sorry, '9' is not on the menu."));
        assert!(output.contains("Sorry, 'latte' is not on the menu."));
        assert!(output.contains("Sorry, '0' is not on the menu."));
        assert!(output.contains("I gave you $540"));
    }

    #[test]
    fn should_fill_every_resource() {
        let mut machine = MachineLedger::with_factory_settings();
        let (result, _) = run_with(&mut machine, "fill\n1000\n1000\n1000\n10\nexit\n");
        assert!(result.is_ok());
        assert_eq!(
            Snapshot {
                water: 1400,
                milk: 1540,
                beans: 1120,
                cups: 19,
                revenue: 540
            },
            machine.inspect()
        );
    }

    #[test]
    fn should_ask_again_for_an_invalid_quantity() {
        let mut machine = MachineLedger::with_factory_settings();
        let (result, output) = run_with(&mut machine, "fill\nmuch\n-3\n100\n0\n0\n1\nexit\n");
        assert!(result.is_ok());
        assert!(output.contains("'much' is not a valid quantity, try again:"));
        assert!(output.contains("'-3' is not a valid quantity, try again:"));
        assert_eq!(500, machine.inspect().water);
        assert_eq!(10, machine.inspect().cups);
    }

    #[test]
    fn should_give_the_money_once() {
        let mut machine = MachineLedger::with_factory_settings();
        let (_, output) = run_with(&mut machine, "take\ntake\nexit\n");
        assert!(output.contains("\nI gave you $540\n\n"));
        assert!(output.contains("\nI gave you $0\n\n"));
    }

    #[test]
    fn should_ignore_unknown_actions() {
        let mut machine = MachineLedger::with_factory_settings();
        let (result, output) = run_with(&mut machine, "dance\nexit\n");
        assert!(result.is_ok());
        assert_eq!(
            2,
            output
                .matches("Write action (buy, fill, take, remaining, exit):")
                .count()
        );
    }

    #[test]
    fn should_treat_a_line_that_is_not_utf8_as_an_invalid_selection() {
        let mut machine = MachineLedger::with_factory_settings();
        let (result, output) = run_with(&mut machine, b"buy\n\xff\xfe\ntake\nexit\n");
        assert!(result.is_ok());
        assert!(output.contains("is not on the menu."));
        assert!(output.contains("I gave you $540"));
    }

    #[test]
    fn should_ask_again_for_a_quantity_that_is_not_utf8() {
        let mut machine = MachineLedger::with_factory_settings();
        let (result, output) = run_with(&mut machine, b"fill\n\xc3\x28\n100\n0\n0\n0\nexit\n");
        assert!(result.is_ok());
        assert!(output.contains("is not a valid quantity, try again:"));
        assert_eq!(500, machine.inspect().water);
    }
}
