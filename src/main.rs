use std::{env, io, process};

use coffee_machine::{
    config::MachineConfig, dispatcher::CommandDispatcher, errors::CoffeeMachineError,
    machine_ledger::MachineLedger,
};
use log::{error, info, LevelFilter};
use simple_logger::SimpleLogger;

/// Muestra el resumen de estadisticas al terminar; los errores de entrada quedan en `debug`
const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

fn main() {
    if let Err(err) = SimpleLogger::new().with_level(DEFAULT_LOG_LEVEL).env().init() {
        eprintln!("Error initializing the logger: {}", err);
    }

    let mut machine = match load_machine() {
        Ok(machine) => machine,
        Err(err) => {
            error!("[MAIN] {}", err);
            process::exit(1);
        }
    };

    let stdin = io::stdin();
    let result = CommandDispatcher::new(&mut machine, stdin.lock(), io::stdout()).run();
    info!("{}", machine.statistics());
    if let Err(err) = result {
        error!("[MAIN] {}", err);
        process::exit(1);
    }
}

/// Usa el archivo de configuracion recibido como argumento, o los valores de fabrica si no hay ninguno
fn load_machine() -> Result<MachineLedger, CoffeeMachineError> {
    match env::args().nth(1) {
        Some(path) => MachineConfig::from_file(path)?.build(),
        None => Ok(MachineLedger::with_factory_settings()),
    }
}

#[cfg(test)]
mod tests {
    use log::Level;

    use super::*;

    #[test]
    fn should_show_the_statistics_but_not_input_errors_by_default() {
        assert_eq!(true, Level::Info <= DEFAULT_LOG_LEVEL);
        assert_eq!(false, Level::Debug <= DEFAULT_LOG_LEVEL);
    }
}
