//! Maquina compartida entre hilos. Cada operacion toma el lock una sola vez, asi la
//! verificacion y el consumo de una compra no se intercalan con otra.
use std::sync::{Arc, Mutex};

use log::error;

use crate::{
    errors::CoffeeMachineError,
    machine_ledger::{MachineLedger, MenuEntry, Snapshot},
    recipe::Drink,
    statistics::Statistics,
};

#[derive(Clone)]
pub struct SharedMachine {
    machine: Arc<Mutex<MachineLedger>>,
}

impl SharedMachine {
    pub fn new(machine: MachineLedger) -> SharedMachine {
        SharedMachine {
            machine: Arc::new(Mutex::new(machine)),
        }
    }

    pub fn purchase(&self, drink: Drink) -> Result<(), CoffeeMachineError> {
        self.machine.lock()?.purchase(drink)
    }

    pub fn refill(&self, water: u64, milk: u64, beans: u64, cups: u64) -> Result<(), CoffeeMachineError> {
        self.machine.lock()?.refill(water, milk, beans, cups);
        Ok(())
    }

    pub fn collect_revenue(&self) -> Result<u64, CoffeeMachineError> {
        Ok(self.machine.lock()?.collect_revenue())
    }

    pub fn inspect(&self) -> Result<Snapshot, CoffeeMachineError> {
        Ok(self.machine.lock()?.inspect())
    }

    pub fn menu(&self) -> Result<Vec<MenuEntry>, CoffeeMachineError> {
        Ok(self.machine.lock()?.menu())
    }

    pub fn statistics(&self) -> Result<Statistics, CoffeeMachineError> {
        Ok(self.machine.lock()?.statistics())
    }

    /// Devuelve la maquina si este es el ultimo handle que queda
    pub fn into_inner(self) -> Result<MachineLedger, CoffeeMachineError> {
        match Arc::try_unwrap(self.machine) {
            Ok(mutex) => Ok(mutex.into_inner()?),
            Err(_) => {
                error!("[MACHINE] The machine is still shared");
                Err(CoffeeMachineError::LockError)
            }
        }
    }
}
