//! Configuracion opcional de la maquina, leida de un archivo JSON.
//! Cualquier campo que no figure toma el valor de fabrica.
use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::debug;
use serde::Deserialize;

use crate::{
    constants::{
        FACTORY_RECIPES, INITIAL_BEANS, INITIAL_CUPS, INITIAL_MILK, INITIAL_REVENUE,
        INITIAL_WATER,
    },
    errors::CoffeeMachineError,
    inventory::Inventory,
    machine_ledger::MachineLedger,
    recipe::{Drink, Recipe},
};

#[derive(Deserialize, Debug, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
struct JsonInventory {
    water: u64,
    milk: u64,
    beans: u64,
    cups: u64,
}

impl Default for JsonInventory {
    fn default() -> Self {
        JsonInventory {
            water: INITIAL_WATER,
            milk: INITIAL_MILK,
            beans: INITIAL_BEANS,
            cups: INITIAL_CUPS,
        }
    }
}

#[derive(Deserialize, Debug, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
struct JsonRecipe {
    drink: Drink,
    #[serde(default)]
    water: u64,
    #[serde(default)]
    milk: u64,
    #[serde(default)]
    beans: u64,
    price: u64,
}

#[derive(Deserialize, Debug)]
#[serde(default, deny_unknown_fields)]
pub struct MachineConfig {
    inventory: JsonInventory,
    revenue: u64,
    recipes: Vec<JsonRecipe>,
    menu: Option<Vec<Drink>>,
}

impl Default for MachineConfig {
    fn default() -> Self {
        MachineConfig {
            inventory: JsonInventory::default(),
            revenue: INITIAL_REVENUE,
            recipes: FACTORY_RECIPES
                .iter()
                .map(|(drink, recipe)| JsonRecipe {
                    drink: *drink,
                    water: recipe.water,
                    milk: recipe.milk,
                    beans: recipe.beans,
                    price: recipe.price,
                })
                .collect(),
            menu: None,
        }
    }
}

impl MachineConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<MachineConfig, CoffeeMachineError> {
        let file = File::open(path.as_ref()).map_err(|err| {
            CoffeeMachineError::ConfigError(format!(
                "could not open {}: {}",
                path.as_ref().display(),
                err
            ))
        })?;
        debug!("[CONFIG] Reading {}", path.as_ref().display());
        MachineConfig::from_reader(BufReader::new(file))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<MachineConfig, CoffeeMachineError> {
        serde_json::from_reader(reader)
            .map_err(|err| CoffeeMachineError::ConfigError(err.to_string()))
    }

    /// Arma la maquina. Falla si una bebida se repite o si el menu tiene bebidas sin receta.
    pub fn build(self) -> Result<MachineLedger, CoffeeMachineError> {
        let mut recipes = HashMap::new();
        let mut recipe_order = Vec::new();
        for json_recipe in self.recipes {
            let recipe = Recipe::new(
                json_recipe.water,
                json_recipe.milk,
                json_recipe.beans,
                json_recipe.price,
            );
            if recipes.insert(json_recipe.drink, recipe).is_some() {
                return Err(CoffeeMachineError::ConfigError(format!(
                    "{} has more than one recipe",
                    json_recipe.drink
                )));
            }
            recipe_order.push(json_recipe.drink);
        }

        let menu = self.menu.unwrap_or(recipe_order);
        if menu.is_empty() {
            return Err(CoffeeMachineError::ConfigError(
                "the menu is empty".to_string(),
            ));
        }
        let mut seen = HashSet::new();
        if let Some(drink) = menu.iter().find(|drink| !seen.insert(**drink)) {
            return Err(CoffeeMachineError::ConfigError(format!(
                "{} is more than once in the menu",
                drink
            )));
        }

        let inventory = Inventory::new(
            self.inventory.water,
            self.inventory.milk,
            self.inventory.beans,
            self.inventory.cups,
        );
        MachineLedger::new(inventory, self.revenue, recipes, menu).map_err(|err| match err {
            CoffeeMachineError::UnknownDrink(drink) => {
                CoffeeMachineError::ConfigError(format!("{} is in the menu but has no recipe", drink))
            }
            other => other,
        })
    }
}
