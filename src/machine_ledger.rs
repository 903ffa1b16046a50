//! Estado de la maquina de cafe: recetas, inventario y dinero recaudado.
use std::collections::HashMap;

use log::debug;

use crate::{
    constants::{
        FACTORY_RECIPES, INITIAL_BEANS, INITIAL_CUPS, INITIAL_MILK, INITIAL_REVENUE,
        INITIAL_WATER,
    },
    errors::CoffeeMachineError,
    inventory::Inventory,
    recipe::{Drink, Recipe, Resource},
    statistics::Statistics,
};

/// Foto de las cantidades que controla la maquina
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    pub water: u64,
    pub milk: u64,
    pub beans: u64,
    pub cups: u64,
    pub revenue: u64,
}

/// Entrada del menu tal como se le muestra al usuario. `index` empieza en 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEntry {
    pub index: usize,
    pub drink: Drink,
    pub recipe: Recipe,
}

/// Representa a la maquina de cafe.
/// Las recetas y el menu quedan fijos al construirla; solo cambian el inventario y el dinero.
#[derive(Debug, Clone)]
pub struct MachineLedger {
    recipes: HashMap<Drink, Recipe>,
    menu: Vec<Drink>,
    inventory: Inventory,
    revenue: u64,
    drinks_served: u64,
    purchases_rejected: u64,
}

impl MachineLedger {
    /// Todas las bebidas del menu tienen que tener receta.
    pub fn new(
        inventory: Inventory,
        revenue: u64,
        recipes: HashMap<Drink, Recipe>,
        menu: Vec<Drink>,
    ) -> Result<MachineLedger, CoffeeMachineError> {
        if let Some(drink) = menu.iter().find(|drink| !recipes.contains_key(*drink)) {
            return Err(CoffeeMachineError::UnknownDrink(*drink));
        }
        Ok(MachineLedger {
            recipes,
            menu,
            inventory,
            revenue,
            drinks_served: 0,
            purchases_rejected: 0,
        })
    }

    /// Maquina con el inventario, el dinero y las recetas de fabrica
    pub fn with_factory_settings() -> MachineLedger {
        MachineLedger {
            recipes: FACTORY_RECIPES.into_iter().collect(),
            menu: FACTORY_RECIPES.iter().map(|(drink, _)| *drink).collect(),
            inventory: Inventory::new(INITIAL_WATER, INITIAL_MILK, INITIAL_BEANS, INITIAL_CUPS),
            revenue: INITIAL_REVENUE,
            drinks_served: 0,
            purchases_rejected: 0,
        }
    }

    /// Prepara la bebida si alcanzan los recursos. Si falta algo no se modifica nada
    /// y se informa el primer recurso faltante (agua, leche, granos, vasos).
    pub fn purchase(&mut self, drink: Drink) -> Result<(), CoffeeMachineError> {
        let recipe = *self
            .recipes
            .get(&drink)
            .ok_or(CoffeeMachineError::UnknownDrink(drink))?;

        if let Some(resource) = self.inventory.shortage(&recipe) {
            self.purchases_rejected += 1;
            debug!("[MACHINE] Skipped {}, not enough {}", drink, resource);
            return Err(CoffeeMachineError::InsufficientResource(resource));
        }

        self.inventory.consume(&recipe);
        self.revenue = self.revenue.saturating_add(recipe.price);
        self.drinks_served += 1;
        debug!(
            "[MACHINE] Made {} for ${}, revenue is ${}",
            drink, recipe.price, self.revenue
        );
        Ok(())
    }

    pub fn refill(&mut self, water: u64, milk: u64, beans: u64, cups: u64) {
        self.inventory.replenish(water, milk, beans, cups);
        debug!(
            "[MACHINE] Refilled {} ml of water, {} ml of milk, {} g of beans, {} cups",
            water, milk, beans, cups
        );
    }

    /// Entrega todo el dinero recaudado y deja la caja en cero
    pub fn collect_revenue(&mut self) -> u64 {
        let revenue = std::mem::take(&mut self.revenue);
        debug!("[MACHINE] Collected ${}", revenue);
        revenue
    }

    pub fn inspect(&self) -> Snapshot {
        Snapshot {
            water: self.inventory.remaining(Resource::Water),
            milk: self.inventory.remaining(Resource::Milk),
            beans: self.inventory.remaining(Resource::Beans),
            cups: self.inventory.remaining(Resource::Cups),
            revenue: self.revenue,
        }
    }

    pub fn menu(&self) -> Vec<MenuEntry> {
        self.menu
            .iter()
            .enumerate()
            .filter_map(|(position, drink)| {
                self.recipes.get(drink).map(|recipe| MenuEntry {
                    index: position + 1,
                    drink: *drink,
                    recipe: *recipe,
                })
            })
            .collect()
    }

    /// Bebida del menu que corresponde al indice que ve el usuario (empieza en 1)
    pub fn select(&self, index: usize) -> Option<Drink> {
        index
            .checked_sub(1)
            .and_then(|position| self.menu.get(position))
            .copied()
    }

    pub fn statistics(&self) -> Statistics {
        Statistics {
            drinks_served: self.drinks_served,
            purchases_rejected: self.purchases_rejected,
            containers: Resource::ALL
                .iter()
                .map(|resource| (*resource, *self.inventory.container(*resource)))
                .collect(),
        }
    }
}
