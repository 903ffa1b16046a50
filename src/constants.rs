//! Parametros de fabrica de la maquina de cafe
use crate::recipe::{Drink, Recipe};

/// Agua inicial, en ml
pub const INITIAL_WATER: u64 = 400;

/// Leche inicial, en ml
pub const INITIAL_MILK: u64 = 540;

/// Granos de cafe iniciales, en gramos
pub const INITIAL_BEANS: u64 = 120;

/// Vasos descartables iniciales
pub const INITIAL_CUPS: u64 = 9;

/// Dinero que tiene la maquina al encenderse
pub const INITIAL_REVENUE: u64 = 540;

/// Recetas de fabrica (agua ml, leche ml, granos g, precio).
/// El orden es tambien el orden del menu por defecto.
pub const FACTORY_RECIPES: [(Drink, Recipe); 4] = [
    (Drink::Espresso, Recipe::new(250, 0, 16, 4)),
    (Drink::Ristretto, Recipe::new(250, 0, 30, 7)),
    (Drink::Latte, Recipe::new(350, 75, 20, 7)),
    (Drink::Cappuccino, Recipe::new(200, 100, 12, 6)),
];
