//! Bebidas que ofrece la maquina, sus recetas y los recursos que consumen.
use std::fmt;

use serde::Deserialize;

/// Cantidad de recursos que controla la maquina
pub const TOTAL_RESOURCES: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum Drink {
    Espresso,
    Ristretto,
    Latte,
    Cappuccino,
}

impl Drink {
    pub fn name(&self) -> &'static str {
        match self {
            Drink::Espresso => "Espresso",
            Drink::Ristretto => "Ristretto",
            Drink::Latte => "Latte",
            Drink::Cappuccino => "Cappuccino",
        }
    }
}

impl fmt::Display for Drink {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Recursos que se consumen al preparar una bebida.
/// El orden de las variantes es el orden en que se verifican.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Water,
    Milk,
    Beans,
    Cups,
}

impl Resource {
    pub const ALL: [Resource; TOTAL_RESOURCES] =
        [Resource::Water, Resource::Milk, Resource::Beans, Resource::Cups];
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Resource::Water => "water",
            Resource::Milk => "milk",
            Resource::Beans => "beans",
            Resource::Cups => "disposable cups",
        };
        write!(f, "{}", name)
    }
}

/// Receta de una bebida. Los vasos no figuran: cada bebida usa exactamente uno.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recipe {
    pub water: u64,
    pub milk: u64,
    pub beans: u64,
    pub price: u64,
}

impl Recipe {
    pub const fn new(water: u64, milk: u64, beans: u64, price: u64) -> Recipe {
        Recipe {
            water,
            milk,
            beans,
            price,
        }
    }
}
