//! Inventario de la maquina: un contenedor por cada recurso.
use crate::{
    container::Container,
    recipe::{Recipe, Resource, TOTAL_RESOURCES},
};

/// Vasos que usa cualquier bebida
const CUPS_PER_DRINK: u64 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inventory {
    water: Container,
    milk: Container,
    beans: Container,
    cups: Container,
}

impl Inventory {
    pub fn new(water: u64, milk: u64, beans: u64, cups: u64) -> Inventory {
        Inventory {
            water: Container::new(water),
            milk: Container::new(milk),
            beans: Container::new(beans),
            cups: Container::new(cups),
        }
    }

    pub fn container(&self, resource: Resource) -> &Container {
        match resource {
            Resource::Water => &self.water,
            Resource::Milk => &self.milk,
            Resource::Beans => &self.beans,
            Resource::Cups => &self.cups,
        }
    }

    fn container_mut(&mut self, resource: Resource) -> &mut Container {
        match resource {
            Resource::Water => &mut self.water,
            Resource::Milk => &mut self.milk,
            Resource::Beans => &mut self.beans,
            Resource::Cups => &mut self.cups,
        }
    }

    pub fn remaining(&self, resource: Resource) -> u64 {
        self.container(resource).remaining
    }

    /// Lo que pide la receta de cada recurso, en el orden en que se verifica
    fn requirements(recipe: &Recipe) -> [(Resource, u64); TOTAL_RESOURCES] {
        [
            (Resource::Water, recipe.water),
            (Resource::Milk, recipe.milk),
            (Resource::Beans, recipe.beans),
            (Resource::Cups, CUPS_PER_DRINK),
        ]
    }

    /// Devuelve el primer recurso que no alcanza para la receta, si lo hay.
    /// Si faltan varios solo se informa el primero en el orden agua, leche, granos, vasos.
    pub fn shortage(&self, recipe: &Recipe) -> Option<Resource> {
        Inventory::requirements(recipe)
            .into_iter()
            .find(|(resource, required)| !self.container(*resource).has(*required))
            .map(|(resource, _)| resource)
    }

    /// Quien llama tiene que haber verificado antes que no falte nada con `shortage`.
    pub fn consume(&mut self, recipe: &Recipe) {
        for (resource, required) in Inventory::requirements(recipe) {
            self.container_mut(resource).consume(required);
        }
    }

    pub fn replenish(&mut self, water: u64, milk: u64, beans: u64, cups: u64) {
        self.water.replenish(water);
        self.milk.replenish(milk);
        self.beans.replenish(beans);
        self.cups.replenish(cups);
    }
}
