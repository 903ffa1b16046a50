/// Contenedor de un recurso. Lleva lo que queda y lo que se consumio desde que se encendio la maquina.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Container {
    pub remaining: u64,
    pub consumed: u64,
}

impl Container {
    pub fn new(initial_capacity: u64) -> Container {
        Container {
            remaining: initial_capacity,
            consumed: 0,
        }
    }

    pub fn has(&self, quantity_required: u64) -> bool {
        self.remaining >= quantity_required
    }

    /// Quien llama tiene que haber verificado antes con `has`.
    pub fn consume(&mut self, quantity: u64) {
        self.remaining -= quantity;
        self.consumed += quantity;
    }

    pub fn replenish(&mut self, quantity: u64) {
        self.remaining = self.remaining.saturating_add(quantity);
    }
}
