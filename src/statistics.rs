use std::fmt;

use crate::{container::Container, recipe::Resource};

/// Resumen de lo que hizo la maquina desde que se encendio
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub drinks_served: u64,
    pub purchases_rejected: u64,
    pub containers: Vec<(Resource, Container)>,
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "[STATISTICS] Drinks served={} | Rejected={} | Resource=(remaining, consumed) |",
            self.drinks_served, self.purchases_rejected
        )?;
        for (position, (resource, container)) in self.containers.iter().enumerate() {
            let separator = if position == 0 { " " } else { ", " };
            write!(
                f,
                "{}{}=({},{})",
                separator, resource, container.remaining, container.consumed
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_format_every_container() {
        let statistics = Statistics {
            drinks_served: 2,
            purchases_rejected: 1,
            containers: vec![
                (Resource::Water, Container::new(100)),
                (Resource::Cups, Container::new(3)),
            ],
        };
        assert_eq!(
            "[STATISTICS] Drinks served=2 | Rejected=1 | Resource=(remaining, consumed) | water=(100,0), disposable cups=(3,0)",
            statistics.to_string()
        );
    }
}
