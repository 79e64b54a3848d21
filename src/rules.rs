use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::geometry::{self, Layout};
use crate::types::Owner;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rules {
    /// Side length of the grid, 1..=5.
    pub size: u8,
    /// Player who claims the first cell.
    pub first: Owner,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            size: 2,
            first: Owner::P1,
        }
    }
}

impl Rules {
    pub fn new(size: u8, first: Owner) -> Result<Self> {
        let rules = Self { size, first };
        rules.validate()?;
        Ok(rules)
    }

    /// Fails fast on board sizes without a wiring table.
    #[inline]
    pub fn validate(&self) -> Result<()> {
        self.layout().map(|_| ())
    }

    #[inline]
    pub fn layout(&self) -> Result<&'static Layout> {
        geometry::layout(self.size).ok_or(Error::Configuration { size: self.size })
    }
}
