//! One-shot strike flash handed to the presentation layer.
//!
//! The core only records that a strike happened. Whoever draws the flash
//! owns the timer and acknowledges the flash by generation once it has been
//! shown for [`STRIKE_FLASH_DURATION`](super::constants::STRIKE_FLASH_DURATION).

use serde::{Deserialize, Serialize};

/// A pending strike flash.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct StrikeFlash {
    /// Increases by one on every strike, across rounds.
    pub generation: u64,
    /// Strike count of the round at the time of the strike.
    pub strikes: u32,
}

#[derive(Clone, Debug, Default)]
pub struct StrikeSignal {
    generation: u64,
    pending: Option<StrikeFlash>,
}

impl StrikeSignal {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raises the flash, replacing any flash still showing.
    pub fn fire(&mut self, strikes: u32) -> StrikeFlash {
        self.generation += 1;
        let flash = StrikeFlash {
            generation: self.generation,
            strikes,
        };
        self.pending = Some(flash);
        flash
    }

    pub fn pending(&self) -> Option<StrikeFlash> {
        self.pending
    }

    /// Clears the flash if `generation` is still the one showing. A timer
    /// from an older strike cannot clear a newer flash.
    ///
    /// Returns whether anything was cleared.
    pub fn acknowledge(&mut self, generation: u64) -> bool {
        match self.pending {
            Some(flash) if flash.generation == generation => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }
}
