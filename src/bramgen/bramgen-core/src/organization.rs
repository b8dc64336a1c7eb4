use log::{debug, error};

use crate::constants::{primitives, INIT_ROWS, INIT_ROW_BITS, MAX_LOCATIONS, WORD_BITS};
use crate::error::{BramError, Result};

/// Fixed shape of one block RAM organization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pub ceiling: usize,      // Most words this organization can hold
    pub fan_out: usize,      // Number of parallel block RAM instances
    pub addr_width: usize,   // Address bus width in bits
    pub width: usize,        // Data bits held by each instance
    pub parity_width: usize, // Byte-enable (parity) pins per port, 0 or 1
    pub primitive: &'static str,
}

/// Supported block RAM organizations, smallest capacity first
/// Every entry splits a 32-bit word evenly across its instances
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Organization {
    Ramb16S9, // four 2048 x 8 BRAMs, byte writes through parity pins
    Ramb16S4, // eight 4096 x 4 BRAMs
    Ramb16S2, // sixteen 8192 x 2 BRAMs
    Ramb16S1, // thirty-two 16384 x 1 BRAMs
}

impl Organization {
    pub const ALL: [Organization; 4] = [
        Organization::Ramb16S9,
        Organization::Ramb16S4,
        Organization::Ramb16S2,
        Organization::Ramb16S1,
    ];

    pub const fn geometry(self) -> Geometry {
        match self {
            Organization::Ramb16S9 => Geometry {
                ceiling: 2048,
                fan_out: 4,
                addr_width: 11,
                width: 8,
                parity_width: 1,
                primitive: primitives::RAMB16_S9_S9,
            },
            Organization::Ramb16S4 => Geometry {
                ceiling: 4096,
                fan_out: 8,
                addr_width: 12,
                width: 4,
                parity_width: 0,
                primitive: primitives::RAMB16_S4_S4,
            },
            Organization::Ramb16S2 => Geometry {
                ceiling: 8192,
                fan_out: 16,
                addr_width: 13,
                width: 2,
                parity_width: 0,
                primitive: primitives::RAMB16_S2_S2,
            },
            Organization::Ramb16S1 => Geometry {
                ceiling: MAX_LOCATIONS,
                fan_out: 32,
                addr_width: 14,
                width: 1,
                parity_width: 0,
                primitive: primitives::RAMB16_S1_S1,
            },
        }
    }

    pub const fn ceiling(self) -> usize {
        self.geometry().ceiling
    }

    pub const fn fan_out(self) -> usize {
        self.geometry().fan_out
    }

    pub const fn addr_width(self) -> usize {
        self.geometry().addr_width
    }

    pub const fn width(self) -> usize {
        self.geometry().width
    }

    pub const fn parity_width(self) -> usize {
        self.geometry().parity_width
    }

    pub const fn primitive(self) -> &'static str {
        self.geometry().primitive
    }

    /// Number of word locations packed into one 256-bit init row
    pub const fn locations_per_row(self) -> usize {
        INIT_ROW_BITS / self.width()
    }

    /// Inclusive (lo, hi) bit range of the word held by `instance`
    pub const fn bit_range(self, instance: usize) -> (usize, usize) {
        let lo = instance * self.width();
        (lo, lo + self.width() - 1)
    }

    /// Locations addressable through the instance address bus
    pub const fn address_space(self) -> usize {
        1 << self.addr_width()
    }

    // Sanity check for a table entry: full word coverage, consistent address width
    fn is_consistent(self) -> bool {
        self.fan_out() * self.width() == WORD_BITS
            && self.address_space() == self.ceiling()
            && self.locations_per_row() * INIT_ROWS == self.ceiling()
    }
}

/// Picks the smallest organization able to hold `word_count` words
pub fn select(word_count: usize) -> Result<Organization> {
    match Organization::ALL
        .iter()
        .copied()
        .find(|org| org.ceiling() >= word_count)
    {
        Some(org) => {
            debug_assert!(org.is_consistent());
            debug!(
                "Selected {} x{} ({} x {}) for {} words",
                org.primitive(),
                org.fan_out(),
                org.ceiling(),
                org.width(),
                word_count
            );
            Ok(org)
        }
        None => {
            error!(
                "Image of {} words exceeds the {} word limit",
                word_count, MAX_LOCATIONS
            );
            Err(BramError::CapacityExceeded {
                word_count,
                limit: MAX_LOCATIONS,
            })
        }
    }
}
