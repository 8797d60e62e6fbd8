use serde::{Deserialize, Serialize};

use crate::error::{Result, SssError};
use crate::field::PrimeField;

/// Text encoding used for share strings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShareEncoding {
    /// Unpadded Base64URL, fixed width per field element
    Base64,
    /// Hexadecimal, fixed width per field element (lowercase emitted, either case accepted)
    Hex,
}

impl Default for ShareEncoding {
    fn default() -> Self {
        Self::Base64
    }
}

/// Configuration options for splitting and reconstruction
#[derive(Debug, Clone)]
pub struct Config {
    /// Share text encoding
    pub encoding: ShareEncoding,
    /// Prime field the scheme operates in
    pub field: PrimeField,
    /// Cap on redraws when a random element collides or falls outside [0, P)
    pub max_draw_attempts: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            encoding: ShareEncoding::default(),
            field: PrimeField::f256(),
            // 256-bit collisions are astronomically unlikely; the cap only
            // guards against an unbounded loop.
            max_draw_attempts: 128,
        }
    }
}

impl Config {
    /// Creates a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the share text encoding
    pub fn with_encoding(mut self, encoding: ShareEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Sets the prime field
    pub fn with_field(mut self, field: PrimeField) -> Self {
        self.field = field;
        self
    }

    /// Sets the redraw attempt cap
    pub fn with_max_draw_attempts(mut self, attempts: usize) -> Result<Self> {
        if attempts == 0 {
            return Err(SssError::InvalidConfig(
                "Draw attempt cap cannot be zero".into(),
            ));
        }
        self.max_draw_attempts = attempts;
        Ok(self)
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<()> {
        if self.max_draw_attempts == 0 {
            return Err(SssError::InvalidConfig(
                "Draw attempt cap cannot be zero".into(),
            ));
        }

        Ok(())
    }
}
