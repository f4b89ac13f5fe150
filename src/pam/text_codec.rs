//! Text <-> bitstream conversion

use super::error::{PamError, PamResult};
use crate::utils::consts::{BITS_PER_SYMBOL, MAX_BITS_PER_SYMBOL};

/// Order in which the bits of a symbol are transmitted
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BitOrder {
    #[default]
    LsbFirst,
    MsbFirst,
}

/// What `decode` does with trailing bits that do not fill a symbol
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Remainder {
    /// Drop the partial symbol
    #[default]
    Truncate,
    /// Zero-fill the partial symbol
    Pad,
    /// Fail with `MalformedInput`
    Reject,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CodecConfig {
    pub bits_per_symbol: usize,
    pub order: BitOrder,
    pub remainder: Remainder,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            bits_per_symbol: BITS_PER_SYMBOL,
            order: BitOrder::default(),
            remainder: Remainder::default(),
        }
    }
}

impl CodecConfig {
    pub fn with_bits(bits_per_symbol: usize) -> Self {
        Self {
            bits_per_symbol,
            ..Self::default()
        }
    }

    fn validate(&self) -> PamResult<()> {
        if !(1..=MAX_BITS_PER_SYMBOL).contains(&self.bits_per_symbol) {
            return Err(PamError::invalid(format!(
                "bits per symbol {} outside 1..={}",
                self.bits_per_symbol, MAX_BITS_PER_SYMBOL
            )));
        }
        Ok(())
    }

    fn bit_position(&self, i: usize) -> usize {
        match self.order {
            BitOrder::LsbFirst => i,
            BitOrder::MsbFirst => self.bits_per_symbol - 1 - i,
        }
    }
}

/// Converts text into a bitstream, `bits_per_symbol` bits per character.
pub fn encode(text: &str, config: &CodecConfig) -> PamResult<Vec<u8>> {
    config.validate()?;
    let width = config.bits_per_symbol;
    let mut bits = Vec::with_capacity(text.chars().count() * width);

    for (pos, ch) in text.chars().enumerate() {
        let code = ch as u32;
        if code >> width != 0 {
            return Err(PamError::malformed(format!(
                "symbol {ch:?} at position {pos} does not fit in {width} bits"
            )));
        }
        for i in 0..width {
            bits.push(((code >> config.bit_position(i)) & 1) as u8);
        }
    }

    Ok(bits)
}

/// Converts a bitstream back into text.
pub fn decode(bits: &[u8], config: &CodecConfig) -> PamResult<String> {
    config.validate()?;
    let width = config.bits_per_symbol;

    if let Some(pos) = bits.iter().position(|&b| b > 1) {
        return Err(PamError::malformed(format!(
            "bit {pos} has value {}, expected 0 or 1",
            bits[pos]
        )));
    }

    let leftover = bits.len() % width;
    let usable = match (leftover, config.remainder) {
        (0, _) | (_, Remainder::Pad) => bits.len(),
        (_, Remainder::Truncate) => bits.len() - leftover,
        (_, Remainder::Reject) => {
            return Err(PamError::malformed(format!(
                "{} bits is not a multiple of {width}",
                bits.len()
            )));
        }
    };

    bits[..usable]
        .chunks(width)
        .map(|chunk| {
            // a short last chunk is zero-padded
            let code = chunk.iter().enumerate().fold(0u32, |acc, (i, &b)| {
                acc | (u32::from(b) << config.bit_position(i))
            });
            char::from_u32(code).ok_or_else(|| {
                PamError::malformed(format!("code {code:#x} is not a character"))
            })
        })
        .collect()
}
