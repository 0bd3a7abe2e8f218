use miette::Diagnostic;
use thiserror::Error;

/// A single battery: the digit it shows and where it sits in the bank.
/// Both are fixed when the bank is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Battery {
    pub index: usize,
    pub joltage: u8,
}

#[derive(Debug, Error, Diagnostic)]
pub enum SelectionError {
    /// The bank cannot supply the requested number of digits.
    #[error("bank holds {available} batteries but {requested} digits were requested")]
    InsufficientBatteries { available: usize, requested: usize },

    /// A battery reports something other than a single decimal digit.
    #[error("battery {index} reports joltage {joltage}, expected 0-9")]
    InvalidJoltage { index: usize, joltage: u8 },
}

/// Builds the battery tokens for one bank line. Non-digit bytes map to
/// out-of-range joltages and are rejected by [`largest_display`].
pub fn bank_from_line(line: &str) -> Vec<Battery> {
    line.bytes()
        .enumerate()
        .map(|(index, byte)| Battery {
            index,
            joltage: byte.wrapping_sub(b'0'),
        })
        .collect()
}

/// Turns on `digits` batteries so that their joltages, read left to right,
/// form the largest possible number while keeping the bank's order.
///
/// Greedy selection: at each step the candidate window runs from just past
/// the previous pick up to the last index that still leaves enough
/// batteries to finish the selection. The largest joltage in the window
/// wins; ties keep the leftmost occurrence, which leaves the most batteries
/// available for later picks. A more significant digit outweighs every
/// choice of the digits after it, so the greedy pick is globally maximal.
pub fn largest_display(batteries: &[Battery], digits: usize) -> Result<u64, SelectionError> {
    if batteries.len() < digits {
        return Err(SelectionError::InsufficientBatteries {
            available: batteries.len(),
            requested: digits,
        });
    }

    if let Some(bad) = batteries.iter().find(|battery| battery.joltage > 9) {
        return Err(SelectionError::InvalidJoltage {
            index: bad.index,
            joltage: bad.joltage,
        });
    }

    let mut selected = Vec::with_capacity(digits);
    let mut cursor = 0;

    for remaining in (1..=digits).rev() {
        // Every candidate must leave `remaining - 1` batteries after it.
        let window_end = batteries.len() - remaining + 1;

        let mut pick = cursor;
        for index in cursor + 1..window_end {
            // Strict '>' keeps the leftmost of tied maxima.
            if batteries[index].joltage > batteries[pick].joltage {
                pick = index;
            }
        }

        tracing::trace!(
            window = ?(cursor..window_end),
            chosen = batteries[pick].index,
            joltage = batteries[pick].joltage,
            "selected digit"
        );

        selected.push(batteries[pick]);
        cursor = pick + 1;
    }

    // Picks were made left to right, so `selected` is already in bank order.
    Ok(selected
        .iter()
        .fold(0, |display, battery| display * 10 + u64::from(battery.joltage)))
}
