//! Rail Fence transposition.
//!
//! Characters are laid out in a zig-zag over the rails (down to the last rail,
//! back up to the first, and so on) and the rails are then read top to bottom.
//! Both directions work on `char`s, so multi-byte text is never split.

use crate::core::params::EffectiveRails;

/// Rail index of every position in a text of `len` chars.
fn zigzag(len: usize, rails: usize) -> Vec<usize> {
    let mut pattern = Vec::with_capacity(len);
    let mut row = 0usize;
    let mut descending = true;

    for _ in 0..len {
        pattern.push(row);
        if row == 0 {
            descending = true;
        } else if row == rails - 1 {
            descending = false;
        }
        if descending {
            row += 1;
        } else {
            row -= 1;
        }
    }
    pattern
}

/// Rails past the text length are never reached, so don't allocate them.
fn used_rails(len: usize, rails: EffectiveRails) -> usize {
    rails.get().min(len).max(1)
}

/// Writes the text in a zig-zag and reads it off rail by rail.
///
/// # Example
///
/// ```
/// use decipher::{EffectiveRails, rail_fence};
///
/// let cipher = rail_fence::encode("WEAREDISCOVEREDFLEEATONCE", EffectiveRails::new(3));
/// assert_eq!(cipher, "WECRLTEERDSOEEFEAOCAIVDEN");
/// ```
pub fn encode(text: &str, rails: EffectiveRails) -> String {
    let chars: Vec<char> = text.chars().collect();
    let rails = used_rails(chars.len(), rails);

    let mut rows: Vec<String> = vec![String::new(); rails];
    for (c, row) in chars.iter().zip(zigzag(chars.len(), rails)) {
        rows[row].push(*c);
    }
    rows.concat()
}

/// Reverses [`encode`] for the same rail count.
pub fn decode(cipher: &str, rails: EffectiveRails) -> String {
    let chars: Vec<char> = cipher.chars().collect();
    let rails = used_rails(chars.len(), rails);
    let pattern = zigzag(chars.len(), rails);

    let mut counts = vec![0usize; rails];
    for &row in &pattern {
        counts[row] += 1;
    }

    // Start offset of each rail's slice in the cipher text
    let mut next = Vec::with_capacity(rails);
    let mut offset = 0;
    for count in counts {
        next.push(offset);
        offset += count;
    }

    let mut out = String::with_capacity(cipher.len());
    for row in pattern {
        out.push(chars[next[row]]);
        next[row] += 1;
    }
    out
}
