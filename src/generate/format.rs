//! Fixed-position punctuation masks.

/// Mask for an individual taxpayer number (CPF).
pub const INDIVIDUAL_MASK: &str = "###.###.###-##";

/// Mask for an entity taxpayer number (CNPJ).
pub const ENTITY_MASK: &str = "##.###.###/####-##";

/// Mask for a 32-hex-digit UUID in 8-4-4-4-12 groups.
pub const UUID_MASK: &str = "########-####-####-####-############";

/// Lays `raw` into `mask`, replacing each `#` with the next raw character.
///
/// Punctuation is copied literally. Slots left over once `raw` runs out are
/// dropped, and surplus raw characters are ignored.
#[must_use]
pub fn apply_mask(raw: &str, mask: &str) -> String {
    let mut chars = raw.chars();
    let mut out = String::with_capacity(mask.len());
    for slot in mask.chars() {
        if slot == '#' {
            match chars.next() {
                Some(c) => out.push(c),
                None => break,
            }
        } else {
            out.push(slot);
        }
    }
    out
}
