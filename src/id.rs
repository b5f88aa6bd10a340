//! See [`WebsiteId`].

use std::fmt::{self, Display, Formatter};

use rand::RngCore;
use serde_with::SerializeDisplay;

/// The number of random bytes in a [`WebsiteId`].
///
/// Each byte renders as two hex characters, giving the 8-character suffix.
const BYTE_LENGTH: usize = 4;

/// The prefix every website ID starts with.
const PREFIX: &str = "website_";

/// A website identifier: `website_` followed by 8 lowercase hex characters.
///
/// Repeated conversions of the same page each get a fresh random ID, so IDs never collide by
/// construction of the input. Database-level uniqueness is still enforced by the primary key,
/// with [`WebsiteId::reroll`] as the recovery path.
#[derive(SerializeDisplay, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct WebsiteId([u8; BYTE_LENGTH]);

impl WebsiteId {
    /// Generates a cryptographically secure pseudorandom ID.
    pub fn generate() -> Self {
        let mut id = Self([0; BYTE_LENGTH]);
        id.reroll();
        id
    }

    /// Overwrites this ID with a new cryptographically secure pseudorandom ID, reusing the
    /// existing memory.
    pub fn reroll(&mut self) {
        rand::thread_rng().fill_bytes(&mut self.0);
    }
}

impl Display for WebsiteId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(PREFIX)?;

        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn renders_prefix_and_hex_suffix() {
        let id = WebsiteId::generate().to_string();

        let suffix = id
            .strip_prefix("website_")
            .expect("ID should start with `website_`");

        assert_eq!(suffix.len(), 8, "suffix should be 8 characters");
        assert!(
            suffix.chars().all(|char| char.is_ascii_hexdigit()),
            "suffix should be hex: {suffix}"
        );
    }

    #[test]
    fn generated_ids_are_distinct() {
        let ids: HashSet<String> = (0..64).map(|_| WebsiteId::generate().to_string()).collect();

        assert_eq!(ids.len(), 64, "generated IDs should not collide");
    }

    #[test]
    fn reroll_replaces_the_id() {
        let mut id = WebsiteId::generate();
        let before = id.to_string();

        id.reroll();

        assert_ne!(id.to_string(), before, "rerolling should change the ID");
    }
}
