use rand::Rng;
use rand::distributions::Alphanumeric;
use rand::rngs::OsRng;

/// Size of the `[0-9A-Za-z]` alphabet sampled by [`random_alphanumeric`].
pub const ALPHANUMERIC_ALPHABET_LEN: usize = 62;

/// Random `[0-9A-Za-z]` string of `len` characters, drawn uniformly from the
/// OS CSPRNG. Used for one-time codes and tokens.
pub fn random_alphanumeric(len: usize) -> String {
    OsRng
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn zero_length_is_empty() {
        assert_eq!(random_alphanumeric(0), "");
    }

    #[test]
    fn has_requested_length_and_alphabet() {
        let s = random_alphanumeric(64);
        assert_eq!(s.len(), 64);
        assert!(s.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn draws_from_the_whole_alphabet() {
        let seen: HashSet<char> = random_alphanumeric(20_000).chars().collect();
        // With 20k samples every one of the 62 symbols appears with
        // overwhelming probability.
        assert_eq!(seen.len(), ALPHANUMERIC_ALPHABET_LEN);
    }

    #[test]
    fn consecutive_values_differ() {
        assert_ne!(random_alphanumeric(32), random_alphanumeric(32));
    }
}
