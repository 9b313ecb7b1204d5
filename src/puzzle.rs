use crate::exception::PuzzleError;
use crate::xor::apply_single_byte_xor;
use rand::rngs::OsRng;
use rand::Rng;
use rand::RngCore;
use std::fmt;

pub const FLAG: &str = "flag{x0r_1s_r3v3rs1bl3}";

#[derive(Debug)]
pub struct Puzzle {
    pub key: u8,
    pub ciphertext: Vec<u8>,
}

impl Puzzle {
    pub fn ciphertext_hex(&self) -> String {
        hex::encode(&self.ciphertext)
    }
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "[*] Random key chosen: {}", self.key)?;
        write!(f, "[*] Ciphertext (hex): {}", self.ciphertext_hex())
    }
}

// Draw a key from the OS entropy source. Zero is rejected since xor
// with zero leaves the plaintext unchanged.
fn draw_key() -> Result<u8, PuzzleError> {
    let mut byte = [0u8; 1];
    loop {
        OsRng
            .try_fill_bytes(&mut byte)
            .map_err(|error| PuzzleError::RandomSource(error.to_string()))?;
        if byte[0] != 0 {
            return Ok(byte[0]);
        }
    }
}

pub fn generate() -> Result<Puzzle, PuzzleError> {
    Ok(generate_with_key(draw_key()?))
}

// Variant for callers that bring their own rng
pub fn generate_with_rng<R: Rng>(rng: &mut R) -> Puzzle {
    generate_with_key(rng.gen_range(1..=255))
}

pub fn generate_with_key(key: u8) -> Puzzle {
    Puzzle {
        key,
        ciphertext: apply_single_byte_xor(key, FLAG.as_bytes()),
    }
}

#[cfg(test)]
mod tests {
    use crate::puzzle::generate;
    use crate::puzzle::generate_with_key;
    use crate::puzzle::generate_with_rng;
    use crate::puzzle::FLAG;
    use crate::xor::apply_single_byte_xor;
    use crate::xor::recover_flag_key;
    use std::collections::HashSet;

    #[test]
    fn test_known_key_fixture() {
        let puzzle = generate_with_key(42);
        assert_eq!(
            "4c464b4d51521a58751b597558195c1958591b48461957",
            puzzle.ciphertext_hex()
        );
    }

    #[test]
    fn test_ciphertext_length() {
        let puzzle = generate().unwrap();
        assert_eq!(FLAG.len(), puzzle.ciphertext.len());
        assert_eq!(FLAG.len() * 2, puzzle.ciphertext_hex().len());
    }

    #[test]
    fn test_round_trip() {
        let puzzle = generate().unwrap();
        assert_eq!(
            FLAG.as_bytes().to_vec(),
            apply_single_byte_xor(puzzle.key, &puzzle.ciphertext)
        );
    }

    #[test]
    fn test_key_range() {
        let mut rng = rand::thread_rng();
        let mut seen = HashSet::new();
        for _ in 0..10_000 {
            let puzzle = generate_with_rng(&mut rng);
            assert!(puzzle.key >= 1);
            seen.insert(puzzle.key);
        }
        // weak sanity check on the random source: no gross bias toward
        // a handful of values
        assert!(seen.len() > 200);
    }

    #[test]
    fn test_hex_format() {
        let puzzle = generate().unwrap();
        let hex = puzzle.ciphertext_hex();
        assert_eq!(0, hex.len() % 2);
        assert!(hex.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_output_format() {
        let puzzle = generate_with_key(42);
        assert_eq!(
            "[*] Random key chosen: 42\n\
             [*] Ciphertext (hex): 4c464b4d51521a58751b597558195c1958591b48461957",
            format!("{}", puzzle)
        );
    }

    #[test]
    fn test_puzzle_is_solvable() {
        let puzzle = generate().unwrap();
        let (key, decrypted) = recover_flag_key(&puzzle.ciphertext).unwrap();
        assert_eq!(puzzle.key, key);
        assert_eq!(FLAG.as_bytes().to_vec(), decrypted);
    }
}
