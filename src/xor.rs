use crate::util::score_text;

// Xor every byte against a single-byte key. Xor is self-inverse, so
// the same call both encrypts and decrypts.
pub fn apply_single_byte_xor(key: u8, data: &[u8]) -> Vec<u8> {
    data.iter().map(|b| b ^ key).collect::<Vec<u8>>()
}

// Try to recover the key by iterating through all 255 nonzero keys and
// scoring each candidate plaintext, returning the highest-scoring
// plaintext along with the key and score
pub fn brute_force_xor_key(ciphertext: &[u8]) -> Option<(usize, u8, Vec<u8>)> {
    let (score, key, decrypted) = (1u8..=255).fold(
        (0usize, 0u8, Vec::<u8>::new()),
        |(score, key, decrypted), test_key| {
            let test_decrypted = apply_single_byte_xor(test_key, ciphertext);
            let test_score = score_text(&test_decrypted);
            if test_score > score {
                (test_score, test_key, test_decrypted)
            } else {
                (score, key, decrypted)
            }
        },
    );

    if score > 0 {
        return Some((score, key, decrypted));
    }

    None
}

// English frequency scoring misleads on short flag-format strings, so
// look for the flag wrapper instead: the key whose plaintext reads
// flag{...} is the answer
pub fn recover_flag_key(ciphertext: &[u8]) -> Option<(u8, Vec<u8>)> {
    (1u8..=255).find_map(|key| {
        let decrypted = apply_single_byte_xor(key, ciphertext);
        if decrypted.starts_with(b"flag{") && decrypted.ends_with(b"}") {
            Some((key, decrypted))
        } else {
            None
        }
    })
}
