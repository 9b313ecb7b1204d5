pub fn is_printable(string: &[u8]) -> bool {
    string
        .iter()
        .fold(true, |is, c| is && c >= &32 && c <= &126)
}

// Score text based on frequency of letters we expect to be frequent
// in English. Unprintable candidates score zero.
pub fn score_text(string: &[u8]) -> usize {
    if !is_printable(string) {
        return 0;
    }

    let mut score: usize = 0;
    for byte in string {
        match *byte as char {
            ' ' => score += 7,
            'e' => score += 6,
            'E' => score += 6,
            't' => score += 5,
            'T' => score += 5,
            'a' => score += 4,
            'A' => score += 4,
            'o' => score += 3,
            'O' => score += 3,
            'i' => score += 2,
            'I' => score += 2,
            'n' => score += 1,
            'N' => score += 1,
            _ => score += 0,
        }
    }

    score
}
