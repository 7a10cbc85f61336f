//! String reversal and palindromes.

/// `s` with its characters in reverse order.
pub fn str_reverse(s: &str) -> String {
    s.chars().rev().collect()
}

/// [`str_reverse`] by indexing the characters back to front and appending one at a time.
pub fn str_reverse_naive(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut reversed = String::new();
    for i in 0..chars.len() {
        reversed.push(chars[chars.len() - 1 - i]);
    }
    reversed
}

/// Whether `s` reads the same forwards and backwards, character by character.
pub fn palindrome(s: &str) -> bool {
    s.chars().eq(s.chars().rev())
}
