/// German vowels, umlauts included. Umlauts are distinct letters: Ä never
/// matches A.
pub const VOWELS: [char; 8] = ['A', 'E', 'I', 'O', 'U', 'Ä', 'Ö', 'Ü'];

/// German consonants, ß included.
pub const CONSONANTS: [char; 22] = [
    'B', 'C', 'D', 'F', 'G', 'H', 'J', 'K', 'L', 'M', //
    'N', 'P', 'Q', 'R', 'S', 'T', 'V', 'W', 'X', 'Y', 'Z', 'ß',
];

pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(&normalized(c))
}

pub fn is_consonant(c: char) -> bool {
    CONSONANTS.contains(&normalized(c))
}

pub fn is_letter(c: char) -> bool {
    is_vowel(c) || is_consonant(c)
}

/// Case normalization for guess input. ß has no uppercase form we use.
pub fn normalized(c: char) -> char {
    if c == 'ß' {
        c
    } else {
        c.to_uppercase().next().unwrap_or(c)
    }
}

/// Canonical form for solution comparison: uppercase, hyphens stripped,
/// whitespace runs collapsed, ends trimmed. Puzzle texts are already
/// uppercase; guesses might not be.
pub fn canonical(text: &str) -> String {
    text.chars()
        .filter(|c| *c != '-')
        .map(normalized)
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
