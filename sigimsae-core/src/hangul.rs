//! Hangul initial-consonant (choseong) matching.
//!
//! Lets a query made only of compatibility jamo such as `ㄷ` or `ㅈㄱ`
//! match names by the leading consonant of each syllable.

/// Leading consonants in syllable-block order.
const CHOSEONG: [char; 19] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ', 'ㅋ',
    'ㅌ', 'ㅍ', 'ㅎ',
];

const SYLLABLE_FIRST: u32 = 0xAC00;
const SYLLABLE_LAST: u32 = 0xD7A3;
/// Medial vowels (21) times final consonants (28).
const SYLLABLES_PER_INITIAL: u32 = 21 * 28;

fn is_consonant_jamo(ch: char) -> bool {
    ('ㄱ'..='ㅎ').contains(&ch)
}

/// Reduce text to the initial consonant of each Hangul syllable.
///
/// Jamo already in the input are kept; everything else is dropped.
pub fn to_choseong(text: &str) -> String {
    text.chars()
        .filter_map(|ch| {
            let code = ch as u32;
            if (SYLLABLE_FIRST..=SYLLABLE_LAST).contains(&code) {
                let index = (code - SYLLABLE_FIRST) / SYLLABLES_PER_INITIAL;
                Some(CHOSEONG[index as usize])
            } else if is_consonant_jamo(ch) {
                Some(ch)
            } else {
                None
            }
        })
        .collect()
}

/// A non-empty query made only of consonant jamo.
pub fn is_choseong_query(query: &str) -> bool {
    !query.is_empty() && query.chars().all(is_consonant_jamo)
}

/// Whether `field` contains `query`, compared consonant by consonant.
pub fn choseong_contains(field: &str, query: &str) -> bool {
    let initials = to_choseong(field);
    !initials.is_empty() && initials.contains(query)
}
