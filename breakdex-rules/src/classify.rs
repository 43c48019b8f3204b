//! Character classes used to tag breaks

use breakdex_core::RuleTag;

/// Hiragana, katakana and their extensions
pub(crate) fn is_kana(ch: char) -> bool {
    matches!(ch,
        '\u{3040}'..='\u{309F}'
        | '\u{30A0}'..='\u{30FF}'
        | '\u{31F0}'..='\u{31FF}'
        | '\u{FF66}'..='\u{FF9F}'
        | '\u{1B000}'..='\u{1B16F}')
}

/// CJK ideographs, including iteration and closing marks
pub(crate) fn is_ideographic(ch: char) -> bool {
    matches!(ch,
        '\u{3005}'..='\u{3007}'
        | '\u{3021}'..='\u{3029}'
        | '\u{3400}'..='\u{4DBF}'
        | '\u{4E00}'..='\u{9FFF}'
        | '\u{F900}'..='\u{FAFF}'
        | '\u{20000}'..='\u{2FA1F}'
        | '\u{30000}'..='\u{3134F}')
}

/// Sentence terminators (STerm plus the full stop)
pub(crate) fn is_sentence_terminator(ch: char) -> bool {
    matches!(
        ch,
        '.' | '!' | '?' | '。' | '｡' | '！' | '？' | '‼' | '⁇' | '⁈' | '⁉' | '؟' | '।' | '॥'
    )
}

/// Closing punctuation allowed between a terminator and the break
pub(crate) fn is_closing(ch: char) -> bool {
    matches!(
        ch,
        '"' | '\'' | ')' | ']' | '}' | '»' | '’' | '”' | '」' | '』' | '）' | '】' | '〕' | '〉' | '》'
    )
}

/// Opening punctuation that may precede an abbreviation
pub(crate) fn is_opening(ch: char) -> bool {
    matches!(
        ch,
        '"' | '\'' | '(' | '[' | '{' | '«' | '‘' | '“' | '「' | '『' | '（' | '【'
    )
}

/// Hard separators (UAX #29 `Sep`, UAX #14 mandatory breaks)
pub(crate) fn is_hard_separator(ch: char) -> bool {
    matches!(
        ch,
        '\n' | '\r' | '\u{0B}' | '\u{0C}' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Tag of one UAX #29 word segment
///
/// Ideographs win over kana, kana over letters, letters over digits, so a
/// mixed run is tagged by its most specific content.
pub(crate) fn word_tag(segment: &str) -> RuleTag {
    let mut kana = false;
    let mut letter = false;
    let mut number = false;
    for ch in segment.chars() {
        if is_ideographic(ch) {
            return RuleTag::WORD_IDEO;
        }
        if is_kana(ch) {
            kana = true;
        } else if ch.is_alphabetic() {
            letter = true;
        } else if ch.is_numeric() {
            number = true;
        }
    }
    if kana {
        RuleTag::WORD_KANA
    } else if letter {
        RuleTag::WORD_LETTER
    } else if number {
        RuleTag::WORD_NUMBER
    } else {
        RuleTag::WORD_NONE
    }
}

/// Tag of one sentence, from the text that ends it
pub(crate) fn sentence_tag(sentence: &str) -> RuleTag {
    let body = sentence.trim_end_matches(|c: char| c.is_whitespace() || is_closing(c));
    match body.chars().next_back() {
        Some(ch) if is_sentence_terminator(ch) => RuleTag::SENTENCE_TERM,
        _ => RuleTag::SENTENCE_SEP,
    }
}
