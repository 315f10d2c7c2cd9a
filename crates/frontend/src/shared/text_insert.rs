//! Вставка токена в текст по позиции курсора.
//!
//! Общая операция редактора шаблонов: воткнуть плейсхолдер показателя или
//! целиком отрендеренное измерение в свободный текст. Чистая функция,
//! позиции — в символах (char), не в байтах.

/// Вставить `token` в `text` на позиции `cursor` (в символах).
///
/// Возвращает новый текст и позицию курсора сразу после вставленного токена.
/// `None` или позиция за концом текста означают "добавить в конец".
pub fn insert_at_cursor(text: &str, cursor: Option<usize>, token: &str) -> (String, usize) {
    let char_count = text.chars().count();
    let pos = cursor.unwrap_or(char_count).min(char_count);

    let byte_pos = text
        .char_indices()
        .nth(pos)
        .map(|(i, _)| i)
        .unwrap_or(text.len());

    let mut result = String::with_capacity(text.len() + token.len());
    result.push_str(&text[..byte_pos]);
    result.push_str(token);
    result.push_str(&text[byte_pos..]);

    (result, pos + token.chars().count())
}

/// Перевести смещение UTF-16 (то, что отдаёт `selection_start` textarea)
/// в позицию в символах. За суррогатной парой смещение растёт на 2,
/// символ же один; выход за конец текста даёт длину в символах.
pub fn utf16_to_char_index(text: &str, utf16_offset: usize) -> usize {
    let mut units = 0;
    for (chars, c) in text.chars().enumerate() {
        if units >= utf16_offset {
            return chars;
        }
        units += c.len_utf16();
    }
    text.chars().count()
}

/// Обратное преобразование: позиция в символах → смещение UTF-16
/// (для `set_selection_range`).
pub fn char_index_to_utf16(text: &str, char_index: usize) -> usize {
    text.chars().take(char_index).map(char::len_utf16).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_in_middle() {
        let (text, cursor) = insert_at_cursor("abcd", Some(2), "XY");
        assert_eq!(text, "abXYcd");
        assert_eq!(cursor, 4);
    }

    #[test]
    fn test_insert_at_start() {
        let (text, cursor) = insert_at_cursor("abc", Some(0), "Z");
        assert_eq!(text, "Zabc");
        assert_eq!(cursor, 1);
    }

    #[test]
    fn test_insert_at_end_equals_append() {
        let (text, cursor) = insert_at_cursor("abc", Some(3), "!");
        assert_eq!(text, "abc!");
        assert_eq!(cursor, 4);
    }

    #[test]
    fn test_unknown_cursor_appends() {
        let (text, cursor) = insert_at_cursor("abc", None, "...");
        assert_eq!(text, "abc...");
        assert_eq!(cursor, 6);
    }

    #[test]
    fn test_out_of_range_cursor_appends() {
        let (text, cursor) = insert_at_cursor("ab", Some(99), "c");
        assert_eq!(text, "abc");
        assert_eq!(cursor, 3);
    }

    #[test]
    fn test_cyrillic_positions_are_chars_not_bytes() {
        let (text, cursor) = insert_at_cursor("заявки", Some(2), "{{metric:Всего}}");
        assert_eq!(text, "за{{metric:Всего}}явки");
        assert_eq!(cursor, 2 + "{{metric:Всего}}".chars().count());
    }

    #[test]
    fn test_utf16_offsets_count_surrogate_pairs_as_one_char() {
        // "a😀b": эмодзи — два UTF-16 юнита, но один символ
        let text = "a😀b";
        assert_eq!(utf16_to_char_index(text, 0), 0);
        assert_eq!(utf16_to_char_index(text, 1), 1);
        assert_eq!(utf16_to_char_index(text, 3), 2);
        assert_eq!(utf16_to_char_index(text, 4), 3);
        assert_eq!(utf16_to_char_index(text, 99), 3);
    }

    #[test]
    fn test_char_index_round_trips_through_utf16() {
        let text = "до 😀 после";
        for i in 0..=text.chars().count() {
            assert_eq!(utf16_to_char_index(text, char_index_to_utf16(text, i)), i);
        }
    }

    #[test]
    fn test_insert_after_emoji_lands_on_char_boundary() {
        // Курсор сразу после эмодзи: браузер вернёт смещение 2
        let text = "😀x";
        let pos = utf16_to_char_index(text, 2);
        let (result, cursor) = insert_at_cursor(text, Some(pos), "!");
        assert_eq!(result, "😀!x");
        assert_eq!(cursor, 2);
    }

    #[test]
    fn test_splice_identity() {
        // result == text[:p] + token + text[p:]
        let text = "итого  за период";
        let token = "{{metric:Всего заявок}}";
        let p = 6;
        let (result, _) = insert_at_cursor(text, Some(p), token);
        let prefix: String = text.chars().take(p).collect();
        let suffix: String = text.chars().skip(p).collect();
        assert_eq!(result, format!("{}{}{}", prefix, token, suffix));
    }
}
