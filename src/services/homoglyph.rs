use std::borrow::Cow;

// Заглавные кириллические буквы, которые выглядят как латинские
const CYRILLIC_TO_LATIN: [(char, char); 12] = [
    ('С', 'C'),
    ('Е', 'E'),
    ('Т', 'T'),
    ('Н', 'H'),
    ('У', 'Y'),
    ('О', 'O'),
    ('Р', 'P'),
    ('Х', 'X'),
    ('А', 'A'),
    ('В', 'B'),
    ('К', 'K'),
    ('М', 'M'),
];

fn latin_twin(c: char) -> Option<char> {
    // На 12 элементах линейный поиск быстрее хеш-таблицы
    CYRILLIC_TO_LATIN
        .iter()
        .find(|(cyrillic, _)| *cyrillic == c)
        .map(|(_, latin)| *latin)
}

/// Заменяет кириллические двойники латинских букв на латиницу.
///
/// Один проход по строке. Если заменять нечего, возвращается исходная
/// строка без копирования.
pub fn fold_homoglyphs(input: &str) -> Cow<'_, str> {
    if input.is_empty() {
        return Cow::Borrowed(input);
    }

    let Some((first, _)) = input
        .char_indices()
        .find(|(_, c)| latin_twin(*c).is_some())
    else {
        return Cow::Borrowed(input);
    };

    let mut folded = String::with_capacity(input.len());
    folded.push_str(&input[..first]);
    folded.extend(input[first..].chars().map(|c| latin_twin(c).unwrap_or(c)));

    Cow::Owned(folded)
}
