/// Ключ леммы как в index-файлах: trim, lowercase, пробельные серии → `_`.
pub fn normalize_lemma(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for (i, part) in s.split_whitespace().enumerate() {
        if i > 0 {
            out.push('_');
        }
        out.extend(part.chars().flat_map(char::to_lowercase));
    }
    out
}

/// Обратно для выдачи: `_` → пробел.
pub fn display_lemma(key: &str) -> String {
    key.replace('_', " ")
}
