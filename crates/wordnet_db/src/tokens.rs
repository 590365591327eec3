// Курсор по токенам строки базы. Ошибки здесь просто причина (String),
// в DbError их заворачивает конкретный парсер вместе с сырой строкой.

pub(crate) struct Tokens<'a> {
    it: std::str::Split<'a, char>,
}

impl<'a> Tokens<'a> {
    /// Разделитель: одиночный пробел; хвостовые пробелы строк WordNet дают пустые токены, их пропускаем.
    pub(crate) fn new(s: &'a str) -> Self {
        Self {
            it: s.split(' '),
        }
    }

    pub(crate) fn next(&mut self, what: &str) -> Result<&'a str, String> {
        self.try_next().ok_or_else(|| format!("missing {what}"))
    }

    pub(crate) fn dec(&mut self, what: &str) -> Result<u64, String> {
        let t = self.next(what)?;
        parse_radix(t, 10).ok_or_else(|| format!("{what} is not decimal: {t:?}"))
    }

    pub(crate) fn hex(&mut self, what: &str) -> Result<u64, String> {
        let t = self.next(what)?;
        parse_radix(t, 16).ok_or_else(|| format!("{what} is not hexadecimal: {t:?}"))
    }

    /// Следующий непустой токен, если он есть.
    pub(crate) fn try_next(&mut self) -> Option<&'a str> {
        self.it.by_ref().find(|t| !t.is_empty())
    }

    pub(crate) fn remaining(self) -> usize {
        self.it.filter(|t| !t.is_empty()).count()
    }
}

/// from_str_radix пропускает ведущий '+', поэтому сначала проверяем цифры сами.
pub(crate) fn parse_radix(t: &str, radix: u32) -> Option<u64> {
    if t.is_empty() || !t.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    u64::from_str_radix(t, radix).ok()
}
