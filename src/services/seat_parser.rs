use regex::{Captures, Regex};
use std::sync::LazyLock;
use tracing::trace;

use crate::models::SeatRecord;
use crate::services::homoglyph::fold_homoglyphs;

pub const ROW_MARKER: &str = "Ряд";
pub const SEAT_MARKER: &str = "Место";

// Любой символ, кроме переводов строки (\n, \r, NEL, LS, PS).
// Обычная `.` в regex останавливается только на \n.
macro_rules! any_char {
    () => {
        r"[^\n\r\x{85}\x{2028}\x{2029}]"
    };
}

// Только ASCII-пробелы: неразрывный пробел разделителем не считается
macro_rules! space {
    () => {
        r"[ \t\n\x0B\f\r]+"
    };
}

// Компилируем один раз на процесс, дальше только чтение.
// Имя сектора обязано начинаться с заглавной буквы или цифры, иначе
// весь префикс считается кодом сектора (ветка sectorOnly).
static SEAT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?:(?P<sector>", any_char!(), r"*?)", space!(),
        r"(?P<sectorName>(?:\p{Lu}|[0-9])", any_char!(), r"*?)",
        r"|(?P<sectorOnly>", any_char!(), r"*))",
        space!(), r"(?P<row>Ряд)", space!(), r"(?P<rowName>", any_char!(), r"*?)",
        space!(), r"(?P<seat>Место)", space!(), r"(?P<seatName>", any_char!(), r"*)",
    ))
    .expect("seat label pattern must compile")
});

/// Разбирает метку места вида `"<сектор> [<имя сектора>] Ряд <ряд> Место <место>"`.
///
/// Пустая, пробельная или не подходящая под шаблон метка даёт `None`.
/// Это ожидаемый исход, а не ошибка.
pub fn parse_seat(label: Option<&str>, id: i64) -> Option<SeatRecord> {
    let label = label.filter(|l| !l.trim().is_empty())?;

    let Some(captures) = SEAT_PATTERN.captures(label) else {
        trace!(id, label, "Seat label does not match pattern");
        return None;
    };

    extract_seat(&captures, id)
}

fn extract_seat(captures: &Captures<'_>, id: i64) -> Option<SeatRecord> {
    let group = |name: &str| captures.name(name).map(|m| m.as_str());

    let sector = group("sectorOnly").or_else(|| group("sector"));
    let sector_name = group("sectorName").map(fold_homoglyphs).unwrap_or_default();

    // Любая недостающая группа отменяет весь разбор
    let (Some(sector), Some(row), Some(row_name), Some(seat), Some(seat_name)) = (
        sector,
        group("row"),
        group("rowName"),
        group("seat"),
        group("seatName"),
    ) else {
        trace!(id, "Seat label matched without required groups");
        return None;
    };

    Some(SeatRecord::new(
        id,
        sector,
        sector_name,
        row,
        row_name,
        seat,
        seat_name,
    ))
}
