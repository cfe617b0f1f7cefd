use serde::Serialize;

/// Общее слово-маркер сектора. В `full_sector` не дублируется.
pub const SECTOR_WORD: &str = "сектор";

/// Разобранное место: сырые токены из метки плюс готовые для показа строки.
///
/// Поля закрыты и заполняются один раз в `new`, после этого запись неизменна.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatRecord {
    id: i64,
    sector: String,
    sector_name: String,
    row: String,
    row_name: String,
    seat: String,
    seat_name: String,
    full_sector: String,
    full_row: String,
    full_seat: String,
}

impl SeatRecord {
    pub fn new(
        id: i64,
        sector: impl Into<String>,
        sector_name: impl Into<String>,
        row: impl Into<String>,
        row_name: impl Into<String>,
        seat: impl Into<String>,
        seat_name: impl Into<String>,
    ) -> Self {
        let sector = sector.into();
        let sector_name = sector_name.into();
        let row = row.into();
        let row_name = row_name.into();
        let seat = seat.into();
        let seat_name = seat_name.into();

        // Производные строки считаем сразу, никакой ленивой инициализации
        let full_sector = full_sector(Some(&sector), Some(&sector_name));
        let full_row = full_row(Some(&row), Some(&row_name));
        let full_seat = full_seat(Some(&seat), Some(&seat_name));

        Self {
            id,
            sector,
            sector_name,
            row,
            row_name,
            seat,
            seat_name,
            full_sector,
            full_row,
            full_seat,
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn sector(&self) -> &str {
        &self.sector
    }

    pub fn sector_name(&self) -> &str {
        &self.sector_name
    }

    pub fn row(&self) -> &str {
        &self.row
    }

    pub fn row_name(&self) -> &str {
        &self.row_name
    }

    pub fn seat(&self) -> &str {
        &self.seat
    }

    pub fn seat_name(&self) -> &str {
        &self.seat_name
    }

    pub fn full_sector(&self) -> &str {
        &self.full_sector
    }

    pub fn full_row(&self) -> &str {
        &self.full_row
    }

    pub fn full_seat(&self) -> &str {
        &self.full_seat
    }
}

/// Полное название сектора.
///
/// Пустое или отсутствующее имя даёт сам `sector`. Если `sector` это просто
/// слово "сектор" (в любом регистре), возвращается только имя.
pub fn full_sector(sector: Option<&str>, sector_name: Option<&str>) -> String {
    let sector = sector.unwrap_or_default();
    match sector_name {
        Some(name) if !name.is_empty() => {
            if is_sector_word(sector) {
                name.to_string()
            } else {
                format!("{} {}", sector, name)
            }
        }
        _ => sector.to_string(),
    }
}

// Посимвольное сравнение без учёта регистра, без аллокации
fn is_sector_word(sector: &str) -> bool {
    sector
        .chars()
        .flat_map(char::to_lowercase)
        .eq(SECTOR_WORD.chars())
}

pub fn full_row(row: Option<&str>, row_name: Option<&str>) -> String {
    join_marker(row, row_name)
}

pub fn full_seat(seat: Option<&str>, seat_name: Option<&str>) -> String {
    join_marker(seat, seat_name)
}

// "Ряд" + "5" -> "Ряд 5"; без маркера или имени пустая строка
fn join_marker(marker: Option<&str>, name: Option<&str>) -> String {
    match (marker, name) {
        (Some(marker), Some(name)) => format!("{} {}", marker, name),
        _ => String::new(),
    }
}
