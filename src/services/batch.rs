use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

use crate::error::BatchError;
use crate::services::seat_parser::parse_seat;

/// Итоги пакетного разбора
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub total: usize,
    pub parsed: usize,
    pub rejected: usize,
}

/// Разбирает метки построчно и пишет каждую запись отдельной JSON-строкой.
///
/// Пустые строки пропускаются и id не получают. Нераспознанные метки
/// логируются и в выход не попадают.
pub fn parse_lines<R, W>(reader: R, mut writer: W, start_id: i64) -> Result<BatchSummary, BatchError>
where
    R: BufRead,
    W: Write,
{
    let mut summary = BatchSummary::default();
    // None - id закончились, следующая непустая строка даст ошибку
    let mut next_id = Some(start_id);

    for line in reader.lines() {
        let line = line?;
        let label = line.trim_end_matches('\r');
        if label.trim().is_empty() {
            continue;
        }

        let id = next_id.ok_or(BatchError::IdOverflow)?;
        next_id = id.checked_add(1);

        summary.total += 1;
        match parse_seat(Some(label), id) {
            Some(record) => {
                serde_json::to_writer(&mut writer, &record)?;
                writer.write_all(b"\n")?;
                summary.parsed += 1;
                debug!(id, full_sector = record.full_sector(), "Seat parsed");
            }
            None => {
                summary.rejected += 1;
                warn!(id, label, "Seat label rejected");
            }
        }
    }

    writer.flush()?;
    info!(
        total = summary.total,
        parsed = summary.parsed,
        rejected = summary.rejected,
        "Batch done"
    );

    Ok(summary)
}
