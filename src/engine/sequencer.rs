//! Pairs a day's punches into worked intervals.
//!
//! Punches must arrive already ordered by time of day; the sequencer
//! reports ordering bugs instead of sorting, so upstream data-quality
//! problems surface. The one sanctioned exception is a shift crossing
//! midnight: a SAIDA earlier on the clock than its ENTRADA closes the
//! interval on the next day, and the punch after such a pair is also
//! exempt from the ordering check.

use chrono::{NaiveDate, NaiveTime, Timelike};

use crate::engine::error::EngineError;
use crate::model::punch::{Punch, PunchDirection};

const MINUTES_PER_DAY: i64 = 24 * 60;

/// One validated ENTRADA→SAIDA interval. Kept for audit and display;
/// classification only consumes the day total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkInterval {
    pub entrada: NaiveTime,
    pub saida: NaiveTime,
    pub minutos: i64,
}

/// Sequencer output for one (employee, date).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySequence {
    pub intervals: Vec<WorkInterval>,
    pub worked_minutes: i64,
}

fn minute_of_day(hora: NaiveTime) -> i64 {
    (hora.hour() * 60 + hora.minute()) as i64
}

/// Pairs consecutive punches into ENTRADA→SAIDA intervals and sums the
/// day's worked minutes. Zero punches yield an empty sequence; the
/// classifier decides whether that constitutes an absence.
pub fn sequence_day(data: NaiveDate, punches: &[Punch]) -> Result<DaySequence, EngineError> {
    let mut intervals = Vec::with_capacity(punches.len() / 2);
    let mut prev_wrapped = false;

    let mut idx = 0;
    while idx < punches.len() {
        let entrada = &punches[idx];
        if entrada.tipo != PunchDirection::Entrada {
            return Err(EngineError::PunchDirectionViolation { data, index: idx });
        }
        if idx > 0 && !prev_wrapped && entrada.hora < punches[idx - 1].hora {
            return Err(EngineError::UnsortedPunches { data, index: idx });
        }

        let Some(saida) = punches.get(idx + 1) else {
            // dangling ENTRADA is reported for manual correction, never dropped
            return Err(EngineError::OpenPunchSequence {
                data,
                index: idx,
                hora: entrada.hora,
            });
        };
        if saida.tipo != PunchDirection::Saida {
            return Err(EngineError::PunchDirectionViolation {
                data,
                index: idx + 1,
            });
        }

        // SAIDA before ENTRADA means the shift crossed midnight
        let wrapped = saida.hora < entrada.hora;
        let minutos = if wrapped {
            MINUTES_PER_DAY - minute_of_day(entrada.hora) + minute_of_day(saida.hora)
        } else {
            minute_of_day(saida.hora) - minute_of_day(entrada.hora)
        };
        intervals.push(WorkInterval {
            entrada: entrada.hora,
            saida: saida.hora,
            minutos,
        });

        prev_wrapped = wrapped;
        idx += 2;
    }

    let worked_minutes = intervals.iter().map(|i| i.minutos).sum();
    Ok(DaySequence {
        intervals,
        worked_minutes,
    })
}
