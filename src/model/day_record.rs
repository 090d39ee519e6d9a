use chrono::{Datelike, NaiveDate, Weekday};

use crate::model::punch::Punch;

/// Classified duration buckets for one day, all in whole minutes and
/// never negative. Exactly one of `banco_credito`/`banco_debito` may be
/// non-zero, and `trabalhado + extra_50 + extra_100` equals the raw
/// worked minutes derived from the punches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DayBuckets {
    pub trabalhado: i64,
    pub extra_50: i64,
    pub extra_100: i64,
    pub banco_credito: i64,
    pub banco_debito: i64,
    pub absenteismo: bool,
}

/// One calendar day of one employee's ledger. Built once by the punch
/// sequencer, buckets filled by the classifier, immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayRecord {
    pub dia: u32,
    pub data: NaiveDate,
    pub dia_da_semana: &'static str,
    pub punches: Vec<Punch>,
    pub buckets: DayBuckets,
}

impl DayRecord {
    pub fn new(data: NaiveDate, punches: Vec<Punch>, buckets: DayBuckets) -> Self {
        Self {
            dia: data.day(),
            data,
            dia_da_semana: weekday_label(data.weekday()),
            punches,
            buckets,
        }
    }
}

/// Saturday and Sunday carry no standard shift.
pub fn is_rest_day(weekday: Weekday) -> bool {
    matches!(weekday, Weekday::Sat | Weekday::Sun)
}

pub fn weekday_label(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "segunda-feira",
        Weekday::Tue => "terça-feira",
        Weekday::Wed => "quarta-feira",
        Weekday::Thu => "quinta-feira",
        Weekday::Fri => "sexta-feira",
        Weekday::Sat => "sábado",
        Weekday::Sun => "domingo",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_day_number_and_weekday_label() {
        let data = NaiveDate::from_ymd_opt(2026, 7, 15).unwrap();
        let record = DayRecord::new(data, vec![], DayBuckets::default());
        assert_eq!(record.dia, 15);
        assert_eq!(record.dia_da_semana, "quarta-feira");
    }

    #[test]
    fn weekend_is_rest() {
        assert!(is_rest_day(Weekday::Sat));
        assert!(is_rest_day(Weekday::Sun));
        assert!(!is_rest_day(Weekday::Mon));
    }
}
