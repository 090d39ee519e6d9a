//! Month-level rollup of day records.

use crate::model::day_record::DayRecord;
use crate::model::timesheet::MonthTotals;

/// Pure fold of a month's days into totals. Months with gaps sum what
/// is present; supplying a complete day set when completeness matters
/// is the caller's responsibility.
pub fn aggregate_month(dias: &[DayRecord]) -> MonthTotals {
    dias.iter().fold(MonthTotals::default(), |mut totais, dia| {
        totais.trabalhado += dia.buckets.trabalhado;
        totais.extra_50 += dia.buckets.extra_50;
        totais.extra_100 += dia.buckets.extra_100;
        totais.banco_credito += dia.buckets.banco_credito;
        totais.banco_debito += dia.buckets.banco_debito;
        if dia.buckets.absenteismo {
            totais.absenteismo_dias += 1;
        }
        totais
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::day_record::DayBuckets;
    use chrono::NaiveDate;

    fn day(dia: u32, buckets: DayBuckets) -> DayRecord {
        DayRecord::new(
            NaiveDate::from_ymd_opt(2026, 7, dia).unwrap(),
            vec![],
            buckets,
        )
    }

    fn sample_month() -> Vec<DayRecord> {
        vec![
            day(
                1,
                DayBuckets {
                    trabalhado: 480,
                    extra_50: 60,
                    banco_credito: 60,
                    ..DayBuckets::default()
                },
            ),
            day(
                2,
                DayBuckets {
                    trabalhado: 420,
                    banco_debito: 60,
                    ..DayBuckets::default()
                },
            ),
            day(
                3,
                DayBuckets {
                    absenteismo: true,
                    ..DayBuckets::default()
                },
            ),
            day(
                6,
                DayBuckets {
                    trabalhado: 480,
                    extra_50: 120,
                    extra_100: 30,
                    banco_credito: 150,
                    ..DayBuckets::default()
                },
            ),
        ]
    }

    #[test]
    fn sums_every_bucket_and_counts_absences() {
        let totais = aggregate_month(&sample_month());
        assert_eq!(totais.trabalhado, 480 + 420 + 480);
        assert_eq!(totais.extra_50, 180);
        assert_eq!(totais.extra_100, 30);
        assert_eq!(totais.banco_credito, 210);
        assert_eq!(totais.banco_debito, 60);
        assert_eq!(totais.absenteismo_dias, 1);
    }

    #[test]
    fn refolding_reproduces_the_totals() {
        let dias = sample_month();
        assert_eq!(aggregate_month(&dias), aggregate_month(&dias));
    }

    #[test]
    fn empty_month_is_all_zero() {
        assert_eq!(aggregate_month(&[]), MonthTotals::default());
    }
}
