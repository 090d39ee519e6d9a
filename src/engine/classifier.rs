//! Splits a day's raw worked minutes into the ledger buckets.

use crate::model::day_record::DayBuckets;

/// Ledger policy knobs, loaded from the environment at startup.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Length of the standard workday shift, in minutes.
    pub standard_shift_minutes: i64,
    /// First N minutes of daily excess paid at the 50% tier; the
    /// remainder falls into the 100% tier.
    pub overtime_tier50_cap_minutes: i64,
    /// Share of daily excess credited to the time bank, in [0, 1].
    /// Whatever the fraction leaves out stays overtime-only.
    pub time_bank_credit_fraction: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            standard_shift_minutes: 480,
            overtime_tier50_cap_minutes: 120,
            time_bank_credit_fraction: 1.0,
        }
    }
}

/// Classifies one day. Rest days carry no standard shift, so any minute
/// worked on one is excess; a punch-free rest day is simply empty,
/// while a punch-free workday is absenteeism.
pub fn classify_day(
    worked_minutes: i64,
    punch_count: usize,
    is_workday: bool,
    cfg: &EngineConfig,
) -> DayBuckets {
    if punch_count == 0 {
        return DayBuckets {
            absenteismo: is_workday,
            ..DayBuckets::default()
        };
    }

    let shift = if is_workday {
        cfg.standard_shift_minutes
    } else {
        0
    };
    let excess = worked_minutes - shift;

    if excess > 0 {
        let extra_50 = excess.min(cfg.overtime_tier50_cap_minutes);
        let extra_100 = excess - extra_50;
        let banco_credito = ((excess as f64) * cfg.time_bank_credit_fraction).round() as i64;
        DayBuckets {
            trabalhado: shift,
            extra_50,
            extra_100,
            banco_credito,
            banco_debito: 0,
            absenteismo: false,
        }
    } else if excess < 0 {
        DayBuckets {
            trabalhado: worked_minutes,
            banco_debito: -excess,
            ..DayBuckets::default()
        }
    } else {
        DayBuckets {
            trabalhado: shift,
            ..DayBuckets::default()
        }
    }
}
