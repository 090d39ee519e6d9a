//! Binds employee identity, day records and totals into a Timesheet.

use chrono::{Datelike, NaiveDate};

use crate::engine::aggregator::aggregate_month;
use crate::engine::classifier::{EngineConfig, classify_day};
use crate::engine::error::EngineError;
use crate::engine::sequencer::sequence_day;
use crate::model::day_record::{DayBuckets, DayRecord, is_rest_day};
use crate::model::employee::Employee;
use crate::model::punch::Punch;
use crate::model::timesheet::Timesheet;

/// One day's raw input as supplied by the punch feed, already grouped
/// by (employee, date) and ordered by time of day.
#[derive(Debug, Clone)]
pub struct PunchDay {
    pub matricula: String,
    pub data: NaiveDate,
    pub punches: Vec<Punch>,
}

/// What to do with a day whose punch sequence fails validation.
///
/// Under `Strict` the first malformed day fails the whole month. Under
/// `Lenient` the day is kept with its punches preserved and its buckets
/// zeroed, and reported back so an operator can correct the feed. An
/// `EmployeeMismatch` is fatal under either policy: data merged in for
/// the wrong person cannot be flagged away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssemblyPolicy {
    Strict,
    Lenient,
}

/// A day excluded from classification under the lenient policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedDay {
    pub data: NaiveDate,
    pub error: EngineError,
}

/// Assembler output: the timesheet plus, under the lenient policy, the
/// days whose buckets were omitted.
#[derive(Debug, Clone)]
pub struct Assembly {
    pub timesheet: Timesheet,
    pub pendencias: Vec<RejectedDay>,
}

/// Runs the full pipeline for one employee-month: sequence each day,
/// classify it, fold the totals, bind the result to the employee.
/// Days may arrive with gaps and in any order; the output is sorted by
/// day number.
pub fn build_timesheet(
    pessoal: &Employee,
    mes: u32,
    ano: i32,
    dias: Vec<PunchDay>,
    cfg: &EngineConfig,
    policy: AssemblyPolicy,
) -> Result<Assembly, EngineError> {
    let mut records = Vec::with_capacity(dias.len());
    let mut pendencias = Vec::new();

    for day in dias {
        if day.matricula != pessoal.matricula {
            return Err(EngineError::EmployeeMismatch {
                data: day.data,
                expected: pessoal.matricula.clone(),
                found: day.matricula,
            });
        }

        let is_workday = !is_rest_day(day.data.weekday());
        match sequence_day(day.data, &day.punches) {
            Ok(seq) => {
                let buckets =
                    classify_day(seq.worked_minutes, day.punches.len(), is_workday, cfg);
                records.push(DayRecord::new(day.data, day.punches, buckets));
            }
            Err(error) if policy == AssemblyPolicy::Lenient => {
                pendencias.push(RejectedDay {
                    data: day.data,
                    error,
                });
                records.push(DayRecord::new(day.data, day.punches, DayBuckets::default()));
            }
            Err(error) => return Err(error),
        }
    }

    records.sort_by_key(|r| r.dia);
    let totais = aggregate_month(&records);

    Ok(Assembly {
        timesheet: Timesheet {
            mes,
            ano,
            pessoal: pessoal.clone(),
            dias: records,
            totais,
        },
        pendencias,
    })
}
