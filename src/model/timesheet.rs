use crate::model::day_record::DayRecord;
use crate::model::employee::Employee;

/// Field-wise minute sums over a month's day records, plus the count of
/// absenteeism days. Always reproducible by re-folding the same days.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MonthTotals {
    pub trabalhado: i64,
    pub extra_50: i64,
    pub extra_100: i64,
    pub banco_credito: i64,
    pub banco_debito: i64,
    pub absenteismo_dias: u32,
}

/// The assembled espelho de ponto for one (employee, month, year).
/// Immutable snapshot; a new one is built per query. Durations here are
/// raw minutes; the `"HH:mm"` text form is applied only by the API
/// layer when the document crosses the service boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timesheet {
    pub mes: u32,
    pub ano: i32,
    pub pessoal: Employee,
    pub dias: Vec<DayRecord>,
    pub totais: MonthTotals,
}
