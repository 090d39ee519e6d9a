use crate::api::timesheet::{
    BancoDeHorasResponse, DayRecordResponse, ExtrasResponse, MonthTotalsResponse,
    PendenciaResponse, PunchDayRequest, TimesheetRequest, TimesheetResponse,
};
use crate::model::employee::Employee;
use crate::model::punch::{Punch, PunchDirection};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::timesheet::build_timesheet
    ),
    components(
        schemas(
            TimesheetRequest,
            PunchDayRequest,
            TimesheetResponse,
            DayRecordResponse,
            ExtrasResponse,
            BancoDeHorasResponse,
            MonthTotalsResponse,
            PendenciaResponse,
            Employee,
            Punch,
            PunchDirection
        )
    ),
    tags(
        (name = "Ponto", description = "Attendance ledger APIs"),
    )
)]
pub struct ApiDoc;
