use actix_web::{HttpResponse, Responder, web};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::{IntoParams, ToSchema};

use crate::config::Config;
use crate::engine::assembler::{self, Assembly, AssemblyPolicy, PunchDay};
use crate::engine::duration;
use crate::engine::error::EngineError;
use crate::model::day_record::DayRecord;
use crate::model::employee::Employee;
use crate::model::punch::Punch;
use crate::model::timesheet::MonthTotals;

#[derive(Deserialize, ToSchema)]
pub struct TimesheetRequest {
    pub pessoal: Employee,

    #[schema(example = 7)]
    pub mes: u32,

    #[schema(example = 2026)]
    pub ano: i32,

    pub dias: Vec<PunchDayRequest>,
}

#[derive(Deserialize, ToSchema)]
pub struct PunchDayRequest {
    /// Defaults to the timesheet's bound employee when omitted.
    #[serde(default)]
    #[schema(example = "001234", nullable = true)]
    pub matricula: Option<String>,

    #[schema(example = "2026-07-15", value_type = String, format = "date")]
    pub data: NaiveDate,

    pub punches: Vec<Punch>,
}

#[derive(Deserialize, IntoParams)]
pub struct TimesheetQuery {
    /// When true, malformed days are kept with zeroed buckets and
    /// reported under `pendencias` instead of failing the month.
    #[serde(default)]
    pub lenient: bool,
}

#[derive(Serialize, ToSchema)]
pub struct TimesheetResponse {
    pub mes: u32,
    pub ano: i32,
    pub pessoal: Employee,
    pub dias: Vec<DayRecordResponse>,
    pub totais: MonthTotalsResponse,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub pendencias: Vec<PendenciaResponse>,
}

#[derive(Serialize, ToSchema)]
pub struct DayRecordResponse {
    #[schema(example = 15)]
    pub dia: u32,

    #[schema(example = "2026-07-15", value_type = String, format = "date")]
    pub data: NaiveDate,

    #[schema(example = "quarta-feira")]
    pub dia_da_semana: &'static str,

    pub punches: Vec<Punch>,
    pub absenteismo: bool,

    #[schema(example = "08:00")]
    pub total_trabalhado: String,

    pub extras: ExtrasResponse,
    pub banco_de_horas: BancoDeHorasResponse,
}

#[derive(Serialize, ToSchema)]
pub struct ExtrasResponse {
    #[serde(rename = "50")]
    #[schema(example = "01:00")]
    pub extra_50: String,

    #[serde(rename = "100")]
    #[schema(example = "00:00")]
    pub extra_100: String,
}

#[derive(Serialize, ToSchema)]
pub struct BancoDeHorasResponse {
    #[schema(example = "01:00")]
    pub credito: String,

    #[schema(example = "00:00")]
    pub debito: String,
}

#[derive(Serialize, ToSchema)]
pub struct MonthTotalsResponse {
    #[schema(example = "168:00")]
    pub trabalhado: String,
    pub extra_50: String,
    pub extra_100: String,
    pub banco_de_horas_credito: String,
    pub banco_de_horas_debito: String,

    #[schema(example = 1)]
    pub absenteismo_dias: u32,
}

#[derive(Serialize, ToSchema)]
pub struct PendenciaResponse {
    #[schema(value_type = String, format = "date")]
    pub data: NaiveDate,

    #[schema(example = "open punch sequence on 2026-07-07: ENTRADA at 08:00:00 (index 0) has no matching SAIDA")]
    pub error: String,
}

impl DayRecordResponse {
    fn from_record(record: DayRecord) -> Result<Self, EngineError> {
        Ok(Self {
            dia: record.dia,
            data: record.data,
            dia_da_semana: record.dia_da_semana,
            absenteismo: record.buckets.absenteismo,
            total_trabalhado: duration::format(
                record.buckets.trabalhado + record.buckets.extra_50 + record.buckets.extra_100,
            )?,
            extras: ExtrasResponse {
                extra_50: duration::format(record.buckets.extra_50)?,
                extra_100: duration::format(record.buckets.extra_100)?,
            },
            banco_de_horas: BancoDeHorasResponse {
                credito: duration::format(record.buckets.banco_credito)?,
                debito: duration::format(record.buckets.banco_debito)?,
            },
            punches: record.punches,
        })
    }
}

impl MonthTotalsResponse {
    fn from_totals(totais: &MonthTotals) -> Result<Self, EngineError> {
        Ok(Self {
            trabalhado: duration::format(totais.trabalhado)?,
            extra_50: duration::format(totais.extra_50)?,
            extra_100: duration::format(totais.extra_100)?,
            banco_de_horas_credito: duration::format(totais.banco_credito)?,
            banco_de_horas_debito: duration::format(totais.banco_debito)?,
            absenteismo_dias: totais.absenteismo_dias,
        })
    }
}

impl TimesheetResponse {
    fn from_assembly(assembly: Assembly) -> Result<Self, EngineError> {
        let totais = MonthTotalsResponse::from_totals(&assembly.timesheet.totais)?;
        let dias = assembly
            .timesheet
            .dias
            .into_iter()
            .map(DayRecordResponse::from_record)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            mes: assembly.timesheet.mes,
            ano: assembly.timesheet.ano,
            pessoal: assembly.timesheet.pessoal,
            dias,
            totais,
            pendencias: assembly
                .pendencias
                .into_iter()
                .map(|p| PendenciaResponse {
                    data: p.data,
                    error: p.error.to_string(),
                })
                .collect(),
        })
    }
}

/// Assembles the espelho de ponto for one employee-month
#[utoipa::path(
    post,
    path = "/api/v1/ponto/espelho",
    request_body = TimesheetRequest,
    params(TimesheetQuery),
    responses(
        (status = 200, description = "Assembled timesheet", body = TimesheetResponse),
        (status = 400, description = "Undeserializable payload or month out of range"),
        (status = 422, description = "Punch batch failed validation", body = Object, example = json!({
            "error": "open punch sequence on 2026-07-07: ENTRADA at 08:00:00 (index 0) has no matching SAIDA",
            "data": "2026-07-07",
            "punch_index": 0
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Ponto"
)]
pub async fn build_timesheet(
    config: web::Data<Config>,
    query: web::Query<TimesheetQuery>,
    payload: web::Json<TimesheetRequest>,
) -> actix_web::Result<impl Responder> {
    let TimesheetRequest {
        pessoal,
        mes,
        ano,
        dias,
    } = payload.into_inner();

    if !(1..=12).contains(&mes) {
        return Ok(HttpResponse::BadRequest().json(json!({
            "error": "mes must be between 1 and 12"
        })));
    }

    let policy = if query.lenient {
        AssemblyPolicy::Lenient
    } else {
        AssemblyPolicy::Strict
    };
    let dias: Vec<PunchDay> = dias
        .into_iter()
        .map(|d| PunchDay {
            matricula: d.matricula.unwrap_or_else(|| pessoal.matricula.clone()),
            data: d.data,
            punches: d.punches,
        })
        .collect();

    match assembler::build_timesheet(&pessoal, mes, ano, dias, &config.engine, policy) {
        Ok(assembly) => {
            tracing::debug!(
                matricula = %pessoal.matricula,
                mes,
                ano,
                dias = assembly.timesheet.dias.len(),
                pendencias = assembly.pendencias.len(),
                "Timesheet assembled"
            );
            match TimesheetResponse::from_assembly(assembly) {
                Ok(body) => Ok(HttpResponse::Ok().json(body)),
                Err(e) => {
                    tracing::error!(error = %e, matricula = %pessoal.matricula, "Timesheet serialization failed");
                    Err(actix_web::error::ErrorInternalServerError(
                        "Internal Server Error",
                    ))
                }
            }
        }
        Err(e) => {
            tracing::warn!(
                error = %e,
                matricula = %pessoal.matricula,
                mes,
                ano,
                "Rejected punch batch"
            );
            Ok(HttpResponse::UnprocessableEntity().json(json!({
                "error": e.to_string(),
                "data": e.data(),
                "punch_index": e.punch_index(),
            })))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::classifier::EngineConfig;
    use actix_web::{App, test};

    fn test_config() -> Config {
        Config {
            server_addr: "127.0.0.1:0".to_string(),
            rate_timesheet_per_min: 120,
            api_prefix: "/api/v1".to_string(),
            engine: EngineConfig::default(),
        }
    }

    fn request_body() -> serde_json::Value {
        json!({
            "pessoal": {"matricula": "001234", "nome": "Maria Souza", "pis": "12034567890"},
            "mes": 7,
            "ano": 2026,
            "dias": [
                {
                    "data": "2026-07-15",
                    "punches": [
                        {"hora": "08:00", "tipo": "ENTRADA", "fonte": "REP"},
                        {"hora": "12:00", "tipo": "SAIDA", "fonte": "REP"},
                        {"hora": "13:00", "tipo": "ENTRADA", "fonte": "REP"},
                        {"hora": "18:00", "tipo": "SAIDA", "fonte": "REP"}
                    ]
                },
                {"data": "2026-07-16", "punches": []}
            ]
        })
    }

    async fn call(
        body: serde_json::Value,
        uri: &str,
    ) -> (actix_web::http::StatusCode, serde_json::Value) {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_config()))
                .service(web::resource("/api/v1/ponto/espelho").route(web::post().to(build_timesheet))),
        )
        .await;
        let req = test::TestRequest::post()
            .uri(uri)
            .set_json(&body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        let value = test::read_body_json(resp).await;
        (status, value)
    }

    #[actix_web::test]
    async fn espelho_serializes_every_duration_as_hhmm() {
        let (status, body) = call(request_body(), "/api/v1/ponto/espelho").await;
        assert!(status.is_success());

        let dia = &body["dias"][0];
        assert_eq!(dia["dia"], 15);
        assert_eq!(dia["dia_da_semana"], "quarta-feira");
        assert_eq!(dia["total_trabalhado"], "09:00");
        // default config: 480 shift, 120-minute tier-50 cap, full credit
        assert_eq!(dia["extras"]["50"], "01:00");
        assert_eq!(dia["extras"]["100"], "00:00");
        assert_eq!(dia["banco_de_horas"]["credito"], "01:00");
        assert_eq!(dia["banco_de_horas"]["debito"], "00:00");
        assert_eq!(dia["absenteismo"], false);

        // 2026-07-16 is a Thursday with no punches
        assert_eq!(body["dias"][1]["absenteismo"], true);

        assert_eq!(body["totais"]["trabalhado"], "08:00");
        assert_eq!(body["totais"]["extra_50"], "01:00");
        assert_eq!(body["totais"]["banco_de_horas_credito"], "01:00");
        assert_eq!(body["totais"]["absenteismo_dias"], 1);
        assert!(body.get("pendencias").is_none());
    }

    #[actix_web::test]
    async fn malformed_batch_is_rejected_with_context() {
        let mut body = request_body();
        body["dias"][0]["punches"] = json!([
            {"hora": "08:00", "tipo": "ENTRADA", "fonte": "REP"}
        ]);
        let (status, resp) = call(body, "/api/v1/ponto/espelho").await;
        assert_eq!(status, actix_web::http::StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(resp["data"], "2026-07-15");
        assert_eq!(resp["punch_index"], 0);
        assert!(resp["error"].as_str().unwrap().contains("open punch sequence"));
    }

    #[actix_web::test]
    async fn lenient_mode_reports_pendencias_instead_of_failing() {
        let mut body = request_body();
        body["dias"][0]["punches"] = json!([
            {"hora": "08:00", "tipo": "ENTRADA", "fonte": "REP"}
        ]);
        let (status, resp) = call(body, "/api/v1/ponto/espelho?lenient=true").await;
        assert!(status.is_success());
        assert_eq!(resp["pendencias"][0]["data"], "2026-07-15");
        assert_eq!(resp["dias"][0]["total_trabalhado"], "00:00");
        assert_eq!(resp["dias"][0]["punches"].as_array().unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn month_out_of_range_is_a_bad_request() {
        let mut body = request_body();
        body["mes"] = json!(13);
        let (status, _) = call(body, "/api/v1/ponto/espelho").await;
        assert_eq!(status, actix_web::http::StatusCode::BAD_REQUEST);
    }
}
