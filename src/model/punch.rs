use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use utoipa::ToSchema;

/// Clock event direction as tagged by the punch-clock feed.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum PunchDirection {
    Entrada,
    Saida,
}

/// A single clock event. `fonte` records provenance (device vs. manual
/// entry) and is carried for display only, never used in computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({"hora": "08:00", "tipo": "ENTRADA", "fonte": "REP"}))]
pub struct Punch {
    #[serde(with = "hora_hhmm")]
    #[schema(example = "08:00", value_type = String)]
    pub hora: NaiveTime,

    pub tipo: PunchDirection,

    #[schema(example = "REP")]
    pub fonte: String,
}

/// The punch feed timestamps with `"HH:mm"` (no seconds), which is not
/// chrono's default `NaiveTime` representation.
pub mod hora_hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S: Serializer>(hora: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&hora.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let text = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&text, FORMAT).map_err(serde::de::Error::custom)
    }
}
