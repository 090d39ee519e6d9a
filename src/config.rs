use std::env;

use dotenvy::dotenv;

use crate::engine::classifier::EngineConfig;

#[derive(Clone)]
pub struct Config {
    pub server_addr: String,

    // Rate limiting
    pub rate_timesheet_per_min: u32,

    pub api_prefix: String,

    pub engine: EngineConfig,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let time_bank_credit_fraction: f64 = env::var("TIME_BANK_CREDIT_FRACTION")
            .unwrap_or_else(|_| "1.0".to_string())
            .parse()
            .unwrap();
        assert!(
            (0.0..=1.0).contains(&time_bank_credit_fraction),
            "TIME_BANK_CREDIT_FRACTION must be within [0, 1]"
        );

        Self {
            server_addr: env::var("SERVER_ADDR").expect("SERVER_ADDR must be set"),

            rate_timesheet_per_min: env::var("RATE_TIMESHEET_PER_MIN")
                .unwrap_or_else(|_| "120".to_string())
                .parse()
                .unwrap(),

            api_prefix: env::var("API_PREFIX").unwrap_or_else(|_| "/api/v1".to_string()),

            engine: EngineConfig {
                standard_shift_minutes: env::var("STANDARD_SHIFT_MINUTES")
                    .unwrap_or_else(|_| "480".to_string()) // default 8h shift
                    .parse()
                    .unwrap(),
                overtime_tier50_cap_minutes: env::var("OVERTIME_TIER50_CAP_MINUTES")
                    .unwrap_or_else(|_| "120".to_string()) // first 2h of excess at 50%
                    .parse()
                    .unwrap(),
                time_bank_credit_fraction,
            },
        }
    }
}
