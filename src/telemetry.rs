use prometheus::{
    register_counter, register_counter_vec, register_int_gauge, Counter, CounterVec, IntGauge,
};
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use lazy_static::lazy_static;

use crate::config::LoggingSettings;

lazy_static! {
    pub static ref QUIZ_QUESTIONS_SERVED: CounterVec = register_counter_vec!(
        "quiz_questions_served_total",
        "Number of quiz questions handed out",
        &["category"]
    )
    .unwrap();
    pub static ref QUIZ_ROUNDS_FINISHED: CounterVec = register_counter_vec!(
        "quiz_rounds_finished_total",
        "Number of quiz rounds that ran out of questions",
        &["category"]
    )
    .unwrap();
    pub static ref QUESTIONS_CREATED: Counter =
        register_counter!("questions_created_total", "Number of questions created").unwrap();
    pub static ref QUESTIONS_DELETED: Counter =
        register_counter!("questions_deleted_total", "Number of questions deleted").unwrap();
    pub static ref QUESTIONS_STORED: IntGauge =
        register_int_gauge!("questions_stored", "Questions in the store at last scrape").unwrap();
}

/// `LOG_LEVEL` wins over the configured level, and `INCLUDE_SPAN_EVENTS=true`
/// turns span events on even when the settings leave them off.
pub fn init_tracing(settings: &LoggingSettings) -> Result<(), ParseError> {
    let mut fmt_layer = fmt::layer();
    let span_events = settings.span_events
        || std::env::var("INCLUDE_SPAN_EVENTS")
            .is_ok_and(|value| value.eq_ignore_ascii_case("true"));
    if span_events {
        fmt_layer = fmt_layer.with_span_events(FmtSpan::ENTER | FmtSpan::EXIT);
    }
    let filter_layer = env_filter(settings, std::env::var("LOG_LEVEL").ok())?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
    Ok(())
}

fn env_filter(
    settings: &LoggingSettings,
    from_env: Option<String>,
) -> Result<EnvFilter, ParseError> {
    EnvFilter::try_new(from_env.unwrap_or_else(|| settings.level.clone()))
}
