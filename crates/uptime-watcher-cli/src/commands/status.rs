use serde_json::json;
use uptime_watcher_core::uptime::sample_once;
use uptime_watcher_core::{
    format_uptime, DelayScheduler, ReminderPolicyEngine, StateStore, SystemBootTime, SystemClock,
    UptimeSample,
};

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let store = StateStore::open()?;
    let state = store.try_load()?;
    let sample = sample_once(&SystemBootTime, &SystemClock)?;

    let status = json!({
        "uptime": format_uptime(sample.uptime_seconds),
        "uptime_seconds": sample.uptime_seconds,
        "boot_time": sample.boot_time,
        "state": state,
        "delay_options": DelayScheduler::options_for_seconds(state.total_delay_time),
    });
    println!("{}", serde_json::to_string_pretty(&status)?);
    Ok(())
}

pub fn check(uptime: Option<u64>) -> Result<(), Box<dyn std::error::Error>> {
    let mut sample = sample_once(&SystemBootTime, &SystemClock)?;
    if let Some(uptime_seconds) = uptime {
        sample = UptimeSample {
            uptime_seconds,
            ..sample
        };
    }

    let mut engine = ReminderPolicyEngine::new(StateStore::open()?, SystemClock);
    let action = engine.on_sample(sample);
    println!("{}", serde_json::to_string_pretty(&action)?);
    Ok(())
}

pub fn options(hours: Option<u64>) -> Result<(), Box<dyn std::error::Error>> {
    let options = match hours {
        Some(hours) => DelayScheduler::options(hours),
        None => {
            let state = StateStore::open()?.try_load()?;
            DelayScheduler::options_for_seconds(state.total_delay_time)
        }
    };
    println!("{}", serde_json::to_string_pretty(&options)?);
    Ok(())
}
