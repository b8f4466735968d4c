use anyhow::Result;
use serde::Serialize;

use leapwitness::is_leap_year;
use leapwitness::presentation::output::render_classification;

use crate::ui::json::emit_event;
use crate::ui::json::events::{CompleteEvent, DataEvent, StartEvent};

#[derive(Debug, Serialize)]
struct Classification {
    year: i64,
    leap: bool,
}

pub fn cmd_classify(years: &[i64], json: bool) -> Result<()> {
    if json {
        emit_event(&StartEvent::new("classify"))?;
    }

    for &year in years {
        let leap = is_leap_year(year);
        if year < 1 {
            log::warn!("year {} predates the Gregorian domain (years >= 1)", year);
        }
        if json {
            emit_event(&DataEvent::new("classify", Classification { year, leap }))?;
        } else {
            println!("{}", render_classification(year, leap));
        }
    }

    if json {
        emit_event(&CompleteEvent::success("classify"))?;
    }
    Ok(())
}
