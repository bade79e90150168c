use chrono::NaiveDate;
use chrono_tz::Pacific::Honolulu;
use tracing_subscriber::EnvFilter;

use mahina::{CalendarConfig, LunarCalendar, Locale};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = CalendarConfig {
        locale: Locale::Hawaiian,
        ..CalendarConfig::default()
    };
    let calendar = match LunarCalendar::new(Honolulu, config) {
        Ok(calendar) => calendar,
        Err(err) => {
            eprintln!("invalid calendar configuration: {err}");
            std::process::exit(1);
        }
    };

    let Some(today) = NaiveDate::from_ymd_opt(2025, 3, 15) else {
        return;
    };
    let month = calendar.build_month_data(today, true);

    println!("=== {} {} ===", month.month_name, month.year);
    println!("{:>14}{:>14}{:>14}{:>14}{:>14}{:>14}{:>14}", "Su", "Mo", "Tu", "We", "Th", "Fr", "Sa");
    for week in month.calendar.chunks(7) {
        let line: String = week
            .iter()
            .map(|d| {
                let marker = if d.is_overlap { '·' } else { ' ' };
                format!("{:>3}{}{:<10}", d.day, marker, truncate(d.phase.primary.name(), 10))
            })
            .collect();
        println!("{line}");
    }
    println!();

    if let Some(t) = month.transition_day() {
        println!("Transition day: {} ({})", t.date, t.phase.label());
    }

    let today_phase = calendar.resolve_phase(today);
    println!("Today: {} - {}", today_phase.label(), today_phase.primary.description());
    println!("  Planting: {}", today_phase.primary.planting());
    println!("  Fishing:  {}", today_phase.primary.fishing());
    println!();

    for row in calendar.build_group_rows(&month, today) {
        let cells: String = row
            .cells
            .iter()
            .map(|c| if c.is_filled { '●' } else { '○' })
            .collect();
        let active = if row.is_active_group { "*" } else { " " };
        println!("{active} {:<8} {cells}", row.group.name);
    }
}

fn truncate(name: &str, width: usize) -> String {
    name.chars().take(width).collect()
}
