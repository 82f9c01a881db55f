/// Current month as a `yyyy-mm` key.
pub fn current_month() -> String {
    use js_sys::Date;
    let now = Date::new_0();
    let year = now.get_full_year();
    let month = now.get_month() + 1; // JavaScript months are 0-indexed

    format!("{:04}-{:02}", year as u32, month as u32)
}

/// Format a `yyyy-mm` key for display (e.g. "May 2024").
pub fn format_month(month: &str) -> String {
    let parts: Vec<&str> = month.split('-').collect();
    if parts.len() == 2 {
        if let (Ok(year), Ok(m)) = (parts[0].parse::<u32>(), parts[1].parse::<u32>()) {
            if (1..=12).contains(&m) {
                return format!("{} {}", month_name(m), year);
            }
        }
    }
    month.to_string()
}

/// Format a `yyyy-mm-dd` date for display (e.g. "May 31, 2024"). A trailing
/// time component is ignored.
pub fn format_date(date: &str) -> String {
    let date_part = date.split('T').next().unwrap_or(date);
    let parts: Vec<&str> = date_part.split('-').collect();
    if parts.len() == 3 {
        if let (Ok(year), Ok(month), Ok(day)) = (
            parts[0].parse::<u32>(),
            parts[1].parse::<u32>(),
            parts[2].parse::<u32>(),
        ) {
            if (1..=12).contains(&month) {
                return format!("{} {}, {}", month_name(month), day, year);
            }
        }
    }
    date.to_string()
}

fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "January",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_formatting() {
        assert_eq!(format_month("2024-05"), "May 2024");
        assert_eq!(format_month("2023-12"), "December 2023");
        // Unparseable keys fall back to the raw string.
        assert_eq!(format_month("soon"), "soon");
    }

    #[test]
    fn date_formatting() {
        assert_eq!(format_date("2024-05-31"), "May 31, 2024");
        assert_eq!(format_date("2024-05-31T08:30:00Z"), "May 31, 2024");
        assert_eq!(format_date("not-a-date"), "not-a-date");
    }
}
