//! Prints a few fixed conversions for eyeballing.

use persian_date::{GregorianDate, to_gregorian, to_persian};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    for (year, month, day) in [(2025, 10, 18), (1999, 2, 11)] {
        let date = GregorianDate::from_ymd(year, month, day)?;
        println!("{date} -> {}", to_persian(date));
    }

    for (year, month, day) in [(1404, 7, 26), (1400, 1, 1)] {
        let date = to_gregorian(year, month, day)?;
        println!("{year:04}-{month:02}-{day:02} -> {date}");
    }

    Ok(())
}
