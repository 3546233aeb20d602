//! Output formatting for solver results

use crate::cli::OutputFormat;
use crate::executor::SolverResult;
use chrono::TimeDelta;

const MISSING: &str = " --- ";

/// One table row: a day's answers and timings
#[derive(Debug, Default)]
struct Row {
    year: u16,
    day: u8,
    answers: [Option<String>; 2],
    parse: TimeDelta,
    solve: [TimeDelta; 2],
}

impl Row {
    fn total(&self) -> TimeDelta {
        self.parse + self.solve[0] + self.solve[1]
    }
}

/// Output formatter for solver results
pub struct OutputFormatter {
    format: OutputFormat,
    quiet: bool,
    start_time: std::time::Instant,
    row: Option<Row>,
    totals: Row,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat, quiet: bool) -> Self {
        Self {
            format,
            quiet,
            start_time: std::time::Instant::now(),
            row: None,
            totals: Row::default(),
        }
    }

    /// Print the table header, if the format has one
    pub fn print_header(&self) {
        if self.quiet || self.format != OutputFormat::Table {
            return;
        }
        let titles = ["Parse", "Part 1", "Part 2", "Total"];
        let rules = ["=====", "======", "======", "====="];
        println!("{}", table_line("", ["Part 1", "Part 2"], titles));
        println!("{}", table_line("", ["======", "======"], rules));
    }

    /// Format and print a single result, in (year, day, part) order
    pub fn print_result(&mut self, result: &SolverResult) {
        if self.quiet {
            print_quiet(result);
            return;
        }
        match self.format {
            OutputFormat::Lines => print_line(result),
            OutputFormat::Table => self.add_to_row(result),
        }
    }

    fn add_to_row(&mut self, result: &SolverResult) {
        let same_day = self
            .row
            .as_ref()
            .is_some_and(|row| (row.year, row.day) == (result.year, result.day));
        if !same_day {
            self.flush_row();
            self.row = Some(Row {
                year: result.year,
                day: result.day,
                ..Row::default()
            });
        }
        let Some(row) = self.row.as_mut() else {
            return;
        };
        let slot = usize::from(result.part.clamp(1, 2) - 1);
        row.answers[slot] = Some(match &result.answer {
            Ok(answer) => answer.clone(),
            Err(e) => {
                eprintln!("{}/{:02} Part {}: Error - {}", result.year, result.day, result.part, e);
                "ERROR".to_string()
            }
        });
        if let Some(parse) = result.parse_duration {
            row.parse += parse;
        }
        row.solve[slot] += result.solve_duration;
    }

    fn flush_row(&mut self) {
        let Some(row) = self.row.take() else {
            return;
        };
        let answers = row.answers.clone().map(|a| a.unwrap_or_else(|| MISSING.to_string()));
        println!(
            "{}",
            table_line(
                &format!("Day {:02}:", row.day),
                [answers[0].as_str(), answers[1].as_str()],
                timings(&row),
            )
        );
        self.totals.parse += row.parse;
        self.totals.solve[0] += row.solve[0];
        self.totals.solve[1] += row.solve[1];
    }

    /// Print a summary after all results
    /// Shows both total solve time (sum of durations) and actual elapsed wall-clock time
    pub fn print_summary(&mut self, results: &[SolverResult]) {
        if self.quiet {
            return;
        }
        if self.format == OutputFormat::Table {
            self.flush_row();
            println!("{}", table_line("Total:", [MISSING, MISSING], timings(&self.totals)));
        }

        let total = results.len();
        let successes = results.iter().filter(|r| r.answer.is_ok()).count();
        let failures = total - successes;

        let total_parse_time: TimeDelta = results
            .iter()
            .filter(|r| r.answer.is_ok())
            .filter_map(|r| r.parse_duration)
            .sum();
        let total_solve_time: TimeDelta = results
            .iter()
            .filter(|r| r.answer.is_ok())
            .map(|r| r.solve_duration)
            .sum();
        let total_compute_time = total_parse_time + total_solve_time;
        let elapsed_time = self.start_time.elapsed();

        println!();
        println!("--- Summary ---");
        println!("Parts: {} solved, {} failed", successes, failures);
        println!("Total parse time: {}", format_duration(total_parse_time));
        println!("Total solve time: {}", format_duration(total_solve_time));
        println!("Elapsed wall-clock time: {}", format_std_duration(elapsed_time));
        if !elapsed_time.is_zero() {
            let total_compute_secs =
                total_compute_time.num_microseconds().unwrap_or(0) as f64 / 1_000_000.0;
            let speedup = total_compute_secs / elapsed_time.as_secs_f64();
            println!("Speedup factor: {:.2}x", speedup);
        }
    }
}

fn timings(row: &Row) -> [String; 4] {
    [row.parse, row.solve[0], row.solve[1], row.total()].map(format_duration)
}

/// Label, two answer columns and four timing columns
fn table_line<A, T>(label: &str, answers: [A; 2], timings: [T; 4]) -> String
where
    A: AsRef<str>,
    T: AsRef<str>,
{
    let [a1, a2] = answers;
    let [parse, p1, p2, total] = timings;
    format!(
        "{:<10}{:>20}{:>20}{:>14}{:>14}{:>14}{:>14}",
        label,
        a1.as_ref(),
        a2.as_ref(),
        parse.as_ref(),
        p1.as_ref(),
        p2.as_ref(),
        total.as_ref()
    )
}

/// Print in quiet mode (just the answer)
fn print_quiet(result: &SolverResult) {
    match &result.answer {
        Ok(answer) => println!("{}", answer),
        Err(e) => eprintln!("Error: {}", e),
    }
}

/// Print one part with its timings
fn print_line(result: &SolverResult) {
    let prefix = format!("{}/{:02} Part {}", result.year, result.day, result.part);
    match &result.answer {
        Ok(answer) => {
            let parse_timing = result
                .parse_duration
                .map(|d| format!("parse: {}, ", format_duration(d)))
                .unwrap_or_default();
            println!(
                "{}: {} ({}solve: {})",
                prefix,
                answer,
                parse_timing,
                format_duration(result.solve_duration)
            );
        }
        Err(e) => eprintln!("{}: Error - {}", prefix, e),
    }
}

/// Format a TimeDelta for display
fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}

/// Format a std::time::Duration for display (used for wall-clock time)
fn format_std_duration(d: std::time::Duration) -> String {
    TimeDelta::from_std(d).map_or_else(|_| "N/A".to_string(), format_duration)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration_units() {
        assert_eq!(format_duration(TimeDelta::microseconds(999)), "999µs");
        assert_eq!(format_duration(TimeDelta::microseconds(1500)), "1.50ms");
        assert_eq!(format_duration(TimeDelta::milliseconds(2500)), "2.50s");
        assert_eq!(format_duration(TimeDelta::microseconds(-20)), "-20µs");
    }

    #[test]
    fn test_std_duration_matches() {
        assert_eq!(format_std_duration(std::time::Duration::from_micros(1500)), "1.50ms");
    }

    #[test]
    fn test_table_line_layout() {
        let line = table_line("Day 01:", ["11", MISSING], ["1µs", "2µs", "3µs", "6µs"]);
        assert_eq!(line.len(), 10 + 20 + 20 + 14 * 4 + 4);
        assert!(line.starts_with("Day 01:   "));
        assert!(line.ends_with("6µs"));
        assert!(line.contains(" --- "));
    }

    #[test]
    fn test_row_total() {
        let row = Row {
            parse: TimeDelta::microseconds(5),
            solve: [TimeDelta::microseconds(7), TimeDelta::microseconds(11)],
            ..Row::default()
        };
        assert_eq!(row.total(), TimeDelta::microseconds(23));
    }
}
