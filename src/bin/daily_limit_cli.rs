use std::{env, error::Error, process};

use chrono::Days;
use colored::Colorize;
use daily_limit::{
    config::ConfigManager,
    init,
    ledger::{Record, Tracker},
    report::{CalorieReport, CashReport},
    time::{Clock, SystemClock},
    utils::build_info,
    LimitError,
};

fn main() {
    init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let mut args = env::args().skip(1);
    let command = args.next().unwrap_or_else(|| {
        print_usage();
        process::exit(1);
    });
    let rest: Vec<String> = args.collect();

    match command.as_str() {
        "demo" => demo(),
        "calories" => {
            let config = ConfigManager::new().load()?;
            let opts = Options::parse(&rest, config.calorie_limit, &config.currency)?;
            let mut report = CalorieReport::new(Tracker::new(opts.limit));
            for record in opts.records {
                report.add_record(record);
            }
            print_stats(report.tracker());
            println!("{}", report.message());
        }
        "cash" => {
            let config = ConfigManager::new().load()?;
            let opts = Options::parse(&rest, config.cash_limit, &config.currency)?;
            let mut report = CashReport::new(Tracker::new(opts.limit));
            for record in opts.records {
                report.add_record(record);
            }
            print_stats(report.tracker());
            println!("{}", report.message(&opts.currency));
        }
        "version" => println!("{}", build_info::current()),
        _ => {
            print_usage();
            process::exit(1);
        }
    }

    Ok(())
}

struct Options {
    limit: f64,
    currency: String,
    records: Vec<Record>,
}

impl Options {
    fn parse(args: &[String], limit: f64, currency: &str) -> Result<Self, Box<dyn Error>> {
        let mut opts = Options {
            limit,
            currency: currency.to_string(),
            records: Vec::new(),
        };
        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--limit" => {
                    let value = iter.next().ok_or("missing value for --limit")?;
                    opts.limit = value
                        .parse()
                        .map_err(|_| LimitError::InvalidAmount(value.clone()))?;
                }
                "--currency" => {
                    let value = iter.next().ok_or("missing value for --currency")?;
                    opts.currency = value.clone();
                }
                shorthand => {
                    let record = Record::from_shorthand(shorthand, &SystemClock)?;
                    opts.records.push(record);
                }
            }
        }
        Ok(opts)
    }
}

fn print_stats(tracker: &Tracker) {
    println!(
        "{} today: {} | week: {} | limit: {}",
        tracker.today().format("%d.%m.%Y").to_string().bold(),
        tracker.stats_today(),
        tracker.stats_week(),
        tracker.limit()
    );
}

fn print_records(name: &str, tracker: &Tracker) {
    println!("{}", format!("== {name} records ==").bold());
    for record in tracker.records() {
        println!("  {record}");
    }
}

/// Walks through a generic tracker, a calorie counter and a money counter fed
/// with overlapping sample records spread over the last ten days.
fn demo() {
    let today = SystemClock.today();
    let ago = |amount: f64, comment: &str, days: u64| {
        Record::on(amount, Some(comment), today - Days::new(days))
    };

    let shared = [
        Record::on(10.0, None, today - Days::new(10)),
        ago(10.0, "Entry 2", 8),
        ago(10.0, "Entry 3", 7),
        ago(10.0, "Entry 4", 6),
        ago(10.0, "Entry 5", 5),
        ago(10.0, "Entry 6", 4),
        ago(10.16339999, "Entry 7", 3),
        ago(10.0, "Entry 8", 0),
        ago(10.5465476746464, "Entry 9", 0),
        ago(10.0, "Entry 10", 0),
    ];

    let mut base = Tracker::new(1000.0);
    let mut calories = CalorieReport::new(Tracker::new(10000.0));
    let mut cash = CashReport::new(Tracker::new(1000.0));
    for record in &shared {
        base.add_record(record.clone());
        calories.add_record(record.clone());
        cash.add_record(record.clone());
    }

    calories.add_record(ago(145.0, "Coffee", 0));
    calories.add_record(ago(300.0, "Lunch for a friend", 0));
    calories.add_record(ago(3000.0, "Birthday bar", 0));

    cash.add_record(ago(1186.0, "Slice of cake. And another.", 0));
    cash.add_record(ago(84.0, "Yogurt.", 0));
    cash.add_record(ago(1140.0, "Can of chips.", 0));

    print_records("tracker", &base);
    print_records("calories", calories.tracker());
    print_records("cash", cash.tracker());
    println!();

    for (name, tracker) in [
        ("tracker", &base),
        ("calories", calories.tracker()),
        ("cash", cash.tracker()),
    ] {
        println!(
            "{name}: today {} | week {} | remainder {}",
            tracker.stats_today(),
            tracker.stats_week(),
            tracker.remainder_today()
        );
    }
    println!();

    println!("calories: {}", calories.message());
    for code in ["rub", "usd", "eur", "xyz"] {
        println!("cash({code}): {}", cash.message(code));
    }
}

fn print_usage() {
    eprintln!(
        "Usage: daily_limit_cli <command>\n\
         Commands:\n  \
         demo\n  \
         calories [--limit N] RECORD...\n  \
         cash [--limit N] [--currency rub|usd|eur] RECORD...\n  \
         version\n\
         RECORD is amount[@DD.MM.YYYY][:comment]; without a date it counts for today."
    );
}
