//! Interactive session: one `UserSession` driven by commands read from stdin.

use chrono::NaiveDate;
use mindcare_core::analytics::{self, RecommendationRules};
use mindcare_core::config::TrackerConfig;
use mindcare_core::*;
use std::io::{self, BufRead, Write};
use std::path::Path;

const HELP: &str = "\
Commands:
  log mood=<mood> [energy=1-10] [sleep=0-12] [stress=1-10] [date=YYYY-MM-DD] [notes=<text>]
      mood is an emoji (😢 😔 😐 🙂 😄), a name (very_sad, sad, neutral, content, happy) or 1-5
  say <message>     talk to MindCare
  history           show the conversation
  clear             clear the conversation
  stats             dashboard overview
  trend             mood over time, sleep vs energy, distribution
  recommend         personalized recommendations
  resources [name]  resource library
  export <path>     write entries to CSV
  help              show this help
  quit              leave (nothing is saved)

Not sure what to say? Try:
  say I'm feeling anxious today
  say I've been feeling down
  say I'm having trouble sleeping";

#[derive(Debug, PartialEq)]
enum ShellCommand<'a> {
    Log(&'a str),
    Say(&'a str),
    History,
    Clear,
    Stats,
    Trend,
    Recommend,
    Resources(Option<&'a str>),
    Export(&'a str),
    Help,
    Quit,
    Empty,
    Unknown(&'a str),
}

fn parse_command(line: &str) -> ShellCommand<'_> {
    let line = line.trim();
    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };

    match head.to_lowercase().as_str() {
        "" => ShellCommand::Empty,
        "log" => ShellCommand::Log(rest),
        "say" => ShellCommand::Say(rest),
        "history" => ShellCommand::History,
        "clear" => ShellCommand::Clear,
        "stats" => ShellCommand::Stats,
        "trend" => ShellCommand::Trend,
        "recommend" => ShellCommand::Recommend,
        "resources" => ShellCommand::Resources(if rest.is_empty() { None } else { Some(rest) }),
        "export" => ShellCommand::Export(rest),
        "help" => ShellCommand::Help,
        "quit" | "exit" => ShellCommand::Quit,
        _ => ShellCommand::Unknown(head),
    }
}

fn invalid(message: String) -> Error {
    Error::InvalidEntry(message)
}

/// Build an entry from `key=value` fields; `notes=` takes the rest of the line
///
/// Keys are case-insensitive. Bounds are checked here, before the entry
/// reaches the session.
fn parse_entry(args: &str, defaults: &TrackerConfig, today: NaiveDate) -> Result<MoodEntry> {
    // ASCII lowering keeps byte offsets valid for slicing `args`
    let (fields, notes) = match args.to_ascii_lowercase().find("notes=") {
        Some(idx) => (&args[..idx], Some(args[idx + "notes=".len()..].trim())),
        None => (args, None),
    };

    let mut mood = None;
    let mut energy = defaults.default_energy;
    let mut sleep = defaults.default_sleep;
    let mut stress: Option<u8> = None;
    let mut date = today;

    for token in fields.split_whitespace() {
        let (key, value) = token
            .split_once('=')
            .ok_or_else(|| invalid(format!("expected key=value, got '{}'", token)))?;

        match key.to_lowercase().as_str() {
            "mood" => mood = Some(value.parse::<Mood>()?),
            "energy" => {
                energy = value
                    .parse::<u8>()
                    .map_err(|_| invalid(format!("energy must be a whole number, got '{}'", value)))?
            }
            "sleep" => {
                sleep = value
                    .parse::<f64>()
                    .map_err(|_| invalid(format!("sleep must be a number of hours, got '{}'", value)))?
            }
            "stress" => {
                stress = Some(
                    value
                        .parse::<u8>()
                        .map_err(|_| invalid(format!("stress must be a whole number, got '{}'", value)))?,
                )
            }
            "date" => {
                date = NaiveDate::parse_from_str(value, "%Y-%m-%d")
                    .map_err(|_| invalid(format!("date must be YYYY-MM-DD, got '{}'", value)))?
            }
            other => return Err(invalid(format!("unknown field '{}'", other))),
        }
    }

    let mood = mood.ok_or_else(|| invalid("mood is required".into()))?;

    let mut entry = MoodEntry::new(date, mood, energy, sleep);
    entry.stress = stress;
    if let Some(notes) = notes {
        entry = entry.with_notes(notes);
    }

    entry.check_bounds()?;
    Ok(entry)
}

/// Run the interactive loop until `quit` or end of input
pub fn run(config: &Config, catalog: &ResourceCatalog) -> Result<()> {
    let mut session = UserSession::new();
    let rules = RecommendationRules::from(&config.recommendation);

    println!("MindCare: your personal mental health assistant");
    println!("Type 'help' for commands. Nothing is saved when you quit.");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };

        match parse_command(&line) {
            ShellCommand::Empty => {}
            ShellCommand::Quit => break,
            ShellCommand::Help => println!("{}", HELP),
            ShellCommand::Log(args) => {
                let today = chrono::Local::now().date_naive();
                match parse_entry(args, &config.tracker, today) {
                    Ok(entry) => {
                        session.on_append(entry);
                        println!("✓ Mood logged ({} entries)", session.entries().count());
                    }
                    Err(e) => println!("✗ {}", e),
                }
            }
            ShellCommand::Say(text) => match session.on_send(text) {
                Some(_) => {
                    if let Some(reply) = session.chat().all().last() {
                        println!("MindCare: {}", reply.text);
                    }
                }
                None => {
                    println!("Type a message after 'say'. Not sure what to say? Try these:");
                    for prompt in SUGGESTED_PROMPTS {
                        println!("  say {}", prompt);
                    }
                }
            },
            ShellCommand::History => display_history(session.chat()),
            ShellCommand::Clear => {
                session.on_clear();
                println!("✓ Chat cleared");
            }
            ShellCommand::Stats => {
                display_stats(session.entries(), config.tracker.recent_entries)
            }
            ShellCommand::Trend => display_trend(session.entries()),
            ShellCommand::Recommend => {
                display_recommendation(session.entries(), catalog, rules)?
            }
            ShellCommand::Resources(category) => display_resources(catalog, category),
            ShellCommand::Export(path) => {
                if path.is_empty() {
                    println!("Usage: export <path>");
                } else {
                    match write_csv(session.entries().all(), Path::new(path)) {
                        Ok(count) => println!("✓ Exported {} entries to {}", count, path),
                        Err(e) => println!("✗ {}", e),
                    }
                }
            }
            ShellCommand::Unknown(word) => {
                println!("Unknown command '{}'. Type 'help' for commands.", word)
            }
        }
    }

    println!("\nTake care of yourself.");
    Ok(())
}

const NO_DATA: &str = "No mood data yet. Start tracking to see your insights here!";

fn display_history(chat: &ChatSession) {
    if chat.is_empty() {
        println!("No messages yet.");
        return;
    }

    for turn in chat.all() {
        let who = match turn.speaker {
            Speaker::User => "You",
            Speaker::Assistant => "MindCare",
        };
        println!("{}: {}", who, turn.text);
    }
}

fn display_stats(store: &EntryStore, recent: usize) {
    let summary = match analytics::summarize(store.all(), store.recent(recent)) {
        Ok(summary) => summary,
        Err(_) => {
            println!("{}", NO_DATA);
            return;
        }
    };

    println!("\nYour Mental Health Overview");
    println!("  Entries logged: {}", summary.count);
    println!("  Current Mood:   {}", summary.latest_mood);
    println!("  Avg. Energy:    {:.1}/10", summary.mean_energy);
    println!("  Avg. Sleep:     {:.1} hrs", summary.mean_sleep);
    println!("  Avg. Mood:      {:.1}/5", summary.mean_mood);
    if let Some(stress) = summary.mean_stress {
        println!("  Avg. Stress:    {:.1}/10", stress);
    }

    println!("\nRecent Entries");
    for entry in &summary.recent {
        let stress = entry
            .stress
            .map(|s| s.to_string())
            .unwrap_or_else(|| "-".into());
        println!(
            "  {}  {}  energy {:>2}  sleep {:>4.1}  stress {:>2}  {}",
            entry.date,
            entry.mood,
            entry.energy,
            entry.sleep,
            stress,
            entry.notes.as_deref().unwrap_or("")
        );
    }
}

fn display_trend(store: &EntryStore) {
    if store.is_empty() {
        println!("{}", NO_DATA);
        return;
    }

    println!("\nMood Trend");
    for point in analytics::mood_trend(store.all()) {
        let mood = Mood::from_rank(point.rank).map(Mood::symbol).unwrap_or("?");
        println!(
            "  {}  {} {:<5} {}",
            point.date,
            mood,
            "█".repeat(usize::from(point.rank)),
            point.rank
        );
    }

    println!("\nSleep vs Energy");
    for point in analytics::sleep_energy_points(store.all()) {
        println!(
            "  sleep {:>4.1} hrs  energy {:>2}  {}",
            point.sleep, point.energy, point.mood
        );
    }

    println!("\nMood Distribution");
    for (mood, count) in analytics::mood_distribution(store.all()) {
        println!("  {}  {}", mood, count);
    }
}

fn display_recommendation(
    store: &EntryStore,
    catalog: &ResourceCatalog,
    rules: RecommendationRules,
) -> Result<()> {
    match analytics::recommend(store.all(), catalog, rules) {
        Ok(rec) => {
            println!("\n{}", rec.block.headline);
            for item in &rec.block.items {
                println!("  • {}: {}", item.name, item.description);
            }
            Ok(())
        }
        Err(Error::EmptyStore) => {
            println!("{}", NO_DATA);
            Ok(())
        }
        Err(e) => Err(e),
    }
}

fn display_resources(catalog: &ResourceCatalog, category: Option<&str>) {
    match category {
        Some(name) => {
            let techniques = catalog.techniques(name);
            if techniques.is_empty() {
                println!("No resources for category '{}'.", name);
            } else {
                crate::display_techniques(name, techniques);
            }
        }
        None => {
            for name in catalog.categories() {
                crate::display_techniques(name, catalog.techniques(name));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 7, 15).unwrap()
    }

    #[test]
    fn test_parse_command() {
        assert_eq!(parse_command("  "), ShellCommand::Empty);
        assert_eq!(parse_command("SAY hi there"), ShellCommand::Say("hi there"));
        assert_eq!(parse_command("resources"), ShellCommand::Resources(None));
        assert_eq!(
            parse_command("resources Anxiety"),
            ShellCommand::Resources(Some("Anxiety"))
        );
        assert_eq!(parse_command("exit"), ShellCommand::Quit);
        assert_eq!(parse_command("dance now"), ShellCommand::Unknown("dance"));
    }

    #[test]
    fn test_parse_entry_uses_defaults() {
        let entry = parse_entry("mood=🙂", &TrackerConfig::default(), today()).unwrap();
        assert_eq!(entry.mood, Mood::Content);
        assert_eq!(entry.energy, 5);
        assert_eq!(entry.sleep, 7.0);
        assert_eq!(entry.stress, None);
        assert_eq!(entry.date, today());
        assert_eq!(entry.notes, None);
    }

    #[test]
    fn test_parse_entry_all_fields() {
        let entry = parse_entry(
            "mood=sad energy=3 sleep=5.5 stress=9 date=2024-07-01 notes=long day at work",
            &TrackerConfig::default(),
            today(),
        )
        .unwrap();
        assert_eq!(entry.mood, Mood::Sad);
        assert_eq!(entry.energy, 3);
        assert_eq!(entry.sleep, 5.5);
        assert_eq!(entry.stress, Some(9));
        assert_eq!(entry.date, NaiveDate::from_ymd_opt(2024, 7, 1).unwrap());
        assert_eq!(entry.notes.as_deref(), Some("long day at work"));
    }

    #[test]
    fn test_parse_entry_rejects_bad_input() {
        let defaults = TrackerConfig::default();
        assert!(parse_entry("energy=5", &defaults, today()).is_err());
        assert!(parse_entry("mood=happy energy=11", &defaults, today()).is_err());
        assert!(parse_entry("mood=happy energy=lots", &defaults, today()).is_err());
        assert!(parse_entry("mood=happy sleep=7.3", &defaults, today()).is_err());
        assert!(parse_entry("mood=happy colour=blue", &defaults, today()).is_err());
        assert!(parse_entry("mood=ecstatic", &defaults, today()).is_err());
        assert!(parse_entry("mood=happy date=15/07/2024", &defaults, today()).is_err());
    }

    #[test]
    fn test_parse_entry_keys_ignore_case() {
        let entry = parse_entry(
            "MOOD=happy Energy=7 NOTES=long day",
            &TrackerConfig::default(),
            today(),
        )
        .unwrap();
        assert_eq!(entry.mood, Mood::Happy);
        assert_eq!(entry.energy, 7);
        assert_eq!(entry.notes.as_deref(), Some("long day"));
    }
}
