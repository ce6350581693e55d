use clap::{Args, Parser, Subcommand};
use name_format::{format_list, Config, Error, Markup, NameRecord, Pattern};
use serde::de::DeserializeOwned;
use std::io;
use std::io::prelude::*;
use std::io::BufReader;
use std::process;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

/// Render personal names from format patterns.
///
/// Records are JSON objects such as `{"given": "Ada", "family": "Lovelace"}`.
/// When `-` is given in place of a record, newline-separated records are read
/// from stdin and one rendered name is printed per line; lines that are not
/// valid records print as empty lines.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a single record, or records from stdin
    Render {
        #[command(flatten)]
        format: FormatArgs,

        /// A JSON record, or `-` for stdin
        record: String,
    },
    /// Render a JSON array of records from stdin as a single list
    List {
        #[command(flatten)]
        format: FormatArgs,
    },
    /// Print the initials of some text, or of each line of stdin
    Initials {
        /// Text, or `-` for stdin
        #[arg(required = true)]
        text: Vec<String>,
    },
    /// Print the compiled form of a pattern
    Explain { pattern: String },
}

#[derive(Args, Debug)]
struct FormatArgs {
    /// A pattern, e.g. `t+ig+if`
    #[arg(long, short, conflicts_with = "format")]
    pattern: Option<String>,

    /// A named format from the configuration or the built-ins
    #[arg(long, short, default_value = "default")]
    format: String,

    /// A JSON configuration file
    #[arg(long, short)]
    config: Option<String>,

    #[arg(long)]
    sep1: Option<String>,

    #[arg(long)]
    sep2: Option<String>,

    #[arg(long)]
    sep3: Option<String>,

    /// One of `none`, `raw` or `wrapped`
    #[arg(long)]
    markup: Option<Markup>,
}

impl FormatArgs {
    fn load(&self) -> name_format::Result<(Config, Pattern)> {
        let mut config = match &self.config {
            Some(path) => Config::from_path(path)?,
            None => Config::default(),
        };

        let settings = &mut config.settings;
        if let Some(sep) = &self.sep1 {
            settings.sep1 = sep.as_str().into();
        }
        if let Some(sep) = &self.sep2 {
            settings.sep2 = sep.as_str().into();
        }
        if let Some(sep) = &self.sep3 {
            settings.sep3 = sep.as_str().into();
        }
        if let Some(markup) = self.markup {
            settings.markup = markup;
        }

        let pattern = match &self.pattern {
            Some(pattern) => Pattern::compile(pattern),
            None => config.pattern(&self.format)?.into_owned(),
        };
        debug!(pattern = pattern.source(), "using pattern");

        Ok((config, pattern))
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Render { format, record } => render_mode(&format, &record),
        Command::List { format } => list_mode(&format),
        Command::Initials { text } => {
            initials_mode(&text);
            Ok(())
        }
        Command::Explain { pattern } => {
            println!("{:#?}", Pattern::compile(&pattern).nodes());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        process::exit(1);
    }
}

fn render_mode(args: &FormatArgs, record: &str) -> name_format::Result<()> {
    let (config, pattern) = args.load()?;

    if record != "-" {
        let record: NameRecord = records_from_json(record)?;
        println!("{}", pattern.render(&record, &config.settings));
        return Ok(());
    }

    let reader = BufReader::new(io::stdin());
    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        let output = match records_from_json::<NameRecord>(&line) {
            Ok(record) => pattern.render(&record, &config.settings),
            Err(e) => {
                warn!(line = number + 1, error = %e, "skipping invalid record");
                String::new()
            }
        };

        if writeln!(&mut io::stdout(), "{}", output).is_err() {
            break;
        }
    }

    Ok(())
}

fn list_mode(args: &FormatArgs) -> name_format::Result<()> {
    let (config, pattern) = args.load()?;

    let mut json = String::new();
    io::stdin().read_to_string(&mut json)?;
    let records: Vec<NameRecord> = records_from_json(&json)?;

    let names: Vec<String> = records
        .iter()
        .map(|record| pattern.render(record, &config.settings))
        .collect();
    println!("{}", format_list(&names, &config.list));

    Ok(())
}

fn records_from_json<T: DeserializeOwned>(json: &str) -> name_format::Result<T> {
    serde_json::from_str(json).map_err(Error::Record)
}

fn initials_mode(text: &[String]) {
    if text.len() > 1 || text[0] != "-" {
        println!("{}", name_format::initials(&text.join(" ")));
        return;
    }

    let reader = BufReader::new(io::stdin());
    for line in reader.lines() {
        let input = match line {
            Ok(line) => line,
            Err(_) => break,
        };
        if writeln!(&mut io::stdout(), "{}", name_format::initials(&input)).is_err() {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use name_format::Settings;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn explicit_settings_override_config() {
        let cli = Cli::parse_from(["name_format", "render", "--pattern", "g+jf", "--sep2", " / ", "--markup", "wrapped", "{}"]);
        let format = match cli.command {
            Command::Render { format, .. } => format,
            other => panic!("unexpected command {:?}", other),
        };
        let (config, pattern) = format.load().unwrap();
        assert_eq!("g+jf", pattern.source());
        assert_eq!(" / ", config.settings.sep2.as_str());
        assert_eq!(Markup::Wrapped, config.settings.markup);
        assert_eq!(Settings::default().sep1, config.settings.sep1);
    }

    #[test]
    fn bad_records_are_not_config_errors() {
        let error = records_from_json::<NameRecord>("{\"given\": ").unwrap_err();
        assert!(matches!(error, Error::Record(_)));
        assert!(error.to_string().starts_with("invalid name record"));

        assert!(matches!(
            records_from_json::<Vec<NameRecord>>("{}"),
            Err(Error::Record(_))
        ));
        let records: Vec<NameRecord> = records_from_json(r#"[{"given": "Ada"}, {}]"#).unwrap();
        assert_eq!(2, records.len());
    }

    #[test]
    fn named_formats() {
        let cli = Cli::parse_from(["name_format", "list", "--format", "formal"]);
        let format = match cli.command {
            Command::List { format } => format,
            other => panic!("unexpected command {:?}", other),
        };
        assert_eq!("t+if", format.load().unwrap().1.source());
    }
}
