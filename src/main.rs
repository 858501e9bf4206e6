mod checksum;
mod logging;
mod reference;
mod validator;

use clap::Parser;
use reference::{parse_override, CountryLengthTable};
use validator::IbanValidator;

const DEFAULT_IBAN: &str = "DE89370400440532013000";

#[derive(Parser)]
#[command(name = "iban-checker")]
#[command(about = "ISO 13616 IBAN checksum validator", long_about = None)]
struct Cli {
    /// IBAN to check; spaces are ignored
    #[arg(default_value = DEFAULT_IBAN)]
    iban: String,
    /// Extra or replacement country length, e.g. GB=22
    #[arg(long = "country", value_name = "CC=LEN", value_parser = parse_override)]
    countries: Vec<(String, usize)>,
    /// Recognize only the --country entries
    #[arg(long, default_value_t = false)]
    only_countries: bool,
    /// Exit with status 2 when the IBAN is invalid
    #[arg(long, default_value_t = false)]
    exit_code: bool,
}

fn main() {
    match run() {
        Ok(true) => {}
        Ok(false) => std::process::exit(2),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}

fn run() -> Result<bool, String> {
    logging::init_logging("iban-checker")?;
    let cli = Cli::parse();

    let validator = IbanValidator::new(build_table(&cli)?);
    let valid = validator.validate(cli.iban.as_str());
    println!("{}", verdict_line(&cli.iban, valid));

    Ok(valid || !cli.exit_code)
}

fn build_table(cli: &Cli) -> Result<CountryLengthTable, String> {
    let mut table = if cli.only_countries {
        CountryLengthTable::new()
    } else {
        CountryLengthTable::reference()
    };
    for (code, length) in &cli.countries {
        table.insert(code, *length)?;
    }
    if table.is_empty() {
        log::warn!("no country lengths configured, every IBAN will be rejected");
    } else {
        log::debug!("using {} country length(s)", table.len());
    }
    Ok(table)
}

fn verdict_line(iban: &str, valid: bool) -> String {
    format!("IBAN {} -> {}", iban, if valid { "valid" } else { "invalid" })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("iban-checker").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn defaults_to_example_iban() {
        let cli = parse(&[]);
        assert_eq!(cli.iban, DEFAULT_IBAN);
        assert!(cli.countries.is_empty());
        assert!(!cli.only_countries);
        assert!(!cli.exit_code);

        let validator = IbanValidator::new(build_table(&cli).unwrap());
        assert!(validator.validate(cli.iban.as_str()));
    }

    #[test]
    fn accepts_positional_iban() {
        let cli = parse(&["DE22 7902 0076 0027 9131 68"]);
        assert_eq!(cli.iban, "DE22 7902 0076 0027 9131 68");
    }

    #[test]
    fn rejects_extra_positionals() {
        let result = Cli::try_parse_from(["iban-checker", "DE22", "DE89"]);
        assert!(result.is_err());
    }

    #[test]
    fn country_overrides_extend_reference_table() {
        let cli = parse(&["--country", "GB=22", "--country", "de=20"]);
        let table = build_table(&cli).unwrap();
        assert_eq!(table.expected_length("GB"), Some(22));
        assert_eq!(table.expected_length("DE"), Some(20));
        assert_eq!(table.expected_length("FR"), Some(27));
    }

    #[test]
    fn only_countries_starts_empty() {
        let cli = parse(&["--only-countries", "--country", "GB=22"]);
        let table = build_table(&cli).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.expected_length("DE"), None);
    }

    #[test]
    fn malformed_country_override_is_a_parse_error() {
        assert!(Cli::try_parse_from(["iban-checker", "--country", "GB22"]).is_err());
        assert!(Cli::try_parse_from(["iban-checker", "--country", "G1=22"]).is_err());
    }

    #[test]
    fn too_short_override_length_is_rejected() {
        let cli = parse(&["--country", "GB=2"]);
        assert!(build_table(&cli).is_err());
    }

    #[test]
    fn verdict_line_echoes_input() {
        assert_eq!(
            verdict_line("DE22 7902 0076 0027 9131 68", true),
            "IBAN DE22 7902 0076 0027 9131 68 -> valid"
        );
        assert_eq!(verdict_line("XX00", false), "IBAN XX00 -> invalid");
    }
}
