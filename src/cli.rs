use crate::*;
use clap::Parser;
use std::fmt::Write;
use std::io::IsTerminal;

/// Play repeated rounds of the three-door game and compare staying with switching.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Number of rounds to play
    #[arg(short = 'n', long, default_value_t = DEFAULT_GAMES)]
    pub games: usize,
    /// Seed for reproducible runs; random when omitted
    #[arg(short, long)]
    pub seed: Option<Seed>,
    /// Print the summary as JSON instead of a table
    #[arg(long)]
    pub json: bool,
    /// Also print every round result in generation order
    #[arg(long)]
    pub records: bool,
    /// Trace the first round of the trial step by step
    #[arg(long)]
    pub show_round: bool,
}

impl Args {
    pub fn run(self) -> anyhow::Result<()> {
        if !std::io::stdout().is_terminal() {
            colored::control::set_override(false);
        }
        print!("{}", self.render()?);
        Ok(())
    }

    /// Everything the run writes to stdout. In JSON mode that is a
    /// single document and nothing else.
    pub fn render(&self) -> anyhow::Result<String> {
        let seed = self.seed.unwrap_or_else(rand::random);
        let trial = Trial::play_n_games(self.games, seed)?;
        let round = match self.show_round {
            true => Some(Round::play_game(&mut Trial::rng(seed, 0))?),
            false => None,
        };
        let summary = trial.summary();
        if self.json {
            let report = Report {
                seed: trial.seed(),
                games: trial.games(),
                summary,
                win_rate: [
                    (Strategy::Stay, summary.win_rate(Strategy::Stay)),
                    (Strategy::Switch, summary.win_rate(Strategy::Switch)),
                ],
                round,
                records: self.records.then(|| trial.records().to_vec()),
            };
            return Ok(serde_json::to_string_pretty(&report)? + "\n");
        }
        let ref mut out = String::new();
        if let Some(round) = round {
            writeln!(out, "{}", round)?;
        }
        if self.records {
            for (i, record) in trial.records().iter().enumerate() {
                writeln!(out, "{:>8} {}", i / 2 + 1, record)?;
            }
        }
        write!(out, "{}", summary)?;
        writeln!(
            out,
            "switching wins {:+.*} more often than staying (seed {})",
            DISPLAY_PRECISION,
            summary.advantage(),
            trial.seed()
        )?;
        Ok(std::mem::take(out))
    }
}

#[derive(serde::Serialize)]
struct Report {
    seed: Seed,
    games: usize,
    summary: Summary,
    win_rate: [(Strategy, Probability); 2],
    #[serde(skip_serializing_if = "Option::is_none")]
    round: Option<Round>,
    #[serde(skip_serializing_if = "Option::is_none")]
    records: Option<Vec<Record>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("monty").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn defaults_to_hundred_games() {
        let args = args(&[]);
        assert_eq!(args.games, DEFAULT_GAMES);
        assert_eq!(args.seed, None);
        assert!(!args.json);
    }

    #[test]
    fn parses_flags() {
        let args = args(&["-n", "5000", "--seed", "9", "--json"]);
        assert_eq!(args.games, 5000);
        assert_eq!(args.seed, Some(9));
        assert!(args.json);
    }

    #[test]
    fn zero_games_fails_at_run() {
        assert!(args(&["-n", "0", "-s", "1"]).run().is_err());
    }

    #[test]
    fn json_output_is_one_document() {
        let out = args(&["-n", "3", "-s", "1", "--json"]).render().unwrap();
        let json = serde_json::from_str::<serde_json::Value>(&out).unwrap();
        assert_eq!(json["games"], 3);
        assert_eq!(json["seed"], 1);
        assert!(json.get("records").is_none());
        assert!(json.get("round").is_none());
        assert_eq!(
            json["summary"]["stay"]["wins"].as_u64().unwrap()
                + json["summary"]["switch"]["wins"].as_u64().unwrap(),
            3
        );
    }

    #[test]
    fn json_carries_records_and_round() {
        let out = args(&["-n", "4", "-s", "2", "--json", "--records", "--show-round"])
            .render()
            .unwrap();
        let json = serde_json::from_str::<serde_json::Value>(&out).unwrap();
        let records = json["records"].as_array().unwrap();
        assert_eq!(records.len(), 8);
        assert_eq!(records[0]["strategy"], "stay");
        assert_eq!(records[1]["strategy"], "switch");
        let pick = json["round"]["pick"].as_u64().unwrap();
        assert!((1..=3).contains(&pick));
        assert_eq!(json["round"]["arrangement"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn traced_round_is_the_first_of_the_trial() {
        let out = args(&["-n", "5", "-s", "3", "--json", "--records", "--show-round"])
            .render()
            .unwrap();
        let json = serde_json::from_str::<serde_json::Value>(&out).unwrap();
        assert_eq!(json["round"]["stay"], json["records"][0]["outcome"]);
        assert_eq!(json["round"]["switch"], json["records"][1]["outcome"]);
        let trial = Trial::play_n_games(5, 3).unwrap();
        let round = Round::play_game(&mut Trial::rng(3, 0)).unwrap();
        assert_eq!(&round.records()[..], &trial.records()[..2]);
    }

    #[test]
    fn table_without_color_has_no_escapes() {
        colored::control::set_override(false);
        let out = args(&["-n", "6", "-s", "4", "--records"]).render().unwrap();
        assert!(!out.contains('\x1b'));
        assert!(out.contains("proportion"));
        assert_eq!(out.lines().filter(|l| l.ends_with("WIN") || l.ends_with("LOSE")).count(), 12);
    }
}
