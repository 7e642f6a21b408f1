// RandNote CLI entry point.
//
// A terminal front end for the drill. Each invocation opens the persisted
// session, performs one action, and exits; the session writes whatever it
// changed. Set RUST_LOG=debug to watch pool sizes and draws.
//
// Usage:
//   randnote [--data-dir DIR] [--seed N] <COMMAND>
//
// Commands: draw, show, pool, reset, settings, set <FIELD> <VALUE>

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use randnote_core::display::{render_history, render_sample, sample_letters};
use randnote_core::persist::serialize_settings;
use randnote_core::store::FileStore;
use randnote_core::{NameRelation, Pitch, SampleDisplayStyle, Session, SettingsEdit};
use randnote_prng::DrillRng;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "randnote")]
#[command(version, about = "Random note-identification drill", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Directory holding settings and history (default: platform data dir)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Seed for the random source (default: clock)
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Command {
    /// Draw the next note and add it to history
    Draw,
    /// Show the current note and history
    Show,
    /// List every note that could be drawn next
    Pool,
    /// Clear history and start a new round
    Reset,
    /// Print the current settings as JSON
    Settings,
    /// Change one setting
    Set {
        #[command(subcommand)]
        field: SetField,
    },
}

#[derive(Subcommand)]
enum SetField {
    NaturalsOnly {
        #[arg(action = ArgAction::Set)]
        value: bool,
    },
    AllowRepeats {
        #[arg(action = ArgAction::Set)]
        value: bool,
    },
    ShowEquivalents {
        #[arg(action = ArgAction::Set)]
        value: bool,
    },
    ShowOctave {
        #[arg(action = ArgAction::Set)]
        value: bool,
    },
    OctaveSensitive {
        #[arg(action = ArgAction::Set)]
        value: bool,
    },
    /// How names are compared: identical, enharmonic, letter
    Relation { value: RelationArg },
    /// letters, staff, staff-and-letters
    Style { value: StyleArg },
    /// Lowest drawable pitch, e.g. C3 or F#2
    MinPitch { value: Pitch },
    /// Highest drawable pitch, e.g. B5
    MaxPitch { value: Pitch },
}

#[derive(Clone, Copy, ValueEnum)]
enum RelationArg {
    Identical,
    Enharmonic,
    Letter,
}

#[derive(Clone, Copy, ValueEnum)]
enum StyleArg {
    Letters,
    Staff,
    StaffAndLetters,
}

impl From<RelationArg> for NameRelation {
    fn from(arg: RelationArg) -> Self {
        match arg {
            RelationArg::Identical => NameRelation::Identical,
            RelationArg::Enharmonic => NameRelation::Enharmonic,
            RelationArg::Letter => NameRelation::Letter,
        }
    }
}

impl From<StyleArg> for SampleDisplayStyle {
    fn from(arg: StyleArg) -> Self {
        match arg {
            StyleArg::Letters => SampleDisplayStyle::Letters,
            StyleArg::Staff => SampleDisplayStyle::Staff,
            StyleArg::StaffAndLetters => SampleDisplayStyle::StaffAndLetters,
        }
    }
}

impl From<SetField> for SettingsEdit {
    fn from(field: SetField) -> Self {
        match field {
            SetField::NaturalsOnly { value } => SettingsEdit::NaturalsOnly(value),
            SetField::AllowRepeats { value } => SettingsEdit::AllowRepeats(value),
            SetField::ShowEquivalents { value } => SettingsEdit::DisplayEquivalentNoteNames(value),
            SetField::ShowOctave { value } => SettingsEdit::DisplayOctave(value),
            SetField::OctaveSensitive { value } => SettingsEdit::OctaveSensitive(value),
            SetField::Relation { value } => SettingsEdit::NameRelation(value.into()),
            SetField::Style { value } => SettingsEdit::DisplayStyle(value.into()),
            SetField::MinPitch { value } => SettingsEdit::MinPitch(value),
            SetField::MaxPitch { value } => SettingsEdit::MaxPitch(value),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let store = match cli.data_dir {
        Some(dir) => FileStore::new(dir),
        None => FileStore::in_default_dir().context("no place to keep drill state")?,
    };
    log::debug!("using data directory {}", store.dir().display());
    let mut session = Session::open(store);

    match cli.command {
        Command::Draw => {
            let mut rng = match cli.seed {
                Some(seed) => DrillRng::new(seed),
                None => DrillRng::from_clock(),
            };
            let settings = session.state().settings;
            match session.draw(&mut rng) {
                Some(sample) => println!("{}", render_sample(sample, &settings)),
                None => println!("No notes left. Run `randnote reset` to start over."),
            }
            if session.state().is_round_over() {
                println!("(last note of the round)");
            }
        }
        Command::Show => {
            let state = session.state();
            match state.current() {
                Some(sample) => println!("Current: {}", sample_letters(sample, &state.settings)),
                None => println!("Current: -"),
            }
            println!("History ({}):", state.history.len());
            if !state.history.is_empty() {
                println!("{}", render_history(&state.history, &state.settings));
            }
            println!("{} notes left in the pool", state.pool().len());
        }
        Command::Pool => {
            let state = session.state();
            let pool = state.pool();
            let names: Vec<String> = pool.iter().map(|s| s.to_string()).collect();
            println!("{} eligible: {}", pool.len(), names.join(" "));
        }
        Command::Reset => {
            if session.reset() {
                println!("History cleared.");
            } else {
                println!("History was already empty.");
            }
        }
        Command::Settings => {
            println!("{}", serialize_settings(&session.state().settings));
        }
        Command::Set { field } => match session.edit(field.into()) {
            Ok(true) => println!("Saved."),
            Ok(false) => println!("Unchanged."),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        },
    }

    Ok(())
}
