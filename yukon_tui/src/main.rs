use std::io::stdout;
use std::time::Duration;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{
    crossterm::{
        event::{self, DisableMouseCapture, EnableMouseCapture, Event},
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
        ExecutableCommand,
    },
    prelude::*,
};
use yukon::{GameConfig, GameSession, Lookup, TableauRule};

use crate::app::App;

mod app;
mod widgets;

#[derive(Parser)]
struct Args {
    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// Deal the lower cards of each column face down
    #[arg(long, default_value_t = false)]
    face_down: bool,

    /// Reject commands that name a card which is not in the pile
    #[arg(long, default_value_t = false)]
    strict: bool,

    /// Allow any different suit in columns instead of alternating colors
    #[arg(long, default_value_t = false)]
    different_suit: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(rand::random);
    let config = GameConfig {
        tableau_rule: if args.different_suit {
            TableauRule::DifferentSuit
        } else {
            TableauRule::AlternatingColor
        },
        lookup: if args.strict { Lookup::Strict } else { Lookup::Lenient },
        face_down_deal: args.face_down,
    };
    let session = GameSession::new(config, &mut StdRng::seed_from_u64(seed))?;
    let mut app = App::new(session);

    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    stdout().execute(EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let result = run(&mut terminal, &mut app);

    stdout().execute(DisableMouseCapture)?;
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;
    result?;

    println!("Seed: {}", seed);
    if app.session.is_won() {
        println!("You have won.");
    }
    Ok(())
}

fn run<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> anyhow::Result<()> {
    while !app.should_quit {
        terminal.draw(|frame| app.ui(frame))?;
        if event::poll(Duration::from_millis(16))? {
            match event::read()? {
                Event::Key(key) => app.handle_key(key),
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                _ => {}
            }
        }
    }
    Ok(())
}
