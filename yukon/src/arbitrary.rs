use quickcheck::{Arbitrary, Gen};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::{Board, Card, GameConfig, GameSession, Lookup, Rank, Suit, TableauRule};

/// A command string with the right shape, which may name piles that do not exist.
#[derive(Clone, Debug)]
pub struct CommandInput {
    pub text: String,
    locations: [(char, u32); 2],
}

impl CommandInput {
    /// Do both piles exist?
    pub fn is_valid(&self) -> bool {
        self.locations.iter().all(|&(tab, index)| match tab {
            'C' => (1..=7).contains(&index),
            'F' => (1..=4).contains(&index),
            _ => false,
        })
    }
}

fn arbitrary_location(g: &mut Gen) -> (char, u32) {
    // Mostly columns, since that's where the cards are
    let tab = *g.choose(&['C', 'C', 'C', 'F', 'X']).unwrap();
    let index = u32::from(u8::arbitrary(g) % 9);
    (tab, index)
}

impl Arbitrary for CommandInput {
    fn arbitrary(g: &mut Gen) -> Self {
        let source = arbitrary_location(g);
        let dest = arbitrary_location(g);
        let card = if bool::arbitrary(g) {
            format!(":{}", Card::arbitrary(g).code())
        } else {
            String::new()
        };
        let text = format!("{}{}{}->{}{}", source.0, source.1, card, dest.0, dest.1);
        CommandInput {
            text,
            locations: [source, dest],
        }
    }
}

/// A board reached by dealing a random deck and playing a few random commands.
#[derive(Clone, Debug)]
pub struct DealtBoard {
    pub board: Board,
    pub config: GameConfig,
}

impl Arbitrary for DealtBoard {
    fn arbitrary(g: &mut Gen) -> Self {
        let config = GameConfig::arbitrary(g);
        let mut rng = StdRng::seed_from_u64(u64::arbitrary(g));
        let mut session = GameSession::new(config, &mut rng).expect("A full deck can be dealt");
        for _ in 0..g.size() {
            let _ = session.submit(&CommandInput::arbitrary(g).text);
        }
        DealtBoard {
            board: session.board().clone(),
            config,
        }
    }
}

impl Arbitrary for GameConfig {
    fn arbitrary(g: &mut Gen) -> Self {
        GameConfig {
            tableau_rule: *g
                .choose(&[TableauRule::AlternatingColor, TableauRule::DifferentSuit])
                .unwrap(),
            lookup: *g.choose(&[Lookup::Lenient, Lookup::Strict]).unwrap(),
            face_down_deal: bool::arbitrary(g),
        }
    }
}

impl Arbitrary for Suit {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&Suit::ALL).unwrap()
    }
}

impl Arbitrary for Rank {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&Rank::ALL).unwrap()
    }
}

impl Arbitrary for Card {
    fn arbitrary(g: &mut Gen) -> Self {
        Card::new(Rank::arbitrary(g), Suit::arbitrary(g))
    }
}
