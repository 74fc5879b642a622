// src/bin/poker_dev_cli_heads_up.rs
//
// Неинтерактивный прогон раундов хедз-ап: раздача, автосброс, добор,
// оценка, вердикт. Первый аргумент: путь к JSON-конфигу (необязателен).

use std::process::ExitCode;

use draw_poker_engine::domain::Deck;
use draw_poker_engine::engine::{play_heads_up, DeckError, RoundError, RoundReport};
use draw_poker_engine::infra::{AnyRng, DevConfig};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cfg = match std::env::args().nth(1) {
        Some(path) => match DevConfig::load(&path) {
            Ok(cfg) => cfg,
            Err(err) => {
                error!(%err, "конфиг не загружен");
                return ExitCode::FAILURE;
            }
        },
        None => DevConfig::default(),
    };

    info!(?cfg, "poker_dev_cli_heads_up: стартуем");
    println!("=== FIVE CARD DRAW: HEADS-UP DEV CLI ===\n");

    let mut rng = AnyRng::from_optional_seed(cfg.seed);
    let mut deck = Deck::new(&mut rng);

    let mut played = 0;
    while played < cfg.rounds {
        if deck.count() < cfg.min_cards_for_round {
            println!("Not enough cards to start new game. Reshuffling deck.\n");
            deck = Deck::new(&mut rng);
        }

        match play_heads_up(&mut deck, cfg.discard_strategy) {
            Ok(report) => {
                played += 1;
                print_round(played, &report);
                println!("{deck}\n");
            }
            Err(RoundError::Deck(DeckError::InsufficientCards { requested, remaining })) => {
                warn!(requested, remaining, "колода кончилась посреди раунда, раунд переигрывается");
                println!("Deck is out of cards. Reshuffling deck and restarting game.\n");
                deck = Deck::new(&mut rng);
            }
            Err(err) => {
                error!(%err, "раунд прерван");
                return ExitCode::FAILURE;
            }
        }
    }

    info!(rounds = played, "[CLI] Завершение работы dev-CLI");
    ExitCode::SUCCESS
}

fn print_round(number: u32, report: &RoundReport) {
    println!("================ ROUND {number} ================");
    println!("Player 1:\n{}", report.first.hand);
    println!("{}\n", report.first.category);
    println!("Player 2:\n{}", report.second.hand);
    println!("{}\n", report.second.category);
    println!("{}", report.outcome.announce());
}
