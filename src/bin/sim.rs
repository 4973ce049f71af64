use serde_json::json;
use tictactoe::{init_logging, GameEngine, GameStatus};

/// Play the move tokens given on the command line, X first, and print the
/// outcome as one JSON object.
fn main() -> anyhow::Result<()> {
    init_logging(None);
    let moves: Vec<String> = std::env::args().skip(1).collect();
    if moves.is_empty() {
        eprintln!("Usage: sim <move> [<move> ...]   (moves are a1..c3, X plays first)");
        std::process::exit(1);
    }

    let mut engine = GameEngine::new();
    let mut rejected = None;
    for raw in &moves {
        if let Err(err) = engine.play(raw) {
            rejected = Some(json!({"move": raw, "error": err.to_string()}));
            break;
        }
        if engine.status() != GameStatus::InProgress {
            break;
        }
    }

    let status = engine.status();
    let result = json!({
        "moves": moves,
        "applied": engine.move_count(),
        "status": status,
        "winner": status.winner(),
        "rejected": rejected,
        "board": engine.board().format(),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
