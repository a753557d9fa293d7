use atomic_core::{legal_move_codes, parse_fen, side_name, terminal_state};
use atomic_puzzler::{
    acquire_atomic_puzzle, acquire_puzzle, AcquireParams, Acquisition, MoveVerdict, PlyRange,
    Puzzle, PuzzleError,
};
use axum::{extract::Query, Extension, Json};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Deserialize;
use serde_json::Value as JsonValue;
use shakmaty::variant::Atomic;
use shakmaty::Position;

use crate::config::Config;
use crate::error::AppError;

#[derive(Deserialize)]
pub struct NewPuzzleQuery {
    pub min_ply: Option<u32>,
    pub max_ply: Option<u32>,
    pub max_attempts: Option<u32>,
    /// Reproduce a puzzle stream
    pub seed: Option<u64>,
}

/// GET /api/puzzles/new?min_ply=10&max_ply=50&max_attempts=1000
/// Generate a fresh puzzle. Solutions stay on the server; answers go
/// through /api/puzzles/check.
pub async fn new_puzzle(
    Extension(config): Extension<Config>,
    Query(q): Query<NewPuzzleQuery>,
) -> Result<Json<JsonValue>, AppError> {
    let min_ply = q.min_ply.unwrap_or(config.min_ply);
    let max_ply = q.max_ply.unwrap_or(config.max_ply);
    if max_ply > config.ply_cap {
        return Err(AppError::BadRequest(format!(
            "max_ply may not exceed {}",
            config.ply_cap
        )));
    }

    let params = AcquireParams {
        plies: PlyRange::new(min_ply, max_ply)?,
        max_attempts: q
            .max_attempts
            .unwrap_or(config.max_attempts)
            .min(config.attempt_cap),
        time_budget: config.time_budget,
    };
    let seed = q.seed;

    // CPU-bound; keep it off the async workers
    let acquisition = tokio::task::spawn_blocking(move || match seed {
        Some(seed) => acquire_puzzle::<Atomic, _>(&params, &mut StdRng::seed_from_u64(seed)),
        None => acquire_atomic_puzzle(&params),
    })
    .await
    .map_err(|e| AppError::Internal(format!("Puzzle worker failed: {e}")))?;

    match acquisition {
        Acquisition::Found { puzzle, stats } => Ok(Json(serde_json::json!({
            "fen": puzzle.fen(),
            "side_to_move": puzzle.side_to_move(),
            "plies": puzzle.plies(),
            "legal_moves": puzzle.legal_moves(),
            "solution_count": puzzle.winning_moves().len(),
            "attempts": stats.attempts,
        }))),
        Acquisition::NotFound { stats } => {
            tracing::info!(attempts = stats.attempts, "Puzzle request exhausted");
            Err(AppError::NotFound(format!(
                "No puzzle found after {} attempts, try again",
                stats.attempts
            )))
        }
    }
}

#[derive(Deserialize)]
pub struct ScanBody {
    pub fen: String,
}

/// POST /api/puzzles/scan
/// All mating moves of a position; empty when there are none.
pub async fn scan_position(Json(body): Json<ScanBody>) -> Result<Json<JsonValue>, AppError> {
    let winning_moves: Vec<String> = match Puzzle::from_fen(&body.fen)? {
        Some(puzzle) => puzzle.winning_moves().iter().cloned().collect(),
        None => Vec::new(),
    };

    Ok(Json(serde_json::json!({
        "fen": body.fen,
        "winning_moves": winning_moves,
    })))
}

#[derive(Deserialize)]
pub struct CheckBody {
    pub fen: String,
    #[serde(rename = "move")]
    pub mv: String,
}

/// POST /api/puzzles/check
/// Grade an answer. The position is rescanned, so any puzzle FEN works.
pub async fn check_move(Json(body): Json<CheckBody>) -> Result<Json<JsonValue>, AppError> {
    let puzzle = Puzzle::from_fen(&body.fen)?
        .ok_or_else(|| AppError::BadRequest("Position has no mate in one".to_string()))?;

    let verdict = puzzle.check_move(&body.mv)?;
    let correct = verdict == MoveVerdict::Solved;
    let message = match verdict {
        MoveVerdict::Solved => format!("{} is checkmate!", body.mv.trim()),
        MoveVerdict::Wrong => "That move does not mate.".to_string(),
        MoveVerdict::Illegal => "That move is not legal here.".to_string(),
    };

    let mut response = serde_json::json!({
        "move": body.mv.trim(),
        "verdict": verdict,
        "correct": correct,
        "message": message,
    });
    // Reveal the full solution set only once solved
    if correct {
        response["solutions"] = serde_json::json!(puzzle.winning_moves());
    }

    Ok(Json(response))
}

#[derive(Deserialize)]
pub struct MovesQuery {
    pub fen: String,
}

/// GET /api/puzzles/moves?fen=...
/// Sorted legal moves for a move picker.
pub async fn legal_moves(Query(q): Query<MovesQuery>) -> Result<Json<JsonValue>, AppError> {
    let pos: Atomic = parse_fen(&q.fen).map_err(PuzzleError::from)?;

    Ok(Json(serde_json::json!({
        "fen": q.fen,
        "side_to_move": side_name(pos.turn()),
        "legal_moves": legal_move_codes(&pos),
        "terminal": terminal_state(&pos),
    })))
}
