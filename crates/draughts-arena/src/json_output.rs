//! JSON export of match reports.
//!
//! The report holds both difficulties, the tally, and every game with its
//! seed, result and turn-by-turn move notation:
//!
//! ```json
//! {
//!   "light": "hard",
//!   "dark": "easy",
//!   "max_plies": 200,
//!   "summary": { "light_wins": 1, "dark_wins": 0, "draws": 0 },
//!   "games": [
//!     {
//!       "seed": 7,
//!       "result": "light",
//!       "plies": 57,
//!       "turns": [
//!         { "side": "light", "moves": ["50-41"], "captures": 0, "promoted": false }
//!       ],
//!       "final_board": "..."
//!     }
//!   ]
//! }
//! ```

use crate::game_runner::MatchReport;
use std::path::Path;

/// Writes `report` to `path` as pretty-printed JSON.
pub fn write_json<P: AsRef<Path>>(path: P, report: &MatchReport) -> std::io::Result<()> {
    let file = std::fs::File::create(path)?;
    serde_json::to_writer_pretty(file, report)?;
    Ok(())
}
