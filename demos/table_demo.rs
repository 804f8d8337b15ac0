// Runnable usage example for `robin_table::Table` — not part of the
// library's public contract, just a demonstration of the CRUD and
// enumeration surface.

use robin_table::Table;
use tracing::info;

fn main() {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let mut scores = Table::new();
    info!(capacity = scores.capacity(), "created table");

    for (name, score) in [("alice", 91), ("bob", 77), ("carol", 88)] {
        scores.insert(name, score);
    }
    info!(size = scores.size(), render = %scores, "inserted three entries");

    if let Some(score) = scores.get("bob") {
        info!(score, "looked up bob");
    }

    scores.remove("bob");
    info!(present = scores.contains_key("bob"), "removed bob");

    let mut ids = Table::with_capacity(8);
    for i in 0..50i64 {
        ids.insert(i, i * i);
    }
    info!(
        capacity = ids.capacity(),
        size = ids.size(),
        "grew a separate table past its initial capacity"
    );

    println!("{}", scores);
}
