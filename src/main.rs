//! levelbook - demo binary
//!
//! Replays a short scripted feed into a book and logs top of book after
//! each step. Set `RUST_LOG=levelbook=trace` to see every index update.

use levelbook::{Book, BookConfig, BookError, Order};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn log_top(book: &Book) {
    let bid = book.top_bid().map(|level| (level.price(), level.total()));
    let ask = book.top_ask().map(|level| (level.price(), level.total()));
    info!(
        sequence = book.sequence(),
        ?bid,
        ?ask,
        spread = ?book.spread(),
        "top of book"
    );
}

fn main() -> Result<(), BookError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut book = Book::with_config(BookConfig::default());

    // Each step advances the feed sequence and the placement clock (ns)
    let mut clock = 1_703_577_600_000_000_000u64;
    let mut tick = |sequence: u64, book: &mut Book| {
        clock += 1_000;
        book.set_sequence(sequence);
        clock
    };

    let ts = tick(1, &mut book);
    book.put_bid(Order::new("bid-1", 100, ts), 49_990);
    let ts = tick(2, &mut book);
    book.put_bid(Order::new("bid-2", 250, ts), 49_995);
    let ts = tick(3, &mut book);
    book.put_ask(Order::new("ask-1", 80, ts), 50_005);
    let ts = tick(4, &mut book);
    book.put_ask(Order::new("ask-2", 120, ts), 50_005);
    log_top(&book);

    let ts = tick(5, &mut book);
    book.modify_ask(Order::new("ask-1", 40, ts), 50_005)?;
    log_top(&book);

    tick(6, &mut book);
    book.remove_bid("bid-2")?;
    log_top(&book);

    // A feed replaying a cancel it already applied
    tick(7, &mut book);
    if let Err(err) = book.remove_bid("bid-2") {
        warn!(%err, "duplicate cancel ignored");
    }

    info!(state_root = %hex::encode(book.state_root()), "final state");
    Ok(())
}
