//! Autocomplete example for placedb-rs
//!
//! Simulates a user typing "Bangkok" one key at a time, then a few typos,
//! against the embedded dataset.

use placedb_core::{PlaceIndex, PlaceSearch, Result};
use std::sync::Arc;
use std::thread;

fn main() -> Result<()> {
    println!("=== placedb-rs Autocomplete Example ===\n");

    let index = PlaceIndex::embedded()?;
    println!("Loaded {} places\n", index.count());

    println!("--- Example 1: Typing a name ---");
    let word = "Bangkok";
    for end in 1..=word.len() {
        let typed = &word[..end];
        let names: Vec<String> = index
            .search(typed)
            .iter()
            .map(|p| format!("{} ({})", p.name(), p.kind()))
            .collect();
        println!("  {typed:<8} -> {}", names.join(", "));
    }
    println!();

    println!("--- Example 2: Typos near the end ---");
    for typo in ["bangkox", "portlanx", "londn", "bankok"] {
        let names: Vec<&str> = index.search(typo).iter().map(|p| p.name()).collect();
        println!("  {typo:<8} -> {names:?}");
    }
    println!();

    println!("--- Example 3: Lookup by id ---");
    for id in ["TH-1609350", "US.CA", "XX-404"] {
        match index.get_by_id(id) {
            Some(p) => println!("  {id}: {} ({})", p.name(), p.country),
            None => println!("  {id}: not found"),
        }
    }
    println!();

    println!("--- Example 4: Sharing across threads ---");
    let shared = Arc::new(PlaceIndex::build(index.places().to_vec()));
    let handles: Vec<_> = ["par", "tok", "new"]
        .into_iter()
        .map(|q| {
            let shared = Arc::clone(&shared);
            thread::spawn(move || (q, shared.search(q).len()))
        })
        .collect();
    for h in handles {
        if let Ok((q, n)) = h.join() {
            println!("  {q}: {n} hits");
        }
    }

    Ok(())
}
