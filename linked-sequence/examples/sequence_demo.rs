//! Linked Sequence Demonstration
//!
//! Walks through positional editing, cursors, value semantics and the
//! fallible API of `LinkedSequence`.
//!
//! Run with: cargo run --example sequence_demo

use linked_sequence::{LinkedSequence, SequenceError};

fn main() {
    println!("=== Linked Sequence ===\n");

    // =========================================================================
    // Front insertion and positional editing
    // =========================================================================
    println!("Front insertion and positional editing");
    println!("{}", "=".repeat(60));

    let mut seq = LinkedSequence::new();
    for word in ["fox", "brown", "quick", "the"] {
        seq.push_front(word);
    }
    println!("  After push_front x4: {:?}", seq);

    let quick = seq.next_position(seq.begin());
    seq.insert_after(quick, "very");
    println!("  Insert after \"quick\": {:?}", seq);

    let removed = seq.remove_after(quick);
    println!("  Remove it again: {:?} -> {:?}", removed, seq);

    // =========================================================================
    // Cursors
    // =========================================================================
    println!("\n\nCursors");
    println!("{}", "=".repeat(60));

    let mut numbers = LinkedSequence::from([1, 2, 3, 4, 5, 6]);
    let mut cursor = numbers.cursor_mut();
    // Drop every even number by looking one step ahead.
    while let Some(next) = cursor.peek_next().copied() {
        if next % 2 == 0 {
            cursor.erase_after();
        } else {
            cursor.move_next();
        }
    }
    println!("  Odd numbers only: {:?}", numbers);

    // =========================================================================
    // Value semantics
    // =========================================================================
    println!("\n\nValue semantics");
    println!("{}", "=".repeat(60));

    let original = LinkedSequence::from([1, 2, 3]);
    let mut copy = original.clone();
    copy.push_front(0);
    println!("  original = {:?}, copy = {:?}", original, copy);
    println!("  original < copy? {}", original < copy);

    let mut target = LinkedSequence::from([9, 9]);
    target.clone_from(&original);
    println!("  after clone_from: {:?}", target);

    target.swap(&mut copy);
    println!("  after swap: target = {:?}, copy = {:?}", target, copy);

    // =========================================================================
    // Fallible API
    // =========================================================================
    println!("\n\nFallible API");
    println!("{}", "=".repeat(60));

    let mut small = LinkedSequence::from(['a']);
    let end = small.end();
    match small.try_insert_after(end, 'b') {
        Err(SequenceError::PastTheEnd) => println!("  insert after end rejected"),
        other => println!("  unexpected: {:?}", other),
    }
    let last = small.begin();
    match small.remove_after(last) {
        Err(err) => println!("  remove after last rejected: {err}"),
        Ok(value) => println!("  unexpected removal of {value}"),
    }
}
