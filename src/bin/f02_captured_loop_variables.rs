//! Footgun 2: Loop Variables, References and Copies
//! What a loop hands you decides whether changes reach the original.
//!
//! Iterating `&items` yields references into the vector; each one has its own
//! address. `.cloned()` yields owned copies, and `iter_mut()` yields the only
//! handle that can change the vector in place. The borrow checker makes the
//! shared-loop-variable surprise impossible; what is left to learn is which of
//! the three you asked for.
//!
//! Run with: cargo run --bin f02_captured_loop_variables

use std::thread;

use lessons::section;

const ORIGINAL: [&str; 3] = ["one", "two", "three"];

fn print_items(label: &str, items: &[&String]) {
    println!("{}: {:?}", label, items);
    for (i, item) in items.iter().enumerate() {
        println!("index: {}\tvalue: {}\tpoints to: {:p}", i, item, *item);
    }
}

/// References collected in a loop point at the vector's own elements.
fn borrowing_in_a_loop(items: &[String]) -> Vec<*const String> {
    let mut borrowed: Vec<&String> = Vec::new();

    for (i, item) in items.iter().enumerate() {
        println!(
            "index: {}\tvalue: {}\titem location: {:p}\tlist location: {:p}",
            i, item, item, &items[i]
        );
        borrowed.push(item);
    }

    print_items("Borrowed items", &borrowed);
    // `*borrowed[0] = ...` would not compile: these are shared borrows.
    borrowed.iter().map(|item| *item as *const String).collect()
}

/// Cloning in the loop gives each copy its own storage.
fn copying_in_a_loop(items: &[String]) -> bool {
    let mut copies: Vec<String> = Vec::new();

    for (i, item) in items.iter().cloned().enumerate() {
        println!("index: {}\tvalue: {}\tcopy location: {:p}", i, item, &item);
        copies.push(item);
    }

    copies[0] = "hello".to_string();
    print_items("Copied items", &copies.iter().collect::<Vec<_>>());

    let changed = items[0] == copies[0];
    println!(
        "value: {}\tlist location: {:p}\tunderlying vec changed? {}",
        items[0], &items[0], changed
    );
    changed
}

/// Changing the loop variable only changes the vector when the loop borrowed
/// it mutably.
fn mutating_the_vec(items: &mut [String]) {
    for (i, mut item) in items.iter().cloned().enumerate() {
        item.push_str("-hello");
        println!("index: {}\tvalue: {}\titem location: {:p}", i, item, &item);
    }
    // Nothing happened to the vector: every `item` was a copy.
    is_mutated(items);

    for (i, item) in items.iter_mut().enumerate() {
        item.push_str("-hello");
        println!("index: {}\tvalue: {}\titem location: {:p}", i, item, item);
    }
    is_mutated(items);
}

/// A `move` closure owns what it captures. Each thread gets its own value,
/// taken at the moment the closure was created.
fn move_capture(items: &[String]) -> Vec<String> {
    let handles: Vec<_> = items
        .iter()
        .cloned()
        .map(|item| thread::spawn(move || format!("{} from its own thread", item)))
        .collect();

    handles
        .into_iter()
        .filter_map(|handle| handle.join().ok())
        .collect()
}

fn is_mutated(items: &[String]) -> bool {
    let mutated = items[0] != ORIGINAL[0];
    println!("Is mutated? {}", mutated);
    mutated
}

fn reset(items: &mut [String]) {
    for (item, original) in items.iter_mut().zip(ORIGINAL) {
        *item = original.to_string();
    }
}

fn main() {
    lessons::telemetry::init();

    let mut items: Vec<String> = ORIGINAL.iter().map(|s| s.to_string()).collect();

    section("Borrowing in a loop");
    borrowing_in_a_loop(&items);

    section("Copying in a loop");
    copying_in_a_loop(&items);
    is_mutated(&items);

    section("Mutating the vec");
    mutating_the_vec(&mut items);
    is_mutated(&items);
    reset(&mut items);

    section("Capturing with move");
    for line in move_capture(&items) {
        println!("{}", line);
    }

    println!("\n=== Key Points ===");
    println!("1. for x in &v yields references, each to its own element");
    println!("2. .cloned() yields copies; changing them leaves v alone");
    println!("3. Only iter_mut() (or indexing through &mut) changes v in place");
    println!("4. move closures own their captures, so threads never share a loop variable");
}
