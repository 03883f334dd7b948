//! Exercises every public deque operation and prints the results, one deque
//! per line, elements separated by a single space.
//!
//! With the `tracing-subscriber` feature, events are printed to stderr,
//! filtered by `RUST_LOG` (for example `RUST_LOG=linked_deque=trace`).

use linked_deque::Deque;
use std::fmt::Display;

fn print<T: Display>(deque: &Deque<T>) {
    println!("{}", deque);
}

fn sum<T: Clone>(a: &Deque<T>, b: &Deque<T>) -> Deque<T> {
    a + b
}

#[cfg(feature = "tracing-subscriber")]
fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(not(feature = "tracing-subscriber"))]
fn init_tracing() {}

fn main() {
    init_tracing();

    let d1 = Deque::<i32>::new();
    println!("Empty deque:");
    print(&d1);
    println!();

    let mut d2: Deque<i32> = Deque::from([0, 1, 2, 3, 4]);
    println!("Literal constructor:");
    print(&d2);
    println!();

    println!("Clone:");
    let mut d3 = d2.clone();
    print(&d2);
    print(&d3);
    println!();

    println!("Move:");
    let d4 = sum(&d2, &d3);
    print(&d4);
    println!();

    println!("Clone assignment:");
    d3.clone_from(&d2);
    print(&d2);
    print(&d3);
    println!();

    println!("Move assignment:");
    d3 = sum(&d2, &d3);
    print(&d3);
    println!();

    println!("Operator +:");
    d2 = Deque::from([0, 1, 2, 3, 4]);
    d3.clone_from(&d2);
    let mut snapshot = d2.clone();
    print(&(&d2 + &d2));
    d2 += &d3;
    print(&d2);
    d2 += Deque::from([1, 1, 1, 0]);
    print(&d2);
    println!();

    println!("concat_self and splice:");
    snapshot.concat_self();
    print(&snapshot);
    snapshot.splice(Deque::from([2, 2, 2, 0]));
    print(&snapshot);
    println!();

    println!("Operator + with an element:");
    let d5 = Deque::from([1, 2, 3, 4]);
    let five: i32 = 5;
    let d5 = d5 + five;
    print(&d5);
}
