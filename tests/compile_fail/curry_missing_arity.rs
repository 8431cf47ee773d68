//! A bare function path carries no arity information; curry! demands it.

use pipelars::curry;

fn add(a: i32, b: i32) -> i32 {
    a + b
}

fn main() {
    let _ = curry!(add);
}
