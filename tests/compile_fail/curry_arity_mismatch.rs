//! A declared arity contradicting the closure's parameter list is rejected.

use pipelars::curry;

fn main() {
    let _ = curry!(|a: i32, b: i32| a + b, 3);
}
