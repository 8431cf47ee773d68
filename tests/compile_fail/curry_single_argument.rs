//! curry! rejects unary callables: there is nothing to curry.

use pipelars::curry;

fn main() {
    let _ = curry!(|a: i32| a + 1);
}
