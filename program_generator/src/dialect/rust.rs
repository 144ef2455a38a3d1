//!
//! The Rust dialect.
//!

use std::fmt::Write;

use super::Constants;
use super::Dialect;

///
/// The Rust dialect.
///
/// Arithmetic wraps so that debug builds do not panic on overflow.
///
pub struct Rust;

impl Dialect for Rust {
    fn prologue(&self, _output: &mut String) {}

    fn function(&self, output: &mut String, index: usize, constants: Constants) {
        writeln!(
            output,
            "fn f{index}(x: i64) -> i64 {{\n    let mut y = x.wrapping_mul({}).wrapping_add({});\n    if y % 2 == 0 {{\n        y /= 2;\n    }} else {{\n        y = y.wrapping_mul(3).wrapping_add(1);\n    }}\n    y ^ {}\n}}\n",
            constants.multiplier, constants.addend, constants.mask,
        )
        .expect("Always valid");
    }

    fn main_start(&self, output: &mut String) {
        output.push_str("fn main() {\n    let mut sum: i64 = 0;\n");
    }

    fn call(&self, output: &mut String, index: usize) {
        writeln!(output, "    sum = sum.wrapping_add(f{index}({index}));").expect("Always valid");
    }

    fn main_end(&self, output: &mut String) {
        output.push_str("    println!(\"{sum}\");\n}\n");
    }
}
