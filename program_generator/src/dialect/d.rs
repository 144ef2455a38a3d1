//!
//! The D dialect.
//!

use std::fmt::Write;

use super::Constants;
use super::Dialect;

///
/// The D dialect.
///
pub struct D;

impl Dialect for D {
    fn prologue(&self, output: &mut String) {
        output.push_str("import std.stdio;\n\n");
    }

    fn function(&self, output: &mut String, index: usize, constants: Constants) {
        writeln!(
            output,
            "long f{index}(long x) {{\n    long y = x * {} + {};\n    if (y % 2 == 0) {{\n        y /= 2;\n    }} else {{\n        y = y * 3 + 1;\n    }}\n    return y ^ {};\n}}\n",
            constants.multiplier, constants.addend, constants.mask,
        )
        .expect("Always valid");
    }

    fn main_start(&self, output: &mut String) {
        output.push_str("void main() {\n    long sum = 0;\n");
    }

    fn call(&self, output: &mut String, index: usize) {
        writeln!(output, "    sum += f{index}({index});").expect("Always valid");
    }

    fn main_end(&self, output: &mut String) {
        output.push_str("    writeln(sum);\n}\n");
    }
}
