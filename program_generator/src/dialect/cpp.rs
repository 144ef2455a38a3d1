//!
//! The C++ dialect.
//!

use std::fmt::Write;

use super::Constants;
use super::Dialect;

///
/// The C++ dialect.
///
pub struct Cpp;

impl Dialect for Cpp {
    fn prologue(&self, output: &mut String) {
        output.push_str("#include <cstdint>\n#include <iostream>\n\n");
    }

    fn function(&self, output: &mut String, index: usize, constants: Constants) {
        writeln!(
            output,
            "std::int64_t f{index}(std::int64_t x) {{\n    std::int64_t y = x * {} + {};\n    if (y % 2 == 0) {{\n        y /= 2;\n    }} else {{\n        y = y * 3 + 1;\n    }}\n    return y ^ {};\n}}\n",
            constants.multiplier, constants.addend, constants.mask,
        )
        .expect("Always valid");
    }

    fn main_start(&self, output: &mut String) {
        output.push_str("int main() {\n    std::int64_t sum = 0;\n");
    }

    fn call(&self, output: &mut String, index: usize) {
        writeln!(output, "    sum += f{index}({index});").expect("Always valid");
    }

    fn main_end(&self, output: &mut String) {
        output.push_str("    std::cout << sum << std::endl;\n    return 0;\n}\n");
    }
}
