//!
//! The C dialect.
//!

use std::fmt::Write;

use super::Constants;
use super::Dialect;

///
/// The C dialect.
///
pub struct C;

impl Dialect for C {
    fn prologue(&self, output: &mut String) {
        output.push_str("#include <stdio.h>\n\n");
    }

    fn function(&self, output: &mut String, index: usize, constants: Constants) {
        writeln!(
            output,
            "long long f{index}(long long x) {{\n    long long y = x * {} + {};\n    if (y % 2 == 0) {{\n        y /= 2;\n    }} else {{\n        y = y * 3 + 1;\n    }}\n    return y ^ {};\n}}\n",
            constants.multiplier, constants.addend, constants.mask,
        )
        .expect("Always valid");
    }

    fn main_start(&self, output: &mut String) {
        output.push_str("int main(void) {\n    long long sum = 0;\n");
    }

    fn call(&self, output: &mut String, index: usize) {
        writeln!(output, "    sum += f{index}({index});").expect("Always valid");
    }

    fn main_end(&self, output: &mut String) {
        output.push_str("    printf(\"%lld\\n\", sum);\n    return 0;\n}\n");
    }
}
