//!
//! The Go dialect.
//!

use std::fmt::Write;

use super::Constants;
use super::Dialect;

///
/// The Go dialect.
///
pub struct Go;

impl Dialect for Go {
    fn prologue(&self, output: &mut String) {
        output.push_str("package main\n\nimport \"fmt\"\n\n");
    }

    fn function(&self, output: &mut String, index: usize, constants: Constants) {
        writeln!(
            output,
            "func f{index}(x int64) int64 {{\n\ty := x*{} + {}\n\tif y%2 == 0 {{\n\t\ty /= 2\n\t}} else {{\n\t\ty = y*3 + 1\n\t}}\n\treturn y ^ {}\n}}\n",
            constants.multiplier, constants.addend, constants.mask,
        )
        .expect("Always valid");
    }

    fn main_start(&self, output: &mut String) {
        output.push_str("func main() {\n\tvar sum int64\n");
    }

    fn call(&self, output: &mut String, index: usize) {
        writeln!(output, "\tsum += f{index}({index})").expect("Always valid");
    }

    fn main_end(&self, output: &mut String) {
        output.push_str("\tfmt.Println(sum)\n}\n");
    }
}
