//!
//! The Zig dialect.
//!

use std::fmt::Write;

use super::Constants;
use super::Dialect;

///
/// The Zig dialect.
///
/// `sum` is referenced right after its declaration, since Zig rejects a `var`
/// that is never mutated, which is the case for a program without functions.
///
pub struct Zig;

impl Dialect for Zig {
    fn prologue(&self, output: &mut String) {
        output.push_str("const std = @import(\"std\");\n\n");
    }

    fn function(&self, output: &mut String, index: usize, constants: Constants) {
        writeln!(
            output,
            "fn f{index}(x: i64) i64 {{\n    var y: i64 = x *% {} +% {};\n    if (@mod(y, 2) == 0) {{\n        y = @divTrunc(y, 2);\n    }} else {{\n        y = y *% 3 +% 1;\n    }}\n    return y ^ {};\n}}\n",
            constants.multiplier, constants.addend, constants.mask,
        )
        .expect("Always valid");
    }

    fn main_start(&self, output: &mut String) {
        output.push_str("pub fn main() void {\n    var sum: i64 = 0;\n    _ = &sum;\n");
    }

    fn call(&self, output: &mut String, index: usize) {
        writeln!(output, "    sum +%= f{index}({index});").expect("Always valid");
    }

    fn main_end(&self, output: &mut String) {
        output.push_str("    std.debug.print(\"{d}\\n\", .{sum});\n}\n");
    }
}
