//!
//! The language-specific program syntax.
//!

pub mod c;
pub mod cpp;
pub mod d;
pub mod go;
pub mod rust;
pub mod zig;

use crate::language::Language;

use self::c::C;
use self::cpp::Cpp;
use self::d::D;
use self::go::Go;
use self::rust::Rust;
use self::zig::Zig;

///
/// The language-specific program syntax.
///
/// Every generated function `f<index>` takes and returns a 64-bit integer.
///
pub trait Dialect {
    ///
    /// Writes everything preceding the functions.
    ///
    fn prologue(&self, output: &mut String);

    ///
    /// Writes the function with the specified index.
    ///
    fn function(&self, output: &mut String, index: usize, constants: Constants);

    ///
    /// Writes the entry point opening, up to the first call.
    ///
    fn main_start(&self, output: &mut String);

    ///
    /// Writes the accumulation of the function with the specified index.
    ///
    fn call(&self, output: &mut String, index: usize);

    ///
    /// Writes the entry point closing.
    ///
    fn main_end(&self, output: &mut String);
}

///
/// The index-dependent constants of a generated function.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Constants {
    /// The multiplier.
    pub multiplier: u64,
    /// The addend.
    pub addend: u64,
    /// The final mask.
    pub mask: u64,
}

impl Constants {
    ///
    /// Derives the constants from the function index.
    ///
    pub fn new(index: usize) -> Self {
        let index = index as u64;
        Self {
            multiplier: (index % 13) + 2,
            addend: index % 1009,
            mask: (index * 7919) % 251,
        }
    }
}

///
/// Returns the dialect of the language.
///
pub fn of(language: Language) -> &'static dyn Dialect {
    match language {
        Language::C => &C,
        Language::Cpp => &Cpp,
        Language::D => &D,
        Language::Go => &Go,
        Language::Rust => &Rust,
        Language::Zig => &Zig,
    }
}
