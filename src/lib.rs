//! brookc — a compiler front end for the Brook language
//!
//! Brook is a small language of function declarations:
//!
//! ```text
//! func main() -> int {
//!     return 0;
//! }
//! ```
//!
//! The pipeline is: [`lexer`] turns source text into a token buffer,
//! [`parser`] turns the buffer into an AST ([`ast`]), and every problem
//! found along the way lands in a per-file [`diagnostics`] engine. The
//! [`driver`] wires the phases together and gates each on the previous
//! one's diagnostics.

pub mod ast;
pub mod basic;
pub mod diagnostics;
pub mod driver;
pub mod lexer;
pub mod parser;
pub mod token;
