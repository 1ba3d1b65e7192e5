//! # strcomb - String Parser Combinators
//!
//! A small algebra of pure parsers over an immutable string cursor, meant to
//! be embedded in a host that turns text into structured values.
//!
//! - **Value cursors**: a [`Cursor`] is a `Copy` view into the input, so
//!   backtracking is just reusing an earlier cursor
//! - **Atomic attempts**: a parser either succeeds and advances, or fails with
//!   [`NoMatch`] and leaves the caller's cursor untouched
//! - **Composability**: small parsers combine into larger ones using combinators
//! - **Zero copy**: matched text is returned as slices of the input
//!
//! ```
//! use strcomb::prelude::*;
//!
//! let number = take_while1(|c| c.is_ascii_digit()).map(|s: &str| s.len());
//! let list = between(literal("["), literal("]"), sep_by(number, literal(",")));
//!
//! assert_eq!(run(&list.then_skip(eof()), "[1,22,333]"), Ok(vec![1, 2, 3]));
//! ```

pub mod between;
pub mod bind;
pub mod choice;
pub mod cursor;
pub mod eof;
pub mod error;
pub mod lazy;
pub mod literal;
pub mod many;
pub mod map;
pub mod never;
pub mod not;
pub mod option;
pub mod or;
pub mod parser;
pub mod peek;
pub mod pure;
pub mod replicate;
pub mod run;
pub mod satisfy;
pub mod separated_list;
pub mod sequence;
pub mod skip;
pub mod state;
pub mod take;
pub mod tally;

pub use between::between;
pub use cursor::Cursor;
pub use error::{NoMatch, ParseResult, is_failure};
pub use parser::{BoxedParser, Parser, from_fn};
pub use run::run;

/// Everything needed to write a grammar, in one import
pub mod prelude {
    pub use crate::between::between;
    pub use crate::bind::{BindExt, bind};
    pub use crate::choice::choice;
    pub use crate::cursor::Cursor;
    pub use crate::eof::eof;
    pub use crate::error::{NoMatch, ParseResult, is_failure};
    pub use crate::lazy::lazy;
    pub use crate::literal::literal;
    pub use crate::many::{many, many_till, many1};
    pub use crate::map::{MapExt, map};
    pub use crate::never::never;
    pub use crate::not::not_followed_by;
    pub use crate::option::{OptionalExt, option, optional};
    pub use crate::or::{OrExt, alt};
    pub use crate::parser::{BoxedParser, Parser, from_fn};
    pub use crate::peek::{consume_rest, drop_rest, peek, peek_rest};
    pub use crate::pure::pure;
    pub use crate::replicate::replicate;
    pub use crate::run::run;
    pub use crate::satisfy::{any_char, any_char_but, satisfy, satisfy_with};
    pub use crate::separated_list::{sep_by, sep_by1};
    pub use crate::sequence::{SequenceExt, and, skip_then, then_skip};
    pub use crate::skip::{skip, skip_many, skip_many1, skip_while, skip_while1};
    pub use crate::state::current_state;
    pub use crate::take::{take_exact, take_while, take_while1};
    pub use crate::tally::{TallyExt, tally};
}
