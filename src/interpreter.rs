/// The lexer module tokenizes source text for the expression builder.
///
/// Produces identifiers, integer literals, the four operators, parentheses,
/// `=` and `;`, skipping whitespace and reporting stray characters.
pub mod lexer;
/// Single-token lookahead over the lexer.
pub mod cursor;
/// The parser module builds expression trees from tokens.
///
/// Implements precedence climbing with best-effort recovery: malformed input
/// is reported and replaced by default values instead of failing.
pub mod parser;
/// The variable table accumulated across statements.
pub mod environment;
/// The evaluator module reduces expression trees to numbers.
pub mod evaluator;
/// Renders diagnostics and token traces on the diagnostic stream.
pub mod reporter;
/// The statement loop tying lexing, parsing, evaluation and output together.
pub mod driver;
