/// The evaluator module computes one integer result per input line.
///
/// The evaluator pulls tokens from the lexer one at a time and reduces the
/// line with a fused parse-and-evaluate loop: each operator application is
/// folded into a running accumulator as soon as both operands are known. No
/// syntax tree is ever built, which is what gives the language its single
/// precedence level.
///
/// # Responsibilities
/// - Drives the lexer and holds the single token of lookahead.
/// - Checks grammar conformance at one choke point, the `eat` primitive.
/// - Reports runtime errors such as division by zero or overflow.
pub mod evaluator;
/// The lexer module tokenizes one line of input for the evaluator.
///
/// The lexer (tokenizer) reads the raw line and produces tokens on demand,
/// one per call: integer literals, the four operator characters, and a
/// distinguished end-of-input token. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens, skipping whitespace
///   transparently.
/// - Treats line terminators and the end of the text as the same terminal
///   condition, and keeps reporting it once reached.
/// - Reports lexical errors for unrecognized or malformed input.
pub mod lexer;
