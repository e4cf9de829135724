//! Splitting card text into words
//!
//! Card text is reduced to a flat list of words before any tokens are
//! parsed:
//!
//! 1. `$` comments and `&` continuation markers are dropped ([flatten])
//! 2. text is split on whitespace and `=` ([words])
//! 3. the `Nj` shorthand is expanded to N single jumps ([expand_jumps])
//!
//! Going the other way, [compress_jumps] restores the shorthand for output.

use nom::combinator::all_consuming;

use crate::token::{Jump, Token};

/// Remove a `$` inline comment from a line
///
/// ```rust
/// # use ncards_grammar::lexer::strip_comment;
/// assert_eq!(strip_comment("ctme 30 $ minutes"), "ctme 30 ");
/// assert_eq!(strip_comment("ctme 30"), "ctme 30");
/// ```
pub fn strip_comment(line: &str) -> &str {
    line.split_once('$').map_or(line, |(content, _)| content)
}

/// Join the lines of one logical card into a single line
///
/// Comments are removed from every line, as is a trailing `&` continuation
/// marker. Lines are joined with a single space.
///
/// ```rust
/// # use ncards_grammar::lexer::flatten;
/// let text = "e4 1e-5 1.0 & $ thermal\n     14.0";
/// assert_eq!(flatten(text), "e4 1e-5 1.0 14.0");
/// ```
pub fn flatten(text: &str) -> String {
    text.lines()
        .map(|line| {
            let line = strip_comment(line).trim();
            line.strip_suffix('&').unwrap_or(line).trim()
        })
        .filter(|line| !line.is_empty())
        .collect::<Vec<&str>>()
        .join(" ")
}

/// Split card content into words
///
/// `=` is treated as whitespace, so `erg=14` and `erg 14` give the same
/// words.
///
/// ```rust
/// # use ncards_grammar::lexer::words;
/// assert_eq!(words("sdef erg=14  par=n"), vec!["sdef", "erg", "14", "par", "n"]);
/// ```
pub fn words(i: &str) -> Vec<&str> {
    i.split(|c: char| c.is_whitespace() || c == '=')
        .filter(|w| !w.is_empty())
        .collect()
}

/// Whether text written to a card reads back as exactly the same words
///
/// Text holding `=`, a `$` comment, a trailing `&`, line breaks, or anything
/// other than single spaces between words is changed by [flatten] and
/// [words], so it can not be written verbatim.
///
/// ```rust
/// # use ncards_grammar::lexer::is_verbatim;
/// assert!(is_verbatim("lwtr.20t"));
/// assert!(is_verbatim("flux in water"));
/// assert!(!is_verbatim("a=b"));
/// assert!(!is_verbatim("cost $5"));
/// assert!(!is_verbatim("two  spaces"));
/// assert!(!is_verbatim(""));
/// ```
pub fn is_verbatim(text: &str) -> bool {
    !text.is_empty() && words(&flatten(text)).join(" ") == text
}

/// Number of entries a word skips if it is a jump
///
/// ```rust
/// # use ncards_grammar::lexer::jump_count;
/// assert_eq!(jump_count("3J"), Some(3));
/// assert_eq!(jump_count("jmesh"), None);
/// ```
pub fn jump_count(word: &str) -> Option<usize> {
    all_consuming(Jump::parse)(word)
        .ok()
        .map(|(_, jump)| jump.count() as usize)
}

/// Expand every `Nj` into N single `j` words
///
/// ```rust
/// # use ncards_grammar::lexer::expand_jumps;
/// assert_eq!(expand_jumps(&["1", "3j", "2"]), vec!["1", "j", "j", "j", "2"]);
/// ```
pub fn expand_jumps<'a>(words: &[&'a str]) -> Vec<&'a str> {
    expand_jumps_indexed(words)
        .into_iter()
        .map(|(word, _)| word)
        .collect()
}

/// Expand every `Nj`, pairing each word with the index of the word it came from
///
/// ```rust
/// # use ncards_grammar::lexer::expand_jumps_indexed;
/// assert_eq!(
///     expand_jumps_indexed(&["1", "2j", "x"]),
///     vec![("1", 0), ("j", 1), ("j", 1), ("x", 2)]
/// );
/// ```
pub fn expand_jumps_indexed<'a>(words: &[&'a str]) -> Vec<(&'a str, usize)> {
    let mut expanded = Vec::with_capacity(words.len());
    for (index, &word) in words.iter().enumerate() {
        match jump_count(word) {
            Some(count) => expanded.extend(std::iter::repeat(("j", index)).take(count)),
            None => expanded.push((word, index)),
        }
    }
    expanded
}

/// Collapse runs of single `j` words back into the `Nj` shorthand
///
/// ```rust
/// # use ncards_grammar::lexer::compress_jumps;
/// let words = ["1", "j", "j", "j", "2", "j"].map(String::from).to_vec();
/// assert_eq!(compress_jumps(words), vec!["1", "3j", "2", "j"]);
/// ```
pub fn compress_jumps(words: Vec<String>) -> Vec<String> {
    let mut compressed = Vec::with_capacity(words.len());
    let mut run = 0;

    for word in words {
        if word.eq_ignore_ascii_case("j") {
            run += 1;
            continue;
        }
        push_run(&mut compressed, run);
        run = 0;
        compressed.push(word);
    }
    push_run(&mut compressed, run);

    compressed
}

fn push_run(words: &mut Vec<String>, run: usize) {
    if let Some(jump) = u32::try_from(run).ok().and_then(Jump::new) {
        words.push(jump.to_string());
    }
}
