use std::str::FromStr;

use regex::Regex;

use crate::error::{Error, Result};

pub type ParseResult<I, O> = Option<(I, O)>;

pub trait Parser<I> {
    type Output;

    fn parse(&mut self, input: I) -> ParseResult<I, Self::Output>;
}

impl<I, O, F> Parser<I> for F
where
    F: FnMut(I) -> Option<(I, O)>,
{
    type Output = O;

    fn parse(&mut self, input: I) -> Option<(I, Self::Output)> {
        self(input)
    }
}

pub struct TagParser<'t> {
    tag: &'t str,
}

pub fn tag(tag: &str) -> TagParser<'_> {
    TagParser { tag }
}

impl<'i, 't> Parser<&'i str> for TagParser<'t> {
    type Output = &'i str;

    fn parse(&mut self, input: &'i str) -> Option<(&'i str, Self::Output)> {
        if input.starts_with(self.tag) {
            let (found, rest) = input.split_at(self.tag.len());
            Some((rest, found))
        } else {
            None
        }
    }
}

pub struct RegexParser {
    regex: Regex,
}

/// Matches `pattern` at the very start of the input. Patterns are literals
/// in this crate, so an invalid one is a bug rather than an input error.
pub fn regex(pattern: &str) -> RegexParser {
    RegexParser {
        regex: Regex::new(pattern).expect("valid pattern"),
    }
}

impl<'i> Parser<&'i str> for RegexParser {
    type Output = &'i str;

    fn parse(&mut self, input: &'i str) -> Option<(&'i str, Self::Output)> {
        match self.regex.find(input) {
            Some(m) if m.start() == 0 => {
                let (found, rest) = input.split_at(m.end());
                Some((rest, found))
            }
            _ => None,
        }
    }
}

pub fn map<I, O1, O2>(
    mut p1: impl Parser<I, Output = O1>,
    mut f: impl FnMut(O1) -> O2,
) -> impl Parser<I, Output = O2> {
    move |input: I| {
        p1.parse(input).map(|(remaining, res)| {
            //
            (remaining, f(res))
        })
    }
}

/// Like `map`, but the conversion may reject the parsed value.
pub fn map_opt<I, O1, O2>(
    mut p1: impl Parser<I, Output = O1>,
    mut f: impl FnMut(O1) -> Option<O2>,
) -> impl Parser<I, Output = O2> {
    move |input: I| {
        let (remaining, res) = p1.parse(input)?;
        Some((remaining, f(res)?))
    }
}

pub trait Seq<I> {
    type Output;

    fn parse_seq(&mut self, input: I) -> ParseResult<I, Self::Output>;
}

macro_rules! seq_impl {
    ($($idx:tt $name:ident $ty:ident $res:ident),+) => {
        impl<I, $($name, $ty),+> Seq<I> for ($($name,)+)
        where
            $($name: Parser<I, Output = $ty>,)+
        {
            type Output = ($($ty,)+);

            fn parse_seq(&mut self, input: I) -> Option<(I, Self::Output)> {
                $(let (input, $res) = self.$idx.parse(input)?;)+
                Some((input, ($($res,)+)))
            }
        }
    };
}

seq_impl!(0 P0 O0 r0, 1 P1 O1 r1);
seq_impl!(0 P0 O0 r0, 1 P1 O1 r1, 2 P2 O2 r2);
seq_impl!(0 P0 O0 r0, 1 P1 O1 r1, 2 P2 O2 r2, 3 P3 O3 r3);
seq_impl!(0 P0 O0 r0, 1 P1 O1 r1, 2 P2 O2 r2, 3 P3 O3 r3, 4 P4 O4 r4);

pub fn seq<I, O, List: Seq<I, Output = O>>(mut list: List) -> impl Parser<I, Output = O> {
    move |input: I| list.parse_seq(input)
}

pub fn delimited<I, P1, O1, P2, O2, P3, O3>(p1: P1, p2: P2, p3: P3) -> impl Parser<I, Output = O2>
where
    P1: Parser<I, Output = O1>,
    P2: Parser<I, Output = O2>,
    P3: Parser<I, Output = O3>,
{
    map(seq((p1, p2, p3)), |(_, r2, _)| r2)
}

pub fn preceded<I, P1, O1, P2, O2>(p1: P1, p2: P2) -> impl Parser<I, Output = O2>
where
    P1: Parser<I, Output = O1>,
    P2: Parser<I, Output = O2>,
{
    map(seq((p1, p2)), |(_, r2)| r2)
}

pub fn terminated<I, P1, O1, P2, O2>(p1: P1, p2: P2) -> impl Parser<I, Output = O1>
where
    P1: Parser<I, Output = O1>,
    P2: Parser<I, Output = O2>,
{
    map(seq((p1, p2)), |(r1, _)| r1)
}

/// One or more `p`, separated by `sep`. A trailing separator is left unconsumed.
pub fn separated1<I: Clone, P, O, S, SO>(mut p: P, mut sep: S) -> impl Parser<I, Output = Vec<O>>
where
    P: Parser<I, Output = O>,
    S: Parser<I, Output = SO>,
{
    move |input: I| {
        let (mut input, first) = p.parse(input)?;
        let mut results = vec![first];

        while let Some((remaining, res)) = sep
            .parse(input.clone())
            .and_then(|(after_sep, _)| p.parse(after_sep))
        {
            input = remaining;
            results.push(res);
        }

        Some((input, results))
    }
}

pub fn uint<'i, N: FromStr>() -> impl Parser<&'i str, Output = N> {
    map_opt(regex(r"^[0-9]+"), |s: &str| s.parse::<N>().ok())
}

pub fn word<'i>() -> impl Parser<&'i str, Output = &'i str> {
    regex(r"^[a-zA-Z]+")
}

/// Runs `p` against a whole line, which it has to consume entirely.
pub fn parse_line<'i, P>(p: &mut P, line_no: usize, line: &'i str) -> Result<P::Output>
where
    P: Parser<&'i str>,
{
    match p.parse(line) {
        Some(("", res)) => Ok(res),
        Some((rest, _)) => Err(Error::parse(
            line_no,
            format!("unexpected trailing input {rest:?}"),
        )),
        None => Err(Error::parse(line_no, format!("could not parse {line:?}"))),
    }
}

/// Parses every non-blank line of `input`; errors carry 1-based line numbers.
pub fn parse_lines<'i, P>(input: &'i str, mut p: P) -> Result<Vec<P::Output>>
where
    P: Parser<&'i str>,
{
    input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| parse_line(&mut p, i + 1, line.trim()))
        .collect()
}

/// A block of single-digit rows, like `2199943210`. Needs at least one row.
pub fn digit_rows(input: &str) -> Result<Vec<Vec<u8>>> {
    if input.trim().is_empty() {
        return Err(Error::parse(1, "empty grid"));
    }

    input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            line.trim()
                .chars()
                .map(|c| {
                    c.to_digit(10)
                        .map(|d| d as u8)
                        .ok_or_else(|| Error::parse(i + 1, format!("not a digit: {c:?}")))
                })
                .collect()
        })
        .collect()
}

/// A single line of comma-separated numbers, like `3,4,3,1,2`.
pub fn number_list<N: FromStr>(input: &str) -> Result<Vec<N>> {
    let line = input.trim();
    let mut p = separated1(uint::<N>(), tag(","));
    parse_line(&mut p, 1, line)
}
