use crate::error::{Error, Result};

/// What checking a line of chunks turned up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Syntax {
    /// A closing character that doesn't match the innermost open chunk
    Corrupted(char),
    /// Every chunk so far is fine; these closers would finish the line
    Incomplete(String),
}

pub fn closing(open: char) -> Option<char> {
    match open {
        '(' => Some(')'),
        '[' => Some(']'),
        '{' => Some('}'),
        '<' => Some('>'),
        _ => None,
    }
}

fn is_closing(c: char) -> bool {
    matches!(c, ')' | ']' | '}' | '>')
}

pub fn check(line: &str) -> Result<Syntax> {
    let mut expected = vec![];

    for c in line.chars() {
        if let Some(close) = closing(c) {
            expected.push(close);
        } else if !is_closing(c) {
            return Err(Error::UnexpectedChar(c));
        } else if expected.pop() != Some(c) {
            return Ok(Syntax::Corrupted(c));
        }
    }

    Ok(Syntax::Incomplete(expected.into_iter().rev().collect()))
}

pub fn corrupted_char(line: &str) -> Result<Option<char>> {
    Ok(match check(line)? {
        Syntax::Corrupted(c) => Some(c),
        Syntax::Incomplete(_) => None,
    })
}

pub fn syntax_error_score(c: char) -> Result<u64> {
    match c {
        ')' => Ok(3),
        ']' => Ok(57),
        '}' => Ok(1197),
        '>' => Ok(25137),
        _ => Err(Error::UnexpectedChar(c)),
    }
}

pub fn autocomplete_score(completion: &str) -> Result<u64> {
    completion.chars().try_fold(0, |score, c| {
        let value = match c {
            ')' => 1,
            ']' => 2,
            '}' => 3,
            '>' => 4,
            _ => return Err(Error::UnexpectedChar(c)),
        };
        Ok(score * 5 + value)
    })
}

fn lines(input: &str) -> impl Iterator<Item = &str> {
    input.lines().map(str::trim).filter(|line| !line.is_empty())
}

pub fn solve(input: &str) -> Result<u64> {
    let mut total = 0;

    for line in lines(input) {
        if let Some(c) = corrupted_char(line)? {
            total += syntax_error_score(c)?;
        }
    }

    Ok(total)
}

pub fn bonus(input: &str) -> Result<u64> {
    let mut scores = vec![];

    for line in lines(input) {
        if let Syntax::Incomplete(completion) = check(line)? {
            if !completion.is_empty() {
                scores.push(autocomplete_score(&completion)?);
            }
        }
    }

    if scores.is_empty() {
        return Err(Error::unsolvable("no incomplete lines"));
    }

    scores.sort_unstable();
    Ok(scores[scores.len() / 2])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corruption() {
        assert_eq!(corrupted_char("()").unwrap(), None);
        assert_eq!(corrupted_char("(]").unwrap(), Some(']'));
        assert_eq!(corrupted_char("(())").unwrap(), None);
        assert_eq!(corrupted_char("()()").unwrap(), None);
        assert_eq!(corrupted_char("(()}").unwrap(), Some('}'));
        assert_eq!(corrupted_char("())").unwrap(), Some(')'));
        assert!(matches!(check("(a)"), Err(Error::UnexpectedChar('a'))));
    }

    #[test]
    fn error_scores() {
        let score = |line| syntax_error_score(corrupted_char(line).unwrap().unwrap()).unwrap();

        assert_eq!(score("{([(<{}[<>[]}>{[]{[(<()>"), 1197);
        assert_eq!(score("[[<[([]))<([[{}[[()]]]"), 3);
        assert_eq!(score("[{[{({}]{}}([{[{{{}}([]"), 57);
        assert_eq!(score("<{([([[(<>()){}]>(<<{{"), 25137);
    }

    #[test]
    fn completions() {
        let completion = |line| match check(line).unwrap() {
            Syntax::Incomplete(s) => s,
            other => panic!("{other:?}"),
        };

        assert_eq!(completion("("), ")");
        assert_eq!(completion("(("), "))");
        assert_eq!(completion("(){}({"), "})");
        assert_eq!(completion("()"), "");

        assert_eq!(autocomplete_score("])}>").unwrap(), 294);
        assert_eq!(autocomplete_score("").unwrap(), 0);
    }

    #[test]
    fn test() {
        let example_input = "
[({(<(())[]>[[{[]{<()<>>
[(()[<>])]({[<{<<[]>>(
{([(<{}[<>[]}>{[]{[(<()>
(((({<>}<{<{<>}{[]{[]{}
[[<[([]))<([[{}[[()]]]
[{[{({}]{}}([{[{{{}}([]
{<[[]]>}<{[{[{[]{()[[[]
[<(<(<(<{}))><([]([]()
<{([([[(<>()){}]>(<<{{
<{([{{}}[<[[[<>{}]]]>[]]
";

        assert_eq!(solve(example_input).unwrap(), 26397);
        assert_eq!(bonus(example_input).unwrap(), 288957);
    }
}
