use crate::{
    error::{Error, Result},
    parse::{number_list, parse_line, regex, separated1, uint},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Square {
    pub value: u32,
    pub marked: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: Vec<Vec<Square>>,
    last_marked: Option<u32>,
}

impl Board {
    pub fn new(rows: Vec<Vec<u32>>) -> Self {
        Board {
            rows: rows
                .into_iter()
                .map(|row| {
                    row.into_iter()
                        .map(|value| Square {
                            value,
                            marked: false,
                        })
                        .collect()
                })
                .collect(),
            last_marked: None,
        }
    }

    pub fn rows(&self) -> &[Vec<Square>] {
        &self.rows
    }

    pub fn columns(&self) -> Vec<Vec<Square>> {
        let width = self.rows.first().map_or(0, Vec::len);

        (0..width)
            .map(|x| self.rows.iter().map(|row| row[x]).collect())
            .collect()
    }

    fn squares(&self) -> impl Iterator<Item = &Square> {
        self.rows.iter().flatten()
    }

    /// Marks every square holding `number`, which is remembered for scoring.
    pub fn mark(&mut self, number: u32) {
        self.last_marked = Some(number);

        for square in self.rows.iter_mut().flatten() {
            if square.value == number {
                square.marked = true;
            }
        }
    }

    pub fn has_won(&self) -> bool {
        let full = |line: &[Square]| line.iter().all(|sq| sq.marked);

        self.rows.iter().any(|row| full(row)) || self.columns().iter().any(|col| full(col))
    }

    pub fn score(&self) -> u32 {
        let unmarked = self
            .squares()
            .filter(|sq| !sq.marked)
            .map(|sq| sq.value)
            .sum::<u32>();

        unmarked * self.last_marked.unwrap_or(0)
    }
}

pub struct Game {
    draws: Vec<u32>,
    boards: Vec<Board>,
}

impl Game {
    pub fn new(draws: Vec<u32>, boards: Vec<Board>) -> Self {
        Game { draws, boards }
    }

    pub fn parse(input: &str) -> Result<Self> {
        let mut lines = input.trim().lines().enumerate();

        let draws = match lines.next() {
            Some((_, line)) => number_list(line)?,
            None => vec![],
        };

        let mut row = separated1(uint::<u32>(), regex(r"^ +"));
        let mut boards = vec![];
        let mut rows = vec![];

        for (i, line) in lines {
            if line.trim().is_empty() {
                if !rows.is_empty() {
                    boards.push(square_board(std::mem::take(&mut rows), i)?);
                }
            } else {
                rows.push(parse_line(&mut row, i + 1, line.trim())?);
            }
        }

        if !rows.is_empty() {
            boards.push(square_board(rows, input.trim().lines().count())?);
        }

        Ok(Game::new(draws, boards))
    }

    /// Score of the first board to win.
    pub fn winning_score(mut self) -> Result<u32> {
        for &number in &self.draws {
            for board in &mut self.boards {
                board.mark(number);
                if board.has_won() {
                    return Ok(board.score());
                }
            }
        }

        Err(Error::unsolvable("no board ever wins"))
    }

    /// Score of the board that is the last to win, at the moment it wins.
    pub fn last_winning_score(mut self) -> Result<u32> {
        let mut won = vec![false; self.boards.len()];
        let mut last_score = None;

        for &number in &self.draws {
            for (i, board) in self.boards.iter_mut().enumerate() {
                if won[i] {
                    continue;
                }

                board.mark(number);
                if board.has_won() {
                    won[i] = true;
                    last_score = Some(board.score());
                }
            }

            if won.iter().all(|&w| w) {
                break;
            }
        }

        last_score.ok_or_else(|| Error::unsolvable("no board ever wins"))
    }
}

fn square_board(rows: Vec<Vec<u32>>, last_line: usize) -> Result<Board> {
    let size = rows.len();

    if rows.iter().any(|row| row.len() != size) {
        return Err(Error::parse(last_line, "bingo boards have to be square"));
    }

    Ok(Board::new(rows))
}

pub fn solve(input: &str) -> Result<u32> {
    Game::parse(input)?.winning_score()
}

pub fn bonus(input: &str) -> Result<u32> {
    Game::parse(input)?.last_winning_score()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> Board {
        Board::new(vec![
            vec![14, 21, 17, 24, 4],
            vec![10, 16, 15, 9, 19],
            vec![18, 8, 23, 26, 20],
            vec![22, 11, 13, 6, 5],
            vec![2, 0, 12, 3, 7],
        ])
    }

    #[test]
    fn rows_and_columns() {
        let board = board();

        let first_row = board.rows()[0].iter().map(|sq| sq.value).collect::<Vec<_>>();
        let first_col = board.columns()[0].iter().map(|sq| sq.value).collect::<Vec<_>>();

        assert_eq!(first_row, vec![14, 21, 17, 24, 4]);
        assert_eq!(first_col, vec![14, 10, 18, 22, 2]);
    }

    #[test]
    fn marking() {
        let mut board = board();
        board.mark(14);

        assert!(board.rows()[0][0].marked);
        assert!(!board.rows()[0][4].marked);
        assert!(!board.has_won());

        for n in [10, 18, 22, 2] {
            board.mark(n);
        }
        assert!(board.has_won());
    }

    #[test]
    fn scoring() {
        let mut board = board();
        for n in [7, 4, 9, 5, 11, 17, 23, 2, 0, 14, 21, 24] {
            board.mark(n);
        }

        assert!(board.has_won());
        assert_eq!(board.score(), 4512);
    }

    #[test]
    fn first_and_last_winners() {
        let boards = || {
            vec![
                Board::new(vec![
                    vec![1, 1, 1, 1, 1],
                    vec![0, 2, 0, 0, 0],
                    vec![0, 0, 0, 0, 0],
                    vec![0, 0, 0, 0, 0],
                    vec![0, 0, 0, 0, 0],
                ]),
                Board::new(vec![
                    vec![0, 0, 0, 0, 0],
                    vec![0, 0, 0, 0, 0],
                    vec![3, 3, 3, 3, 3],
                    vec![0, 0, 0, 4, 0],
                    vec![0, 0, 0, 0, 0],
                ]),
            ]
        };

        assert_eq!(Game::new(vec![1], boards()).winning_score().unwrap(), 2);
        assert_eq!(Game::new(vec![1, 3], boards()).last_winning_score().unwrap(), 12);
        assert!(Game::new(vec![5], boards()).winning_score().is_err());
    }

    #[test]
    fn test() {
        let example_input = "
7,4,9,5,11,17,23,2,0,14,21,24,10,16,13,6,15,25,12,22,18,20,8,19,3,26,1

22 13 17 11  0
 8  2 23  4 24
21  9 14 16  7
 6 10  3 18  5
 1 12 20 15 19

 3 15  0  2 22
 9 18 13 17  5
19  8  7 25 23
20 11 10 24  4
14 21 16 12  6

14 21 17 24  4
10 16 15  9 19
18  8 23 26 20
22 11 13  6  5
 2  0 12  3  7
";

        assert_eq!(solve(example_input).unwrap(), 4512);
        assert_eq!(bonus(example_input).unwrap(), 1924);
    }
}
