use aoc2021::{
    error::Error,
    solutions::{run, run_part, Answers, Part, DAYS},
};

fn answers(day: u8, input: &str) -> (String, String) {
    let Answers { first, bonus } = run(day, input).unwrap();
    (first, bonus)
}

fn check(day: u8, input: &str, first: &str, bonus: &str) {
    assert_eq!(answers(day, input), (first.to_string(), bonus.to_string()));
}

#[test]
fn aoc_day01() {
    let input = "199\n200\n208\n210\n200\n207\n240\n269\n260\n263\n";

    check(1, input, "7", "5");
}

#[test]
fn aoc_day02() {
    let input = r#"
forward 5
down 5
forward 8
up 3
down 8
forward 2
"#;

    check(2, input, "150", "900");
}

#[test]
fn aoc_day03() {
    let input = r#"
00100
11110
10110
10111
10101
01111
00111
11100
10000
11001
00010
01010
"#;

    check(3, input, "198", "230");
}

#[test]
fn aoc_day04() {
    let input = r#"
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
"#;

    check(4, input, "4512", "1924");
}

#[test]
fn aoc_day05() {
    let input = r#"
0,9 -> 5,9
8,0 -> 0,8
9,4 -> 3,4
2,2 -> 2,1
7,0 -> 7,4
6,4 -> 2,0
0,9 -> 2,9
3,4 -> 1,4
0,0 -> 8,8
5,5 -> 8,2
"#;

    check(5, input, "5", "12");
}

#[test]
fn aoc_day06() {
    check(6, "3,4,3,1,2\n", "5934", "26984457539");
}

#[test]
fn aoc_day07() {
    check(7, "16,1,2,0,4,2,7,1,2,14", "37", "168");
}

#[test]
fn aoc_day08() {
    let input = r#"
be cfbegad cbdgef fgaecd cgeb fdcge agebfd fecdb fabcd edb | fdgacbe cefdb cefbgd gcbe
acedgfb cdfbe gcdfa fbcad dab cefabd cdfgeb eafb cagedb ab | cdfeb fcadb cdfeb cdbaf
"#;

    check(8, input, "2", "13747");
}

#[test]
fn aoc_day09() {
    let input = r#"
2199943210
3987894921
9856789892
8767896789
9899965678
"#;

    check(9, input, "15", "1134");
}

#[test]
fn aoc_day10() {
    let input = r#"
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
"#;

    check(10, input, "26397", "288957");
}

#[test]
fn aoc_day11() {
    let input = r#"
5483143223
2745854711
5264556173
6141336146
6357385478
4167524645
2176841721
6882881134
4846848554
5283751526
"#;

    check(11, input, "1656", "195");
}

#[test]
fn aoc_day12() {
    let input = r#"
start-A
start-b
A-c
A-b
b-d
A-end
b-end
"#;

    check(12, input, "10", "36");
}

#[test]
fn aoc_day13() {
    let input = r#"
6,10
0,14
9,10
0,3
10,4
4,11
6,0
6,12
4,1
0,13
10,12
3,4
3,0
8,4
1,10
2,14
8,10
9,0

fold along y=7
fold along x=5
"#;

    check(13, input, "17", "#####\n#...#\n#...#\n#...#\n#####");
}

#[test]
fn aoc_day14() {
    let input = r#"
NNCB

CH -> B
HH -> N
CB -> H
NH -> C
HB -> C
HC -> B
HN -> C
NN -> C
BH -> H
NC -> B
NB -> B
BN -> B
BB -> N
BC -> B
CC -> N
CN -> C
"#;

    check(14, input, "1588", "2188189693529");
}

#[test]
fn malformed_input_is_an_error() {
    for day in DAYS {
        assert!(run_part(day, Part::First, "?!").is_err(), "day {day}");
    }

    assert!(matches!(run(15, ""), Err(Error::UnknownDay(15))));
}
