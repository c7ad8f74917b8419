use std::cmp::Ordering;

use aoc_runner::{AocParser, ParseError, PartSolver, SolveError};
use aoc_runner_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 13, tags = ["parsing", "ordering"])]
pub struct Solver;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Packet {
    Int(u64),
    List(Vec<Packet>),
}

impl Ord for Packet {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Packet::Int(a), Packet::Int(b)) => a.cmp(b),
            (Packet::List(a), Packet::List(b)) => a.cmp(b),
            (Packet::Int(a), Packet::List(_)) => {
                Packet::List(vec![Packet::Int(*a)]).cmp(other)
            }
            (Packet::List(_), Packet::Int(b)) => {
                self.cmp(&Packet::List(vec![Packet::Int(*b)]))
            }
        }
    }
}

impl PartialOrd for Packet {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

struct PacketParser<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl PacketParser<'_> {
    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn expect(&mut self, c: u8) -> anyhow::Result<()> {
        if self.peek() == Some(c) {
            self.pos += 1;
            Ok(())
        } else {
            Err(anyhow::anyhow!(
                "expected {:?} at offset {}",
                c as char,
                self.pos
            ))
        }
    }

    fn value(&mut self) -> anyhow::Result<Packet> {
        match self.peek() {
            Some(b'[') => self.list(),
            Some(c) if c.is_ascii_digit() => {
                let mut n = 0u64;
                while let Some(c) = self.peek().filter(u8::is_ascii_digit) {
                    n = n * 10 + u64::from(c - b'0');
                    self.pos += 1;
                }
                Ok(Packet::Int(n))
            }
            _ => Err(anyhow::anyhow!("expected a value at offset {}", self.pos)),
        }
    }

    fn list(&mut self) -> anyhow::Result<Packet> {
        self.expect(b'[')?;
        let mut items = Vec::new();
        if self.peek() != Some(b']') {
            loop {
                items.push(self.value()?);
                if self.peek() != Some(b',') {
                    break;
                }
                self.pos += 1;
            }
        }
        self.expect(b']')?;
        Ok(Packet::List(items))
    }
}

fn parse_packet(line: &str) -> anyhow::Result<Packet> {
    let mut parser = PacketParser {
        bytes: line.as_bytes(),
        pos: 0,
    };
    let packet = parser.list()?;
    if parser.pos != parser.bytes.len() {
        return Err(anyhow::anyhow!("trailing garbage at offset {}", parser.pos));
    }
    Ok(packet)
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Packet>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .lines()
            .filter(|line| !line.is_empty())
            .map(|line| {
                parse_packet(line).map_err(|e| ParseError::InvalidFormat(format!("{e} in {line:?}")))
            })
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut total = 0;
        for (index, mut pair) in (1..).zip(&shared.iter().chunks(2)) {
            let (left, right) = pair
                .next_tuple()
                .ok_or_else(|| SolveError::SolveFailed("odd number of packets".into()))?;
            if left < right {
                total += index;
            }
        }
        Ok(total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let dividers = [
            Packet::List(vec![Packet::List(vec![Packet::Int(2)])]),
            Packet::List(vec![Packet::List(vec![Packet::Int(6)])]),
        ];
        // Each divider's sorted position is just the count of packets before it.
        let key: usize = dividers
            .iter()
            .enumerate()
            .map(|(i, divider)| {
                shared.iter().filter(|&p| p < divider).count() + i + 1
            })
            .product();
        Ok(key.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{Packet, Solver};
    use aoc_runner::{AocParser, Solver as _};

    const SAMPLE: &str = "\
[1,1,3,1,1]
[1,1,5,1,1]

[[1],[2,3,4]]
[[1],4]

[9]
[[8,7,6]]

[[4,4],4,4]
[[4,4],4,4,4]

[7,7,7,7]
[7,7,7]

[]
[3]

[[[]]]
[[]]

[1,[2,[3,[4,[5,6,7]]]],8,9]
[1,[2,[3,[4,[5,6,0]]]],8,9]
";

    #[test]
    fn part1_sample() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "13");
    }

    #[test]
    fn part2_sample() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "140");
    }

    #[test]
    fn mixed_comparison_wraps_the_integer() {
        let a = Packet::Int(9);
        let b = Packet::List(vec![Packet::Int(8), Packet::Int(7)]);
        assert!(a > b);
    }

    #[test]
    fn unbalanced_brackets_are_rejected() {
        assert!(Solver::parse("[1,[2]\n").is_err());
    }
}
