use anyhow::{Context, anyhow};
use aoc_runner::{AocParser, ParseError, PartSolver, SolveError};
use aoc_runner_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 11, tags = ["simulation", "modular-arithmetic"])]
pub struct Solver;

#[derive(Debug, Clone, Copy)]
enum Operation {
    Add(u64),
    Mul(u64),
    Square,
}

impl Operation {
    fn apply(self, old: u64) -> u64 {
        match self {
            Operation::Add(v) => old + v,
            Operation::Mul(v) => old * v,
            Operation::Square => old * old,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Monkey {
    items: Vec<u64>,
    operation: Operation,
    divisor: u64,
    if_true: usize,
    if_false: usize,
}

fn suffix<'a>(line: Option<&'a str>, prefix: &str) -> anyhow::Result<&'a str> {
    line.and_then(|l| l.trim().strip_prefix(prefix))
        .ok_or_else(|| anyhow!("expected a {prefix:?} line"))
}

fn parse_monkey(block: &str) -> anyhow::Result<Monkey> {
    let mut lines = block.lines();
    lines.next().ok_or_else(|| anyhow!("empty monkey block"))?;
    let items = suffix(lines.next(), "Starting items: ")?
        .split(", ")
        .map(|v| v.parse().context("bad worry level"))
        .collect::<anyhow::Result<_>>()?;
    let operation = match suffix(lines.next(), "Operation: new = old ")?
        .split_once(' ')
        .ok_or_else(|| anyhow!("malformed operation"))?
    {
        ("*", "old") => Operation::Square,
        ("*", v) => Operation::Mul(v.parse().context("bad operand")?),
        ("+", v) => Operation::Add(v.parse().context("bad operand")?),
        (op, _) => return Err(anyhow!("unsupported operator {op:?}")),
    };
    Ok(Monkey {
        items,
        operation,
        divisor: suffix(lines.next(), "Test: divisible by ")?
            .parse()
            .context("bad divisor")?,
        if_true: suffix(lines.next(), "If true: throw to monkey ")?
            .parse()
            .context("bad target")?,
        if_false: suffix(lines.next(), "If false: throw to monkey ")?
            .parse()
            .context("bad target")?,
    })
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Monkey>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let monkeys: Vec<Monkey> = input
            .trim_end()
            .split("\n\n")
            .map(|block| parse_monkey(block).map_err(|e| ParseError::InvalidFormat(e.to_string())))
            .collect::<Result<_, _>>()?;
        if let Some(m) = monkeys
            .iter()
            .find(|m| m.if_true >= monkeys.len() || m.if_false >= monkeys.len())
        {
            return Err(ParseError::InvalidFormat(format!(
                "throw target out of range (targets {} and {})",
                m.if_true, m.if_false
            )));
        }
        if monkeys.iter().any(|m| m.divisor == 0) {
            return Err(ParseError::InvalidFormat("zero divisor".into()));
        }
        Ok(monkeys)
    }
}

enum Relief {
    DivideBy3,
    Modulo(u64),
}

fn monkey_business(monkeys: &mut [Monkey], rounds: u32, relief: Relief) -> u64 {
    let mut inspections = vec![0u64; monkeys.len()];
    for _ in 0..rounds {
        for i in 0..monkeys.len() {
            let monkey = monkeys[i].clone();
            inspections[i] += monkeys[i].items.len() as u64;
            for item in std::mem::take(&mut monkeys[i].items) {
                let worry = match relief {
                    Relief::DivideBy3 => monkey.operation.apply(item) / 3,
                    Relief::Modulo(m) => monkey.operation.apply(item % m) % m,
                };
                let target = if worry % monkey.divisor == 0 {
                    monkey.if_true
                } else {
                    monkey.if_false
                };
                monkeys[target].items.push(worry);
            }
        }
    }
    inspections.iter().sorted_unstable().rev().take(2).product()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut monkeys = shared.clone();
        Ok(monkey_business(&mut monkeys, 20, Relief::DivideBy3).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut monkeys = shared.clone();
        let modulus = monkeys.iter().map(|m| m.divisor).product();
        Ok(monkey_business(&mut monkeys, 10_000, Relief::Modulo(modulus)).to_string())
    }
}
