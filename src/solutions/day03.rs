use checked_sum::CheckedSum;
use puzzle_framework::runner::puzzle_runner;
use puzzle_framework::{ParseInput, PartOne, PartTwo, Puzzle, PuzzleResult};

#[puzzle_runner(
    title = "Day 3: Mull It Over",
    parsed = MemoryDump,
    part_one = Day03,
    part_two = Day03
)]
impl super::Advent2024<3> {}

/*
Input is a dump of corrupted program memory. Valid instructions are
`mul(X,Y)` with X and Y each 1 to 3 digits, `do()`, and `don't()`; anything
else, including near-misses like `mul(4*` or `mul ( 2 , 4 )`, is junk to
skip over.
*/

/// Type for multiply operands, which hold at most 3 digits.
type Operand = u16;

/// A single recognized instruction from the memory dump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Instruction {
    /// Multiply the two operands.
    Multiply { x: Operand, y: Operand },
    /// Turn multiplication back on.
    Enable,
    /// Turn multiplication off.
    Disable,
}

/// Maximum digits in a multiply operand.
const MAX_OPERAND_DIGITS: usize = 3;

/// Match an exact byte sequence at `from`, returning the index just past it.
fn lex_literal(bytes: &[u8], from: usize, literal: &[u8]) -> Option<usize> {
    bytes[from..]
        .starts_with(literal)
        .then_some(from + literal.len())
}

/// Lex an operand at `from`, returning its value and the index just past its
/// digits.
///
/// The digit run must be 1 to [`MAX_OPERAND_DIGITS`] long; a longer run
/// can't be a valid operand no matter where it's cut, since the operand must
/// be followed directly by a delimiter.
fn lex_operand(bytes: &[u8], from: usize) -> Option<(Operand, usize)> {
    let digit_count = bytes[from..]
        .iter()
        .take_while(|byte| byte.is_ascii_digit())
        .count();
    if !(1..=MAX_OPERAND_DIGITS).contains(&digit_count) {
        return None;
    }

    let value = bytes[from..from + digit_count]
        .iter()
        .fold(0, |sum: Operand, byte| sum * 10 + Operand::from(byte - b'0'));
    Some((value, from + digit_count))
}

/// Lex a complete `mul(X,Y)` instruction at `from`.
fn lex_multiply(bytes: &[u8], from: usize) -> Option<(Instruction, usize)> {
    let after_keyword = lex_literal(bytes, from, b"mul(")?;
    let (x, after_x) = lex_operand(bytes, after_keyword)?;
    let after_comma = lex_literal(bytes, after_x, b",")?;
    let (y, after_y) = lex_operand(bytes, after_comma)?;
    let end = lex_literal(bytes, after_y, b")")?;
    Some((Instruction::Multiply { x, y }, end))
}

/// Scan the memory dump for instructions, skipping junk.
///
/// At each position, one of the instruction forms either lexes completely or
/// the scan advances a single byte, so a truncated candidate can still
/// contain a later valid one (`mul(mul(2,4))` yields the inner multiply).
fn scan_instructions(input: &str) -> Vec<Instruction> {
    let bytes = input.as_bytes();
    let mut instructions = Vec::new();

    let mut index = 0;
    while index < bytes.len() {
        let lexed = lex_multiply(bytes, index)
            .or_else(|| lex_literal(bytes, index, b"do()").map(|end| (Instruction::Enable, end)))
            .or_else(|| {
                lex_literal(bytes, index, b"don't()").map(|end| (Instruction::Disable, end))
            });

        if let Some((instruction, end)) = lexed {
            instructions.push(instruction);
            index = end;
        } else {
            index += 1;
        }
    }

    instructions
}

struct MemoryDump {
    instructions: Vec<Instruction>,
}

impl ParseInput for MemoryDump {
    fn parse(input: &str) -> PuzzleResult<Self>
    where
        Self: Sized,
    {
        // junk between instructions is expected, so scanning can't fail
        Ok(Self {
            instructions: scan_instructions(input),
        })
    }
}

/*
For part 1, run just the multiplications: the solution is the sum of the
products of every `mul` instruction.
*/

/// Type for multiply products and their sum.
///
/// With [`Operand`] holding at most a 3 digit number, a single product needs
/// 6 digits; this is sized to hold a sum of them.
type Product = u32;

impl MemoryDump {
    /// Iterate the products of multiply instructions, in order.
    ///
    /// With `honor_conditionals`, `don't()` suppresses products until the
    /// next `do()`. Multiplication starts enabled.
    fn products(&self, honor_conditionals: bool) -> impl Iterator<Item = Product> + '_ {
        self.instructions
            .iter()
            .scan(true, move |enabled, instruction| {
                let product = match *instruction {
                    Instruction::Multiply { x, y } if *enabled => {
                        Some(Product::from(x) * Product::from(y))
                    }
                    Instruction::Multiply { .. } => None,
                    Instruction::Enable => {
                        if honor_conditionals {
                            *enabled = true;
                        }
                        None
                    }
                    Instruction::Disable => {
                        if honor_conditionals {
                            *enabled = false;
                        }
                        None
                    }
                };
                Some(product)
            })
            .flatten()
    }
}

struct Day03;

impl Puzzle<PartOne> for Day03 {
    type Input = MemoryDump;
    type Output = Product;

    fn solve(input: &Self::Input) -> PuzzleResult<Self::Output> {
        let sum = input
            .products(false)
            .checked_sum()
            .expect("should not have integer overflow during summation");
        Ok(sum)
    }
}

/*
For part 2, the conditional instructions matter: `don't()` disables later
multiplications and `do()` re-enables them.
*/

impl Puzzle<PartTwo> for Day03 {
    type Input = MemoryDump;
    type Output = Product;

    fn solve(input: &Self::Input) -> PuzzleResult<Self::Output> {
        let sum = input
            .products(true)
            .checked_sum()
            .expect("should not have integer overflow during summation");
        Ok(sum)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scans_every_instruction_form() {
        let instructions = scan_instructions("mul(4,4)do()mul(2,45)don't()mul(1,65)");
        assert_eq!(
            instructions,
            vec![
                Instruction::Multiply { x: 4, y: 4 },
                Instruction::Enable,
                Instruction::Multiply { x: 2, y: 45 },
                Instruction::Disable,
                Instruction::Multiply { x: 1, y: 65 },
            ]
        );
    }

    #[test]
    fn skips_malformed_candidates() {
        // misspelled keyword, operand too long, junk inside an operand
        let instructions = scan_instructions("mujl(4,4)mul(2555,45)mul(1,6x5)");
        assert!(instructions.is_empty());
    }

    #[test]
    fn scans_valid_instructions_between_junk() {
        let instructions = scan_instructions("mul(5,77)MUL(42,12)mul(12,425)mm,xul(1,3)ul(1,65)");
        assert_eq!(
            instructions,
            vec![
                Instruction::Multiply { x: 5, y: 77 },
                Instruction::Multiply { x: 12, y: 425 },
            ]
        );
    }

    #[test]
    fn recovers_instruction_inside_truncated_candidate() {
        let instructions = scan_instructions("mul(mul(2,4))");
        assert_eq!(instructions, vec![Instruction::Multiply { x: 2, y: 4 }]);
    }

    #[test]
    fn scans_empty_input() {
        assert!(scan_instructions("").is_empty());
    }

    #[test]
    fn scans_across_lines() {
        let instructions = scan_instructions("mul(2,3)\nmul(4,\n5)mul(6,7)");
        assert_eq!(
            instructions,
            vec![
                Instruction::Multiply { x: 2, y: 3 },
                Instruction::Multiply { x: 6, y: 7 },
            ]
        );
    }

    #[test]
    fn conditionals_gate_products_only_when_honored() -> PuzzleResult<()> {
        let dump = MemoryDump::parse("mul(4,2)don't()mul(2,5)mul(7,7)do()mul(2,1)")?;

        let all: Vec<Product> = dump.products(false).collect();
        assert_eq!(all, vec![8, 10, 49, 2]);

        let gated: Vec<Product> = dump.products(true).collect();
        assert_eq!(gated, vec![8, 2]);
        Ok(())
    }

    const EXAMPLE_INPUT_ONE: &str =
        "xmul(2,4)%&mul[3,7]!@^do_not_mul(5,5)+mul(32,64]then(mul(11,8)mul(8,5))";

    #[test]
    fn part_one_solves_example() -> PuzzleResult<()> {
        let parsed = MemoryDump::parse(EXAMPLE_INPUT_ONE)?;
        let result = <Day03 as Puzzle<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 161);
        Ok(())
    }

    const EXAMPLE_INPUT_TWO: &str =
        "xmul(2,4)&mul[3,7]!^don't()_mul(5,5)+mul(32,64](mul(11,8)undo()?mul(8,5))";

    #[test]
    fn part_two_solves_example() -> PuzzleResult<()> {
        let parsed = MemoryDump::parse(EXAMPLE_INPUT_TWO)?;
        let result = <Day03 as Puzzle<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 48);
        Ok(())
    }
}
