use std::{error, fmt::Display};

use anyhow::Result;
use int_enum::IntEnum;
use tracing::trace;

use crate::{
    check::Example,
    puzzle::{Answer, Part, RunMode, Solution},
};

const SAMPLE: &str = "\
Register A: 729
Register B: 0
Register C: 0

Program: 0,1,5,4,3,0
";

const QUINE_SAMPLE: &str = "\
Register A: 2024
Register B: 0
Register C: 0

Program: 0,3,5,4,3,0
";

const MAX_STEPS: usize = 1 << 20;

#[derive(Debug)]
pub enum Error {
    NoRegisterLine(char),
    NoProgram,
    InvalidRegisterText(String),
    InvalidProgramText(String),
    InvalidOpcode(u8),
    InvalidOperand(u8),
    InvalidComboOperand(u8),
    StepLimit(usize),
    NoQuine,
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::NoRegisterLine(name) => write!(
                f,
                "Can't find line for register {} in debug information.",
                name
            ),
            Error::NoProgram => write!(f, "Can't find line for program in debug information."),
            Error::InvalidRegisterText(s) => write!(f, "Invalid text({}) for register.", s),
            Error::InvalidProgramText(s) => write!(f, "Invalid text({}) for program.", s),
            Error::InvalidOpcode(n) => write!(f, "Invalid operation code({}).", n),
            Error::InvalidOperand(n) => write!(f, "Invalid operand({}), expect 3 bits.", n),
            Error::InvalidComboOperand(n) => write!(f, "Invalid combo operand({}).", n),
            Error::StepLimit(n) => write!(f, "Program didn't halt after {} steps.", n),
            Error::NoQuine => write!(
                f,
                "No value of register A makes the program output itself."
            ),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, IntEnum)]
#[repr(u8)]
pub enum Instruction {
    Adv = 0,
    Bxl = 1,
    Bst = 2,
    Jnz = 3,
    Bxc = 4,
    Out = 5,
    Bdv = 6,
    Cdv = 7,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Register {
    A = 0,
    B = 1,
    C = 2,
}

/// Three-register machine running a program of 3-bit numbers.
#[derive(Debug, Clone)]
pub struct Computer {
    registers: [u64; 3],
    inst_ptr: usize,
    output: Vec<u8>,
}

impl Computer {
    pub fn new(registers: &[u64; 3]) -> Self {
        Self {
            registers: *registers,
            inst_ptr: 0,
            output: Vec::new(),
        }
    }

    pub fn reg(&self, name: Register) -> u64 {
        self.registers[name as usize]
    }

    fn reg_mut(&mut self, name: Register) -> &mut u64 {
        &mut self.registers[name as usize]
    }

    pub fn output(&self) -> &[u8] {
        &self.output
    }

    fn combo(&self, operand: u8) -> Result<u64, Error> {
        match operand {
            0..=3 => Ok(u64::from(operand)),
            4 => Ok(self.reg(Register::A)),
            5 => Ok(self.reg(Register::B)),
            6 => Ok(self.reg(Register::C)),
            other => Err(Error::InvalidComboOperand(other)),
        }
    }

    fn divide_a(&self, operand: u8) -> Result<u64, Error> {
        let power = self.combo(operand)?;
        Ok(u32::try_from(power)
            .ok()
            .and_then(|p| self.reg(Register::A).checked_shr(p))
            .unwrap_or(0))
    }

    /// Executes one instruction. Returns false once the pointer runs past the program.
    pub fn step(&mut self, program: &[u8]) -> Result<bool, Error> {
        let (Some(opcode), Some(operand)) = (
            program.get(self.inst_ptr).copied(),
            program.get(self.inst_ptr + 1).copied(),
        ) else {
            return Ok(false);
        };
        if operand > 7 {
            return Err(Error::InvalidOperand(operand));
        }
        let inst = Instruction::try_from(opcode).map_err(|_| Error::InvalidOpcode(opcode))?;
        trace!(ptr = self.inst_ptr, ?inst, operand, registers = ?self.registers, "step");

        match inst {
            Instruction::Adv => *self.reg_mut(Register::A) = self.divide_a(operand)?,
            Instruction::Bxl => *self.reg_mut(Register::B) ^= u64::from(operand),
            Instruction::Bst => *self.reg_mut(Register::B) = self.combo(operand)? % 8,
            Instruction::Jnz => {
                if self.reg(Register::A) != 0 {
                    self.inst_ptr = usize::from(operand);
                    return Ok(true);
                }
            }
            Instruction::Bxc => {
                let c = self.reg(Register::C);
                *self.reg_mut(Register::B) ^= c;
            }
            Instruction::Out => {
                let value = (self.combo(operand)? % 8) as u8;
                self.output.push(value);
            }
            Instruction::Bdv => *self.reg_mut(Register::B) = self.divide_a(operand)?,
            Instruction::Cdv => *self.reg_mut(Register::C) = self.divide_a(operand)?,
        }
        self.inst_ptr += 2;

        Ok(true)
    }

    pub fn run(&mut self, program: &[u8]) -> Result<(), Error> {
        for _ in 0..MAX_STEPS {
            if !self.step(program)? {
                return Ok(());
            }
        }

        Err(Error::StepLimit(MAX_STEPS))
    }
}

pub fn read_debug_info(input: &str) -> Result<([u64; 3], Vec<u8>), Error> {
    let mut lines = input.lines().map(str::trim).filter(|l| !l.is_empty());
    let mut registers = [0u64; 3];
    for (reg, name) in registers.iter_mut().zip(['A', 'B', 'C']) {
        let line = lines.next().ok_or(Error::NoRegisterLine(name))?;
        *reg = read_register(name, line)?;
    }
    let program = read_program(lines.next().ok_or(Error::NoProgram)?)?;

    Ok((registers, program))
}

fn read_register(name: char, text: &str) -> Result<u64, Error> {
    let header = format!("Register {}:", name);
    text.strip_prefix(&header)
        .and_then(|value| value.trim().parse::<u64>().ok())
        .ok_or(Error::InvalidRegisterText(text.to_string()))
}

fn read_program(text: &str) -> Result<Vec<u8>, Error> {
    let code = text
        .strip_prefix("Program:")
        .ok_or(Error::InvalidProgramText(text.to_string()))?;
    code.trim()
        .split(',')
        .map(|s| {
            s.trim()
                .parse::<u8>()
                .ok()
                .filter(|n| *n < 8)
                .ok_or(Error::InvalidProgramText(text.to_string()))
        })
        .collect()
}

/// Smallest positive value of register A that makes the program print itself.
///
/// Assumes the usual shape of such programs: each loop consumes the lowest
/// three bits of A and emits one number, so A can be built three bits at a
/// time starting from the last output.
pub fn find_quine_register(registers: &[u64; 3], program: &[u8]) -> Result<u64, Error> {
    let mut candidates = vec![0u64];
    for target_ind in (0..program.len()).rev() {
        let mut next_candidates = Vec::new();
        for last_a in &candidates {
            for digit in 0..8 {
                let Some(a) = last_a.checked_mul(8).and_then(|a| a.checked_add(digit)) else {
                    continue;
                };
                let mut computer = Computer::new(&[a, registers[1], registers[2]]);
                if computer.run(program).is_ok() && computer.output() == &program[target_ind..] {
                    next_candidates.push(a);
                }
            }
        }
        next_candidates.sort_unstable();
        next_candidates.dedup();
        candidates = next_candidates;
    }

    candidates
        .into_iter()
        .filter(|a| *a > 0)
        .min()
        .ok_or(Error::NoQuine)
}

#[derive(Debug)]
pub struct Day17;

impl Solution for Day17 {
    fn part1(&self, input: &str, _mode: RunMode) -> Result<Answer> {
        let (registers, program) = read_debug_info(input)?;
        let mut computer = Computer::new(&registers);
        computer.run(&program)?;
        let output = computer
            .output()
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join(",");

        Ok(output.into())
    }

    fn part2(&self, input: &str, _mode: RunMode) -> Result<Answer> {
        let (registers, program) = read_debug_info(input)?;
        Ok(find_quine_register(&registers, &program)?.into())
    }

    fn examples(&self) -> Vec<Example> {
        vec![
            Example::new(Part::One, SAMPLE, "4,6,3,5,6,3,5,2,1,0").named("sample"),
            Example::new(Part::Two, QUINE_SAMPLE, 117440).named("quine sample"),
        ]
    }
}
