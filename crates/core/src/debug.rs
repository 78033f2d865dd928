//! Human-facing chunk disassembly.
//!
//! Output format: `NNNN LLLL <mnemonic> [operands]`, with `|` in the
//! line column when the instruction shares its predecessor's source
//! line. Used by the `--print-code` dump at end of compilation and the
//! `--trace` dump before each dispatch.

use crate::chunk::{Chunk, OpCode};
use crate::object::Heap;
use std::io::{self, Write};

pub fn disassemble_chunk(
    w: &mut impl Write,
    chunk: &Chunk,
    heap: &Heap,
    name: &str,
) -> io::Result<()> {
    writeln!(w, "== {name} ==")?;

    let mut offset = 0;
    while offset < chunk.code.len() {
        offset = disassemble_instruction(w, chunk, heap, offset)?;
    }
    Ok(())
}

/// Print one instruction and return the offset of the next.
pub fn disassemble_instruction(
    w: &mut impl Write,
    chunk: &Chunk,
    heap: &Heap,
    offset: usize,
) -> io::Result<usize> {
    write!(w, "{offset:04} ")?;
    if offset > 0 && chunk.lines[offset] == chunk.lines[offset - 1] {
        write!(w, "   | ")?;
    } else {
        write!(w, "{:4} ", chunk.lines[offset])?;
    }

    let op = match OpCode::try_from(chunk.code[offset]) {
        Ok(op) => op,
        Err(_) => {
            writeln!(w, "Unknown opcode {}", chunk.code[offset])?;
            return Ok(offset + 1);
        }
    };

    match op {
        OpCode::Constant => constant_instruction(w, "OP_CONSTANT", chunk, heap, offset),
        OpCode::Nil => simple_instruction(w, "OP_NIL", offset),
        OpCode::True => simple_instruction(w, "OP_TRUE", offset),
        OpCode::False => simple_instruction(w, "OP_FALSE", offset),
        OpCode::Pop => simple_instruction(w, "OP_POP", offset),
        OpCode::GetLocal => byte_instruction(w, "OP_GET_LOCAL", chunk, offset),
        OpCode::SetLocal => byte_instruction(w, "OP_SET_LOCAL", chunk, offset),
        OpCode::GetGlobal => constant_instruction(w, "OP_GET_GLOBAL", chunk, heap, offset),
        OpCode::DefineGlobal => {
            constant_instruction(w, "OP_DEFINE_GLOBAL", chunk, heap, offset)
        }
        OpCode::SetGlobal => constant_instruction(w, "OP_SET_GLOBAL", chunk, heap, offset),
        OpCode::Equal => simple_instruction(w, "OP_EQUAL", offset),
        OpCode::Greater => simple_instruction(w, "OP_GREATER", offset),
        OpCode::Less => simple_instruction(w, "OP_LESS", offset),
        OpCode::Add => simple_instruction(w, "OP_ADD", offset),
        OpCode::Subtract => simple_instruction(w, "OP_SUBTRACT", offset),
        OpCode::Multiply => simple_instruction(w, "OP_MULTIPLY", offset),
        OpCode::Divide => simple_instruction(w, "OP_DIVIDE", offset),
        OpCode::Not => simple_instruction(w, "OP_NOT", offset),
        OpCode::Negate => simple_instruction(w, "OP_NEGATE", offset),
        OpCode::Print => simple_instruction(w, "OP_PRINT", offset),
        OpCode::Jump => jump_instruction(w, "OP_JUMP", 1, chunk, offset),
        OpCode::JumpIfFalse => jump_instruction(w, "OP_JUMP_IF_FALSE", 1, chunk, offset),
        OpCode::Loop => jump_instruction(w, "OP_LOOP", -1, chunk, offset),
        OpCode::Call => byte_instruction(w, "OP_CALL", chunk, offset),
        OpCode::Return => simple_instruction(w, "OP_RETURN", offset),
    }
}

fn simple_instruction(w: &mut impl Write, name: &str, offset: usize) -> io::Result<usize> {
    writeln!(w, "{name}")?;
    Ok(offset + 1)
}

fn byte_instruction(
    w: &mut impl Write,
    name: &str,
    chunk: &Chunk,
    offset: usize,
) -> io::Result<usize> {
    let slot = chunk.code[offset + 1];
    writeln!(w, "{name:<16} {slot:4}")?;
    Ok(offset + 2)
}

fn constant_instruction(
    w: &mut impl Write,
    name: &str,
    chunk: &Chunk,
    heap: &Heap,
    offset: usize,
) -> io::Result<usize> {
    let constant = chunk.code[offset + 1];
    let value = chunk.constants[constant as usize];
    writeln!(w, "{name:<16} {constant:4} '{}'", value.display(heap))?;
    Ok(offset + 2)
}

fn jump_instruction(
    w: &mut impl Write,
    name: &str,
    sign: i64,
    chunk: &Chunk,
    offset: usize,
) -> io::Result<usize> {
    let jump = u16::from_be_bytes([chunk.code[offset + 1], chunk.code[offset + 2]]);
    let target = offset as i64 + 3 + sign * i64::from(jump);
    writeln!(w, "{name:<16} {offset:4} -> {target}")?;
    Ok(offset + 3)
}
