//! Heap objects and the object arena.
//!
//! The [`Heap`] owns every object the compiler or VM ever allocates:
//! interned strings, compiled functions, and native function pointers.
//! Objects live in typed arenas and are addressed by small `Copy`
//! reference types; nothing is freed individually, the whole heap drops
//! at once when the VM goes away.
//!
//! Interning guarantee: for any two strings reachable from a chunk's
//! constants, the globals table, or the value stack, equal bytes imply
//! the same [`StrRef`]. The guarantee is established here, before a
//! reference escapes, so everyone else may compare strings by identity.

use crate::chunk::Chunk;
use crate::value::Value;

/// Host function installed into the globals at VM construction.
pub type NativeFn = fn(&[Value]) -> Value;

/// Reference to an interned string.
///
/// Carries the string's precomputed FNV-1a hash so tables can probe
/// without consulting the heap. Equality is identity: two `StrRef`s are
/// equal iff they index the same arena slot, which by the interning
/// guarantee means byte equality.
#[derive(Debug, Clone, Copy)]
pub struct StrRef {
    index: u32,
    hash: u32,
}

impl StrRef {
    pub fn hash(self) -> u32 {
        self.hash
    }
}

impl PartialEq for StrRef {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl Eq for StrRef {}

/// Reference to a compiled function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FnRef(u32);

/// Reference to a native function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NativeRef(u32);

#[derive(Debug)]
struct StrData {
    bytes: Box<str>,
    hash: u32,
}

/// A compiled function: its bytecode chunk, arity, and name.
///
/// The top-level script compiles to a nameless function with arity 0.
#[derive(Debug)]
pub struct Function {
    pub arity: u8,
    pub chunk: Chunk,
    pub name: Option<StrRef>,
}

impl Function {
    pub fn new() -> Self {
        Function {
            arity: 0,
            chunk: Chunk::new(),
            name: None,
        }
    }
}

impl Default for Function {
    fn default() -> Self {
        Self::new()
    }
}

/// 32-bit FNV-1a over the string's bytes.
pub fn hash_str(s: &str) -> u32 {
    let mut hash: u32 = 2166136261;
    for byte in s.bytes() {
        hash ^= u32::from(byte);
        hash = hash.wrapping_mul(16777619);
    }
    hash
}

/// The object arena plus the string interning table.
#[derive(Debug)]
pub struct Heap {
    strings: Vec<StrData>,
    functions: Vec<Function>,
    natives: Vec<NativeFn>,
    interner: Interner,
}

impl Heap {
    pub fn new() -> Self {
        Heap {
            strings: Vec::new(),
            functions: Vec::new(),
            natives: Vec::new(),
            interner: Interner::new(),
        }
    }

    /// Intern `s`, reusing the existing string object if one with equal
    /// bytes already lives in the heap.
    pub fn intern(&mut self, s: &str) -> StrRef {
        let hash = hash_str(s);
        if let Some(existing) = self.interner.find(&self.strings, s, hash) {
            return existing;
        }

        let r = StrRef {
            index: self.strings.len() as u32,
            hash,
        };
        self.strings.push(StrData {
            bytes: s.into(),
            hash,
        });
        self.interner.insert(&self.strings, r);
        r
    }

    /// Concatenate two interned strings into a (possibly pre-existing)
    /// interned result.
    pub fn concat(&mut self, a: StrRef, b: StrRef) -> StrRef {
        let mut joined =
            String::with_capacity(self.str_value(a).len() + self.str_value(b).len());
        joined.push_str(self.str_value(a));
        joined.push_str(self.str_value(b));
        self.intern(&joined)
    }

    pub fn str_value(&self, r: StrRef) -> &str {
        &self.strings[r.index as usize].bytes
    }

    pub fn alloc_function(&mut self, function: Function) -> FnRef {
        let r = FnRef(self.functions.len() as u32);
        self.functions.push(function);
        r
    }

    pub fn function(&self, r: FnRef) -> &Function {
        &self.functions[r.0 as usize]
    }

    pub fn alloc_native(&mut self, function: NativeFn) -> NativeRef {
        let r = NativeRef(self.natives.len() as u32);
        self.natives.push(function);
        r
    }

    pub fn native(&self, r: NativeRef) -> NativeFn {
        self.natives[r.0 as usize]
    }

    /// Number of distinct string objects currently alive.
    pub fn string_count(&self) -> usize {
        self.strings.len()
    }
}

impl Default for Heap {
    fn default() -> Self {
        Self::new()
    }
}

const INTERNER_INITIAL_CAPACITY: usize = 8;
const INTERNER_MAX_LOAD: f64 = 0.75;

/// Open-addressed set of interned strings, probed linearly by hash.
///
/// Slots hold `StrRef`s; the arena never shrinks and interned strings
/// are never removed, so no tombstones are needed here (unlike
/// [`Table`](crate::table::Table), whose keys can be deleted). The probe
/// below is the only place in the crate that compares string bytes.
#[derive(Debug)]
struct Interner {
    slots: Vec<Option<StrRef>>,
    count: usize,
}

impl Interner {
    fn new() -> Self {
        Interner {
            slots: Vec::new(),
            count: 0,
        }
    }

    fn find(&self, strings: &[StrData], s: &str, hash: u32) -> Option<StrRef> {
        if self.count == 0 {
            return None;
        }

        let mask = self.slots.len() - 1;
        let mut index = hash as usize & mask;
        loop {
            match self.slots[index] {
                None => return None,
                Some(existing) => {
                    let data = &strings[existing.index as usize];
                    if data.hash == hash && &*data.bytes == s {
                        return Some(existing);
                    }
                }
            }
            index = (index + 1) & mask;
        }
    }

    fn insert(&mut self, strings: &[StrData], r: StrRef) {
        if (self.count + 1) as f64 > self.slots.len() as f64 * INTERNER_MAX_LOAD {
            self.grow(strings);
        }

        let mask = self.slots.len() - 1;
        let mut index = r.hash as usize & mask;
        while self.slots[index].is_some() {
            index = (index + 1) & mask;
        }
        self.slots[index] = Some(r);
        self.count += 1;
    }

    fn grow(&mut self, strings: &[StrData]) {
        let capacity = if self.slots.is_empty() {
            INTERNER_INITIAL_CAPACITY
        } else {
            self.slots.len() * 2
        };

        let old = std::mem::replace(&mut self.slots, vec![None; capacity]);
        let mask = capacity - 1;
        for slot in old.into_iter().flatten() {
            let mut index = strings[slot.index as usize].hash as usize & mask;
            while self.slots[index].is_some() {
                index = (index + 1) & mask;
            }
            self.slots[index] = Some(slot);
        }
    }
}
