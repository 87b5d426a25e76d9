// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::{collections::HashMap, fmt::Display};

use log::trace;
use strum::AsRefStr;

/// Stable handle to a [`Cell`] owned by a [`SymbolTable`]. Every AST node
/// that mentions the same name holds the same `CellId`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellId(usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr)]
pub enum CellKind {
    #[strum(serialize = "variable")]
    Variable,
    #[strum(serialize = "integer")]
    IntegerLiteral,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    name: String,
    kind: CellKind,
    value: i64,
    defined: bool,
}

impl Cell {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn kind(&self) -> CellKind {
        self.kind
    }

    #[must_use]
    pub const fn value(&self) -> i64 {
        self.value
    }

    /// Whether a value was ever stored. Literals are defined from the start.
    #[must_use]
    pub const fn is_defined(&self) -> bool {
        self.defined
    }
}

/// Owns one value cell per distinct variable name or integer literal text.
#[derive(Debug, Default, Clone)]
pub struct SymbolTable {
    cells: Vec<Cell>,
    by_name: HashMap<String, CellId>,
}

impl SymbolTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cell of the variable `name`, creating a zeroed, undefined
    /// one the first time the name is seen.
    pub fn intern_variable(&mut self, name: &str) -> CellId {
        self.intern(name, || Cell {
            name: name.to_string(),
            kind: CellKind::Variable,
            value: 0,
            defined: false,
        })
    }

    /// Returns the cell of the literal spelled `text`, creating it with
    /// `value` the first time the text is seen.
    ///
    /// Literal cells live alongside variable cells and are not write
    /// protected: a [`store`](Self::store) to one is seen by every other
    /// occurrence of the same literal text.
    pub fn intern_literal(&mut self, text: &str, value: i64) -> CellId {
        self.intern(text, || Cell {
            name: text.to_string(),
            kind: CellKind::IntegerLiteral,
            value,
            defined: true,
        })
    }

    fn intern(&mut self, name: &str, create: impl FnOnce() -> Cell) -> CellId {
        if let Some(id) = self.by_name.get(name) {
            return *id;
        }

        let id = CellId(self.cells.len());
        let cell = create();
        trace!("Interned {} `{}` as cell {}", cell.kind.as_ref(), cell.name, id.0);

        self.cells.push(cell);
        self.by_name.insert(name.to_string(), id);
        id
    }

    #[must_use]
    pub fn find(&self, name: &str) -> Option<CellId> {
        self.by_name.get(name).copied()
    }

    #[must_use]
    pub fn get(&self, id: CellId) -> &Cell {
        &self.cells[id.0]
    }

    #[must_use]
    pub fn value(&self, id: CellId) -> i64 {
        self.cells[id.0].value
    }

    pub fn store(&mut self, id: CellId, value: i64) {
        let cell = &mut self.cells[id.0];
        cell.value = value;
        cell.defined = true;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (CellId, &Cell)> {
        self.cells.iter()
            .enumerate()
            .map(|(index, cell)| (CellId(index), cell))
    }
}

impl Display for SymbolTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Symbol table ({} cells):", self.cells.len())?;

        for (id, cell) in self.iter() {
            write!(f, "  [{:>3}] {:<9} {:<16} ", id.0, cell.kind.as_ref(), cell.name)?;

            if cell.defined {
                writeln!(f, "{}", cell.value)?;
            } else {
                writeln!(f, "undefined")?;
            }
        }

        Ok(())
    }
}
