// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use strum::IntoStaticStr;

use crate::{CellId, Ranged, RuntimeError};

use super::BinaryOperator;

/// One element of the abstract syntax tree. The tree is executed by the
/// [`Evaluator`](crate::Evaluator); variables and literals are not stored in
/// the tree itself but referenced through their [`CellId`].
#[derive(Debug, Clone, PartialEq, Eq, IntoStaticStr)]
pub enum Node {
    Sequence(Vec<Node>),
    Cell(CellId),
    Assignment(Assignment),
    BinaryOp(BinaryOp),
    If(IfInstruction),
    RichIf(Vec<RichIfArm>),
    While(WhileLoop),
    RepeatUntil(RepeatUntilLoop),
    For(ForLoop),
    Read(Vec<CellId>),
    Write(Vec<WriteItem>),
}

impl Node {
    #[must_use]
    pub const fn sequence() -> Self {
        Self::Sequence(Vec::new())
    }

    /// Appends an instruction to a sequence. Every other node kind has a
    /// fixed shape and refuses.
    pub fn append(&mut self, instruction: Node) -> Result<(), RuntimeError> {
        match self {
            Self::Sequence(instructions) => {
                instructions.push(instruction);
                Ok(())
            }

            _ => Err(RuntimeError::ForbiddenOperation { node: self.name() }),
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.into()
    }
}

/// `variable = expression`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub target: CellId,
    pub expression: Box<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryOp {
    pub operator: Ranged<BinaryOperator>,
    pub lhs: Box<Node>,

    /// Absent for `non`.
    pub rhs: Option<Box<Node>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IfInstruction {
    pub condition: Box<Node>,
    pub body: Box<Node>,
}

/// One `si`/`sinonsi` arm of a chain, or the `sinon` arm when `condition` is
/// `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RichIfArm {
    pub condition: Option<Node>,
    pub body: Node,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhileLoop {
    pub condition: Box<Node>,
    pub body: Box<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepeatUntilLoop {
    pub body: Box<Node>,
    pub condition: Box<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForLoop {
    pub init: Option<Assignment>,
    pub condition: Box<Node>,
    pub step: Option<Assignment>,
    pub body: Box<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteItem {
    Expression(Node),
    String(String),
}
