// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

mod node;
mod operator;

pub use self::{
    node::{
        Assignment,
        BinaryOp,
        ForLoop,
        IfInstruction,
        Node,
        RepeatUntilLoop,
        RichIfArm,
        WhileLoop,
        WriteItem,
    },
    operator::BinaryOperator,
};
