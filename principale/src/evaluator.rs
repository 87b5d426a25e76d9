// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use log::{debug, trace};

use crate::{
    Assignment, BinaryOp, BinaryOperator, CellId, Console, ForLoop, IfInstruction, Node, RepeatUntilLoop, RichIfArm, RuntimeError, SymbolTable, WhileLoop, WriteItem
};

pub type EvaluationResult = Result<i64, RuntimeError>;

/// Runs a tree produced by the [`Parser`](crate::Parser), reading and
/// writing the cells of its [`SymbolTable`].
pub struct Evaluator<'table, C: Console> {
    symbols: &'table mut SymbolTable,
    console: C,
}

impl<'table, C: Console> Evaluator<'table, C> {
    pub fn new(symbols: &'table mut SymbolTable, console: C) -> Self {
        Self {
            symbols,
            console,
        }
    }

    #[must_use]
    pub fn into_console(self) -> C {
        self.console
    }

    /// Evaluates `node` and everything below it. Instructions evaluate to 0,
    /// expressions to their value; booleans are 0 or 1.
    pub fn evaluate(&mut self, node: &Node) -> EvaluationResult {
        match node {
            Node::Sequence(instructions) => {
                for instruction in instructions {
                    self.evaluate(instruction)?;
                }
                Ok(0)
            }

            Node::Cell(id) => Ok(self.symbols.value(*id)),

            Node::Assignment(assignment) => {
                trace!("Executing Assignment to `{}`", self.symbols.get(assignment.target).name());
                self.execute_assignment(assignment)?;
                Ok(0)
            }

            Node::BinaryOp(op) => self.execute_binary_op(op),

            Node::If(instruction) => {
                trace!("Executing If");
                self.execute_if(instruction)?;
                Ok(0)
            }

            Node::RichIf(arms) => {
                trace!("Executing RichIf with {} arms", arms.len());
                self.execute_rich_if(arms)?;
                Ok(0)
            }

            Node::While(instruction) => {
                trace!("Executing While");
                self.execute_while(instruction)?;
                Ok(0)
            }

            Node::RepeatUntil(instruction) => {
                trace!("Executing RepeatUntil");
                self.execute_repeat_until(instruction)?;
                Ok(0)
            }

            Node::For(instruction) => {
                trace!("Executing For");
                self.execute_for(instruction)?;
                Ok(0)
            }

            Node::Read(cells) => {
                trace!("Executing Read of {} cells", cells.len());
                self.execute_read(cells);
                Ok(0)
            }

            Node::Write(items) => {
                trace!("Executing Write of {} items", items.len());
                self.execute_write(items)?;
                Ok(0)
            }
        }
    }

    fn execute_assignment(&mut self, assignment: &Assignment) -> Result<(), RuntimeError> {
        let value = self.evaluate(&assignment.expression)?;
        self.symbols.store(assignment.target, value);
        Ok(())
    }

    fn execute_binary_op(&mut self, op: &BinaryOp) -> EvaluationResult {
        let lhs = self.evaluate(&op.lhs)?;

        // Both sides are always evaluated, `et` and `ou` do not short-circuit.
        let rhs = match &op.rhs {
            Some(rhs) if !op.operator.is_unary() => self.evaluate(rhs)?,
            _ => 0,
        };

        Ok(match op.operator.value() {
            BinaryOperator::Add => lhs.wrapping_add(rhs),
            BinaryOperator::Subtract => lhs.wrapping_sub(rhs),
            BinaryOperator::Multiply => lhs.wrapping_mul(rhs),
            BinaryOperator::Divide => {
                if rhs == 0 {
                    return Err(RuntimeError::DivisionByZero {
                        range: op.operator.range(),
                    });
                }

                lhs.wrapping_div(rhs)
            }

            BinaryOperator::Less => (lhs < rhs) as i64,
            BinaryOperator::Greater => (lhs > rhs) as i64,
            BinaryOperator::LessOrEqual => (lhs <= rhs) as i64,
            BinaryOperator::GreaterOrEqual => (lhs >= rhs) as i64,
            BinaryOperator::Equal => (lhs == rhs) as i64,
            BinaryOperator::NotEqual => (lhs != rhs) as i64,

            BinaryOperator::And => (is_truthy(lhs) && is_truthy(rhs)) as i64,
            BinaryOperator::Or => (is_truthy(lhs) || is_truthy(rhs)) as i64,
            BinaryOperator::Not => (!is_truthy(lhs)) as i64,
        })
    }

    fn execute_if(&mut self, instruction: &IfInstruction) -> Result<(), RuntimeError> {
        if self.evaluate_condition(&instruction.condition)? {
            self.evaluate(&instruction.body)?;
        }

        Ok(())
    }

    fn execute_rich_if(&mut self, arms: &[RichIfArm]) -> Result<(), RuntimeError> {
        for arm in arms {
            let taken = match &arm.condition {
                Some(condition) => self.evaluate_condition(condition)?,
                None => true,
            };

            if taken {
                self.evaluate(&arm.body)?;
                break;
            }
        }

        Ok(())
    }

    fn execute_while(&mut self, instruction: &WhileLoop) -> Result<(), RuntimeError> {
        let mut iterations = 0_usize;

        while self.evaluate_condition(&instruction.condition)? {
            self.evaluate(&instruction.body)?;
            iterations += 1;
        }

        debug!("tantque finished after {iterations} iterations");
        Ok(())
    }

    fn execute_repeat_until(&mut self, instruction: &RepeatUntilLoop) -> Result<(), RuntimeError> {
        let mut iterations = 0_usize;

        loop {
            self.evaluate(&instruction.body)?;
            iterations += 1;

            if self.evaluate_condition(&instruction.condition)? {
                break;
            }
        }

        debug!("repeter finished after {iterations} iterations");
        Ok(())
    }

    fn execute_for(&mut self, instruction: &ForLoop) -> Result<(), RuntimeError> {
        if let Some(init) = &instruction.init {
            self.execute_assignment(init)?;
        }

        let mut iterations = 0_usize;

        while self.evaluate_condition(&instruction.condition)? {
            self.evaluate(&instruction.body)?;
            iterations += 1;

            if let Some(step) = &instruction.step {
                self.execute_assignment(step)?;
            }
        }

        debug!("pour finished after {iterations} iterations");
        Ok(())
    }

    /// `lire` shows the current value of each of its variables.
    fn execute_read(&mut self, cells: &[CellId]) {
        for id in cells {
            let value = self.symbols.value(*id);
            self.console.print_line(&value.to_string());
        }
    }

    fn execute_write(&mut self, items: &[WriteItem]) -> Result<(), RuntimeError> {
        for item in items {
            match item {
                WriteItem::Expression(expression) => {
                    let value = self.evaluate(expression)?;
                    self.console.print_line(&value.to_string());
                }

                WriteItem::String(str) => self.console.print_line(str),
            }
        }

        Ok(())
    }

    fn evaluate_condition(&mut self, condition: &Node) -> Result<bool, RuntimeError> {
        self.evaluate(condition).map(is_truthy)
    }
}

#[must_use]
pub const fn is_truthy(value: i64) -> bool {
    value != 0
}

#[cfg(test)]
mod tests {
    use crate::{FileRange, Lexer, Parser, Ranged, SourceCode};

    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn run(body: &str) -> Result<Vec<String>, (RuntimeError, Vec<String>)> {
        let source_code = SourceCode::new_test(&format!("procedure principale()\n{body}\nfinproc\n"));
        let (tokens, errors) = Lexer::new(&source_code).collect_all();
        assert!(errors.is_empty(), "Lexer errors: {errors:#?}");

        let mut parser = Parser::new(&tokens);
        let tree = parser.parse_program().unwrap_or_else(|e| panic!("Parse failed: {e}"));
        let mut symbols = parser.into_symbol_table();

        let mut evaluator = Evaluator::new(&mut symbols, Vec::new());
        match evaluator.evaluate(&tree) {
            Ok(..) => Ok(evaluator.into_console()),
            Err(e) => Err((e, evaluator.into_console())),
        }
    }

    fn expression(input: &str) -> EvaluationResult {
        let source_code = SourceCode::new_test(input);
        let (tokens, _) = Lexer::new(&source_code).collect_all();
        let mut parser = Parser::new(&tokens);
        let expression = parser.parse_expression().unwrap_or_else(|e| panic!("Parse failed: {e}"));

        let mut symbols = parser.into_symbol_table();
        Evaluator::new(&mut symbols, Vec::new()).evaluate(&expression)
    }

    #[rstest]
    #[case("2 + 3 * 4", 20)]
    #[case("2 * 3 + 4", 10)]
    #[case("10 - 2 - 3", 5)]
    #[case("7 / 2", 3)]
    #[case("-7 / 2", -3)]
    #[case("1 + 2 < 4", 1)]
    #[case("3 == 3", 1)]
    #[case("3 != 3", 0)]
    #[case("4 >= 5", 0)]
    #[case("4 <= 4", 1)]
    #[case("2 et 0", 0)]
    #[case("2 et -1", 1)]
    #[case("0 ou 5", 1)]
    #[case("0 ou 0", 0)]
    #[case("non 0", 1)]
    #[case("non 42", 0)]
    #[case("-(2 + 3)", -5)]
    #[case("--4", 4)]
    #[case("9223372036854775807 + 1", i64::MIN)]
    fn expressions(#[case] input: &str, #[case] expected: i64) {
        assert_eq!(expression(input), Ok(expected));
    }

    #[test]
    fn division_by_zero_reports_the_operator() {
        let result = expression("10 / (3 - 3)");
        let Err(RuntimeError::DivisionByZero { range }) = result else {
            panic!("Unexpected result: {result:#?}");
        };

        assert_eq!(range.start().column(), 3);
        assert_eq!(range.len(), 1);
    }

    #[test]
    fn division_by_zero_stops_the_program() {
        let (error, output) = run("ecrire ( 1 ) x = 10 / 0 ; ecrire ( 2 )").unwrap_err();

        assert_eq!(error.name(), "DivisionByZero");
        assert_eq!(output, ["1"]);
    }

    #[test]
    fn assignment_copies_the_value() {
        let output = run("x = 5 ; y = x ; x = 9 ; ecrire ( x , y )").unwrap();
        assert_eq!(output, ["9", "5"]);
    }

    #[rstest]
    #[case(0, "zero")]
    #[case(1, "un")]
    #[case(2, "deux")]
    #[case(7, "autre")]
    fn rich_if_runs_exactly_one_arm(#[case] x: i64, #[case] expected: &str) {
        let output = run(&format!("
            x = {x} ;
            si ( x == 0 ) ecrire ( \"zero\" )
            sinonsi ( x == 1 ) ecrire ( \"un\" )
            sinonsi ( x < 3 ) ecrire ( \"deux\" )
            sinon ecrire ( \"autre\" )
            finsi
        ")).unwrap();

        assert_eq!(output, [expected]);
    }

    #[test]
    fn rich_if_without_matching_arm_runs_nothing() {
        let output = run("si ( 0 ) ecrire ( 1 ) sinonsi ( 0 ) ecrire ( 2 ) finsi ecrire ( 3 )").unwrap();
        assert_eq!(output, ["3"]);
    }

    #[test]
    fn repeat_runs_at_least_once() {
        let output = run("repeter ecrire ( \"une fois\" ) jusqua ( 1 )").unwrap();
        assert_eq!(output, ["une fois"]);
    }

    #[test]
    fn repeat_until_condition_holds() {
        let output = run("i = 0 ; repeter i = i + 1 ; ecrire ( i ) jusqua ( i >= 3 )").unwrap();
        assert_eq!(output, ["1", "2", "3"]);
    }

    #[test]
    fn while_may_not_run_at_all() {
        let output = run("tantque ( 0 ) ecrire ( 1 ) fintantque ecrire ( 2 )").unwrap();
        assert_eq!(output, ["2"]);
    }

    #[test]
    fn for_loop_counts() {
        let output = run("pour ( i = 0 ; i <= 2 ; i = i + 1 ) ecrire ( i ) finpour").unwrap();
        assert_eq!(output, ["0", "1", "2"]);
    }

    #[test]
    fn for_loop_without_init_and_step() {
        let output = run("i = 3 ; pour ( ; i > 0 ; ) ecrire ( i ) i = i - 1 ; finpour").unwrap();
        assert_eq!(output, ["3", "2", "1"]);
    }

    #[test]
    fn read_shows_current_values() {
        let output = run("a = 4 ; lire ( a , b )").unwrap();
        assert_eq!(output, ["4", "0"]);
    }

    #[test]
    fn hand_built_sequence() {
        let mut symbols = SymbolTable::new();
        let x = symbols.intern_variable("x");
        let one = symbols.intern_literal("1", 1);

        let mut program = Node::sequence();
        program.append(Node::Assignment(Assignment { target: x, expression: Box::new(Node::Cell(one)) })).unwrap();
        program.append(Node::Write(vec![WriteItem::Expression(Node::Cell(x))])).unwrap();

        let mut evaluator = Evaluator::new(&mut symbols, Vec::new());
        assert_eq!(evaluator.evaluate(&program), Ok(0));
        assert_eq!(evaluator.into_console(), ["1"]);
        assert!(symbols.get(x).is_defined());
    }

    #[test]
    fn binary_without_rhs_uses_zero() {
        let mut symbols = SymbolTable::new();
        let five = symbols.intern_literal("5", 5);

        let op = Node::BinaryOp(BinaryOp {
            operator: Ranged::new(FileRange::default(), BinaryOperator::Divide),
            lhs: Box::new(Node::Cell(five)),
            rhs: None,
        });

        let result = Evaluator::new(&mut symbols, Vec::new()).evaluate(&op);
        assert_eq!(result, Err(RuntimeError::DivisionByZero { range: FileRange::default() }));
    }

    #[test]
    fn not_ignores_a_right_operand() {
        let mut symbols = SymbolTable::new();
        let one = symbols.intern_literal("1", 1);
        let zero = symbols.intern_literal("0", 0);

        let division = Node::BinaryOp(BinaryOp {
            operator: Ranged::new(FileRange::default(), BinaryOperator::Divide),
            lhs: Box::new(Node::Cell(one)),
            rhs: Some(Box::new(Node::Cell(zero))),
        });

        let not = Node::BinaryOp(BinaryOp {
            operator: Ranged::new(FileRange::default(), BinaryOperator::Not),
            lhs: Box::new(Node::Cell(zero)),
            rhs: Some(Box::new(division)),
        });

        assert_eq!(Evaluator::new(&mut symbols, Vec::new()).evaluate(&not), Ok(1));
    }

    #[test]
    fn unary_minus_shares_the_zero_literal_cell() {
        let source_code = SourceCode::new_test("0 + -x");
        let (tokens, _) = Lexer::new(&source_code).collect_all();
        let mut parser = Parser::new(&tokens);
        let expression = parser.parse_expression().unwrap();
        let mut symbols = parser.into_symbol_table();

        // `0` and `x`, the `0` of `-x` is the literal's cell
        assert_eq!(symbols.len(), 2);
        let zero = symbols.find("0").unwrap();
        assert_eq!(symbols.intern_literal("0", 0), zero);

        let x = symbols.find("x").unwrap();
        symbols.store(x, 2);

        // Literal cells are not write protected.
        symbols.store(zero, 5);

        let Node::BinaryOp(addition) = &expression else {
            panic!("Not a binary operation: {expression:#?}");
        };
        let negation = addition.rhs.as_deref().unwrap();

        let mut evaluator = Evaluator::new(&mut symbols, Vec::new());
        assert_eq!(evaluator.evaluate(negation), Ok(5 - 2));
        assert_eq!(evaluator.evaluate(&expression), Ok(5 + (5 - 2)));
    }
}
