use std::rc::Rc;

use crate::{
    ast::{BinaryOperator, Expr, Stmt},
    error::RuntimeError,
    interpreter::{
        env::Env,
        evaluator::{binary, function, unary},
        value::core::{FunctionValue, Value},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// The control-flow outcome of executing a statement.
///
/// `return` is a dedicated signal threaded back through the evaluator, not
/// an error: loops and conditionals propagate it unchanged, and the
/// function-call evaluator converts it into the call's result value.
#[derive(Debug)]
pub enum Flow {
    /// Execution continues with the next statement.
    Normal,
    /// A `return` is unwinding to the nearest enclosing function call.
    Return(Value),
}

/// The tree-walking interpreter.
///
/// Holds the global frame, which is populated with the built-in functions
/// and the Greek aliases at construction. All evaluation methods take the
/// current environment explicitly, because function values carry their own
/// captured environments.
pub struct Interp {
    globals: Env,
}

#[allow(clippy::new_without_default)]
impl Interp {
    /// Creates an interpreter with a fresh global frame containing the
    /// built-ins.
    #[must_use]
    pub fn new() -> Self {
        let globals = Env::global();
        function::core::install(&globals);
        Self { globals }
    }

    /// The session's global frame.
    #[must_use]
    pub const fn globals(&self) -> &Env {
        &self.globals
    }

    /// Executes a whole program against the global frame.
    ///
    /// # Errors
    /// Returns the first `RuntimeError` raised; execution stops there. A
    /// `return` at the top level is an error, since there is no call to
    /// unwind to.
    pub fn run(&self, program: &[Stmt]) -> EvalResult<()> {
        for stmt in program {
            if let Flow::Return(_) = self.exec_stmt(stmt, &self.globals)? {
                return Err(return_outside_function(stmt.line_number()));
            }
        }
        Ok(())
    }

    /// Executes a single statement in the given environment.
    ///
    /// Statements produce no value; they mutate bindings, perform I/O
    /// through built-ins, or raise the `Return` signal.
    pub fn exec_stmt(&self, stmt: &Stmt, env: &Env) -> EvalResult<Flow> {
        match stmt {
            Stmt::VarDecl { name, init, .. } => {
                let value = self.eval_expr(init, env)?;
                env.define(name, value);
                Ok(Flow::Normal)
            },
            Stmt::Assign { name, value, line } => {
                let value = self.eval_expr(value, env)?;
                if env.assign(name, value) {
                    Ok(Flow::Normal)
                } else {
                    Err(RuntimeError::Name { name: name.clone(),
                                             line: *line, })
                }
            },
            Stmt::If { condition,
                       then_block,
                       else_block,
                       .. } => {
                if self.eval_expr(condition, env)?.is_truthy() {
                    self.exec_block(then_block, env)
                } else if let Some(block) = else_block {
                    self.exec_block(block, env)
                } else {
                    Ok(Flow::Normal)
                }
            },
            Stmt::While { condition, body, .. } => {
                while self.eval_expr(condition, env)?.is_truthy() {
                    if let ret @ Flow::Return(_) = self.exec_block(body, env)? {
                        return Ok(ret);
                    }
                }
                Ok(Flow::Normal)
            },
            Stmt::For { var,
                        iterable,
                        body,
                        line, } => self.exec_for(var, iterable, body, env, *line),
            Stmt::Return { value, .. } => {
                let value = match value {
                    Some(expr) => self.eval_expr(expr, env)?,
                    None => Value::Unit,
                };
                Ok(Flow::Return(value))
            },
            Stmt::FunctionDecl { name, params, body, .. } => {
                // The environment handle is captured by reference, so the
                // function can resolve itself and later global declarations.
                let func = FunctionValue { name:   name.clone(),
                                           params: params.clone(),
                                           body:   body.clone(),
                                           env:    env.clone(), };
                env.define(name, Value::Function(Rc::new(func)));
                Ok(Flow::Normal)
            },
            Stmt::Expression { expr, .. } => {
                self.eval_expr(expr, env)?;
                Ok(Flow::Normal)
            },
        }
    }

    /// Executes a block in a fresh child frame of `env`.
    ///
    /// The `Return` signal is propagated unchanged; everything else runs to
    /// the end of the block.
    pub fn exec_block(&self, stmts: &[Stmt], env: &Env) -> EvalResult<Flow> {
        let scope = Env::child(env);
        for stmt in stmts {
            if let ret @ Flow::Return(_) = self.exec_stmt(stmt, &scope)? {
                return Ok(ret);
            }
        }
        Ok(Flow::Normal)
    }

    /// Evaluates a `for` loop.
    ///
    /// A syntactic range iterates lazily, binding each integer in turn
    /// without materializing an intermediate array. Any other iterable must
    /// evaluate to an array. Each iteration runs in its own child frame.
    fn exec_for(&self,
                var: &str,
                iterable: &Expr,
                body: &[Stmt],
                env: &Env,
                line: usize)
                -> EvalResult<Flow> {
        if let Expr::Range { lo, hi, .. } = iterable {
            let lo = self.eval_expr(lo, env)?.as_int(lo.line_number())?;
            let hi = self.eval_expr(hi, env)?.as_int(hi.line_number())?;

            for i in lo..hi {
                if let ret @ Flow::Return(_) = self.run_iteration(var, Value::Int(i), body, env)? {
                    return Ok(ret);
                }
            }
            return Ok(Flow::Normal);
        }

        match self.eval_expr(iterable, env)? {
            Value::Array(items) => {
                for item in items.iter() {
                    if let ret @ Flow::Return(_) =
                        self.run_iteration(var, item.clone(), body, env)?
                    {
                        return Ok(ret);
                    }
                }
                Ok(Flow::Normal)
            },
            other => Err(RuntimeError::Type { details: format!("cannot iterate over a {}",
                                                               other.kind()),
                                              line }),
        }
    }

    /// Runs one loop iteration with the loop variable bound in a fresh
    /// child frame.
    fn run_iteration(&self,
                     var: &str,
                     value: Value,
                     body: &[Stmt],
                     env: &Env)
                     -> EvalResult<Flow> {
        let scope = Env::child(env);
        scope.define(var, value);
        for stmt in body {
            if let ret @ Flow::Return(_) = self.exec_stmt(stmt, &scope)? {
                return Ok(ret);
            }
        }
        Ok(Flow::Normal)
    }

    /// Evaluates an expression to a value.
    ///
    /// This is the main expression dispatcher: literals, identifier lookup,
    /// array and range construction, binary and unary operators, calls, and
    /// indexing.
    pub fn eval_expr(&self, expr: &Expr, env: &Env) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, .. } => Ok(Value::from(value)),
            Expr::Ident { name, line } => {
                env.get(name).ok_or_else(|| RuntimeError::Name { name: name.clone(),
                                                                 line: *line, })
            },
            Expr::Array { elements, .. } => {
                let mut values = Vec::with_capacity(elements.len());
                for element in elements {
                    values.push(self.eval_expr(element, env)?);
                }
                Ok(values.into())
            },
            Expr::Range { lo, hi, .. } => {
                // Outside a for-loop header a range materializes eagerly.
                let lo = self.eval_expr(lo, env)?.as_int(lo.line_number())?;
                let hi = self.eval_expr(hi, env)?.as_int(hi.line_number())?;
                Ok(function::range::materialize(lo, hi))
            },
            Expr::Binary { lhs, op, rhs, line } => self.eval_binary_expr(lhs, *op, rhs, *line, env),
            Expr::Unary { op, operand, line } => {
                let value = self.eval_expr(operand, env)?;
                unary::eval_unary(*op, &value, *line)
            },
            Expr::Call { callee, args, line } => {
                let callee = self.eval_expr(callee, env)?;
                let mut arg_values = Vec::with_capacity(args.len());
                for arg in args {
                    arg_values.push(self.eval_expr(arg, env)?);
                }
                self.call_value(&callee, arg_values, *line)
            },
            Expr::Index { seq, index, line } => self.eval_index(seq, index, env, *line),
        }
    }

    /// Evaluates a binary expression.
    ///
    /// `and` and `or` short-circuit here, before the right operand is
    /// touched, and return one of their operands unchanged. Everything else
    /// evaluates both sides and goes through the operator dispatcher.
    fn eval_binary_expr(&self,
                        lhs: &Expr,
                        op: BinaryOperator,
                        rhs: &Expr,
                        line: usize,
                        env: &Env)
                        -> EvalResult<Value> {
        match op {
            BinaryOperator::And => {
                let left = self.eval_expr(lhs, env)?;
                if left.is_truthy() {
                    self.eval_expr(rhs, env)
                } else {
                    Ok(left)
                }
            },
            BinaryOperator::Or => {
                let left = self.eval_expr(lhs, env)?;
                if left.is_truthy() {
                    Ok(left)
                } else {
                    self.eval_expr(rhs, env)
                }
            },
            _ => {
                let left = self.eval_expr(lhs, env)?;
                let right = self.eval_expr(rhs, env)?;
                binary::core::eval_binary(op, &left, &right, line)
            },
        }
    }

    /// Evaluates an array indexing expression.
    ///
    /// The index must be an integer and within bounds.
    fn eval_index(&self, seq: &Expr, index: &Expr, env: &Env, line: usize) -> EvalResult<Value> {
        let seq_value = self.eval_expr(seq, env)?;
        let index_value = self.eval_expr(index, env)?.as_int(line)?;

        match seq_value {
            Value::Array(items) => {
                usize::try_from(index_value).ok()
                                            .and_then(|i| items.get(i).cloned())
                                            .ok_or(RuntimeError::IndexOutOfBounds { index:
                                                                                        index_value,
                                                                                    len:
                                                                                        items.len(),
                                                                                    line })
            },
            other => Err(RuntimeError::Type { details: format!("cannot index a {}", other.kind()),
                                              line }),
        }
    }
}

/// The error raised when a `return` reaches the top level of a program.
fn return_outside_function(line: usize) -> RuntimeError {
    RuntimeError::Type { details: "'return' used outside of a function".to_string(),
                         line }
}
