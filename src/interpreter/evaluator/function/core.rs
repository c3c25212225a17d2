use crate::{
    error::RuntimeError,
    interpreter::{
        env::Env,
        evaluator::{
            core::{EvalResult, Flow, Interp},
            function::{math, min_max, print, range, stats},
        },
        value::core::{FunctionValue, Value},
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives a slice of evaluated argument values and the call's
/// line number, and returns a value or a runtime error.
pub type BuiltinFn = fn(&[Value], usize) -> EvalResult<Value>;

/// Specifies the allowed number of arguments for a builtin.
///
/// - `Exact(n)` means the builtin must receive exactly `n` arguments.
/// - `OneOf(slice)` means the builtin accepts any arity listed in `slice`.
/// - `AtLeast(n)` means the builtin is variadic with a lower bound.
#[derive(Clone, Copy)]
pub enum Arity {
    Exact(usize),
    OneOf(&'static [usize]),
    AtLeast(usize),
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity
    /// constraint.
    fn check(&self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == *m,
            Self::OneOf(arr) => arr.contains(&n),
            Self::AtLeast(m) => n >= *m,
        }
    }

    /// Describes the constraint for arity error messages.
    fn describe(&self) -> String {
        match self {
            Self::Exact(m) => format!("exactly {m}"),
            Self::OneOf(arr) => arr.iter()
                                   .map(ToString::to_string)
                                   .collect::<Vec<_>>()
                                   .join(" or "),
            Self::AtLeast(m) => format!("at least {m}"),
        }
    }
}

/// One entry in the builtin table: a name, an arity constraint, and the
/// native handler.
pub struct BuiltinDef {
    /// The name the builtin is registered under.
    pub name:  &'static str,
    /// The accepted argument count(s).
    pub arity: Arity,
    /// The native handler.
    pub func:  BuiltinFn,
}

impl std::fmt::Debug for BuiltinDef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BuiltinDef")
         .field("name", &self.name)
         .finish_non_exhaustive()
    }
}

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides a string name, an arity specification, and a
/// function pointer implementing the builtin. The macro produces
/// `BUILTIN_TABLE` (the static table installed into the global frame) and
/// `BUILTIN_FUNCTIONS` (the public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        /// The full builtin table, in registration order.
        pub static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        /// Names of all builtins, aliases excluded.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "print"    => { arity: Arity::AtLeast(0), func: print::print },
    "len"      => { arity: Arity::Exact(1), func: print::len },
    "range"    => { arity: Arity::OneOf(&[1, 2]), func: range::range },
    "sum"      => { arity: Arity::Exact(1), func: stats::sum },
    "mean"     => { arity: Arity::Exact(1), func: stats::mean },
    "median"   => { arity: Arity::Exact(1), func: stats::median },
    "mode"     => { arity: Arity::Exact(1), func: stats::mode },
    "stdev"    => { arity: Arity::Exact(1), func: stats::stdev },
    "variance" => { arity: Arity::Exact(1), func: stats::variance },
    "min"      => { arity: Arity::AtLeast(1), func: |args, line| min_max::min_max("min", args, line) },
    "max"      => { arity: Arity::AtLeast(1), func: |args, line| min_max::min_max("max", args, line) },
    "sqrt"     => { arity: Arity::Exact(1), func: math::sqrt },
    "abs"      => { arity: Arity::Exact(1), func: math::abs },
    "floor"    => { arity: Arity::Exact(1), func: |args, line| math::unary_round("floor", args, line) },
    "ceil"     => { arity: Arity::Exact(1), func: |args, line| math::unary_round("ceil", args, line) },
    "round"    => { arity: Arity::Exact(1), func: |args, line| math::unary_round("round", args, line) },
    "pow"      => { arity: Arity::Exact(2), func: math::pow },
}

/// The Greek-letter aliases bound in the global frame: each is an ordinary
/// binding to the same builtin value as its spelled-out name.
pub const GREEK_ALIASES: &[(&str, &str)] = &[("Σ", "sum"), ("μ", "mean"), ("σ", "stdev")];

/// Registers every builtin and alias in the given global frame.
///
/// Builtins are first-class values: `μ` is simply a variable bound to the
/// same `<builtin:mean>` value as `mean`, and either can be shadowed with
/// `var`.
pub fn install(globals: &Env) {
    for def in BUILTIN_TABLE {
        globals.define(def.name, Value::Builtin(def));
    }
    for (alias, target) in GREEK_ALIASES {
        if let Some(value) = globals.get(target) {
            globals.define(alias, value);
        }
    }
}

impl Interp {
    /// Calls a callable value with already-evaluated arguments.
    ///
    /// Builtins check their arity constraint and run natively. User
    /// functions require an exact argument count, bind parameters in a
    /// fresh frame that is a child of the *captured* environment, and turn
    /// the `Return` signal into the call result; a body that falls off the
    /// end yields `Unit`.
    ///
    /// # Errors
    /// - `RuntimeError::Arity` on a wrong argument count.
    /// - `RuntimeError::Type` when the value is not callable.
    /// - Any error raised by the callee's body or handler.
    pub fn call_value(&self, callee: &Value, args: Vec<Value>, line: usize) -> EvalResult<Value> {
        match callee {
            Value::Builtin(def) => {
                if !def.arity.check(args.len()) {
                    return Err(RuntimeError::Arity { name:     def.name.to_string(),
                                                     expected: def.arity.describe(),
                                                     found:    args.len(),
                                                     line });
                }
                (def.func)(&args, line)
            },
            Value::Function(func) => self.call_function(func, args, line),
            other => Err(RuntimeError::Type { details: format!("{} is not callable",
                                                               other.kind()),
                                              line }),
        }
    }

    /// Executes a user-defined function body.
    fn call_function(&self,
                     func: &FunctionValue,
                     args: Vec<Value>,
                     line: usize)
                     -> EvalResult<Value> {
        if args.len() != func.params.len() {
            return Err(RuntimeError::Arity { name:     func.name.clone(),
                                             expected: format!("exactly {}", func.params.len()),
                                             found:    args.len(),
                                             line });
        }

        let frame = Env::child(&func.env);
        for (param, value) in func.params.iter().zip(args) {
            frame.define(&param.name, value);
        }

        for stmt in &func.body {
            if let Flow::Return(value) = self.exec_stmt(stmt, &frame)? {
                return Ok(value);
            }
        }
        Ok(Value::Unit)
    }
}
