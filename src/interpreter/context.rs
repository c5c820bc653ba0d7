use std::collections::HashMap;

/// Declares how many arguments a function accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// The function takes exactly this many arguments.
    Exactly(usize),
    /// The function takes this many arguments or more.
    AtLeast(usize),
}

impl Arity {
    /// Returns whether a call with `count` arguments satisfies this arity.
    ///
    /// # Example
    /// ```
    /// use evalix::Arity;
    ///
    /// assert!(Arity::Exactly(2).accepts(2));
    /// assert!(!Arity::Exactly(2).accepts(1));
    /// assert!(Arity::AtLeast(1).accepts(5));
    /// ```
    #[must_use]
    pub const fn accepts(self, count: usize) -> bool {
        match self {
            Self::Exactly(expected) => count == expected,
            Self::AtLeast(expected) => count >= expected,
        }
    }
}

impl std::fmt::Display for Arity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exactly(count) => write!(f, "exactly {count}"),
            Self::AtLeast(count) => write!(f, "at least {count}"),
        }
    }
}

/// A named numeric function callable from expressions.
///
/// Couples the implementation with its declared [`Arity`]. The evaluator
/// validates the argument count against the arity before every application,
/// so implementations may index into the argument slice up to the declared
/// minimum without further checks.
#[derive(Debug, Clone, Copy)]
pub struct Function {
    arity: Arity,
    run:   fn(&[f64]) -> f64,
}

impl Function {
    /// Creates a function from its arity and implementation.
    #[must_use]
    pub const fn new(arity: Arity, run: fn(&[f64]) -> f64) -> Self {
        Self { arity, run }
    }

    /// Returns the declared arity.
    #[must_use]
    pub const fn arity(&self) -> Arity {
        self.arity
    }

    /// Applies the function to already arity-checked arguments.
    #[must_use]
    pub fn call(&self, arguments: &[f64]) -> f64 {
        (self.run)(arguments)
    }
}

/// One-argument functions registered by [`EvaluationContext::with_builtins`].
///
/// `log` is the natural logarithm.
const UNARY_BUILTINS: &[(&str, fn(&[f64]) -> f64)] = &[
    ("sin", |args| args[0].sin()),
    ("cos", |args| args[0].cos()),
    ("tan", |args| args[0].tan()),
    ("asin", |args| args[0].asin()),
    ("acos", |args| args[0].acos()),
    ("atan", |args| args[0].atan()),
    ("log", |args| args[0].ln()),
    ("sqrt", |args| args[0].sqrt()),
    ("abs", |args| args[0].abs()),
    ("floor", |args| args[0].floor()),
    ("ceil", |args| args[0].ceil()),
    ("round", |args| args[0].round()),
];

/// Variadic functions registered by [`EvaluationContext::with_builtins`].
const VARIADIC_BUILTINS: &[(&str, fn(&[f64]) -> f64)] = &[
    ("min", |args| args.iter().copied().fold(f64::INFINITY, f64::min)),
    ("max", |args| args.iter().copied().fold(f64::NEG_INFINITY, f64::max)),
];

/// Stores the read-only evaluation context.
///
/// The context binds lowercased names to numeric constants and to callable
/// functions. It is constructed once by the caller and passed by shared
/// reference through every evaluation call; the engine never mutates it, so
/// one context can back any number of concurrent evaluations.
///
/// Names are normalized to lowercase when defined. Lookups expect lowercase
/// names, which the lexer guarantees for identifier tokens.
///
/// ## Usage
/// ```
/// use evalix::{Arity, EvaluationContext, Function, interpret, tokenize};
///
/// let mut context = EvaluationContext::new();
/// context.define_constant("answer", 42.0);
/// context.define_function("double", Function::new(Arity::Exactly(1), |args| args[0] * 2.0));
///
/// let tokens = tokenize("double answer").unwrap();
/// assert_eq!(interpret(&tokens, &context).unwrap(), 84.0);
/// ```
pub struct EvaluationContext {
    constants: HashMap<String, f64>,
    functions: HashMap<String, Function>,
}

#[allow(clippy::new_without_default)]
impl EvaluationContext {
    /// Creates an empty context with no constants and no functions.
    #[must_use]
    pub fn new() -> Self {
        Self { constants: HashMap::new(),
               functions: HashMap::new(), }
    }

    /// Creates the reference context: the constants `pi` and `e`, the
    /// one-argument functions `sin`, `cos`, `tan`, `asin`, `acos`, `atan`,
    /// `log`, `sqrt`, `abs`, `floor`, `ceil` and `round`, and the variadic
    /// functions `min` and `max`.
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut context = Self::new();

        context.define_constant("pi", std::f64::consts::PI);
        context.define_constant("e", std::f64::consts::E);

        for (name, run) in UNARY_BUILTINS {
            context.define_function(name, Function::new(Arity::Exactly(1), *run));
        }
        for (name, run) in VARIADIC_BUILTINS {
            context.define_function(name, Function::new(Arity::AtLeast(1), *run));
        }

        context
    }

    /// Binds `name` (lowercased) to a constant value.
    pub fn define_constant(&mut self, name: &str, value: f64) {
        self.constants.insert(name.to_lowercase(), value);
    }

    /// Binds `name` (lowercased) to a function.
    pub fn define_function(&mut self, name: &str, function: Function) {
        self.functions.insert(name.to_lowercase(), function);
    }

    /// Looks up a constant by its lowercased name.
    #[must_use]
    pub fn constant(&self, name: &str) -> Option<f64> {
        self.constants.get(name).copied()
    }

    /// Looks up a function by its lowercased name.
    #[must_use]
    pub fn function(&self, name: &str) -> Option<&Function> {
        self.functions.get(name)
    }
}
